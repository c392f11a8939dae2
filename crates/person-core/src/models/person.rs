//! Person and note types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-assigned person identifier.
pub type PersonId = i64;

/// A note attached to a person.
///
/// The payload is opaque to the mirror and is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note(pub Value);

impl Note {
    /// Wrap an arbitrary JSON payload.
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    /// Borrow the raw payload.
    pub fn payload(&self) -> &Value {
        &self.0
    }
}

/// A person record as stored by the server.
///
/// Equality compares every field. Use [`Person::same_identity`] to compare
/// by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Assigned by the server on create; `None` until then.
    #[serde(default)]
    pub id: Option<PersonId>,
    pub name: String,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Person {
    /// Create a person that has not been stored yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            notes: Vec::new(),
        }
    }

    /// Set the id.
    pub fn with_id(mut self, id: PersonId) -> Self {
        self.id = Some(id);
        self
    }

    /// Append a note.
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Check whether both records refer to the same stored person.
    ///
    /// Two records without an id never match.
    pub fn same_identity(&self, other: &Person) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}
