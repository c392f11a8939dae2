//! In-memory person storage.

use person_mirror::{Person, PersonId, PersonSortingOptions, SortField, SortingOrder};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors returned by [`PersonStore`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("A new person must not carry an id (got {0})")]
    IdProvided(PersonId),

    #[error("Path id {path} does not match body id {body}")]
    IdMismatch { path: PersonId, body: PersonId },

    #[error("Person not found: {0}")]
    NotFound(PersonId),
}

/// Person collection keyed by id. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct PersonStore {
    persons: BTreeMap<PersonId, Person>,
    next_id: PersonId,
}

impl Default for PersonStore {
    fn default() -> Self {
        Self {
            persons: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl PersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Store a new person and assign its id.
    pub fn create(&mut self, person: Person) -> Result<Person, StoreError> {
        if let Some(id) = person.id {
            return Err(StoreError::IdProvided(id));
        }
        let id = self.next_id;
        self.next_id += 1;

        let stored = person.with_id(id);
        self.persons.insert(id, stored.clone());
        Ok(stored)
    }

    /// Replace the person stored under `id`.
    ///
    /// The body may omit its id; the path id wins.
    pub fn update(&mut self, id: PersonId, person: Person) -> Result<Person, StoreError> {
        if let Some(body) = person.id {
            if body != id {
                return Err(StoreError::IdMismatch { path: id, body });
            }
        }
        let slot = self.persons.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = person.with_id(id);
        Ok(slot.clone())
    }

    /// Remove the person stored under `id`.
    pub fn delete(&mut self, id: PersonId) -> Result<Person, StoreError> {
        self.persons.remove(&id).ok_or(StoreError::NotFound(id))
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.persons.get(&id)
    }

    /// All persons in the requested order. Name ties fall back to id order.
    pub fn list(&self, options: &PersonSortingOptions) -> Vec<Person> {
        let mut persons: Vec<Person> = self.persons.values().cloned().collect();
        if options.sort_field == SortField::Name {
            // values() is already id-ordered and sort_by is stable
            persons.sort_by(|a, b| a.name.cmp(&b.name));
        }
        if options.sorting_order == SortingOrder::Descending {
            persons.reverse();
        }
        persons
    }
}
