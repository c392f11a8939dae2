//! Remote person API trait.

use crate::models::{Person, PersonSortingOptions};
use crate::Result;
use async_trait::async_trait;

/// The four remote operations the mirror depends on.
///
/// Each call is attempted exactly once. Any transport failure or non-2xx
/// status is returned as an error.
#[async_trait]
pub trait PersonApi: Send + Sync {
    /// Store a new person and return it with its assigned id.
    async fn create(&self, person: &Person) -> Result<Person>;

    /// Replace the stored person addressed by `person.id`.
    async fn update(&self, person: &Person) -> Result<Person>;

    /// Delete the stored person addressed by `person.id`.
    async fn delete(&self, person: &Person) -> Result<()>;

    /// Fetch the whole collection.
    async fn list(&self, options: &PersonSortingOptions) -> Result<Vec<Person>>;
}
