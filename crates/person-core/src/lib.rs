//! Person Mirror - client-side mirror of a remote person collection.
//!
//! Forwards create/update/delete/list calls to a JSON REST backend and keeps
//! an in-memory copy of the collection in step with it. After each successful
//! call the caller's notification function receives the whole local list.
//!
//! # Example
//!
//! ```rust,ignore
//! use person_mirror::{MirrorConfig, Person, PersonMirror, PersonSortingOptions};
//!
//! #[tokio::main]
//! async fn main() -> person_mirror::Result<()> {
//!     let mirror = PersonMirror::from_config(&MirrorConfig::from_env()?)?;
//!
//!     mirror
//!         .list_all(PersonSortingOptions::default(), |persons| {
//!             println!("{} persons", persons.len());
//!         })
//!         .wait()
//!         .await?;
//!
//!     // Fire and forget: the handle can simply be dropped.
//!     mirror.create(Person::new("Ada"), |persons| println!("now {}", persons.len()));
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod mirror;
pub mod models;
pub mod network;

// Re-export commonly used types
pub use config::{MirrorConfig, NetworkConfig, SortQueryPolicy};
pub use error::{MirrorError, Result};
pub use mirror::{OperationKind, PendingOperation, PersonMirror};
pub use models::{Note, Person, PersonId, PersonSortingOptions, SortField, SortingOrder};
pub use network::{HttpPersonApi, PersonApi};
