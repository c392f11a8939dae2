//! Data models for the person mirror.
//!
//! These types map directly to the JSON bodies exchanged with the persons
//! REST endpoint and are shared with the reference backend.

mod person;
mod sorting;

pub use person::*;
pub use sorting::*;
