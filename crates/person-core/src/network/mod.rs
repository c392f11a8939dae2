//! Transport layer for the persons REST endpoint.
//!
//! - [`PersonApi`] is the seam between the mirror and whatever talks to the server
//! - [`HttpPersonApi`] is the reqwest-backed implementation

mod client;
mod traits;

pub use client::HttpPersonApi;
pub use traits::PersonApi;
