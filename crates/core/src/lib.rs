//! Domain types, validation, and error definitions shared by the
//! database and API crates.

pub mod error;
pub mod product;
pub mod types;
