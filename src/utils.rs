//! Shared helpers.

pub mod path;

pub use path::FieldSource;
