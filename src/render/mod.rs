//! Writing the filtered list to stdout.

pub mod json;

pub use json::write_entries;
