//! Reading the version list from stdin.

pub mod read;

pub use read::read_document;
