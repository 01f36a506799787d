//! Flat-file storage layer
//!
//! Whole-document JSON read/write used by the catalog's load/save.

pub mod file_io;

pub use file_io::{read_json_optional, write_json};
