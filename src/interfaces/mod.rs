//! File-facing adapters: CSV application input, JSON catalog input and JSON
//! quote output.

pub mod csv;
pub mod json;
