pub mod catalog_reader;
pub mod quote_writer;
