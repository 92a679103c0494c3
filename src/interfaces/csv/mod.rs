pub mod application_reader;
