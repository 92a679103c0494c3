//! Application layer: the pure pricing engine and the quote service that
//! feeds it products from a `LoanTypeStore`.

pub mod engine;
pub mod service;
