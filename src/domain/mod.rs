//! Domain layer: monetary value objects, the loan product model, pricing
//! results and the storage port.

pub mod application;
pub mod loan_type;
pub mod money;
pub mod ports;
pub mod pricing;
