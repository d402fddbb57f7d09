//! Adapters that move data in and out of the crate: JSON documents for
//! submissions and outcomes, CSV for country lists.

pub mod csv;
pub mod json;
