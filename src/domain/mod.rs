//! Domain types for billing payment info and the ports the validator relies on.

pub mod country;
pub mod email;
pub mod payment_info;
pub mod ports;
pub mod user;
pub mod validation;
