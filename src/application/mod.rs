//! Application layer: the actions the web layer binds requests to.
//!
//! Each action is authorized against the current user before its model is
//! validated. Validation consults collaborators only through the ports in
//! `domain::ports`, bundled in `Services`.

pub mod action;
pub mod billing;
