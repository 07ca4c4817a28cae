//! Domain types shared across the Maison backend.
//!
//! Everything here is framework-free: status enums and their transition
//! rules, pricing arithmetic, role constants, and the core error type that
//! the HTTP layer maps onto status codes.

pub mod error;
pub mod pricing;
pub mod roles;
pub mod types;
pub mod workflow;
