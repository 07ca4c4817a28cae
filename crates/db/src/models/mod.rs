//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod closure;
pub mod cta_config;
pub mod design;
pub mod interior_order;
pub mod lead;
pub mod material;
pub mod media;
pub mod milestone;
pub mod order;
pub mod project;
pub mod salesman_entry;
pub mod session;
pub mod user;
