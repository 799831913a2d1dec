//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row, a create DTO for inserts, and the wire DTO sent to clients.

pub mod product;
