//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the service layer and map errors via `AppError`.

pub mod product;
