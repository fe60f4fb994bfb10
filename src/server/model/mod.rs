//! Server-side domain models and operation parameters.
//!
//! Domain models are converted from SeaORM entities at the repository boundary and into
//! DTOs at the controller boundary, so neither entities nor DTOs leak into the service layer.

pub mod game;
pub mod reference;
pub mod user;
