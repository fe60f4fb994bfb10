//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They are responsible for:
//!
//! - **Business Logic**: Admin checks, name trimming, conflict detection
//! - **Orchestration**: Resolving reference names and reconciling association sets
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running each admin write in one store transaction

pub mod catalog;
pub mod game;
pub mod token;
