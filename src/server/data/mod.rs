//! Database repository layer for the catalog.
//!
//! Repositories use SeaORM entity models internally and return domain models, keeping the
//! data layer separate from business logic. The admin write path reaches storage through
//! the `GameStore` traits in `game` so it can run against the in-memory fake in tests.

pub mod game;
pub mod user;

#[cfg(test)]
pub mod fake;
