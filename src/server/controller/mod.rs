//! HTTP request handlers.
//!
//! Controllers authenticate the caller, convert DTOs to service parameters, and convert
//! the returned domain models back to DTOs.

pub mod game;
