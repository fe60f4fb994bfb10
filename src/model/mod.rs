//! Request and response types exchanged with API clients.

pub mod api;
pub mod game;
