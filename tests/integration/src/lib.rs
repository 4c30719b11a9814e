//! Integration test utilities for the Catale API
//!
//! Spawns the real server against the database named by `DATABASE_URL`
//! and talks to it over HTTP.

pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
