//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod cocktails;
pub mod diaries;
pub mod health;
pub mod members;
pub mod reviews;
