//! HTTP route handlers.

pub mod contacts;
pub mod health;
