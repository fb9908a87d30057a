//! Domain layer for the Contacts API backend.
//!
//! This crate contains:
//! - The `Contact` domain model
//! - Request and response shapes for contact operations

pub mod models;
