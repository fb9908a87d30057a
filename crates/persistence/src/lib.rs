//! Persistence layer for the Contacts API backend.
//!
//! This crate contains:
//! - Database connection management and table creation
//! - Entity definitions (database row mappings)
//! - Repository implementations

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
