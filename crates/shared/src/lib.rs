//! Shared utilities and common types for the Contacts API backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Offset/limit pagination parameters

pub mod pagination;
