//! Repository implementations for database operations.

pub mod contact;

pub use contact::ContactRepository;
