//! Domain models for the Contacts API.

pub mod contact;

pub use contact::Contact;
