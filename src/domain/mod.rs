//! Domain types for the contact book.
//! Defines the core data structures and errors used throughout the application.

pub mod contact;
pub mod error;

pub use contact::*;
pub use error::*;
