//! Repository implementations for data access.
//!
//! Provides the database operations behind the contact book.

mod contact;

pub use contact::ContactRepository;

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub(super) type DbConn = Arc<Mutex<Connection>>;
