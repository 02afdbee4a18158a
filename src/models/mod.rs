//! Data models for the contact book.
//!
//! This module contains the record structure that groups a contact's
//! validated fields.

pub mod record;

pub use record::Record;
