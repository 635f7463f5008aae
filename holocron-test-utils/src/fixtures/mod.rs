//! Fixture utilities for catalog and user test data.
//!
//! Insert helpers write rows through entity active models so tests do not
//! depend on the repository layer they exercise. Factory functions build
//! in-memory model instances without touching the database.

pub mod catalog;
pub mod factory;
pub mod user;
