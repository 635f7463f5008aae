//! Holocron: relational data layer for a Star Wars catalog.
//!
//! Persists users, planets, species, characters, and films along with the
//! favorite and film-appearance join tables linking them. Exposes plain
//! CRUD repositories and flat serialized representations; routing,
//! authentication, and validation are the calling layer's concern.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod startup;
