//! Data layer for the Olimpo content backend.
//!
//! The content store is a managed `PostgreSQL` database holding the
//! catalogue (`entidades_mitologicas`, `seres_primordiais`,
//! `deuses_menores`), the blog, and the timeline. This crate only issues
//! read queries; there is no write path. An in-memory store with the same
//! operations backs demo mode and the API tests.
//!
//! # Modules
//!
//! - [`postgres`] -- connection pool, configuration, migrations
//! - [`content_store`] -- parameterized read queries over the content tables
//! - [`memory`] -- in-memory store with identical semantics
//! - [`sample`] -- built-in sample catalogue for demo mode
//! - [`store`] -- unified enum-dispatch handle over both backends
//! - [`error`] -- [`DbError`]

pub mod content_store;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod sample;
pub mod store;

pub use content_store::ContentStore;
pub use error::DbError;
pub use memory::MemoryStore;
pub use postgres::{PostgresConfig, PostgresPool};
pub use sample::sample_store;
pub use store::Store;
