//! # Personas Database Crate
//!
//! The persistence layer for the service. It owns the SQLite file and is the
//! only place SQL is written.
//!
//! ## Public API
//!
//! - `connect`: builds the connection pool from `DatabaseSettings`.
//! - `run_migrations`: creates the schema if it is missing.
//! - `PersonaRepository`: holds the pool and hands out request-scoped `Session`s.
//! - `Session`: one pooled connection, with the single-row Persona operations.
//!   Dropping it returns the connection to the pool.
//! - `DbError`: the error type returned from this crate.

pub mod connection;
pub mod error;
pub mod repository;

pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use repository::{PersonaRepository, PersonaRow, Session};
