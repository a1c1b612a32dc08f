//! Storage backend trait abstraction
//!
//! Handlers and services depend on these async traits, not on a concrete
//! database, so the PostgreSQL and in-memory stores are interchangeable.

pub mod set;

pub use set::SetStore;
