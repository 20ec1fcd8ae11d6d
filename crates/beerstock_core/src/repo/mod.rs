//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the record store contract used by the stock service.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories do not enforce name uniqueness or existence rules; the
//!   service does. SQLite additionally backs name uniqueness with a constraint.

pub mod beer_repo;
pub mod memory;
