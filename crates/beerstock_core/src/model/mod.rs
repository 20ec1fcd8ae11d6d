//! Domain model for beer stock records.
//!
//! # Responsibility
//! - Define the storage and transfer shapes of a beer record.
//! - Keep field validation next to the shape it validates.
//!
//! # Invariants
//! - Every stored record is identified by a store-assigned `BeerId`.
//! - Deletion is a hard delete; identifiers are not recycled.

pub mod beer;
