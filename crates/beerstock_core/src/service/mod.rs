//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and mapper calls into use-case level APIs.
//! - Keep callers decoupled from storage details.

pub mod beer_service;
