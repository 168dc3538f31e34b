//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence.
//!
//! # Modules
//!
//! - [`persistence`] - Mapping store implementations

pub mod persistence;
