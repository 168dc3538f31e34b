//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Mapping`] - A short code bound to an original URL
//! - [`NewMapping`] - Insert input for a mapping
//! - [`MappingStats`] - Counter projection of a mapping

pub mod mapping;

pub use mapping::{Mapping, MappingStats, NewMapping};
