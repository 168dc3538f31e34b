//! Mapping store implementations.
//!
//! # Repositories
//!
//! - [`PgMappingRepository`] - PostgreSQL store used in production
//! - [`InMemoryMappingRepository`] - in-process store for tests

pub mod memory_mapping_repository;
pub mod pg_mapping_repository;

pub use memory_mapping_repository::InMemoryMappingRepository;
pub use pg_mapping_repository::PgMappingRepository;
