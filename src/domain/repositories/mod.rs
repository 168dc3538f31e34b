//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`, and mock implementations are
//! auto-generated via `mockall` for testing.

pub mod mapping_repository;

pub use mapping_repository::MappingRepository;

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
