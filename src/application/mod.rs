//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls
//! and business rules. Services consume repository traits and provide a clean
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Code assignment
//! - [`services::redirect_service::RedirectService`] - Code resolution
//! - [`services::stats_service::StatsService`] - Counter reads

pub mod services;
