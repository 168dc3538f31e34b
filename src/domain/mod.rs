//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture principles.
//! It defines entities, repository interfaces, and the click-processing worker
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click counter event model
//! - [`click_worker`] - Asynchronous increment worker
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Click Processing Flow
//!
//! 1. HTTP handler resolves a code via [`crate::application::services::RedirectService`]
//! 2. [`click_event::ClickEvent`] is sent to a bounded async channel
//! 3. [`click_worker::run_click_worker`] applies increments with retry logic
//! 4. Counters are persisted via [`repositories::MappingRepository`]

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
