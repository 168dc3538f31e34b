//! Shared application state injected into all handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{RedirectService, ShortenerService, StatsService};
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::MappingRepository;
use crate::utils::code_generator::CodeGenerator;

/// Application state shared across all request handlers.
///
/// Services and the repository are behind `Arc`, so cloning the state per
/// request is cheap. The repository handle is kept alongside the services
/// for the health check's connectivity probe.
#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService>,
    pub redirect_service: Arc<RedirectService>,
    pub stats_service: Arc<StatsService>,
    pub mapping_repository: Arc<dyn MappingRepository>,
    pub click_sender: mpsc::Sender<ClickEvent>,
    pub base_url: String,
}

impl AppState {
    /// Builds the full service stack on top of a repository and generator.
    pub fn new(
        mapping_repository: Arc<dyn MappingRepository>,
        generator: Arc<dyn CodeGenerator>,
        click_sender: mpsc::Sender<ClickEvent>,
        base_url: String,
        max_code_attempts: usize,
    ) -> Self {
        let shortener_service = Arc::new(ShortenerService::new(
            mapping_repository.clone(),
            generator,
            max_code_attempts,
        ));
        let redirect_service = Arc::new(RedirectService::new(
            mapping_repository.clone(),
            click_sender.clone(),
        ));
        let stats_service = Arc::new(StatsService::new(mapping_repository.clone()));

        Self {
            shortener_service,
            redirect_service,
            stats_service,
            mapping_repository,
            click_sender,
            base_url,
        }
    }
}
