#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc;

use shorturl::domain::click_event::ClickEvent;
use shorturl::domain::entities::NewMapping;
use shorturl::domain::repositories::MappingRepository;
use shorturl::infrastructure::persistence::InMemoryMappingRepository;
use shorturl::state::AppState;
use shorturl::utils::code_generator::CodeGenerator;

/// Deterministic generator producing 8-hex-char codes in sequence.
pub struct SequentialCodeGenerator {
    next: AtomicUsize,
}

impl SequentialCodeGenerator {
    pub fn new() -> Self {
        Self {
            next: AtomicUsize::new(0),
        }
    }
}

impl Default for SequentialCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for SequentialCodeGenerator {
    fn generate(&self) -> String {
        format!("{:08x}", self.next.fetch_add(1, Ordering::Relaxed))
    }
}

/// Builds an application state over the in-memory store with a deterministic
/// code generator. Returns the state, the store, and the click queue receiver
/// so tests can observe and apply scheduled increments.
pub fn create_test_state() -> (
    AppState,
    Arc<InMemoryMappingRepository>,
    mpsc::Receiver<ClickEvent>,
) {
    create_test_state_with_generator(Arc::new(SequentialCodeGenerator::new()))
}

pub fn create_test_state_with_generator(
    generator: Arc<dyn CodeGenerator>,
) -> (
    AppState,
    Arc<InMemoryMappingRepository>,
    mpsc::Receiver<ClickEvent>,
) {
    let repository = Arc::new(InMemoryMappingRepository::new());
    let (tx, rx) = mpsc::channel(100);

    let state = AppState::new(
        repository.clone() as Arc<dyn MappingRepository>,
        generator,
        tx,
        "http://localhost:3000".to_string(),
        10,
    );

    (state, repository, rx)
}

pub async fn create_test_mapping(
    repository: &Arc<InMemoryMappingRepository>,
    code: &str,
    url: &str,
) {
    repository
        .insert(NewMapping {
            code: code.to_string(),
            original_url: url.to_string(),
        })
        .await
        .unwrap();
}

/// Applies all queued click increments, standing in for the background worker.
///
/// Returns the number of increments applied.
pub async fn drain_click_queue(
    rx: &mut mpsc::Receiver<ClickEvent>,
    repository: &Arc<InMemoryMappingRepository>,
) -> usize {
    let mut applied = 0;
    while let Ok(event) = rx.try_recv() {
        repository.increment_clicks(&event.code).await.unwrap();
        applied += 1;
    }
    applied
}
