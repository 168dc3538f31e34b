mod common;

use std::collections::HashSet;
use std::sync::Arc;

use shorturl::domain::repositories::MappingRepository;
use shorturl::error::AppError;
use shorturl::utils::code_generator::HexCodeGenerator;

#[tokio::test]
async fn test_round_trip() {
    let (state, _repository, _rx) = common::create_test_state();

    for url in [
        "https://example.com/",
        "https://example.com/a?b=c",
        "http://localhost:8080/path",
    ] {
        let mapping = state
            .shortener_service
            .shorten_url(url.to_string())
            .await
            .unwrap();

        let resolved = state
            .redirect_service
            .resolve_url(&mapping.code)
            .await
            .unwrap();

        assert_eq!(resolved, url);
    }
}

#[tokio::test]
async fn test_concurrent_assignments_get_distinct_codes() {
    let (state, _repository, _rx) =
        common::create_test_state_with_generator(Arc::new(HexCodeGenerator));

    let mut handles = Vec::new();
    for i in 0..32 {
        let shortener = state.shortener_service.clone();
        handles.push(tokio::spawn(async move {
            let url = format!("https://example.com/page/{i}");
            let mapping = shortener.shorten_url(url.clone()).await.unwrap();
            (mapping.code, url)
        }));
    }

    let mut assigned = Vec::new();
    for handle in handles {
        assigned.push(handle.await.unwrap());
    }

    let codes: HashSet<&String> = assigned.iter().map(|(code, _)| code).collect();
    assert_eq!(codes.len(), 32);

    for (code, url) in &assigned {
        let resolved = state.redirect_service.resolve_url(code).await.unwrap();
        assert_eq!(&resolved, url);
    }
}

#[tokio::test]
async fn test_counter_monotonicity_over_sequential_resolves() {
    let (state, repository, mut rx) = common::create_test_state();

    common::create_test_mapping(&repository, "a1b2c3d4", "https://example.com/").await;

    for expected in 1..=5 {
        state
            .redirect_service
            .resolve_url("a1b2c3d4")
            .await
            .unwrap();
        common::drain_click_queue(&mut rx, &repository).await;

        let stats = repository.stats_by_code("a1b2c3d4").await.unwrap().unwrap();
        assert_eq!(stats.click_count, expected);
    }
}

#[tokio::test]
async fn test_concurrent_increments_are_never_lost() {
    let (_state, repository, _rx) = common::create_test_state();

    common::create_test_mapping(&repository, "a1b2c3d4", "https://example.com/").await;

    let mut handles = Vec::new();
    for _ in 0..100 {
        let repository = repository.clone();
        handles.push(tokio::spawn(async move {
            repository.increment_clicks("a1b2c3d4").await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let stats = repository.stats_by_code("a1b2c3d4").await.unwrap().unwrap();
    assert_eq!(stats.click_count, 100);
}

#[tokio::test]
async fn test_concurrent_resolves_all_reach_the_counter() {
    let (state, repository, mut rx) = common::create_test_state();

    common::create_test_mapping(&repository, "a1b2c3d4", "https://example.com/").await;

    let mut handles = Vec::new();
    for _ in 0..50 {
        let redirect = state.redirect_service.clone();
        handles.push(tokio::spawn(async move {
            redirect.resolve_url("a1b2c3d4").await.unwrap()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), "https://example.com/");
    }

    let applied = common::drain_click_queue(&mut rx, &repository).await;
    assert_eq!(applied, 50);

    let stats = repository.stats_by_code("a1b2c3d4").await.unwrap().unwrap();
    assert_eq!(stats.click_count, 50);
}

#[tokio::test]
async fn test_resolving_unknown_code_is_not_found() {
    let (state, _repository, _rx) = common::create_test_state();

    let result = state.redirect_service.resolve_url("doesNotExist").await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_assignment_resolution_stats_scenario() {
    let (state, repository, mut rx) = common::create_test_state();

    let mapping = state
        .shortener_service
        .shorten_url("https://example.com/page".to_string())
        .await
        .unwrap();

    assert_eq!(mapping.code.len(), 8);
    assert!(
        mapping
            .code
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    );

    let before = state.stats_service.stats_by_code(&mapping.code).await.unwrap();
    assert_eq!(before.click_count, 0);
    let t0 = before.created_at;

    let resolved = state
        .redirect_service
        .resolve_url(&mapping.code)
        .await
        .unwrap();
    assert_eq!(resolved, "https://example.com/page");

    common::drain_click_queue(&mut rx, &repository).await;

    let after = state.stats_service.stats_by_code(&mapping.code).await.unwrap();
    assert_eq!(after.click_count, 1);
    assert_eq!(after.created_at, t0);
}
