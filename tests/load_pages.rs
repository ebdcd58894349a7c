//! Initial load and "load more" through the public loader API

mod common;

use common::{config_for, mount_generated, mount_status};
use pokedex_loader::{
    CardRenderer, Event, IMAGE_FALLBACK_ALT, LoadOutcome, PLACEHOLDER_IMAGE, PageRange,
    PokedexLoader, PokemonId, Renderer, ViewStatus,
};
use std::time::Duration;
use wiremock::MockServer;

#[tokio::test]
async fn test_initial_then_load_more() {
    let server = MockServer::start().await;
    mount_generated(&server, 1..=15, Duration::ZERO).await;

    let mut loader = PokedexLoader::new(config_for(&server, 1, 5)).unwrap();
    let mut renderer = CardRenderer::new();

    let first = loader.load_initial(&mut renderer).await;
    assert_eq!(first.range(), PageRange::new(1, 5));
    assert_eq!(loader.pagination().offset(), PokemonId(6));

    let second = loader.load_more(&mut renderer).await;
    assert_eq!(second.range(), PageRange::new(6, 5));

    let third = loader.load_more(&mut renderer).await;
    assert_eq!(
        third,
        LoadOutcome::Loaded {
            range: PageRange::new(11, 5),
            count: 5
        }
    );

    assert_eq!(renderer.status(), ViewStatus::Ready);
    let numbers: Vec<&str> = renderer.cards().iter().map(|c| c.number.as_str()).collect();
    assert_eq!(numbers.first(), Some(&"#001"));
    assert_eq!(numbers.last(), Some(&"#015"));
    assert_eq!(numbers.len(), 15);
}

#[tokio::test]
async fn test_failed_load_more_keeps_rendered_cards() {
    let server = MockServer::start().await;
    mount_generated(&server, 1..=7, Duration::ZERO).await;
    mount_status(&server, 8, 404).await;
    mount_generated(&server, 9..=10, Duration::ZERO).await;

    let mut loader = PokedexLoader::new(config_for(&server, 1, 5)).unwrap();
    let mut events = loader.subscribe();
    let mut renderer = CardRenderer::new();

    assert!(loader.load_initial(&mut renderer).await.is_loaded());
    let outcome = loader.load_more(&mut renderer).await;

    assert_eq!(
        outcome,
        LoadOutcome::Failed {
            range: PageRange::new(6, 5)
        }
    );
    assert_eq!(renderer.status(), ViewStatus::Error);
    assert_eq!(renderer.cards().len(), 5);
    // The failed page is still consumed
    assert_eq!(loader.pagination().offset(), PokemonId(11));

    let mut failures = 0;
    while let Ok(event) = events.try_recv() {
        if let Event::LoadFailed { range, error } = event {
            assert_eq!(range, PageRange::new(6, 5));
            assert!(error.contains("404"), "unexpected message: {error}");
            failures += 1;
        }
    }
    assert_eq!(failures, 1);
}

#[tokio::test]
async fn test_retrying_same_page_when_not_advancing() {
    let server = MockServer::start().await;
    mount_status(&server, 1, 500).await;

    let mut config = config_for(&server, 1, 1);
    config.pagination.advance_on_failure = false;
    let mut loader = PokedexLoader::new(config).unwrap();
    let mut renderer = CardRenderer::new();

    let first = loader.load_initial(&mut renderer).await;
    let second = loader.load_initial(&mut renderer).await;
    assert_eq!(first.range(), second.range());
    assert_eq!(loader.pagination().offset(), PokemonId(1));
}

#[tokio::test]
async fn test_image_failure_after_load() {
    let server = MockServer::start().await;
    mount_generated(&server, 1..=3, Duration::ZERO).await;

    let mut loader = PokedexLoader::new(config_for(&server, 1, 3)).unwrap();
    let mut renderer = CardRenderer::new();
    loader.load_initial(&mut renderer).await;

    let broken = renderer.cards()[0].node;
    renderer.on_image_load_failure(broken);

    let cards = renderer.cards();
    assert_eq!(cards[0].image_src, PLACEHOLDER_IMAGE);
    assert_eq!(cards[0].image_alt, IMAGE_FALLBACK_ALT);
    assert_eq!(cards[1].image_src, "https://img.example/2.png");
    assert_eq!(cards[2].image_src, "https://img.example/3.png");
}

#[tokio::test]
async fn test_start_offset_from_config() {
    let server = MockServer::start().await;
    mount_generated(&server, 151..=152, Duration::ZERO).await;

    let mut loader = PokedexLoader::new(config_for(&server, 151, 2)).unwrap();
    let mut renderer = CardRenderer::new();

    assert!(loader.load_initial(&mut renderer).await.is_loaded());
    assert_eq!(renderer.cards()[0].number, "#151");
    assert_eq!(renderer.cards()[1].number, "#152");
}
