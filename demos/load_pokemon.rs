//! Load two pages from the live PokeAPI and print them as cards
//!
//! ```bash
//! RUST_LOG=pokedex_loader=debug cargo run --example load_pokemon
//! ```
//!
//! An optional first argument names a JSON config file.

use pokedex_loader::{CardRenderer, Config, Event, PokedexLoader, ViewStatus};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    let mut loader = PokedexLoader::new(config)?;
    let mut renderer = CardRenderer::new();

    let mut events = loader.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                Event::BatchStarted { range } => println!("… loading {range}"),
                Event::BatchLoaded { range, count } => println!("✓ {count} records from {range}"),
                Event::LoadFailed { range, .. } => println!("✗ could not load {range}"),
            }
        }
    });

    loader.load_initial(&mut renderer).await;
    if renderer.status() == ViewStatus::Ready {
        loader.load_more(&mut renderer).await;
    }

    match renderer.status() {
        ViewStatus::Error => println!("Error loading Pokémon"),
        _ => {
            for card in renderer.cards() {
                println!("{card}");
            }
        }
    }

    Ok(())
}
