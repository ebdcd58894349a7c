//! # pokedex-loader
//!
//! Batched, paginated client for a PokeAPI-style REST endpoint.
//!
//! A page is a fixed-size range of record IDs. Every ID of the page is
//! requested concurrently, each JSON payload is projected into a flat
//! [`PokemonRecord`], and the ordered batch is handed to a [`Renderer`].
//! "Load more" requests the next range and appends it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pokedex_loader::{CardRenderer, Config, PokedexLoader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut loader = PokedexLoader::new(Config::default())?;
//!     let mut renderer = CardRenderer::new();
//!
//!     loader.load_initial(&mut renderer).await;
//!     loader.load_more(&mut renderer).await;
//!
//!     for card in renderer.cards() {
//!         println!("{card}");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Concurrent batch fetching
pub mod fetcher;
/// Top-level load operations
pub mod loader;
/// Raw payload mapping
pub mod mapper;
/// Pagination state
pub mod pagination;
/// Presentation boundary
pub mod render;
/// Core types and events
pub mod types;

// Re-export commonly used types
pub use config::{ApiConfig, Config, PaginationConfig};
pub use error::{BatchFetchError, Error, HttpStatusError, Result};
pub use fetcher::{BatchFetcher, BatchReport, ItemOutcome};
pub use loader::{LoadOutcome, PokedexLoader};
pub use mapper::{RawPokemon, map_record, parse_payload};
pub use pagination::PaginationState;
pub use render::{
    CardNode, CardRenderer, IMAGE_FALLBACK_ALT, NodeRef, PLACEHOLDER_IMAGE, RenderMode, Renderer,
    ViewStatus,
};
pub use types::{Event, PageRange, PokemonId, PokemonRecord};
