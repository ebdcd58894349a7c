//! Core types for pokedex-loader

use serde::{Deserialize, Serialize};

/// Identifier of a record in the external API
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PokemonId(pub u32);

impl PokemonId {
    /// Create a new PokemonId
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner u32 value
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for PokemonId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<PokemonId> for u32 {
    fn from(id: PokemonId) -> Self {
        id.0
    }
}

impl PartialEq<u32> for PokemonId {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for PokemonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PokemonId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Flat local record projected from one API payload
///
/// Built once by the mapper and never modified afterwards. Fields the
/// payload did not carry are `None` (or empty).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PokemonRecord {
    /// Record ID as reported by the payload
    pub id: PokemonId,
    /// Species name
    pub name: String,
    /// Height in decimetres
    pub height: Option<u32>,
    /// Weight in hectograms
    pub weight: Option<u32>,
    /// Type names in payload order
    pub categories: Vec<String>,
    /// Artwork URL, or the default sprite when no artwork exists
    pub image_url: Option<String>,
    /// Base attack stat
    pub attack: Option<u32>,
    /// Base defense stat
    pub defense: Option<u32>,
    /// Base speed stat
    pub speed: Option<u32>,
}

impl PokemonRecord {
    /// Height in metres
    pub fn height_m(&self) -> Option<f64> {
        self.height.map(|dm| f64::from(dm) / 10.0)
    }

    /// Weight in kilograms
    pub fn weight_kg(&self) -> Option<f64> {
        self.weight.map(|hg| f64::from(hg) / 10.0)
    }

    /// Card number, zero-padded to three digits (`#001`)
    pub fn display_number(&self) -> String {
        format!("#{:03}", self.id.0)
    }
}

/// Half-open ID range `[start, start + count)` covered by one batch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    /// First ID of the range
    pub start: PokemonId,
    /// Number of IDs in the range
    pub count: usize,
}

impl PageRange {
    /// Create a range of `count` IDs starting at `start`
    pub fn new(start: u32, count: usize) -> Self {
        Self {
            start: PokemonId(start),
            count,
        }
    }

    /// IDs covered by the range, in ascending order
    ///
    /// Stops early at the end of the ID space; see [`PageRange::fits`].
    pub fn ids(&self) -> impl Iterator<Item = PokemonId> + use<> {
        let start = self.start.0;
        (0..self.count).map_while(move |i| {
            u32::try_from(i)
                .ok()
                .and_then(|i| start.checked_add(i))
                .map(PokemonId)
        })
    }

    /// First ID after the range, or `None` when it does not fit in the ID space
    pub fn end(&self) -> Option<PokemonId> {
        u32::try_from(self.count)
            .ok()
            .and_then(|count| self.start.0.checked_add(count))
            .map(PokemonId)
    }

    /// True when every ID of the range is representable
    ///
    /// A range ending exactly at `u32::MAX` fits even though its
    /// [`end`](PageRange::end) does not exist.
    pub fn fits(&self) -> bool {
        match self.count.checked_sub(1) {
            None => true,
            Some(last) => u32::try_from(last)
                .ok()
                .and_then(|last| self.start.0.checked_add(last))
                .is_some(),
        }
    }

    /// True when the range covers no IDs
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl std::fmt::Display for PageRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let end = u64::from(self.start.0).saturating_add(self.count as u64);
        write!(f, "[{}, {})", self.start, end)
    }
}

/// Event emitted by the loader
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A batch request started
    BatchStarted {
        /// IDs requested
        range: PageRange,
    },

    /// A batch finished and its records were rendered
    BatchLoaded {
        /// IDs requested
        range: PageRange,
        /// Number of records rendered
        count: usize,
    },

    /// A batch failed; nothing was rendered
    LoadFailed {
        /// IDs requested
        range: PageRange,
        /// Error message
        error: String,
    },
}
