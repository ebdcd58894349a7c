//! Projection of raw API payloads into [`PokemonRecord`]s.
//!
//! The raw types accept any shape the provider sends inside a JSON object:
//! every field is optional, unknown fields are ignored, and a field of the
//! wrong type (`null` containers, a string where a number belongs) reads as
//! absent. A malformed payload maps to a record with empty fields instead of
//! failing the batch. Only a body that is not a JSON object is an error; see
//! [`parse_payload`].

use crate::error::{Error, Result};
use crate::types::{PokemonId, PokemonRecord};
use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

/// Positions of the stats in the provider's list, used only when the list
/// carries no stat names.
const ATTACK_INDEX: usize = 1;
const DEFENSE_INDEX: usize = 2;
const SPEED_INDEX: usize = 5;

/// Raw record payload as returned by `GET {base}/{id}`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawPokemon {
    /// Record ID
    #[serde(deserialize_with = "lenient")]
    pub id: Option<u32>,
    /// Species name
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Height in decimetres
    #[serde(deserialize_with = "lenient")]
    pub height: Option<u32>,
    /// Weight in hectograms
    #[serde(deserialize_with = "lenient")]
    pub weight: Option<u32>,
    /// Type slots
    #[serde(deserialize_with = "lenient_list")]
    pub types: Vec<RawTypeSlot>,
    /// Sprite URLs
    #[serde(deserialize_with = "lenient")]
    pub sprites: RawSprites,
    /// Base stats
    #[serde(deserialize_with = "lenient_list")]
    pub stats: Vec<RawStat>,
}

/// One entry of the `types` list
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawTypeSlot {
    /// The type reference
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient")]
    pub kind: RawNamedResource,
}

/// A `{ "name": ... }` reference
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawNamedResource {
    /// Resource name
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// The `sprites` object
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSprites {
    /// Default front sprite
    #[serde(deserialize_with = "lenient")]
    pub front_default: Option<String>,
    /// Alternative artwork sets
    #[serde(deserialize_with = "lenient")]
    pub other: RawOtherSprites,
}

/// The `sprites.other` object
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawOtherSprites {
    /// High resolution artwork
    #[serde(rename = "official-artwork")]
    #[serde(deserialize_with = "lenient")]
    pub official_artwork: RawArtwork,
}

/// The `sprites.other["official-artwork"]` object
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawArtwork {
    /// Artwork URL
    #[serde(deserialize_with = "lenient")]
    pub front_default: Option<String>,
}

/// One entry of the `stats` list
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawStat {
    /// Base value of the stat
    #[serde(deserialize_with = "lenient")]
    pub base_stat: Option<u32>,
    /// Which stat this is
    #[serde(deserialize_with = "lenient")]
    pub stat: RawNamedResource,
}

/// Decode a response body into a raw payload
///
/// # Errors
/// Returns [`Error::Serialization`] when the body is not JSON or its top
/// level is not an object. Any object decodes, whatever its fields hold.
pub fn parse_payload(body: &[u8]) -> Result<RawPokemon> {
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(Error::Serialization(serde_json::Error::custom(
            "record payload is not a JSON object",
        )));
    }
    Ok(RawPokemon::deserialize(value)?)
}

/// Map a raw payload into a local record
pub fn map_record(raw: RawPokemon) -> PokemonRecord {
    let categories = raw
        .types
        .into_iter()
        .filter_map(|slot| slot.kind.name)
        .collect();

    let image_url = non_empty(raw.sprites.other.official_artwork.front_default)
        .or_else(|| non_empty(raw.sprites.front_default));

    PokemonRecord {
        id: PokemonId(raw.id.unwrap_or_default()),
        name: raw.name.unwrap_or_default(),
        height: raw.height,
        weight: raw.weight,
        categories,
        image_url,
        attack: stat_value(&raw.stats, "attack", ATTACK_INDEX),
        defense: stat_value(&raw.stats, "defense", DEFENSE_INDEX),
        speed: stat_value(&raw.stats, "speed", SPEED_INDEX),
    }
}

impl From<RawPokemon> for PokemonRecord {
    fn from(raw: RawPokemon) -> Self {
        map_record(raw)
    }
}

/// Look a stat up by name; fall back to its position when the list is unnamed
fn stat_value(stats: &[RawStat], name: &str, position: usize) -> Option<u32> {
    let named = stats.iter().any(|s| s.stat.name.is_some());
    if named {
        stats
            .iter()
            .find(|s| s.stat.name.as_deref() == Some(name))
            .and_then(|s| s.base_stat)
    } else {
        stats.get(position).and_then(|s| s.base_stat)
    }
}

fn non_empty(url: Option<String>) -> Option<String> {
    url.filter(|u| !u.trim().is_empty())
}

/// Reads a field, taking its default when the value has the wrong shape
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Like [`lenient`] for lists, defaulting element by element so positions hold
fn lenient_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| T::deserialize(item).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
