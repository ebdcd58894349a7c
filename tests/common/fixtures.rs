//! Payload fixtures shaped like real API responses

/// Bulbasaur, trimmed to the fields the mapper reads plus some it ignores
pub const BULBASAUR: &str = r#"{
  "abilities": [{ "ability": { "name": "overgrow" }, "is_hidden": false, "slot": 1 }],
  "base_experience": 64,
  "height": 7,
  "id": 1,
  "is_default": true,
  "name": "bulbasaur",
  "order": 1,
  "sprites": {
    "back_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/back/1.png",
    "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/1.png",
    "other": {
      "dream_world": { "front_default": null },
      "official-artwork": {
        "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/1.png",
        "front_shiny": null
      }
    }
  },
  "stats": [
    { "base_stat": 45, "effort": 0, "stat": { "name": "hp" } },
    { "base_stat": 49, "effort": 0, "stat": { "name": "attack" } },
    { "base_stat": 49, "effort": 0, "stat": { "name": "defense" } },
    { "base_stat": 65, "effort": 1, "stat": { "name": "special-attack" } },
    { "base_stat": 65, "effort": 0, "stat": { "name": "special-defense" } },
    { "base_stat": 45, "effort": 0, "stat": { "name": "speed" } }
  ],
  "types": [
    { "slot": 1, "type": { "name": "grass" } },
    { "slot": 2, "type": { "name": "poison" } }
  ],
  "weight": 69
}"#;

/// Charmander without official artwork
pub const CHARMANDER_NO_ARTWORK: &str = r#"{
  "height": 6,
  "id": 4,
  "name": "charmander",
  "sprites": {
    "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/4.png",
    "other": { "official-artwork": { "front_default": null } }
  },
  "stats": [
    { "base_stat": 39, "stat": { "name": "hp" } },
    { "base_stat": 52, "stat": { "name": "attack" } },
    { "base_stat": 43, "stat": { "name": "defense" } },
    { "base_stat": 60, "stat": { "name": "special-attack" } },
    { "base_stat": 50, "stat": { "name": "special-defense" } },
    { "base_stat": 65, "stat": { "name": "speed" } }
  ],
  "types": [{ "slot": 1, "type": { "name": "fire" } }],
  "weight": 85
}"#;

/// Minimal payload for a generated record
pub fn generated_payload(id: u32) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": format!("mon-{id}"),
        "height": 10,
        "weight": 100,
        "types": [{ "slot": 1, "type": { "name": "normal" } }],
        "sprites": { "front_default": format!("https://img.example/{id}.png") }
    })
}
