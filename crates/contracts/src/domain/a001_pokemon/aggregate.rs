use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::FetchError;

// ============================================================================
// ID Type
// ============================================================================

/// Номер покемона в национальном покедексе (первое поколение)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PokemonId(u32);

impl PokemonId {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 151;

    pub fn new(value: u32) -> Result<Self, String> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!(
                "Pokémon id {} out of range {}..={}",
                value,
                Self::MIN,
                Self::MAX
            ))
        }
    }

    /// Uniform pick in `MIN..=MAX`; repeats across calls are allowed
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.gen_range(Self::MIN..=Self::MAX))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PokemonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Minimal projection of a Pokémon used by the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub display_name: String,
    pub image_url: String,
}

impl PokemonRecord {
    pub fn new(display_name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            image_url: image_url.into(),
        }
    }
}

// ============================================================================
// Wire DTO
// ============================================================================

/// The two fields of `GET /api/v2/pokemon/{id}` the UI consumes.
///
/// Everything is optional here so that a missing field is reported by
/// `TryFrom` instead of failing deep inside serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PokeApiPokemon {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sprites: Option<Sprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl TryFrom<PokeApiPokemon> for PokemonRecord {
    type Error = FetchError;

    fn try_from(dto: PokeApiPokemon) -> Result<Self, Self::Error> {
        let display_name = dto
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| FetchError::Parse("missing field `name`".to_string()))?;

        let image_url = dto
            .sprites
            .and_then(|s| s.front_default)
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                FetchError::Parse("missing field `sprites.front_default`".to_string())
            })?;

        Ok(Self {
            display_name,
            image_url,
        })
    }
}

/// Parse a PokeAPI response body into a record
pub fn parse_pokemon(body: &str) -> Result<PokemonRecord, FetchError> {
    let dto: PokeApiPokemon =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    PokemonRecord::try_from(dto)
}
