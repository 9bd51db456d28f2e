//! Pokémon record shared between the fetcher and the UI.
//!
//! - aggregate.rs: id, record and PokeAPI wire DTO
//! - error.rs: failures a fetch can resolve to

pub mod aggregate;
pub mod error;

pub use aggregate::{parse_pokemon, PokeApiPokemon, PokemonId, PokemonRecord, Sprites};
pub use error::FetchError;

/// Result of exactly one fetch invocation
pub type FetchOutcome = Result<PokemonRecord, FetchError>;
