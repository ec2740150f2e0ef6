//! In-memory record store
//!
//! Records are kept in pokedex-number order. The store is read-only for the
//! UI: it is filled once from a JSON dataset and then only queried.

use crate::error::{PokedexError, PokedexResult};
use crate::traits::Validatable;
use crate::types::{Pokemon, PokemonId};
use std::collections::BTreeMap;

/// Dataset shipped with the application
pub const BUNDLED_DATASET: &str = include_str!("../../../assets/data/pokemons.json");

/// Collection of pokemon records keyed by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pokedex {
    pokemons: BTreeMap<PokemonId, Pokemon>,
}

impl Pokedex {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the dataset shipped with the application
    pub fn bundled() -> PokedexResult<Self> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Load records from a JSON array
    ///
    /// Every record is validated; the first invalid or duplicate record
    /// aborts the load.
    pub fn from_json(json: &str) -> PokedexResult<Self> {
        let records: Vec<Pokemon> = serde_json::from_str(json)?;
        let mut pokedex = Self::new();
        for pokemon in records {
            pokedex.insert(pokemon)?;
        }
        tracing::debug!("Loaded {} pokemons", pokedex.len());
        Ok(pokedex)
    }

    /// Add a record
    pub fn insert(&mut self, pokemon: Pokemon) -> PokedexResult<()> {
        pokemon.validate()?;
        if self.pokemons.contains_key(&pokemon.id) {
            return Err(PokedexError::DuplicatePokemon(pokemon.id));
        }
        self.pokemons.insert(pokemon.id, pokemon);
        Ok(())
    }

    /// Look up a record by id
    pub fn get(&self, id: PokemonId) -> PokedexResult<&Pokemon> {
        self.pokemons
            .get(&id)
            .ok_or(PokedexError::PokemonNotFound(id))
    }

    /// All records in id order
    pub fn pokemons(&self) -> impl Iterator<Item = &Pokemon> {
        self.pokemons.values()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.pokemons.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.pokemons.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PokemonType;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"[
        {
            "id": 4,
            "name": "Salamèche",
            "hp": 28,
            "cp": 6,
            "picture": "https://assets.pokemon.com/assets/cms2/img/pokedex/detail/004.png",
            "types": ["Feu"],
            "created": "2019-06-01"
        },
        {
            "id": 1,
            "name": "Bulbizarre",
            "hp": 25,
            "cp": 5,
            "picture": "https://assets.pokemon.com/assets/cms2/img/pokedex/detail/001.png",
            "types": ["Plante", "Poison"],
            "created": "2019-06-01"
        }
    ]"#;

    #[test]
    fn test_from_json_orders_by_id() {
        let pokedex = Pokedex::from_json(SAMPLE).unwrap();
        assert_eq!(pokedex.len(), 2);

        let names: Vec<&str> = pokedex.pokemons().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bulbizarre", "Salamèche"]);

        let bulbizarre = pokedex.get(1).unwrap();
        assert_eq!(
            bulbizarre.types,
            vec![PokemonType::Plante, PokemonType::Poison]
        );
    }

    #[test]
    fn test_get_missing() {
        let pokedex = Pokedex::from_json(SAMPLE).unwrap();
        let err = pokedex.get(150).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut pokedex = Pokedex::new();
        let pokemon = Pokemon::new(7, "Carapuce")
            .with_stats(21, 4)
            .with_types([PokemonType::Eau]);

        pokedex.insert(pokemon.clone()).unwrap();
        let err = pokedex.insert(pokemon).unwrap_err();
        assert!(matches!(err, PokedexError::DuplicatePokemon(7)));
        assert_eq!(pokedex.len(), 1);
    }

    #[test]
    fn test_insert_rejects_invalid() {
        let mut pokedex = Pokedex::new();
        let err = pokedex.insert(Pokemon::new(7, "Carapuce")).unwrap_err();
        assert!(err.is_validation());
        assert!(pokedex.is_empty());
    }

    #[test]
    fn test_from_json_unknown_type() {
        let json = r#"[{"id": 1, "name": "Dracolosse", "hp": 90, "cp": 30,
            "picture": "", "types": ["Dragon"], "created": "2019-06-01"}]"#;
        let err = Pokedex::from_json(json).unwrap_err();
        assert!(matches!(err, PokedexError::JsonSerialization(_)));
        assert!(err.to_string().contains("Dragon"));
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let pokedex = Pokedex::bundled().unwrap();
        assert_eq!(pokedex.len(), 12);

        let pikachu = pokedex.get(25).unwrap();
        assert_eq!(pikachu.name, "Pikachu");
        assert_eq!(pikachu.types, vec![PokemonType::Electrik]);
    }
}
