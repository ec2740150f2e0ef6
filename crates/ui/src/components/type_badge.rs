//! Coloured chip for an elemental type

use dioxus::prelude::*;
use pokedex_core::PokemonType;

/// Chip showing a type label in its colour
#[component]
pub fn TypeBadge(pokemon_type: PokemonType) -> Element {
    rsx! {
        span {
            class: "{pokemon_type.chip_class()}",
            "{pokemon_type}"
        }
    }
}
