//! Pokemon List Page
//!
//! Landing page: every record of the pokedex as a card.

use dioxus::prelude::*;

use crate::components::PokemonCard;
use crate::state::{use_load_error, use_pokemons};

/// List of all records
#[component]
pub fn PokemonList() -> Element {
    let pokemons = use_pokemons();
    let load_error = use_load_error();

    rsx! {
        div {
            h1 { class: "header center", "Pokédex" }

            if let Some(error) = load_error {
                div {
                    class: "card-panel red accent-1",
                    "Impossible de charger le pokédex : {error}"
                }
            }

            div {
                class: "row",
                for pokemon in pokemons {
                    PokemonCard { key: "{pokemon.id}", pokemon }
                }
            }
        }
    }
}
