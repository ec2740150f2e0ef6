//! Pokemon Edit Page
//!
//! Hosts [`PokemonForm`] for the record named in the route.

use dioxus::prelude::*;
use pokedex_core::PokemonId;

use crate::components::PokemonForm;
use crate::pages::NotFoundMessage;
use crate::state::use_pokemon;

/// Edit page for one record
#[component]
pub fn PokemonEdit(id: PokemonId) -> Element {
    match use_pokemon(id) {
        Ok(pokemon) => rsx! {
            div {
                h2 { class: "header center", "Éditer {pokemon.name}" }
                // New id, new form state
                PokemonForm { key: "{id}", pokemon }
            }
        },
        Err(e) => {
            tracing::warn!("Edit page: {}", e);
            rsx! { NotFoundMessage { message: e.to_string() } }
        }
    }
}
