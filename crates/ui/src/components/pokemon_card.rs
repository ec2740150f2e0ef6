//! # Pokemon Card Component
//!
//! Summary card used on the list page. Clicking the card opens the detail
//! page of the record.

use dioxus::prelude::*;
use pokedex_core::Pokemon;

use crate::app::Route;
use crate::components::TypeBadge;

#[derive(Props, Clone, PartialEq)]
pub struct PokemonCardProps {
    /// The record to show
    pub pokemon: Pokemon,

    /// Border colour applied while hovered
    #[props(default = "#009688".to_string())]
    pub border_color: String,
}

/// Summary card for one record
#[component]
pub fn PokemonCard(props: PokemonCardProps) -> Element {
    let mut hovered = use_signal(|| false);
    let pokemon = &props.pokemon;
    let border = if *hovered.read() {
        format!("border: solid 4px {};", props.border_color)
    } else {
        "border: solid 4px #f5f5f5;".to_string()
    };

    rsx! {
        div {
            class: "col s6 m4",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),

            Link {
                to: Route::PokemonDetail { id: pokemon.id },
                div {
                    class: "card horizontal",
                    style: "{border}",

                    div {
                        class: "card-image",
                        img { src: "{pokemon.picture}", alt: "{pokemon.name}" }
                    }

                    div {
                        class: "card-stacked",
                        div {
                            class: "card-content",
                            p { "{pokemon.name}" }
                            p { small { "{pokemon.formatted_created()}" } }
                            for pokemon_type in pokemon.types.iter().copied() {
                                TypeBadge { key: "{pokemon_type}", pokemon_type }
                            }
                        }
                    }
                }
            }
        }
    }
}
