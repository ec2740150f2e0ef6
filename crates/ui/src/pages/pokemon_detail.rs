//! Pokemon Detail Page
//!
//! Read-only view of one record. The edit form lands here after a valid
//! submit.

use dioxus::prelude::*;
use pokedex_core::PokemonId;

use crate::app::Route;
use crate::components::TypeBadge;
use crate::pages::NotFoundMessage;
use crate::state::use_pokemon;

/// Detail view of one record
#[component]
pub fn PokemonDetail(id: PokemonId) -> Element {
    let pokemon = match use_pokemon(id) {
        Ok(pokemon) => pokemon,
        Err(e) => {
            tracing::warn!("Detail page: {}", e);
            return rsx! { NotFoundMessage { message: e.to_string() } };
        }
    };

    rsx! {
        div {
            class: "row",
            div {
                class: "col s12 m8 offset-m2",
                h2 { class: "header center", "{pokemon.name}" }

                div {
                    class: "card hoverable",

                    div {
                        class: "card-image",
                        img {
                            src: "{pokemon.picture}",
                            alt: "{pokemon.name}",
                            style: "width: 250px; margin: 0 auto;",
                        }
                        Link {
                            to: Route::PokemonEdit { id },
                            class: "btn btn-floating halfway-fab waves-effect waves-light",
                            "✎"
                        }
                    }

                    div {
                        class: "card-stacked",
                        div {
                            class: "card-content",
                            table {
                                class: "bordered striped",
                                tbody {
                                    tr {
                                        td { "Nom" }
                                        td { strong { "{pokemon.name}" } }
                                    }
                                    tr {
                                        td { "Points de vie" }
                                        td { strong { "{pokemon.hp}" } }
                                    }
                                    tr {
                                        td { "Dégâts" }
                                        td { strong { "{pokemon.cp}" } }
                                    }
                                    tr {
                                        td { "Types" }
                                        td {
                                            for pokemon_type in pokemon.types.iter().copied() {
                                                TypeBadge { key: "{pokemon_type}", pokemon_type }
                                            }
                                        }
                                    }
                                    tr {
                                        td { "Date de création" }
                                        td { "{pokemon.formatted_created()}" }
                                    }
                                }
                            }
                        }
                        div {
                            class: "card-action",
                            Link { to: Route::PokemonList {}, "Retour" }
                        }
                    }
                }
            }
        }
    }
}
