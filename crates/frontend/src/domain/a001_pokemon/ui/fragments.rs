//! The three mutually exclusive fragments of the randomizer stage

use super::randomizer::presenter::{
    PokemonCard, LOADER_IMAGE, LOADER_TEXT, WELCOME_IMAGE, WELCOME_TITLE,
};
use leptos::prelude::*;

#[component]
pub fn WelcomeView() -> impl IntoView {
    view! {
        <h2 class="fragment__title">{WELCOME_TITLE}</h2>
        <img src=WELCOME_IMAGE alt="nothing yet" class="fragment__image" />
    }
}

#[component]
pub fn LoaderView() -> impl IntoView {
    view! {
        <p class="fragment__title fragment__title--loading">{LOADER_TEXT}</p>
        <img src=LOADER_IMAGE alt="loading" class="fragment__image" />
    }
}

#[component]
pub fn ResultView(card: PokemonCard) -> impl IntoView {
    view! {
        <h2 class="fragment__title">{card.title}</h2>
        <img src=card.image_url alt=card.alt class="fragment__image" />
    }
}
