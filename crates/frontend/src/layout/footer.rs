use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let source = use_context::<AppConfig>()
        .map(|config| data_source_label(&config.api.base_url))
        .unwrap_or_default();

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class="status-bar__source">{source}</span>
        </footer>
    }
}

/// "https://pokeapi.co/api/v2/pokemon" -> "Data: pokeapi.co"
fn data_source_label(base_url: &str) -> String {
    let without_scheme = base_url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(base_url);
    let host = without_scheme.split('/').next().unwrap_or(without_scheme);
    format!("Data: {}", host)
}
