use crate::domain::a001_pokemon::ui::randomizer::RandomizerPage;
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!("App created (api: {})", config.api.base_url);

    // Config is read by the randomizer and the footer.
    provide_context(config);

    on_cleanup(|| log::info!("App disposed"));

    view! {
        <Shell>
            <RandomizerPage />
        </Shell>
    }
}
