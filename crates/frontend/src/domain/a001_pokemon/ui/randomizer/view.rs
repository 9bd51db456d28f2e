use super::presenter::{Screen, TRIGGER_LABEL};
use super::view_model::RandomizerViewModel;
use crate::domain::a001_pokemon::ui::fragments::{LoaderView, ResultView, WelcomeView};
use crate::shared::components::button::Button;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn RandomizerPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let vm = RandomizerViewModel::new(config.api);

    on_cleanup(|| log::debug!("RandomizerPage disposed"));

    let presentation = Memo::new(move |_| vm.presentation());
    let trigger_visible = move || presentation.with(|p| p.trigger_visible);

    view! {
        <div class="randomizer">
            <div class="randomizer__stage">
                {move || match presentation.get().screen {
                    Screen::Welcome => view! { <WelcomeView /> }.into_any(),
                    Screen::Loader => view! { <LoaderView /> }.into_any(),
                    Screen::Result(card) => view! { <ResultView card=card /> }.into_any(),
                }}
            </div>
            <Show when=trigger_visible>
                <Button on_click=Callback::new(move |_| vm.trigger_command())>
                    {TRIGGER_LABEL}
                </Button>
            </Show>
        </div>
    }
}
