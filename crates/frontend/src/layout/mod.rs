pub mod footer;

use leptos::prelude::*;

/// Fixed vertical layout:
/// ```text
/// +-------------------+
/// |   Random Pokémon  |
/// |      content      |
/// |      Footer       |
/// +-------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <h1 class="app-layout__title">"Random Pokémon"</h1>
            <main class="app-layout__content">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
