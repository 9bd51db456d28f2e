use super::state::ViewState;
use contracts::domain::a001_pokemon::PokemonRecord;

pub const WELCOME_TITLE: &str = "No Pokémon Randomized Yet";
pub const WELCOME_IMAGE: &str = "public/error.svg";
pub const LOADER_TEXT: &str = "Loading...";
pub const LOADER_IMAGE: &str = "public/loading.svg";
pub const TRIGGER_LABEL: &str = "Randomize Pokémon";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonCard {
    pub title: String,
    pub image_url: String,
    pub alt: String,
}

impl From<&PokemonRecord> for PokemonCard {
    fn from(record: &PokemonRecord) -> Self {
        Self {
            title: record.display_name.to_uppercase(),
            image_url: record.image_url.clone(),
            alt: record.display_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Loader,
    Result(PokemonCard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub screen: Screen,
    pub trigger_visible: bool,
}

/// Derive what is on screen from the state alone
pub fn render(state: &ViewState) -> Presentation {
    let screen = match (state.loading, &state.result) {
        (true, _) => Screen::Loader,
        (false, None) => Screen::Welcome,
        (false, Some(record)) => Screen::Result(PokemonCard::from(record)),
    };

    Presentation {
        trigger_visible: !state.loading,
        screen,
    }
}
