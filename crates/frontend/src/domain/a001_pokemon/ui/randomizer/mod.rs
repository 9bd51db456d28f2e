//! Randomizer screen
//!
//! - state.rs: ViewState and its transitions (plain data, no signals)
//! - presenter.rs: pure ViewState -> Presentation
//! - view_model.rs: reactive wrapper and the trigger command
//! - view.rs: Leptos component

pub mod presenter;
pub mod state;
mod view;
mod view_model;

pub use view::RandomizerPage;
pub use view_model::RandomizerViewModel;
