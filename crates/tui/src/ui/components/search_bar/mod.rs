pub mod hints;
mod search_bar_component;
mod state;

pub use search_bar_component::SearchBarComponent;
pub use state::SearchBarState;
