//! UI components: search bar and its hint panel.

pub mod common;
pub mod component;
pub mod search_bar;
pub mod search_hint;

pub use search_bar::SearchBarComponent;
