//! Search-hint dropdown shown under the search bar.

mod layout;
mod messages;
mod model;
mod props;
mod scroll;
mod search_hint_component;
mod viewport;

pub use props::{HintHandler, HintMode, HintProps};
pub use scroll::{ItemExtent, ScrollBehavior, ScrollBlock, ScrollIntoView, ScrollIntoViewOptions};
pub use search_hint_component::HintPanel;
pub use viewport::HintViewport;
