//! # Murmur TUI Library
//!
//! Terminal search bar with a search-hint dropdown. The hint panel offers a
//! search-type chooser, filter suggestions (`from:`, `in:`, ...) and recent
//! searches, and follows keyboard navigation by scrolling the highlighted row
//! into view.
//!
//! ## Architecture
//!
//! Shared state lives on `App`; components own render-derived state and
//! report side effects as `Effect`s, which the runtime executes.

mod app;
mod cmd;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use murmur_util::{ClientConfig, Localizer, RecentSearchStore};

use crate::app::SharedCtx;

pub use ui::components::search_hint::{
    HintHandler, HintMode, HintPanel, HintProps, HintViewport, ItemExtent, ScrollBehavior, ScrollBlock, ScrollIntoView,
    ScrollIntoViewOptions,
};

/// Startup inputs for [`run`].
pub struct RunOptions {
    pub config: ClientConfig,
    pub localizer: Arc<dyn Localizer>,
    pub recent_searches: Arc<dyn RecentSearchStore>,
    /// Ask for a search type before showing suggestions.
    pub type_selection_enabled: bool,
}

/// Runs the search UI until the user quits.
///
/// # Errors
///
/// Fails when the terminal cannot be set up or restored, or drawing fails.
pub async fn run(options: RunOptions) -> Result<()> {
    let loaded = ui::theme::load(options.config.preferred_theme.as_deref());
    tracing::debug!(theme = loaded.definition.id, label = loaded.definition.label, "Theme selected");
    let ctx = SharedCtx {
        theme: loaded.theme,
        localizer: options.localizer,
        config: options.config,
        recent_searches: options.recent_searches,
    };
    ui::runtime::run_app(ctx, options.type_selection_enabled).await
}
