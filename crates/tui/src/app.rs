//! Application state shared by the runtime and components.

use std::sync::Arc;

use murmur_types::{Effect, Msg};
use murmur_util::{ClientConfig, Localizer, RecentSearchStore, is_file_attachments_enabled};
use tracing::warn;

use crate::ui::components::search_bar::SearchBarState;
use crate::ui::theme::Theme;

/// Collaborators injected at startup.
pub struct SharedCtx {
    pub theme: Box<dyn Theme>,
    pub localizer: Arc<dyn Localizer>,
    pub config: ClientConfig,
    pub recent_searches: Arc<dyn RecentSearchStore>,
}

/// Footer message describing the outcome of the last action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Info(String),
    Error(String),
}

pub struct App {
    pub ctx: SharedCtx,
    pub search_bar: SearchBarState,
    pub status: Option<StatusLine>,
}

impl App {
    pub fn new(ctx: SharedCtx, type_selection_enabled: bool) -> Self {
        let file_search_enabled = is_file_attachments_enabled(&ctx.config);
        let mut search_bar = SearchBarState::new(type_selection_enabled, file_search_enabled);
        match ctx.recent_searches.list() {
            Ok(recent_searches) => search_bar.set_recent_searches(recent_searches),
            Err(error) => warn!("Failed to load recent searches: {}", error),
        }
        Self {
            ctx,
            search_bar,
            status: None,
        }
    }

    /// Apply an application message to shared state.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        if let Msg::RecentSearchesLoaded(recent_searches) = msg {
            self.search_bar.set_recent_searches(recent_searches.clone());
        }
        Vec::new()
    }

    pub fn set_status(&mut self, status: StatusLine) {
        self.status = Some(status);
    }
}
