//! # Effect execution
//!
//! Translates [`Effect`]s produced by components into imperative commands
//! and runs them. This is the boundary between pure state updates and side
//! effects such as writing the recent-search store.

use std::sync::Arc;

use murmur_types::{Effect, Msg, RecentSearchParams, SearchType};
use murmur_util::format_recent_search;
use tracing::{info, warn};

use crate::app::{App, StatusLine};

/// Side-effectful commands executed outside of state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Record a submitted search and refresh the recent list.
    RecordSearch {
        params: RecentSearchParams,
        search_type: Option<SearchType>,
    },
}

/// Outcome of running a batch of effects.
#[derive(Debug, Default)]
pub struct CommandBatch {
    /// Messages to feed back into the components.
    pub messages: Vec<Msg>,
    pub quit: bool,
}

/// Convert effects into commands; `Quit` is reported separately.
pub fn from_effects(effects: Vec<Effect>) -> (Vec<Cmd>, bool) {
    let mut commands = Vec::new();
    let mut quit = false;
    for effect in effects {
        match effect {
            Effect::Search { params, search_type } => commands.push(Cmd::RecordSearch { params, search_type }),
            Effect::Quit => quit = true,
        }
    }
    (commands, quit)
}

pub fn run_from_effects(app: &mut App, effects: Vec<Effect>) -> CommandBatch {
    let (commands, quit) = from_effects(effects);
    let mut batch = CommandBatch {
        messages: Vec::new(),
        quit,
    };
    for command in commands {
        batch.messages.extend(run_cmd(app, command));
    }
    batch
}

fn run_cmd(app: &mut App, command: Cmd) -> Option<Msg> {
    match command {
        Cmd::RecordSearch { params, search_type } => {
            let query = format_recent_search(&params);
            let scope = search_type.map(|search_type| search_type.to_string()).unwrap_or_else(|| "all".into());
            info!(query = %query, scope = %scope, "Search submitted");

            let store = Arc::clone(&app.ctx.recent_searches);
            if let Err(error) = store.record(params) {
                warn!("Failed to record recent search: {}", error);
                app.set_status(StatusLine::Error(format!("Could not save recent search: {error}")));
                return None;
            }
            app.set_status(StatusLine::Info(format!("Searched {scope} for {query}")));
            match store.list() {
                Ok(recent_searches) => Some(Msg::RecentSearchesLoaded(recent_searches)),
                Err(error) => {
                    warn!("Failed to reload recent searches: {}", error);
                    None
                }
            }
        }
    }
}
