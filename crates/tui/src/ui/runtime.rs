//! Runtime: unified event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode,
//!   mouse capture).
//! - Drive a single event loop that handles input and scroll animation.
//! - Route input to the main view and execute returned `Effect`s.
//!
//! Ticking: a fast interval while the hint panel animates a scroll, a long
//! interval otherwise.
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use murmur_types::{Effect, Msg};
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, warn};

use crate::app::{App, SharedCtx};
use crate::cmd;
use crate::ui::main_component::MainView;

/// Spawn a dedicated input thread that blocks on terminal input and forwards
/// `crossterm` events over a channel. Mouse moves are throttled to one per
/// 16 ms.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    let mut last_mouse_move = Instant::now();

    std::thread::spawn(move || {
        let sixteen_ms = Duration::from_millis(16);
        loop {
            match event::poll(sixteen_ms) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(error) => {
                    warn!("Failed to poll terminal input: {}", error);
                    break;
                }
            }
            match event::read() {
                Ok(event) => {
                    let is_mouse_move = event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved);
                    if is_mouse_move {
                        if last_mouse_move.elapsed() < sixteen_ms {
                            continue;
                        }
                        last_mouse_move = Instant::now();
                    }
                    if let Err(error) = sender.blocking_send(event) {
                        warn!("Failed to send event: {}", error);
                        break;
                    }
                }
                Err(error) => {
                    warn!("Failed to read event: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Run effects until none are left. Returns `true` when the app should quit.
fn process_effects(app: &mut App, main_view: &mut MainView, mut effects: Vec<Effect>) -> bool {
    while !effects.is_empty() {
        let batch = cmd::run_from_effects(app, std::mem::take(&mut effects));
        if batch.quit {
            return true;
        }
        for msg in batch.messages {
            effects.extend(main_view.handle_message(app, msg));
        }
    }
    false
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the input
/// producer, runs the event loop, and restores the terminal on exit.
pub async fn run_app(ctx: SharedCtx, type_selection_enabled: bool) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut main_view = MainView::new();
    let mut app = App::new(ctx, type_selection_enabled);
    let mut terminal = setup_terminal()?;

    let fast_interval = Duration::from_millis(30);
    let idle_interval = Duration::from_millis(5000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let result = async {
        render(&mut terminal, &mut app, &mut main_view)?;
        loop {
            let needs_animation = main_view.is_animating();
            let target_interval = if needs_animation { fast_interval } else { idle_interval };
            if target_interval != current_interval {
                current_interval = target_interval;
                ticker = time::interval(current_interval);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            }

            let mut needs_render;
            let mut effects = Vec::new();
            tokio::select! {
                maybe_event = input_receiver.recv() => {
                    let Some(event) = maybe_event else {
                        debug!("Input channel closed");
                        break;
                    };
                    if let Event::Key(key_event) = event
                        && key_event.code == KeyCode::Char('c')
                        && key_event.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }
                    effects.extend(handle_input_event(&mut app, &mut main_view, event));
                    needs_render = true;
                }
                _ = ticker.tick() => {
                    effects.extend(main_view.handle_message(&mut app, Msg::Tick));
                    needs_render = needs_animation;
                }
                _ = signal::ctrl_c() => { break; }
            }

            if !effects.is_empty() {
                needs_render = true;
                if process_effects(&mut app, &mut main_view, effects) {
                    break;
                }
            }
            if needs_render {
                render(&mut terminal, &mut app, &mut main_view)?;
            }
        }
        Ok::<(), anyhow::Error>(())
    }
    .await;

    cleanup_terminal(&mut terminal)?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app_with;
    use murmur_types::RecentSearchParams;
    use murmur_util::ClientConfig;

    #[test]
    fn search_effects_feed_recents_back() {
        let mut app = app_with(ClientConfig::default(), false);
        let mut main_view = MainView::new();
        let quit = process_effects(
            &mut app,
            &mut main_view,
            vec![Effect::Search {
                params: RecentSearchParams::new("from: ada"),
                search_type: None,
            }],
        );
        assert!(!quit);
        assert_eq!(app.search_bar.recent_searches(), &[RecentSearchParams::new("from: ada")]);
    }

    #[test]
    fn quit_effect_stops_processing() {
        let mut app = app_with(ClientConfig::default(), false);
        let mut main_view = MainView::new();
        assert!(process_effects(&mut app, &mut main_view, vec![Effect::Quit]));
    }
}
