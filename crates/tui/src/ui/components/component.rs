//! Component system for the search UI.
//!
//! Components own local UI behavior (viewport offsets, hit regions) and
//! render into a provided `Rect`. Shared state lives on [`App`]; side effects
//! are reported back to the runtime as [`Effect`]s instead of being performed
//! in place.

use crossterm::event::{KeyEvent, MouseEvent};
use murmur_types::{Effect, Msg};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A UI element with its own event handling and rendering.
///
/// Event handlers return the effects the runtime should execute. Rendering
/// should only draw and update render-derived state such as hit regions.
pub(crate) trait Component {
    /// Handle an application message (ticks, resizes, loaded data).
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events while this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the footer while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }
}
