use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::{action::Action, tui::Event};

/// A full screen element driven by the app loop: it receives terminal
/// events, is updated through actions, and draws itself every render tick.
pub trait Component {
    /// Route a terminal event. The default forwards key presses to
    /// [`handle_key_event`] and ignores the rest.
    ///
    /// [`handle_key_event`]: Component::handle_key_event
    fn handle_events(&mut self, event: Event) -> Result<Option<Action>> {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            _ => Ok(None),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key; // to appease clippy
        Ok(None)
    }

    /// Update the state of the component based on a received action.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action; // to appease clippy
        Ok(None)
    }

    /// Render the component on the screen. (REQUIRED)
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
