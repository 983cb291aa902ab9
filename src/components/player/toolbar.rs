use color_eyre::Result;
use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::{
    app::Mode,
    components::{handle::ComponentHandle, traits::component::Component},
    config::Config,
};

/// Renders the wired controls as a row of buttons. The toolbar itself holds
/// no logic: it draws whatever state the commands have left on the handles.
pub struct Toolbar {
    buttons: Vec<ComponentHandle>,
    style: Style,
    disabled: Style,
    active: Style,
}

impl Toolbar {
    pub fn new(config: &Config) -> Self {
        let styles = config.styles.get(&Mode::Normal).cloned().unwrap_or_default();
        Self {
            buttons: Vec::new(),
            style: styles.get("button").copied().unwrap_or_default(),
            disabled: styles
                .get("button_disabled")
                .copied()
                .unwrap_or_else(|| Style::default().dim()),
            active: styles
                .get("button_active")
                .copied()
                .unwrap_or_else(|| Style::default().reversed()),
        }
    }

    pub fn add_button(&mut self, button: ComponentHandle) {
        self.buttons.push(button);
    }

    pub fn buttons(&self) -> &[ComponentHandle] {
        &self.buttons
    }
}

impl Component for Toolbar {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let mut spans: Vec<Span> = Vec::with_capacity(self.buttons.len() * 2);
        for button in &self.buttons {
            let style = if !button.is_enabled() {
                self.disabled
            } else if button.is_active() {
                self.active
            } else {
                self.style
            };
            spans.push(Span::styled(format!("[ {} ]", button.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.pop();
        frame.render_widget(
            Paragraph::new(Line::from(spans))
                .centered()
                .block(Block::bordered()),
            area,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    #[test]
    fn test_draw_shows_labels() {
        let mut toolbar = Toolbar::new(&Config::default());
        let a = ComponentHandle::new("|<");
        let b = ComponentHandle::new("|>");
        b.set_enabled(true);
        toolbar.add_button(a);
        toolbar.add_button(b);
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        terminal
            .draw(|frame| toolbar.draw(frame, frame.area()).unwrap())
            .unwrap();
        let row: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(row.contains("[ |< ]"));
        assert!(row.contains("[ |> ]"));
        assert_eq!(toolbar.buttons().len(), 2);
    }
}
