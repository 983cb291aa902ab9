use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Clear, Row, Table},
    Frame,
};

use crate::{app::Mode, config::Config};

/// Centered popup listing the Normal mode keybindings.
pub struct Help {
    border: Block<'static>,
    table: Table<'static>,
}

impl Help {
    pub fn new(config: &Config) -> Self {
        let mut entries: Vec<(String, String)> = config
            .keybindings
            .get(&Mode::Normal)
            .map(|binds| {
                binds
                    .iter()
                    .map(|(keyseq, action)| {
                        (
                            crate::config::keybindings::KeyBindings::keyseq_to_string(keyseq),
                            action.describe(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
        let rows: Vec<Row<'static>> = entries
            .into_iter()
            .map(|(keyseq, desc)| Row::new(vec![keyseq, desc]))
            .collect();
        let border_style = config
            .styles
            .get(&Mode::Normal)
            .and_then(|m| m.get("help_border"))
            .copied()
            .unwrap_or_default();
        let title = Span::styled("Help", Style::default().add_modifier(Modifier::BOLD));
        Self {
            border: Block::bordered().title(title).border_style(border_style),
            table: Table::new(rows, [Constraint::Max(16), Constraint::Min(1)]),
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let vertical = Layout::vertical([Constraint::Percentage(70)]).flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Percentage(60)]).flex(Flex::Center);
        let [area] = vertical.areas(area);
        let [area] = horizontal.areas(area);
        frame.render_widget(Clear, area);
        frame.render_widget(&self.border, area);
        frame.render_widget(&self.table, self.border.inner(area));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    #[test]
    fn test_draw_lists_default_bindings() {
        let config = Config::new(None).unwrap();
        let mut help = Help::new(&config);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| help.draw(frame, frame.area()).unwrap())
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Help"));
        assert!(text.contains("Quit"));
    }
}
