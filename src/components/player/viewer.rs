use color_eyre::Result;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::{app::Mode, config::Config, session::Session};

/// Shows the frame the session currently points at, with the position and
/// playback state in the border.
pub struct Viewer {
    border_style: Style,
}

impl Viewer {
    pub fn new(config: &Config) -> Self {
        Self {
            border_style: config
                .styles
                .get(&Mode::Normal)
                .and_then(|m| m.get("viewer_border"))
                .copied()
                .unwrap_or_default(),
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, session: &Session) -> Result<()> {
        let title = match session.current().and_then(|f| f.title.clone()) {
            Some(title) => format!(" {title} "),
            None => " trailview ".to_string(),
        };
        let status = if session.is_empty() {
            " empty trail ".to_string()
        } else {
            format!(
                " {}/{} {} ",
                session.cursor() + 1,
                session.len(),
                if session.is_playing() {
                    "playing"
                } else {
                    "paused"
                }
            )
        };
        let block = Block::bordered()
            .title(title)
            .title_bottom(Line::raw(status).right_aligned())
            .border_style(self.border_style);
        let text: Vec<Line> = match session.current() {
            Some(frame) => frame.lines.iter().map(|l| Line::raw(l.clone())).collect(),
            None => vec![Line::raw("This trail has no frames.")],
        };
        frame.render_widget(
            Paragraph::new(text).wrap(Wrap { trim: false }).block(block),
            area,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::trail::Trail;

    #[test]
    fn test_draw_shows_title_and_position() {
        let mut viewer = Viewer::new(&Config::default());
        let session = Session::new(Trail::parse_text("# Hello\nworld\n---\nsecond\n"));
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| viewer.draw(frame, frame.area(), &session).unwrap())
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Hello"));
        assert!(text.contains("world"));
        assert!(text.contains("1/2 paused"));
    }

    #[test]
    fn test_draw_empty_trail() {
        let mut viewer = Viewer::new(&Config::default());
        let session = Session::new(Trail::default());
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| viewer.draw(frame, frame.area(), &session).unwrap())
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("no frames"));
    }
}
