use crate::{
    command::{Command, CommandKind},
    components::{handle::ComponentHandle, traits::attachable::Attachable},
    session::Session,
};

/// Starts and stops playback. While the trail is running its buttons show a
/// pause glyph and are drawn highlighted; firing it on the last frame
/// rewinds first so "play" always does something useful.
pub struct TogglePlay {
    components: Vec<ComponentHandle>,
}

impl TogglePlay {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }
}

impl Command for TogglePlay {
    fn kind(&self) -> CommandKind {
        CommandKind::TogglePlay
    }

    fn run(&mut self, session: &mut Session) {
        if session.is_playing() {
            session.set_playing(false);
            return;
        }
        if session.at_end() {
            session.seek(0);
        }
        session.set_playing(true);
    }

    fn refresh(&mut self, session: &Session) {
        let label = if session.is_playing() { "||" } else { "|>" };
        for component in &self.components {
            component.set_enabled(!session.is_empty());
            component.set_active(session.is_playing());
            component.set_label(label);
        }
    }

    fn as_attachable(&mut self) -> Option<&mut dyn Attachable> {
        Some(self)
    }
}

impl Attachable for TogglePlay {
    fn add_component(&mut self, component: ComponentHandle) {
        self.components.push(component);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::trail::Trail;

    fn session() -> Session {
        Session::new(Trail::parse_text("a\n---\nb\n"))
    }

    #[test]
    fn test_toggle_and_relabel() {
        let mut session = session();
        let mut play = TogglePlay::new();
        let btn = ComponentHandle::new(CommandKind::TogglePlay.label());
        play.add_component(btn.clone());
        play.refresh(&session);
        assert!(btn.is_enabled());
        assert!(!btn.is_active());
        assert_eq!(btn.label(), "|>");

        play.run(&mut session);
        play.refresh(&session);
        assert!(session.is_playing());
        assert!(btn.is_active());
        assert_eq!(btn.label(), "||");

        play.run(&mut session);
        play.refresh(&session);
        assert!(!session.is_playing());
        assert_eq!(btn.label(), "|>");
    }

    #[test]
    fn test_play_on_last_frame_rewinds() {
        let mut session = session();
        session.seek_end();
        let mut play = TogglePlay::new();
        play.run(&mut session);
        assert_eq!(session.cursor(), 0);
        assert!(session.is_playing());
    }

    #[test]
    fn test_empty_trail_stays_disabled() {
        let mut session = Session::new(Trail::default());
        let mut play = TogglePlay::new();
        let btn = ComponentHandle::new("|>");
        play.add_component(btn.clone());
        play.run(&mut session);
        play.refresh(&session);
        assert!(!session.is_playing());
        assert!(!btn.is_enabled());
    }
}
