use crate::{
    command::{Command, CommandKind},
    components::{handle::ComponentHandle, traits::attachable::Attachable},
    session::Session,
};

/// The four seek commands: first, back, forward, last. One struct covers
/// them all since they only differ in where they move the cursor and at
/// which edge of the trail their buttons grey out.
pub struct Walk {
    kind: CommandKind,
    components: Vec<ComponentHandle>,
}

impl Walk {
    /// `kind` must be one of the seek kinds; [`CommandKind::TogglePlay`] is
    /// backed by [`super::TogglePlay`] instead.
    pub fn new(kind: CommandKind) -> Self {
        debug_assert!(kind != CommandKind::TogglePlay);
        Self {
            kind,
            components: Vec::new(),
        }
    }
}

impl Command for Walk {
    fn kind(&self) -> CommandKind {
        self.kind
    }

    fn run(&mut self, session: &mut Session) {
        // Manual navigation always interrupts playback.
        session.set_playing(false);
        match self.kind {
            CommandKind::First => session.seek(0),
            CommandKind::Back => {
                session.step_back();
            }
            CommandKind::Forward => {
                session.step_forward();
            }
            CommandKind::Last => session.seek_end(),
            CommandKind::TogglePlay => {}
        }
    }

    fn refresh(&mut self, session: &Session) {
        let enabled = !session.is_empty()
            && match self.kind {
                CommandKind::First | CommandKind::Back => !session.at_start(),
                _ => !session.at_end(),
            };
        for component in &self.components {
            component.set_enabled(enabled);
        }
    }

    fn as_attachable(&mut self) -> Option<&mut dyn Attachable> {
        Some(self)
    }
}

impl Attachable for Walk {
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
        Session::new(Trail::parse_text("a\n---\nb\n---\nc\n"))
    }

    #[test]
    fn test_buttons_grey_out_at_the_edges() {
        let mut session = session();
        let mut back = Walk::new(CommandKind::Back);
        let mut forward = Walk::new(CommandKind::Forward);
        let back_btn = ComponentHandle::new(CommandKind::Back.label());
        let fwd_btn = ComponentHandle::new(CommandKind::Forward.label());
        back.add_component(back_btn.clone());
        forward.add_component(fwd_btn.clone());

        back.refresh(&session);
        forward.refresh(&session);
        assert!(!back_btn.is_enabled());
        assert!(fwd_btn.is_enabled());

        forward.run(&mut session);
        forward.run(&mut session);
        back.refresh(&session);
        forward.refresh(&session);
        assert_eq!(session.cursor(), 2);
        assert!(back_btn.is_enabled());
        assert!(!fwd_btn.is_enabled());
    }

    #[test]
    fn test_all_attached_buttons_follow() {
        // The same command may be wired to several controls, e.g. a toolbar
        // button and a menu entry. Every one of them tracks the state.
        let mut session = session();
        let mut last = Walk::new(CommandKind::Last);
        let b1 = ComponentHandle::new(">|");
        let b2 = ComponentHandle::new(">|");
        last.add_component(b1.clone());
        last.add_component(b2.clone());
        last.refresh(&session);
        assert!(b1.is_enabled() && b2.is_enabled());
        last.run(&mut session);
        last.refresh(&session);
        assert!(!b1.is_enabled() && !b2.is_enabled());
    }

    #[test]
    fn test_manual_navigation_pauses_playback() {
        let mut session = session();
        session.set_playing(true);
        let mut first = Walk::new(CommandKind::First);
        first.run(&mut session);
        assert!(!session.is_playing());
    }

    #[test]
    fn test_refresh_with_empty_trail_disables_everything() {
        let session = Session::new(Trail::default());
        let mut back = Walk::new(CommandKind::Back);
        let btn = ComponentHandle::new("<");
        btn.set_enabled(true);
        back.add_component(btn.clone());
        back.refresh(&session);
        assert!(!btn.is_enabled());
    }
}
