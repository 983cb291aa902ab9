mod playback;
mod walk;

use serde::{Deserialize, Serialize};
use strum::Display;

pub use playback::TogglePlay;
pub use walk::Walk;

use crate::{components::traits::attachable::Attachable, session::Session};

/// Names a command that keys and toolbar buttons can be wired to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum CommandKind {
    First,
    Back,
    TogglePlay,
    Forward,
    Last,
}

impl CommandKind {
    /// Initial button label. Commands may relabel their buttons later.
    pub fn label(&self) -> &'static str {
        match self {
            CommandKind::First => "|<",
            CommandKind::Back => "<",
            CommandKind::TogglePlay => "|>",
            CommandKind::Forward => ">",
            CommandKind::Last => ">|",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            CommandKind::First => "Jump to the first frame",
            CommandKind::Back => "Step one frame back",
            CommandKind::TogglePlay => "Start or stop playback",
            CommandKind::Forward => "Step one frame forward",
            CommandKind::Last => "Jump to the last frame",
        }
    }
}

/// A command object backing one toolbar entry. Commands are constructed by
/// the wiring layer before any control exists; controls are handed over
/// afterwards through [`Attachable`], which commands opt into via
/// [`as_attachable`].
///
/// [`as_attachable`]: Command::as_attachable
pub trait Command {
    fn kind(&self) -> CommandKind;

    /// Carry out the command against the session.
    fn run(&mut self, session: &mut Session);

    /// Bring any wired controls in line with the session state.
    fn refresh(&mut self, session: &Session);

    /// Commands that want handles to their controls return themselves here.
    fn as_attachable(&mut self) -> Option<&mut dyn Attachable> {
        None
    }
}

/// Builds the command object backing a toolbar entry or keybinding.
pub fn create(kind: CommandKind) -> Box<dyn Command> {
    match kind {
        CommandKind::TogglePlay => Box::new(TogglePlay::new()),
        kind => Box::new(Walk::new(kind)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_create_matches_kind() {
        for kind in [
            CommandKind::First,
            CommandKind::Back,
            CommandKind::TogglePlay,
            CommandKind::Forward,
            CommandKind::Last,
        ] {
            assert_eq!(create(kind).kind(), kind);
        }
    }

    #[test]
    fn test_every_command_accepts_controls() {
        // All built-in commands drive their buttons, so all of them opt in.
        for kind in [
            CommandKind::First,
            CommandKind::Back,
            CommandKind::TogglePlay,
            CommandKind::Forward,
            CommandKind::Last,
        ] {
            assert!(create(kind).as_attachable().is_some());
        }
    }
}
