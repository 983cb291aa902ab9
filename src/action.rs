use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{app::Mode, command::CommandKind};

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    ClearScreen,
    Error(String),
    Help,
    CloseHelp,
    ChangeMode(Mode),
    /// Fire the command object wired under this kind.
    Command(CommandKind),
}

impl Action {
    /// Short human readable description, used by the help screen.
    pub fn describe(&self) -> String {
        match self {
            Action::Quit => "Quit".to_string(),
            Action::Suspend => "Suspend to the shell".to_string(),
            Action::Help => "Show this help".to_string(),
            Action::CloseHelp => "Close the help screen".to_string(),
            Action::Command(kind) => kind.describe().to_string(),
            other => other.to_string(),
        }
    }
}
