mod help;
mod toolbar;
mod viewer;

use color_eyre::Result;
use help::Help;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};
use toolbar::Toolbar;
use tracing::debug;
use viewer::Viewer;

use crate::{
    action::Action,
    app::Mode,
    command::{self, Command},
    components::{handle::ComponentHandle, traits::component::Component},
    config::Config,
    session::Session,
    trail::Trail,
};

/// Root screen: the frame viewer with a toolbar underneath and an optional
/// help popup. Also the wiring layer for the command objects: it builds
/// commands and controls from the configured toolbar layout and hands each
/// command the handle(s) to its controls.
pub struct Player {
    config: Config,
    session: Session,
    commands: Vec<Box<dyn Command>>,
    toolbar: Toolbar,
    viewer: Viewer,
    help: Option<Help>,
}

impl Player {
    pub fn new(config: Config, trail: Trail) -> Self {
        let session = Session::new(trail);
        let mut toolbar = Toolbar::new(&config);
        let mut commands: Vec<Box<dyn Command>> = Vec::new();
        for kind in &config.toolbar {
            let mut cmd = command::create(*kind);
            let button = ComponentHandle::new(kind.label());
            toolbar.add_button(button.clone());
            // Commands that asked for their controls get the handle now,
            // before anything can fire them.
            if let Some(attachable) = cmd.as_attachable() {
                attachable.add_component(button);
            }
            cmd.refresh(&session);
            commands.push(cmd);
        }
        Self {
            viewer: Viewer::new(&config),
            config,
            session,
            commands,
            toolbar,
            help: None,
        }
    }

    fn run_command(&mut self, kind: command::CommandKind) {
        if let Some(cmd) = self.commands.iter_mut().find(|c| c.kind() == kind) {
            cmd.run(&mut self.session);
        } else {
            debug!("No command wired for {kind}");
        }
        self.refresh_commands();
    }

    fn refresh_commands(&mut self) {
        for cmd in &mut self.commands {
            cmd.refresh(&self.session);
        }
    }
}

impl Component for Player {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Command(kind) => {
                self.run_command(kind);
                Ok(None)
            }
            Action::Tick => {
                if self.session.is_playing() {
                    self.session.step_forward();
                    self.refresh_commands();
                }
                Ok(None)
            }
            Action::Help => {
                self.help = Some(Help::new(&self.config));
                Ok(Some(Action::ChangeMode(Mode::Help)))
            }
            Action::CloseHelp => {
                self.help = None;
                Ok(Some(Action::ChangeMode(Mode::Normal)))
            }
            _ => Ok(None),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let [viewer_area, toolbar_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(area);
        self.viewer.draw(frame, viewer_area, &self.session)?;
        self.toolbar.draw(frame, toolbar_area)?;
        if let Some(help) = &mut self.help {
            help.draw(frame, area)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::command::CommandKind;

    fn player() -> Player {
        let config = Config::new(None).unwrap();
        Player::new(config, Trail::parse_text("a\n---\nb\n---\nc\n"))
    }

    fn button(player: &Player, kind: CommandKind) -> ComponentHandle {
        let idx = player
            .config
            .toolbar
            .iter()
            .position(|k| *k == kind)
            .unwrap();
        player.toolbar.buttons()[idx].clone()
    }

    #[test]
    fn test_wiring_attaches_every_button() {
        let player = player();
        assert_eq!(player.commands.len(), player.toolbar.buttons().len());
        // Each command got its handle during wiring and has already brought
        // it in line with the fresh session: back ends disabled, forward
        // ends enabled.
        assert!(!button(&player, CommandKind::Back).is_enabled());
        assert!(button(&player, CommandKind::Forward).is_enabled());
    }

    #[test]
    fn test_commands_drive_their_buttons() {
        let mut player = player();
        player.update(Action::Command(CommandKind::Last)).unwrap();
        assert_eq!(player.session.cursor(), 2);
        assert!(!button(&player, CommandKind::Forward).is_enabled());
        assert!(button(&player, CommandKind::Back).is_enabled());
        player.update(Action::Command(CommandKind::First)).unwrap();
        assert!(!button(&player, CommandKind::Back).is_enabled());
    }

    #[test]
    fn test_tick_advances_playback() {
        let mut player = player();
        player
            .update(Action::Command(CommandKind::TogglePlay))
            .unwrap();
        assert!(player.session.is_playing());
        player.update(Action::Tick).unwrap();
        assert_eq!(player.session.cursor(), 1);
        player.update(Action::Tick).unwrap();
        // Reached the last frame: playback stops and the play button resets.
        assert!(!player.session.is_playing());
        assert_eq!(button(&player, CommandKind::TogglePlay).label(), "|>");
        player.update(Action::Tick).unwrap();
        assert_eq!(player.session.cursor(), 2);
    }

    #[test]
    fn test_help_toggles_mode() {
        let mut player = player();
        let ret = player.update(Action::Help).unwrap();
        assert_eq!(ret, Some(Action::ChangeMode(Mode::Help)));
        assert!(player.help.is_some());
        let ret = player.update(Action::CloseHelp).unwrap();
        assert_eq!(ret, Some(Action::ChangeMode(Mode::Normal)));
        assert!(player.help.is_none());
    }

    #[test]
    fn test_draw_smoke() {
        let mut player = player();
        player.update(Action::Help).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| player.draw(frame, frame.area()).unwrap())
            .unwrap();
    }
}
