use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use pace_core::Mode;

use super::types::{Command, CommandOutcome};
use super::App;

impl Command {
    pub fn from_key(app: &App, key: KeyEvent) -> Option<Self> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if app.show_help {
            return match key.code {
                KeyCode::Char('c') if ctrl => Some(Command::Exit),
                KeyCode::Esc | KeyCode::Char('?') => Some(Command::CloseHelp),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('c') if ctrl => Some(Command::Exit),
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Exit),
            KeyCode::Char('?') => Some(Command::ToggleHelp),
            KeyCode::Char(' ') => Some(Command::TogglePlay),
            KeyCode::Char('r') => Some(Command::Reset),
            KeyCode::Char('m') | KeyCode::Tab => Some(Command::CycleMode),
            KeyCode::Char('1') => Some(Command::SelectMode(Mode::Horizontal)),
            KeyCode::Char('2') => Some(Command::SelectMode(Mode::Vertical)),
            KeyCode::Char('3') => Some(Command::SelectMode(Mode::Single)),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(Command::AdjustWpm(10)),
            KeyCode::Char('-') | KeyCode::Char('_') => Some(Command::AdjustWpm(-10)),
            KeyCode::Char(']') => Some(Command::AdjustWpm(50)),
            KeyCode::Char('[') => Some(Command::AdjustWpm(-50)),
            KeyCode::Char('p') => Some(Command::Paste),
            _ => None,
        }
    }
}

impl App {
    pub fn apply_command(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::Exit => return CommandOutcome::Exit,
            Command::ToggleHelp => {
                self.show_help = !self.show_help;
            }
            Command::CloseHelp => {
                self.show_help = false;
            }
            Command::TogglePlay => {
                self.view.toggle_play();
                self.view.notice = None;
            }
            Command::Reset => {
                self.view.reset();
                self.view.notice = Some("reset".into());
            }
            Command::CycleMode => {
                let next = self.view.session().mode().next();
                self.select_mode(next);
            }
            Command::SelectMode(mode) => {
                self.select_mode(mode);
            }
            Command::AdjustWpm(delta) => {
                let wpm = self.view.adjust_wpm(delta);
                self.settings.wpm = wpm;
                self.persist_settings();
                self.view.notice = Some(format!("{wpm} WPM"));
            }
            Command::Paste => {
                self.paste_clipboard();
            }
        }
        CommandOutcome::Continue
    }

    fn select_mode(&mut self, mode: Mode) {
        if self.view.session().mode() == mode {
            return;
        }
        debug!("switching to {mode} mode");
        self.view.set_mode(mode);
        self.settings.mode = mode;
        self.persist_settings();
        self.view.notice = Some(format!("{mode} mode"));
    }
}
