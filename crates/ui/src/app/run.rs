use std::io::{self, stdout};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::layout::centered_rect;

use super::types::{Command, CommandOutcome};
use super::App;

const HELP_LINES: [&str; 9] = [
    "Space: start / pause",
    "r: reset to the first word",
    "m / Tab: cycle mode",
    "1 / 2 / 3: horizontal, vertical, single word",
    "+/- or =/_: adjust WPM by 10",
    "[ / ]: adjust WPM by 50",
    "p: read text from the clipboard",
    "q / Esc / Ctrl-C: quit",
    "?: toggle this help",
];

impl App {
    pub fn run(mut self) -> io::Result<()> {
        let mut stdout = stdout();
        let raw_ok = enable_raw_mode().is_ok();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        if !raw_ok {
            // Non-interactive fallback: draw once and exit cleanly
            terminal.draw(|f| self.draw(f))?;
            execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
            return Ok(());
        }

        let mut exit = false;
        while !exit {
            self.view.tick();
            terminal.draw(|f| self.draw(f))?;

            match event::poll(self.view.poll_timeout()) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => {
                        if let Some(command) = Command::from_key(&self, key) {
                            if self.apply_command(command) == CommandOutcome::Exit {
                                exit = true;
                            }
                        }
                    }
                    Ok(_) => {}
                    Err(_) => {
                        exit = true;
                    }
                },
                Ok(false) => {}
                Err(_) => {
                    exit = true;
                }
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let size = f.area();
        self.view.render(f, size);
        if self.show_help {
            let popup_area = centered_rect(60, 60, size);
            let help = Paragraph::new(HELP_LINES.join("\n"))
                .block(
                    Block::default()
                        .title("Help (Esc or ? to close)")
                        .borders(Borders::ALL),
                )
                .wrap(Wrap { trim: false });
            f.render_widget(Clear, popup_area);
            f.render_widget(help, popup_area);
        }
    }
}
