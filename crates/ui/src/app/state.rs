use arboard::Clipboard;
use pace_core::Settings;

use crate::{pacer_view::PacerView, theme::Theme};

pub struct App {
    pub view: PacerView,
    pub settings: Settings,
    pub show_help: bool,
    pub clipboard: Option<Clipboard>,
    /// Write wpm and mode changes back to the settings file.
    pub persist: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let view = PacerView::new(
            settings.engine_config(),
            settings.wpm,
            settings.mode,
            Theme::default(),
        );
        Self {
            view,
            settings,
            show_help: false,
            clipboard: None,
            persist: true,
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.load_text(text);
        self
    }

    pub fn with_persistence(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    pub fn load_text(&mut self, text: &str) {
        self.view.set_text(text);
    }
}
