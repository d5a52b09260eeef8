use arboard::Clipboard;
use log::{debug, warn};

use super::App;

impl App {
    /// Replaces the loaded text with whatever is on the system clipboard.
    pub(super) fn paste_clipboard(&mut self) {
        if self.clipboard.is_none() {
            self.clipboard = Clipboard::new().ok();
        }
        let Some(clipboard) = &mut self.clipboard else {
            warn!("no clipboard available");
            self.view.notice = Some("clipboard unavailable".into());
            return;
        };
        let contents = clipboard.get_text();
        match contents {
            Ok(text) if !text.trim().is_empty() => {
                self.load_text(&text);
                let count = self.view.session().words().len();
                debug!("loaded {count} words from clipboard");
                self.view.notice = Some(format!("pasted {count} words"));
            }
            Ok(_) => {
                self.view.notice = Some("clipboard is empty".into());
            }
            Err(e) => {
                warn!("clipboard read failed: {e}");
                self.view.notice = Some("clipboard unreadable".into());
            }
        }
    }
}
