use log::warn;

use super::App;

impl App {
    pub(super) fn persist_settings(&self) {
        if !self.persist {
            return;
        }
        if let Err(e) = self.settings.save() {
            warn!("failed to save settings: {e}");
        }
    }
}
