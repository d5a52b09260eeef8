use log::debug;

use crate::{
    layout::FootprintSource,
    pacing::{Mode, PacingParameters},
    schedule::Scheduler,
    text,
};

use super::{Armed, PlaybackSession, PlaybackState};

impl<S: Scheduler> PlaybackSession<S> {
    /// Replaces the word sequence. Any playback is reset and both center
    /// tables are rebuilt from `source`.
    pub fn set_text(&mut self, text: &str, source: &dyn FootprintSource) {
        self.reset();
        self.words = text::tokenize(text);
        self.remeasure(source);
        debug!("text replaced: {} words", self.words.len());
    }

    /// Rebuilds the center tables from fresh footprints, e.g. once words have
    /// been rendered for the first time. Offsets and indices are kept.
    pub fn remeasure(&mut self, source: &dyn FootprintSource) {
        let words = &self.words;
        self.horizontal.measure(words, source);
        self.vertical.measure(words, source);
        self.ticker.clamp(words.last_index());
    }

    pub fn set_wpm(&mut self, wpm: f64) {
        self.wpm = wpm;
        self.pacing = PacingParameters::for_mode(wpm, self.mode, &self.config);
        debug!(
            "wpm set to {wpm} ({} ms per word{})",
            self.pacing.ms_per_word,
            if self.pacing.is_frozen() { ", frozen" } else { "" }
        );
        // Frames read the speed each time they fire; only the ticker's period
        // is baked into its armed interval.
        if self.is_playing() && self.mode == Mode::Single {
            self.disarm();
            self.arm();
        }
    }

    /// Switches presentation mode. Switching always stops playback and
    /// clears every offset and index; selecting the current mode is a no-op.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        self.reset();
        self.mode = mode;
        self.pacing = PacingParameters::for_mode(self.wpm, mode, &self.config);
        debug!("mode switched to {mode}");
    }

    pub fn start(&mut self) {
        if self.words.is_empty() {
            debug!("start ignored: no words");
            return;
        }
        if self.is_playing() {
            return;
        }
        self.state = PlaybackState::Playing;
        // The first frame after a start only records its timestamp.
        self.last_timestamp = None;
        self.arm();
        debug!("playback started in {} mode", self.mode);
    }

    pub fn pause(&mut self) {
        if !self.is_playing() {
            return;
        }
        self.disarm();
        self.cancel_fades();
        self.state = PlaybackState::Paused;
        debug!("playback paused at word {}", self.focused_index());
    }

    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.start();
        }
    }

    pub fn reset(&mut self) {
        self.disarm();
        for id in self.ticker.reset() {
            self.scheduler.cancel(id);
        }
        self.horizontal.reset();
        self.vertical.reset();
        self.last_timestamp = None;
        self.state = PlaybackState::Idle;
        debug!("playback reset");
    }

    /// Cancels every pending callback. Called on drop; the session stays usable.
    pub fn detach(&mut self) {
        self.disarm();
        self.cancel_fades();
        if self.is_playing() {
            self.state = PlaybackState::Paused;
        }
    }

    fn arm(&mut self) {
        debug_assert!(self.armed.is_none());
        self.armed = match self.mode.axis() {
            Some(_) => Some(Armed::Frame(self.scheduler.request_frame())),
            None if self.pacing.is_frozen() => None,
            None => Some(Armed::Interval(
                self.scheduler.set_interval(self.pacing.ms_per_word),
            )),
        };
    }

    fn disarm(&mut self) {
        if let Some(armed) = self.armed.take() {
            self.scheduler.cancel(armed.id());
        }
    }

    fn cancel_fades(&mut self) {
        for id in self.ticker.abandon_fades() {
            self.scheduler.cancel(id);
        }
    }
}
