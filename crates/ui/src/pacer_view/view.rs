use std::time::{Duration, Instant};

use pace_core::{session::Viewport, EngineConfig, Mode, PlaybackSession, TimerQueue};
use ratatui::layout::Rect;

use crate::theme::Theme;

use super::TerminalMeasure;

const MIN_WPM: f64 = 0.0;
const MAX_WPM: f64 = 2000.0;
const IDLE_POLL: Duration = Duration::from_millis(100);

pub struct PacerView {
    pub(super) session: PlaybackSession<TimerQueue>,
    origin: Instant,
    pub theme: Theme,
    pub column_width: u16,
    pub notice: Option<String>,
}

impl PacerView {
    pub fn new(config: EngineConfig, wpm: f64, mode: Mode, theme: Theme) -> Self {
        let mut session = PlaybackSession::new(TimerQueue::new(config.frame_interval_ms), config);
        session.set_wpm(wpm);
        session.set_mode(mode);
        Self {
            session,
            origin: Instant::now(),
            theme,
            column_width: 60,
            notice: None,
        }
    }

    pub fn session(&self) -> &PlaybackSession<TimerQueue> {
        &self.session
    }

    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    /// Runs every frame and timer callback that has come due.
    pub fn tick(&mut self) -> usize {
        self.tick_at(self.now_ms())
    }

    pub fn tick_at(&mut self, now_ms: f64) -> usize {
        self.session.pump(now_ms)
    }

    /// How long the event loop may block before the engine needs attention.
    pub fn poll_timeout(&self) -> Duration {
        match self.session.next_deadline() {
            Some(deadline) => {
                let wait = (deadline - self.now_ms()).max(0.0);
                Duration::from_secs_f64(wait / 1000.0).min(IDLE_POLL)
            }
            None => IDLE_POLL,
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.session.set_text(text, &TerminalMeasure);
    }

    pub fn toggle_play(&mut self) {
        self.toggle_play_at(self.now_ms());
    }

    /// Starts or pauses with the scheduler clock caught up to `now_ms`, so
    /// the first frame or tick is armed from the moment of the key press.
    pub fn toggle_play_at(&mut self, now_ms: f64) {
        self.session.pump(now_ms);
        self.session.toggle();
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.session.set_mode(mode);
    }

    pub fn adjust_wpm(&mut self, delta: i16) -> f64 {
        self.adjust_wpm_at(delta, self.now_ms())
    }

    pub fn adjust_wpm_at(&mut self, delta: i16, now_ms: f64) -> f64 {
        let wpm = (self.session.wpm() + delta as f64).clamp(MIN_WPM, MAX_WPM);
        // A single-word interval is re-armed from the scheduler clock.
        self.session.pump(now_ms);
        self.session.set_wpm(wpm);
        wpm
    }

    pub(super) fn sync_viewport(&mut self, word_area: Rect) {
        self.session.set_viewport(Viewport::new(
            word_area.width as f64,
            word_area.height as f64,
        ));
    }
}
