mod control;
mod dispatch;
mod ticker;
mod tracker;

#[cfg(test)]
mod tests;

pub use ticker::{DiscreteTicker, TransitionPhase};
pub use tracker::ContinuousTracker;

use crate::{
    layout::Axis,
    pacing::{self, Mode, PacingParameters, Readout},
    profile::EngineConfig,
    schedule::{CallbackId, Scheduler},
    text::WordSequence,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub axis: Axis,
    pub translation: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn visible_center(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width / 2.0,
            Axis::Vertical => self.height / 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Armed {
    Frame(CallbackId),
    Interval(CallbackId),
}

impl Armed {
    fn id(self) -> CallbackId {
        match self {
            Armed::Frame(id) | Armed::Interval(id) => id,
        }
    }
}

pub struct PlaybackSession<S: Scheduler> {
    scheduler: S,
    config: EngineConfig,
    words: WordSequence,
    wpm: f64,
    mode: Mode,
    pacing: PacingParameters,
    state: PlaybackState,
    viewport: Viewport,
    horizontal: ContinuousTracker,
    vertical: ContinuousTracker,
    ticker: DiscreteTicker,
    // At most one callback is armed; `mode` decides which kind.
    armed: Option<Armed>,
    last_timestamp: Option<f64>,
}

impl<S: Scheduler> PlaybackSession<S> {
    pub fn new(scheduler: S, config: EngineConfig) -> Self {
        let wpm = 200.0;
        let mode = Mode::default();
        Self {
            scheduler,
            pacing: PacingParameters::for_mode(wpm, mode, &config),
            horizontal: ContinuousTracker::new(Axis::Horizontal, config.horizontal),
            vertical: ContinuousTracker::new(Axis::Vertical, config.vertical),
            ticker: DiscreteTicker::default(),
            config,
            words: WordSequence::default(),
            wpm,
            mode,
            state: PlaybackState::Idle,
            viewport: Viewport::default(),
            armed: None,
            last_timestamp: None,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn words(&self) -> &WordSequence {
        &self.words
    }

    pub fn wpm(&self) -> f64 {
        self.wpm
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pacing(&self) -> &PacingParameters {
        &self.pacing
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Updates the container size used to find the visible center. Center
    /// tables are not touched.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn tracker(&self, axis: Axis) -> &ContinuousTracker {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    fn tracker_mut(&mut self, axis: Axis) -> &mut ContinuousTracker {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    pub fn focused_index_for(&self, mode: Mode) -> usize {
        let index = match mode.axis() {
            Some(axis) => self.tracker(axis).focused_index(),
            None => self.ticker.focused_index(),
        };
        self.words.clamp_index(index)
    }

    pub fn focused_index(&self) -> usize {
        self.focused_index_for(self.mode)
    }

    pub fn focused_word(&self) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        self.words
            .get(self.focused_index())
            .map(|w| w.text.as_str())
    }

    pub fn phase(&self) -> TransitionPhase {
        self.ticker.phase()
    }

    /// Transform for the active continuous mode; `None` in single-word mode.
    pub fn transform(&self) -> Option<Transform> {
        self.mode.axis().map(|axis| Transform {
            axis,
            translation: self.tracker(axis).translation(),
        })
    }

    pub fn readout(&self) -> Readout {
        pacing::readout(self.words.len(), self.wpm)
    }

    pub fn next_deadline(&self) -> Option<f64> {
        self.scheduler.next_deadline()
    }
}

impl<S: Scheduler> Drop for PlaybackSession<S> {
    fn drop(&mut self) {
        self.detach();
    }
}
