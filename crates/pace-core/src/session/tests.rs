use crate::{
    layout::{Axis, Unmeasured},
    pacing::Mode,
    profile::EngineConfig,
    schedule::{CallbackId, Scheduler, TimerQueue, Wakeup},
    text::Word,
};

use super::{PlaybackSession, PlaybackState, TransitionPhase, Viewport};

#[derive(Default)]
struct RecordingScheduler {
    inner: TimerQueue,
    cancelled: Vec<CallbackId>,
}

impl Scheduler for RecordingScheduler {
    fn request_frame(&mut self) -> CallbackId {
        self.inner.request_frame()
    }

    fn set_interval(&mut self, period_ms: f64) -> CallbackId {
        self.inner.set_interval(period_ms)
    }

    fn set_timeout(&mut self, delay_ms: f64) -> CallbackId {
        self.inner.set_timeout(delay_ms)
    }

    fn cancel(&mut self, id: CallbackId) -> bool {
        let removed = self.inner.cancel(id);
        if removed {
            self.cancelled.push(id);
        }
        removed
    }

    fn poll(&mut self, now_ms: f64) -> Option<Wakeup> {
        self.inner.poll(now_ms)
    }

    fn next_deadline(&self) -> Option<f64> {
        self.inner.next_deadline()
    }
}

fn fixed_footprints(axis: Axis, _word: &Word) -> Option<f64> {
    Some(match axis {
        Axis::Horizontal => 80.0,
        Axis::Vertical => 32.0,
    })
}

fn session(text: &str, wpm: f64, mode: Mode) -> PlaybackSession<TimerQueue> {
    let mut session = PlaybackSession::new(TimerQueue::new(10.0), EngineConfig::pixels());
    session.set_viewport(Viewport::new(80.0, 300.0));
    session.set_text(text, &fixed_footprints);
    session.set_wpm(wpm);
    session.set_mode(mode);
    session
}

fn recording_session(text: &str, wpm: f64) -> PlaybackSession<RecordingScheduler> {
    let scheduler = RecordingScheduler {
        inner: TimerQueue::new(10.0),
        cancelled: Vec::new(),
    };
    let mut session = PlaybackSession::new(scheduler, EngineConfig::pixels());
    session.set_viewport(Viewport::new(80.0, 300.0));
    session.set_text(text, &fixed_footprints);
    session.set_wpm(wpm);
    session
}

#[test]
fn start_without_words_stays_idle() {
    let mut s = session("   ", 300.0, Mode::Horizontal);
    s.start();
    assert!(!s.is_playing());
    assert_eq!(s.state(), PlaybackState::Idle);
    assert_eq!(s.scheduler().pending(), 0);
    assert_eq!(s.focused_word(), None);
}

#[test]
fn single_mode_reaches_last_word_after_three_periods() {
    let mut s = session("a b c", 600.0, Mode::Single);
    s.start();
    s.pump(300.0);
    assert_eq!(s.focused_index(), 2);
    assert_eq!(s.focused_word(), Some("c"));
}

#[test]
fn single_mode_never_overflows() {
    let mut s = session("one two three", 200.0, Mode::Single);
    assert_eq!(s.pacing().ms_per_word, 300.0);
    s.start();
    s.pump(900.0);
    assert_eq!(s.focused_index(), 2);
    s.pump(10_000.0);
    assert_eq!(s.focused_index(), 2);
    assert!(s.is_playing());
}

#[test]
fn single_mode_fades_before_advancing() {
    let mut s = session("a b c", 600.0, Mode::Single);
    s.start();
    s.pump(100.0);
    assert_eq!(s.phase(), TransitionPhase::Fading);
    assert_eq!(s.focused_index(), 0);
    s.pump(180.0);
    assert_eq!(s.phase(), TransitionPhase::Visible);
    assert_eq!(s.focused_index(), 1);
}

#[test]
fn frozen_rate_arms_nothing_in_single_mode() {
    let mut s = session("a b c", 0.0, Mode::Single);
    s.start();
    assert!(s.is_playing());
    assert_eq!(s.scheduler().pending(), 0);
    s.pump(60_000.0);
    assert_eq!(s.focused_index(), 0);
}

#[test]
fn raising_rate_while_frozen_starts_ticking() {
    let mut s = session("a b c", 0.0, Mode::Single);
    s.start();
    s.pump(1_000.0);
    s.set_wpm(600.0);
    s.pump(1_180.0);
    assert_eq!(s.focused_index(), 1);
}

#[test]
fn rate_change_rearms_ticker_with_new_period() {
    let mut s = session("a b c d e", 600.0, Mode::Single);
    s.start();
    s.pump(50.0);
    s.set_wpm(120.0);
    // Old 100 ms period would have ticked at 100; the new one waits 500 ms.
    s.pump(400.0);
    assert_eq!(s.focused_index(), 0);
    s.pump(630.0);
    assert_eq!(s.focused_index(), 1);
}

#[test]
fn horizontal_offset_tracks_elapsed_time() {
    // Centers at 40, 160, 280; visible center 40; 1.2 px per ms at 600 wpm.
    let mut s = session("a b c", 600.0, Mode::Horizontal);
    s.start();
    s.pump(10.0);
    assert_eq!(s.tracker(Axis::Horizontal).raw_offset(), 0.0);
    s.pump(110.0);
    let offset = s.tracker(Axis::Horizontal).raw_offset();
    assert!((offset - 120.0).abs() < 1e-9);
    assert_eq!(s.focused_index(), 1);
    let transform = s.transform().map(|t| (t.axis, t.translation));
    assert_eq!(transform, Some((Axis::Horizontal, -offset)));
}

#[test]
fn horizontal_offset_is_monotonic_while_playing() {
    let mut s = session("a b c d e f", 300.0, Mode::Horizontal);
    s.start();
    let mut last = s.tracker(Axis::Horizontal).raw_offset();
    for step in 1..40 {
        s.pump(step as f64 * 7.0);
        let offset = s.tracker(Axis::Horizontal).raw_offset();
        assert!(offset >= last);
        last = offset;
    }
    assert!(last > 0.0);
}

#[test]
fn vertical_mode_starts_from_bias() {
    // Centers at 16, 64, 112; visible center 150; bias -140; 0.6 px per ms.
    let mut s = session("a b c", 600.0, Mode::Vertical);
    assert_eq!(s.tracker(Axis::Vertical).raw_offset(), -140.0);
    s.start();
    s.pump(10.0);
    assert_eq!(s.focused_index(), 0);
    s.pump(90.0);
    assert_eq!(s.focused_index(), 1);
    assert_eq!(s.tracker(Axis::Horizontal).raw_offset(), 0.0);
}

#[test]
fn pause_keeps_position_and_resume_has_no_jump() {
    let mut s = session("a b c d", 600.0, Mode::Horizontal);
    s.start();
    s.pump(110.0);
    s.pause();
    assert_eq!(s.state(), PlaybackState::Paused);
    let paused_at = s.tracker(Axis::Horizontal).raw_offset();
    s.pump(5_000.0);
    assert_eq!(s.tracker(Axis::Horizontal).raw_offset(), paused_at);

    s.start();
    s.pump(5_020.0);
    let resumed = s.tracker(Axis::Horizontal).raw_offset();
    assert!((resumed - paused_at - 12.0).abs() < 1e-9);
}

#[test]
fn pause_drops_in_flight_fade() {
    let mut s = session("a b c", 600.0, Mode::Single);
    s.start();
    s.pump(150.0);
    assert_eq!(s.phase(), TransitionPhase::Fading);
    s.pause();
    assert_eq!(s.phase(), TransitionPhase::Visible);
    s.pump(1_000.0);
    assert_eq!(s.focused_index(), 0);
    assert_eq!(s.scheduler().pending(), 0);
}

#[test]
fn reset_restores_initial_positions_from_any_state() {
    for stop in [None, Some(false), Some(true)] {
        let mut s = session("a b c d e", 600.0, Mode::Vertical);
        if let Some(pause) = stop {
            s.start();
            s.pump(250.0);
            if pause {
                s.pause();
            }
        }
        s.reset();
        assert_eq!(s.state(), PlaybackState::Idle);
        assert_eq!(s.tracker(Axis::Vertical).raw_offset(), -140.0);
        assert_eq!(s.tracker(Axis::Horizontal).raw_offset(), 0.0);
        for mode in Mode::ALL {
            assert_eq!(s.focused_index_for(mode), 0);
        }
        assert_eq!(s.scheduler().pending(), 0);
    }
}

#[test]
fn reset_clears_frame_baseline() {
    let mut s = session("a b c d", 600.0, Mode::Horizontal);
    s.start();
    s.pump(50.0);
    s.reset();
    s.pump(2_000.0);
    s.start();
    s.pump(2_010.0);
    assert_eq!(s.tracker(Axis::Horizontal).raw_offset(), 0.0);
}

#[test]
fn mode_switch_cancels_previous_tracker_once() {
    let mut s = recording_session("a b c d", 600.0);
    s.start();
    s.pump(50.0);
    assert!(s.tracker(Axis::Horizontal).raw_offset() > 0.0);

    s.set_mode(Mode::Vertical);
    assert_eq!(s.scheduler().cancelled.len(), 1);
    assert!(!s.is_playing());
    assert_eq!(s.mode(), Mode::Vertical);

    s.pump(1_000.0);
    assert_eq!(s.tracker(Axis::Horizontal).raw_offset(), 0.0);
    assert_eq!(s.tracker(Axis::Vertical).raw_offset(), -140.0);
    assert_eq!(s.scheduler().cancelled.len(), 1);
}

#[test]
fn switching_from_single_cancels_interval_and_fades() {
    let mut s = recording_session("a b c d", 600.0);
    s.set_mode(Mode::Single);
    s.start();
    s.pump(150.0);
    s.set_mode(Mode::Horizontal);
    // interval plus the fade timeout in flight
    assert_eq!(s.scheduler().cancelled.len(), 2);
    s.pump(1_000.0);
    assert_eq!(s.focused_index_for(Mode::Single), 0);
}

#[test]
fn selecting_current_mode_keeps_playing() {
    let mut s = session("a b c", 600.0, Mode::Horizontal);
    s.start();
    s.set_mode(Mode::Horizontal);
    assert!(s.is_playing());
}

#[test]
fn wakeup_popped_before_pause_is_ignored() {
    let mut s = session("a b c", 600.0, Mode::Horizontal);
    s.start();
    s.pump(10.0);
    let late = s.scheduler_mut().poll(20.0);
    s.pause();
    let before = s.tracker(Axis::Horizontal).raw_offset();
    if let Some(wakeup) = late {
        assert!(!s.dispatch(wakeup));
    }
    assert_eq!(s.tracker(Axis::Horizontal).raw_offset(), before);
}

#[test]
fn text_change_resets_playback() {
    let mut s = session("a b c d", 600.0, Mode::Horizontal);
    s.start();
    s.pump(200.0);
    s.set_text("x y", &fixed_footprints);
    assert_eq!(s.state(), PlaybackState::Idle);
    assert_eq!(s.words().len(), 2);
    assert_eq!(s.focused_index(), 0);
    assert_eq!(s.tracker(Axis::Horizontal).raw_offset(), 0.0);
    assert_eq!(s.scheduler().pending(), 0);
}

#[test]
fn remeasure_keeps_offset() {
    let mut s = PlaybackSession::new(TimerQueue::new(10.0), EngineConfig::pixels());
    s.set_viewport(Viewport::new(80.0, 300.0));
    s.set_text("a b c", &Unmeasured);
    s.set_wpm(600.0);
    assert!(s
        .tracker(Axis::Horizontal)
        .table()
        .words()
        .iter()
        .all(|w| w.footprint == 0.0));
    s.start();
    s.pump(110.0);
    let offset = s.tracker(Axis::Horizontal).raw_offset();
    s.remeasure(&fixed_footprints);
    assert_eq!(s.tracker(Axis::Horizontal).raw_offset(), offset);
    let centers: Vec<f64> = s.tracker(Axis::Horizontal).table().centers().collect();
    assert_eq!(centers, vec![40.0, 160.0, 280.0]);
}

#[test]
fn transform_is_absent_in_single_mode() {
    let s = session("a b", 300.0, Mode::Single);
    assert_eq!(s.transform(), None);
}

#[test]
fn readout_counts_words_and_minutes() {
    let text = vec!["word"; 450].join(" ");
    let s = session(&text, 300.0, Mode::Horizontal);
    let readout = s.readout();
    assert_eq!(readout.word_count, 450);
    assert_eq!(readout.minutes, Some(2));
}

#[test]
fn detach_cancels_everything() {
    let mut s = session("a b c", 600.0, Mode::Single);
    s.start();
    s.pump(150.0);
    s.detach();
    assert_eq!(s.scheduler().pending(), 0);
    assert_eq!(s.state(), PlaybackState::Paused);
}
