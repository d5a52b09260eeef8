use log::trace;

use crate::{
    layout::Axis,
    schedule::{CallbackId, Scheduler, Wakeup},
};

use super::{Armed, PlaybackSession};

impl<S: Scheduler> PlaybackSession<S> {
    /// Drains every wakeup due at or before `now_ms`. Returns how many were
    /// acted on; stale wakeups are dropped and not counted.
    pub fn pump(&mut self, now_ms: f64) -> usize {
        let mut handled = 0;
        while let Some(wakeup) = self.scheduler.poll(now_ms) {
            if self.dispatch(wakeup) {
                handled += 1;
            }
        }
        handled
    }

    /// Delivers one wakeup. Anything the session did not arm, or has since
    /// cancelled, is ignored and returns false.
    pub fn dispatch(&mut self, wakeup: Wakeup) -> bool {
        match (wakeup, self.armed) {
            (Wakeup::Frame { id, timestamp_ms }, Some(Armed::Frame(armed))) if id == armed => {
                match self.mode.axis() {
                    Some(axis) => {
                        self.on_frame(axis, timestamp_ms);
                        true
                    }
                    None => false,
                }
            }
            (Wakeup::Timer { id }, Some(Armed::Interval(armed))) if id == armed => {
                self.on_tick();
                true
            }
            (Wakeup::Timer { id }, _) => self.on_fade_done(id),
            (stale, _) => {
                trace!("dropping stale wakeup {:?}", stale.id());
                false
            }
        }
    }

    fn on_frame(&mut self, axis: Axis, timestamp_ms: f64) {
        let delta = match self.last_timestamp {
            Some(last) => timestamp_ms - last,
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);

        let speed = self.pacing.speed;
        let center = self.viewport.visible_center(axis);
        let tracker = self.tracker_mut(axis);
        tracker.advance(delta, speed);
        tracker.refocus(center);

        self.armed = Some(Armed::Frame(self.scheduler.request_frame()));
    }

    fn on_tick(&mut self) {
        let delay = self
            .config
            .transition_delay_ms
            .min(self.pacing.ms_per_word)
            .max(0.0);
        let timeout = self.scheduler.set_timeout(delay);
        self.ticker.begin_fade(timeout);
    }

    fn on_fade_done(&mut self, id: CallbackId) -> bool {
        let last = self.words.last_index();
        if self.ticker.complete_fade(id, last) {
            true
        } else {
            trace!("dropping stale timer {id:?}");
            false
        }
    }
}
