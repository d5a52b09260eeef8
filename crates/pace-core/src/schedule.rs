//! Frame and timer scheduling for the playback engine.
//!
//! The engine never sleeps or registers closures. It asks a [`Scheduler`] for
//! a frame, an interval or a timeout and remembers the returned id. The host
//! polls the scheduler with the current time and hands every due [`Wakeup`]
//! back to the engine, which ignores ids it no longer holds.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallbackId(u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Wakeup {
    Frame { id: CallbackId, timestamp_ms: f64 },
    Timer { id: CallbackId },
}

impl Wakeup {
    pub fn id(&self) -> CallbackId {
        match *self {
            Wakeup::Frame { id, .. } | Wakeup::Timer { id } => id,
        }
    }
}

pub trait Scheduler {
    /// One-shot callback on the next display frame.
    fn request_frame(&mut self) -> CallbackId;
    /// Repeating callback every `period_ms`.
    fn set_interval(&mut self, period_ms: f64) -> CallbackId;
    /// One-shot callback after `delay_ms`.
    fn set_timeout(&mut self, delay_ms: f64) -> CallbackId;
    /// Returns true if a pending callback was removed.
    fn cancel(&mut self, id: CallbackId) -> bool;
    /// Pops the earliest wakeup due at or before `now_ms`.
    fn poll(&mut self, now_ms: f64) -> Option<Wakeup>;
    fn next_deadline(&self) -> Option<f64>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum EntryKind {
    Frame,
    Interval { period_ms: f64 },
    Timeout,
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    id: CallbackId,
    due_ms: f64,
    kind: EntryKind,
}

/// Deterministic scheduler driven by caller-supplied time. The ui feeds it
/// wall-clock milliseconds; tests feed it virtual time.
#[derive(Debug)]
pub struct TimerQueue {
    now_ms: f64,
    frame_interval_ms: f64,
    next_id: u64,
    entries: Vec<Entry>,
}

impl TimerQueue {
    pub fn new(frame_interval_ms: f64) -> Self {
        let frame_interval_ms = if frame_interval_ms.is_finite() && frame_interval_ms > 0.0 {
            frame_interval_ms
        } else {
            1000.0 / 60.0
        };
        Self {
            now_ms: 0.0,
            frame_interval_ms,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_pending(&self, id: CallbackId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    fn push(&mut self, due_ms: f64, kind: EntryKind) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, due_ms, kind });
        id
    }

    fn earliest(&self) -> Option<usize> {
        // Ids are allocated in creation order, so they break due-time ties.
        self.entries
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms).then(a.id.cmp(&b.id)))
            .map(|(pos, _)| pos)
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new(1000.0 / 60.0)
    }
}

impl Scheduler for TimerQueue {
    fn request_frame(&mut self) -> CallbackId {
        let due = self.now_ms + self.frame_interval_ms;
        self.push(due, EntryKind::Frame)
    }

    fn set_interval(&mut self, period_ms: f64) -> CallbackId {
        let due = if period_ms.is_finite() && period_ms > 0.0 {
            self.now_ms + period_ms
        } else {
            f64::INFINITY
        };
        self.push(due, EntryKind::Interval { period_ms })
    }

    fn set_timeout(&mut self, delay_ms: f64) -> CallbackId {
        let delay = if delay_ms.is_finite() {
            delay_ms.max(0.0)
        } else {
            0.0
        };
        let due = self.now_ms + delay;
        self.push(due, EntryKind::Timeout)
    }

    fn cancel(&mut self, id: CallbackId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    fn poll(&mut self, now_ms: f64) -> Option<Wakeup> {
        let Some(pos) = self.earliest().filter(|&pos| self.entries[pos].due_ms <= now_ms) else {
            if now_ms > self.now_ms {
                self.now_ms = now_ms;
            }
            return None;
        };

        let entry = self.entries[pos];
        if entry.due_ms > self.now_ms {
            self.now_ms = entry.due_ms;
        }
        match entry.kind {
            EntryKind::Frame => {
                self.entries.swap_remove(pos);
                Some(Wakeup::Frame {
                    id: entry.id,
                    timestamp_ms: entry.due_ms,
                })
            }
            EntryKind::Timeout => {
                self.entries.swap_remove(pos);
                Some(Wakeup::Timer { id: entry.id })
            }
            EntryKind::Interval { period_ms } => {
                self.entries[pos].due_ms = entry.due_ms + period_ms;
                Some(Wakeup::Timer { id: entry.id })
            }
        }
    }

    fn next_deadline(&self) -> Option<f64> {
        self.earliest()
            .map(|pos| self.entries[pos].due_ms)
            .filter(|due| due.is_finite())
    }
}
