use crate::schedule::CallbackId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    #[default]
    Visible,
    Fading,
}

#[derive(Clone, Debug, Default)]
pub struct DiscreteTicker {
    focused_index: usize,
    phase: TransitionPhase,
    // Fade-out timeouts still in flight; each one advances a word when it fires.
    pending: Vec<CallbackId>,
}

impl DiscreteTicker {
    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub(super) fn begin_fade(&mut self, timeout: CallbackId) {
        self.phase = TransitionPhase::Fading;
        self.pending.push(timeout);
    }

    /// Completes the fade owned by `timeout`. Returns false for unknown ids.
    pub(super) fn complete_fade(&mut self, timeout: CallbackId, last_index: usize) -> bool {
        let Some(pos) = self.pending.iter().position(|&id| id == timeout) else {
            return false;
        };
        self.pending.remove(pos);
        self.focused_index = (self.focused_index + 1).min(last_index);
        self.phase = TransitionPhase::Visible;
        true
    }

    /// Drops in-flight fades without advancing and returns their ids for
    /// cancellation.
    pub(super) fn abandon_fades(&mut self) -> Vec<CallbackId> {
        self.phase = TransitionPhase::Visible;
        std::mem::take(&mut self.pending)
    }

    pub(super) fn reset(&mut self) -> Vec<CallbackId> {
        self.focused_index = 0;
        self.abandon_fades()
    }

    pub(super) fn clamp(&mut self, last_index: usize) {
        self.focused_index = self.focused_index.min(last_index);
    }
}
