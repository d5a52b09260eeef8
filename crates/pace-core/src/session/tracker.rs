use crate::{
    layout::{Axis, CenterTable, FootprintSource},
    profile::AxisProfile,
    text::WordSequence,
};

/// Continuous scroll state for one travel axis. Horizontal and vertical modes
/// share this type and differ only in their `AxisProfile`.
#[derive(Clone, Debug)]
pub struct ContinuousTracker {
    axis: Axis,
    profile: AxisProfile,
    raw_offset: f64,
    focused_index: usize,
    table: CenterTable,
}

impl ContinuousTracker {
    pub fn new(axis: Axis, profile: AxisProfile) -> Self {
        Self {
            axis,
            profile,
            raw_offset: profile.initial_bias,
            focused_index: 0,
            table: CenterTable::default(),
        }
    }

    pub fn raw_offset(&self) -> f64 {
        self.raw_offset
    }

    /// Translation to apply to the word strip along the travel axis.
    pub fn translation(&self) -> f64 {
        -self.raw_offset
    }

    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    pub fn table(&self) -> &CenterTable {
        &self.table
    }

    pub(super) fn reset(&mut self) {
        self.raw_offset = self.profile.initial_bias;
        self.focused_index = 0;
    }

    pub(super) fn measure(&mut self, words: &WordSequence, source: &dyn FootprintSource) {
        self.table = CenterTable::compute(self.axis, self.profile.gap, words, source);
        self.focused_index = self.focused_index.min(self.table.len().saturating_sub(1));
    }

    pub(super) fn advance(&mut self, delta_ms: f64, speed: f64) {
        // Out-of-order or bogus timestamps must not move the strip backwards.
        let step = delta_ms * speed;
        if step.is_finite() && step > 0.0 {
            self.raw_offset += step;
        }
    }

    pub(super) fn refocus(&mut self, visible_center: f64) -> usize {
        let reference = visible_center + self.raw_offset;
        let nearest = self.table.nearest_index(reference);
        self.focused_index = nearest.min(self.table.len().saturating_sub(1));
        self.focused_index
    }
}
