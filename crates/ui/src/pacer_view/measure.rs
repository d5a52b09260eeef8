use pace_core::{Axis, FootprintSource, Word};
use unicode_segmentation::UnicodeSegmentation;

/// Footprints in terminal cells: one cell per grapheme across, one row down.
pub struct TerminalMeasure;

impl FootprintSource for TerminalMeasure {
    fn footprint(&self, axis: Axis, word: &Word) -> Option<f64> {
        match axis {
            Axis::Horizontal => Some(word.text.graphemes(true).count() as f64),
            Axis::Vertical => Some(1.0),
        }
    }
}
