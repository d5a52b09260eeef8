use serde::{Deserialize, Serialize};

use crate::layout::Axis;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisProfile {
    /// Space inserted before every word after the first.
    pub gap: f64,
    /// Distance the strip travels while one word is read.
    pub travel_per_word: f64,
    /// Starting offset; negative values let the first word sit below or right
    /// of the visible center.
    pub initial_bias: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub horizontal: AxisProfile,
    pub vertical: AxisProfile,
    pub single_travel_per_word: f64,
    pub transition_delay_ms: f64,
    pub frame_interval_ms: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Pixels,
    #[default]
    Terminal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::pixels()
    }
}

impl EngineConfig {
    pub fn pixels() -> Self {
        Self {
            horizontal: AxisProfile {
                gap: 40.0,
                travel_per_word: 120.0,
                initial_bias: 0.0,
            },
            vertical: AxisProfile {
                gap: 16.0,
                travel_per_word: 60.0,
                initial_bias: -140.0,
            },
            single_travel_per_word: 1.0,
            transition_delay_ms: 80.0,
            frame_interval_ms: 1000.0 / 60.0,
        }
    }

    pub fn terminal() -> Self {
        Self {
            horizontal: AxisProfile {
                gap: 3.0,
                travel_per_word: 8.0,
                initial_bias: 0.0,
            },
            vertical: AxisProfile {
                gap: 1.0,
                travel_per_word: 2.0,
                initial_bias: -6.0,
            },
            ..Self::pixels()
        }
    }

    pub fn for_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Pixels => Self::pixels(),
            ProfileKind::Terminal => Self::terminal(),
        }
    }

    pub fn with_transition_delay(mut self, delay_ms: f64) -> Self {
        if delay_ms.is_finite() && delay_ms >= 0.0 {
            self.transition_delay_ms = delay_ms;
        }
        self
    }

    pub fn axis(&self, axis: Axis) -> &AxisProfile {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }
}
