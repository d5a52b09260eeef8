use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{layout::Axis, profile::EngineConfig};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    #[serde(alias = "scroll")]
    Horizontal,
    Vertical,
    Single,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown mode {0:?} (expected horizontal, vertical or single)")]
pub struct ModeParseError(pub String);

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Horizontal, Mode::Vertical, Mode::Single];

    pub fn axis(self) -> Option<Axis> {
        match self {
            Mode::Horizontal => Some(Axis::Horizontal),
            Mode::Vertical => Some(Axis::Vertical),
            Mode::Single => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Mode::Horizontal => Mode::Vertical,
            Mode::Vertical => Mode::Single,
            Mode::Single => Mode::Horizontal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Horizontal => "horizontal",
            Mode::Vertical => "vertical",
            Mode::Single => "single",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "scroll" => Ok(Mode::Horizontal),
            "vertical" => Ok(Mode::Vertical),
            "single" => Ok(Mode::Single),
            _ => Err(ModeParseError(s.to_string())),
        }
    }
}

pub fn ms_per_word(wpm: f64) -> f64 {
    if wpm > 0.0 {
        60_000.0 / wpm
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PacingParameters {
    pub wpm: f64,
    pub ms_per_word: f64,
    /// Distance per millisecond. For single-word mode this is words per ms and
    /// only informational: the ticker runs off `ms_per_word` directly.
    pub speed: f64,
}

impl PacingParameters {
    pub fn compute(wpm: f64, travel_per_word: f64) -> Self {
        let ms_per_word = ms_per_word(wpm);
        let speed = if ms_per_word > 0.0 {
            travel_per_word / ms_per_word
        } else {
            0.0
        };
        Self {
            wpm,
            ms_per_word,
            speed,
        }
    }

    pub fn for_mode(wpm: f64, mode: Mode, config: &EngineConfig) -> Self {
        let travel = match mode.axis() {
            Some(axis) => config.axis(axis).travel_per_word,
            None => config.single_travel_per_word,
        };
        Self::compute(wpm, travel)
    }

    pub fn is_frozen(&self) -> bool {
        self.ms_per_word <= 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Readout {
    pub word_count: usize,
    /// `None` while pacing is frozen.
    pub minutes: Option<u64>,
}

pub fn readout(word_count: usize, wpm: f64) -> Readout {
    let minutes =
        (wpm > 0.0 && wpm.is_finite()).then(|| (word_count as f64 / wpm).round() as u64);
    Readout {
        word_count,
        minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ms_per_word_for_positive_rates() {
        assert_eq!(ms_per_word(200.0), 300.0);
        assert_eq!(ms_per_word(600.0), 100.0);
        assert_eq!(ms_per_word(60_000.0), 1.0);
    }

    #[test]
    fn non_positive_rate_freezes() {
        for wpm in [0.0, -1.0, -250.0, f64::NAN] {
            let pacing = PacingParameters::compute(wpm, 120.0);
            assert_eq!(pacing.ms_per_word, 0.0);
            assert_eq!(pacing.speed, 0.0);
            assert!(pacing.is_frozen());
        }
    }

    #[test]
    fn speed_uses_mode_travel_distance() {
        let config = EngineConfig::pixels();
        let h = PacingParameters::for_mode(200.0, Mode::Horizontal, &config);
        let v = PacingParameters::for_mode(200.0, Mode::Vertical, &config);
        assert_eq!(h.ms_per_word, 300.0);
        assert!((h.speed - 0.4).abs() < 1e-12);
        assert!((v.speed - 0.2).abs() < 1e-12);
    }

    #[test]
    fn mode_parses_aliases() {
        assert_eq!("scroll".parse::<Mode>(), Ok(Mode::Horizontal));
        assert_eq!(" Vertical ".parse::<Mode>(), Ok(Mode::Vertical));
        assert_eq!("SINGLE".parse::<Mode>(), Ok(Mode::Single));
        assert!("diagonal".parse::<Mode>().is_err());
    }

    #[test]
    fn mode_cycles_through_all() {
        let mut mode = Mode::Horizontal;
        for expected in [Mode::Vertical, Mode::Single, Mode::Horizontal] {
            mode = mode.next();
            assert_eq!(mode, expected);
        }
    }

    #[test]
    fn readout_rounds_minutes() {
        assert_eq!(readout(500, 200.0).minutes, Some(3));
        assert_eq!(readout(499, 200.0).minutes, Some(2));
        assert_eq!(readout(0, 200.0).minutes, Some(0));
        assert_eq!(readout(10, 0.0).minutes, None);
        assert_eq!(readout(10, 0.0).word_count, 10);
    }
}
