use crate::text::{Word, WordSequence};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Rendered size of a word along an axis, as reported by the presentation
/// layer. `None` means the word has not been measured yet.
pub trait FootprintSource {
    fn footprint(&self, axis: Axis, word: &Word) -> Option<f64>;
}

impl<F> FootprintSource for F
where
    F: Fn(Axis, &Word) -> Option<f64>,
{
    fn footprint(&self, axis: Axis, word: &Word) -> Option<f64> {
        self(axis, word)
    }
}

pub struct Unmeasured;

impl FootprintSource for Unmeasured {
    fn footprint(&self, _axis: Axis, _word: &Word) -> Option<f64> {
        None
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlacedWord {
    pub index: usize,
    pub footprint: f64,
    pub center_offset: f64,
}

impl PlacedWord {
    pub fn start(&self) -> f64 {
        self.center_offset - self.footprint / 2.0
    }

    pub fn end(&self) -> f64 {
        self.center_offset + self.footprint / 2.0
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CenterTable {
    words: Vec<PlacedWord>,
}

impl CenterTable {

    pub fn compute(
        axis: Axis,
        gap: f64,
        words: &WordSequence,
        source: &dyn FootprintSource,
    ) -> Self {
        let footprints = words
            .iter()
            .map(|word| sanitize(source.footprint(axis, word)));
        Self::from_footprints(gap, footprints)
    }

    pub fn from_footprints(gap: f64, footprints: impl IntoIterator<Item = f64>) -> Self {
        let mut cumulative = 0.0;
        let words = footprints
            .into_iter()
            .enumerate()
            .map(|(index, footprint)| {
                let footprint = sanitize(Some(footprint));
                let center_offset = cumulative + footprint / 2.0;
                cumulative += footprint + gap;
                PlacedWord {
                    index,
                    footprint,
                    center_offset,
                }
            })
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PlacedWord> {
        self.words.get(index)
    }

    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    pub fn centers(&self) -> impl Iterator<Item = f64> + '_ {
        self.words.iter().map(|w| w.center_offset)
    }

    pub fn nearest_index(&self, reference: f64) -> usize {
        nearest_index(self.centers(), reference)
    }
}

/// Index of the center closest to `reference`. The scan is index-ascending and
/// only replaces the best candidate on a strictly smaller distance, so ties go
/// to the earliest index. Returns 0 for an empty input.
pub fn nearest_index(centers: impl IntoIterator<Item = f64>, reference: f64) -> usize {
    let mut closest = 0;
    let mut smallest = f64::INFINITY;
    for (index, center) in centers.into_iter().enumerate() {
        let diff = (center - reference).abs();
        if diff < smallest {
            smallest = diff;
            closest = index;
        }
    }
    closest
}

fn sanitize(footprint: Option<f64>) -> f64 {
    match footprint {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}
