use pace_core::{CenterTable, WordSequence};
use ratatui::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub x: u16,
    pub y: u16,
    pub text: String,
    pub focused: bool,
}

/// Lays the horizontal strip out on the middle row of `area`, shifted by
/// `translation` cells. Words are clipped at both edges.
pub fn horizontal_placements(
    table: &CenterTable,
    words: &WordSequence,
    translation: f64,
    area: Rect,
    focused: usize,
) -> Vec<Placement> {
    let mut placements = Vec::new();
    if area.width == 0 || area.height == 0 {
        return placements;
    }
    let width = area.width as i64;
    let y = area.y + area.height / 2;

    for (placed, word) in table.words().iter().zip(words.iter()) {
        let col = (placed.start() + translation).round() as i64;
        if col >= width {
            break;
        }
        let graphemes: Vec<&str> = word.text.graphemes(true).collect();
        if col + graphemes.len() as i64 <= 0 {
            continue;
        }
        let skip = (-col).max(0) as usize;
        let room = (width - col.max(0)) as usize;
        let text: String = graphemes.iter().skip(skip).take(room).copied().collect();
        if text.is_empty() {
            continue;
        }
        placements.push(Placement {
            index: placed.index,
            x: area.x + col.max(0) as u16,
            y,
            text,
            focused: placed.index == focused,
        });
    }
    placements
}

/// Lays the vertical list out one word per row, each row centered across
/// `area` and shifted down by `translation` rows.
pub fn vertical_placements(
    table: &CenterTable,
    words: &WordSequence,
    translation: f64,
    area: Rect,
    focused: usize,
) -> Vec<Placement> {
    let mut placements = Vec::new();
    if area.width == 0 || area.height == 0 {
        return placements;
    }
    let height = area.height as i64;

    for (placed, word) in table.words().iter().zip(words.iter()) {
        let row = (placed.start() + translation).round() as i64;
        if row >= height {
            break;
        }
        if row < 0 {
            continue;
        }
        let graphemes: Vec<&str> = word.text.graphemes(true).collect();
        let text: String = graphemes
            .iter()
            .take(area.width as usize)
            .copied()
            .collect();
        let used = graphemes.len().min(area.width as usize) as u16;
        placements.push(Placement {
            index: placed.index,
            x: area.x + (area.width - used) / 2,
            y: area.y + row as u16,
            text,
            focused: placed.index == focused,
        });
    }
    placements
}

/// Grapheme that anchors the eye in single-word mode.
pub fn orp_position(word: &str) -> usize {
    let len = word.graphemes(true).count();

    if len <= 1 {
        0
    } else if len <= 13 {
        (len as f32 * 0.35).round() as usize
    } else {
        (len as f32 * 0.22).round() as usize
    }
}
