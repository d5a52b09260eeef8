use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Column of at most `column_width` cells, horizontally centered in `area`.
pub fn centered_column(area: Rect, column_width: u16) -> Rect {
    let width = column_width.min(area.width);
    let left_pad = area.width.saturating_sub(width) / 2;
    Rect {
        x: area.x + left_pad,
        y: area.y,
        width,
        height: area.height,
    }
}
