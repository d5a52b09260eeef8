use pace_core::{Axis, Mode, PlaybackState, TransitionPhase};
use ratatui::{prelude::*, widgets::*};
use unicode_segmentation::UnicodeSegmentation;

use crate::layout::centered_column;

use super::{horizontal_placements, orp_position, vertical_placements, PacerView, Placement};

impl PacerView {
    pub fn render(&mut self, f: &mut Frame<'_>, area: Rect) {
        let column = centered_column(area, self.column_width);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(column);

        let header_area = chunks[0];
        let word_area = chunks[1];
        let progress_area = chunks[2];
        let status_area = chunks[3];

        self.sync_viewport(word_area);
        self.render_header(f, header_area);
        f.render_widget(Clear, word_area);
        f.render_widget(Block::default().bg(self.theme.word_bg), word_area);
        match self.session.mode() {
            Mode::Horizontal => self.render_horizontal(f, word_area),
            Mode::Vertical => self.render_vertical(f, word_area),
            Mode::Single => self.render_single(f, word_area),
        }
        self.render_progress(f, progress_area);
        self.render_status(f, status_area);
    }

    fn state_label(&self) -> (&'static str, Color) {
        match self.session.state() {
            PlaybackState::Idle => ("ready", self.theme.idle_fg),
            PlaybackState::Playing => ("playing", self.theme.playing_fg),
            PlaybackState::Paused => ("paused", self.theme.paused_fg),
        }
    }

    fn render_header(&self, f: &mut Frame<'_>, area: Rect) {
        let (state, state_fg) = self.state_label();
        let base = Style::default()
            .fg(self.theme.header_fg)
            .bg(self.theme.header_bg);
        let mut spans = vec![
            Span::styled(format!("{} mode · ", self.session.mode()), base),
            Span::styled(state, base.fg(state_fg).add_modifier(Modifier::BOLD)),
        ];
        if let Some(notice) = &self.notice {
            spans.push(Span::styled(format!(" · {notice}"), base));
        }
        let header = Paragraph::new(Line::from(spans)).bg(self.theme.header_bg);
        f.render_widget(header, area);
    }

    fn render_horizontal(&self, f: &mut Frame<'_>, area: Rect) {
        let tracker = self.session.tracker(Axis::Horizontal);
        let placements = horizontal_placements(
            tracker.table(),
            self.session.words(),
            tracker.translation(),
            area,
            self.session.focused_index(),
        );
        self.draw_placements(f, &placements);

        // Marker under the visible center.
        if area.height >= 3 {
            let x = area.x + area.width / 2;
            let y = area.y + area.height / 2 + 1;
            f.buffer_mut()
                .set_string(x, y, "▲", Style::default().fg(self.theme.rule_fg));
        }
    }

    fn render_vertical(&self, f: &mut Frame<'_>, area: Rect) {
        let tracker = self.session.tracker(Axis::Vertical);
        let placements = vertical_placements(
            tracker.table(),
            self.session.words(),
            tracker.translation(),
            area,
            self.session.focused_index(),
        );
        self.draw_placements(f, &placements);
    }

    fn draw_placements(&self, f: &mut Frame<'_>, placements: &[Placement]) {
        let focused = Style::default()
            .fg(self.theme.focused_fg)
            .add_modifier(Modifier::BOLD);
        let dimmed = Style::default()
            .fg(self.theme.dimmed_fg)
            .add_modifier(Modifier::DIM);
        let buf = f.buffer_mut();
        for placement in placements {
            let style = if placement.focused { focused } else { dimmed };
            buf.set_string(placement.x, placement.y, &placement.text, style);
        }
    }

    fn render_single(&self, f: &mut Frame<'_>, area: Rect) {
        if self.session.phase() == TransitionPhase::Fading {
            return;
        }
        let Some(word) = self.session.focused_word() else {
            return;
        };

        let orp = orp_position(word);
        let mut line = Line::default();
        for (i, g) in word.graphemes(true).enumerate() {
            let style = if i < orp {
                Style::default().fg(self.theme.dimmed_fg)
            } else if i == orp {
                Style::default()
                    .fg(self.theme.orp_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.focused_fg)
            };
            line.push_span(Span::styled(g, style));
        }

        // Pin the recognition point to the middle of the area.
        let orp_target_x = area.x + area.width / 2;
        let word_start_x = orp_target_x.saturating_sub(orp as u16).max(area.x);
        let word_area = Rect {
            x: word_start_x,
            y: area.y + area.height / 2,
            width: area.width.saturating_sub(word_start_x - area.x),
            height: 1,
        };
        f.render_widget(Paragraph::new(line), word_area);
    }

    fn render_progress(&self, f: &mut Frame<'_>, area: Rect) {
        let total = self.session.words().len();
        let ratio = if total == 0 {
            0.0
        } else {
            (self.session.focused_index() + 1) as f64 / total as f64
        };
        let gauge = LineGauge::default()
            .ratio(ratio.clamp(0.0, 1.0))
            .label(format!("{:>3}%", (ratio * 100.0).round() as u16))
            .filled_style(Style::default().fg(self.theme.progress_fg))
            .unfilled_style(Style::default().fg(self.theme.dimmed_fg))
            .style(Style::default().fg(self.theme.footer_fg))
            .bg(self.theme.footer_pad_bg);
        f.render_widget(gauge, area);
    }

    fn render_status(&self, f: &mut Frame<'_>, area: Rect) {
        let total = self.session.words().len();
        let position = if total == 0 {
            "0/0".to_string()
        } else {
            format!("{}/{}", self.session.focused_index() + 1, total)
        };
        let readout = self.session.readout();
        let estimate = match readout.minutes {
            Some(m) => format!("~{m} min"),
            None => "frozen".to_string(),
        };
        let (state, state_fg) = self.state_label();

        let text = Style::default().fg(self.theme.footer_fg);
        let status_line = Line::from(vec![
            Span::styled(format!("{} WPM", self.session.wpm()), text),
            Span::styled(" │ ", Style::default().fg(self.theme.dimmed_fg)),
            Span::styled(format!("Word {position}"), text),
            Span::styled(" │ ", Style::default().fg(self.theme.dimmed_fg)),
            Span::styled(format!("{} words {estimate}", readout.word_count), text),
            Span::styled(" │ ", Style::default().fg(self.theme.dimmed_fg)),
            Span::styled(
                state,
                Style::default().fg(state_fg).add_modifier(Modifier::BOLD),
            ),
        ]);

        let paragraph = Paragraph::new(status_line)
            .bg(self.theme.footer_bg)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }
}
