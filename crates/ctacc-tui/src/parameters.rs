//! Left panel: length slider and ranked scanner list.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use ctacc_cli::output::{format_length, format_total};
use ctacc_core::range::LengthRange;
use ctacc_core::ranking::Ranking;

use crate::styles::ColorTheme;

/// Render the parameters panel.
pub fn render_parameters(
    frame: &mut Frame,
    area: Rect,
    ranking: &Ranking,
    range: &LengthRange,
    theme: &ColorTheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" parameters ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // label
            Constraint::Length(1), // slider
            Constraint::Length(1), // spacer
            Constraint::Min(0),    // scanner list
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled("Length", theme.muted_style())),
        chunks[0],
    );
    render_slider(frame, chunks[1], ranking.length(), range, theme);
    frame.render_widget(Paragraph::new(scanner_lines(ranking, theme)), chunks[3]);
}

/// Render the length slider as a gauge labelled with the current length.
pub fn render_slider(frame: &mut Frame, area: Rect, length: f64, range: &LengthRange, theme: &ColorTheme) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.reference).bg(theme.track))
        .ratio(range.ratio(length))
        .label(format_length(length));
    frame.render_widget(gauge, area);
}

fn scanner_lines(ranking: &Ranking, theme: &ColorTheme) -> Vec<Line<'static>> {
    let name_width = ranking
        .results()
        .iter()
        .map(|r| r.spec.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = vec![Line::from(Span::styled("Scanners", theme.muted_style()))];
    for (i, r) in ranking.results().iter().enumerate() {
        let emphasis = ranking.emphasis(i);
        let mut line = Line::from(vec![
            Span::styled("■ ", Style::default().fg(theme.bar_color(emphasis))),
            Span::styled(
                format!("{:<name_width$} ", r.spec.name),
                theme.emphasis_style(emphasis),
            ),
            Span::styled(format!("{:>6}", format_total(r.total_error)), theme.muted_style()),
        ]);
        if r.is_reference() {
            line = line.style(theme.reference_row_style());
        }
        lines.push(line);
    }
    lines
}
