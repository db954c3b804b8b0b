//! Segmented error breakdown chart.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use ctacc_cli::output::{format_length, format_total};
use ctacc_core::ranking::{segment_widths, Ranking};

use crate::styles::ColorTheme;

const FIXED_CELL: &str = "█";
const LENGTH_CELL: &str = "▒";
const TRACK_CELL: &str = "░";
const TOTAL_WIDTH: usize = 7;

/// Render one bar per scanner: fixed error, then length-dependent error,
/// scaled so the largest total fills the track.
pub fn render_chart(frame: &mut Frame, area: Rect, ranking: &Ranking, theme: &ColorTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(format!(" error breakdown at L = {} ", format_length(ranking.length())));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let name_width = ranking
        .results()
        .iter()
        .map(|r| r.spec.name.chars().count())
        .max()
        .unwrap_or(0);
    let track_width = usize::from(inner.width).saturating_sub(name_width + TOTAL_WIDTH + 2);
    let max_total = ranking.max_total();
    let total_width = TOTAL_WIDTH;

    let mut lines = Vec::with_capacity(ranking.results().len() + 2);
    for (i, r) in ranking.results().iter().enumerate() {
        let emphasis = ranking.emphasis(i);
        let color = theme.bar_color(emphasis);
        let (fixed, dep) = segment_widths(r.fixed_error, r.length_error, max_total, track_width);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>name_width$} ", r.spec.name),
                theme.label_style(emphasis),
            ),
            Span::styled(FIXED_CELL.repeat(fixed), Style::default().fg(color)),
            Span::styled(LENGTH_CELL.repeat(dep), Style::default().fg(color)),
            Span::styled(
                TRACK_CELL.repeat(track_width - fixed - dep),
                Style::default().fg(theme.track),
            ),
            Span::styled(
                format!(" {:>total_width$}", format_total(r.total_error)),
                theme.emphasis_style(emphasis).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(FIXED_CELL, Style::default().fg(theme.bar)),
        Span::styled(" FIXED ERROR (a)   ", theme.muted_style()),
        Span::styled(LENGTH_CELL, Style::default().fg(theme.bar)),
        Span::styled(" LENGTH-DEPENDENT (L/b)", theme.muted_style()),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{render_buffer, render_text};
    use ctacc_core::catalog::Catalog;

    fn draw(length: f64, width: u16, height: u16) -> String {
        let ranking = Catalog::builtin().unwrap().rank(length).unwrap();
        let theme = ColorTheme::default();
        render_text(width, height, |frame| {
            let area = frame.area();
            render_chart(frame, area, &ranking, &theme);
        })
    }

    #[test]
    fn title_names_length() {
        let text = draw(100.0, 60, 9);
        assert!(text.lines().next().unwrap().contains("error breakdown at L = 100 mm"));
    }

    #[test]
    fn longest_bar_fills_track() {
        // inner width 58, names 9, totals 7, two spaces: track of 40 cells
        let text = draw(100.0, 60, 9);
        let reference = text.lines().find(|l| l.contains("Lumafield")).unwrap();
        assert_eq!(reference.matches(FIXED_CELL).count(), 23);
        assert_eq!(reference.matches(LENGTH_CELL).count(), 17);
        assert_eq!(reference.matches(TRACK_CELL).count(), 0);
    }

    #[test]
    fn shorter_bars_leave_track() {
        let text = draw(100.0, 60, 9);
        let best = text.lines().find(|l| l.contains("Waygate")).unwrap();
        assert_eq!(best.matches(FIXED_CELL).count(), 15);
        assert_eq!(best.matches(LENGTH_CELL).count(), 3);
        assert_eq!(best.matches(TRACK_CELL).count(), 22);
        assert!(best.contains("±5.5"));
    }

    #[test]
    fn only_reference_label_is_highlighted() {
        let ranking = Catalog::builtin().unwrap().rank(100.0).unwrap();
        let theme = ColorTheme::default();
        let buf = render_buffer(60, 9, |frame| {
            let area = frame.area();
            render_chart(frame, area, &ranking, &theme);
        });
        // Row 1 is Waygate (best), right-aligned: "  Waygate" from x = 1
        assert_eq!(buf[(3, 1)].symbol(), "W");
        assert_eq!(buf[(3, 1)].fg, theme.muted);
        // Its bar and total keep the best color
        assert_eq!(buf[(11, 1)].fg, theme.best);
        // Row 4 is Lumafield, the reference
        assert_eq!(buf[(1, 4)].symbol(), "L");
        assert_eq!(buf[(1, 4)].fg, theme.reference);
    }

    #[test]
    fn legend_present() {
        let text = draw(100.0, 60, 9);
        assert!(text.contains("FIXED ERROR (a)"));
        assert!(text.contains("LENGTH-DEPENDENT (L/b)"));
    }

    #[test]
    fn narrow_area_does_not_panic() {
        draw(100.0, 12, 4);
    }
}
