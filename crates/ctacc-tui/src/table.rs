//! Comparison table widget.

use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use ctacc_cli::output::{format_term, format_total, TABLE_HEADERS};
use ctacc_core::ranking::Ranking;

use crate::styles::ColorTheme;

/// Rows used by the table including its header and borders.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn table_height(ranking: &Ranking) -> u16 {
    ranking.results().len() as u16 + 3
}

/// Render the comparison table. `selected` is a rank index.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    ranking: &Ranking,
    selected: Option<usize>,
    theme: &ColorTheme,
) {
    let header = Row::new(TABLE_HEADERS.iter().enumerate().map(|(i, h)| {
        let line = Line::from(*h);
        Cell::from(if i >= 3 { line.alignment(Alignment::Right) } else { line })
    }))
    .style(theme.muted_style());

    let rows = ranking.results().iter().enumerate().map(|(i, r)| {
        let emphasis = ranking.emphasis(i);
        let mut name = vec![Span::styled(r.spec.name.clone(), theme.emphasis_style(emphasis))];
        if r.is_reference() {
            name.push(Span::raw(" "));
            name.push(Span::styled(" YOU ", theme.tag_style()));
        }
        let number = |text: String| Cell::from(Line::from(text).alignment(Alignment::Right));

        let row = Row::new(vec![
            Cell::from(Line::from(name)),
            Cell::from(r.spec.model.clone()).style(theme.muted_style()),
            Cell::from(r.spec.formula.clone()).style(theme.text_style()),
            number(format_term(r.fixed_error)).style(theme.muted_style()),
            number(format_term(r.length_error)).style(theme.muted_style()),
            number(format_total(r.total_error))
                .style(theme.emphasis_style(emphasis).add_modifier(Modifier::BOLD)),
        ]);
        if selected == Some(i) {
            row.style(theme.selected_style())
        } else if r.is_reference() {
            row.style(theme.reference_row_style())
        } else {
            row.style(Style::default())
        }
    });

    let widths = [
        Constraint::Length(18),
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Length(10),
        Constraint::Length(13),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" comparison "),
        );
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{render_buffer, render_text};
    use ctacc_core::catalog::Catalog;

    fn draw(length: f64, selected: Option<usize>) -> String {
        let ranking = Catalog::builtin().unwrap().rank(length).unwrap();
        let theme = ColorTheme::default();
        render_text(100, table_height(&ranking), |frame| {
            let area = frame.area();
            render_table(frame, area, &ranking, selected, &theme);
        })
    }

    #[test]
    fn header_and_rows() {
        let text = draw(100.0, None);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].contains("MANUFACTURER"));
        assert!(lines[1].contains("TOTAL ±µm"));
        assert!(lines[2].contains("Waygate"));
        assert!(lines[2].contains("±(4.5 + L/100)"));
        assert!(lines[2].contains("±5.5"));
        assert!(lines[5].contains("Lumafield"));
        assert!(lines[5].contains("YOU"));
        assert!(lines[5].contains("±12.0"));
    }

    #[test]
    fn terms_are_shown() {
        let text = draw(100.0, None);
        let lumafield = text.lines().find(|l| l.contains("Lumafield")).unwrap();
        assert!(lumafield.contains("7.0"));
        assert!(lumafield.contains("5.0"));
    }

    #[test]
    fn height_covers_rows() {
        let ranking = Catalog::builtin().unwrap().rank(100.0).unwrap();
        assert_eq!(table_height(&ranking), 7);
    }

    #[test]
    fn reference_row_is_tinted() {
        let ranking = Catalog::builtin().unwrap().rank(100.0).unwrap();
        let theme = ColorTheme::default();
        let draw_buf = |selected: Option<usize>| {
            render_buffer(100, table_height(&ranking), |frame| {
                let area = frame.area();
                render_table(frame, area, &ranking, selected, &theme);
            })
        };

        let buf = draw_buf(None);
        // Row 5 is Lumafield, row 2 is Waygate
        assert_eq!(buf[(1, 5)].bg, theme.reference_tint);
        assert_ne!(buf[(1, 2)].bg, theme.reference_tint);

        // Selection wins over the tint
        let buf = draw_buf(Some(3));
        assert_eq!(buf[(1, 5)].bg, theme.selection);
    }

    #[test]
    fn selection_renders() {
        let text = draw(250.0, Some(1));
        assert!(text.contains("Zeiss"));
    }
}
