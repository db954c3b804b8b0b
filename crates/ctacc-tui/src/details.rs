//! Right panel: aggregates, ranking and disclaimer.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use ctacc_cli::output::{format_length, format_term, format_total, DISCLAIMER};
use ctacc_core::ranking::{Emphasis, Ranking, Summary};

use crate::styles::ColorTheme;

const LABEL_WIDTH: usize = 12;

/// Render the details panel.
pub fn render_details(
    frame: &mut Frame,
    area: Rect,
    ranking: &Ranking,
    summary: &Summary,
    theme: &ColorTheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" details ");

    let width = LABEL_WIDTH;
    let field = |label: &str, value: Span<'static>| {
        Line::from(vec![
            Span::styled(format!("{label:<width$}"), theme.muted_style()),
            value,
        ])
    };

    let mut lines = vec![
        field(
            "Part Size",
            Span::styled(format_length(summary.part_length), theme.text_style()),
        ),
        field(
            "Best Total",
            Span::styled(
                format!("{} µm", format_total(summary.best_total)),
                theme.emphasis_style(Emphasis::Best),
            ),
        ),
        field(
            "Your Total",
            Span::styled(
                format!("{} µm", format_total(summary.reference_total)),
                theme.emphasis_style(Emphasis::Reference),
            ),
        ),
        field(
            "Delta",
            Span::styled(
                format!("{} µm", format_term(summary.delta)),
                theme
                    .delta_style(summary.reference_is_best())
                    .add_modifier(Modifier::BOLD),
            ),
        ),
        Line::default(),
        Line::from(Span::styled("Ranking", theme.muted_style())),
    ];

    for (i, r) in ranking.results().iter().enumerate() {
        let emphasis = ranking.emphasis(i);
        let rank_style = if i == 0 {
            theme.emphasis_style(Emphasis::Best)
        } else {
            theme.muted_style()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}  ", i + 1), rank_style),
            Span::styled(r.spec.name.clone(), theme.emphasis_style(emphasis)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(DISCLAIMER, theme.muted_style())));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
