//! Text and JSON rendering of a ranking.
//!
//! Every function here returns a `String` so the presenter can print it and
//! tests can inspect it. Cells are styled before padding; `console::pad_str`
//! measures visible width and ignores ANSI escapes.

use console::{measure_text_width, pad_str, Alignment};
use serde::Serialize;

use ctacc_core::calculator::ScannerResult;
use ctacc_core::ranking::{segment_widths, Emphasis, Ranking, Summary};

use crate::ui::Palette;

/// Report title.
pub const TITLE: &str = "CT Scanner Accuracy Comparison";

/// Report subtitle naming the formula model.
pub const SUBTITLE: &str = "VDI/VDE 2630 · ±(a + L/b) µm";

/// Note printed under the details panel.
pub const DISCLAIMER: &str =
    "Specs are approximate, based on publicly available data. Confirm with manufacturer datasheets.";

/// Comparison table column headers.
pub const TABLE_HEADERS: [&str; 6] = [
    "MANUFACTURER",
    "MODEL",
    "FORMULA (µm)",
    "FIXED (a)",
    "LENGTH (L/b)",
    "TOTAL ±µm",
];

/// Default width of the bar chart track in cells.
pub const DEFAULT_CHART_WIDTH: usize = 40;

const LABEL_WIDTH: usize = 12;

/// Format a total error as `±12.0`.
#[must_use]
pub fn format_total(value: f64) -> String {
    format!("±{value:.1}")
}

/// Format a single error term with one decimal.
#[must_use]
pub fn format_term(value: f64) -> String {
    format!("{value:.1}")
}

/// Format a part length as `100 mm`.
#[must_use]
pub fn format_length(length: f64) -> String {
    format!("{length} mm")
}

/// Title and subtitle.
#[must_use]
pub fn render_title(palette: &Palette) -> String {
    format!(
        "{}\n{}\n",
        palette.heading(TITLE),
        palette.muted(SUBTITLE)
    )
}

/// The parameters panel: the current length.
#[must_use]
pub fn render_parameters(ranking: &Ranking, palette: &Palette) -> String {
    format!(
        "{}\n{}{}\n",
        palette.heading("PARAMETERS"),
        pad_str(&palette.muted("Length"), LABEL_WIDTH, Alignment::Left, None),
        format_length(ranking.length()),
    )
}

/// Ranked scanner names with their totals.
#[must_use]
pub fn render_scanner_list(ranking: &Ranking, palette: &Palette) -> String {
    let name_width = name_width(ranking.results());
    let mut out = format!("{}\n", palette.muted("Scanners"));
    for (i, r) in ranking.results().iter().enumerate() {
        let emphasis = ranking.emphasis(i);
        let marker = palette.emphasis("■", emphasis);
        let name = palette.emphasis(&r.spec.name, emphasis);
        out.push_str(&format!(
            "  {marker} {} {}\n",
            pad_str(&name, name_width, Alignment::Left, None),
            pad_str(&palette.muted(&format_total(r.total_error)), 7, Alignment::Right, None),
        ));
    }
    out
}

/// The comparison table.
#[must_use]
pub fn render_table(ranking: &Ranking, palette: &Palette) -> String {
    let rows: Vec<[String; 6]> = ranking
        .results()
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let emphasis = ranking.emphasis(i);
            let mut name = palette.emphasis(&r.spec.name, emphasis);
            if r.is_reference() {
                name = format!("{name} {}", palette.tag("YOU"));
            }
            [
                name,
                palette.muted(&r.spec.model),
                r.spec.formula.clone(),
                palette.muted(&format_term(r.fixed_error)),
                palette.muted(&format_term(r.length_error)),
                palette.emphasis(&format_total(r.total_error), emphasis),
            ]
        })
        .collect();

    let mut widths: [usize; 6] = TABLE_HEADERS.map(measure_text_width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let align = |col: usize| if col >= 3 { Alignment::Right } else { Alignment::Left };
    let join = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(col, cell)| pad_str(cell, widths[col], align(col), None).into_owned())
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header: Vec<String> = TABLE_HEADERS.iter().map(|h| palette.muted(h)).collect();
    let total_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);

    let mut out = format!("{}\n{}\n", join(header.as_slice()), "─".repeat(total_width));
    for row in &rows {
        out.push_str(&join(row.as_slice()));
        out.push('\n');
    }
    out
}

/// Segmented bars: fixed error then length-dependent error, scaled to the maximum total.
#[must_use]
pub fn render_bar_chart(ranking: &Ranking, summary: &Summary, width: usize, palette: &Palette) -> String {
    let name_width = name_width(ranking.results());
    let mut out = format!(
        "{}\n",
        palette.muted(&format!("ERROR BREAKDOWN AT L = {}", format_length(ranking.length())))
    );

    for (i, r) in ranking.results().iter().enumerate() {
        let emphasis = ranking.emphasis(i);
        let (fixed, dep) = segment_widths(r.fixed_error, r.length_error, summary.max_total, width);
        let bar = format!(
            "{}{}{}",
            palette.emphasis(&"█".repeat(fixed), emphasis),
            palette.secondary(&"▒".repeat(dep), emphasis),
            " ".repeat(width - fixed - dep),
        );
        out.push_str(&format!(
            "{} {bar} {}\n",
            pad_str(&palette.emphasis(&r.spec.name, emphasis), name_width, Alignment::Right, None),
            palette.emphasis(&format_total(r.total_error), emphasis),
        ));
    }

    out.push_str(&palette.muted("█ FIXED ERROR (a)   ▒ LENGTH-DEPENDENT (L/b)"));
    out.push('\n');
    out
}

/// Details panel: part size, best, own, delta, ranking, disclaimer.
#[must_use]
pub fn render_details(ranking: &Ranking, summary: &Summary, palette: &Palette) -> String {
    let label = |text: &str| pad_str(&palette.muted(text), LABEL_WIDTH, Alignment::Left, None).into_owned();
    let delta = palette.delta(
        &format!("{} µm", format_term(summary.delta)),
        summary.reference_is_best(),
    );

    let mut out = format!("{}\n", palette.heading("DETAILS"));
    out.push_str(&format!("{}{}\n", label("Part Size"), format_length(summary.part_length)));
    out.push_str(&format!("{}{} µm\n", label("Best Total"), format_total(summary.best_total)));
    out.push_str(&format!(
        "{}{}\n",
        label("Your Total"),
        palette.emphasis(
            &format!("{} µm", format_total(summary.reference_total)),
            Emphasis::Reference
        )
    ));
    out.push_str(&format!("{}{delta}\n", label("Delta")));

    out.push_str(&format!("\n{}\n", palette.muted("RANKING")));
    for (i, r) in ranking.results().iter().enumerate() {
        let rank = format!("{:>2}", i + 1);
        let rank = if i == 0 {
            palette.emphasis(&rank, Emphasis::Best)
        } else {
            palette.muted(&rank)
        };
        let name = if r.is_reference() {
            palette.emphasis(&r.spec.name, Emphasis::Reference)
        } else {
            r.spec.name.clone()
        };
        out.push_str(&format!("{rank}  {name}\n"));
    }

    out.push_str(&format!("\n{}\n", palette.muted(DISCLAIMER)));
    out
}

/// The full text report.
#[must_use]
pub fn render_report(ranking: &Ranking, summary: &Summary, chart_width: usize, palette: &Palette) -> String {
    [
        render_title(palette),
        render_parameters(ranking, palette),
        render_scanner_list(ranking, palette),
        format!("{}\n{}", palette.heading("COMPARISON"), render_table(ranking, palette)),
        render_bar_chart(ranking, summary, chart_width, palette),
        render_details(ranking, summary, palette),
    ]
    .join("\n")
}

/// One `name<TAB>total` line per ranked scanner.
#[must_use]
pub fn render_quiet(ranking: &Ranking) -> String {
    ranking
        .results()
        .iter()
        .map(|r| format!("{}\t{:.1}\n", r.spec.name, r.total_error))
        .collect()
}

/// Serialized shape of `--json` output.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub part_length_mm: f64,
    pub results: &'a [ScannerResult],
    pub summary: &'a Summary,
}

/// Render the ranking and summary as a JSON document.
///
/// # Errors
///
/// Returns a serialization error; the data model contains only finite
/// numbers and strings, so this does not happen in practice.
pub fn render_json(ranking: &Ranking, summary: &Summary, pretty: bool) -> serde_json::Result<String> {
    let report = JsonReport {
        part_length_mm: ranking.length(),
        results: ranking.results(),
        summary,
    };
    if pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
}

fn name_width(results: &[ScannerResult]) -> usize {
    results
        .iter()
        .map(|r| measure_text_width(&r.spec.name))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctacc_core::catalog::Catalog;

    fn builtin_at(length: f64) -> (Ranking, Summary) {
        let ranking = Catalog::builtin().unwrap().rank(length).unwrap();
        let summary = ranking.summary().unwrap();
        (ranking, summary)
    }

    #[test]
    fn number_formats() {
        assert_eq!(format_total(12.0), "±12.0");
        assert_eq!(format_total(5.55), "±5.5");
        assert_eq!(format_term(6.5), "6.5");
        assert_eq!(format_length(100.0), "100 mm");
        assert_eq!(format_length(12.5), "12.5 mm");
    }

    #[test]
    fn scanner_list_in_rank_order() {
        let (ranking, _) = builtin_at(100.0);
        let list = render_scanner_list(&ranking, &Palette::plain());
        let lines: Vec<&str> = list.lines().skip(1).collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Waygate") && lines[0].contains("±5.5"));
        assert!(lines[3].contains("Lumafield") && lines[3].contains("±12.0"));
    }

    #[test]
    fn table_has_headers_and_rows() {
        let (ranking, _) = builtin_at(100.0);
        let table = render_table(&ranking, &Palette::plain());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("MANUFACTURER"));
        assert!(lines[0].ends_with("TOTAL ±µm"));
        assert!(lines[2].contains("v|tome|x M"));
        assert!(lines[2].contains("±(4.5 + L/100)"));
        assert!(lines[5].contains("Lumafield YOU"));
        assert!(lines[5].ends_with("±12.0"));
    }

    #[test]
    fn table_columns_align() {
        let (ranking, _) = builtin_at(100.0);
        let table = render_table(&ranking, &Palette::plain());
        let widths: Vec<usize> = table
            .lines()
            .skip(2)
            .map(measure_text_width)
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn styled_table_matches_plain_layout() {
        let (ranking, _) = builtin_at(100.0);
        let plain = render_table(&ranking, &Palette::plain());
        let styled = render_table(&ranking, &Palette::new(true));
        assert_eq!(console::strip_ansi_codes(&styled), plain);
    }

    #[test]
    fn bar_chart_scales_to_max() {
        let (ranking, summary) = builtin_at(100.0);
        let chart = render_bar_chart(&ranking, &summary, 24, &Palette::plain());
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "ERROR BREAKDOWN AT L = 100 mm");
        // Lumafield has the maximum total and fills the track.
        let reference = lines.iter().find(|l| l.contains("Lumafield")).unwrap();
        assert_eq!(reference.matches('█').count(), 14);
        assert_eq!(reference.matches('▒').count(), 10);
        let best = lines[1];
        assert!(best.contains("Waygate"));
        assert_eq!(best.matches('█').count(), 9);
        assert_eq!(best.matches('▒').count(), 2);
        assert!(lines.last().unwrap().contains("LENGTH-DEPENDENT"));
    }

    #[test]
    fn details_values() {
        let (ranking, summary) = builtin_at(100.0);
        let details = render_details(&ranking, &summary, &Palette::plain());
        assert!(details.contains("Part Size   100 mm"));
        assert!(details.contains("Best Total  ±5.5 µm"));
        assert!(details.contains("Your Total  ±12.0 µm"));
        assert!(details.contains("Delta       6.5 µm"));
        assert!(details.contains(" 1  Waygate"));
        assert!(details.contains(" 4  Lumafield"));
        assert!(details.contains(DISCLAIMER));
    }

    #[test]
    fn full_report_sections_in_order() {
        let (ranking, summary) = builtin_at(250.0);
        let report = render_report(&ranking, &summary, DEFAULT_CHART_WIDTH, &Palette::plain());
        let order = [TITLE, "PARAMETERS", "Scanners", "COMPARISON", "ERROR BREAKDOWN", "DETAILS"];
        let positions: Vec<usize> = order.iter().map(|s| report.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(report.contains("250 mm"));
    }

    #[test]
    fn quiet_lines() {
        let (ranking, _) = builtin_at(100.0);
        assert_eq!(
            render_quiet(&ranking),
            "Waygate\t5.5\nZeiss\t11.0\nNikon\t11.0\nLumafield\t12.0\n"
        );
    }

    #[test]
    fn json_report_shape() {
        let (ranking, summary) = builtin_at(100.0);
        let json = render_json(&ranking, &summary, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["part_length_mm"], 100.0);
        assert_eq!(value["results"][0]["name"], "Waygate");
        assert_eq!(value["results"][3]["role"], "reference");
        assert_eq!(value["summary"]["delta"], 6.5);
        assert_eq!(value["summary"]["best_total"], 5.5);
    }
}
