//! TUI styles and color theme.

use ratatui::style::{Color, Modifier, Style};

use ctacc_core::ranking::Emphasis;

/// Color theme for the TUI.
pub struct ColorTheme {
    /// The user's own scanner.
    pub reference: Color,
    /// The best-ranked scanner.
    pub best: Color,
    /// The `YOU` tag background.
    pub tag: Color,
    /// A delta above zero.
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    /// Unfilled bar track.
    pub track: Color,
    /// Unhighlighted bar segments.
    pub bar: Color,
    pub border: Color,
    /// Background of the selected table row.
    pub selection: Color,
    /// Background of the reference scanner's rows.
    pub reference_tint: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            reference: Color::Rgb(0x42, 0x6B, 0xF3),
            best: Color::Rgb(0x0C, 0xAF, 0x74),
            tag: Color::Rgb(0xB6, 0x1F, 0x73),
            warning: Color::Rgb(0xF8, 0x5F, 0x0A),
            text: Color::White,
            muted: Color::Rgb(0x9D, 0x9D, 0x9D),
            track: Color::Rgb(0x43, 0x43, 0x43),
            bar: Color::Rgb(0x72, 0x72, 0x72),
            border: Color::Rgb(0x69, 0x69, 0x69),
            selection: Color::Rgb(0x2D, 0x2C, 0x2C),
            reference_tint: Color::Rgb(0x1A, 0x24, 0x4A),
        }
    }
}

impl ColorTheme {
    /// Get the style for the title.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for labels and secondary values.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get the style for panel borders.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Text style for a ranked row.
    #[must_use]
    pub fn emphasis_style(&self, emphasis: Emphasis) -> Style {
        match emphasis {
            Emphasis::Reference => Style::default()
                .fg(self.reference)
                .add_modifier(Modifier::BOLD),
            Emphasis::Best => Style::default().fg(self.best),
            Emphasis::Normal => self.text_style(),
        }
    }

    /// Style of a bar label: only the reference name stands out.
    #[must_use]
    pub fn label_style(&self, emphasis: Emphasis) -> Style {
        match emphasis {
            Emphasis::Reference => self.emphasis_style(Emphasis::Reference),
            Emphasis::Best | Emphasis::Normal => self.muted_style(),
        }
    }

    /// Background tint of the reference scanner's rows.
    #[must_use]
    pub fn reference_row_style(&self) -> Style {
        Style::default().bg(self.reference_tint)
    }

    /// Bar color for a ranked row.
    #[must_use]
    pub fn bar_color(&self, emphasis: Emphasis) -> Color {
        match emphasis {
            Emphasis::Reference => self.reference,
            Emphasis::Best => self.best,
            Emphasis::Normal => self.bar,
        }
    }

    /// Style of the `YOU` tag.
    #[must_use]
    pub fn tag_style(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.tag)
            .add_modifier(Modifier::BOLD)
    }

    /// Style of the delta value.
    #[must_use]
    pub fn delta_style(&self, level: bool) -> Style {
        Style::default().fg(if level { self.best } else { self.warning })
    }

    /// Style of the selected table row.
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default().bg(self.selection)
    }
}
