//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use ctacc_cli::output::{SUBTITLE, TITLE};

use crate::styles::ColorTheme;

/// Render the title bar.
pub fn render_header(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let text = vec![Line::from(vec![
        Span::styled(TITLE, theme.header_style()),
        Span::raw("   "),
        Span::styled(SUBTITLE, theme.muted_style()),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style());

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
