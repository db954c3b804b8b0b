//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::debug;

use ctacc_core::catalog::Catalog;
use ctacc_core::constants::PAGE_STEPS;
use ctacc_core::range::LengthRange;
use ctacc_core::ranking::{Ranking, Summary};
use ctacc_core::AccuracyError;

use crate::chart::render_chart;
use crate::details::render_details;
use crate::error::TuiError;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::messages::TuiMessage;
use crate::parameters::render_parameters;
use crate::styles::ColorTheme;
use crate::table::{render_table, table_height};

const PARAMETERS_WIDTH: u16 = 30;
const DETAILS_WIDTH: u16 = 34;
const TICK_RATE: Duration = Duration::from_millis(250);

/// Panel rectangles for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub parameters: Rect,
    pub comparison: Rect,
    /// `None` when the details panel is hidden.
    pub details: Option<Rect>,
    pub footer: Rect,
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Show details toggle.
    pub show_details: bool,
    /// Highlighted table row, as a rank index.
    pub selected: Option<usize>,
    catalog: Catalog,
    range: LengthRange,
    length: f64,
    ranking: Ranking,
    summary: Summary,
    theme: ColorTheme,
    recomputes: u64,
}

impl TuiApp {
    /// Create the model at `length`, clamped onto `range`.
    pub fn new(catalog: Catalog, range: LengthRange, length: f64) -> Result<Self, AccuracyError> {
        let length = range.clamp(length)?;
        let ranking = catalog.rank(length)?;
        let summary = ranking.summary()?;
        Ok(Self {
            should_quit: false,
            show_details: true,
            selected: None,
            catalog,
            range,
            length,
            ranking,
            summary,
            theme: ColorTheme::default(),
            recomputes: 0,
        })
    }

    /// Current part length in mm.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Ranking for the current length.
    #[must_use]
    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }

    #[must_use]
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Number of times the ranking was recomputed after startup.
    #[must_use]
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// Move to a new length and recompute. Unchanged lengths are a no-op.
    #[allow(clippy::float_cmp)] // both sides are snapped to the step grid
    pub fn set_length(&mut self, length: f64) -> Result<(), AccuracyError> {
        let length = self.range.clamp(length)?;
        if length == self.length {
            return Ok(());
        }
        let ranking = self.catalog.rank(length)?;
        let summary = ranking.summary()?;
        self.length = length;
        self.ranking = ranking;
        self.summary = summary;
        self.recomputes += 1;
        debug!(
            length,
            best = self.summary.best_total,
            delta = self.summary.delta,
            "ranking recomputed"
        );
        Ok(())
    }

    /// Handle a single message (Elm Update).
    pub fn handle_message(&mut self, msg: TuiMessage) -> Result<(), AccuracyError> {
        match msg {
            TuiMessage::KeyPress(action) => self.handle_key_action(action)?,
            TuiMessage::SetLength(length) => self.set_length(length)?,
            // The next draw picks up the new size from the frame
            TuiMessage::Resize | TuiMessage::Tick => {}
            TuiMessage::Quit => self.should_quit = true,
        }
        Ok(())
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) -> Result<(), AccuracyError> {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Increase => self.set_length(self.range.step_up(self.length, 1))?,
            KeyAction::Decrease => self.set_length(self.range.step_down(self.length, 1))?,
            KeyAction::PageIncrease => {
                self.set_length(self.range.step_up(self.length, PAGE_STEPS))?;
            }
            KeyAction::PageDecrease => {
                self.set_length(self.range.step_down(self.length, PAGE_STEPS))?;
            }
            KeyAction::Min => self.set_length(self.range.min)?,
            KeyAction::Max => self.set_length(self.range.max)?,
            KeyAction::SelectPrev => self.select_prev(),
            KeyAction::SelectNext => self.select_next(),
            KeyAction::ToggleDetails => self.show_details = !self.show_details,
            KeyAction::None => {}
        }
        Ok(())
    }

    fn select_prev(&mut self) {
        let last = self.ranking.results().len() - 1;
        self.selected = Some(match self.selected {
            None => last,
            Some(i) => i.saturating_sub(1),
        });
    }

    fn select_next(&mut self) {
        let last = self.ranking.results().len() - 1;
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    /// Split the screen into header, three body columns and footer.
    #[must_use]
    pub fn compute_layout(area: Rect, show_details: bool) -> AppLayout {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(5),    // body
                Constraint::Length(2), // footer
            ])
            .split(area);

        let mut columns = vec![Constraint::Length(PARAMETERS_WIDTH), Constraint::Min(20)];
        if show_details {
            columns.push(Constraint::Length(DETAILS_WIDTH));
        }
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(columns)
            .split(outer[1]);

        AppLayout {
            header: outer[0],
            parameters: body[0],
            comparison: body[1],
            details: show_details.then(|| body[2]),
            footer: outer[2],
        }
    }

    /// Split the comparison column into table (top) and chart (bottom).
    #[must_use]
    pub fn compute_comparison_layout(area: Rect, table_rows: u16) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(table_rows), Constraint::Min(3)])
            .split(area);
        (chunks[0], chunks[1])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let layout = Self::compute_layout(frame.area(), self.show_details);

        render_header(frame, layout.header, &self.theme);
        render_parameters(frame, layout.parameters, &self.ranking, &self.range, &self.theme);

        let (table_area, chart_area) =
            Self::compute_comparison_layout(layout.comparison, table_height(&self.ranking));
        render_table(frame, table_area, &self.ranking, self.selected, &self.theme);
        render_chart(frame, chart_area, &self.ranking, &self.theme);

        if let Some(details_area) = layout.details {
            render_details(frame, details_area, &self.ranking, &self.summary, &self.theme);
        }

        render_footer(frame, layout.footer);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// The terminal is restored even when the loop fails; the loop's error
    /// wins over a teardown error.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        let teardown = Self::teardown_terminal(&mut terminal);
        result?;
        teardown?;
        Ok(())
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<(), TuiError> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                return Ok(());
            }

            let msg = if event::poll(TICK_RATE)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        TuiMessage::KeyPress(map_key(key))
                    }
                    Event::Resize(..) => TuiMessage::Resize,
                    _ => continue,
                }
            } else {
                TuiMessage::Tick
            };
            self.handle_message(msg)?;
        }
    }
}
