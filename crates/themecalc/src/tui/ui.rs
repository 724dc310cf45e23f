//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::{Keypad, KeypadWidget};
use super::palette::Palette;
use crate::theme::Theme;

/// Widest the calculator is drawn, in columns
pub const MAX_WIDTH: u16 = 44;

/// Title shown in the header
pub const TITLE: &str = "calc";

/// Key help shown in the footer
pub const HELP: &str = "t theme  esc reset  q quit";

/// Screen regions of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    /// Title and theme indicator
    pub header: Rect,
    /// Number display
    pub display: Rect,
    /// Keypad including its border
    pub keypad: Rect,
    /// Help or status line
    pub footer: Rect,
}

impl CalculatorLayout {
    /// Splits the terminal area into calculator regions
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let [column] = Layout::horizontal([Constraint::Max(MAX_WIDTH)])
            .flex(Flex::Center)
            .areas(area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Length(3), // Display
                Constraint::Min(7),    // Keypad
                Constraint::Length(1), // Footer
            ])
            .split(column);

        Self {
            header: chunks[0],
            display: chunks[1],
            keypad: chunks[2],
            footer: chunks[3],
        }
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
    keypad: Keypad,
    palette: Palette,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        let mut keypad = Keypad::new();
        if let Some(token) = app.last_pressed() {
            keypad.highlight(token);
        }
        Self {
            app,
            keypad,
            palette: Palette::for_theme(app.theme()),
        }
    }

    /// Renders the title and the three-position theme indicator
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let text_style = Style::default().fg(self.palette.header_text);
        let [title_area, toggle_area] =
            Layout::horizontal([Constraint::Min(TITLE.len() as u16), Constraint::Length(12)])
                .areas(area);

        Paragraph::new(Line::from(Span::styled(
            TITLE,
            text_style.add_modifier(Modifier::BOLD),
        )))
        .render(title_area, buf);

        let numbers = Line::from(Span::styled("1 2 3", text_style));
        let knobs: Vec<Span> = Theme::ALL
            .iter()
            .enumerate()
            .flat_map(|(i, theme)| {
                let knob = if *theme == self.app.theme() {
                    Span::styled("●", Style::default().fg(self.palette.accent))
                } else {
                    Span::styled("·", text_style)
                };
                let gap = if i + 1 < Theme::ALL.len() { " " } else { "" };
                [knob, Span::raw(gap)]
            })
            .collect();
        let mut toggle = vec![Span::styled("THEME ", text_style)];
        toggle.extend(knobs);

        Paragraph::new(vec![numbers, Line::from(toggle)])
            .alignment(Alignment::Right)
            .render(toggle_area, buf);
    }

    /// Renders the right-aligned number display
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.palette.header_text)
            .bg(self.palette.screen)
            .add_modifier(Modifier::BOLD);

        Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.screen)),
            )
            .render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let line = match self.app.status() {
            Some(status) => Span::styled(status, Style::default().fg(self.palette.accent)),
            None => Span::styled(
                HELP,
                Style::default()
                    .fg(self.palette.header_text)
                    .add_modifier(Modifier::DIM),
            ),
        };
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.palette.background));

        let layout = CalculatorLayout::new(area);
        self.render_header(layout.header, buf);
        self.render_display(layout.display, buf);
        KeypadWidget::new(&self.keypad, self.palette).render(layout.keypad, buf);
        self.render_footer(layout.footer, buf);
    }
}
