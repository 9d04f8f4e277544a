//! Terminal rendering
//!
//! Visual feedback: display, pending operator, tape and keypad are all on
//! screen at once.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::view::operation_label;

/// Title on the outer border
pub const TITLE: &str = " Pocket Calculator ";

/// Hint shown under the tape
pub const HELP_TEXT: &str = "Click the keys with the mouse   q / Esc: quit";

/// Width of the keypad panel, border included
pub const KEYPAD_WIDTH: u16 = 26;

/// Number of tape lines shown
const TAPE_LINES: usize = 10;

/// Screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Display panel
    pub display: Rect,
    /// Pending operator panel
    pub operation: Rect,
    /// Tape panel
    pub tape: Rect,
    /// Help line
    pub help: Rect,
    /// Keypad panel (click target)
    pub keypad: Rect,
}

/// Splits the screen into panels
#[must_use]
pub fn layout(area: Rect) -> UiLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Min(20), Constraint::Length(KEYPAD_WIDTH)])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Length(3), // Operation
            Constraint::Min(3),    // Tape
            Constraint::Length(3), // Help
        ])
        .split(columns[0]);

    UiLayout {
        display: rows[0],
        operation: rows[1],
        tape: rows[2],
        help: rows[3],
        keypad: columns[1],
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
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.calculator().is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_operation(&self, area: Rect, buf: &mut Buffer) {
        let op = self.app.active_operator();
        let style = if op.is_some() {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        Paragraph::new(Span::styled(operation_label(op), style))
            .block(
                Block::default()
                    .title(" Operation ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_tape(&self, area: Rect, buf: &mut Buffer) {
        let calculator = self.app.calculator();
        let precision = calculator.settings().precision;

        let items: Vec<ListItem> = calculator
            .tape()
            .iter_rev()
            .take(TAPE_LINES)
            .map(|entry| {
                ListItem::new(Span::styled(
                    entry.display(precision),
                    Style::default().fg(Color::Gray),
                ))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Tape (newest first) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let regions = layout(area);
        self.render_display(regions.display, buf);
        self.render_operation(regions.operation, buf);
        self.render_tape(regions.tape, buf);
        Self::render_help(regions.help, buf);

        KeypadWidget::new(self.app.keypad())
            .active_operator(self.app.active_operator())
            .pressed(self.app.pressed())
            .render(regions.keypad, buf);
    }
}
