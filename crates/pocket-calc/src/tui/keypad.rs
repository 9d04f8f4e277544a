//! Clickable keypad for the terminal
//!
//! Visual feedback: the button under the mouse lights up while pressed and
//! the pending operator stays highlighted until `=` or `C`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::Operator;
use crate::keypad::{ButtonKind, Keypad};

/// Size of one button cell inside the bordered keypad area
fn cell_size(keypad: &Keypad, area: Rect) -> Option<(u16, u16)> {
    let (rows, cols) = keypad.dimensions();
    let width = area.width.saturating_sub(2) / cols as u16;
    let height = area.height.saturating_sub(2) / rows as u16;
    (width > 0 && height > 0).then_some((width, height))
}

/// Converts a click position to a button index
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<usize> {
    if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
        return None;
    }

    let rel_x = x - area.x;
    let rel_y = y - area.y;

    // Border is one cell on each side
    if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
        return None;
    }

    let (btn_width, btn_height) = cell_size(keypad, area)?;
    let col = ((rel_x - 1) / btn_width) as usize;
    let row = ((rel_y - 1) / btn_height) as usize;

    let (rows, cols) = keypad.dimensions();
    (row < rows && col < cols).then_some(row * cols + col)
}

/// Screen position of the middle of a button
#[must_use]
pub fn button_center(keypad: &Keypad, area: Rect, index: usize) -> Option<(u16, u16)> {
    let button = keypad.get_button(index)?;
    let (btn_width, btn_height) = cell_size(keypad, area)?;
    let x = area.x + 1 + button.col as u16 * btn_width + btn_width / 2;
    let y = area.y + 1 + button.row as u16 * btn_height + btn_height / 2;
    Some((x, y))
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    active: Option<Operator>,
    pressed: Option<usize>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            active: None,
            pressed: None,
        }
    }

    /// Highlights the button of the pending operator
    #[must_use]
    pub fn active_operator(mut self, op: Option<Operator>) -> Self {
        self.active = op;
        self
    }

    /// Lights up the button being clicked
    #[must_use]
    pub fn pressed(mut self, index: Option<usize>) -> Self {
        self.pressed = index;
        self
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let Some((btn_width, btn_height)) = cell_size(self.keypad, area) else {
            return;
        };

        for (index, btn) in self.keypad.buttons().iter().enumerate() {
            let x = area.x + 1 + btn.col as u16 * btn_width;
            let y = area.y + 1 + btn.row as u16 * btn_height;

            let style = if self.pressed == Some(index) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if btn.operator().is_some() && btn.operator() == self.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.kind() {
                    ButtonKind::Entry => Style::default().fg(Color::White),
                    ButtonKind::Operator => Style::default().fg(Color::Yellow),
                    ButtonKind::Equals => Style::default().fg(Color::Green),
                    ButtonKind::Control => Style::default().fg(Color::Red),
                }
            };

            let label = format!("[{}]", btn.token());
            let label_x = x + btn_width.saturating_sub(label.len() as u16) / 2;
            let label_y = y + btn_height / 2;
            buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Command;

    fn area() -> Rect {
        // 4 columns of 6 cells, 5 rows of 4 cells, plus the border
        Rect::new(10, 2, 26, 22)
    }

    fn content(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    // ===== hit_test tests =====

    #[test]
    fn test_hit_test_first_and_last() {
        let keypad = Keypad::new();
        assert_eq!(hit_test(&keypad, area(), 11, 3), Some(0));
        assert_eq!(hit_test(&keypad, area(), 34, 22), Some(19));
    }

    #[test]
    fn test_hit_test_outside() {
        let keypad = Keypad::new();
        assert_eq!(hit_test(&keypad, area(), 0, 0), None);
        assert_eq!(hit_test(&keypad, area(), 36, 10), None);
        assert_eq!(hit_test(&keypad, area(), 20, 24), None);
    }

    #[test]
    fn test_hit_test_border() {
        let keypad = Keypad::new();
        assert_eq!(hit_test(&keypad, area(), 10, 10), None);
        assert_eq!(hit_test(&keypad, area(), 20, 2), None);
        assert_eq!(hit_test(&keypad, area(), 35, 10), None);
    }

    #[test]
    fn test_hit_test_too_small() {
        let keypad = Keypad::new();
        assert_eq!(hit_test(&keypad, Rect::new(0, 0, 4, 4), 1, 1), None);
    }

    #[test]
    fn test_button_center_hits_same_button() {
        let keypad = Keypad::new();
        for index in 0..keypad.button_count() {
            let (x, y) = button_center(&keypad, area(), index).unwrap();
            assert_eq!(hit_test(&keypad, area(), x, y), Some(index));
        }
    }

    #[test]
    fn test_button_center_out_of_range() {
        assert_eq!(button_center(&Keypad::new(), area(), 20), None);
    }

    #[test]
    fn test_hit_test_equals() {
        let keypad = Keypad::new();
        let (x, y) = button_center(&keypad, area(), 19).unwrap();
        let index = hit_test(&keypad, area(), x, y).unwrap();
        assert_eq!(keypad.get_button(index).unwrap().command, Command::Equals);
    }

    // ===== Widget tests =====

    #[test]
    fn test_widget_renders_labels() {
        let keypad = Keypad::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 26, 22));
        KeypadWidget::new(&keypad).render(buf.area, &mut buf);
        let text = content(&buf);
        for label in ["[C]", "[del]", "[+/-]", "[7]", "[%]", "[=]"] {
            assert!(text.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_widget_highlights_active_operator() {
        let keypad = Keypad::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 26, 22));
        KeypadWidget::new(&keypad)
            .active_operator(Some(Operator::Add))
            .render(buf.area, &mut buf);

        let center = |op| {
            let index = keypad.position_of(Command::Operator(op)).unwrap();
            button_center(&keypad, buf.area, index).unwrap()
        };
        assert_eq!(buf[center(Operator::Add)].bg, Color::Cyan);
        assert_ne!(buf[center(Operator::Subtract)].bg, Color::Cyan);
    }

    #[test]
    fn test_widget_highlights_pressed() {
        let keypad = Keypad::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 26, 22));
        KeypadWidget::new(&keypad)
            .pressed(Some(5))
            .render(buf.area, &mut buf);
        let (x, y) = button_center(&keypad, buf.area, 5).unwrap();
        assert_eq!(buf[(x, y)].bg, Color::Yellow);
    }

    #[test]
    fn test_widget_too_small_draws_border_only() {
        let keypad = Keypad::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 4));
        KeypadWidget::new(&keypad).render(buf.area, &mut buf);
        assert!(!content(&buf).contains("[7]"));
    }
}
