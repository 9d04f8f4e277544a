//! Keypad layout shared by every view
//!
//! Visual feedback: the terminal and the web page draw the same grid, so a
//! button is found at the same row and column everywhere.
//!
//! ```text
//! [ C ] [del] [+/-] [ / ]
//! [ 7 ] [ 8 ] [ 9 ] [ * ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ % ] [ 0 ] [ . ] [ = ]
//! ```

use crate::core::{Command, Operator};

/// Visual group a button belongs to (used for styling)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Digits and the decimal point
    Entry,
    /// Binary operators and percent
    Operator,
    /// The `=` key
    Equals,
    /// `C`, `del` and `+/-`
    Control,
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Command sent when the button is clicked
    pub command: Command,
    /// Element id on the web page
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button at the given grid position
    #[must_use]
    pub fn new(command: Command, row: usize, col: usize) -> Self {
        let id = match command {
            Command::Digit(d) => format!("btn-{d}"),
            Command::Decimal => "btn-decimal".to_string(),
            Command::ToggleSign => "btn-sign".to_string(),
            Command::Clear => "btn-clear".to_string(),
            Command::Backspace => "btn-del".to_string(),
            Command::Equals => "btn-equals".to_string(),
            Command::Operator(op) => format!("btn-{}", op.name()),
        };
        Self {
            command,
            id,
            row,
            col,
        }
    }

    /// Returns the button token, which is also its label
    #[must_use]
    pub fn token(&self) -> String {
        self.command.token()
    }

    /// Returns the operator this button selects, if any
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.command.operator()
    }

    /// Returns the styling group
    #[must_use]
    pub const fn kind(&self) -> ButtonKind {
        match self.command {
            Command::Digit(_) | Command::Decimal => ButtonKind::Entry,
            Command::Operator(_) => ButtonKind::Operator,
            Command::Equals => ButtonKind::Equals,
            Command::Clear | Command::Backspace | Command::ToggleSign => ButtonKind::Control,
        }
    }
}

/// The 5x4 calculator keypad
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Number of rows in the grid
    pub const ROWS: usize = 5;
    /// Number of columns in the grid
    pub const COLS: usize = 4;

    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let layout = [
            [
                Command::Clear,
                Command::Backspace,
                Command::ToggleSign,
                Command::Operator(Operator::Divide),
            ],
            [
                Command::Digit(7),
                Command::Digit(8),
                Command::Digit(9),
                Command::Operator(Operator::Multiply),
            ],
            [
                Command::Digit(4),
                Command::Digit(5),
                Command::Digit(6),
                Command::Operator(Operator::Subtract),
            ],
            [
                Command::Digit(1),
                Command::Digit(2),
                Command::Digit(3),
                Command::Operator(Operator::Add),
            ],
            [
                Command::Operator(Operator::Percent),
                Command::Digit(0),
                Command::Decimal,
                Command::Equals,
            ],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, commands)| {
                commands
                    .iter()
                    .enumerate()
                    .map(move |(col, command)| KeypadButton::new(*command, row, col))
            })
            .collect();

        Self {
            buttons,
            cols: Self::COLS,
            rows: Self::ROWS,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns every button in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the index of the button sending `command`
    #[must_use]
    pub fn position_of(&self, command: Command) -> Option<usize> {
        self.buttons.iter().position(|b| b.command == command)
    }

    /// Finds a button by its token
    #[must_use]
    pub fn find_by_token(&self, token: &str) -> Option<&KeypadButton> {
        let command: Command = token.parse().ok()?;
        self.buttons.iter().find(|b| b.command == command)
    }

    /// Finds a button by its element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button selecting `op`
    #[must_use]
    pub fn find_operator(&self, op: Operator) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.operator() == Some(op))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== KeypadButton tests =====

    #[test]
    fn test_button_ids() {
        assert_eq!(KeypadButton::new(Command::Digit(7), 0, 0).id, "btn-7");
        assert_eq!(KeypadButton::new(Command::Decimal, 0, 0).id, "btn-decimal");
        assert_eq!(KeypadButton::new(Command::ToggleSign, 0, 0).id, "btn-sign");
        assert_eq!(KeypadButton::new(Command::Clear, 0, 0).id, "btn-clear");
        assert_eq!(KeypadButton::new(Command::Backspace, 0, 0).id, "btn-del");
        assert_eq!(KeypadButton::new(Command::Equals, 0, 0).id, "btn-equals");
        assert_eq!(
            KeypadButton::new(Command::Operator(Operator::Percent), 0, 0).id,
            "btn-percent"
        );
    }

    #[test]
    fn test_button_kind() {
        assert_eq!(KeypadButton::new(Command::Digit(1), 0, 0).kind(), ButtonKind::Entry);
        assert_eq!(KeypadButton::new(Command::Decimal, 0, 0).kind(), ButtonKind::Entry);
        assert_eq!(
            KeypadButton::new(Command::Operator(Operator::Add), 0, 0).kind(),
            ButtonKind::Operator
        );
        assert_eq!(KeypadButton::new(Command::Equals, 0, 0).kind(), ButtonKind::Equals);
        assert_eq!(KeypadButton::new(Command::Backspace, 0, 0).kind(), ButtonKind::Control);
    }

    #[test]
    fn test_button_token_and_operator() {
        let btn = KeypadButton::new(Command::Operator(Operator::Multiply), 1, 3);
        assert_eq!(btn.token(), "*");
        assert_eq!(btn.operator(), Some(Operator::Multiply));
        assert_eq!(KeypadButton::new(Command::Equals, 4, 3).operator(), None);
    }

    // ===== Keypad layout tests =====

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.dimensions(), (5, 4));
        assert_eq!(keypad.button_count(), 20);
    }

    #[test]
    fn test_keypad_rows() {
        let keypad = Keypad::new();
        let row = |r: usize| -> Vec<String> {
            (0..4)
                .map(|c| keypad.get_button_at(r, c).unwrap().token())
                .collect()
        };
        assert_eq!(row(0), ["C", "del", "+/-", "/"]);
        assert_eq!(row(1), ["7", "8", "9", "*"]);
        assert_eq!(row(2), ["4", "5", "6", "-"]);
        assert_eq!(row(3), ["1", "2", "3", "+"]);
        assert_eq!(row(4), ["%", "0", ".", "="]);
    }

    #[test]
    fn test_keypad_positions_match_index() {
        let keypad = Keypad::new();
        for (i, btn) in keypad.buttons().iter().enumerate() {
            assert_eq!(btn.row * Keypad::COLS + btn.col, i);
        }
    }

    #[test]
    fn test_keypad_every_token_once() {
        let keypad = Keypad::new();
        let mut tokens: Vec<String> = (0..=9).map(|d: u8| d.to_string()).collect();
        tokens.extend(
            [".", "+/-", "C", "del", "=", "+", "-", "*", "/", "%"].map(String::from),
        );
        for token in &tokens {
            let count = keypad.buttons().iter().filter(|b| &b.token() == token).count();
            assert_eq!(count, 1, "{token} should appear exactly once");
        }
        assert_eq!(tokens.len(), keypad.button_count());
    }

    #[test]
    fn test_keypad_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.get_button(20).is_none());
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    // ===== Lookup tests =====

    #[test]
    fn test_find_by_token() {
        let keypad = Keypad::new();
        let btn = keypad.find_by_token("del").unwrap();
        assert_eq!((btn.row, btn.col), (0, 1));
        assert!(keypad.find_by_token("sqrt").is_none());
    }

    #[test]
    fn test_find_by_id() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find_by_id("btn-5").unwrap().command, Command::Digit(5));
        assert!(keypad.find_by_id("btn-missing").is_none());
    }

    #[test]
    fn test_find_operator() {
        let keypad = Keypad::new();
        for op in Operator::ALL {
            assert_eq!(keypad.find_operator(op).unwrap().operator(), Some(op));
        }
    }

    #[test]
    fn test_position_of() {
        let keypad = Keypad::new();
        assert_eq!(keypad.position_of(Command::Clear), Some(0));
        assert_eq!(keypad.position_of(Command::Equals), Some(19));
    }
}
