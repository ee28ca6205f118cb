//! Keyboard input handling for the TUI shell.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::engine::{Op, Token};

/// Action resolved from a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a calculator button
    Press(Token),
    /// Quit the application
    Quit,
    /// Ignored input
    None,
}

/// Maps key events to calculator actions.
///
/// Digits, `.` (or the `,` alias for comma-decimal keyboards), the ASCII
/// operators, and the Unicode operator symbols all map to their tokens.
/// `Enter` and `=` press equals, `Backspace` presses delete, `Esc` and `c`
/// press clear, `n` toggles the sign, `%` takes the percentage. `q` or
/// `Ctrl+C` quits.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates an input handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolves a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::char_action(c),
            KeyCode::Enter => KeyAction::Press(Token::Equals),
            KeyCode::Backspace => KeyAction::Press(Token::Delete),
            KeyCode::Esc => KeyAction::Press(Token::Clear),
            _ => KeyAction::None,
        }
    }

    fn char_action(c: char) -> KeyAction {
        if let Some(digit) = c.to_digit(10) {
            return KeyAction::Press(Token::Digit(digit as u8));
        }
        if let Some(op) = Op::from_char(c) {
            return KeyAction::Press(Token::Operator(op));
        }
        match c {
            '=' => KeyAction::Press(Token::Equals),
            '.' | ',' => KeyAction::Press(Token::Decimal),
            '%' => KeyAction::Press(Token::Percent),
            'n' | 'N' => KeyAction::Press(Token::ToggleSign),
            'c' | 'C' => KeyAction::Press(Token::Clear),
            'q' | 'Q' => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}
