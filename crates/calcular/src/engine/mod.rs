//! Token-driven arithmetic state machine.
//!
//! [`Engine`] owns a display buffer and a latched binary operation, and
//! advances one [`Token`] at a time through [`Engine::apply`]. Any failing
//! token (divide by zero, overflow, an unparseable buffer) flips the engine
//! into its error state: the display shows [`ERROR_DISPLAY`] and every
//! token except [`Token::Clear`] becomes a no-op until clear is pressed.

mod display;
mod token;

pub use display::{format_value, parse_value, ERROR_DISPLAY};
pub use token::{Op, Token};

use crate::error::CalcResult;

/// Observable engine mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Accepting all tokens
    Ready,
    /// Latched on an error; only clear is accepted
    Error,
}

/// The arithmetic state machine behind the calculator.
///
/// All state is owned and mutated only through `&mut self`, so a caller
/// holding the engine serializes tokens by construction. The display
/// buffer is the single source of truth for the number being entered;
/// operands are captured from it at operator and equals presses.
///
/// After equals the operand and operator stay latched, so pressing equals
/// again repeats the last operation on the fresh result.
#[derive(Debug, Clone)]
pub struct Engine {
    display: String,
    first: f64,
    second: f64,
    pending: Option<Op>,
    start_new_number: bool,
    state: EngineState,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine in its initial state: display `"0"`, no pending
    /// operator, ready for a fresh operand.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: String::from("0"),
            first: 0.0,
            second: 0.0,
            pending: None,
            start_new_number: true,
            state: EngineState::Ready,
        }
    }

    /// Current display buffer contents.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Current engine mode.
    #[must_use]
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// Whether the engine is latched on an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.state, EngineState::Error)
    }

    /// The latched operator, if an operator press is pending evaluation.
    #[must_use]
    pub const fn pending_op(&self) -> Option<Op> {
        self.pending
    }

    /// Applies one input token and returns the updated display text.
    ///
    /// In the error state every token except [`Token::Clear`] is a no-op
    /// and returns the unchanged error indicator as `Ok`. When a token
    /// fails, the engine first latches the error (display set to
    /// [`ERROR_DISPLAY`], state set to [`EngineState::Error`]) and then
    /// returns the cause, so callers may keep forwarding tokens safely
    /// whether or not they inspect the result.
    pub fn apply(&mut self, token: Token) -> CalcResult<String> {
        if self.is_error() && token != Token::Clear {
            return Ok(self.display.clone());
        }

        match self.dispatch(token) {
            Ok(()) => Ok(self.display.clone()),
            Err(err) => {
                self.display = ERROR_DISPLAY.to_string();
                self.state = EngineState::Error;
                Err(err)
            }
        }
    }

    fn dispatch(&mut self, token: Token) -> CalcResult<()> {
        match token {
            Token::Digit(digit) => {
                self.enter_digit(digit);
                Ok(())
            }
            Token::Operator(op) => self.latch_operator(op),
            Token::Equals => self.evaluate(),
            Token::Clear => {
                self.reset();
                Ok(())
            }
            Token::Delete => {
                self.delete_last();
                Ok(())
            }
            Token::ToggleSign => self.toggle_sign(),
            Token::Percent => self.percent(),
            Token::Decimal => {
                self.enter_decimal();
                Ok(())
            }
        }
    }

    /// Appends a digit, or replaces the buffer when a fresh operand is
    /// starting. Leading zeros accumulate like any other digit (`05`).
    fn enter_digit(&mut self, digit: u8) {
        // The keypad only produces 0-9
        if let Some(ch) = char::from_digit(u32::from(digit), 10) {
            if self.start_new_number {
                self.display = ch.to_string();
                self.start_new_number = false;
            } else {
                self.display.push(ch);
            }
        }
    }

    /// Captures the first operand from the display and latches the
    /// operator. A second operator press before equals re-latches: the
    /// displayed value and the new operator replace the old pair.
    fn latch_operator(&mut self, op: Op) -> CalcResult<()> {
        self.first = parse_value(&self.display)?;
        self.pending = Some(op);
        self.start_new_number = true;
        Ok(())
    }

    /// Captures the second operand, evaluates the latched operation, and
    /// shows the formatted result. Equals with no latched operator
    /// evaluates to zero.
    fn evaluate(&mut self) -> CalcResult<()> {
        self.second = parse_value(&self.display)?;
        let result = match self.pending {
            Some(op) => op.apply(self.first, self.second)?,
            None => 0.0,
        };
        self.display = format_value(result);
        self.start_new_number = true;
        Ok(())
    }

    /// Restores every field to its initial value.
    fn reset(&mut self) {
        *self = Self::new();
    }

    /// Removes the last buffer character; a single remaining character
    /// becomes `"0"`. Only the buffer changes, so mid-entry state such as
    /// a latched operator survives.
    fn delete_last(&mut self) {
        if self.display.len() > 1 {
            self.display.pop();
        } else {
            self.display = String::from("0");
        }
    }

    /// Negates the displayed value in place, reformatting the buffer.
    fn toggle_sign(&mut self) -> CalcResult<()> {
        let value = parse_value(&self.display)?;
        self.display = format_value(-value);
        Ok(())
    }

    /// Divides the displayed value by one hundred in place.
    fn percent(&mut self) -> CalcResult<()> {
        let value = parse_value(&self.display)?;
        self.display = format_value(value / 100.0);
        Ok(())
    }

    /// Appends a decimal point unless the buffer already holds one.
    fn enter_decimal(&mut self) {
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }
}
