//! Input token vocabulary: one token per keypad button.

use crate::error::{CalcError, CalcResult};

/// Binary arithmetic operator latched by the engine until equals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Op {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Maps a typed character to an operator.
    ///
    /// Accepts both the ASCII forms (`+ - * /`) and the display forms
    /// (`− × ÷`).
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division guards against a zero divisor (numeric comparison, so a
    /// negative zero divisor also trips it). Every result is checked for
    /// finiteness so overflow surfaces as an error rather than `inf`.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                a / b
            }
        };
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::NonFinite)
        }
    }
}

/// One discrete user input event, mapped to a keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A digit key. Values above 9 never occur on the keypad and are
    /// ignored by the engine.
    Digit(u8),
    /// An arithmetic operator key
    Operator(Op),
    /// The equals key (=)
    Equals,
    /// The clear key (C)
    Clear,
    /// The delete key (DEL)
    Delete,
    /// The sign toggle key (±)
    ToggleSign,
    /// The percent key (%)
    Percent,
    /// The decimal point key (.)
    Decimal,
}

impl Token {
    /// Returns the keypad label for this token.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Digit(0) => "0",
            Self::Digit(1) => "1",
            Self::Digit(2) => "2",
            Self::Digit(3) => "3",
            Self::Digit(4) => "4",
            Self::Digit(5) => "5",
            Self::Digit(6) => "6",
            Self::Digit(7) => "7",
            Self::Digit(8) => "8",
            Self::Digit(9) => "9",
            Self::Digit(_) => "?",
            Self::Operator(Op::Add) => "+",
            Self::Operator(Op::Subtract) => "−",
            Self::Operator(Op::Multiply) => "×",
            Self::Operator(Op::Divide) => "÷",
            Self::Equals => "=",
            Self::Clear => "C",
            Self::Delete => "DEL",
            Self::ToggleSign => "±",
            Self::Percent => "%",
            Self::Decimal => ".",
        }
    }
}
