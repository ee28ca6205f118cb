//! Driver abstraction for exercising the calculator through any frontend.
//!
//! A [`CalculatorDriver`] presses tokens and reads the display back, so the
//! same specification scripts run against the bare [`Engine`] and against
//! the TUI shell. The `verify_*` functions are those scripts; they panic on
//! any deviation and are meant to be called from tests.

use crate::engine::{Engine, Op, Token};
use crate::error::CalcResult;

/// Uniform interface for pressing calculator buttons and observing the
/// display, regardless of the frontend behind it.
pub trait CalculatorDriver {
    /// Presses a single token.
    fn press(&mut self, token: Token) -> CalcResult<String>;

    /// Current display text.
    fn display(&self) -> String;

    /// Whether the calculator is latched on an error.
    fn is_error(&self) -> bool;

    /// Restores the initial state, clearing any error.
    fn reset(&mut self);

    /// Presses a sequence of tokens and returns the final display.
    ///
    /// Per-token failures are ignored so scripts can drive through the
    /// error state on purpose.
    fn press_all(&mut self, tokens: &[Token]) -> String {
        for &token in tokens {
            let _ = self.press(token);
        }
        self.display()
    }
}

/// Driver over the bare engine, no UI involved.
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: Engine,
}

impl EngineDriver {
    /// Creates a driver with a fresh engine.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
        }
    }

    /// Access to the underlying engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, token: Token) -> CalcResult<String> {
        self.engine.apply(token)
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn is_error(&self) -> bool {
        self.engine.is_error()
    }

    fn reset(&mut self) {
        self.engine = Engine::new();
    }
}

/// TUI-backed driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::engine::Token;
    use crate::error::CalcResult;
    use crate::tui::CalculatorApp;

    /// Driver over the TUI application state.
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a driver with a fresh application.
        #[must_use]
        pub fn new() -> Self {
            Self {
                app: CalculatorApp::new(),
            }
        }

        /// Access to the underlying application.
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Mutable access to the underlying application.
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, token: Token) -> CalcResult<String> {
            self.app.press(token)
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn is_error(&self) -> bool {
            self.app.is_error()
        }

        fn reset(&mut self) {
            self.app = CalculatorApp::new();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

/// Verifies digit entry: accumulation, replacement, and leading zeros.
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.display(), "0");

    let shown = driver.press_all(&[Token::Digit(1), Token::Digit(2), Token::Digit(3)]);
    assert_eq!(shown, "123");

    driver.reset();
    let shown = driver.press_all(&[Token::Digit(0), Token::Digit(5)]);
    assert_eq!(shown, "05");
}

/// Verifies all four operations end to end.
pub fn verify_four_ops<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    let shown = driver.press_all(&[
        Token::Digit(1),
        Token::Digit(2),
        Token::Operator(Op::Add),
        Token::Digit(8),
        Token::Equals,
    ]);
    assert_eq!(shown, "20");

    driver.reset();
    let shown = driver.press_all(&[
        Token::Digit(1),
        Token::Digit(0),
        Token::Operator(Op::Subtract),
        Token::Digit(4),
        Token::Equals,
    ]);
    assert_eq!(shown, "6");

    driver.reset();
    let shown = driver.press_all(&[
        Token::Digit(6),
        Token::Operator(Op::Multiply),
        Token::Digit(7),
        Token::Equals,
    ]);
    assert_eq!(shown, "42");

    driver.reset();
    let shown = driver.press_all(&[
        Token::Digit(7),
        Token::Operator(Op::Divide),
        Token::Digit(2),
        Token::Equals,
    ]);
    assert_eq!(shown, "3.5");
}

/// Verifies the in-place display transforms: percent, sign toggle,
/// decimal point, and delete.
pub fn verify_display_transforms<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    let shown = driver.press_all(&[Token::Digit(9), Token::Percent]);
    assert_eq!(shown, "0.09");

    driver.reset();
    let shown = driver.press_all(&[Token::Digit(5), Token::ToggleSign]);
    assert_eq!(shown, "-5");
    let shown = driver.press_all(&[Token::ToggleSign]);
    assert_eq!(shown, "5");

    driver.reset();
    let shown = driver.press_all(&[Token::Digit(3), Token::Decimal, Token::Digit(5), Token::Decimal]);
    assert_eq!(shown, "3.5");

    driver.reset();
    let shown = driver.press_all(&[Token::Digit(7), Token::Delete]);
    assert_eq!(shown, "0");
}

/// Verifies the error latch and clear-only recovery.
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_all(&[
        Token::Digit(5),
        Token::Operator(Op::Divide),
        Token::Digit(0),
        Token::Equals,
    ]);
    assert!(driver.is_error());
    assert_eq!(driver.display(), "ERROR");

    // Every non-clear token is ignored while latched
    let shown = driver.press_all(&[Token::Digit(7), Token::Equals, Token::Delete]);
    assert_eq!(shown, "ERROR");
    assert!(driver.is_error());

    let shown = driver.press_all(&[Token::Clear]);
    assert_eq!(shown, "0");
    assert!(!driver.is_error());
}

/// Runs every verification script against the given driver.
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_four_ops(driver);
    verify_display_transforms(driver);
    verify_error_recovery(driver);
    driver.reset();
}
