//! Token-driven four-function calculator with a terminal keypad frontend.
//!
//! The [`engine`] module holds the arithmetic state machine: feed it one
//! [`Token`](engine::Token) per keypress and read the display back after
//! each press. The optional [`tui`] module (enabled by default) wraps the
//! engine in a ratatui keypad with keyboard and mouse input, and the
//! [`driver`] module runs the same specification scripts against either
//! surface.
//!
//! # Example
//!
//! ```rust
//! use calcular::prelude::*;
//!
//! let mut engine = Engine::new();
//! for token in [
//!     Token::Digit(1),
//!     Token::Digit(2),
//!     Token::Operator(Op::Add),
//!     Token::Digit(8),
//! ] {
//!     engine.apply(token)?;
//! }
//! assert_eq!(engine.apply(Token::Equals)?, "20");
//! # Ok::<(), CalcError>(())
//! ```

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]

pub mod driver;
pub mod engine;
pub mod error;

#[cfg(feature = "tui")]
pub mod tui;

/// Convenient single-import surface for the common types.
pub mod prelude {
    pub use crate::driver::{
        run_full_specification, verify_digit_entry, verify_display_transforms,
        verify_error_recovery, verify_four_ops, CalculatorDriver, EngineDriver,
    };
    pub use crate::engine::{
        format_value, parse_value, Engine, EngineState, Op, Token, ERROR_DISPLAY,
    };
    pub use crate::error::{CalcError, CalcResult};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, InputHandler, KeyAction, Keypad};
}
