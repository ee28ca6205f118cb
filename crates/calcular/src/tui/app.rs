//! Application state for the TUI shell.

use crate::engine::{Engine, Token};
use crate::error::CalcResult;
use crate::tui::Keypad;

/// TUI application state: the engine plus keypad highlight bookkeeping
/// and a quit flag. All rendering reads through this struct.
#[derive(Debug)]
pub struct CalculatorApp {
    engine: Engine,
    keypad: Keypad,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates the application in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// Current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// Whether the calculator is latched on an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.engine.is_error()
    }

    /// The engine driving this application.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The keypad grid.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Mutable keypad access, for highlight updates from the event loop.
    pub fn keypad_mut(&mut self) -> &mut Keypad {
        &mut self.keypad
    }

    /// Whether the event loop should exit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests event loop exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Forwards one token to the engine, recording the outcome.
    ///
    /// The engine latches errors itself, so the caller may ignore the
    /// returned result; the display already shows the error indicator.
    pub fn press(&mut self, token: Token) -> CalcResult<String> {
        let outcome = self.engine.apply(token);
        match &outcome {
            Ok(shown) => tracing::debug!(?token, display = %shown, "token applied"),
            Err(err) => tracing::warn!(?token, %err, "token rejected"),
        }
        outcome
    }
}
