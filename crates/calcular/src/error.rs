//! Result and error types for the calculator engine.

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors a token can raise during dispatch.
///
/// Every variant collapses to the same observable outcome: the engine
/// enters its error state and the display shows the fixed indicator.
/// The variant is kept for callers and tests, not for the user display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Equals pressed with a pending division and a zero divisor
    #[error("Division by zero")]
    DivideByZero,

    /// Display buffer could not be read back as a number
    #[error("Unparseable display buffer: {buffer:?}")]
    Parse {
        /// The buffer contents that failed to parse
        buffer: String,
    },

    /// Arithmetic produced an infinite or undefined value
    #[error("Non-finite result")]
    NonFinite,
}
