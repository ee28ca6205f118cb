//! Display-buffer text: formatting values into the buffer and reading
//! the buffer back as a number.

use crate::error::{CalcError, CalcResult};

/// Fixed indicator shown while the engine is latched on an error.
pub const ERROR_DISPLAY: &str = "ERROR";

/// Formats a value as plain decimal text for the display buffer.
///
/// At most eleven fractional digits, trailing zeros trimmed, then any
/// bare trailing point. Integers come out bare (`20`, not `20.0`), the
/// integer-part zero is kept (`0.09`, not `.09`), and negative zero keeps
/// its sign so toggling the sign of `"0"` reads back as `"-0"`. Never
/// scientific notation.
#[must_use]
pub fn format_value(value: f64) -> String {
    let rendered = format!("{:.11}", value);
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Reads the display buffer back as a finite number.
///
/// Anything `f64` parsing rejects, plus the non-finite values it accepts
/// (`inf`, `NaN` spellings), comes back as [`CalcError::Parse`] so a
/// malformed buffer surfaces as an error instead of poisoning arithmetic.
pub fn parse_value(buffer: &str) -> CalcResult<f64> {
    match buffer.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::Parse {
            buffer: buffer.to_string(),
        }),
    }
}
