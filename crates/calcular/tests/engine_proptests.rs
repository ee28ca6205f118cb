//! Property-based tests for the calculator engine.

use calcular::prelude::*;
use proptest::prelude::*;

// ===== Strategies =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        Just(Op::Subtract),
        Just(Op::Multiply),
        Just(Op::Divide),
    ]
}

fn token_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        digit_strategy().prop_map(Token::Digit),
        op_strategy().prop_map(Token::Operator),
        Just(Token::Equals),
        Just(Token::Clear),
        Just(Token::Delete),
        Just(Token::ToggleSign),
        Just(Token::Percent),
        Just(Token::Decimal),
    ]
}

fn non_clear_token_strategy() -> impl Strategy<Value = Token> {
    token_strategy().prop_filter("clear releases the error latch", |t| *t != Token::Clear)
}

/// Presses the decimal digits of `value` one token at a time.
fn press_number(driver: &mut EngineDriver, value: u32) {
    for c in value.to_string().chars() {
        let digit = c.to_digit(10).unwrap() as u8;
        driver.press(Token::Digit(digit)).unwrap();
    }
}

// ===== Digit entry properties =====

proptest! {
    #[test]
    fn prop_digit_sequences_concatenate(digits in prop::collection::vec(digit_strategy(), 1..15)) {
        let mut driver = EngineDriver::new();
        for &d in &digits {
            driver.press(Token::Digit(d)).unwrap();
        }
        let expected: String = digits
            .iter()
            .map(|d| char::from_digit(u32::from(*d), 10).unwrap())
            .collect();
        prop_assert_eq!(driver.display(), expected);
    }

    #[test]
    fn prop_entered_number_parses_back(value in 0u32..1_000_000_000) {
        let mut driver = EngineDriver::new();
        press_number(&mut driver, value);
        prop_assert_eq!(parse_value(&driver.display()), Ok(f64::from(value)));
    }
}

// ===== Arithmetic properties =====

proptest! {
    #[test]
    fn prop_addition_matches_formatted_sum(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let mut driver = EngineDriver::new();
        press_number(&mut driver, a);
        driver.press(Token::Operator(Op::Add)).unwrap();
        press_number(&mut driver, b);
        let shown = driver.press(Token::Equals).unwrap();
        prop_assert_eq!(shown, format_value(f64::from(a) + f64::from(b)));
    }

    #[test]
    fn prop_subtraction_matches_formatted_difference(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let mut driver = EngineDriver::new();
        press_number(&mut driver, a);
        driver.press(Token::Operator(Op::Subtract)).unwrap();
        press_number(&mut driver, b);
        let shown = driver.press(Token::Equals).unwrap();
        prop_assert_eq!(shown, format_value(f64::from(a) - f64::from(b)));
    }

    #[test]
    fn prop_multiplication_matches_formatted_product(a in 0u32..100_000, b in 0u32..100_000) {
        let mut driver = EngineDriver::new();
        press_number(&mut driver, a);
        driver.press(Token::Operator(Op::Multiply)).unwrap();
        press_number(&mut driver, b);
        let shown = driver.press(Token::Equals).unwrap();
        prop_assert_eq!(shown, format_value(f64::from(a) * f64::from(b)));
    }

    #[test]
    fn prop_division_matches_formatted_quotient(a in 0u32..1_000_000, b in 1u32..1_000_000) {
        let mut driver = EngineDriver::new();
        press_number(&mut driver, a);
        driver.press(Token::Operator(Op::Divide)).unwrap();
        press_number(&mut driver, b);
        let shown = driver.press(Token::Equals).unwrap();
        prop_assert_eq!(shown, format_value(f64::from(a) / f64::from(b)));
    }

    #[test]
    fn prop_division_by_zero_always_errors(a in 0u32..1_000_000) {
        let mut driver = EngineDriver::new();
        press_number(&mut driver, a);
        driver.press(Token::Operator(Op::Divide)).unwrap();
        driver.press(Token::Digit(0)).unwrap();
        prop_assert_eq!(driver.press(Token::Equals), Err(CalcError::DivideByZero));
        prop_assert!(driver.is_error());
    }
}

// ===== Display transform properties =====

proptest! {
    #[test]
    fn prop_toggle_sign_is_involution(digits in prop::collection::vec(digit_strategy(), 1..10)) {
        let mut driver = EngineDriver::new();
        for &d in &digits {
            driver.press(Token::Digit(d)).unwrap();
        }
        let before = driver.display();
        driver.press(Token::ToggleSign).unwrap();
        driver.press(Token::ToggleSign).unwrap();
        // Leading zeros are reformatted away, so compare as numbers
        prop_assert_eq!(
            parse_value(&driver.display()),
            parse_value(&before)
        );
    }

    #[test]
    fn prop_percent_shrinks_by_hundred(value in 1u32..1_000_000) {
        let mut driver = EngineDriver::new();
        press_number(&mut driver, value);
        let shown = driver.press(Token::Percent).unwrap();
        prop_assert_eq!(shown, format_value(f64::from(value) / 100.0));
    }

    #[test]
    fn prop_decimal_point_never_duplicates(
        digits in prop::collection::vec(digit_strategy(), 0..8),
        more in prop::collection::vec(digit_strategy(), 0..8),
    ) {
        let mut driver = EngineDriver::new();
        for &d in &digits {
            driver.press(Token::Digit(d)).unwrap();
        }
        driver.press(Token::Decimal).unwrap();
        for &d in &more {
            driver.press(Token::Digit(d)).unwrap();
        }
        driver.press(Token::Decimal).unwrap();
        let points = driver.display().matches('.').count();
        prop_assert_eq!(points, 1);
    }
}

// ===== State machine properties =====

proptest! {
    #[test]
    fn prop_error_state_is_sticky(tokens in prop::collection::vec(non_clear_token_strategy(), 0..40)) {
        let mut driver = EngineDriver::new();
        driver.press_all(&[
            Token::Digit(5),
            Token::Operator(Op::Divide),
            Token::Digit(0),
            Token::Equals,
        ]);
        prop_assert!(driver.is_error());

        let shown = driver.press_all(&tokens);
        prop_assert_eq!(shown, ERROR_DISPLAY);
        prop_assert!(driver.is_error());
    }

    #[test]
    fn prop_clear_always_recovers(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let mut driver = EngineDriver::new();
        driver.press_all(&tokens);
        let shown = driver.press_all(&[Token::Clear]);
        prop_assert_eq!(shown, "0");
        prop_assert!(!driver.is_error());
    }

    #[test]
    fn prop_display_never_empty(tokens in prop::collection::vec(token_strategy(), 0..60)) {
        let mut driver = EngineDriver::new();
        for &token in &tokens {
            let _ = driver.press(token);
            prop_assert!(!driver.display().is_empty());
        }
    }

    #[test]
    fn prop_display_charset_is_closed(tokens in prop::collection::vec(token_strategy(), 0..60)) {
        let mut driver = EngineDriver::new();
        driver.press_all(&tokens);
        let display = driver.display();
        if driver.is_error() {
            prop_assert_eq!(display, ERROR_DISPLAY);
        } else {
            prop_assert!(
                display.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-'),
                "unexpected display {:?}",
                display
            );
        }
    }
}

// ===== Pinned examples =====

#[test]
fn invariant_addition_example() {
    let mut driver = EngineDriver::new();
    let shown = driver.press_all(&[
        Token::Digit(1),
        Token::Digit(2),
        Token::Operator(Op::Add),
        Token::Digit(8),
        Token::Equals,
    ]);
    assert_eq!(shown, "20");
}

#[test]
fn invariant_division_keeps_fraction() {
    let mut driver = EngineDriver::new();
    let shown = driver.press_all(&[
        Token::Digit(7),
        Token::Operator(Op::Divide),
        Token::Digit(2),
        Token::Equals,
    ]);
    assert_eq!(shown, "3.5");
}

#[test]
fn invariant_percent_keeps_leading_zero() {
    let mut driver = EngineDriver::new();
    let shown = driver.press_all(&[Token::Digit(9), Token::Percent]);
    assert_eq!(shown, "0.09");
}

#[test]
fn invariant_delete_to_zero() {
    let mut driver = EngineDriver::new();
    let shown = driver.press_all(&[Token::Digit(7), Token::Delete]);
    assert_eq!(shown, "0");
}

#[test]
fn invariant_negative_zero_round_trip() {
    let mut driver = EngineDriver::new();
    assert_eq!(driver.press(Token::ToggleSign).unwrap(), "-0");
    assert_eq!(driver.press(Token::ToggleSign).unwrap(), "0");
}
