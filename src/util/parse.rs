use crate::error::input::InputError;

/// Smallest number of keys a single generate call may request.
pub const MIN_KEY_AMOUNT: u32 = 1;
/// Largest number of keys a single generate call may request.
pub const MAX_KEY_AMOUNT: u32 = 10;

/// Parses the number of keys to generate from user input.
///
/// # Arguments
/// - `value` - The raw value entered by the user; surrounding whitespace is ignored
///
/// # Returns
/// - `Ok(u32)` - A number within `MIN_KEY_AMOUNT..=MAX_KEY_AMOUNT`
/// - `Err(InputError::InvalidAmount)` - The value is not a number
/// - `Err(InputError::AmountOutOfRange)` - The number is outside the accepted range
pub fn parse_key_amount(value: &str) -> Result<u32, InputError> {
    let value = value.trim();
    let amount = value
        .parse::<i64>()
        .map_err(|e| InputError::InvalidAmount {
            value: value.to_string(),
            source: e,
        })?;

    check_key_amount(amount)
}

/// Checks that a numeric amount is within the accepted range.
pub fn check_key_amount(amount: i64) -> Result<u32, InputError> {
    if amount < MIN_KEY_AMOUNT as i64 || amount > MAX_KEY_AMOUNT as i64 {
        return Err(InputError::AmountOutOfRange {
            min: MIN_KEY_AMOUNT,
            max: MAX_KEY_AMOUNT,
        });
    }

    Ok(amount as u32)
}

/// Interprets a yes/no answer.
///
/// `yes`, `y`, `true` and `1` (any case) are yes; anything else, including an empty
/// answer, is no.
pub fn parse_yes_no(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "yes" | "y" | "true" | "1"
    )
}

/// Takes a required text argument, rejecting blank input.
pub fn require_text(name: &str, value: Option<&str>) -> Result<String, InputError> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| InputError::MissingArgument(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_amount_in_range() {
        assert_eq!(parse_key_amount("1"), Ok(1));
        assert_eq!(parse_key_amount(" 10 "), Ok(10));
    }

    #[test]
    fn rejects_amount_out_of_range() {
        let expected = Err(InputError::AmountOutOfRange { min: 1, max: 10 });
        assert_eq!(parse_key_amount("0"), expected);
        assert_eq!(parse_key_amount("11"), expected);
        assert_eq!(parse_key_amount("-3"), expected);
    }

    #[test]
    fn rejects_non_numeric_amount() {
        assert!(matches!(
            parse_key_amount("five"),
            Err(InputError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn yes_no_answers() {
        for yes in ["yes", "Y", "TRUE", "1", " yes "] {
            assert!(parse_yes_no(yes), "{yes} should be yes");
        }
        for no in ["no", "", "nope", "0", "false"] {
            assert!(!parse_yes_no(no), "{no} should be no");
        }
    }

    #[test]
    fn required_text_rejects_blank() {
        assert_eq!(
            require_text("key", Some("  ")),
            Err(InputError::MissingArgument("key".to_string()))
        );
        assert_eq!(
            require_text("key", None),
            Err(InputError::MissingArgument("key".to_string()))
        );
        assert_eq!(require_text("key", Some(" abc ")), Ok("abc".to_string()));
    }
}
