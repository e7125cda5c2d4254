use super::{FieldError, HOURS_MAX, HOURS_MIN, MOTTO_MAX_LEN, NAME_MAX_LEN, NAME_MIN_LEN};

/// Validate an apprentice name: 2..=30 chars, letters and spaces only.
/// Accented letters count as letters. Lengths are counted in chars.
pub fn validate_name(raw: &str) -> Result<String, FieldError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(FieldError::Empty);
    }
    let len = name.chars().count();
    if len < NAME_MIN_LEN {
        return Err(FieldError::TooShort { min: NAME_MIN_LEN });
    }
    if len > NAME_MAX_LEN {
        return Err(FieldError::TooLong {
            max: NAME_MAX_LEN,
            actual: len,
        });
    }
    if !name.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(FieldError::InvalidChars);
    }
    Ok(name.to_string())
}

/// Parse weekly study hours. Non-numeric input is reported distinctly from
/// a number outside [1, 100].
pub fn parse_hours(raw: &str) -> Result<u32, FieldError> {
    let value: i64 = raw.trim().parse().map_err(|_| FieldError::NotANumber)?;
    if value < HOURS_MIN as i64 || value > HOURS_MAX as i64 {
        return Err(FieldError::OutOfRange {
            min: HOURS_MIN as i64,
            max: HOURS_MAX as i64,
        });
    }
    Ok(value as u32)
}

/// Parse a 1-based menu selection in 1..=max.
pub fn parse_menu_index(raw: &str, max: usize) -> Result<usize, FieldError> {
    let value: i64 = raw.trim().parse().map_err(|_| FieldError::NotANumber)?;
    if value < 1 || value > max as i64 {
        return Err(FieldError::OutOfRange {
            min: 1,
            max: max as i64,
        });
    }
    Ok(value as usize)
}

/// Validate an optional motto. Empty input is the "no motto" case; anything
/// non-empty is kept verbatim up to 50 chars.
pub fn validate_motto(raw: &str) -> Result<Option<String>, FieldError> {
    let motto = raw.trim();
    if motto.is_empty() {
        return Ok(None);
    }
    let len = motto.chars().count();
    if len > MOTTO_MAX_LEN {
        return Err(FieldError::TooLong {
            max: MOTTO_MAX_LEN,
            actual: len,
        });
    }
    Ok(Some(motto.to_string()))
}

/// Parse a yes/no answer. Accepts English and Portuguese tokens.
pub fn parse_yes_no(raw: &str) -> Result<bool, FieldError> {
    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" | "sim" | "s" => Ok(true),
        "no" | "n" | "não" | "nao" => Ok(false),
        _ => Err(FieldError::InvalidAnswer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rejects_empty() {
        assert_eq!(validate_name(""), Err(FieldError::Empty));
        assert_eq!(validate_name("   "), Err(FieldError::Empty));
    }

    #[test]
    fn test_name_rejects_single_char() {
        assert_eq!(validate_name("G"), Err(FieldError::TooShort { min: 2 }));
    }

    #[test]
    fn test_name_rejects_31_chars() {
        let long = "a".repeat(31);
        assert_eq!(
            validate_name(&long),
            Err(FieldError::TooLong {
                max: 30,
                actual: 31
            })
        );
    }

    #[test]
    fn test_name_accepts_30_chars() {
        let max = "a".repeat(30);
        assert_eq!(validate_name(&max).unwrap(), max);
    }

    #[test]
    fn test_name_rejects_digits() {
        assert_eq!(validate_name("John123"), Err(FieldError::InvalidChars));
    }

    #[test]
    fn test_name_accepts_accents() {
        assert_eq!(validate_name("Anaïs Dupont").unwrap(), "Anaïs Dupont");
    }

    #[test]
    fn test_name_length_counted_in_chars() {
        // 30 accented chars is 60 bytes but still a legal name
        let name = "é".repeat(30);
        assert_eq!(validate_name(&name).unwrap(), name);
    }

    #[test]
    fn test_hours_non_numeric_is_distinct() {
        assert_eq!(parse_hours("lots"), Err(FieldError::NotANumber));
        assert_eq!(
            parse_hours("0"),
            Err(FieldError::OutOfRange { min: 1, max: 100 })
        );
        assert_eq!(
            parse_hours("101"),
            Err(FieldError::OutOfRange { min: 1, max: 100 })
        );
    }

    #[test]
    fn test_hours_negative_is_out_of_range() {
        assert_eq!(
            parse_hours("-5"),
            Err(FieldError::OutOfRange { min: 1, max: 100 })
        );
    }

    #[test]
    fn test_hours_bounds() {
        assert_eq!(parse_hours("1").unwrap(), 1);
        assert_eq!(parse_hours(" 100 ").unwrap(), 100);
    }

    #[test]
    fn test_menu_index() {
        assert_eq!(parse_menu_index("3", 5).unwrap(), 3);
        assert_eq!(parse_menu_index("x", 5), Err(FieldError::NotANumber));
        assert_eq!(
            parse_menu_index("6", 5),
            Err(FieldError::OutOfRange { min: 1, max: 5 })
        );
        assert_eq!(
            parse_menu_index("0", 5),
            Err(FieldError::OutOfRange { min: 1, max: 5 })
        );
    }

    #[test]
    fn test_motto_empty_is_none() {
        assert_eq!(validate_motto("").unwrap(), None);
        assert_eq!(validate_motto("  ").unwrap(), None);
    }

    #[test]
    fn test_motto_kept_verbatim() {
        assert_eq!(
            validate_motto("Code hard, nap harder").unwrap(),
            Some("Code hard, nap harder".to_string())
        );
    }

    #[test]
    fn test_motto_over_50_rejected_with_length() {
        let long = "x".repeat(51);
        assert_eq!(
            validate_motto(&long),
            Err(FieldError::TooLong {
                max: 50,
                actual: 51
            })
        );
    }

    #[test]
    fn test_yes_no_tokens() {
        for token in ["yes", "y", "YES", "Sim", "s"] {
            assert_eq!(parse_yes_no(token).unwrap(), true, "token {:?}", token);
        }
        for token in ["no", "n", "NÃO", "nao", "N"] {
            assert_eq!(parse_yes_no(token).unwrap(), false, "token {:?}", token);
        }
        assert_eq!(parse_yes_no("maybe"), Err(FieldError::InvalidAnswer));
        assert_eq!(parse_yes_no(""), Err(FieldError::InvalidAnswer));
    }
}
