//! Common validation utilities.
//!
//! Request DTOs across the domain crate use these helpers through
//! `#[validate(custom(...))]` attributes so that every malformed payload is
//! rejected with a field-level error before any storage call is made.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Six-digit hex color with a leading hash, e.g. `#1a7f37`.
    static ref HEX_COLOR_RE: Regex = Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap();

    /// Loose phone shape: optional leading +, then digits with common
    /// separators. Matches how numbers arrive from the membership forms.
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9][0-9 ().\-]{6,19}$").unwrap();

    /// CSS object-position style photo crop, e.g. `50% 25%`.
    static ref PHOTO_POSITION_RE: Regex = Regex::new(r"^\d{1,3}% \d{1,3}%$").unwrap();
}

/// Validates a `#rrggbb` hex color string.
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    if HEX_COLOR_RE.is_match(color) {
        Ok(())
    } else {
        let mut err = ValidationError::new("hex_color");
        err.message = Some("Color must be a hex value like #1a7f37".into());
        Err(err)
    }
}

/// Validates a phone number string.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone");
        err.message = Some("Phone number is not in a recognized format".into());
        Err(err)
    }
}

/// Validates a photo crop position, e.g. `50% 25%`.
pub fn validate_photo_position(position: &str) -> Result<(), ValidationError> {
    if PHOTO_POSITION_RE.is_match(position) {
        Ok(())
    } else {
        let mut err = ValidationError::new("photo_position");
        err.message = Some("Photo position must look like \"50% 25%\"".into());
        Err(err)
    }
}

/// Validates that a string is one of a fixed set of allowed values.
///
/// Used for enum-typed fields that are accepted as plain strings so that an
/// unknown value produces a field-level validation error rather than a body
/// deserialization failure.
pub fn one_of(value: &str, allowed: &[&str], code: &'static str) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        let mut err = ValidationError::new(code);
        err.message = Some(format!("Must be one of: {}", allowed.join(", ")).into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("#1a7f37").is_ok());
        assert!(validate_hex_color("#FFFFFF").is_ok());
        assert!(validate_hex_color("#000000").is_ok());
        assert!(validate_hex_color("1a7f37").is_err());
        assert!(validate_hex_color("#1a7f3").is_err());
        assert!(validate_hex_color("#1a7f37f").is_err());
        assert!(validate_hex_color("#gggggg").is_err());
    }

    #[test]
    fn test_validate_hex_color_error_message() {
        let err = validate_hex_color("red").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Color must be a hex value like #1a7f37"
        );
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+1 (503) 555-0188").is_ok());
        assert!(validate_phone("503-555-0188").is_ok());
        assert!(validate_phone("5035550188").is_ok());
        assert!(validate_phone("not a phone").is_err());
        assert!(validate_phone("12345").is_err());
    }

    #[test]
    fn test_validate_photo_position() {
        assert!(validate_photo_position("50% 25%").is_ok());
        assert!(validate_photo_position("0% 100%").is_ok());
        assert!(validate_photo_position("50%").is_err());
        assert!(validate_photo_position("50 25").is_err());
        assert!(validate_photo_position("center top").is_err());
    }

    #[test]
    fn test_one_of_accepts_member() {
        assert!(one_of("payment", &["payment", "refund"], "transaction_type").is_ok());
    }

    #[test]
    fn test_one_of_rejects_unknown() {
        let err = one_of("donation", &["payment", "refund"], "transaction_type").unwrap_err();
        assert_eq!(err.code, "transaction_type");
        assert_eq!(
            err.message.unwrap().to_string(),
            "Must be one of: payment, refund"
        );
    }

    #[test]
    fn test_one_of_is_case_sensitive() {
        assert!(one_of("Payment", &["payment", "refund"], "transaction_type").is_err());
    }
}
