//! Field validation rules shared by the contact and application forms
//!
//! Each rule maps a candidate value to an optional user-facing error message.
//! Rules are independent per field; there are no cross-field rules.

use once_cell::sync::Lazy;
use regex::Regex;

/// ASCII letters and whitespace only
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern compiles"));

/// `local@domain.tld` shape: at least one `.` after the `@`, no whitespace
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

/// Exactly ten decimal digits
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));

/// Validate a name-like field. `label` names the field in the required
/// message ("First name is required.").
pub fn name(value: &str, label: &str) -> Option<String> {
    if value.is_empty() {
        return Some(format!("{label} is required."));
    }
    if !NAME_PATTERN.is_match(value) {
        return Some("Name can only contain letters and spaces.".to_string());
    }
    None
}

/// Validate an email address field.
pub fn email(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Email is required.".to_string());
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Some("Please enter a valid email address.".to_string());
    }
    None
}

/// Validate a phone field. The value is expected to be digit-stripped
/// already; anything that is not exactly ten digits fails.
pub fn phone(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Phone number is required.".to_string());
    }
    if !PHONE_PATTERN.is_match(value) {
        return Some("Phone number must be exactly 10 digits.".to_string());
    }
    None
}

/// Validate a required message field.
pub fn message(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Message is required.".to_string());
    }
    None
}

/// Validate the resume attachment. Only presence is checked; file content
/// and type are constrained upstream by the picker.
pub fn attachment(present: bool) -> Option<String> {
    if !present {
        return Some("Resume is required.".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod name_rule {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_required() {
            assert_eq!(
                name("", "First name"),
                Some("First name is required.".to_string())
            );
        }

        #[test]
        fn test_letters_and_spaces_pass() {
            assert_eq!(name("Asha", "First name"), None);
            assert_eq!(name("Anne Marie", "First name"), None);
        }

        #[test]
        fn test_digits_fail() {
            assert_eq!(
                name("Asha2", "First name"),
                Some("Name can only contain letters and spaces.".to_string())
            );
        }

        #[test]
        fn test_punctuation_fails() {
            assert!(name("Anne-Marie", "Name").is_some());
            assert!(name("O'Brien", "Name").is_some());
        }
    }

    mod email_rule {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_standard_address_passes() {
            assert_eq!(email("user@example.com"), None);
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(email(""), Some("Email is required.".to_string()));
        }

        #[test]
        fn test_missing_domain_fails() {
            assert_eq!(
                email("user@"),
                Some("Please enter a valid email address.".to_string())
            );
        }

        #[test]
        fn test_missing_at_sign_fails() {
            assert!(email("userexample.com").is_some());
        }

        #[test]
        fn test_missing_dot_after_at_fails() {
            assert!(email("user@example").is_some());
        }

        #[test]
        fn test_internal_whitespace_fails() {
            assert!(email("us er@example.com").is_some());
            assert!(email("user@exa mple.com").is_some());
        }
    }

    mod phone_rule {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_ten_digits_pass() {
            assert_eq!(phone("9876543210"), None);
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(phone(""), Some("Phone number is required.".to_string()));
        }

        #[test]
        fn test_short_and_long_fail() {
            assert!(phone("98765").is_some());
            assert!(phone("98765432101").is_some());
        }

        #[test]
        fn test_non_digit_fails() {
            assert!(phone("98765X3210").is_some());
        }
    }

    mod message_rule {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_required() {
            assert_eq!(message(""), Some("Message is required.".to_string()));
        }

        #[test]
        fn test_any_text_passes() {
            assert_eq!(message("Hello"), None);
        }
    }

    mod attachment_rule {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_missing_is_required() {
            assert_eq!(attachment(false), Some("Resume is required.".to_string()));
        }

        #[test]
        fn test_present_passes() {
            assert_eq!(attachment(true), None);
        }
    }
}
