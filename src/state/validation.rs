//! Field validators for the registration form
//!
//! Every validator is a pure function of its input so it can be called
//! directly, independent of the debounced pipeline that normally drives it.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum username length, in characters
pub const MIN_USERNAME_LENGTH: usize = 5;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$")
        .expect("email pattern is a valid regex")
});

/// Why a field failed validation.
///
/// The `Display` text is the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Must be at least {min} characters long.")]
    TooShort { min: usize },
    #[error("Only letters and digits are allowed.")]
    InvalidCharacters,
    #[error("Not a valid email address.")]
    EmailInvalid,
    #[error("Must contain at least one uppercase letter.")]
    MissingUppercase,
    #[error("Must contain at least one digit.")]
    MissingDigit,
    #[error("Passwords do not match.")]
    Mismatch,
}

/// Latest known validation result of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// No non-empty value has been evaluated yet
    #[default]
    Unevaluated,
    Valid,
    Invalid(ValidationError),
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    /// The failure reason, if any
    pub fn error(&self) -> Option<ValidationError> {
        match self {
            Outcome::Invalid(e) => Some(*e),
            _ => None,
        }
    }
}

impl From<Result<(), ValidationError>> for Outcome {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Outcome::Valid,
            Err(e) => Outcome::Invalid(e),
        }
    }
}

/// Length is checked before the character set.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(ValidationError::TooShort {
            min: MIN_USERNAME_LENGTH,
        });
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidCharacters);
    }
    Ok(())
}

/// Syntactic check only: `local@domain.tld` with a 2-64 letter TLD.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}

/// Checks length, then uppercase, then digit.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::MissingDigit);
    }
    Ok(())
}

pub fn validate_password_confirmation(
    password: &str,
    confirmation: &str,
) -> Result<(), ValidationError> {
    if password != confirmation {
        return Err(ValidationError::Mismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod username {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_username() {
            assert_eq!(validate_username("validuser"), Ok(()));
        }

        #[test]
        fn test_short_usernames_fail_length_check() {
            for s in ["", "a", "four", "ab!@"] {
                assert_eq!(
                    validate_username(s),
                    Err(ValidationError::TooShort { min: 5 }),
                    "input {s:?}"
                );
            }
        }

        #[test]
        fn test_invalid_characters() {
            assert_eq!(
                validate_username("invalid!@#"),
                Err(ValidationError::InvalidCharacters)
            );
            assert_eq!(
                validate_username("with space"),
                Err(ValidationError::InvalidCharacters)
            );
        }

        #[test]
        fn test_non_ascii_letters_rejected() {
            assert_eq!(
                validate_username("사용자이름"),
                Err(ValidationError::InvalidCharacters)
            );
        }

        #[test]
        fn test_length_counts_characters_not_bytes() {
            // 4 chars, 8 bytes
            assert_eq!(
                validate_username("éééé"),
                Err(ValidationError::TooShort { min: 5 })
            );
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_email() {
            assert_eq!(validate_email("test@example.com"), Ok(()));
            assert_eq!(validate_email("first.last+tag@mail.example.co"), Ok(()));
        }

        #[test]
        fn test_invalid_emails() {
            for s in [
                "testexample.com",
                "test@.com",
                "test@example",
                "test@example.c",
                "@example.com",
                "test@example.c0m",
                " test@example.com",
            ] {
                assert_eq!(
                    validate_email(s),
                    Err(ValidationError::EmailInvalid),
                    "input {s:?}"
                );
            }
        }

        #[test]
        fn test_top_level_domain_length_limit() {
            let longest = format!("user@example.{}", "a".repeat(64));
            assert_eq!(validate_email(&longest), Ok(()));

            let too_long = format!("user@example.{}", "a".repeat(65));
            assert_eq!(
                validate_email(&too_long),
                Err(ValidationError::EmailInvalid)
            );
        }
    }

    mod password {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_password() {
            assert_eq!(validate_password("Password123"), Ok(()));
        }

        #[test]
        fn test_too_short() {
            assert_eq!(
                validate_password("short"),
                Err(ValidationError::TooShort { min: 8 })
            );
        }

        #[test]
        fn test_missing_uppercase() {
            assert_eq!(
                validate_password("password123"),
                Err(ValidationError::MissingUppercase)
            );
        }

        #[test]
        fn test_missing_digit() {
            assert_eq!(
                validate_password("NoDigitsHere"),
                Err(ValidationError::MissingDigit)
            );
        }

        #[test]
        fn test_length_checked_before_character_classes() {
            assert_eq!(
                validate_password("abc"),
                Err(ValidationError::TooShort { min: 8 })
            );
        }

        #[test]
        fn test_confirmation_match() {
            assert_eq!(
                validate_password_confirmation("Password123", "Password123"),
                Ok(())
            );
        }

        #[test]
        fn test_confirmation_is_case_sensitive() {
            assert_eq!(
                validate_password_confirmation("Password123", "password123"),
                Err(ValidationError::Mismatch)
            );
            assert_eq!(
                validate_password_confirmation("Password123", "Different1"),
                Err(ValidationError::Mismatch)
            );
        }
    }

    mod generated {
        use super::*;
        use pretty_assertions::assert_eq;
        use proptest::prelude::*;

        fn non_alphanumeric() -> impl Strategy<Value = char> {
            any::<char>().prop_filter("must not be an ASCII letter or digit", |c| {
                !c.is_ascii_alphanumeric()
            })
        }

        proptest! {
            #[test]
            fn test_short_username_is_too_short(chars in prop::collection::vec(any::<char>(), 0..5)) {
                let username: String = chars.into_iter().collect();
                prop_assert_eq!(
                    validate_username(&username),
                    Err(ValidationError::TooShort { min: 5 })
                );
            }

            #[test]
            fn test_alphanumeric_username_is_valid(username in "[A-Za-z0-9]{5,20}") {
                prop_assert_eq!(validate_username(&username), Ok(()));
            }

            #[test]
            fn test_one_bad_character_rejects_username(
                base in "[A-Za-z0-9]{5,20}",
                bad in non_alphanumeric(),
                at in any::<prop::sample::Index>(),
            ) {
                let mut chars: Vec<char> = base.chars().collect();
                chars.insert(at.index(chars.len() + 1), bad);
                let username: String = chars.into_iter().collect();
                prop_assert_eq!(
                    validate_username(&username),
                    Err(ValidationError::InvalidCharacters)
                );
            }

            #[test]
            fn test_password_without_uppercase_is_rejected(password in "[a-z0-9!@#]{8,30}") {
                prop_assert_eq!(
                    validate_password(&password),
                    Err(ValidationError::MissingUppercase)
                );
            }

            #[test]
            fn test_password_without_digit_is_rejected(password in "[A-Z][A-Za-z!@#]{7,29}") {
                prop_assert_eq!(
                    validate_password(&password),
                    Err(ValidationError::MissingDigit)
                );
            }
        }
    }

    #[test]
    fn test_same_input_gives_same_outcome() {
        let first = Outcome::from(validate_password("password123"));
        let second = Outcome::from(validate_password("password123"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(Outcome::Valid.is_valid());
        assert!(!Outcome::Unevaluated.is_valid());
        assert_eq!(Outcome::default(), Outcome::Unevaluated);
        assert_eq!(
            Outcome::Invalid(ValidationError::Mismatch).error(),
            Some(ValidationError::Mismatch)
        );
        assert_eq!(Outcome::Valid.error(), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::TooShort { min: 5 }.to_string(),
            "Must be at least 5 characters long."
        );
        assert_eq!(
            ValidationError::Mismatch.to_string(),
            "Passwords do not match."
        );
    }
}
