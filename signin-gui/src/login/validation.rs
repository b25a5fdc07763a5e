//! Client-side checks of the sign-in fields.
//!
//! Validation is pure: the same [`FormFields`] always give the same
//! [`ValidationErrors`], and nothing is read from or written to the outside.
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Minimum password length, counted in UTF-16 code units.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Anything but `@` and the characters ECMAScript counts as whitespace.
/// Unlike the `regex` crate's `\s`, this includes U+FEFF and excludes U+0085.
const EMAIL_PART: &str =
    r"[^\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}@]";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{p}+@{p}+\\.{p}+$", p = EMAIL_PART))
        .expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    MissingField(Field),
    /// Email only.
    InvalidFormat,
    /// Password only.
    TooShort,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingField(Field::Email) => "Email is required",
            Self::MissingField(Field::Password) => "Password is required",
            Self::InvalidFormat => "Please enter a valid email address",
            Self::TooShort => "Password must be at least 6 characters",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub email: String,
    pub password: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    email: Option<FieldError>,
    password: Option<FieldError>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }

    /// Forgets the error of the field, returns it if there was one.
    pub fn clear(&mut self, field: Field) -> Option<FieldError> {
        match field {
            Field::Email => self.email.take(),
            Field::Password => self.password.take(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    /// Message to display under the input of the field.
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(|e| e.message())
    }
}

pub fn validate_email(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        Some(FieldError::MissingField(Field::Email))
    } else if !EMAIL_PATTERN.is_match(email) {
        Some(FieldError::InvalidFormat)
    } else {
        None
    }
}

pub fn validate_password(password: &str) -> Option<FieldError> {
    if password.is_empty() {
        Some(FieldError::MissingField(Field::Password))
    } else if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        Some(FieldError::TooShort)
    } else {
        None
    }
}

/// Checks every field, the result is empty if the form can be submitted.
pub fn validate(fields: &FormFields) -> ValidationErrors {
    ValidationErrors {
        email: validate_email(&fields.email),
        password: validate_password(&fields.password),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(email: &str, password: &str) -> FormFields {
        FormFields {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_empty_fields() {
        let errors = validate(&fields("", ""));
        assert_eq!(errors.message(Field::Email), Some("Email is required"));
        assert_eq!(errors.message(Field::Password), Some("Password is required"));

        // An empty email is reported whatever the password is.
        let errors = validate(&fields("", "secret1"));
        assert_eq!(
            errors.get(Field::Email),
            Some(FieldError::MissingField(Field::Email))
        );
        assert_eq!(errors.get(Field::Password), None);
    }

    #[test]
    fn test_email_format() {
        for email in [
            "foo",
            "foo@bar",
            "@bar.com",
            "foo@.com",
            "foo@bar.",
            "foo bar@baz.com",
            "foo@bar baz.com",
            "foo@@bar.com",
            "foo@bar@baz.com",
            " foo@bar.com",
            "foo@bar.com\n",
            "a\u{FEFF}b@c.d",
            "a@b\u{3000}c.d",
            "a@b.c\u{A0}",
        ] {
            assert_eq!(
                validate_email(email),
                Some(FieldError::InvalidFormat),
                "{:?} must be rejected",
                email
            );
        }

        for email in [
            "a@b.c",
            "user@example.com",
            "first.last@sub.example.co.uk",
            "user+tag@example.com",
            "a@b.c.d",
            "ünïcödé@exämple.org",
            // Dots are allowed anywhere, as long as one follows the @ part.
            "a@b..c",
            // U+0085 is not whitespace for the pattern.
            "a\u{85}b@c.d",
        ] {
            assert_eq!(validate_email(email), None, "{:?} must be accepted", email);
        }
    }

    #[test]
    fn test_password_length() {
        assert_eq!(
            validate_password(""),
            Some(FieldError::MissingField(Field::Password))
        );
        for password in ["a", "ab", "abc", "abcd", "abcde"] {
            assert_eq!(validate_password(password), Some(FieldError::TooShort));
        }
        for password in ["abcdef", "secret1", "a much longer passphrase"] {
            assert_eq!(validate_password(password), None);
        }
        // Whitespace counts like any other character.
        assert_eq!(validate_password("      "), None);
    }

    #[test]
    fn test_password_length_in_utf16_units() {
        // 3 astral chars are 6 UTF-16 code units.
        assert_eq!(validate_password("😀😀😀"), None);
        // 5 BMP chars are 5 units, even if they are 10 bytes in UTF-8.
        assert_eq!(validate_password("ééééé"), Some(FieldError::TooShort));
        // A single grapheme made of 6 code points.
        assert_eq!(validate_password("e\u{301}\u{301}\u{301}\u{301}\u{301}"), None);
    }

    #[test]
    fn test_validate_is_deterministic() {
        for f in [
            fields("", ""),
            fields("bademail", "secret1"),
            fields("user@example.com", "abc"),
            fields("user@example.com", "secret1"),
        ] {
            assert_eq!(validate(&f), validate(&f));
        }
        assert!(validate(&fields("user@example.com", "secret1")).is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FieldError::MissingField(Field::Email).to_string(),
            "Email is required"
        );
        assert_eq!(
            FieldError::InvalidFormat.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            FieldError::MissingField(Field::Password).to_string(),
            "Password is required"
        );
        assert_eq!(
            FieldError::TooShort.to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_clear_error() {
        let mut errors = validate(&fields("bademail", "abc"));
        assert_eq!(errors.clear(Field::Email), Some(FieldError::InvalidFormat));
        assert_eq!(errors.get(Field::Email), None);
        assert!(!errors.is_empty());
        assert_eq!(errors.clear(Field::Password), Some(FieldError::TooShort));
        assert!(errors.is_empty());
        assert_eq!(errors.clear(Field::Password), None);
    }
}
