use std::{fmt, str::FromStr};

/// The reasons a password length can be rejected, each rendered as the message shown next to the
/// length field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthError {
    /// The field is empty.
    Missing,
    /// The field contains something that isn't a whole number.
    NotANumber,
    /// Shorter than [`Length::MIN`].
    TooShort,
    /// Longer than [`Length::MAX`].
    TooLong,
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "Length is required"),
            Self::NotANumber => write!(f, "Length must be a whole number"),
            Self::TooShort => write!(f, "Should be min of {} characters", Length::MIN),
            Self::TooLong => write!(f, "Should be max of {} characters", Length::MAX),
        }
    }
}

impl std::error::Error for LengthError {}

/// A password length that has passed validation, always within `MIN..=MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Length(usize);

impl Length {
    pub const MIN: usize = 4;
    pub const MAX: usize = 16;

    pub fn new(length: usize) -> Result<Self, LengthError> {
        if length < Self::MIN {
            Err(LengthError::TooShort)
        } else if length > Self::MAX {
            Err(LengthError::TooLong)
        } else {
            Ok(Self(length))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for Length {
    type Error = LengthError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let length = usize::try_from(value).map_err(|_| LengthError::TooShort)?;
        Self::new(length)
    }
}

impl FromStr for Length {
    type Err = LengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_length(s)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates the raw content of the length field.
pub fn validate_length(raw: &str) -> Result<Length, LengthError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LengthError::Missing);
    }

    match trimmed.parse::<i64>() {
        Ok(n) => Length::try_from(n),
        Err(_) if is_integer_literal(trimmed) => {
            // only digits but doesn't fit in an i64
            if trimmed.starts_with('-') {
                Err(LengthError::TooShort)
            } else {
                Err(LengthError::TooLong)
            }
        }
        Err(_) => Err(LengthError::NotANumber),
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(&['-', '+'][..]).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
#[path = "tests/validator.rs"]
mod validator;
