use std::{
    io,
    sync::{MutexGuard, PoisonError},
};

use crate::{form::PasswordForm, validator::LengthError};

/// A enum that contains the different types of errors that the library returns as part of Result's.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    Clipboard(arboard::Error),
    Io(io::Error),
    Generic(&'static str),
    GenericDyn(String),
    ConfigError(config::ConfigError),
    SerError(toml::ser::Error),
    /// The length field didn't pass validation.
    InvalidLength(LengthError),
    /// No character class is enabled, so there is nothing to sample from.
    InvalidPolicy,
}

impl From<arboard::Error> for Error {
    fn from(err: arboard::Error) -> Self {
        Self::Clipboard(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::SerError(err)
    }
}

impl From<LengthError> for Error {
    fn from(err: LengthError) -> Self {
        Self::InvalidLength(err)
    }
}

impl From<PoisonError<MutexGuard<'_, PasswordForm>>> for Error {
    fn from(_err: PoisonError<MutexGuard<'_, PasswordForm>>) -> Self {
        Self::Generic("thread error")
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Clipboard(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Generic(err) => write!(f, "{err}"),
            Self::GenericDyn(err) => write!(f, "{err}"),
            Self::ConfigError(err) => write!(f, "{err}"),
            Self::SerError(err) => write!(f, "{err}"),
            Self::InvalidLength(err) => write!(f, "{err}"),
            Self::InvalidPolicy => write!(f, "Select at least one character type"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
