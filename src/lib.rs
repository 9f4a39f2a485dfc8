/// Builds the alphabet a password is sampled from, out of the enabled character classes.
pub mod policy;
/// Turns a length and a policy into a random password.
pub mod password_generator;
/// Parsing and range checking of the requested length.
pub mod validator;
/// The state of the password form, shared by the frontends.
pub mod form;
/// Configuration layering, defaults, settings file and environment.
pub mod settings;
/// Copies passwords to the system clipboard and removes them again after a while.
pub mod clipboard;

mod error;

pub use crate::error::{Error, Result};
pub use crate::form::PasswordForm;
pub use crate::password_generator::{password_generator, Password};
pub use crate::policy::{Alphabet, CharClass, Policy};
pub use crate::validator::{Length, LengthError};
