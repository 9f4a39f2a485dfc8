use log::debug;
use rand::Rng;

use crate::{
    error::{Error, Result},
    password_generator::{password_generator_with_rng, Password},
    policy::{CharClass, Policy},
    validator::{validate_length, Length, LengthError},
};

/// The state behind the password form: the raw length field, the character class toggles and
/// the last generated password.
#[derive(Debug, Default)]
pub struct PasswordForm {
    length_input: String,
    touched: bool,
    policy: Policy,
    password: Option<Password>,
}

impl PasswordForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    /// Replaces the content of the length field, the field counts as touched afterwards.
    pub fn set_length_input(&mut self, input: &str) {
        self.length_input = input.to_owned();
        self.touched = true;
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        self.policy.set(class, enabled);
    }

    pub fn toggle_class(&mut self, class: CharClass) {
        self.policy.toggle(class);
    }

    pub fn validate(&self) -> std::result::Result<Length, LengthError> {
        validate_length(&self.length_input)
    }

    /// The error to show next to the length field. Untouched fields don't show errors.
    pub fn length_error(&self) -> Option<LengthError> {
        if !self.touched {
            return None;
        }
        self.validate().err()
    }

    pub fn policy_error(&self) -> Option<Error> {
        if self.policy.is_empty() {
            Some(Error::InvalidPolicy)
        } else {
            None
        }
    }

    pub fn can_generate(&self) -> bool {
        self.validate().is_ok() && !self.policy.is_empty()
    }

    pub fn generate(&mut self) -> Result<&Password> {
        let mut rng = rand::thread_rng();
        self.generate_with(&mut rng)
    }

    /// Validates the form and generates a new password. A failed attempt keeps the previous
    /// password.
    pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Password> {
        self.touched = true;
        let length = self.validate()?;
        let password = password_generator_with_rng(length, &self.policy, rng)?;

        Ok(&*self.password.insert(password))
    }

    pub fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }

    pub fn is_generated(&self) -> bool {
        self.password.is_some()
    }

    /// Clears the length field and the password and restores the default policy.
    pub fn reset(&mut self) {
        debug!("resetting password form");
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "tests/form.rs"]
mod form;
