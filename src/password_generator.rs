use std::fmt;

use log::debug;
use rand::Rng;
use zeroize::Zeroizing;

use crate::{
    error::{Error, Result},
    policy::{Alphabet, Policy},
    validator::Length,
};

/// A generated password. The buffer is wiped when the value is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Password(****)")
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Picks `length` characters from `alphabet`, each one independently and uniformly.
pub fn sample<R: Rng + ?Sized>(alphabet: &Alphabet, length: Length, rng: &mut R) -> Result<Password> {
    if alphabet.is_empty() {
        return Err(Error::InvalidPolicy);
    }

    let chars = alphabet.as_bytes();
    let mut password = Zeroizing::new(String::with_capacity(length.get()));
    for _ in 0..length.get() {
        let index = rng.gen_range(0..chars.len());
        password.push(chars[index] as char);
    }

    Ok(Password(password))
}

pub fn password_generator_with_rng<R: Rng + ?Sized>(
    length: Length,
    policy: &Policy,
    rng: &mut R,
) -> Result<Password> {
    let alphabet = policy.alphabet();
    debug!(
        "generating a password of length {} from {} characters",
        length,
        alphabet.len()
    );
    sample(&alphabet, length, rng)
}

pub fn password_generator(length: Length, policy: &Policy) -> Result<Password> {
    let mut rng = rand::thread_rng();
    password_generator_with_rng(length, policy, &mut rng)
}

#[cfg(test)]
#[path = "tests/password_generator.rs"]
mod password_generator;
