use std::fmt;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+";

/// One group of characters that can be switched on or off in a [`Policy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharClass {
    /// All classes, in the order their characters appear in an [`Alphabet`].
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            Self::Uppercase => UPPERCASE,
            Self::Lowercase => LOWERCASE,
            Self::Digits => DIGITS,
            Self::Symbols => SYMBOLS,
        }
    }

    /// Stable identifier, used to name the widgets of a frontend.
    pub fn name(self) -> &'static str {
        match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Digits => "digits",
            Self::Symbols => "symbols",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Uppercase => "Include Uppercase letters",
            Self::Lowercase => "Include Lowercase letters",
            Self::Digits => "Include Numbers",
            Self::Symbols => "Include Symbols",
        }
    }
}

/// Which character classes a password may be built from.
///
/// Nothing prevents every class from being disabled, in that case the alphabet is empty and
/// generation is refused with [`crate::Error::InvalidPolicy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Policy {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: false,
            digits: false,
            symbols: false,
        }
    }
}

impl Policy {
    /// A policy with every class disabled.
    pub const fn empty() -> Self {
        Self {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
        }
    }

    /// A policy with every class enabled.
    pub const fn all() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }

    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        let flag = match class {
            CharClass::Uppercase => &mut self.uppercase,
            CharClass::Lowercase => &mut self.lowercase,
            CharClass::Digits => &mut self.digits,
            CharClass::Symbols => &mut self.symbols,
        };
        *flag = enabled;
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set(class, !self.includes(class));
    }

    pub fn with(mut self, class: CharClass) -> Self {
        self.set(class, true);
        self
    }

    pub fn is_empty(&self) -> bool {
        !CharClass::ALL.iter().any(|c| self.includes(*c))
    }

    /// The enabled classes, in alphabet order.
    pub fn classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(move |c| self.includes(*c))
    }

    pub fn alphabet(&self) -> Alphabet {
        build_alphabet(self)
    }
}

/// The characters eligible for sampling under some [`Policy`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Alphabet(String);

impl Alphabet {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(c)
    }

    /// The alphabet is ascii only, so every byte is one character.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Concatenates the characters of every enabled class: uppercase, lowercase, digits and then
/// symbols.
pub fn build_alphabet(policy: &Policy) -> Alphabet {
    Alphabet(policy.classes().map(CharClass::chars).collect())
}

#[cfg(test)]
#[path = "tests/policy.rs"]
mod policy;
