//! Character classes and the working alphabet built from them.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()?";

/// A named category of characters with a fixed alphabet.
///
/// Declaration order is the order in which alphabets are concatenated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// All classes, in alphabet order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Checkbox label shown next to the class toggle.
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Include Lower Case (a-z)",
            CharacterClass::Uppercase => "Include Upper Case (A-Z)",
            CharacterClass::Digits => "Include Numbers (0-9)",
            CharacterClass::Symbols => "Include Symbols (&-#)",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lowercase" | "lower" => Ok(CharacterClass::Lowercase),
            "uppercase" | "upper" => Ok(CharacterClass::Uppercase),
            "digits" | "numbers" => Ok(CharacterClass::Digits),
            "symbols" => Ok(CharacterClass::Symbols),
            other => Err(ConfigError::UnknownClass(other.to_string())),
        }
    }
}

/// An ordered set of character classes. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSet {
    classes: BTreeSet<CharacterClass>,
}

impl CharacterSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        CharacterClass::ALL.into_iter().collect()
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.classes.contains(&class)
    }

    pub fn insert(&mut self, class: CharacterClass) -> bool {
        self.classes.insert(class)
    }

    pub fn remove(&mut self, class: CharacterClass) -> bool {
        self.classes.remove(&class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Enabled classes in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        self.classes.iter().copied()
    }

    /// Concatenates the alphabets of the enabled classes in class order.
    ///
    /// Returns an empty vector when no class is enabled.
    pub fn working_alphabet(&self) -> Vec<char> {
        self.iter().flat_map(|c| c.alphabet().chars()).collect()
    }
}

impl FromIterator<CharacterClass> for CharacterSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        Self {
            classes: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[CharacterClass; N]> for CharacterSet {
    fn from(classes: [CharacterClass; N]) -> Self {
        classes.into_iter().collect()
    }
}
