// src/models.rs
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use utoipa::ToSchema;

/// One of the four categories of characters a password can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharacterClass {
    /// All classes, in the order they are presented to the user.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    /// The order in which enabled alphabets are concatenated into the working alphabet.
    pub const GENERATION_ORDER: [CharacterClass; 4] = [
        CharacterClass::Special,
        CharacterClass::Digit,
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
    ];

    pub fn alphabet(self) -> &'static str {
        crate::generators::charset::alphabet(self)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Uppercase => write!(f, "Uppercase"),
            CharacterClass::Lowercase => write!(f, "Lowercase"),
            CharacterClass::Digit => write!(f, "Numbers"),
            CharacterClass::Special => write!(f, "Special Characters"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown character class '{0}' (expected uppercase, lowercase, digit or special)")]
pub struct ParseClassError(pub String);

impl FromStr for CharacterClass {
    type Err = ParseClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uppercase" | "upper" => Ok(CharacterClass::Uppercase),
            "lowercase" | "lower" => Ok(CharacterClass::Lowercase),
            "digit" | "digits" | "number" | "numbers" => Ok(CharacterClass::Digit),
            "special" | "symbol" | "symbols" => Ok(CharacterClass::Special),
            _ => Err(ParseClassError(s.to_string())),
        }
    }
}

/// Which character classes are enabled and how long the password should be.
///
/// The policy itself does not forbid an empty class set; keeping it non-empty
/// is the job of whoever owns and mutates the policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    pub classes: BTreeSet<CharacterClass>,
    pub length: usize,
}

impl PasswordPolicy {
    pub fn new<I>(classes: I, length: usize) -> Self
    where
        I: IntoIterator<Item = CharacterClass>,
    {
        Self {
            classes: classes.into_iter().collect(),
            length,
        }
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.classes.contains(&class)
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new([CharacterClass::Uppercase], 8)
    }
}

/// Three-tier strength classification of a password string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}
