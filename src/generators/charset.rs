// src/generators/charset.rs
use crate::models::CharacterClass;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*()";

pub fn alphabet(class: CharacterClass) -> &'static str {
    match class {
        CharacterClass::Uppercase => UPPERCASE,
        CharacterClass::Lowercase => LOWERCASE,
        CharacterClass::Digit => DIGITS,
        CharacterClass::Special => SPECIAL,
    }
}

/// Concatenate the alphabets of every enabled class, special characters first
/// and uppercase last. Empty when no class is enabled.
pub fn working_alphabet<'a, I>(enabled: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a CharacterClass>,
{
    let enabled: Vec<CharacterClass> = enabled.into_iter().copied().collect();
    let mut chars = Vec::new();

    for class in CharacterClass::GENERATION_ORDER {
        if enabled.contains(&class) {
            chars.extend(alphabet(class).bytes());
        }
    }

    chars
}
