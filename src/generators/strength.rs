// src/generators/strength.rs
use serde::{Serialize, Deserialize};

use crate::models::StrengthLabel;

/// Characters that count towards the special-character check. Narrower than
/// the generation alphabet: `^`, `(` and `)` are not included.
pub const SPECIAL_EVALUATION_SET: &str = "@$!%*?&#";

/// Minimum length for a password to be classified as strong.
pub const STRONG_MIN_LENGTH: usize = 8;

/// Per-predicate breakdown behind a strength label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
    pub satisfied: u8,
    pub length: usize,
    pub label: StrengthLabel,
}

impl StrengthReport {
    /// Suggestions for each check the password fails.
    pub fn feedback(&self) -> Vec<String> {
        let mut feedback = Vec::new();

        match self.label {
            StrengthLabel::Strong => feedback.push("Strong password".to_string()),
            StrengthLabel::Medium => feedback.push("Medium password".to_string()),
            StrengthLabel::Weak => feedback.push("Weak password".to_string()),
        }

        if !self.has_uppercase {
            feedback.push("Add uppercase letters (A-Z)".to_string());
        }
        if !self.has_lowercase {
            feedback.push("Add lowercase letters (a-z)".to_string());
        }
        if !self.has_digit {
            feedback.push("Add numbers (0-9)".to_string());
        }
        if !self.has_special {
            feedback.push(format!("Add special characters ({})", SPECIAL_EVALUATION_SET));
        }
        if self.length < STRONG_MIN_LENGTH {
            feedback.push(format!("Use at least {} characters", STRONG_MIN_LENGTH));
        }

        feedback
    }
}

/// Evaluate the four character checks and derive the label.
pub fn assess(password: &str) -> StrengthReport {
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_EVALUATION_SET.contains(c));

    let satisfied = [has_uppercase, has_lowercase, has_digit, has_special]
        .iter()
        .filter(|&&met| met)
        .count() as u8;
    let length = password.chars().count();

    // A four-check password under the minimum length is Weak, not Medium.
    let label = if satisfied == 4 && length >= STRONG_MIN_LENGTH {
        StrengthLabel::Strong
    } else if satisfied == 3 {
        StrengthLabel::Medium
    } else {
        StrengthLabel::Weak
    };

    StrengthReport {
        has_uppercase,
        has_lowercase,
        has_digit,
        has_special,
        satisfied,
        length,
        label,
    }
}

pub fn classify(password: &str) -> StrengthLabel {
    assess(password).label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_weak() {
        assert_eq!(classify(""), StrengthLabel::Weak);
        assert_eq!(assess("").satisfied, 0);
    }

    #[test]
    fn three_classes_is_medium() {
        assert_eq!(classify("Abcdefg1"), StrengthLabel::Medium);
    }

    #[test]
    fn four_classes_and_long_enough_is_strong() {
        assert_eq!(classify("Abcdefg1!"), StrengthLabel::Strong);
    }

    #[test]
    fn four_classes_but_short_falls_through_to_weak() {
        let report = assess("Ab1!");
        assert_eq!(report.satisfied, 4);
        assert_eq!(report.label, StrengthLabel::Weak);
    }

    #[test]
    fn single_class_is_weak() {
        assert_eq!(classify("ABCDEFGH"), StrengthLabel::Weak);
    }

    #[test]
    fn generation_only_specials_do_not_count() {
        // '^', '(' and ')' come out of the generator but fail the special check.
        let report = assess("Abcdefg1^()");
        assert!(!report.has_special);
        assert_eq!(report.label, StrengthLabel::Medium);

        assert_eq!(classify("Abcdefg1?"), StrengthLabel::Strong);
    }

    #[test]
    fn two_classes_is_weak() {
        assert_eq!(classify("abcdefgh12"), StrengthLabel::Weak);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Seven characters, the 'é' taking two bytes.
        assert_eq!(classify("Ab1!éxy"), StrengthLabel::Weak);
        assert_eq!(classify("Ab1!éxyz"), StrengthLabel::Strong);
    }

    #[test]
    fn feedback_lists_missing_checks() {
        let feedback = assess("abc").feedback();
        assert_eq!(feedback[0], "Weak password");
        assert!(feedback.contains(&"Add uppercase letters (A-Z)".to_string()));
        assert!(feedback.contains(&"Add numbers (0-9)".to_string()));
        assert!(feedback.contains(&"Add special characters (@$!%*?&#)".to_string()));
        assert!(feedback.contains(&"Use at least 8 characters".to_string()));
        assert!(!feedback.iter().any(|f| f.contains("lowercase")));
    }

    #[test]
    fn strong_password_has_no_suggestions() {
        assert_eq!(assess("Abcdefg1!").feedback(), vec!["Strong password".to_string()]);
    }

    #[test]
    fn classification_is_repeatable() {
        for _ in 0..3 {
            assert_eq!(classify("Abcdefg1"), StrengthLabel::Medium);
        }
    }
}
