// src/utils/format.rs
use console::{style, StyledObject};
use std::collections::BTreeSet;

use crate::models::{CharacterClass, StrengthLabel};

// Color a strength label the way the form does: green, orange, red
pub fn styled_strength(label: StrengthLabel) -> StyledObject<String> {
    let text = label.to_string();
    match label {
        StrengthLabel::Strong => style(text).green().bold(),
        StrengthLabel::Medium => style(text).yellow().bold(),
        StrengthLabel::Weak => style(text).red().bold(),
    }
}

// Comma-separated list of enabled classes, in menu order
pub fn format_classes(classes: &BTreeSet<CharacterClass>) -> String {
    let names: Vec<String> = CharacterClass::ALL
        .iter()
        .filter(|c| classes.contains(*c))
        .map(|c| c.to_string())
        .collect();

    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

// Checkbox-style label for a class in the toggle menu
pub fn checkbox_label(class: CharacterClass, enabled: bool) -> String {
    format!("[{}] {}", if enabled { "x" } else { " " }, class)
}
