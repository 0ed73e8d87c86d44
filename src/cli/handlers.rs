// src/cli/handlers.rs
use serde::Serialize;
use std::error::Error;
use thiserror::Error;

use crate::core::session::mask;
use crate::core::{Config, GeneratorSession, PolicyError};
use crate::generators::{self, StrengthReport};
use crate::models::{CharacterClass, PasswordPolicy, StrengthLabel};
use crate::utils::{format_classes, styled_strength};

/// Most passwords a single `generate` call will produce.
pub const MAX_COUNT: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("Cannot generate {requested} passwords at once (maximum {max})")]
    TooMany { requested: usize, max: usize },
}

#[derive(Debug, Default)]
pub struct GenerateOptions {
    pub length: Option<usize>,
    pub classes: Vec<CharacterClass>,
    pub count: usize,
    pub show: bool,
}

#[derive(Debug, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthLabel,
}

// Handlers for CLI commands
pub fn handle_generate(config: &Config, options: &GenerateOptions) -> Result<Vec<GeneratedPassword>, GenerateError> {
    if options.count > MAX_COUNT {
        return Err(GenerateError::TooMany { requested: options.count, max: MAX_COUNT });
    }

    let mut policy = config.default_policy();
    if !options.classes.is_empty() {
        policy = PasswordPolicy::new(options.classes.iter().copied(), policy.length);
    }

    let mut session = GeneratorSession::new(policy, config.max_password_length)?;
    if let Some(length) = options.length {
        let applied = session.set_length(length);
        if applied != length {
            println!("⚠️ Length {} is above the maximum, using {}", length, applied);
        }
    }

    log::info!(
        "Generating {} password(s): length={}, classes={}",
        options.count,
        session.policy().length,
        format_classes(&session.policy().classes)
    );

    let mut results = Vec::new();
    for i in 0..options.count {
        if i > 0 {
            session.regenerate();
        }
        results.push(GeneratedPassword {
            password: session.password().to_string(),
            strength: session.strength(),
        });
    }

    Ok(results)
}

pub fn print_generated(results: &[GeneratedPassword], show: bool, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    for result in results {
        let shown = if show { result.password.clone() } else { mask(&result.password) };
        println!("🔐 {}  {}", shown, styled_strength(result.strength));
    }
    if !show && !results.is_empty() {
        println!("(use --show to reveal)");
    }

    Ok(())
}

pub fn handle_check(password: &str) -> StrengthReport {
    generators::assess(password)
}

pub fn print_report(report: &StrengthReport, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Strength: {}", styled_strength(report.label));
    println!("Checks passed: {}/4, length {}", report.satisfied, report.length);
    for line in report.feedback().iter().skip(1) {
        println!("  • {}", line);
    }

    Ok(())
}
