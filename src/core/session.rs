// src/core/session.rs
use rand::rngs::ThreadRng;
use rand::Rng;
use thiserror::Error;

use crate::generators::{classify, generate_with_rng};
use crate::models::{CharacterClass, PasswordPolicy, StrengthLabel};

/// Upper bound of the length slider.
pub const DEFAULT_MAX_LENGTH: usize = 20;

const MASK_CHAR: char = '•';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("At least one character type must be included")]
    NoClassesEnabled,
}

/// Owns the current policy and the password derived from it.
///
/// Every mutation regenerates the password and its strength label together,
/// so callers never see a label that belongs to an older password.
pub struct GeneratorSession<R: Rng = ThreadRng> {
    policy: PasswordPolicy,
    max_length: usize,
    password: String,
    strength: StrengthLabel,
    revealed: bool,
    rng: R,
}

impl GeneratorSession<ThreadRng> {
    pub fn new(policy: PasswordPolicy, max_length: usize) -> Result<Self, PolicyError> {
        Self::with_rng(policy, max_length, rand::thread_rng())
    }
}

impl<R: Rng> GeneratorSession<R> {
    /// Start a session with an explicit random source. The initial length is
    /// clamped to `max_length`.
    pub fn with_rng(mut policy: PasswordPolicy, max_length: usize, rng: R) -> Result<Self, PolicyError> {
        if policy.classes.is_empty() {
            return Err(PolicyError::NoClassesEnabled);
        }
        policy.length = policy.length.min(max_length);

        let mut session = Self {
            policy,
            max_length,
            password: String::new(),
            strength: StrengthLabel::Weak,
            revealed: false,
            rng,
        };
        session.regenerate();
        Ok(session)
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn strength(&self) -> StrengthLabel {
        self.strength
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Produce a fresh password for the current policy.
    pub fn regenerate(&mut self) {
        let password = generate_with_rng(&self.policy, &mut self.rng);
        let strength = classify(&password);
        log::debug!(
            "Regenerated password: length={}, classes={:?}, strength={}",
            self.policy.length,
            self.policy.classes,
            strength
        );
        self.password = password;
        self.strength = strength;
    }

    /// Flip one class on or off. Turning off the last enabled class is
    /// refused and leaves the session untouched.
    pub fn toggle(&mut self, class: CharacterClass) -> Result<(), PolicyError> {
        if self.policy.is_enabled(class) {
            if self.policy.classes.len() == 1 {
                log::debug!("Refusing to disable {}: it is the only enabled class", class);
                return Err(PolicyError::NoClassesEnabled);
            }
            self.policy.classes.remove(&class);
        } else {
            self.policy.classes.insert(class);
        }

        self.regenerate();
        Ok(())
    }

    /// Set the password length, clamped to `0..=max_length`. Returns the
    /// length actually applied.
    pub fn set_length(&mut self, length: usize) -> usize {
        let applied = length.min(self.max_length);
        if applied != length {
            log::warn!("Requested length {} exceeds maximum {}, using {}", length, self.max_length, applied);
        }
        self.policy.length = applied;
        self.regenerate();
        applied
    }

    pub fn toggle_visibility(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }

    /// The password as it should be shown: in clear when revealed, masked otherwise.
    pub fn display(&self) -> String {
        if self.revealed {
            self.password.clone()
        } else {
            mask(&self.password)
        }
    }
}

pub fn mask(password: &str) -> String {
    password.chars().map(|_| MASK_CHAR).collect()
}
