// src/lib.rs
//! Character-class password generation and three-tier strength classification,
//! with a CLI and an HTTP API on top.

pub mod api;
pub mod cli;
pub mod core;
pub mod generators;
pub mod models;
pub mod utils;

pub use crate::core::{Config, GeneratorSession, PolicyError};
pub use crate::generators::{assess, classify, generate, generate_with_rng, StrengthReport};
pub use crate::models::{CharacterClass, PasswordPolicy, StrengthLabel};
