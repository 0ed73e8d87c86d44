// src/generators/mod.rs
pub mod charset;
pub mod password;
pub mod strength;

pub use password::{generate, generate_with_rng};
pub use strength::{assess, classify, StrengthReport};
