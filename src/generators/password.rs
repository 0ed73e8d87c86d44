// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::generators::charset::working_alphabet;
use crate::models::PasswordPolicy;

/// Generate a password using the thread-local random source.
pub fn generate(policy: &PasswordPolicy) -> String {
    generate_with_rng(policy, &mut rand::thread_rng())
}

/// Generate a password of exactly `policy.length` characters, each drawn
/// uniformly and independently from the working alphabet.
///
/// An empty class set yields an empty password rather than an error. The
/// length is used as given; bounding it is up to the caller.
pub fn generate_with_rng<R: Rng + ?Sized>(policy: &PasswordPolicy, rng: &mut R) -> String {
    let chars = working_alphabet(&policy.classes);
    if chars.is_empty() {
        return String::new();
    }

    let dist = Uniform::from(0..chars.len());
    (0..policy.length)
        .map(|_| chars[dist.sample(rng)] as char)
        .collect()
}
