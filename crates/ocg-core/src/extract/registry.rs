//! Per-run method name registry.
//!
//! One registry is constructed per generation run and threaded through
//! extraction and emission. It is deliberately not a module-level
//! singleton: two clients generated in the same process must not see each
//! other's claimed names.

use std::collections::HashSet;

use rand::{Rng, distr::Alphanumeric};

use crate::error::ExtractError;

/// Retry cap for random-suffix collision breaking.
const MAX_SUFFIX_ATTEMPTS: usize = 16;

/// Generate a short random alphanumeric suffix.
pub fn random_suffix(len: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// The set of identifiers already claimed during one generation run.
#[derive(Debug, Default)]
pub struct NameRegistry {
    used: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Claim `base`, or a random-suffixed variant of it if `base` is taken.
    ///
    /// The retry loop is bounded: exceeding it is a loud failure rather
    /// than an infinite loop on pathological inputs.
    pub fn claim(&mut self, base: &str) -> Result<String, ExtractError> {
        if self.used.insert(base.to_string()) {
            return Ok(base.to_string());
        }
        for _ in 0..MAX_SUFFIX_ATTEMPTS {
            let candidate = format!("{base}{}", random_suffix(4));
            if self.used.insert(candidate.clone()) {
                return Ok(candidate);
            }
        }
        Err(ExtractError::NameCollision(
            base.to_string(),
            MAX_SUFFIX_ATTEMPTS,
        ))
    }

    /// Claim a fresh placeholder suffix, disjoint from every other name
    /// handed out by this registry.
    pub fn claim_placeholder_suffix(&mut self) -> Result<String, ExtractError> {
        for _ in 0..MAX_SUFFIX_ATTEMPTS {
            let candidate = random_suffix(6);
            if self.used.insert(candidate.clone()) {
                return Ok(candidate);
            }
        }
        Err(ExtractError::SuffixExhausted(MAX_SUFFIX_ATTEMPTS))
    }
}
