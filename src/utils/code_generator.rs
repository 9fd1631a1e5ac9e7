//! Short code generation.
//!
//! Codes are sampled character by character from a fixed URL-safe alphabet.
//! Uniqueness against the store is handled by the service layer, not here.

use crate::utils::random::{RandomError, RandomSource};
use std::sync::Arc;

/// The 67-character code alphabet: lowercase, uppercase, digits (with `1` and
/// `0` appearing twice), and the URL-safe symbols `-`, `_`, `~`.
pub const ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ012345678910-_~";

/// Generates random short codes of a requested length.
///
/// Each position is drawn independently and uniformly from [`ALPHABET`].
#[derive(Clone)]
pub struct CodeGenerator {
    source: Arc<dyn RandomSource>,
}

impl CodeGenerator {
    pub fn new(source: Arc<dyn RandomSource>) -> Self {
        Self { source }
    }

    /// Produces a code of exactly `length` characters (`length >= 1`).
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::Entropy`] if the randomness source fails.
    pub fn generate(&self, length: usize) -> Result<String, RandomError> {
        debug_assert!(length >= 1, "code length must be at least 1");

        let mut code = String::with_capacity(length);
        for _ in 0..length {
            let index = self.source.next_below(ALPHABET.len() as u64)?;
            code.push(ALPHABET[index as usize] as char);
        }
        Ok(code)
    }
}
