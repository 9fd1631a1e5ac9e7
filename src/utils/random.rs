//! Bounded uniform random integers backed by the OS entropy source.

use rand_core::{OsRng, TryRngCore};

/// Errors from the randomness source.
#[derive(Debug, thiserror::Error)]
pub enum RandomError {
    #[error("Entropy source failure: {0}")]
    Entropy(String),
}

/// A source of uniformly distributed integers in `[0, bound)`.
///
/// Implementations must be cryptographically strong; seeded generators are
/// not acceptable here. Injectable so tests can supply a deterministic source.
pub trait RandomSource: Send + Sync {
    /// Returns a uniform value below `bound`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::Entropy`] if the underlying entropy read fails.
    /// The caller must treat this as fatal for the current request.
    fn next_below(&self, bound: u64) -> Result<u64, RandomError>;
}

/// [`RandomSource`] backed by the operating system RNG.
///
/// Draws 64 bits at a time, masks the sign bit, and rejection-samples so the
/// result is unbiased for any bound.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

const SIGN_MASK: u64 = !(1 << 63);

impl RandomSource for OsRandom {
    fn next_below(&self, bound: u64) -> Result<u64, RandomError> {
        assert!(bound > 0, "bound must be positive");

        // Largest multiple of `bound` representable in 63 bits; values at or
        // above it would bias the modulo and are redrawn.
        let limit = (1u64 << 63) - ((1u64 << 63) % bound);

        loop {
            let mut buf = [0u8; 8];
            OsRng
                .try_fill_bytes(&mut buf)
                .map_err(|e| RandomError::Entropy(e.to_string()))?;

            let value = u64::from_be_bytes(buf) & SIGN_MASK;
            if value < limit {
                return Ok(value % bound);
            }
        }
    }
}
