//! Capability interface over the hash library under test
//!
//! The driver only ever talks to [`HashFamily`]. The production binary uses
//! [`TwoxHash`]; any other implementation of the family, including one
//! written from scratch, can be dropped in without touching the dispatcher,
//! the reporter or the tests.

use crate::secret::{SecretBuffer, validate_secret};
use crate::{Result, VectorError};
use twox_hash::{XxHash3_64, XxHash3_128, XxHash32, XxHash64};

/// The six digest entry points plus secret expansion
pub trait HashFamily {
    /// XXH32 with an explicit seed
    fn xxh32(&self, input: &[u8], seed: u32) -> u32;

    /// XXH64 with an explicit seed
    fn xxh64(&self, input: &[u8], seed: u64) -> u64;

    /// XXH3 64-bit, dedicated unseeded entry point
    fn xxh3_64(&self, input: &[u8]) -> u64;

    /// XXH3 64-bit with a seed
    fn xxh3_64_with_seed(&self, input: &[u8], seed: u64) -> u64;

    /// XXH3 64-bit keyed by a caller-supplied secret
    ///
    /// # Errors
    ///
    /// Returns an error when the secret is below the library minimum.
    fn xxh3_64_with_secret(&self, input: &[u8], secret: &[u8]) -> Result<u64>;

    /// XXH3 128-bit, dedicated unseeded entry point
    fn xxh3_128(&self, input: &[u8]) -> u128;

    /// XXH3 128-bit with a seed
    fn xxh3_128_with_seed(&self, input: &[u8], seed: u64) -> u128;

    /// XXH3 128-bit keyed by a caller-supplied secret
    ///
    /// # Errors
    ///
    /// Returns an error when the secret is below the library minimum.
    fn xxh3_128_with_secret(&self, input: &[u8], secret: &[u8]) -> Result<u128>;

    /// Expand a seed into a full-size secret
    fn derive_secret(&self, seed: u64) -> SecretBuffer {
        SecretBuffer::derive(seed)
    }
}

/// [`HashFamily`] backed by the `twox-hash` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoxHash;

impl HashFamily for TwoxHash {
    fn xxh32(&self, input: &[u8], seed: u32) -> u32 {
        XxHash32::oneshot(seed, input)
    }

    fn xxh64(&self, input: &[u8], seed: u64) -> u64 {
        XxHash64::oneshot(seed, input)
    }

    fn xxh3_64(&self, input: &[u8]) -> u64 {
        XxHash3_64::oneshot(input)
    }

    fn xxh3_64_with_seed(&self, input: &[u8], seed: u64) -> u64 {
        XxHash3_64::oneshot_with_seed(seed, input)
    }

    fn xxh3_64_with_secret(&self, input: &[u8], secret: &[u8]) -> Result<u64> {
        validate_secret(secret)?;
        XxHash3_64::oneshot_with_secret(secret, input)
            .map_err(|_| VectorError::library("XXH3_64 refused the secret"))
    }

    fn xxh3_128(&self, input: &[u8]) -> u128 {
        XxHash3_128::oneshot(input)
    }

    fn xxh3_128_with_seed(&self, input: &[u8], seed: u64) -> u128 {
        XxHash3_128::oneshot_with_seed(seed, input)
    }

    fn xxh3_128_with_secret(&self, input: &[u8], secret: &[u8]) -> Result<u128> {
        validate_secret(secret)?;
        XxHash3_128::oneshot_with_secret(secret, input)
            .map_err(|_| VectorError::library("XXH3_128 refused the secret"))
    }
}
