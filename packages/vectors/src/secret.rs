//! Secret buffers for the secret-keyed XXH3 variants
//!
//! The expansion matches the XXH3 custom-secret derivation: every 16-byte
//! lane of the default secret is read as two little-endian `u64`s, the seed
//! is added to the first and subtracted from the second (wrapping).

use crate::{Result, VectorError};

/// Size of a derived secret in bytes
pub const SECRET_SIZE: usize = 192;

/// Smallest secret the XXH3 family accepts
pub const SECRET_MINIMUM_LENGTH: usize = 136;

/// Built-in XXH3 secret; `SecretBuffer::derive(0)` reproduces it exactly
pub const DEFAULT_SECRET: [u8; SECRET_SIZE] = [
    0xb8, 0xfe, 0x6c, 0x39, 0x23, 0xa4, 0x4b, 0xbe, 0x7c, 0x01, 0x81, 0x2c, 0xf7, 0x21, 0xad, 0x1c,
    0xde, 0xd4, 0x6d, 0xe9, 0x83, 0x90, 0x97, 0xdb, 0x72, 0x40, 0xa4, 0xa4, 0xb7, 0xb3, 0x67, 0x1f,
    0xcb, 0x79, 0xe6, 0x4e, 0xcc, 0xc0, 0xe5, 0x78, 0x82, 0x5a, 0xd0, 0x7d, 0xcc, 0xff, 0x72, 0x21,
    0xb8, 0x08, 0x46, 0x74, 0xf7, 0x43, 0x24, 0x8e, 0xe0, 0x35, 0x90, 0xe6, 0x81, 0x3a, 0x26, 0x4c,
    0x3c, 0x28, 0x52, 0xbb, 0x91, 0xc3, 0x00, 0xcb, 0x88, 0xd0, 0x65, 0x8b, 0x1b, 0x53, 0x2e, 0xa3,
    0x71, 0x64, 0x48, 0x97, 0xa2, 0x0d, 0xf9, 0x4e, 0x38, 0x19, 0xef, 0x46, 0xa9, 0xde, 0xac, 0xd8,
    0xa8, 0xfa, 0x76, 0x3f, 0xe3, 0x9c, 0x34, 0x3f, 0xf9, 0xdc, 0xbb, 0xc7, 0xc7, 0x0b, 0x4f, 0x1d,
    0x8a, 0x51, 0xe0, 0x4b, 0xcd, 0xb4, 0x59, 0x31, 0xc8, 0x9f, 0x7e, 0xc9, 0xd9, 0x78, 0x73, 0x64,
    0xea, 0xc5, 0xac, 0x83, 0x34, 0xd3, 0xeb, 0xc3, 0xc5, 0x81, 0xa0, 0xff, 0xfa, 0x13, 0x63, 0xeb,
    0x17, 0x0d, 0xdd, 0x51, 0xb7, 0xf0, 0xda, 0x49, 0xd3, 0x16, 0x55, 0x26, 0x29, 0xd4, 0x68, 0x9e,
    0x2b, 0x16, 0xbe, 0x58, 0x7d, 0x47, 0xa1, 0xfc, 0x8f, 0xf8, 0xb8, 0xd1, 0x7a, 0xd0, 0x31, 0xce,
    0x45, 0xcb, 0x3a, 0x8f, 0x95, 0x16, 0x04, 0x28, 0xaf, 0xd7, 0xfb, 0xca, 0xbb, 0x4b, 0x40, 0x7e,
];

/// A derived secret, immutable once built
#[derive(Clone, PartialEq, Eq)]
pub struct SecretBuffer([u8; SECRET_SIZE]);

impl SecretBuffer {
    /// Expand a 64-bit seed into a full secret
    #[must_use]
    pub fn derive(seed: u64) -> Self {
        let mut secret = DEFAULT_SECRET;
        for lane in secret.chunks_exact_mut(16) {
            let (lo, hi) = lane.split_at_mut(8);
            let lo_word = read_u64_le(lo).wrapping_add(seed);
            let hi_word = read_u64_le(hi).wrapping_sub(seed);
            lo.copy_from_slice(&lo_word.to_le_bytes());
            hi.copy_from_slice(&hi_word.to_le_bytes());
        }
        Self(secret)
    }

    /// Raw secret bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for SecretBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretBuffer({}..)", hex::encode(&self.0[..8]))
    }
}

/// Check that `secret` meets the library minimum
///
/// # Errors
///
/// Returns `VectorError::SecretTooShort` when `secret` is shorter than
/// [`SECRET_MINIMUM_LENGTH`].
pub fn validate_secret(secret: &[u8]) -> Result<()> {
    if secret.len() < SECRET_MINIMUM_LENGTH {
        return Err(VectorError::SecretTooShort {
            required: SECRET_MINIMUM_LENGTH,
            actual: secret.len(),
        });
    }
    Ok(())
}

fn read_u64_le(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(bytes);
    u64::from_le_bytes(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn zero_seed_yields_default_secret() {
        assert_eq!(SecretBuffer::derive(0).as_bytes(), &DEFAULT_SECRET[..]);
        assert_eq!(
            &DEFAULT_SECRET[..16],
            &hex!("b8fe6c3923a44bbe7c01812cf721ad1c")[..]
        );
    }

    #[test]
    fn derivation_is_stable_and_seed_sensitive() {
        let a = SecretBuffer::derive(0x1234_5678_9abc_def0);
        let b = SecretBuffer::derive(0x1234_5678_9abc_def0);
        assert_eq!(a, b);
        assert_ne!(a, SecretBuffer::derive(0));
        assert_eq!(a.as_bytes().len(), SECRET_SIZE);
    }

    #[test]
    fn lanes_move_in_opposite_directions() {
        let secret = SecretBuffer::derive(1);
        let lo = read_u64_le(&secret.as_bytes()[..8]);
        let hi = read_u64_le(&secret.as_bytes()[8..16]);
        assert_eq!(lo, read_u64_le(&DEFAULT_SECRET[..8]).wrapping_add(1));
        assert_eq!(hi, read_u64_le(&DEFAULT_SECRET[8..16]).wrapping_sub(1));
    }

    #[test]
    fn validate_secret_enforces_minimum() {
        assert!(validate_secret(&[0u8; SECRET_MINIMUM_LENGTH]).is_ok());
        match validate_secret(&[0u8; 100]) {
            Err(VectorError::SecretTooShort { required, actual }) => {
                assert_eq!(required, 136);
                assert_eq!(actual, 100);
            }
            other => panic!("expected SecretTooShort, got {other:?}"),
        }
    }
}
