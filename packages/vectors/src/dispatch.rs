//! Runs each variant against a corpus entry

use crate::corpus::InputVector;
use crate::digest::DigestValue;
use crate::family::HashFamily;
use crate::record::OutcomeRecord;
use crate::secret::SecretBuffer;
use crate::seed::SECRET_SEED;
use crate::variant::{Section, Variant};
use crate::Result;
use log::debug;

/// Binds a [`HashFamily`] to the run secret
///
/// The secret seed is constant for a run, so the buffer is derived once at
/// construction and shared by every secret-keyed call.
#[derive(Debug)]
pub struct Dispatcher<F> {
    family: F,
    secret: SecretBuffer,
}

impl<F: HashFamily> Dispatcher<F> {
    /// Create a dispatcher, deriving the run secret from [`SECRET_SEED`]
    pub fn new(family: F) -> Self {
        let secret = family.derive_secret(SECRET_SEED);
        debug!("Derived run secret from seed {SECRET_SEED:#018x}");
        Self { family, secret }
    }

    /// The secret handed to the secret-keyed variants
    pub fn secret(&self) -> &SecretBuffer {
        &self.secret
    }

    /// Compute one digest
    ///
    /// `input` is hashed as-is over its full length.
    ///
    /// # Errors
    ///
    /// Fails only when the family rejects the run secret, which is a
    /// contract violation and fatal to the run.
    pub fn compute(&self, variant: Variant, input: &[u8]) -> Result<DigestValue> {
        let family = &self.family;
        let digest = match variant {
            Variant::Xxh32 { seed } => DigestValue::Bits32(family.xxh32(input, seed)),
            Variant::Xxh64 { seed } => DigestValue::Bits64(family.xxh64(input, seed)),
            Variant::Xxh3_64 { seed: None } => DigestValue::Bits64(family.xxh3_64(input)),
            Variant::Xxh3_64 { seed: Some(seed) } => {
                DigestValue::Bits64(family.xxh3_64_with_seed(input, seed))
            }
            Variant::Xxh3_128 { seed: None } => DigestValue::Bits128(family.xxh3_128(input)),
            Variant::Xxh3_128 { seed: Some(seed) } => {
                DigestValue::Bits128(family.xxh3_128_with_seed(input, seed))
            }
            Variant::Xxh3_64Secret => {
                DigestValue::Bits64(family.xxh3_64_with_secret(input, self.secret.as_bytes())?)
            }
            Variant::Xxh3_128Secret => {
                DigestValue::Bits128(family.xxh3_128_with_secret(input, self.secret.as_bytes())?)
            }
        };
        Ok(digest)
    }

    /// Produce the records for one corpus entry within a section
    ///
    /// # Errors
    ///
    /// Propagates any contract violation from [`Dispatcher::compute`].
    pub fn run_section(&self, section: Section, input: InputVector) -> Result<[OutcomeRecord; 2]> {
        let [first, second] = section.variants();
        Ok([
            OutcomeRecord::new(first, input, self.compute(first, input.as_bytes())?),
            OutcomeRecord::new(second, input, self.compute(second, input.as_bytes())?),
        ])
    }
}
