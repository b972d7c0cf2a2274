//! Outcome records and their one-line rendering

use crate::corpus::InputVector;
use crate::digest::DigestValue;
use crate::variant::{Keying, Variant};

/// One (variant, input, digest) result, rendered then dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeRecord {
    variant: Variant,
    input: InputVector,
    digest: DigestValue,
}

impl OutcomeRecord {
    /// Create a new record
    #[must_use]
    pub fn new(variant: Variant, input: InputVector, digest: DigestValue) -> Self {
        Self {
            variant,
            input,
            digest,
        }
    }

    /// Variant that produced the digest
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Corpus entry that was hashed
    #[must_use]
    pub fn input(&self) -> InputVector {
        self.input
    }

    /// The digest
    #[must_use]
    pub fn digest(&self) -> DigestValue {
        self.digest
    }
}

/// Renders `NAME('<input>'[, 0x<seed>]) = 0x<digest>`
impl std::fmt::Display for OutcomeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}('{}'", self.variant.name(), self.input.text())?;
        if let Keying::Seed(seed) = self.variant.keying() {
            write!(f, ", {seed}")?;
        }
        write!(f, ") = {}", self.digest)
    }
}
