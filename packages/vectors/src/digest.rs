//! Digest values and their canonical hex encoding

/// Output of one hash invocation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DigestValue {
    /// 32-bit digest
    Bits32(u32),
    /// 64-bit digest
    Bits64(u64),
    /// 128-bit digest, high half in the upper 64 bits
    Bits128(u128),
}

impl DigestValue {
    /// Build a 128-bit digest from its halves
    #[must_use]
    pub fn from_halves(high: u64, low: u64) -> Self {
        Self::Bits128((u128::from(high) << 64) | u128::from(low))
    }

    /// Digest width in bits
    #[must_use]
    pub fn bits(&self) -> usize {
        match self {
            Self::Bits32(_) => 32,
            Self::Bits64(_) => 64,
            Self::Bits128(_) => 128,
        }
    }

    /// High 64 bits of a 128-bit digest
    #[must_use]
    pub fn high64(&self) -> Option<u64> {
        match self {
            Self::Bits128(value) => Some((value >> 64) as u64),
            _ => None,
        }
    }

    /// Low 64 bits of a 128-bit digest
    #[must_use]
    pub fn low64(&self) -> Option<u64> {
        match self {
            Self::Bits128(value) => Some(*value as u64),
            _ => None,
        }
    }

    /// Lowercase, zero-padded hex without prefix
    ///
    /// Big-endian bytes give 8 digits for 32-bit, 16 for 64-bit, and for
    /// 128-bit the high half followed directly by the low half.
    #[must_use]
    pub fn to_hex(&self) -> String {
        match self {
            Self::Bits32(value) => hex::encode(value.to_be_bytes()),
            Self::Bits64(value) => hex::encode(value.to_be_bytes()),
            Self::Bits128(value) => hex::encode(value.to_be_bytes()),
        }
    }
}

impl std::fmt::Display for DigestValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_width_follows_digest_width() {
        assert_eq!(DigestValue::Bits32(0x2cc5d05).to_hex(), "02cc5d05");
        assert_eq!(DigestValue::Bits64(1).to_hex(), "0000000000000001");
        assert_eq!(DigestValue::Bits128(0).to_hex().len(), 32);
    }

    #[test]
    fn high_half_renders_first() {
        let digest = DigestValue::from_halves(0x99aa_06d3_0147_98d8, 0x6001_c324_468d_497f);
        assert_eq!(digest.to_hex(), "99aa06d3014798d86001c324468d497f");
        assert_eq!(digest.high64(), Some(0x99aa_06d3_0147_98d8));
        assert_eq!(digest.low64(), Some(0x6001_c324_468d_497f));
        assert_eq!(digest.to_string(), "0x99aa06d3014798d86001c324468d497f");
    }
}
