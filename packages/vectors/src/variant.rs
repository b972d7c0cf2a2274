//! The closed set of digest variants and the report sections they form

use crate::seed::{
    BASE_SEED_32, BASE_SEED_64, REPRESENTATIVE_SEED_32, REPRESENTATIVE_SEED_64, SeedValue,
};

/// One hash entry point together with its keying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Short digest, always called through the seeded entry point
    Xxh32 { seed: u32 },
    /// Wide digest, always called through the seeded entry point
    Xxh64 { seed: u64 },
    /// Extended 64-bit; `None` selects the dedicated unseeded entry point
    Xxh3_64 { seed: Option<u64> },
    /// Extended 128-bit; `None` selects the dedicated unseeded entry point
    Xxh3_128 { seed: Option<u64> },
    /// Extended 64-bit keyed by the run secret
    Xxh3_64Secret,
    /// Extended 128-bit keyed by the run secret
    Xxh3_128Secret,
}

/// How a variant is keyed, as echoed in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keying {
    /// Dedicated unseeded entry point
    None,
    /// Explicit seed
    Seed(SeedValue),
    /// Secret buffer derived for the run
    Secret,
}

impl Variant {
    /// Name used in rendered records
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Xxh32 { .. } => "XXH32",
            Self::Xxh64 { .. } => "XXH64",
            Self::Xxh3_64 { .. } => "XXH3_64",
            Self::Xxh3_128 { .. } => "XXH3_128",
            Self::Xxh3_64Secret => "XXH3_64_secret",
            Self::Xxh3_128Secret => "XXH3_128_secret",
        }
    }

    /// Keying mode of this variant
    #[must_use]
    pub fn keying(&self) -> Keying {
        match *self {
            Self::Xxh32 { seed } => Keying::Seed(SeedValue::Bits32(seed)),
            Self::Xxh64 { seed } => Keying::Seed(SeedValue::Bits64(seed)),
            Self::Xxh3_64 { seed } | Self::Xxh3_128 { seed } => {
                seed.map_or(Keying::None, |seed| Keying::Seed(SeedValue::Bits64(seed)))
            }
            Self::Xxh3_64Secret | Self::Xxh3_128Secret => Keying::Secret,
        }
    }

    /// Digest width in bits
    #[must_use]
    pub fn digest_bits(&self) -> usize {
        match self {
            Self::Xxh32 { .. } => 32,
            Self::Xxh64 { .. } | Self::Xxh3_64 { .. } | Self::Xxh3_64Secret => 64,
            Self::Xxh3_128 { .. } | Self::Xxh3_128Secret => 128,
        }
    }
}

/// Report sections in their fixed output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// XXH32, zero then representative seed
    Xxh32,
    /// XXH64, zero then representative seed
    Xxh64,
    /// XXH3_64, unseeded then representative seed
    Xxh3_64,
    /// XXH3_128, unseeded then representative seed
    Xxh3_128,
    /// Secret-keyed XXH3_64 then XXH3_128
    Secret,
}

impl Section {
    /// Every section, in output order
    pub const ALL: [Section; 5] = [
        Self::Xxh32,
        Self::Xxh64,
        Self::Xxh3_64,
        Self::Xxh3_128,
        Self::Secret,
    ];

    /// Header line introducing the section
    #[must_use]
    pub fn header(&self) -> &'static str {
        match self {
            Self::Xxh32 => "--- XXH32 Tests ---",
            Self::Xxh64 => "--- XXH64 Tests ---",
            Self::Xxh3_64 => "--- XXH3_64 Tests ---",
            Self::Xxh3_128 => "--- XXH3_128 Tests ---",
            Self::Secret => "--- XXH3 Secret Tests ---",
        }
    }

    /// Variants run against each corpus entry, in call order
    #[must_use]
    pub fn variants(&self) -> [Variant; 2] {
        match self {
            Self::Xxh32 => [
                Variant::Xxh32 { seed: BASE_SEED_32 },
                Variant::Xxh32 { seed: REPRESENTATIVE_SEED_32 },
            ],
            Self::Xxh64 => [
                Variant::Xxh64 { seed: BASE_SEED_64 },
                Variant::Xxh64 { seed: REPRESENTATIVE_SEED_64 },
            ],
            Self::Xxh3_64 => [
                Variant::Xxh3_64 { seed: None },
                Variant::Xxh3_64 { seed: Some(REPRESENTATIVE_SEED_64) },
            ],
            Self::Xxh3_128 => [
                Variant::Xxh3_128 { seed: None },
                Variant::Xxh3_128 { seed: Some(REPRESENTATIVE_SEED_64) },
            ],
            Self::Secret => [Variant::Xxh3_64Secret, Variant::Xxh3_128Secret],
        }
    }
}
