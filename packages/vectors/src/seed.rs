//! Seed values per digest width

use std::fmt;

/// Zero seed for the 32-bit family
pub const BASE_SEED_32: u32 = 0;

/// Zero seed for the 64-bit families
pub const BASE_SEED_64: u64 = 0;

/// Non-zero seed for the 32-bit family
pub const REPRESENTATIVE_SEED_32: u32 = 0x1234_5678;

/// Non-zero seed for the 64-bit families
pub const REPRESENTATIVE_SEED_64: u64 = 0x1234_5678_9abc_def0;

/// Seed the secret-keyed variants derive their secret from
pub const SECRET_SEED: u64 = 0;

/// Integer width of a seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedWidth {
    /// 32-bit seeds (XXH32)
    Bits32,
    /// 64-bit seeds (XXH64, XXH3)
    Bits64,
}

/// A seed of a given width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedValue {
    /// 32-bit seed
    Bits32(u32),
    /// 64-bit seed
    Bits64(u64),
}

impl SeedValue {
    /// Width of this seed
    #[must_use]
    pub fn width(&self) -> SeedWidth {
        match self {
            Self::Bits32(_) => SeedWidth::Bits32,
            Self::Bits64(_) => SeedWidth::Bits64,
        }
    }

    /// Check if this is the zero seed
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Bits32(seed) => *seed == 0,
            Self::Bits64(seed) => *seed == 0,
        }
    }
}

/// Renders the seed as `0x` plus zero-padded lowercase hex of its width
impl fmt::Display for SeedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bits32(seed) => write!(f, "0x{}", hex::encode(seed.to_be_bytes())),
            Self::Bits64(seed) => write!(f, "0x{}", hex::encode(seed.to_be_bytes())),
        }
    }
}

/// The zero seed for `width`, used for the unseeded path
#[must_use]
pub fn base_seed(width: SeedWidth) -> SeedValue {
    match width {
        SeedWidth::Bits32 => SeedValue::Bits32(BASE_SEED_32),
        SeedWidth::Bits64 => SeedValue::Bits64(BASE_SEED_64),
    }
}

/// The fixed non-zero seed for `width`
#[must_use]
pub fn representative_seed(width: SeedWidth) -> SeedValue {
    match width {
        SeedWidth::Bits32 => SeedValue::Bits32(REPRESENTATIVE_SEED_32),
        SeedWidth::Bits64 => SeedValue::Bits64(REPRESENTATIVE_SEED_64),
    }
}
