//! Proof-of-work targets and their compact ("bits") encoding.

use crate::chain_params_error::FatalConfigError;
use primitive_types::U256;

/// A difficulty threshold: a hash meets it when, read as a little-endian
/// 256-bit number, it is not above the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Target(U256);

impl Target {
    pub fn new(value: U256) -> Target {
        Target(value)
    }

    /// `!0 >> zero_bits`, the form every proof-of-work limit is written in.
    pub fn from_leading_zero_bits(zero_bits: usize) -> Target {
        Target(U256::MAX >> zero_bits)
    }

    /// Decodes `[1 byte size][3 bytes mantissa]`. Negative and overflowing
    /// encodings are rejected.
    pub fn from_compact(bits: u32) -> Result<Target, FatalConfigError> {
        let size = (bits >> 24) as usize;
        let word = bits & 0x007fffff;

        let negative = word != 0 && (bits & 0x00800000) != 0;
        let overflow = word != 0
            && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));
        if negative || overflow {
            return Err(FatalConfigError::InvalidCompactBits(bits));
        }

        let value = if size <= 3 {
            U256::from(word >> (8 * (3 - size)))
        } else {
            U256::from(word) << (8 * (size - 3))
        };

        Ok(Target(value))
    }

    pub fn to_compact(&self) -> u32 {
        let mut size = (self.0.bits() + 7) / 8;
        let mut compact = if size <= 3 {
            (self.0.low_u64() << (8 * (3 - size))) as u32
        } else {
            (self.0 >> (8 * (size - 3))).low_u32()
        };

        // The mantissa is signed: move the high bit into the exponent.
        if compact & 0x00800000 != 0 {
            compact >>= 8;
            size += 1;
        }

        compact | ((size as u32) << 24)
    }

    pub fn is_met_by(&self, hash: &[u8; 32]) -> bool {
        U256::from_little_endian(hash) <= self.0
    }

    pub fn as_u256(&self) -> U256 {
        self.0
    }
}

impl From<U256> for Target {
    fn from(value: U256) -> Self {
        Target(value)
    }
}
