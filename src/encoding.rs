//! ## Sparse hash encoding
//! Observations collected in sparse mode are captured at the higher precision
//! `p' = SPARSE_PRECISION` and packed into a single `u32`:
//!
//! When bits `p..p'` of the hash (counted from the most significant end) are all
//! zero, the `p'`-bit index cannot tell the rank at precision `p`, so the rank at
//! precision `p'` is stored alongside it:
//! - 0..1 bits     - flag set to `1`
//! - 1..7 bits     - rank at precision `p'` (`1..=40`)
//! - 7..32 bits    - index at precision `p'`
//!
//! Otherwise the first set bit of the witness lies within bits `p..p'` and the
//! index alone is enough to restore both the index and the rank at precision `p`:
//! - 0..1 bits     - flag set to `0`
//! - 1..26 bits    - index at precision `p'`

use crate::bits::{clz_u32, clz_u64, mask_u64};
use crate::error::{Error, Result};

/// Precision used for observations kept in sparse representation
pub const SPARSE_PRECISION: u8 = 25;
/// Minimal supported precision
pub const MIN_PRECISION: u8 = 4;
/// Maximal supported precision
pub const MAX_PRECISION: u8 = 18;

/// Width of the rank field of a flagged sparse entry
const RANK_BITS: u32 = 6;
/// Bits left below the sparse index, `64 - SPARSE_PRECISION`
const SPARSE_WITNESS_BITS: u32 = 39;

/// Validate that `precision` is within `[MIN_PRECISION, MAX_PRECISION]`
#[inline]
pub(crate) fn check_precision(precision: u8) -> Result<()> {
    if (MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        Ok(())
    } else {
        Err(Error::InvalidPrecision(precision))
    }
}

/// Maximal rank a register can hold at `precision`
#[inline]
pub(crate) fn max_rank(precision: u8) -> u8 {
    u64::BITS as u8 - precision + 1
}

/// Packs and unpacks `(index, rank)` observations for a given precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparseCodec {
    precision: u8,
    /// Bits `p..p'` counted from the most significant end of a hash
    extra_mask: u64,
    /// Number of sparse index bits beyond the normal index
    extra_bits: u32,
}

impl SparseCodec {
    /// Create codec for `precision` in `[4, 18]`
    pub fn new(precision: u8) -> Result<Self> {
        check_precision(precision)?;
        let extra_bits = u32::from(SPARSE_PRECISION - precision);
        let extra_mask = mask_u64(u64::BITS - u32::from(precision), SPARSE_WITNESS_BITS)?;
        Ok(Self {
            precision,
            extra_mask,
            extra_bits,
        })
    }

    #[inline]
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Split hash into register index and rank at the normal precision
    #[inline]
    pub fn index_and_rank(&self, hash: u64) -> (u32, u8) {
        let p = u32::from(self.precision);
        let idx = (hash >> (u64::BITS - p)) as u32;
        let witness = hash << p;
        let rank = if witness == 0 {
            max_rank(self.precision)
        } else {
            clz_u64(witness) as u8 + 1
        };
        (idx, rank)
    }

    /// Compute the sparse encoding of the given hash
    #[inline]
    pub fn encode(&self, hash: u64) -> u32 {
        let sparse_idx = (hash >> SPARSE_WITNESS_BITS) as u32;
        if hash & self.extra_mask == 0 {
            // leading zeros of the low 39 bits, counted within their own window
            let low = hash & ((1 << SPARSE_WITNESS_BITS) - 1);
            let rank = clz_u64(low) - (u64::BITS - SPARSE_WITNESS_BITS) + 1;
            (sparse_idx << (RANK_BITS + 1)) | (rank << 1) | 1
        } else {
            sparse_idx << 1
        }
    }

    /// Return normal index and rank from encoded sparse hash
    #[inline]
    pub fn decode(&self, h: u32) -> (u32, u8) {
        if h & 1 == 1 {
            let sparse_idx = h >> (RANK_BITS + 1);
            let rank = (h >> 1) & ((1 << RANK_BITS) - 1);
            (sparse_idx >> self.extra_bits, (rank + self.extra_bits) as u8)
        } else {
            let sparse_idx = h >> 1;
            let extra = sparse_idx & ((1 << self.extra_bits) - 1);
            let rank = clz_u32(extra) - (u32::BITS - self.extra_bits) + 1;
            (sparse_idx >> self.extra_bits, rank as u8)
        }
    }

    /// Return whether `h` is a well formed sparse entry for this precision
    pub(crate) fn is_valid(&self, h: u32) -> bool {
        if h & 1 == 1 {
            let sparse_idx = h >> (RANK_BITS + 1);
            let rank = (h >> 1) & ((1 << RANK_BITS) - 1);
            sparse_idx & ((1 << self.extra_bits) - 1) == 0
                && (1..=SPARSE_WITNESS_BITS + 1).contains(&rank)
        } else {
            let sparse_idx = h >> 1;
            sparse_idx >> SPARSE_PRECISION == 0 && sparse_idx & ((1 << self.extra_bits) - 1) != 0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    /// Build hash from index at `precision`, followed by a witness with the first set bit
    /// at 1-based position `rank` (all zero witness when `rank` is past the witness).
    fn hash_of(precision: u8, idx: u64, rank: u8) -> u64 {
        let p = u32::from(precision);
        let witness_bits = 64 - p;
        let witness = if u32::from(rank) > witness_bits {
            0
        } else {
            // first set bit at `rank`, then some noise below it
            let first = 1u64 << (witness_bits - u32::from(rank));
            first | ((first - 1) & 0x5555_5555_5555_5555)
        };
        (idx << witness_bits) | witness
    }

    #[test_case(4, 0, 1; "p4 rank in first extra bit")]
    #[test_case(4, 15, 21; "p4 rank in last extra bit")]
    #[test_case(4, 7, 22; "p4 rank just past extra bits")]
    #[test_case(4, 3, 61; "p4 all zero witness")]
    #[test_case(10, 1023, 1; "p10 high index")]
    #[test_case(10, 512, 15; "p10 rank in last extra bit")]
    #[test_case(10, 512, 16; "p10 rank just past extra bits")]
    #[test_case(10, 0, 40; "p10 deep rank")]
    #[test_case(14, 9999, 11; "p14 rank in last extra bit")]
    #[test_case(14, 9999, 12; "p14 rank just past extra bits")]
    #[test_case(18, (1 << 18) - 1, 7; "p18 rank in last extra bit")]
    #[test_case(18, (1 << 18) - 1, 8; "p18 rank just past extra bits")]
    #[test_case(18, 12345, 47; "p18 all zero witness")]
    fn test_codec_roundtrip(precision: u8, idx: u64, rank: u8) {
        let codec = SparseCodec::new(precision).unwrap();
        let hash = hash_of(precision, idx, rank);
        assert_eq!(codec.index_and_rank(hash), (idx as u32, rank));

        let h = codec.encode(hash);
        assert!(codec.is_valid(h));
        assert_eq!(codec.decode(h), (idx as u32, rank));

        // flag is set exactly when the rank could not be read from the sparse index
        let flagged = u32::from(rank) > u32::from(SPARSE_PRECISION - precision);
        assert_eq!(h & 1 == 1, flagged);
    }

    #[test]
    fn test_codec_matches_dense_ingestion() {
        let codec = SparseCodec::new(12).unwrap();
        let mut hash = 0x9E37_79B9_7F4A_7C15u64;
        for _ in 0..10_000 {
            hash = hash.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            assert_eq!(codec.decode(codec.encode(hash)), codec.index_and_rank(hash));
        }
    }

    #[test]
    fn test_flagged_layout() {
        let codec = SparseCodec::new(10).unwrap();
        // bits 39..54 all zero and the low 39 bits zero as well: rank' is 40
        let hash = 1u64 << 54;
        assert_eq!(codec.encode(hash), ((1 << 15) << 7) | (40 << 1) | 1);
        assert_eq!(codec.decode(codec.encode(hash)), (1, 55));

        // lowest extra bit set: not flagged even though the normal index is 0
        let hash = 1u64 << 39;
        assert_eq!(codec.encode(hash), 1 << 1);
        assert_eq!(codec.decode(1 << 1), (0, 15));

        // extra bits non-zero: index only
        let hash = 1u64 << 40;
        assert_eq!(codec.encode(hash), 2 << 1);
        assert_eq!(codec.decode(2 << 1), (0, 14));
    }

    #[test_case(3)]
    #[test_case(19)]
    #[test_case(0)]
    fn test_invalid_precision(precision: u8) {
        assert_eq!(
            SparseCodec::new(precision),
            Err(Error::InvalidPrecision(precision))
        );
    }

    #[test]
    fn test_is_valid_rejects_garbage() {
        let codec = SparseCodec::new(10).unwrap();
        // unflagged entry with zero extra bits can not be produced by `encode`
        assert!(!codec.is_valid(1024 << 15 << 1));
        // flagged entry with zero rank
        assert!(!codec.is_valid(1 << 7 | 1));
        // flagged entry whose sparse index has non-zero extra bits
        assert!(!codec.is_valid(1 << 7 | 3 << 1 | 1));
    }
}
