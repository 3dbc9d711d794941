//! ## Dense representation
//! Holds `M = 2^P` registers, each storing the maximal rank observed for its index.
//!
//! Ranks never exceed `65 - P <= 61`, so registers are packed using `W = 6` bits each
//! into a `u32` slice:
//! - data[0..M * W / 32]   - register ranks, register `i` occupying bits `i * W..(i + 1) * W`
//! - data[M * W / 32]      - one extra element for branchless register updates
//!   (see `set_register` for more details).

use std::fmt::{Debug, Formatter};
use std::mem::{size_of, size_of_val};

use crate::encoding::{max_rank, SparseCodec};
use crate::error::{Error, Result};
use crate::estimate::estimate_dense;
use crate::representation::RepresentationTrait;

/// Number of bits used by each register
const W: usize = 6;

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct RegisterSet {
    codec: SparseCodec,
    data: Vec<u32>,
}

impl RegisterSet {
    /// Create zero initialized registers for `precision`
    #[cfg(test)]
    pub(crate) fn new(precision: u8) -> Result<Self> {
        Ok(Self::from_codec(SparseCodec::new(precision)?))
    }

    #[inline]
    pub(crate) fn from_codec(codec: SparseCodec) -> Self {
        let m = 1usize << codec.precision();
        Self {
            codec,
            data: vec![0u32; m * W / 32 + 1],
        }
    }

    /// Restore registers from their ranks, validating count and range
    pub(crate) fn from_ranks(codec: SparseCodec, ranks: &[u8]) -> Result<Self> {
        let mut registers = Self::from_codec(codec);
        if ranks.len() != registers.len() {
            return Err(Error::InvalidState("register count does not match precision"));
        }
        let max = max_rank(codec.precision());
        if ranks.iter().any(|&rank| rank > max) {
            return Err(Error::InvalidState("register rank exceeds the maximal rank"));
        }
        for (idx, &rank) in ranks.iter().enumerate() {
            registers.update(idx as u32, rank);
        }
        Ok(registers)
    }

    #[inline]
    pub(crate) fn precision(&self) -> u8 {
        self.codec.precision()
    }

    /// Number of registers
    #[inline]
    pub(crate) fn len(&self) -> usize {
        1 << self.codec.precision()
    }

    /// Return rank stored in `idx` register
    #[inline]
    pub(crate) fn get(&self, idx: u32) -> u8 {
        get_register(&self.data, idx) as u8
    }

    /// Raise `idx` register to `rank` unless it already holds a higher one.
    /// Returns whether the register changed.
    #[inline]
    pub(crate) fn update(&mut self, idx: u32, rank: u8) -> bool {
        let new_rank = u32::from(rank.min(max_rank(self.codec.precision())));
        let old_rank = get_register(&self.data, idx);
        if new_rank > old_rank {
            set_register(&mut self.data, idx, new_rank);
            return true;
        }
        false
    }

    /// Fold encoded sparse entry into registers
    #[inline]
    pub(crate) fn update_encoded(&mut self, h: u32) {
        let (idx, rank) = self.codec.decode(h);
        self.update(idx, rank);
    }

    /// Element-wise maximum with registers of the same precision
    #[inline]
    pub(crate) fn merge(&mut self, rhs: &RegisterSet) {
        debug_assert_eq!(self.precision(), rhs.precision());
        for idx in 0..self.len() as u32 {
            let lhs_rank = get_register(&self.data, idx);
            let rhs_rank = get_register(&rhs.data, idx);
            if rhs_rank > lhs_rank {
                set_register(&mut self.data, idx, rhs_rank);
            }
        }
    }

    /// Iterate over register ranks in index order
    pub(crate) fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.len() as u32).map(move |idx| self.get(idx))
    }

    /// Number of registers set to 0
    pub(crate) fn zeros(&self) -> usize {
        self.iter().filter(|&rank| rank == 0).count()
    }

    /// Sum of `2^-rank` over all registers
    pub(crate) fn harmonic_sum(&self) -> f64 {
        self.iter().map(|rank| 1.0 / (1u64 << rank) as f64).sum()
    }

    /// Copy register ranks into a vector
    pub(crate) fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }
}

impl RepresentationTrait for RegisterSet {
    #[inline]
    fn insert_hash(&mut self, hash: u64) {
        let (idx, rank) = self.codec.index_and_rank(hash);
        self.update(idx, rank);
    }

    #[inline]
    fn estimate(&self) -> Result<u64> {
        estimate_dense(self)
    }

    #[inline]
    fn size_of(&self) -> usize {
        size_of::<Self>() + size_of_val(self.data.as_slice())
    }

    fn is_empty(&self) -> bool {
        self.data.iter().all(|&bits| bits == 0)
    }
}

impl Debug for RegisterSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterSet")
            .field("precision", &self.precision())
            .field("zeros", &self.zeros())
            .finish()
    }
}

/// Get `idx` register
#[inline]
fn get_register(data: &[u32], idx: u32) -> u32 {
    let bit_idx = (idx as usize) * W;
    let u32_idx = bit_idx / 32;
    let bit_pos = bit_idx % 32;
    let bits = &data[u32_idx..u32_idx + 2];
    let bits_1 = W.min(32 - bit_pos);
    let bits_2 = W - bits_1;
    let mask_1 = (1 << bits_1) - 1;
    let mask_2 = (1 << bits_2) - 1;

    ((bits[0] >> bit_pos) & mask_1) | ((bits[1] & mask_2) << bits_1)
}

/// Set `idx` register to new value `rank`
#[inline]
fn set_register(data: &mut [u32], idx: u32, new_rank: u32) {
    let bit_idx = (idx as usize) * W;
    let u32_idx = bit_idx / 32;
    let bit_pos = bit_idx % 32;
    let bits = &mut data[u32_idx..u32_idx + 2];
    let bits_1 = W.min(32 - bit_pos);
    let bits_2 = W - bits_1;
    let mask_1 = (1 << bits_1) - 1;
    let mask_2 = (1 << bits_2) - 1;

    // Unconditionally update two `u32` elements based on `new_rank` bits and masks
    bits[0] &= !(mask_1 << bit_pos);
    bits[0] |= (new_rank & mask_1) << bit_pos;
    bits[1] &= !mask_2;
    bits[1] |= (new_rank >> bits_1) & mask_2;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(4 => 16)]
    #[test_case(10 => 1024)]
    #[test_case(18 => 262144)]
    fn test_len(precision: u8) -> usize {
        let registers = RegisterSet::new(precision).unwrap();
        assert_eq!(registers.zeros(), registers.len());
        assert_eq!(registers.harmonic_sum(), registers.len() as f64);
        assert!(registers.is_empty());
        registers.len()
    }

    #[test]
    fn test_update_keeps_maximum() {
        let mut registers = RegisterSet::new(4).unwrap();
        assert!(registers.update(5, 3));
        assert!(!registers.update(5, 2));
        assert!(!registers.update(5, 3));
        assert!(registers.update(5, 7));
        assert_eq!(registers.get(5), 7);
        assert_eq!(registers.zeros(), 15);
    }

    #[test]
    fn test_update_saturates() {
        let mut registers = RegisterSet::new(18).unwrap();
        registers.update(0, u8::MAX);
        assert_eq!(registers.get(0), 47);
    }

    #[test]
    fn test_registers_do_not_overlap() {
        // every register straddling a `u32` boundary must keep its neighbours intact
        let mut registers = RegisterSet::new(6).unwrap();
        for idx in 0..64u32 {
            registers.update(idx, (idx % 59 + 1) as u8);
        }
        for idx in 0..64u32 {
            assert_eq!(registers.get(idx), (idx % 59 + 1) as u8, "register {}", idx);
        }
        assert_eq!(registers.zeros(), 0);
    }

    #[test]
    fn test_merge_is_elementwise_max() {
        let mut lhs = RegisterSet::new(4).unwrap();
        let mut rhs = RegisterSet::new(4).unwrap();
        lhs.update(0, 5);
        lhs.update(1, 1);
        rhs.update(1, 4);
        rhs.update(15, 61);

        lhs.merge(&rhs);
        let mut expected = vec![0u8; 16];
        expected[0] = 5;
        expected[1] = 4;
        expected[15] = 61;
        assert_eq!(lhs.to_vec(), expected);
    }

    #[test]
    fn test_from_ranks() {
        let codec = SparseCodec::new(4).unwrap();
        let ranks: Vec<u8> = (0..16).collect();
        let registers = RegisterSet::from_ranks(codec, &ranks).unwrap();
        assert_eq!(registers.to_vec(), ranks);

        assert_eq!(
            RegisterSet::from_ranks(codec, &ranks[..15]),
            Err(Error::InvalidState("register count does not match precision"))
        );
        assert_eq!(
            RegisterSet::from_ranks(codec, &[62; 16]),
            Err(Error::InvalidState("register rank exceeds the maximal rank"))
        );
    }

    #[test]
    fn test_insert_hash() {
        let mut registers = RegisterSet::new(4).unwrap();
        // index 0b1010, witness with first set bit at position 3
        registers.insert_hash(0xA000_0000_0000_0000 | (1 << 57));
        assert_eq!(registers.get(10), 3);
        // all zero witness saturates at 64 - 4 + 1
        registers.insert_hash(0x1000_0000_0000_0000);
        assert_eq!(registers.get(1), 61);
    }
}
