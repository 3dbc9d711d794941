//! HyperLogLog++ counter estimating the number of distinct items inserted into it.
//!
//! # Representations
//!
//! A counter starts in sparse representation (unless created in dense mode) where every
//! observation is stored as a `u32` encoded at the higher precision `p' = 25`, which
//! keeps small cardinalities close to exact. Once the number of stored entries exceeds
//! the number of registers `M = 2^P`, the counter is promoted to dense representation:
//! `M` registers of 6 bits, each holding the maximal rank seen for its index.
//! Promotion happens at most once and only `reset` returns a counter to sparse mode.
//!
//! # Merging
//!
//! Registers only ever grow to the maximum of the ranks observed, so merging counters of
//! equal precision is commutative, associative and idempotent. Counters built on separate
//! partitions of a stream can be merged into the counter of the whole stream.
//!
//! # Hashing
//!
//! Items are hashed with the `BuildHasher` the counter was created with, `WyHash` by
//! default. Counters meant to be merged must use the same hasher.

use std::fmt::{Debug, Formatter};
use std::hash::{BuildHasher, BuildHasherDefault, Hash};
use std::mem::size_of;

use tracing::{debug, trace};
use wyhash::WyHash;

use crate::dense::RegisterSet;
use crate::encoding::SparseCodec;
use crate::error::{Error, Result};
use crate::representation::{Mode, Representation, RepresentationTrait};
use crate::sparse::SparseSet;

/// Counter state detached from the counter, used to persist and restore it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// Encoded sparse entries
    Sparse(Vec<u32>),
    /// Register ranks in index order
    Dense(Vec<u8>),
}

#[derive(Clone)]
pub struct HyperLogLogPlus<S = BuildHasherDefault<WyHash>> {
    codec: SparseCodec,
    repr: Representation,
    build_hasher: S,
}

impl HyperLogLogPlus {
    /// Creates new sparse counter with `precision` in `[4, 18]`
    pub fn new(precision: u8) -> Result<Self> {
        Self::with_mode(precision, Mode::Sparse)
    }

    /// Creates new counter starting in the given representation `mode`
    pub fn with_mode(precision: u8, mode: Mode) -> Result<Self> {
        Self::with_hasher(precision, mode, BuildHasherDefault::default())
    }

    /// Restores counter from its detached state
    pub fn from_parts(precision: u8, state: State) -> Result<Self> {
        Self::from_parts_with_hasher(precision, state, BuildHasherDefault::default())
    }
}

impl<S: BuildHasher> HyperLogLogPlus<S> {
    /// Creates new counter hashing items with `build_hasher`
    pub fn with_hasher(precision: u8, mode: Mode, build_hasher: S) -> Result<Self> {
        let codec = SparseCodec::new(precision)?;
        let repr = match mode {
            Mode::Sparse => Representation::Sparse(SparseSet::from_codec(codec)),
            Mode::Dense => Representation::Dense(RegisterSet::from_codec(codec)),
        };
        Ok(Self {
            codec,
            repr,
            build_hasher,
        })
    }

    /// Restores counter from its detached state, hashing new items with `build_hasher`
    pub fn from_parts_with_hasher(precision: u8, state: State, build_hasher: S) -> Result<Self> {
        let codec = SparseCodec::new(precision)?;
        let repr = match state {
            State::Sparse(entries) => {
                Representation::Sparse(SparseSet::from_entries(codec, &entries)?)
            }
            State::Dense(ranks) => Representation::Dense(RegisterSet::from_ranks(codec, &ranks)?),
        };
        Ok(Self {
            codec,
            repr,
            build_hasher,
        })
    }

    /// Insert a hashable item
    #[inline]
    pub fn insert<T: Hash + ?Sized>(&mut self, item: &T) {
        let hash = self.build_hasher.hash_one(item);
        self.insert_hash(hash);
    }

    /// Insert every item of `items`
    pub fn insert_all<'a, T, I>(&mut self, items: I)
    where
        T: Hash + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().for_each(|item| self.insert(item));
    }
}

impl<S> HyperLogLogPlus<S> {
    /// Number of registers in dense representation
    #[inline]
    fn m(&self) -> usize {
        1 << self.codec.precision()
    }

    #[inline]
    pub fn precision(&self) -> u8 {
        self.codec.precision()
    }

    /// Return current representation mode
    #[inline]
    pub fn mode(&self) -> Mode {
        self.repr.mode()
    }

    /// Return whether nothing has been inserted since creation or reset
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.repr.is_empty()
    }

    /// Insert already computed 64-bit hash
    #[inline]
    pub fn insert_hash(&mut self, hash: u64) {
        self.repr.insert_hash(hash);
        if let Representation::Sparse(sparse) = &self.repr {
            if sparse.len() > self.m() {
                self.promote();
            }
        }
    }

    /// Return cardinality estimate
    #[inline]
    pub fn estimate(&self) -> Result<u64> {
        self.repr.estimate()
    }

    /// Merge counter of the same precision into `self`.
    /// On error neither counter is modified.
    pub fn merge(&mut self, rhs: &Self) -> Result<()> {
        if self.precision() != rhs.precision() {
            return Err(Error::PrecisionMismatch {
                left: self.precision(),
                right: rhs.precision(),
            });
        }

        let m = self.m();
        let promoted = match (&mut self.repr, &rhs.repr) {
            (Representation::Sparse(lhs), Representation::Sparse(other))
                if lhs.union_len(other) <= m =>
            {
                trace!(lhs = lhs.len(), rhs = other.len(), "merging sparse entries");
                lhs.union(other);
                None
            }
            (Representation::Sparse(lhs), Representation::Sparse(other)) => {
                // union would overflow sparse representation
                let mut registers = lhs.to_dense();
                other.fold_into(&mut registers);
                Some(registers)
            }
            (Representation::Dense(lhs), Representation::Sparse(other)) => {
                other.fold_into(lhs);
                None
            }
            (Representation::Sparse(lhs), Representation::Dense(other)) => {
                let mut registers = lhs.to_dense();
                registers.merge(other);
                Some(registers)
            }
            (Representation::Dense(lhs), Representation::Dense(other)) => {
                lhs.merge(other);
                None
            }
        };

        if let Some(registers) = promoted {
            debug!(precision = self.precision(), "merge promoted sparse representation to dense");
            self.repr = Representation::Dense(registers);
        }
        Ok(())
    }

    /// Drop all observations and return to empty sparse representation
    pub fn reset(&mut self) {
        self.repr = Representation::Sparse(SparseSet::from_codec(self.codec));
    }

    /// Register ranks in index order, `None` in sparse mode
    pub fn registers(&self) -> Option<Vec<u8>> {
        match &self.repr {
            Representation::Dense(registers) => Some(registers.to_vec()),
            Representation::Sparse(_) => None,
        }
    }

    /// Encoded sparse entries in ascending order, `None` in dense mode
    pub fn sparse_entries(&self) -> Option<Vec<u32>> {
        match &self.repr {
            Representation::Sparse(sparse) => Some(sparse.iter().collect()),
            Representation::Dense(_) => None,
        }
    }

    /// Detach counter state, see `from_parts`
    pub fn to_parts(&self) -> (u8, State) {
        let state = match &self.repr {
            Representation::Sparse(sparse) => State::Sparse(sparse.iter().collect()),
            Representation::Dense(registers) => State::Dense(registers.to_vec()),
        };
        (self.precision(), state)
    }

    /// Return memory size of `HyperLogLogPlus`
    pub fn size_of(&self) -> usize {
        size_of::<Self>() - size_of::<Representation>() + self.repr.size_of()
    }

    /// Replace sparse representation with registers holding the same observations
    fn promote(&mut self) {
        if let Representation::Sparse(sparse) = &self.repr {
            debug!(
                precision = self.precision(),
                entries = sparse.len(),
                "promoting sparse representation to dense"
            );
            let registers = sparse.to_dense();
            self.repr = Representation::Dense(registers);
        }
    }
}

impl<'a, T, S> Extend<&'a T> for HyperLogLogPlus<S>
where
    T: Hash + ?Sized + 'a,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<S> PartialEq for HyperLogLogPlus<S> {
    /// Compare precision and observations, hashers are not compared
    fn eq(&self, rhs: &Self) -> bool {
        self.codec == rhs.codec && self.repr == rhs.repr
    }
}

impl<S> Debug for HyperLogLogPlus<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.estimate() {
            Ok(estimate) => write!(
                f,
                "{{ representation: {:?}, estimate: {}, size: {} }}",
                self.mode(),
                estimate,
                self.size_of()
            ),
            Err(err) => write!(
                f,
                "{{ representation: {:?}, error: {}, size: {} }}",
                self.mode(),
                err,
                self.size_of()
            ),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use test_case::test_case;

    /// Hash with a distinct sparse index for every `i < 2^25`. The index bits are `i`
    /// reversed, so consecutive values land in different registers at every precision.
    fn distinct_hash(i: u64) -> u64 {
        let sparse_idx = u64::from((i as u32).reverse_bits() >> 7);
        (sparse_idx << 39) | 0xABCD
    }

    #[test_case(3 => Err(Error::InvalidPrecision(3)))]
    #[test_case(19 => Err(Error::InvalidPrecision(19)))]
    #[test_case(4 => Ok(16))]
    #[test_case(18 => Ok(262144))]
    fn test_new(precision: u8) -> Result<usize> {
        HyperLogLogPlus::new(precision)?;
        let dense = HyperLogLogPlus::with_mode(precision, Mode::Dense)?;
        Ok(dense.registers().map_or(0, |r| r.len()))
    }

    #[test]
    fn test_insert() {
        let mut e = HyperLogLogPlus::new(12).unwrap();
        assert!(e.is_empty());
        assert_eq!(e.estimate(), Ok(0));

        e.insert("test item 1");
        assert!(!e.is_empty());
        assert_eq!(e.estimate(), Ok(1));

        // re-inserting the same item keeps the state untouched
        let snapshot = e.clone();
        e.insert("test item 1");
        assert_eq!(e, snapshot);
        assert_eq!(e.estimate(), Ok(1));

        e.insert("test item 2");
        assert_eq!(e.estimate(), Ok(2));
    }

    #[test_case(4)]
    #[test_case(8)]
    #[test_case(12)]
    fn test_promotion(precision: u8) {
        let mut e = HyperLogLogPlus::new(precision).unwrap();
        let m = 1u64 << precision;
        for i in 0..m {
            e.insert_hash(distinct_hash(i));
        }
        assert_eq!(e.mode(), Mode::Sparse);
        assert_eq!(e.sparse_entries().map(|s| s.len()), Some(m as usize));

        e.insert_hash(distinct_hash(m));
        assert_eq!(e.mode(), Mode::Dense);
        assert_eq!(e.sparse_entries(), None);

        // registers now receive hashes directly
        let before = e.registers().unwrap();
        e.insert_hash(0);
        let after = e.registers().unwrap();
        assert_eq!(after[0], 65 - precision);
        assert_eq!(&before[1..], &after[1..]);
    }

    #[test]
    fn test_promotion_preserves_registers() {
        let hashes: Vec<u64> = (0..5000u64)
            .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ (i << 7))
            .collect();

        let mut sparse = HyperLogLogPlus::new(10).unwrap();
        let mut dense = HyperLogLogPlus::with_mode(10, Mode::Dense).unwrap();
        for &hash in &hashes {
            sparse.insert_hash(hash);
            dense.insert_hash(hash);
        }
        assert_eq!(sparse.mode(), Mode::Dense);
        assert_eq!(sparse, dense);
    }

    #[test]
    fn test_reset() {
        let mut e = HyperLogLogPlus::with_mode(6, Mode::Dense).unwrap();
        e.insert_all(&[1u64, 2, 3]);
        assert!(!e.is_empty());

        e.reset();
        assert_eq!(e.mode(), Mode::Sparse);
        assert!(e.is_empty());
        assert_eq!(e.estimate(), Ok(0));
        assert_eq!(e, HyperLogLogPlus::new(6).unwrap());
    }

    #[test_case(0, 0 => (Mode::Sparse, 0))]
    #[test_case(0, 1 => (Mode::Sparse, 1))]
    #[test_case(100, 100 => (Mode::Sparse, 200))]
    #[test_case(128, 128 => (Mode::Sparse, 256))]
    #[test_case(128, 129 => (Mode::Dense, 257))]
    #[test_case(256, 1 => (Mode::Dense, 257))]
    #[test_case(300, 0 => (Mode::Dense, 300))]
    #[test_case(0, 300 => (Mode::Dense, 300))]
    #[test_case(300, 300 => (Mode::Dense, 600))]
    fn test_merge(lhs_n: u64, rhs_n: u64) -> (Mode, usize) {
        // precision 8: counters promote past 256 distinct sparse entries
        let mut lhs = HyperLogLogPlus::new(8).unwrap();
        (0..lhs_n).for_each(|i| lhs.insert_hash(distinct_hash(i)));
        let mut rhs = HyperLogLogPlus::new(8).unwrap();
        (0..rhs_n).for_each(|i| rhs.insert_hash(distinct_hash(1_000_000 + i)));

        let mut expected = HyperLogLogPlus::new(8).unwrap();
        (0..lhs_n).for_each(|i| expected.insert_hash(distinct_hash(i)));
        (0..rhs_n).for_each(|i| expected.insert_hash(distinct_hash(1_000_000 + i)));

        lhs.merge(&rhs).unwrap();
        assert_eq!(lhs, expected);
        if let Some(registers) = lhs.registers() {
            let occupied = registers.iter().filter(|&&rank| rank > 0).count();
            assert!(occupied > 1, "only {} register set", occupied);
        }

        let observations = match lhs.to_parts().1 {
            State::Sparse(entries) => entries.len(),
            State::Dense(_) => (lhs_n + rhs_n) as usize,
        };
        (lhs.mode(), observations)
    }

    #[test]
    fn test_merge_precision_mismatch() {
        let mut lhs = HyperLogLogPlus::new(10).unwrap();
        lhs.insert("a");
        let mut rhs = HyperLogLogPlus::new(12).unwrap();
        rhs.insert("b");
        let (lhs_before, rhs_before) = (lhs.clone(), rhs.clone());

        assert_eq!(
            lhs.merge(&rhs),
            Err(Error::PrecisionMismatch {
                left: 10,
                right: 12
            })
        );
        assert_eq!(lhs, lhs_before);
        assert_eq!(rhs, rhs_before);
    }

    #[test]
    fn test_merge_dense_precision_mismatch() {
        let mut lhs = HyperLogLogPlus::with_mode(12, Mode::Dense).unwrap();
        (0..100).for_each(|i| lhs.insert_hash(distinct_hash(i)));
        let mut rhs = HyperLogLogPlus::with_mode(4, Mode::Dense).unwrap();
        (0..100).for_each(|i| rhs.insert_hash(distinct_hash(i)));
        let (lhs_before, rhs_before) = (lhs.clone(), rhs.clone());

        assert_eq!(
            lhs.merge(&rhs),
            Err(Error::PrecisionMismatch { left: 12, right: 4 })
        );
        assert_eq!(rhs.clone().merge(&lhs), Err(Error::PrecisionMismatch { left: 4, right: 12 }));
        assert_eq!(lhs, lhs_before);
        assert_eq!(rhs, rhs_before);
    }

    #[test]
    fn test_from_parts_rejects_entries_of_other_precision() {
        let mut p10 = HyperLogLogPlus::new(10).unwrap();
        // flagged at precision 10, its sparse index has non-zero bits below precision 4
        p10.insert_hash(1 << 54);
        let entries = p10.sparse_entries().unwrap();
        assert_eq!(entries, vec![((1 << 15) << 7) | (40 << 1) | 1]);

        assert_eq!(
            HyperLogLogPlus::from_parts(4, State::Sparse(entries)),
            Err(Error::InvalidState("malformed sparse entry"))
        );
    }

    #[test]
    fn test_parts_roundtrip() {
        let mut e = HyperLogLogPlus::new(9).unwrap();
        e.insert_all(&["a", "b", "c"]);
        let (precision, state) = e.to_parts();
        assert_eq!(HyperLogLogPlus::from_parts(precision, state), Ok(e.clone()));

        e.insert_all((0..2000u32).collect::<Vec<_>>().iter());
        assert_eq!(e.mode(), Mode::Dense);
        let (precision, state) = e.to_parts();
        assert_eq!(HyperLogLogPlus::from_parts(precision, state), Ok(e));
    }

    #[test]
    fn test_from_parts_rejects_invalid_state() {
        assert_eq!(
            HyperLogLogPlus::from_parts(20, State::Sparse(vec![])),
            Err(Error::InvalidPrecision(20))
        );
        assert_eq!(
            HyperLogLogPlus::from_parts(4, State::Dense(vec![0; 15])),
            Err(Error::InvalidState("register count does not match precision"))
        );
        assert_eq!(
            HyperLogLogPlus::from_parts(4, State::Sparse(vec![0])),
            Err(Error::InvalidState("malformed sparse entry"))
        );
    }

    #[test]
    fn test_debug() {
        let mut e = HyperLogLogPlus::new(4).unwrap();
        e.insert(&1u64);
        let out = format!("{:?}", e);
        assert!(out.starts_with("{ representation: Sparse, estimate: 1, size: "), "{}", out);
    }

    #[test]
    fn test_extend() {
        let mut lhs = HyperLogLogPlus::new(10).unwrap();
        lhs.extend(["x", "y", "z"].iter().copied());
        let mut rhs = HyperLogLogPlus::new(10).unwrap();
        rhs.insert("x");
        rhs.insert("y");
        rhs.insert("z");
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_size_of_grows_on_promotion() {
        let mut e = HyperLogLogPlus::new(10).unwrap();
        let empty = e.size_of();
        (0..1025).for_each(|i| e.insert_hash(distinct_hash(i)));
        assert_eq!(e.mode(), Mode::Dense);
        // 1024 registers of 6 bits plus one spare `u32`
        assert!(e.size_of() >= empty + 1024 * 6 / 8);
    }
}
