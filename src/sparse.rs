//! ## Sparse representation
//! Allows to estimate small cardinality while the number of stored entries stays within
//! `M = 2^P`. Entries are [`SparseCodec`] encoded hashes kept in an ordered set, so
//! duplicates collapse and insertion order does not matter.

use std::collections::BTreeSet;
use std::fmt::{Debug, Formatter};
use std::mem::size_of;

use crate::dense::RegisterSet;
use crate::encoding::SparseCodec;
use crate::error::{Error, Result};
use crate::estimate::estimate_sparse;
use crate::representation::RepresentationTrait;

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct SparseSet {
    codec: SparseCodec,
    entries: BTreeSet<u32>,
}

impl SparseSet {
    /// Create empty sparse set for `precision`
    #[cfg(test)]
    pub(crate) fn new(precision: u8) -> Result<Self> {
        Ok(Self::from_codec(SparseCodec::new(precision)?))
    }

    #[inline]
    pub(crate) fn from_codec(codec: SparseCodec) -> Self {
        Self {
            codec,
            entries: BTreeSet::new(),
        }
    }

    /// Restore sparse set from encoded entries, validating each of them
    pub(crate) fn from_entries(codec: SparseCodec, entries: &[u32]) -> Result<Self> {
        if entries.iter().any(|&h| !codec.is_valid(h)) {
            return Err(Error::InvalidState("malformed sparse entry"));
        }
        let entries: BTreeSet<u32> = entries.iter().copied().collect();
        if entries.len() > 1 << codec.precision() {
            return Err(Error::InvalidState("sparse entries exceed register count"));
        }
        Ok(Self { codec, entries })
    }

    /// Number of stored entries
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn contains(&self, h: u32) -> bool {
        self.entries.contains(&h)
    }

    /// Insert encoded hash, returns whether it was not present yet
    #[inline]
    pub(crate) fn insert_encoded(&mut self, h: u32) -> bool {
        self.entries.insert(h)
    }

    /// Iterate over encoded entries in ascending order
    pub(crate) fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().copied()
    }

    /// Size of the union with `rhs` without building it
    pub(crate) fn union_len(&self, rhs: &SparseSet) -> usize {
        let (small, large) = if self.len() <= rhs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        large.len() + small.iter().filter(|&h| !large.contains(h)).count()
    }

    /// Add all entries of `rhs`
    pub(crate) fn union(&mut self, rhs: &SparseSet) {
        self.entries.extend(rhs.iter());
    }

    /// Decode all entries into freshly created registers
    pub(crate) fn to_dense(&self) -> RegisterSet {
        let mut registers = RegisterSet::from_codec(self.codec);
        self.fold_into(&mut registers);
        registers
    }

    /// Fold decoded entries into `registers` keeping per register maximum
    pub(crate) fn fold_into(&self, registers: &mut RegisterSet) {
        self.iter().for_each(|h| registers.update_encoded(h));
    }
}

impl RepresentationTrait for SparseSet {
    #[inline]
    fn insert_hash(&mut self, hash: u64) {
        let h = self.codec.encode(hash);
        self.insert_encoded(h);
    }

    #[inline]
    fn estimate(&self) -> Result<u64> {
        estimate_sparse(self.len())
    }

    /// Entry payload plus the set itself, tree node overhead is not accounted
    #[inline]
    fn size_of(&self) -> usize {
        size_of::<Self>() + self.len() * size_of::<u32>()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Debug for SparseSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SparseSet")
            .field("precision", &self.codec.precision())
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(precision: u8, hashes: impl IntoIterator<Item = u64>) -> SparseSet {
        let mut set = SparseSet::new(precision).unwrap();
        hashes.into_iter().for_each(|hash| set.insert_hash(hash));
        set
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut set = SparseSet::new(10).unwrap();
        assert!(set.is_empty());
        set.insert_hash(0xDEAD_BEEF_0000_0001);
        set.insert_hash(0xDEAD_BEEF_0000_0001);
        assert_eq!(set.len(), 1);

        // same sparse index, different bits below it: still one entry
        set.insert_hash(0xDEAD_BEEF_0000_0002);
        assert_eq!(set.len(), 1);

        set.insert_hash(0x0123_4567_89AB_CDEF);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_union_len_matches_union() {
        let lhs = set_of(8, (0..300u64).map(|i| i << 39 | 1 << 50));
        let rhs = set_of(8, (200..450u64).map(|i| i << 39 | 1 << 50));
        assert_eq!(lhs.union_len(&rhs), 450);
        assert_eq!(rhs.union_len(&lhs), 450);

        let mut union = lhs.clone();
        union.union(&rhs);
        assert_eq!(union.len(), 450);
        assert!(rhs.iter().all(|h| union.contains(h)));
    }

    #[test]
    fn test_to_dense_matches_dense_ingestion() {
        let hashes: Vec<u64> = (0..500u64)
            .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15).rotate_left(17))
            .collect();
        let sparse = set_of(7, hashes.iter().copied());

        let mut dense = RegisterSet::new(7).unwrap();
        hashes.iter().for_each(|&hash| dense.insert_hash(hash));

        assert_eq!(sparse.to_dense(), dense);
    }

    #[test]
    fn test_from_entries() {
        let codec = SparseCodec::new(4).unwrap();
        let set = set_of(4, [1u64 << 40, 1 << 39, 3 << 40]);
        let entries: Vec<u32> = set.iter().collect();
        assert_eq!(SparseSet::from_entries(codec, &entries), Ok(set));

        assert_eq!(
            SparseSet::from_entries(codec, &[0]),
            Err(Error::InvalidState("malformed sparse entry"))
        );

        let too_many: Vec<u32> = (1..=17u32).map(|i| i << 1).collect();
        assert_eq!(
            SparseSet::from_entries(codec, &too_many),
            Err(Error::InvalidState("sparse entries exceed register count"))
        );
    }
}
