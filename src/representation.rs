use enum_dispatch::enum_dispatch;

use crate::dense::RegisterSet;
use crate::error::Result;
use crate::sparse::SparseSet;

/// Representation modes of `HyperLogLogPlus`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Sparse,
    Dense,
}

/// Representation types supported by `HyperLogLogPlus`.
/// The only transition is `Sparse` to `Dense`, undone by reset alone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[enum_dispatch]
pub(crate) enum Representation {
    Sparse(SparseSet),
    Dense(RegisterSet),
}

/// Representation trait which must be implemented by all representations.
#[enum_dispatch(Representation)]
pub(crate) trait RepresentationTrait {
    fn insert_hash(&mut self, hash: u64);
    fn estimate(&self) -> Result<u64>;
    fn size_of(&self) -> usize;
    fn is_empty(&self) -> bool;
}

impl Representation {
    #[inline]
    pub(crate) fn mode(&self) -> Mode {
        match self {
            Representation::Sparse(_) => Mode::Sparse,
            Representation::Dense(_) => Mode::Dense,
        }
    }
}
