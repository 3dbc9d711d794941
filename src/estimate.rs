//! ## Cardinality estimation
//! - Sparse representation: linear counting over the `2^(p' - 1)` buckets implied by
//!   the sparse precision `p'`.
//! - Dense representation: harmonic mean of register ranks (raw estimate), bias
//!   corrected below `5 * M`, with linear counting taking over while its estimate
//!   stays under the precision's threshold.

use tracing::warn;

use crate::bias::{linear_counting_threshold, BiasCorrectionTable};
use crate::dense::RegisterSet;
use crate::encoding::SPARSE_PRECISION;
use crate::error::{Error, Result};

/// Number of buckets linear counting assumes for sparse representation
const SPARSE_BUCKETS: u64 = 1 << (SPARSE_PRECISION - 1);

/// Parameter for bias correction
#[inline]
pub fn alpha(m: usize) -> f64 {
    match m {
        16 => 0.673,
        32 => 0.697,
        64 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / (m as f64)),
    }
}

/// Linear counting estimate for `buckets` of which `occupied` are non-zero
pub fn linear_counting(buckets: u64, occupied: u64) -> Result<f64> {
    if occupied > buckets {
        warn!(buckets, occupied, "linear counting over more occupied buckets than exist");
        return Err(Error::InvariantViolation(
            "occupied buckets exceed bucket count",
        ));
    }
    let m = buckets as f64;
    let zeros = (buckets - occupied) as f64;
    Ok(m * (m / zeros).ln())
}

/// Raw HyperLogLog estimate: `alpha(M) * M^2 / sum(2^-register)`
pub(crate) fn raw_estimate(registers: &RegisterSet) -> f64 {
    let m = registers.len() as f64;
    alpha(registers.len()) * m * m / registers.harmonic_sum()
}

/// Return cardinality estimate of sparse representation holding `entries` entries
pub fn estimate_sparse(entries: usize) -> Result<u64> {
    let estimate = linear_counting(SPARSE_BUCKETS, entries as u64)?;
    to_cardinality(estimate)
}

/// Return cardinality estimate of dense representation using built-in reference data
pub(crate) fn estimate_dense(registers: &RegisterSet) -> Result<u64> {
    let table = BiasCorrectionTable::for_precision(registers.precision())?;
    let threshold = linear_counting_threshold(registers.precision())?;
    estimate_dense_with(registers, table, threshold)
}

/// Return cardinality estimate of dense representation using the given bias table and
/// linear counting threshold
pub(crate) fn estimate_dense_with(
    registers: &RegisterSet,
    table: &BiasCorrectionTable<'_>,
    threshold: f64,
) -> Result<u64> {
    let m = registers.len();
    let mut estimate = raw_estimate(registers);
    if estimate <= 5.0 * m as f64 {
        estimate -= table.bias(estimate);
    }

    let zeros = registers.zeros();
    if zeros > 0 {
        let lc_estimate = linear_counting(m as u64, (m - zeros) as u64)?;
        if lc_estimate <= threshold {
            return to_cardinality(lc_estimate);
        }
    }

    to_cardinality(estimate)
}

/// Truncate final estimate to an integer
#[inline]
fn to_cardinality(estimate: f64) -> Result<u64> {
    if !estimate.is_finite() || estimate < 0.0 {
        warn!(estimate, "estimate is negative or not finite");
        return Err(Error::InvariantViolation(
            "estimate is negative or not finite",
        ));
    }
    Ok(estimate as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(16 => 0.673)]
    #[test_case(32 => 0.697)]
    #[test_case(64 => 0.709)]
    #[test_case(128 => 0.7213 / (1.0 + 1.079 / 128.0))]
    fn test_alpha(m: usize) -> f64 {
        alpha(m)
    }

    #[test_case(1024, 0 => 0.0; "nothing occupied")]
    #[test_case(4, 2 => 4.0 * 2f64.ln(); "half occupied")]
    #[test_case(4, 4 => f64::INFINITY; "all occupied")]
    fn test_linear_counting(buckets: u64, occupied: u64) -> f64 {
        linear_counting(buckets, occupied).unwrap()
    }

    #[test]
    fn test_linear_counting_rejects_overflow() {
        assert_eq!(
            linear_counting(16, 17),
            Err(Error::InvariantViolation("occupied buckets exceed bucket count"))
        );
    }

    #[test_case(0 => 0)]
    #[test_case(1 => 1)]
    #[test_case(1000 => 1000)]
    #[test_case(262144 => 264213)]
    fn test_estimate_sparse(entries: usize) -> u64 {
        estimate_sparse(entries).unwrap()
    }

    #[test_case(4)]
    #[test_case(10)]
    #[test_case(18)]
    fn test_estimate_empty_dense(precision: u8) {
        let registers = RegisterSet::new(precision).unwrap();
        let m = registers.len() as f64;
        assert!((raw_estimate(&registers) - alpha(registers.len()) * m).abs() < 1e-9);
        assert_eq!(estimate_dense(&registers), Ok(0));
    }

    #[test]
    fn test_estimate_prefers_linear_counting_below_threshold() {
        let mut registers = RegisterSet::new(10).unwrap();
        for idx in 0..100 {
            registers.update(idx, 1);
        }
        // 1024 * ln(1024 / 924) ~ 105.2 is below the threshold of 900
        assert_eq!(estimate_dense(&registers), Ok(105));
    }

    #[test]
    fn test_estimate_full_registers_skip_linear_counting() {
        let mut registers = RegisterSet::new(4).unwrap();
        for idx in 0..16 {
            registers.update(idx, 20);
        }
        // raw estimate is far above `5 * M`, so neither correction applies
        let expected = (0.673 * 256.0 / (16.0 / (1u64 << 20) as f64)) as u64;
        assert_eq!(estimate_dense(&registers), Ok(expected));
    }

    #[test]
    fn test_estimate_subtracts_interpolated_bias() {
        let mut registers = RegisterSet::new(4).unwrap();
        for idx in 0..16 {
            registers.update(idx, 2);
        }
        // raw = 0.673 * 256 / 4 = 43.072, no zero registers
        let raw = [40.0, 50.0];
        let bias = [10.0, 15.0];
        let table = BiasCorrectionTable::new(&raw, &bias).unwrap();
        // bias interpolates to 10 + 0.3072 * 5 = 11.536
        assert_eq!(estimate_dense_with(&registers, &table, 10.0), Ok(31));
    }

    #[test]
    fn test_negative_estimate_is_invariant_violation() {
        let mut registers = RegisterSet::new(4).unwrap();
        for idx in 0..16 {
            registers.update(idx, 2);
        }
        let raw = [40.0, 50.0];
        let bias = [100.0, 100.0];
        let table = BiasCorrectionTable::new(&raw, &bias).unwrap();
        assert_eq!(
            estimate_dense_with(&registers, &table, 10.0),
            Err(Error::InvariantViolation("estimate is negative or not finite"))
        );
    }
}
