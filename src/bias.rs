//! ## Bias correction
//! Raw HyperLogLog estimates are biased upwards for cardinalities below `5 * M`.
//! Each supported precision has a row of sampled raw estimates (ascending) with the
//! bias measured at each sample; the bias of an arbitrary raw estimate is linearly
//! interpolated between the two bracketing samples.
//!
//! Rows are plain `static` data, so nothing is initialized at runtime and tables can be
//! shared across threads without synchronization.
//!
//! [HyperLogLog++ paper](https://static.googleusercontent.com/media/research.google.com/en//pubs/archive/40671.pdf)

use crate::bias_data::*;
use crate::encoding::{check_precision, MIN_PRECISION};
use crate::error::{Error, Result};

/// Linear counting estimates up to these values are preferred over bias corrected
/// raw estimates, indexed by `precision - 4`.
pub const LINEAR_COUNTING_THRESHOLDS: [f64; 15] = [
    10.0, 20.0, 40.0, 80.0, 220.0, 400.0, 900.0, 1800.0, 3100.0, 6500.0, 11500.0, 20000.0,
    50000.0, 120000.0, 350000.0,
];

/// Sampled raw estimates and their biases for a single precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasCorrectionTable<'a> {
    raw_estimates: &'a [f64],
    biases: &'a [f64],
}

static BUILTIN: [BiasCorrectionTable<'static>; 15] = [
    BiasCorrectionTable::from_static(&RAW_ESTIMATE_P4, &BIAS_P4),
    BiasCorrectionTable::from_static(&RAW_ESTIMATE_P5, &BIAS_P5),
    BiasCorrectionTable::from_static(&RAW_ESTIMATE_P6, &BIAS_P6),
    BiasCorrectionTable::from_static(&RAW_ESTIMATE_P7, &BIAS_P7),
    BiasCorrectionTable::from_static(&RAW_ESTIMATE_P8, &BIAS_P8),
    BiasCorrectionTable::from_static(&RAW_ESTIMATE_P9, &BIAS_P9),
    BiasCorrectionTable::from_static(&RAW_ESTIMATE_P10, &BIAS_P10),
    BiasCorrectionTable::from_static(&RAW_ESTIMATE_P11, &BIAS_P11),
    BiasCorrectionTable::from_static(&RAW_ESTIMATE_P12, &BIAS_P12),
    BiasCorrectionTable::from_static(&RAW_ESTIMATE_P13, &BIAS_P13),
    BiasCorrectionTable::from_static(&RAW_ESTIMATE_P14, &BIAS_P14),
    BiasCorrectionTable::from_static(&RAW_ESTIMATE_P15, &BIAS_P15),
    BiasCorrectionTable::from_static(&RAW_ESTIMATE_P16, &BIAS_P16),
    BiasCorrectionTable::from_static(&RAW_ESTIMATE_P17, &BIAS_P17),
    BiasCorrectionTable::from_static(&RAW_ESTIMATE_P18, &BIAS_P18),
];

impl BiasCorrectionTable<'static> {
    /// Built-in row for `precision`
    pub fn for_precision(precision: u8) -> Result<&'static Self> {
        check_precision(precision)?;
        Ok(&BUILTIN[usize::from(precision - MIN_PRECISION)])
    }

    const fn from_static(raw_estimates: &'static [f64], biases: &'static [f64]) -> Self {
        Self {
            raw_estimates,
            biases,
        }
    }
}

impl<'a> BiasCorrectionTable<'a> {
    /// Create table from externally supplied samples.
    ///
    /// Both slices must be non-empty, of equal length and finite, with strictly
    /// ascending raw estimates.
    pub fn new(raw_estimates: &'a [f64], biases: &'a [f64]) -> Result<Self> {
        if raw_estimates.is_empty() {
            return Err(Error::InvalidBiasTable("no samples"));
        }
        if raw_estimates.len() != biases.len() {
            return Err(Error::InvalidBiasTable("raw estimates and biases differ in length"));
        }
        if raw_estimates.iter().chain(biases).any(|v| !v.is_finite()) {
            return Err(Error::InvalidBiasTable("samples must be finite"));
        }
        if raw_estimates.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::InvalidBiasTable("raw estimates must be strictly ascending"));
        }
        Ok(Self {
            raw_estimates,
            biases,
        })
    }

    #[inline]
    pub fn raw_estimates(&self) -> &'a [f64] {
        self.raw_estimates
    }

    #[inline]
    pub fn biases(&self) -> &'a [f64] {
        self.biases
    }

    /// Return interpolated bias of `estimate`, clamped to the first and last sample
    pub fn bias(&self, estimate: f64) -> f64 {
        let last = self.raw_estimates.len() - 1;
        if estimate <= self.raw_estimates[0] {
            return self.biases[0];
        }
        if estimate >= self.raw_estimates[last] {
            return self.biases[last];
        }

        // first sample not smaller than `estimate`, always within `1..=last`
        let pos = self.raw_estimates.partition_point(|&e| e < estimate);
        let e1 = self.raw_estimates[pos - 1];
        let e2 = self.raw_estimates[pos];
        let c = (estimate - e1) / (e2 - e1);

        self.biases[pos - 1] * (1.0 - c) + self.biases[pos] * c
    }
}

/// Linear counting threshold for `precision`
pub fn linear_counting_threshold(precision: u8) -> Result<f64> {
    check_precision(precision)?;
    Ok(LINEAR_COUNTING_THRESHOLDS[usize::from(precision - MIN_PRECISION)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const RAW: [f64; 4] = [10.0, 20.0, 40.0, 80.0];
    const BIAS: [f64; 4] = [8.0, 6.0, 2.0, -1.0];

    #[test_case(5.0 => 8.0; "below first sample")]
    #[test_case(10.0 => 8.0; "first sample")]
    #[test_case(15.0 => 7.0; "between first two")]
    #[test_case(20.0 => 6.0; "exact inner sample")]
    #[test_case(30.0 => 4.0; "middle")]
    #[test_case(70.0 => -0.25; "between last two")]
    #[test_case(80.0 => -1.0; "last sample")]
    #[test_case(1000.0 => -1.0; "above last sample")]
    fn test_bias(estimate: f64) -> f64 {
        BiasCorrectionTable::new(&RAW, &BIAS).unwrap().bias(estimate)
    }

    #[test_case(&[], &[] => Error::InvalidBiasTable("no samples"))]
    #[test_case(&[1.0, 2.0], &[1.0] => Error::InvalidBiasTable("raw estimates and biases differ in length"))]
    #[test_case(&[1.0, f64::NAN], &[1.0, 2.0] => Error::InvalidBiasTable("samples must be finite"))]
    #[test_case(&[1.0, 2.0], &[1.0, f64::INFINITY] => Error::InvalidBiasTable("samples must be finite"))]
    #[test_case(&[1.0, 1.0], &[1.0, 2.0] => Error::InvalidBiasTable("raw estimates must be strictly ascending"))]
    #[test_case(&[2.0, 1.0], &[1.0, 2.0] => Error::InvalidBiasTable("raw estimates must be strictly ascending"))]
    fn test_new_rejects(raw: &[f64], bias: &[f64]) -> Error {
        BiasCorrectionTable::new(raw, bias).unwrap_err()
    }

    #[test]
    fn test_builtin_rows_are_valid() {
        for precision in 4..=18u8 {
            let row = BiasCorrectionTable::for_precision(precision).unwrap();
            let checked = BiasCorrectionTable::new(row.raw_estimates(), row.biases()).unwrap();
            assert_eq!(&checked, row);

            // rows start at the raw estimate of an empty sketch and reach past `5 * M`
            let m = (1u64 << precision) as f64;
            assert!(row.raw_estimates()[0] < m, "precision {}", precision);
            assert!(*row.raw_estimates().last().unwrap() > 5.0 * m, "precision {}", precision);
        }
    }

    #[test]
    fn test_builtin_row_corrects_empty_sketch() {
        // the first sample is taken at cardinality 0, so it is entirely bias
        let row = BiasCorrectionTable::for_precision(14).unwrap();
        assert_eq!(row.raw_estimates()[0], row.biases()[0]);
    }

    #[test_case(3)]
    #[test_case(19)]
    fn test_unsupported_precision(precision: u8) {
        assert_eq!(
            BiasCorrectionTable::for_precision(precision),
            Err(Error::InvalidPrecision(precision))
        );
        assert_eq!(
            linear_counting_threshold(precision),
            Err(Error::InvalidPrecision(precision))
        );
    }

    #[test_case(4 => 10.0)]
    #[test_case(14 => 11500.0)]
    #[test_case(18 => 350000.0)]
    fn test_threshold(precision: u8) -> f64 {
        linear_counting_threshold(precision).unwrap()
    }
}
