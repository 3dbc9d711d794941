//! ## Bit field helpers
//! Bits are numbered LSB-0: bit `0` is the least significant one. A range `hi..lo`
//! covers positions `lo` up to and including `hi - 1`, so `extract_bits_u64(x, 64, 39)`
//! returns the 25 most significant bits of `x`.
//!
//! Requests that do not fit into the word are rejected with [`Error::BitRange`]
//! instead of relying on overflowing shifts.

use crate::error::{Error, Result};

#[inline]
fn check_range(hi: u32, lo: u32, width: u32) -> Result<()> {
    if lo > hi || hi > width {
        return Err(Error::BitRange { hi, lo, width });
    }
    Ok(())
}

/// Return mask with bits `lo..hi` set
#[inline]
pub fn mask_u64(hi: u32, lo: u32) -> Result<u64> {
    check_range(hi, lo, u64::BITS)?;
    let len = hi - lo;
    if len == 0 {
        return Ok(0);
    }
    Ok((u64::MAX >> (u64::BITS - len)) << lo)
}

/// Return mask with bits `lo..hi` set
#[inline]
pub fn mask_u32(hi: u32, lo: u32) -> Result<u32> {
    check_range(hi, lo, u32::BITS)?;
    let len = hi - lo;
    if len == 0 {
        return Ok(0);
    }
    Ok((u32::MAX >> (u32::BITS - len)) << lo)
}

/// Extract bits `lo..hi` of `bits` shifted down to position 0
#[inline]
pub fn extract_bits_u64(bits: u64, hi: u32, lo: u32) -> Result<u64> {
    let mask = mask_u64(hi, lo)?;
    Ok((bits & mask).checked_shr(lo).unwrap_or(0))
}

/// Extract bits `lo..hi` of `bits` shifted down to position 0
#[inline]
pub fn extract_bits_u32(bits: u32, hi: u32, lo: u32) -> Result<u32> {
    let mask = mask_u32(hi, lo)?;
    Ok((bits & mask).checked_shr(lo).unwrap_or(0))
}

/// Number of leading zero bits, `32` for zero
#[inline]
pub fn clz_u32(bits: u32) -> u32 {
    bits.leading_zeros()
}

/// Number of leading zero bits, `64` for zero
#[inline]
pub fn clz_u64(bits: u64) -> u32 {
    bits.leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0xF0F0_0000_0000_0000, 64, 56 => 0xF0; "top byte")]
    #[test_case(0xFFFF_FFFF_FFFF_FFFF, 64, 39 => (1 << 25) - 1; "top 25 bits")]
    #[test_case(0x0000_0000_0000_00AB, 8, 0 => 0xAB; "low byte")]
    #[test_case(0x1234_5678_9ABC_DEF0, 64, 0 => 0x1234_5678_9ABC_DEF0; "whole word")]
    #[test_case(0xFFFF_FFFF_FFFF_FFFF, 64, 64 => 0; "empty range at the top")]
    #[test_case(0xFFFF_FFFF_FFFF_FFFF, 0, 0 => 0; "empty range at the bottom")]
    #[test_case(0b1011_0000, 8, 4 => 0b1011; "middle nibble")]
    fn test_extract_bits_u64(bits: u64, hi: u32, lo: u32) -> u64 {
        extract_bits_u64(bits, hi, lo).unwrap()
    }

    #[test_case(0xDEAD_BEEF, 32, 16 => 0xDEAD; "high half")]
    #[test_case(0xDEAD_BEEF, 16, 0 => 0xBEEF; "low half")]
    #[test_case(0xDEAD_BEEF, 32, 0 => 0xDEAD_BEEF; "whole word")]
    #[test_case(0b0111_1110, 7, 1 => 0b11_1111; "rank field")]
    fn test_extract_bits_u32(bits: u32, hi: u32, lo: u32) -> u32 {
        extract_bits_u32(bits, hi, lo).unwrap()
    }

    #[test_case(65, 0; "hi past width")]
    #[test_case(10, 11; "lo above hi")]
    #[test_case(70, 66; "both past width")]
    fn test_extract_bits_u64_rejects(hi: u32, lo: u32) {
        assert_eq!(
            extract_bits_u64(u64::MAX, hi, lo),
            Err(Error::BitRange { hi, lo, width: 64 })
        );
    }

    #[test]
    fn test_extract_bits_u32_rejects() {
        assert_eq!(
            extract_bits_u32(u32::MAX, 33, 1),
            Err(Error::BitRange { hi: 33, lo: 1, width: 32 })
        );
        assert!(mask_u32(4, 5).is_err());
    }

    #[test_case(64, 39 => 0xFFFF_FF80_0000_0000)]
    #[test_case(39, 0 => 0x0000_007F_FFFF_FFFF)]
    #[test_case(3, 3 => 0)]
    fn test_mask_u64(hi: u32, lo: u32) -> u64 {
        mask_u64(hi, lo).unwrap()
    }

    #[test_case(0 => 64)]
    #[test_case(1 => 63)]
    #[test_case(u64::MAX => 0)]
    #[test_case(1 << 39 => 24)]
    fn test_clz_u64(bits: u64) -> u32 {
        clz_u64(bits)
    }

    #[test_case(0 => 32)]
    #[test_case(1 => 31)]
    #[test_case(0x8000_0000 => 0)]
    fn test_clz_u32(bits: u32) -> u32 {
        clz_u32(bits)
    }
}
