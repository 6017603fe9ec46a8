//! Little-endian decimal digit buffers.
//!
//! Every allocation of digit storage goes through here so that a failed
//! reservation surfaces as [`EngineError::Allocation`](crate::EngineError)
//! instead of aborting the process.

use std::cmp::Ordering;

use crate::big_num_constants::BASE;
use crate::error::Result;

/// Drops most-significant zero digits, keeping at least one digit.
macro_rules! skip_leading_zero {
    ($vec: expr) => {
        {
            while $vec.len() > 1 && $vec.last() == Some(&0) {
                $vec.pop();
            }
        }
    };
}
pub(crate) use skip_leading_zero;

/// An empty buffer able to hold `cap` digits without reallocating.
pub(crate) fn with_capacity(cap: usize) -> Result<Vec<u8>> {
    let mut v = Vec::new();
    v.try_reserve_exact(cap)?;
    Ok(v)
}

/// `len` zero digits.
pub(crate) fn zeroed(len: usize) -> Result<Vec<u8>> {
    let mut v = with_capacity(len)?;
    v.resize(len, 0);
    Ok(v)
}

pub(crate) fn copy_of(src: &[u8]) -> Result<Vec<u8>> {
    let mut v = with_capacity(src.len())?;
    v.extend_from_slice(src);
    Ok(v)
}

/// Multiplies a magnitude by ten and adds `digit`, i.e. prepends `digit` as
/// the new least-significant position.
pub(crate) fn shift_in(mag: &mut Vec<u8>, digit: u8) -> Result<()> {
    if mag.len() == 1 && mag[0] == 0 {
        mag[0] = digit;
    } else {
        mag.try_reserve(1)?;
        mag.insert(0, digit);
    }
    Ok(())
}

/// Compares two trimmed magnitudes.
pub(crate) fn cmp_mag(a: &[u8], b: &[u8]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

pub(crate) fn is_zero_mag(mag: &[u8]) -> bool {
    mag.len() == 1 && mag[0] == 0
}

/// `big + small`. Requires `big.len() >= small.len()`.
pub(crate) fn add_mag(big: &[u8], small: &[u8]) -> Result<Vec<u8>> {
    let mut result = with_capacity(big.len() + 1)?;
    let mut carry = 0u8;
    for (i, &x) in big.iter().enumerate() {
        let sum = x + small.get(i).copied().unwrap_or(0) + carry;
        result.push(sum % BASE);
        carry = sum / BASE;
    }
    if carry != 0 {
        result.push(carry);
    }
    Ok(result)
}

/// `big - small`. Requires `big >= small` as magnitudes, so no borrow is
/// left after the last digit.
pub(crate) fn sub_mag(big: &[u8], small: &[u8]) -> Result<Vec<u8>> {
    let mut result = with_capacity(big.len())?;
    let mut borrow = 0u8;
    for (i, &x) in big.iter().enumerate() {
        let y = small.get(i).copied().unwrap_or(0) + borrow;
        if x < y {
            result.push(x + BASE - y);
            borrow = 1;
        } else {
            result.push(x - y);
            borrow = 0;
        }
    }
    debug_assert_eq!(borrow, 0);
    skip_leading_zero!(result);
    Ok(result)
}
