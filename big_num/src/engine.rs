//! Destination-passing interface to the engine.
//!
//! Every function that writes a result builds it completely first and only
//! then swaps it into the destination, so a failed call leaves all of its
//! arguments as they were. Calls whose destination is also an operand are
//! the in-place methods on [`BigNum`] (`try_add_assign`, `try_sub_from`, ...).
//!
//! ```
//! use decimal_big_num::engine;
//!
//! let mut lhs = engine::create();
//! let mut rhs = engine::create();
//! engine::parse_into("-5465465465468546354535556", &mut lhs).unwrap();
//! engine::parse_into("-36565654656568684868", &mut rhs).unwrap();
//!
//! let mut quotient = engine::create();
//! let mut remainder = engine::create();
//! engine::div_mod(&lhs, &rhs, Some(&mut quotient), Some(&mut remainder)).unwrap();
//!
//! let mut result = engine::create();
//! engine::mult(&rhs, &quotient, &mut result).unwrap();
//! result.try_add_assign(&remainder).unwrap();
//! assert_eq!(engine::compare_i8(&result, &lhs), Ok(0));
//! ```

use std::cmp::Ordering;

use crate::error::{EngineError, Result};
use crate::BigNum;

/// A fresh, uninitialized value.
pub fn create() -> BigNum {
    BigNum::new()
}

pub fn parse_into(text: &str, target: &mut BigNum) -> Result<()> {
    target.parse_into(text)
}

pub fn format(value: &BigNum) -> Result<String> {
    value.to_decimal_string()
}

pub fn compare(lhs: &BigNum, rhs: &BigNum) -> Result<Ordering> {
    lhs.ensure_init()?;
    rhs.ensure_init()?;
    Ok(lhs.compare(rhs))
}

/// [`compare`] as `-1`, `0` or `1`.
pub fn compare_i8(lhs: &BigNum, rhs: &BigNum) -> Result<i8> {
    compare(lhs, rhs).map(|ord| ord as i8)
}

pub fn add(lhs: &BigNum, rhs: &BigNum, res: &mut BigNum) -> Result<()> {
    let sum = lhs.checked_add(rhs)?;
    res.commit(sum);
    Ok(())
}

pub fn sub(lhs: &BigNum, rhs: &BigNum, res: &mut BigNum) -> Result<()> {
    let difference = lhs.checked_sub(rhs)?;
    res.commit(difference);
    Ok(())
}

pub fn mult(lhs: &BigNum, rhs: &BigNum, res: &mut BigNum) -> Result<()> {
    let product = lhs.checked_mul(rhs)?;
    res.commit(product);
    Ok(())
}

/// Euclidean division. Either output may be `None`, but not both. Neither
/// output is touched unless the whole division succeeds.
pub fn div_mod(
    lhs: &BigNum,
    rhs: &BigNum,
    quotient: Option<&mut BigNum>,
    remainder: Option<&mut BigNum>,
) -> Result<()> {
    if quotient.is_none() && remainder.is_none() {
        return Err(EngineError::NoOutput);
    }
    let (q, r) = lhs.div_mod(rhs)?;
    if let Some(dst) = quotient {
        dst.commit(q);
    }
    if let Some(dst) = remainder {
        dst.commit(r);
    }
    Ok(())
}

pub fn div(lhs: &BigNum, rhs: &BigNum, res: &mut BigNum) -> Result<()> {
    div_mod(lhs, rhs, Some(res), None)
}

/// Euclidean remainder, always non-negative.
pub fn modulo(lhs: &BigNum, rhs: &BigNum, res: &mut BigNum) -> Result<()> {
    div_mod(lhs, rhs, None, Some(res))
}

pub fn gcd(lhs: &BigNum, rhs: &BigNum, res: &mut BigNum) -> Result<()> {
    let divisor = lhs.gcd(rhs)?;
    res.commit(divisor);
    Ok(())
}

pub fn abs(src: &BigNum, dst: &mut BigNum) -> Result<()> {
    let value = src.abs()?;
    dst.commit(value);
    Ok(())
}

pub fn copy_num(src: &BigNum, dst: &mut BigNum) -> Result<()> {
    dst.copy_from(src)
}

pub fn swap(a: &mut BigNum, b: &mut BigNum) {
    a.swap(b);
}

pub fn destroy(value: &mut BigNum) {
    value.destroy();
}
