use std::cmp::Ordering;
use std::ops::{Div, DivAssign, Rem, RemAssign};

use crate::arith::impl_binary_ops;
use crate::digits::{self, add_mag, cmp_mag, is_zero_mag, shift_in, skip_leading_zero, sub_mag};
use crate::error::{EngineError, Result};
use crate::BigNum;

// 实现除法
impl BigNum {
    /// Euclidean division: returns `(q, r)` with `self = rhs * q + r` and
    /// `0 <= r < |rhs|` for every sign combination.
    pub fn div_mod(&self, rhs: &BigNum) -> Result<(BigNum, BigNum)> {
        self.ensure_init()?;
        rhs.ensure_init()?;
        if rhs.is_zero() {
            tracing::debug!(dividend = %self, "division by zero");
            return Err(EngineError::DivisionByZero);
        }

        let a = self.mag();
        let b = rhs.mag();
        let q_signum = self.signum() * rhs.signum();

        if cmp_mag(a, b) == Ordering::Less {
            return if !self.is_negative() {
                Ok((BigNum::from_mag(digits::zeroed(1)?, 1), self.try_clone()?))
            } else {
                // -|b| < self < 0: one step past zero keeps the remainder positive
                let r = sub_mag(b, a)?;
                Ok((BigNum::from_mag(digits::copy_of(&[1])?, q_signum), BigNum::from_mag(r, 1)))
            };
        }

        let (mut q, mut r) = BigNum::long_divide(a, b)?;
        if self.is_negative() && !is_zero_mag(&r) {
            q = add_mag(&q, &[1])?;
            r = sub_mag(b, &r)?;
        }
        Ok((BigNum::from_mag(q, q_signum), BigNum::from_mag(r, 1)))
    }

    /// Unsigned long division of `a` by `b`, requiring `a >= b > 0`.
    /// Returns little-endian quotient and remainder magnitudes.
    fn long_divide(a: &[u8], b: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
        // quotient digits come out most-significant first
        let mut q = digits::with_capacity(a.len() - b.len() + 1)?;
        let mut r = digits::with_capacity(b.len() + 1)?;
        r.push(0);

        for &digit in a.iter().rev() {
            shift_in(&mut r, digit)?;
            let mut count = 0u8;
            while cmp_mag(&r, b) != Ordering::Less {
                r = sub_mag(&r, b)?;
                count += 1;
            }
            tracing::trace!(digit, count, "long division step");
            if count != 0 || !q.is_empty() {
                q.push(count);
            }
        }

        q.reverse();
        if q.is_empty() {
            q.push(0);
        }
        skip_leading_zero!(q);
        Ok((q, r))
    }

    pub fn checked_div(&self, rhs: &BigNum) -> Result<BigNum> {
        self.div_mod(rhs).map(|(q, _)| q)
    }

    /// Euclidean remainder, always in `0..|rhs|`.
    pub fn checked_rem(&self, rhs: &BigNum) -> Result<BigNum> {
        self.div_mod(rhs).map(|(_, r)| r)
    }

    /// `self = self / rhs`.
    pub fn try_div_assign(&mut self, rhs: &BigNum) -> Result<()> {
        let q = self.checked_div(rhs)?;
        self.commit(q);
        Ok(())
    }

    /// `self = self mod rhs`.
    pub fn try_rem_assign(&mut self, rhs: &BigNum) -> Result<()> {
        let r = self.checked_rem(rhs)?;
        self.commit(r);
        Ok(())
    }
}

impl_binary_ops!(Div, div, DivAssign, div_assign, checked_div, try_div_assign);
impl_binary_ops!(Rem, rem, RemAssign, rem_assign, checked_rem, try_rem_assign);
