//! # BigNum
//! Arbitrary-precision signed integers stored as a sign and a little-endian
//! sequence of decimal digits.
//! # Example
//! ```
//! use decimal_big_num::BigNum;
//!
//! let a: BigNum = "10000000000000".parse().unwrap();
//! let b: BigNum = "-900000000000".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "9100000000000");
//! assert_eq!((&a * &b).to_string(), "-9000000000000000000000000");
//! assert_eq!((&a % &b).to_string(), "100000000000");
//! ```

use std::cmp::Ordering;
use std::fmt::{Display, Write};
use std::str::FromStr;

use crate::big_num_cache::{NEG_CACHE, POS_CACHE};
use crate::big_num_constants::*;
use crate::digits::{self, cmp_mag, is_zero_mag};
use crate::error::{EngineError, ParseError, Result};

/// A sign-magnitude decimal integer.
///
/// A value is either *uninitialized* (no digits, as returned by
/// [`BigNum::new`] or left behind by [`BigNum::destroy`]) or *well-formed*:
/// at least one digit, no most-significant zero digits, and zero always
/// carries a positive sign. Uninitialized values may only be written to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigNum {
    /// `1` or `-1` once initialized, `0` before.
    signum: i8,
    /// Least-significant digit first.
    digits: Vec<u8>,
}

// 实现构造
impl BigNum {
    /// A fresh uninitialized value. Nothing is allocated until a result is
    /// written into it.
    pub const fn new() -> Self {
        BigNum { signum: 0, digits: Vec::new() }
    }

    /// Builds a well-formed value from a magnitude, forcing zero to be positive.
    pub(crate) fn from_mag(mut mag: Vec<u8>, signum: i8) -> Self {
        digits::skip_leading_zero!(mag);
        if mag.is_empty() {
            mag.push(0);
        }
        let signum = if is_zero_mag(&mag) || signum >= 0 { 1 } else { -1 };
        BigNum { signum, digits: mag }
    }

    pub fn zero() -> Self {
        POS_CACHE[0].clone()
    }

    pub fn one() -> Self {
        POS_CACHE[1].clone()
    }

    pub(crate) fn mag(&self) -> &[u8] {
        &self.digits
    }

    pub(crate) fn ensure_init(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            tracing::debug!("rejected uninitialized operand");
            Err(EngineError::Uninitialized)
        }
    }

    pub fn is_initialized(&self) -> bool {
        !self.digits.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        is_zero_mag(&self.digits)
    }

    pub fn is_negative(&self) -> bool {
        self.signum < 0
    }

    /// `1` or `-1` for a well-formed value (zero is `1`), `0` when uninitialized.
    pub fn signum(&self) -> i8 {
        self.signum
    }

    /// Number of decimal digits; `0` when uninitialized.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Clone that reports allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<BigNum> {
        Ok(BigNum { signum: self.signum, digits: digits::copy_of(&self.digits)? })
    }

    /// Exchanges the contents of two values without allocating.
    pub fn swap(&mut self, other: &mut BigNum) {
        std::mem::swap(self, other);
    }

    /// Replaces `self` with a finished result and releases the old buffer.
    pub(crate) fn commit(&mut self, mut result: BigNum) {
        self.swap(&mut result);
    }

    /// Deep-copies `src` into `self`. On failure `self` is unchanged.
    pub fn copy_from(&mut self, src: &BigNum) -> Result<()> {
        src.ensure_init()?;
        let copy = src.try_clone()?;
        self.commit(copy);
        Ok(())
    }

    /// Releases the digit buffer and leaves `self` uninitialized. Calling it
    /// again is a no-op.
    pub fn destroy(&mut self) {
        self.commit(BigNum::new());
    }
}

// 实现绝对值
impl BigNum {
    pub fn abs(&self) -> Result<BigNum> {
        self.ensure_init()?;
        let mut result = self.try_clone()?;
        result.signum = 1;
        Ok(result)
    }
    pub(crate) fn abs_take(mut self) -> BigNum {
        self.signum = self.signum.abs();
        self
    }
    pub(crate) fn negate_take(mut self) -> BigNum {
        if !self.is_zero() {
            self.signum = -self.signum;
        }
        self
    }
}

// 实现打印
impl Display for BigNum {
    /// Canonical decimal form. An uninitialized value renders as nothing.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.signum < 0 {
            f.write_char('-')?;
        }
        for &d in self.digits.iter().rev() {
            f.write_char(DIGITS[d as usize])?;
        }
        Ok(())
    }
}

impl BigNum {
    /// Canonical decimal string, failing for an uninitialized value.
    pub fn to_decimal_string(&self) -> Result<String> {
        self.ensure_init()?;
        let mut s = String::new();
        s.try_reserve_exact(self.digits.len() + 1)?;
        // writing into a String cannot fail
        let _ = write!(s, "{}", self);
        Ok(s)
    }

    /// The value as an `i64`, if initialized and in range.
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_initialized() || self.digits.len() > MAX_U64_DIGITS {
            return None;
        }
        let mag = self
            .digits
            .iter()
            .rev()
            .fold(0_i128, |acc, &d| acc * BASE as i128 + d as i128);
        i64::try_from(mag * self.signum as i128).ok()
    }
}

// 实现解析
impl BigNum {
    /// Parses `[+-]?[0-9]+`. Leading zeros are skipped and `-0` becomes `0`.
    pub fn parse(text: &str) -> Result<BigNum> {
        let bytes = text.as_bytes();
        let (signum, start) = match bytes.first() {
            None => return Err(parse_failure(ParseError::Empty)),
            Some(b'-') => (-1, 1),
            Some(b'+') => (1, 1),
            Some(_) => (1, 0),
        };
        if start == bytes.len() {
            return Err(parse_failure(ParseError::SignOnly));
        }
        if let Some((index, found)) = text[start..]
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(parse_failure(ParseError::InvalidDigit { index: start + index, found }));
        }

        let body = &bytes[start..];
        let first_significant = body
            .iter()
            .position(|&b| b != b'0')
            .unwrap_or(body.len() - 1);
        let significant = &body[first_significant..];

        let mut mag = digits::with_capacity(significant.len())?;
        mag.extend(significant.iter().rev().map(|b| b - b'0'));
        Ok(BigNum::from_mag(mag, signum))
    }

    /// Parses `text` and, only on success, replaces the contents of `self`.
    pub fn parse_into(&mut self, text: &str) -> Result<()> {
        let parsed = BigNum::parse(text)?;
        self.commit(parsed);
        Ok(())
    }
}

fn parse_failure(err: ParseError) -> EngineError {
    tracing::debug!(%err, "parse rejected");
    EngineError::Parse(err)
}

impl FromStr for BigNum {
    type Err = EngineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        BigNum::parse(s)
    }
}

impl TryFrom<&str> for BigNum {
    type Error = EngineError;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        BigNum::parse(s)
    }
}

macro_rules! impl_unsigned_to_big_num {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigNum {
        fn from(val: $u) -> Self {
            BigNum::value_of(val as u64, 1)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_num {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigNum {
        fn from(val: $i) -> Self {
            let signum = if val < 0 { -1 } else { 1 };
            BigNum::value_of((val as i64).unsigned_abs(), signum)
        }
    }
    )*
    };
}
impl_unsigned_to_big_num!(u8, u16, u32, usize, u64);
impl_signed_to_big_num!(i8, i16, i32, isize, i64);

impl BigNum {
    fn value_of(mut val: u64, signum: i8) -> BigNum {
        if val <= MAX_CONSTANT as u64 {
            return if signum < 0 {
                NEG_CACHE[val as usize].clone()
            } else {
                POS_CACHE[val as usize].clone()
            };
        }
        let mut mag = Vec::with_capacity(MAX_U64_DIGITS);
        while val != 0 {
            mag.push((val % BASE as u64) as u8);
            val /= BASE as u64;
        }
        BigNum::from_mag(mag, signum)
    }
}

// 实现大小比较
impl BigNum {
    /// Total order on well-formed values: sign first, then digit count, then
    /// digits from the most significant end.
    pub(crate) fn compare(&self, other: &BigNum) -> Ordering {
        match self.signum.cmp(&other.signum) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let ord = cmp_mag(&self.digits, &other.digits);
        if self.signum < 0 {
            ord.reverse()
        } else {
            ord
        }
    }

    pub(crate) fn compare_mag(&self, other: &BigNum) -> Ordering {
        cmp_mag(&self.digits, &other.digits)
    }
}

impl PartialOrd for BigNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigNum {
    /// Uninitialized values sort before every well-formed value.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_initialized(), other.is_initialized()) {
            (true, true) => self.compare(other),
            (a, b) => a.cmp(&b),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::BigNum;

    impl Serialize for BigNum {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let s = self
                .to_decimal_string()
                .map_err(<S::Error as serde::ser::Error>::custom)?;
            serializer.serialize_str(&s)
        }
    }

    impl<'de> Deserialize<'de> for BigNum {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            BigNum::parse(&s).map_err(serde::de::Error::custom)
        }
    }
}
