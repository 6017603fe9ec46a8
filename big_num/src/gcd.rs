use crate::error::Result;
use crate::BigNum;

impl BigNum {
    /// Greatest common divisor of the absolute values, by the Euclidean
    /// algorithm. `gcd(a, 0) = |a|` and `gcd(0, 0) = 0`.
    pub fn gcd(&self, other: &BigNum) -> Result<BigNum> {
        let mut x = self.abs()?;
        let mut y = other.abs()?;
        // each step leaves y strictly smaller than before
        while !y.is_zero() {
            let r = x.checked_rem(&y)?;
            tracing::trace!(%x, %y, %r, "gcd step");
            x = std::mem::replace(&mut y, r);
        }
        Ok(x.abs_take())
    }
}
