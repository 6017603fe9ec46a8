use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::big_num_constants::BASE;
use crate::digits::{self, add_mag, sub_mag};
use crate::error::Result;
use crate::BigNum;

/// Implements a std operator trait (owned and borrowed operands, plus the
/// `*Assign` form) on top of a fallible method. The operators panic on error,
/// as integer division by zero does.
macro_rules! impl_binary_ops {
    ($op: ident, $op_fn: ident, $assign: ident, $assign_fn: ident, $checked: ident, $try_assign: ident) => {
        impl $op<&BigNum> for &BigNum {
            type Output = BigNum;

            fn $op_fn(self, rhs: &BigNum) -> Self::Output {
                self.$checked(rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl $op for BigNum {
            type Output = BigNum;

            fn $op_fn(self, rhs: Self) -> Self::Output {
                (&self).$op_fn(&rhs)
            }
        }

        impl $op<&BigNum> for BigNum {
            type Output = BigNum;

            fn $op_fn(self, rhs: &BigNum) -> Self::Output {
                (&self).$op_fn(rhs)
            }
        }

        impl $op<BigNum> for &BigNum {
            type Output = BigNum;

            fn $op_fn(self, rhs: BigNum) -> Self::Output {
                self.$op_fn(&rhs)
            }
        }

        impl $assign<&BigNum> for BigNum {
            fn $assign_fn(&mut self, rhs: &BigNum) {
                self.$try_assign(rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl $assign for BigNum {
            fn $assign_fn(&mut self, rhs: Self) {
                self.$assign_fn(&rhs)
            }
        }
    };
}
pub(crate) use impl_binary_ops;

// 实现加减法
impl BigNum {
    pub fn checked_add(&self, rhs: &BigNum) -> Result<BigNum> {
        BigNum::add_signed(self, rhs, rhs.signum())
    }

    /// Subtraction is addition of `rhs` with its sign flipped. The flip is
    /// passed along rather than written into `rhs`.
    pub fn checked_sub(&self, rhs: &BigNum) -> Result<BigNum> {
        BigNum::add_signed(self, rhs, -rhs.signum())
    }

    fn add_signed(lhs: &BigNum, rhs: &BigNum, rhs_signum: i8) -> Result<BigNum> {
        lhs.ensure_init()?;
        rhs.ensure_init()?;
        let lhs_signum = lhs.signum();

        // big >= small as magnitudes, so digit subtraction never underflows
        let (big, big_signum, small) = match lhs.compare_mag(rhs) {
            Ordering::Less => (rhs.mag(), rhs_signum, lhs.mag()),
            _ => (lhs.mag(), lhs_signum, rhs.mag()),
        };

        let mag = if lhs_signum == rhs_signum {
            add_mag(big, small)?
        } else {
            sub_mag(big, small)?
        };
        Ok(BigNum::from_mag(mag, big_signum))
    }

    /// `self = self + rhs`.
    pub fn try_add_assign(&mut self, rhs: &BigNum) -> Result<()> {
        let sum = self.checked_add(rhs)?;
        self.commit(sum);
        Ok(())
    }

    /// `self = self - rhs`.
    pub fn try_sub_assign(&mut self, rhs: &BigNum) -> Result<()> {
        let difference = self.checked_sub(rhs)?;
        self.commit(difference);
        Ok(())
    }

    /// `self = lhs - self`, the form where the subtrahend is also the destination.
    pub fn try_sub_from(&mut self, lhs: &BigNum) -> Result<()> {
        let difference = lhs.checked_sub(self)?;
        self.commit(difference);
        Ok(())
    }
}

// 实现乘法
impl BigNum {
    /// Schoolbook multiplication; the product of an n-digit and an m-digit
    /// value has at most n + m digits.
    pub fn checked_mul(&self, rhs: &BigNum) -> Result<BigNum> {
        self.ensure_init()?;
        rhs.ensure_init()?;
        if self.is_zero() || rhs.is_zero() {
            return Ok(BigNum::from_mag(digits::zeroed(1)?, 1));
        }

        let x = self.mag();
        let y = rhs.mag();
        let mut product = digits::zeroed(x.len() + y.len())?;
        for (i, &xi) in x.iter().enumerate() {
            // 9 * 9 + carry + existing digit never exceeds u32
            let mut carry = 0u32;
            let mut j = 0;
            while j < y.len() || carry != 0 {
                let yj = y.get(j).copied().unwrap_or(0) as u32;
                let cur = product[i + j] as u32 + xi as u32 * yj + carry;
                product[i + j] = (cur % BASE as u32) as u8;
                carry = cur / BASE as u32;
                j += 1;
            }
        }

        Ok(BigNum::from_mag(product, self.signum() * rhs.signum()))
    }

    /// `self = self * rhs`.
    pub fn try_mul_assign(&mut self, rhs: &BigNum) -> Result<()> {
        let product = self.checked_mul(rhs)?;
        self.commit(product);
        Ok(())
    }
}

impl_binary_ops!(Add, add, AddAssign, add_assign, checked_add, try_add_assign);
impl_binary_ops!(Sub, sub, SubAssign, sub_assign, checked_sub, try_sub_assign);
impl_binary_ops!(Mul, mul, MulAssign, mul_assign, checked_mul, try_mul_assign);

// 实现取反
impl Neg for BigNum {
    type Output = BigNum;

    fn neg(self) -> Self::Output {
        self.negate_take()
    }
}

impl Neg for &BigNum {
    type Output = BigNum;

    fn neg(self) -> Self::Output {
        self.clone().negate_take()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::EngineError;
    use crate::BigNum;

    fn num(s: &str) -> BigNum {
        s.parse().unwrap()
    }

    fn check(lhs: &str, rhs: &str, expected: &str, op: fn(&BigNum, &BigNum) -> crate::Result<BigNum>) {
        let result = op(&num(lhs), &num(rhs)).unwrap();
        assert_eq!(result.to_string(), expected, "{} op {}", lhs, rhs);
    }

    #[test]
    fn test_add() {
        let add = BigNum::checked_add;
        check("1", "23", "24", add);
        check("-1", "-23", "-24", add);
        check("1", "-23", "-22", add);
        check("-1", "23", "22", add);
        check("1232421424", "142412124", "1374833548", add);
        check("-124612421", "-54135145345", "-54259757766", add);
        check("543543435435543533143514212532354514544154", "435435141321412313213541231325143",
              "543543435870978674464926525745895745869297", add);
        check("-64646854354354548797896445615212311383513122225465454531534",
              "-544154351321312532132131251343514351351354135",
              "-64646854354355092952247766927744443514764465739816805885669", add);
        check("5151514544", "51515351161564", "51520502676108", add);
        check("-11111", "231", "-10880", add);
        check("1435135135135", "-1435135135135", "0", add);
        check("-5151514544", "51515351161564", "51510199647020", add);
        check("64646854354354548797896445615212311383513122225465454531534",
              "-544154351321312532132131251343514351351354135",
              "64646854354354004643545124302680179252261778711114103177399", add);
        check("999", "1", "1000", add);
        check("-1000", "1", "-999", add);
    }

    #[test]
    fn test_sub() {
        let sub = BigNum::checked_sub;
        check("12412442", "12412442", "0", sub);
        check("7989797997", "4546854", "7985251143", sub);
        check("-554164", "-85454", "-468710", sub);
        check("5465146546514165468468486486561351351547564684863135114564151",
              "-54646468546854646546513515153143544464546548484343513186498878",
              "60111615093368812014982001639704895816094113169206648301063029", sub);
        check("0", "5", "-5", sub);
        check("-5", "-5", "0", sub);
        check("0", "0", "0", sub);
    }

    const SUB_CASES: [(&str, &str, &str); 5] = [
        ("1", "23", "-22"),
        ("12412442", "12412442", "0"),
        ("7989797997", "4546854", "7985251143"),
        ("-554164", "-85454", "-468710"),
        ("5465146546514165468468486486561351351547564684863135114564151",
         "-54646468546854646546513515153143544464546548484343513186498878",
         "60111615093368812014982001639704895816094113169206648301063029"),
    ];

    #[test]
    fn test_sub_into_rhs() {
        for (lhs, rhs, expected) in SUB_CASES {
            let a = num(lhs);
            let mut b = num(rhs);
            b.try_sub_from(&a).unwrap();
            assert_eq!(b.to_string(), expected);
            assert_eq!(a.to_string(), num(lhs).to_string());
        }
    }

    #[test]
    fn test_sub_into_lhs() {
        for (lhs, rhs, expected) in SUB_CASES {
            let mut a = num(lhs);
            let b = num(rhs);
            a.try_sub_assign(&b).unwrap();
            assert_eq!(a.to_string(), expected);
            // the subtrahend keeps its sign
            assert_eq!(b, num(rhs));
        }
    }

    #[test]
    fn test_sub_self() {
        let a = num("-98765432109876543210");
        assert_eq!(a.checked_sub(&a).unwrap(), BigNum::zero());
        assert_eq!(a.checked_add(&a).unwrap().to_string(), "-197530864219753086420");
    }

    #[test]
    fn test_add_laws() {
        let values: Vec<BigNum> = ["0", "7", "-7", "99999999999999999999", "-123456789012345678901234", "100000"]
            .iter()
            .map(|s| num(s))
            .collect();
        for a in &values {
            for b in &values {
                assert_eq!(a + b, b + a);
                assert_eq!(a - b, -(b - a));
                for c in &values {
                    assert_eq!(&(a + b) + c, a + &(b + c));
                }
            }
        }
    }

    #[test]
    fn test_mul() {
        let mul = BigNum::checked_mul;
        check("251513513513511315135215154684614351213211132135151546854654654513212123121351",
              "656545465615313513514354354646465451231320",
              "165130056838271733874550062816663544175130286803316585629648093679063295879808463606683623666665532526561930264731913320",
              mul);
        check("684654564654654", "-545445465416545564", "-373441727667620137223357315654856", mul);
        check("-546498846468654684864684484646845648654658455151514614515614",
              "-531355151531335263652151819511927497425628514952561452156195814418422562652921587419562531952362923694125639741956198145369741985194148529581256214591285222692914965",
              "290384977377051935517151314231343767412507114888149372512081187374921275348477395342044523608749546577901986435325410912016536415118365005086885867791461200706959951942591306532467535868072502817206560543771065270383166763510",
              mul);
        check("0", "-5", "0", mul);
        check("-5", "0", "0", mul);
        check("99", "99", "9801", mul);
    }

    #[test]
    fn test_mul_sign_and_scale() {
        for (a, b) in [("123", "-45"), ("-999", "-999"), ("-1", "77"), ("0", "-3"), ("10", "10")] {
            let (a, b) = (num(a), num(b));
            let product = &a * &b;
            assert!(product.len() <= a.len() + b.len());
            if a.is_zero() || b.is_zero() {
                assert_eq!(product, BigNum::zero());
            } else {
                assert_eq!(product.signum(), a.signum() * b.signum());
            }
        }
    }

    #[test]
    fn test_assign_ops() {
        let mut a = num("10");
        a += num("5");
        a -= &num("20");
        a *= num("-3");
        assert_eq!(a.to_string(), "15");
        a.try_mul_assign(&num("0")).unwrap();
        assert_eq!(a.to_string(), "0");
        assert_eq!((-&a).to_string(), "0");
    }

    #[test]
    fn test_uninitialized_operand() {
        let mut a = num("1");
        assert_eq!(a.checked_add(&BigNum::new()), Err(EngineError::Uninitialized));
        assert_eq!(a.try_sub_assign(&BigNum::new()), Err(EngineError::Uninitialized));
        assert_eq!(a.to_string(), "1");
        assert_eq!(BigNum::new().checked_mul(&a), Err(EngineError::Uninitialized));
    }

    #[test]
    #[should_panic(expected = "operand is not initialized")]
    fn test_operator_panics() {
        let _ = num("1") + BigNum::new();
    }
}
