use lazy_static::*;

use crate::BigNum;
use crate::big_num_constants::*;

fn small_value(n: usize, signum: i8) -> BigNum {
    let mag = if n < BASE as usize {
        vec![n as u8]
    } else {
        vec![(n % BASE as usize) as u8, (n / BASE as usize) as u8]
    };
    BigNum::from_mag(mag, signum)
}

lazy_static! {
    /// `0..=MAX_CONSTANT`.
    pub static ref POS_CACHE: [BigNum; MAX_CONSTANT + 1] =
        std::array::from_fn(|n| small_value(n, 1));
    /// `0, -1, .., -MAX_CONSTANT`. Slot 0 holds the canonical positive zero.
    pub static ref NEG_CACHE: [BigNum; MAX_CONSTANT + 1] =
        std::array::from_fn(|n| small_value(n, -1));
}

#[test]
fn test_cache() {
    assert_eq!(POS_CACHE[0], NEG_CACHE[0]);
    assert_eq!(POS_CACHE[0].signum(), 1);
    assert_eq!(POS_CACHE[12].to_string(), "12");
    assert_eq!(NEG_CACHE[16].to_string(), "-16");
    assert_eq!(NEG_CACHE[7].len(), 1);
}
