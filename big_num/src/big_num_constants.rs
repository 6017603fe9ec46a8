pub const DIGITS: [char; 10] = [
    '0' , '1' , '2' , '3' , '4' ,
    '5' , '6' , '7' , '8' , '9' ,
];

/// Every stored digit is in `0..BASE`.
pub const BASE: u8 = 10;

/// Largest magnitude served from the small value cache.
pub const MAX_CONSTANT: usize = 16;

/// Digits needed for any `u64` magnitude.
pub const MAX_U64_DIGITS: usize = 20;
