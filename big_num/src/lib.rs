//! Big Num \
//! This crate provides:
//! - [`BigNum`]: arbitrary-precision signed integers stored as decimal digits, with
//!   addition, subtraction, multiplication, Euclidean division and gcd.
//! - [`engine`]: the same operations in destination-passing form, where results are
//!   swapped into caller-owned values only after they are fully computed.
//!
//! No operation panics except the std operator impls (`+`, `/`, ...), which panic on
//! the errors their `checked_*` counterparts return.

mod big_num;
mod big_num_cache;
mod big_num_constants;
mod digits;
mod error;
mod arith;
mod div;
mod gcd;
pub mod engine;

pub use crate::big_num::BigNum;
pub use crate::error::{EngineError, ParseError, Result};
