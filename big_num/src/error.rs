use std::collections::TryReserveError;

use thiserror::Error;

/// Why a decimal string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("cannot parse number from empty string")]
    Empty,
    #[error("sign character without any digits")]
    SignOnly,
    /// `index` is the byte offset of the first character that is not a decimal digit.
    #[error("invalid digit {found:?} at byte {index}")]
    InvalidDigit { index: usize, found: char },
}

/// Every failure the engine can report. Operations returning this error leave
/// their destination values untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("failed to allocate digit buffer")]
    Allocation,
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("division by zero")]
    DivisionByZero,
    #[error("operand is not initialized")]
    Uninitialized,
    #[error("neither quotient nor remainder was requested")]
    NoOutput,
}

impl From<TryReserveError> for EngineError {
    fn from(_: TryReserveError) -> Self {
        EngineError::Allocation
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = EngineError::from(ParseError::InvalidDigit { index: 2, found: 'a' });
        assert_eq!(e.to_string(), "invalid digit 'a' at byte 2");
        assert_eq!(EngineError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn reserve_failure_is_allocation() {
        let mut v: Vec<u8> = Vec::new();
        let err = v.try_reserve_exact(usize::MAX).unwrap_err();
        assert_eq!(EngineError::from(err), EngineError::Allocation);
    }
}
