/// Things that can go wrong outside of the operator traits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  #[error("cannot parse an integer from an empty string")]
  Empty,

  #[error("invalid digit {digit:?} for radix {radix}")]
  InvalidDigit { digit: char, radix: u32 },

  #[error("division by zero")]
  DivisionByZero,
}

/// [`Error`] or success.
pub type Result<T> = std::result::Result<T, Error>;
