use std::fmt;
use std::str::FromStr;
use dynint::{Sign, DInt, Error};
use crate::fixed::FixedInt;

macro_rules! fmt_view {
  ($($trait:ident)*) => { $(
    impl<S: Sign, const W: usize, const N: usize> fmt::$trait for FixedInt<S, W, N> {
      fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::$trait::fmt(&self.as_view(), f)
      }
    }
  )* };
}

fmt_view!(Display Binary LowerHex UpperHex);

impl<S: Sign, const W: usize, const N: usize> fmt::Debug for FixedInt<S, W, N> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let kind = if S::SIGNED { "BigInt" } else { "BigUint" };
    write!(f, "{}<{}>({})", kind, W, self)
  }
}

/// Parses like [`DInt::parse`], wrapping values that do not fit.
impl<S: Sign, const W: usize, const N: usize> FromStr for FixedInt<S, W, N> {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    let x = DInt::<S>::parse(W, s)?;
    Ok(Self::from(&x))
  }
}
