//! Two's complement integers whose width is chosen at run time.
//!
//! Values are stored as little endian vectors of 32-bit digits.  The top
//! digit of a signed value is kept sign extended, and the top digit of an
//! unsigned value is kept zero extended, so any digit sequence can be read
//! as if it continued forever with its fill digit (see [`Operand`]).
//!
//! Every in-place operator is implemented once, on [`DIntMut`].  Owned values
//! and the fixed-width integers of the `fixint` crate borrow such a view over
//! their own storage and reuse it.

/// Check a caller obligation.
///
/// These are `debug_assert!`s unless this crate's `strict-contracts` feature
/// is on, whichever crate expands the macro.
#[macro_export]
macro_rules! contract {
  ($($arg:tt)*) => {
    if $crate::STRICT_CONTRACTS {
      assert!($($arg)*)
    } else {
      debug_assert!($($arg)*)
    }
  };
}

#[doc(hidden)]
pub const STRICT_CONTRACTS: bool = cfg!(feature = "strict-contracts");

pub mod core;
pub mod vector;
pub mod operand;
pub mod error;
pub mod index;
pub mod conversion;
pub mod cmp;
#[macro_use]
pub mod arith;
pub mod logic;
pub mod shift;
pub mod display;
pub mod parse;

#[cfg(test)]
pub mod proptest;

pub use crate::core::{Digit, DoubleDigit, SignedDoubleDigit, BITS_PER_DIGIT};
pub use crate::core::{digits_for, hod_for};
pub use crate::core::{Sign, Signed, Unsigned};
pub use crate::core::{DInt, DIntRef, DIntMut, DSigned, DUnsigned};
pub use crate::operand::{Operand, Native};
pub use crate::error::{Error, Result};
pub use crate::cmp::compare;
