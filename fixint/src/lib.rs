//! Two's complement integers whose width is part of their type.
//!
//! A `FixedInt<S, W, N>` stores its `W` bits in an array of `N` digits and
//! never allocates.  Its operators borrow a `dynint::DIntMut` view over that
//! array and let the dynamic implementation do the work, so every width
//! shares one implementation of each algorithm.

#[macro_use]
pub mod fixed;
pub mod assign;
#[macro_use]
pub mod arith;
pub mod logic;
pub mod shift;
pub mod cmp;
pub mod display;
pub mod native;
pub mod bitvec;
pub mod logicvec;

#[cfg(test)]
pub mod proptest;

pub use dynint::{Digit, BITS_PER_DIGIT, digits_for, hod_for};
pub use dynint::{Sign, Signed, Unsigned};
pub use dynint::{DInt, DIntRef, DIntMut, DSigned, DUnsigned};
pub use dynint::{Error, Result};

pub use fixed::{FixedInt, BigInt, BigUint};
pub use assign::Assign;
pub use native::{Int, Uint};
pub use bitvec::BitVec;
pub use logicvec::{Logic, LogicVec};
