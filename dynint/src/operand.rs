use crate::core::{Digit, Sign, DInt, DIntRef, BITS_PER_DIGIT, digits_for};
use crate::vector;

/// The right hand side of an operator.
///
/// Reading a digit past the stored ones yields the fill digit, so operands
/// of any width can be combined with a left hand side of any other width.
#[derive(Clone,Copy,Debug)]
pub struct Operand<'a> {
  digits: &'a [Digit],
  bits:   usize,
  signed: bool,
  fill:   Digit
}

impl<'a> Operand<'a> {

  /// `digits` must be normalized for the given width and signedness.
  pub fn new(bits: usize, digits: &'a [Digit], signed: bool) -> Self {
    crate::contract!(digits.len() == digits_for(bits));
    let negative = signed && vector::is_negative(bits, digits);
    Operand {
      digits: digits,
      bits:   bits,
      signed: signed,
      fill:   if negative { !0 } else { 0 }
    }
  }

  pub fn bits(self) -> usize { self.bits }

  pub fn is_signed(self) -> bool { self.signed }

  pub fn as_slice(self) -> &'a [Digit] { self.digits }

  pub fn is_negative(self) -> bool { self.fill != 0 }

  pub fn is_zero(self) -> bool { self.digits.iter().all(|&d| d == 0) }

  /// The digit used to extend the value.
  pub fn fill(self) -> Digit { self.fill }

  /// Digit `i` of the value, extended as far as needed.
  #[inline(always)]
  pub fn digit(self, i: usize) -> Digit {
    if i < self.digits.len() { self.digits[i] } else { self.fill }
  }

  /// The value, for operands of at most 64 bits.
  pub(crate) fn to_i128(self) -> i128 {
    crate::contract!(self.bits <= 64);
    let mut value: i128 = if self.is_negative() { -1 } else { 0 };
    for &d in self.digits.iter().rev() {
      value = (value << BITS_PER_DIGIT) | d as i128;
    }
    value
  }

  /// The value as an unbounded integer.
  pub fn to_bigint(self) -> num::BigInt {
    let pattern = num::BigInt::from(num::BigUint::from_slice(self.digits));
    if !self.is_negative() { return pattern }
    pattern - (num::BigInt::from(1) << (self.digits.len() * BITS_PER_DIGIT))
  }
}

impl<'a, S: Sign> From<DIntRef<'a, S>> for Operand<'a> {
  fn from(x: DIntRef<'a, S>) -> Self {
    Operand::new(x.bits(), x.as_slice(), S::SIGNED)
  }
}

impl<'a, S: Sign> From<&'a DInt<S>> for Operand<'a> {
  fn from(x: &'a DInt<S>) -> Self { x.as_ref().into() }
}


/// Digits of a native integer, so that it can be used as an [`Operand`].
#[derive(Clone,Copy,Debug)]
pub struct Native {
  digits: [Digit; 2],
  bits:   usize,
  signed: bool
}

impl Native {
  pub fn operand(&self) -> Operand<'_> {
    Operand::new(self.bits, &self.digits[.. digits_for(self.bits)], self.signed)
  }
}

impl From<i64> for Native {
  fn from(x: i64) -> Self {
    Native { digits: [x as Digit, (x >> 32) as Digit], bits: 64, signed: true }
  }
}

impl From<u64> for Native {
  fn from(x: u64) -> Self {
    Native { digits: [x as Digit, (x >> 32) as Digit], bits: 64, signed: false }
  }
}

impl From<i32> for Native {
  fn from(x: i32) -> Self {
    Native { digits: [x as Digit, 0], bits: 32, signed: true }
  }
}

impl From<u32> for Native {
  fn from(x: u32) -> Self {
    Native { digits: [x, 0], bits: 32, signed: false }
  }
}
