use num::Integer;
use crate::core::{Digit, Sign, DInt, DIntRef, DIntMut, BITS_PER_DIGIT};
use crate::operand::{Operand, Native};
use crate::vector;

impl<S: Sign> DIntMut<'_, S> {

  /// Copy the overlapping digits, extend with the source's fill digit, and
  /// normalize.  Values wider than `self` are truncated.
  pub fn assign(&mut self, from: Operand<'_>) {
    let to = self.as_slice_mut();
    let n  = vector::copy(from.as_slice(), to);
    vector::fill(from.fill(), &mut to[n ..]);
    self.adjust_hod();
  }

  /// Store an unbounded integer, modulo 2 to the width.
  pub fn assign_bigint(&mut self, value: &num::BigInt) {
    let to      = self.as_slice_mut();
    let modulus = num::BigInt::from(1) << (to.len() * BITS_PER_DIGIT);
    let (_, pattern) = value.mod_floor(&modulus).into_parts();
    let n = vector::copy(&pattern.to_u32_digits(), to);
    vector::fill(0, &mut to[n ..]);
    self.adjust_hod();
  }

  /// Store a value of at most 128 bits, modulo 2 to the width.
  pub(crate) fn assign_i128(&mut self, value: i128) {
    for (i, out) in self.as_slice_mut().iter_mut().enumerate() {
      let shift = (i * BITS_PER_DIGIT).min(127) as u32;
      *out = (value >> shift) as Digit;
    }
    self.adjust_hod();
  }
}

impl<S: Sign> DInt<S> {

  /// A value of the given width, holding as much of `value` as fits.
  pub fn from_operand(bits: usize, value: Operand<'_>) -> Self {
    let mut result = DInt::zero(bits);
    result.as_mut().assign(value);
    result
  }

  pub fn from_i64(bits: usize, value: i64) -> Self {
    Self::from_operand(bits, Native::from(value).operand())
  }

  pub fn from_u64(bits: usize, value: u64) -> Self {
    Self::from_operand(bits, Native::from(value).operand())
  }

  pub fn from_i32(bits: usize, value: i32) -> Self {
    Self::from_operand(bits, Native::from(value).operand())
  }

  pub fn from_u32(bits: usize, value: u32) -> Self {
    Self::from_operand(bits, Native::from(value).operand())
  }

  /// Wraps around if the value does not fit.
  pub fn from_bigint(bits: usize, value: &num::BigInt) -> Self {
    let mut result = DInt::zero(bits);
    result.as_mut().assign_bigint(value);
    result
  }
}

impl<'a, S: Sign> DIntRef<'a, S> {

  /// The same value at another width: extended with the sign (or 0) when
  /// wider, truncated when narrower.
  pub fn resize<T: Sign>(self, bits: usize) -> DInt<T> {
    DInt::from_operand(bits, self.into())
  }

  /// The least significant 64 bits, like an `as` cast.
  pub fn to_u64(self) -> u64 {
    let x = Operand::from(self);
    (x.digit(1) as u64) << BITS_PER_DIGIT | x.digit(0) as u64
  }

  /// The least significant 64 bits, like an `as` cast.
  pub fn to_i64(self) -> i64 { self.to_u64() as i64 }

  /// The least significant 32 bits, like an `as` cast.
  pub fn to_u32(self) -> u32 { self.as_slice()[0] }

  /// The least significant 32 bits, like an `as` cast.
  pub fn to_i32(self) -> i32 { self.to_u32() as i32 }

  pub fn to_bigint(self) -> num::BigInt { Operand::from(self).to_bigint() }

  /// The bit pattern of the value, read as unsigned.
  pub fn to_pattern(self) -> num::BigUint {
    let mut ds = self.as_slice().to_vec();
    vector::adjust_hod(self.bits(), &mut ds, false);
    num::BigUint::from_slice(&ds)
  }
}

impl<S: Sign> DInt<S> {
  pub fn to_u64(&self) -> u64 { self.as_ref().to_u64() }
  pub fn to_i64(&self) -> i64 { self.as_ref().to_i64() }
  pub fn to_u32(&self) -> u32 { self.as_ref().to_u32() }
  pub fn to_i32(&self) -> i32 { self.as_ref().to_i32() }
  pub fn to_bigint(&self) -> num::BigInt { self.as_ref().to_bigint() }

  pub fn resize<T: Sign>(&self, bits: usize) -> DInt<T> {
    self.as_ref().resize(bits)
  }
}

impl<S: Sign> From<DIntRef<'_, S>> for num::BigInt {
  fn from(x: DIntRef<'_, S>) -> Self { x.to_bigint() }
}

impl<S: Sign> From<&DInt<S>> for num::BigInt {
  fn from(x: &DInt<S>) -> Self { x.to_bigint() }
}
