use std::marker::PhantomData;
use dynint::{Digit, Sign, Signed, Unsigned, DInt, DIntRef, DIntMut, BITS_PER_DIGIT};
use dynint::{digits_for, hod_for, vector};

/// An integer of `W` bits stored in `N` digits, least significant first.
///
/// `N` must be `digits_for(W)`; this is checked when the type is used.
/// The [`BigInt!`](crate::BigInt!) and [`BigUint!`](crate::BigUint!) macros
/// fill it in.
///
/// The bits of the top digit above the width are copies of the sign bit for
/// signed values and 0 for unsigned ones.
#[derive(Clone,Copy)]
pub struct FixedInt<S: Sign, const W: usize, const N: usize> {
  digits: [Digit; N],
  sign:   PhantomData<S>
}

/// A signed integer of `W` bits.
pub type BigInt<const W: usize, const N: usize>  = FixedInt<Signed, W, N>;

/// An unsigned integer of `W` bits.
pub type BigUint<const W: usize, const N: usize> = FixedInt<Unsigned, W, N>;

#[macro_export]
/// The type of a signed integer of the given width, without having to
/// specify the number of digits.
macro_rules! BigInt {
  ($w:expr) => { $crate::FixedInt< $crate::Signed, $w, { $crate::digits_for($w) } > };
}

#[macro_export]
/// The type of an unsigned integer of the given width, without having to
/// specify the number of digits.
macro_rules! BigUint {
  ($w:expr) => { $crate::FixedInt< $crate::Unsigned, $w, { $crate::digits_for($w) } > };
}


impl<S: Sign, const W: usize, const N: usize> FixedInt<S, W, N> {

  const SIZE_OK: () = assert!(W > 0 && digits_for(W) == N);

  /// Width in bits.
  pub const BITS: usize   = W;

  /// Number of stored digits.
  pub const DIGITS: usize = N;

  /// Index of the highest digit.
  pub const HOD: usize    = hod_for(W);

  /// A value of 0.
  pub fn new() -> Self {
    let _ = Self::SIZE_OK;
    FixedInt { digits: [0; N], sign: PhantomData }
  }

  /// Bits above the width are discarded.
  pub fn from_digits(digits: [Digit; N]) -> Self {
    let _ = Self::SIZE_OK;
    let mut result = FixedInt { digits: digits, sign: PhantomData };
    result.adjust_hod();
    result
  }

  pub fn bits(&self) -> usize { W }

  pub fn as_slice(&self) -> &[Digit] { &self.digits }

  /// Direct access to the digits.  Finish with [`FixedInt::adjust_hod`].
  pub fn as_slice_mut(&mut self) -> &mut [Digit] { &mut self.digits }

  pub fn adjust_hod(&mut self) {
    vector::adjust_hod(W, &mut self.digits, S::SIGNED)
  }

  /// Borrow the digits as a dynamic integer.
  pub fn as_view(&self) -> DIntRef<'_, S> { DIntRef::new(W, &self.digits) }

  /// Borrow the digits as a mutable dynamic integer.  The view keeps the
  /// digits normalized.
  pub fn as_view_mut(&mut self) -> DIntMut<'_, S> {
    DIntMut::new(W, &mut self.digits)
  }

  pub fn to_dint(&self) -> DInt<S> { self.as_view().clone_int() }

  /// 0 is the least significant bit.
  pub fn bit(&self, i: usize) -> bool {
    dynint::contract!(i < W, "bit index out of range");
    (self.digits[i / BITS_PER_DIGIT] >> (i % BITS_PER_DIGIT)) & 1 == 1
  }

  pub fn set_bit(&mut self, i: usize, value: bool) {
    self.as_view_mut().set_bit(i, value)
  }

  pub fn is_negative(&self) -> bool { self.as_view().is_negative() }
  pub fn is_zero(&self) -> bool { self.as_view().is_zero() }

  pub fn to_i64(&self) -> i64 { self.as_view().to_i64() }
  pub fn to_u64(&self) -> u64 { self.as_view().to_u64() }
  pub fn to_i32(&self) -> i32 { self.as_view().to_i32() }
  pub fn to_u32(&self) -> u32 { self.as_view().to_u32() }
  pub fn to_bigint(&self) -> num::BigInt { self.as_view().to_bigint() }
}

impl<S: Sign, const W: usize, const N: usize> Default for FixedInt<S, W, N> {
  fn default() -> Self { Self::new() }
}
