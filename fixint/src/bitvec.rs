use std::fmt;
use dynint::{Digit, Sign, Unsigned, DIntRef, Operand, BITS_PER_DIGIT, digits_for, vector};
use crate::fixed::FixedInt;

/// A vector of `W` bits, without an arithmetic interpretation.
/// Bits above the width are kept 0.
#[derive(Clone,Copy,PartialEq,Eq,Hash)]
pub struct BitVec<const W: usize, const N: usize> {
  digits: [Digit; N]
}

#[macro_export]
/// The type of a bit vector of the given width.
macro_rules! BitVec {
  ($w:expr) => { $crate::BitVec< $w, { $crate::digits_for($w) } > };
}

impl<const W: usize, const N: usize> BitVec<W, N> {

  const SIZE_OK: () = assert!(W > 0 && digits_for(W) == N);

  /// All bits 0.
  pub fn new() -> Self {
    let _ = Self::SIZE_OK;
    BitVec { digits: [0; N] }
  }

  pub fn bits(&self) -> usize { W }

  pub fn as_slice(&self) -> &[Digit] { &self.digits }

  /// The bits, read as an unsigned integer.
  pub fn as_view(&self) -> DIntRef<'_, Unsigned> { DIntRef::new(W, &self.digits) }

  /// 0 is the least significant bit.
  pub fn get(&self, i: usize) -> bool {
    dynint::contract!(i < W, "bit index out of range");
    (self.digits[i / BITS_PER_DIGIT] >> (i % BITS_PER_DIGIT)) & 1 == 1
  }

  pub fn set(&mut self, i: usize, value: bool) {
    dynint::contract!(i < W, "bit index out of range");
    let mask = 1 << (i % BITS_PER_DIGIT);
    let d    = &mut self.digits[i / BITS_PER_DIGIT];
    if value { *d |= mask } else { *d &= !mask }
  }

  /// Copy the bits of an operand, extending it with its fill.
  pub(crate) fn assign(&mut self, from: Operand<'_>) {
    let n = vector::copy(from.as_slice(), &mut self.digits);
    vector::fill(from.fill(), &mut self.digits[n ..]);
    vector::adjust_hod(W, &mut self.digits, false);
  }
}

impl<const W: usize, const N: usize> Default for BitVec<W, N> {
  fn default() -> Self { Self::new() }
}

impl<S: Sign, const W: usize, const N: usize> From<DIntRef<'_, S>> for BitVec<W, N> {
  fn from(x: DIntRef<'_, S>) -> Self {
    let mut result = Self::new();
    result.assign(x.into());
    result
  }
}

impl<S, const W: usize, const N: usize, const WO: usize, const NO: usize>
  From<&FixedInt<S, WO, NO>> for BitVec<W, N>
  where S: Sign {
  fn from(x: &FixedInt<S, WO, NO>) -> Self { Self::from(x.as_view()) }
}

impl<S, const W: usize, const N: usize, const WO: usize, const NO: usize>
  From<&BitVec<WO, NO>> for FixedInt<S, W, N>
  where S: Sign {
  fn from(x: &BitVec<WO, NO>) -> Self { Self::from(x.as_view()) }
}

impl<const W: usize, const N: usize> fmt::Display for BitVec<W, N> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let s: String = (0 .. W).rev().map(|i| if self.get(i) { '1' } else { '0' }).collect();
    f.pad(&s)
  }
}

impl<const W: usize, const N: usize> fmt::Debug for BitVec<W, N> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "BitVec<{}>({})", W, self)
  }
}
