// Integers of dynamic sizes

use std::marker::PhantomData;
use crate::vector;

/// One limb of a multi-digit integer.
pub type Digit = u32;

/// Holds the sum or product of two digits, including the carry.
pub type DoubleDigit = u64;

/// Two digits viewed as one signed quantity.
pub type SignedDoubleDigit = i64;

/// The number of bits in a digit.
pub const BITS_PER_DIGIT: usize = Digit::BITS as usize;

/// How many digits we need to store a value of the given width.
pub const fn digits_for(bits: usize) -> usize {
  (bits + BITS_PER_DIGIT - 1) / BITS_PER_DIGIT
}

/// Index of the highest digit that holds bits of a value of the given width.
/// Digits above this one are never read.
pub const fn hod_for(bits: usize) -> usize {
  (bits - 1) / BITS_PER_DIGIT
}


/// How bits above the width of a value are filled.
pub trait Sign: Copy + std::fmt::Debug + 'static {
  const SIGNED: bool;
}

/// Two's complement values, extended with copies of the top bit.
#[derive(Clone,Copy,Debug)]
pub struct Signed;

/// Magnitudes, extended with 0.
#[derive(Clone,Copy,Debug)]
pub struct Unsigned;

impl Sign for Signed   { const SIGNED: bool = true; }
impl Sign for Unsigned { const SIGNED: bool = false; }


/// An integer of a width chosen at run time.
#[derive(Clone)]
pub struct DInt<S: Sign> {
  digits: Vec<Digit>,
  bits:   usize,
  sign:   PhantomData<S>
}

/// A signed integer of a width chosen at run time.
pub type DSigned   = DInt<Signed>;

/// An unsigned integer of a width chosen at run time.
pub type DUnsigned = DInt<Unsigned>;

/// Read access to the digits of some integer.
#[derive(Clone,Copy)]
pub struct DIntRef<'a, S: Sign> {
  digits: &'a [Digit],
  bits:   usize,
  sign:   PhantomData<S>
}

/// Write access to the digits of some integer.
/// All in-place operators are implemented on this type.
pub struct DIntMut<'a, S: Sign> {
  digits: &'a mut [Digit],
  bits:   usize,
  sign:   PhantomData<S>
}


impl<S: Sign> DInt<S> {

  /// Create a 0 initialized integer of the given width.
  pub fn zero(bits: usize) -> Self {
    crate::contract!(bits > 0, "integers must have at least one bit");
    DInt { digits: vec![0; digits_for(bits)], bits: bits, sign: PhantomData }
  }

  /// Make an integer out of the given digits, least significant first.
  /// Bits above the width are discarded.
  pub fn from_digits(bits: usize, digits: Vec<Digit>) -> Self {
    crate::contract!(bits > 0, "integers must have at least one bit");
    crate::contract!(digits.len() == digits_for(bits));
    let mut result = DInt { digits: digits, bits: bits, sign: PhantomData };
    result.adjust_hod();
    result
  }

  /// The width in bits.
  pub fn bits(&self) -> usize { self.bits }

  pub fn digit_count(&self) -> usize { self.digits.len() }

  pub fn hod(&self) -> usize { hod_for(self.bits) }

  pub fn is_zero(&self) -> bool { self.as_ref().is_zero() }

  pub fn is_negative(&self) -> bool { self.as_ref().is_negative() }

  pub fn as_ref(&self) -> DIntRef<'_, S> {
    DIntRef { digits: &self.digits, bits: self.bits, sign: PhantomData }
  }

  pub fn as_mut(&mut self) -> DIntMut<'_, S> {
    DIntMut { digits: &mut self.digits, bits: self.bits, sign: PhantomData }
  }

  pub fn as_slice(&self) -> &[Digit] { &self.digits }

  /// Direct access to the digits.  Callers that leave stray bits above the
  /// width should finish with [`DInt::adjust_hod`].
  pub fn as_slice_mut(&mut self) -> &mut [Digit] { &mut self.digits }

  /// Restore the extension bits of the top digit.
  pub fn adjust_hod(&mut self) {
    vector::adjust_hod(self.bits, &mut self.digits, S::SIGNED)
  }
}


impl<'a, S: Sign> DIntRef<'a, S> {

  /// View digits that already satisfy the extension invariant.
  pub fn new(bits: usize, digits: &'a [Digit]) -> Self {
    crate::contract!(bits > 0, "integers must have at least one bit");
    crate::contract!(digits.len() == digits_for(bits));
    DIntRef { digits: digits, bits: bits, sign: PhantomData }
  }

  pub fn bits(self) -> usize { self.bits }

  /// Number of stored digits.
  pub fn digit_count(self) -> usize { self.digits.len() }

  pub fn hod(self) -> usize { hod_for(self.bits) }

  pub fn as_slice(self) -> &'a [Digit] { self.digits }

  pub fn is_zero(self) -> bool { self.digits.iter().all(|&d| d == 0) }

  pub fn is_negative(self) -> bool {
    S::SIGNED && vector::is_negative(self.bits, self.digits)
  }

  /// Make an owned copy.
  pub fn clone_int(self) -> DInt<S> {
    DInt { digits: self.digits.to_vec(), bits: self.bits, sign: PhantomData }
  }
}


impl<'a, S: Sign> DIntMut<'a, S> {

  /// View digits that already satisfy the extension invariant.
  pub fn new(bits: usize, digits: &'a mut [Digit]) -> Self {
    crate::contract!(bits > 0, "integers must have at least one bit");
    crate::contract!(digits.len() == digits_for(bits));
    DIntMut { digits: digits, bits: bits, sign: PhantomData }
  }

  pub fn bits(&self) -> usize { self.bits }

  pub fn as_ref(&self) -> DIntRef<'_, S> {
    DIntRef { digits: &*self.digits, bits: self.bits, sign: PhantomData }
  }

  pub fn as_slice(&self) -> &[Digit] { &*self.digits }

  pub fn as_slice_mut(&mut self) -> &mut [Digit] { &mut *self.digits }

  /// Restore the extension bits of the top digit.
  pub fn adjust_hod(&mut self) {
    vector::adjust_hod(self.bits, &mut *self.digits, S::SIGNED)
  }
}


impl<S: Sign> std::fmt::Debug for DInt<S> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    std::fmt::Debug::fmt(&self.as_ref(), f)
  }
}

impl<S: Sign> std::fmt::Debug for DIntRef<'_, S> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let kind = if S::SIGNED { "DSigned" } else { "DUnsigned" };
    write!(f, "{}<{}>({})", kind, self.bits, self)
  }
}

impl<S: Sign> std::fmt::Debug for DIntMut<'_, S> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    std::fmt::Debug::fmt(&self.as_ref(), f)
  }
}
