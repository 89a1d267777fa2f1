use std::fmt;
use dynint::{Digit, Sign, DIntRef, Operand, BITS_PER_DIGIT, digits_for, vector};
use crate::fixed::FixedInt;
use crate::bitvec::BitVec;

/// One four-valued logic bit.
#[derive(Clone,Copy,Debug,PartialEq,Eq,Hash)]
pub enum Logic { Zero, One, X, Z }

impl Logic {
  /// Encoding as a (data, control) pair of bits.
  fn planes(self) -> (bool, bool) {
    match self {
      Logic::Zero => (false, false),
      Logic::One  => (true,  false),
      Logic::Z    => (false, true),
      Logic::X    => (true,  true)
    }
  }

  fn from_planes(data: bool, control: bool) -> Self {
    match (data, control) {
      (false, false) => Logic::Zero,
      (true,  false) => Logic::One,
      (false, true)  => Logic::Z,
      (true,  true)  => Logic::X
    }
  }

  pub fn to_char(self) -> char {
    match self { Logic::Zero => '0', Logic::One => '1', Logic::X => 'X', Logic::Z => 'Z' }
  }
}

impl From<bool> for Logic {
  fn from(b: bool) -> Self { if b { Logic::One } else { Logic::Zero } }
}

impl fmt::Display for Logic {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.to_char())
  }
}


/// A vector of `W` four-valued logic bits.
///
/// Stored as two bit planes: `data` and `control`.  A bit with its control
/// bit clear is a plain 0 or 1.
#[derive(Clone,Copy,PartialEq,Eq,Hash)]
pub struct LogicVec<const W: usize, const N: usize> {
  data:    [Digit; N],
  control: [Digit; N]
}

#[macro_export]
/// The type of a logic vector of the given width.
macro_rules! LogicVec {
  ($w:expr) => { $crate::LogicVec< $w, { $crate::digits_for($w) } > };
}

impl<const W: usize, const N: usize> LogicVec<W, N> {

  const SIZE_OK: () = assert!(W > 0 && digits_for(W) == N);

  /// All bits unknown.
  pub fn new() -> Self {
    let _ = Self::SIZE_OK;
    let mut result = LogicVec { data: [!0; N], control: [!0; N] };
    result.adjust_hod();
    result
  }

  fn adjust_hod(&mut self) {
    vector::adjust_hod(W, &mut self.data, false);
    vector::adjust_hod(W, &mut self.control, false);
  }

  pub fn bits(&self) -> usize { W }

  /// 0 is the least significant bit.
  pub fn get(&self, i: usize) -> Logic {
    dynint::contract!(i < W, "bit index out of range");
    let (d, o) = (i / BITS_PER_DIGIT, i % BITS_PER_DIGIT);
    Logic::from_planes((self.data[d] >> o) & 1 == 1, (self.control[d] >> o) & 1 == 1)
  }

  pub fn set(&mut self, i: usize, value: Logic) {
    dynint::contract!(i < W, "bit index out of range");
    let (d, o)  = (i / BITS_PER_DIGIT, i % BITS_PER_DIGIT);
    let (x, c)  = value.planes();
    let mask    = 1 << o;
    if x { self.data[d] |= mask } else { self.data[d] &= !mask }
    if c { self.control[d] |= mask } else { self.control[d] &= !mask }
  }

  /// Are all bits 0 or 1?
  pub fn is_01(&self) -> bool { self.control.iter().all(|&c| c == 0) }

  /// The bits, if they are all 0 or 1.
  pub fn to_bitvec(&self) -> Option<BitVec<W, N>> {
    if !self.is_01() { return None }
    Some(BitVec::from(DIntRef::<dynint::Unsigned>::new(W, &self.data)))
  }

  fn assign(&mut self, from: Operand<'_>) {
    let n = vector::copy(from.as_slice(), &mut self.data);
    vector::fill(from.fill(), &mut self.data[n ..]);
    vector::fill(0, &mut self.control);
    self.adjust_hod();
  }
}

impl<const W: usize, const N: usize> Default for LogicVec<W, N> {
  fn default() -> Self { Self::new() }
}

impl<S: Sign, const W: usize, const N: usize> From<DIntRef<'_, S>> for LogicVec<W, N> {
  fn from(x: DIntRef<'_, S>) -> Self {
    let mut result = Self::new();
    result.assign(x.into());
    result
  }
}

impl<S, const W: usize, const N: usize, const WO: usize, const NO: usize>
  From<&FixedInt<S, WO, NO>> for LogicVec<W, N>
  where S: Sign {
  fn from(x: &FixedInt<S, WO, NO>) -> Self { Self::from(x.as_view()) }
}

impl<const W: usize, const N: usize, const WO: usize, const NO: usize>
  From<&BitVec<WO, NO>> for LogicVec<W, N> {
  fn from(x: &BitVec<WO, NO>) -> Self { Self::from(x.as_view()) }
}

impl<const W: usize, const N: usize> fmt::Display for LogicVec<W, N> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let s: String = (0 .. W).rev().map(|i| self.get(i).to_char()).collect();
    f.pad(&s)
  }
}

impl<const W: usize, const N: usize> fmt::Debug for LogicVec<W, N> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "LogicVec<{}>({})", W, self)
  }
}


#[cfg(test)]
mod tests {
  use crate::Logic;

  #[test]
  fn test_default_unknown() {
    let v = <LogicVec!(5)>::default();
    assert_eq!(v.to_string(), "XXXXX");
    assert!(!v.is_01());
    assert_eq!(v.to_bitvec(), None);
  }

  #[test]
  fn test_from_int() {
    let x = <BigInt!(3)>::from(-2_i32);
    let v = <LogicVec!(6)>::from(&x);
    assert_eq!(v.to_string(), "111110");
    assert!(v.is_01());
    assert_eq!(v.to_bitvec().map(|b| b.to_string()), Some("111110".to_string()));

    let y = <BigUint!(40)>::from(0x1_0000_0005_u64);
    assert_eq!(<LogicVec!(4)>::from(&y).to_string(), "0101");
  }

  #[test]
  fn test_set() {
    let mut v = <LogicVec!(40)>::from(&<BigInt!(8)>::from(0_i32));
    v.set(39, Logic::Z);
    v.set(1, Logic::X);
    v.set(0, Logic::One);
    assert_eq!(v.get(39), Logic::Z);
    assert_eq!(v.get(1), Logic::X);
    assert_eq!(v.get(0), Logic::One);
    assert_eq!(v.get(2), Logic::Zero);
    assert!(!v.is_01());
    v.set(39, Logic::Zero);
    v.set(1, Logic::from(true));
    assert_eq!(v.to_bitvec().map(|b| b.as_slice()[0]), Some(3));
  }
}
