// Integers of at most 64 bits, kept in a native register

use std::fmt;

/// A signed integer of `W <= 64` bits, sign extended to 64.
#[derive(Clone,Copy,Debug,PartialEq,Eq,PartialOrd,Ord,Hash,Default)]
pub struct Int<const W: usize>(i64);

/// An unsigned integer of `W <= 64` bits, zero extended to 64.
#[derive(Clone,Copy,Debug,PartialEq,Eq,PartialOrd,Ord,Hash,Default)]
pub struct Uint<const W: usize>(u64);

impl<const W: usize> Int<W> {
  const SIZE_OK: () = assert!(W > 0 && W <= 64);

  /// Keeps the low `W` bits of `value`.
  pub fn new(value: i64) -> Self {
    let _ = Self::SIZE_OK;
    let pad = 64 - W;
    Int((value << pad) >> pad)
  }

  pub fn value(self) -> i64 { self.0 }
}

impl<const W: usize> Uint<W> {
  const SIZE_OK: () = assert!(W > 0 && W <= 64);

  /// Keeps the low `W` bits of `value`.
  pub fn new(value: u64) -> Self {
    let _ = Self::SIZE_OK;
    let pad = 64 - W;
    Uint((value << pad) >> pad)
  }

  pub fn value(self) -> u64 { self.0 }
}

impl<const W: usize> From<Int<W>> for i64 {
  fn from(x: Int<W>) -> i64 { x.0 }
}

impl<const W: usize> From<Uint<W>> for u64 {
  fn from(x: Uint<W>) -> u64 { x.0 }
}

impl<const W: usize> fmt::Display for Int<W> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
}

impl<const W: usize> fmt::Display for Uint<W> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
}
