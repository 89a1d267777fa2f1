use crate::core::{Sign, DInt, DIntRef, DIntMut, BITS_PER_DIGIT};

impl<'a, S: Sign> DIntRef<'a, S> {

  /// Extract the bit at the given index, 0 being the least significant.
  pub fn bit(self, index: usize) -> bool {
    crate::contract!(index < self.bits(), "bit index out of range");
    let w = self.as_slice()[index / BITS_PER_DIGIT];
    (w >> (index % BITS_PER_DIGIT)) & 1 == 1
  }

  /// Iterate over the bits, starting at the least significant end.
  pub fn iter_bits_lsb(self) -> impl Iterator<Item = bool> + 'a {
    (0 .. self.bits()).map(move |i| self.bit(i))
  }

  /// Iterate over the bits, starting at the most significant end.
  pub fn iter_bits_msb(self) -> impl Iterator<Item = bool> + 'a {
    (0 .. self.bits()).rev().map(move |i| self.bit(i))
  }
}

impl<S: Sign> DIntMut<'_, S> {
  pub fn set_bit(&mut self, index: usize, value: bool) {
    crate::contract!(index < self.bits(), "bit index out of range");
    let bit  = 1 << (index % BITS_PER_DIGIT);
    let data = self.as_slice_mut();
    if value {
      data[index / BITS_PER_DIGIT] |= bit
    } else {
      data[index / BITS_PER_DIGIT] &= !bit
    }
    if index + 1 == self.bits() { self.adjust_hod() }
  }
}

impl<S: Sign> DInt<S> {
  pub fn bit(&self, index: usize) -> bool { self.as_ref().bit(index) }

  pub fn set_bit(&mut self, index: usize, value: bool) {
    self.as_mut().set_bit(index, value)
  }
}
