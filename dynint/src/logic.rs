use crate::core::{Sign, DInt, DIntRef, DIntMut};
use crate::operand::Operand;
use crate::vector;

impl<S: Sign> DIntMut<'_, S> {

  pub fn and_operand(&mut self, rhs: Operand<'_>) {
    for (i, x) in self.as_slice_mut().iter_mut().enumerate() { *x &= rhs.digit(i) }
    self.adjust_hod();
  }

  pub fn or_operand(&mut self, rhs: Operand<'_>) {
    for (i, x) in self.as_slice_mut().iter_mut().enumerate() { *x |= rhs.digit(i) }
    self.adjust_hod();
  }

  pub fn xor_operand(&mut self, rhs: Operand<'_>) {
    for (i, x) in self.as_slice_mut().iter_mut().enumerate() { *x ^= rhs.digit(i) }
    self.adjust_hod();
  }

  pub fn not_assign(&mut self) {
    for x in self.as_slice_mut().iter_mut() {
      *x = !*x
    }
    self.adjust_hod()
  }
}

for_each_operand!(BitAndAssign, bitand_assign, and_operand);
for_each_operand!(BitOrAssign, bitor_assign, or_operand);
for_each_operand!(BitXorAssign, bitxor_assign, xor_operand);

owned_and_ref!(BitAndAssign, bitand_assign, BitAnd, bitand);
owned_and_ref!(BitOrAssign, bitor_assign, BitOr, bitor);
owned_and_ref!(BitXorAssign, bitxor_assign, BitXor, bitxor);


impl<S: Sign> DInt<S> {
  pub fn not_assign(&mut self) { self.as_mut().not_assign() }
}

impl<S: Sign> std::ops::Not for DIntRef<'_, S> {
  type Output = DInt<S>;
  fn not(self) -> Self::Output {
    let mut result = self.clone_int();
    result.not_assign();
    result
  }
}

impl<S: Sign> std::ops::Not for DInt<S> {
  type Output = DInt<S>;
  fn not(mut self) -> Self::Output {
    self.not_assign();
    self
  }
}


// Reductions look at the bits of the width only.
impl<S: Sign> DIntRef<'_, S> {
  pub fn and_reduce(self) -> bool { vector::and_reduce(self.bits(), self.as_slice()) }
  pub fn or_reduce(self)  -> bool { vector::or_reduce(self.bits(), self.as_slice()) }
  pub fn xor_reduce(self) -> bool { vector::xor_reduce(self.bits(), self.as_slice()) }

  pub fn nand_reduce(self) -> bool { !self.and_reduce() }
  pub fn nor_reduce(self)  -> bool { !self.or_reduce() }
  pub fn xnor_reduce(self) -> bool { !self.xor_reduce() }
}

impl<S: Sign> DInt<S> {
  pub fn and_reduce(&self)  -> bool { self.as_ref().and_reduce() }
  pub fn or_reduce(&self)   -> bool { self.as_ref().or_reduce() }
  pub fn xor_reduce(&self)  -> bool { self.as_ref().xor_reduce() }
  pub fn nand_reduce(&self) -> bool { self.as_ref().nand_reduce() }
  pub fn nor_reduce(&self)  -> bool { self.as_ref().nor_reduce() }
  pub fn xnor_reduce(&self) -> bool { self.as_ref().xnor_reduce() }
}
