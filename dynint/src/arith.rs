use crate::core::{Digit, DoubleDigit, Sign, DInt, DIntRef, DIntMut, BITS_PER_DIGIT};
use crate::operand::Operand;
use crate::error::{Error, Result};

// All results are the exact result truncated to the width of `self`.
impl<S: Sign> DIntMut<'_, S> {

  pub fn add_operand(&mut self, rhs: Operand<'_>) {
    let mut acc: DoubleDigit = 0;
    for (i, out) in self.as_slice_mut().iter_mut().enumerate() {
      acc += *out as DoubleDigit;
      acc += rhs.digit(i) as DoubleDigit;
      *out = acc as Digit;
      acc  = acc >> BITS_PER_DIGIT;
    }
    self.adjust_hod();
  }

  pub fn sub_operand(&mut self, rhs: Operand<'_>) {
    let mut acc: DoubleDigit = 1;
    for (i, out) in self.as_slice_mut().iter_mut().enumerate() {
      acc += *out as DoubleDigit;
      acc += (!rhs.digit(i)) as DoubleDigit;
      *out = acc as Digit;
      acc  = acc >> BITS_PER_DIGIT;
    }
    self.adjust_hod();
  }

  pub fn mul_operand(&mut self, rhs: Operand<'_>) {
    let ws  = self.as_slice();
    let tot = ws.len();
    let mut out = vec![0 as Digit; tot];

    for i in 0 .. tot {
      let x = ws[i] as DoubleDigit;
      if x == 0 { continue }
      let mut acc: DoubleDigit = 0;
      for j in 0 .. tot - i {
        acc += x * rhs.digit(j) as DoubleDigit;
        acc += out[i + j] as DoubleDigit;
        out[i + j] = acc as Digit;
        acc = acc >> BITS_PER_DIGIT;
      }
    }

    self.as_slice_mut().copy_from_slice(&out);
    self.adjust_hod();
  }

  /// Division rounding towards 0.
  /// Panics if `rhs` is 0.
  pub fn div_operand(&mut self, rhs: Operand<'_>) {
    assert!(!rhs.is_zero(), "attempt to divide by zero");
    if self.bits() <= 64 && rhs.bits() <= 64 {
      let x = Operand::from(self.as_ref()).to_i128();
      self.assign_i128(x / rhs.to_i128());
      return
    }
    log::trace!("{}-bit division by a {}-bit divisor", self.bits(), rhs.bits());
    let x = self.as_ref().to_bigint();
    self.assign_bigint(&(x / rhs.to_bigint()));
  }

  /// Remainder with the sign of `self`.
  /// Panics if `rhs` is 0.
  pub fn rem_operand(&mut self, rhs: Operand<'_>) {
    assert!(!rhs.is_zero(), "attempt to calculate the remainder with a divisor of zero");
    if self.bits() <= 64 && rhs.bits() <= 64 {
      let x = Operand::from(self.as_ref()).to_i128();
      self.assign_i128(x % rhs.to_i128());
      return
    }
    log::trace!("{}-bit remainder by a {}-bit divisor", self.bits(), rhs.bits());
    let x = self.as_ref().to_bigint();
    self.assign_bigint(&(x % rhs.to_bigint()));
  }

  pub fn checked_div_assign(&mut self, rhs: Operand<'_>) -> Result<()> {
    if rhs.is_zero() { return Err(Error::DivisionByZero) }
    self.div_operand(rhs);
    Ok(())
  }

  pub fn checked_rem_assign(&mut self, rhs: Operand<'_>) -> Result<()> {
    if rhs.is_zero() { return Err(Error::DivisionByZero) }
    self.rem_operand(rhs);
    Ok(())
  }

  /// Two's complement negation: invert and add 1.
  pub fn neg_assign(&mut self) {
    let mut acc: DoubleDigit = 1;
    for out in self.as_slice_mut().iter_mut() {
      acc += (!*out) as DoubleDigit;
      *out = acc as Digit;
      acc  = acc >> BITS_PER_DIGIT;
    }
    self.adjust_hod();
  }
}


/// Implement an operator for every kind of right hand side, in terms of an
/// `Operand` method of `DIntMut`.
macro_rules! for_each_operand {
  ($trait:ident, $method:ident, $inner:ident) => {

    impl<S: $crate::Sign, T: $crate::Sign>
      std::ops::$trait<$crate::DIntRef<'_, T>> for $crate::DIntMut<'_, S> {
      fn $method(&mut self, rhs: $crate::DIntRef<'_, T>) {
        self.$inner(rhs.into())
      }
    }

    impl<S: $crate::Sign, T: $crate::Sign>
      std::ops::$trait<&$crate::DInt<T>> for $crate::DIntMut<'_, S> {
      fn $method(&mut self, rhs: &$crate::DInt<T>) {
        self.$inner(rhs.into())
      }
    }

    for_each_operand!(@native $trait, $method, $inner, i32 i64 u32 u64);
  };

  (@native $trait:ident, $method:ident, $inner:ident, $($t:ty)*) => { $(
    impl<S: $crate::Sign> std::ops::$trait<$t> for $crate::DIntMut<'_, S> {
      fn $method(&mut self, rhs: $t) {
        self.$inner($crate::Native::from(rhs).operand())
      }
    }
  )* };
}

/// Owned values borrow a view of themselves; references produce a new value
/// of the same width.
macro_rules! owned_and_ref {
  ($assign:ident, $assign_method:ident, $op:ident, $op_method:ident) => {

    impl<S: Sign, R> std::ops::$assign<R> for DInt<S>
      where for<'a> DIntMut<'a, S>: std::ops::$assign<R> {
      fn $assign_method(&mut self, rhs: R) {
        std::ops::$assign::$assign_method(&mut self.as_mut(), rhs)
      }
    }

    impl<S: Sign, R> std::ops::$op<R> for DIntRef<'_, S>
      where for<'a> DIntMut<'a, S>: std::ops::$assign<R> {
      type Output = DInt<S>;
      fn $op_method(self, rhs: R) -> DInt<S> {
        let mut result = self.clone_int();
        std::ops::$assign::$assign_method(&mut result.as_mut(), rhs);
        result
      }
    }
  };
}

for_each_operand!(AddAssign, add_assign, add_operand);
for_each_operand!(SubAssign, sub_assign, sub_operand);
for_each_operand!(MulAssign, mul_assign, mul_operand);
for_each_operand!(DivAssign, div_assign, div_operand);
for_each_operand!(RemAssign, rem_assign, rem_operand);

owned_and_ref!(AddAssign, add_assign, Add, add);
owned_and_ref!(SubAssign, sub_assign, Sub, sub);
owned_and_ref!(MulAssign, mul_assign, Mul, mul);
owned_and_ref!(DivAssign, div_assign, Div, div);
owned_and_ref!(RemAssign, rem_assign, Rem, rem);


impl<S: Sign> DInt<S> {
  pub fn neg_assign(&mut self) { self.as_mut().neg_assign() }
}

impl<S: Sign> std::ops::Neg for DIntRef<'_, S> {
  type Output = DInt<S>;

  fn neg(self) -> Self::Output {
    let mut result = self.clone_int();
    result.neg_assign();
    result
  }
}

impl<S: Sign> std::ops::Neg for DInt<S> {
  type Output = DInt<S>;

  fn neg(mut self) -> Self::Output {
    self.neg_assign();
    self
  }
}

impl<'a, S: Sign> DIntRef<'a, S> {

  pub fn checked_div(self, rhs: impl Into<Operand<'a>>) -> Result<DInt<S>> {
    let mut result = self.clone_int();
    result.as_mut().checked_div_assign(rhs.into())?;
    Ok(result)
  }

  pub fn checked_rem(self, rhs: impl Into<Operand<'a>>) -> Result<DInt<S>> {
    let mut result = self.clone_int();
    result.as_mut().checked_rem_assign(rhs.into())?;
    Ok(result)
  }
}
