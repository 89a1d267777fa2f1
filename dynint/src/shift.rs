use crate::core::{Digit, Sign, DInt, DIntRef, DIntMut, BITS_PER_DIGIT};
use crate::vector;

/// Shift by whole digits. `amt` is in units of digits.
fn shift_digits_left(ws: &mut [Digit], amt: usize) {
  let tot = ws.len();
  for i in (amt .. tot).rev() {
    ws[i] = ws[i - amt];
  }
  vector::fill(0, &mut ws[0 .. amt]);
}

/// Shift by whole digits, bringing in `fill` at the top.
fn shift_digits_right(ws: &mut [Digit], amt: usize, fill: Digit) {
  let todo = ws.len() - amt;
  for i in 0 .. todo {
    ws[i] = ws[i + amt];
  }
  vector::fill(fill, &mut ws[todo ..]);
}

/// Shift by less than a digit.
fn shift_bits_left(ws: &mut [Digit], amt: usize) {
  let other = BITS_PER_DIGIT - amt;
  let mut acc: Digit = 0;
  for w in ws.iter_mut() {
    let x = *w;
    *w = (x << amt) | acc;
    acc = x >> other;
  }
}

/// Shift by less than a digit, bringing in `fill` at the top.
fn shift_bits_right(ws: &mut [Digit], amt: usize, fill: Digit) {
  let other = BITS_PER_DIGIT - amt;
  let mut acc: Digit = fill << other;
  for w in ws.iter_mut().rev() {
    let x = *w;
    *w = acc | (x >> amt);
    acc = x << other;
  }
}

impl<S: Sign> DIntMut<'_, S> {

  pub fn shl_by(&mut self, amt: usize) {
    if amt == 0 { return }
    if amt >= self.bits() {
      log::trace!("shifting a {}-bit value left by {}", self.bits(), amt);
      vector::fill(0, self.as_slice_mut());
      return
    }
    let ws = self.as_slice_mut();
    shift_digits_left(ws, amt / BITS_PER_DIGIT);
    let extra = amt % BITS_PER_DIGIT;
    if extra != 0 { shift_bits_left(ws, extra) }
    self.adjust_hod();
  }

  /// Arithmetic for signed values, logical for unsigned ones.
  pub fn shr_by(&mut self, amt: usize) {
    if amt == 0 { return }
    let fill = if self.as_ref().is_negative() { !0 } else { 0 };
    if amt >= self.bits() {
      log::trace!("shifting a {}-bit value right by {}", self.bits(), amt);
      vector::fill(fill, self.as_slice_mut());
      return
    }
    let ws = self.as_slice_mut();
    shift_digits_right(ws, amt / BITS_PER_DIGIT, fill);
    let extra = amt % BITS_PER_DIGIT;
    if extra != 0 { shift_bits_right(ws, extra, fill) }
    self.adjust_hod();
  }
}

impl<S: Sign> std::ops::ShlAssign<usize> for DIntMut<'_, S> {
  fn shl_assign(&mut self, amt: usize) { self.shl_by(amt) }
}

impl<S: Sign> std::ops::ShrAssign<usize> for DIntMut<'_, S> {
  fn shr_assign(&mut self, amt: usize) { self.shr_by(amt) }
}

owned_and_ref!(ShlAssign, shl_assign, Shl, shl);
owned_and_ref!(ShrAssign, shr_assign, Shr, shr);


#[cfg(test)]
mod test {
  use num::Integer;
  use crate::{DSigned, DUnsigned};
  use crate::proptest::*;

  #[test]
  fn shl() {
    do_test(word_and::<Signed, u8>, |(x, n): (DSigned, u8)| {
      let n = n as usize % (x.bits() + 8);
      let (xr, a) = x.sem();
      Some((xr << n) == DSigned::from_bigint(x.bits(), &(a << n)))
    })
  }

  #[test]
  fn shr_signed() {
    do_test(word_and::<Signed, u8>, |(x, n): (DSigned, u8)| {
      let n = n as usize % (x.bits() + 8);
      let (xr, a) = x.sem();
      // num rounds negative values towards minus infinity
      Some((xr >> n) == DSigned::from_bigint(x.bits(), &a.div_floor(&pow2(n))))
    })
  }

  #[test]
  fn shr_unsigned() {
    do_test(word_and::<Unsigned, u8>, |(x, n): (DUnsigned, u8)| {
      let n = n as usize % (x.bits() + 8);
      let (xr, a) = x.sem();
      Some((xr >> n) == DUnsigned::from_bigint(x.bits(), &(a >> n)))
    })
  }

  #[test]
  fn shift_keeps_width() {
    let mut x = DSigned::from_i64(40, -1);
    x >>= 10;
    assert_eq!(x.bits(), 40);
    assert_eq!(x, -1_i64);
    x <<= 39;
    assert_eq!(x, -(1_i64 << 39));
    x <<= 1;
    assert!(x.as_ref().is_zero());

    let mut y = DUnsigned::from_u64(40, (1 << 40) - 1);
    y >>= 36;
    assert_eq!(y, 0xF_u32);
  }
}
