use std::ops::Shr;
use dynint::{Digit, DoubleDigit, SignedDoubleDigit, BITS_PER_DIGIT};
use dynint::{Sign, Unsigned, DInt, DIntRef, digits_for, vector};
use crate::fixed::FixedInt;

impl<S: Sign, const W: usize, const N: usize> FixedInt<S, W, N> {

  /// Shift right by `amt` bits, keeping only the `W - amt` bits that remain.
  /// Signed values shift in their sign, unsigned ones 0.
  ///
  /// Shifting out every bit gives a 1 bit result that is `-1` for negative
  /// values and `0` otherwise.
  pub fn shr_narrow(&self, amt: u32) -> DInt<S> {
    let v = amt as usize;
    if v == 0 { return self.to_dint() }
    if v >= W {
      log::trace!("shifting out all {} bits", W);
      return DInt::from_i64(1, if self.is_negative() { -1 } else { 0 })
    }

    let nb = W - v;
    let ds = self.as_slice();

    if W <= BITS_PER_DIGIT {
      let r = if S::SIGNED { ((ds[0] as i32) >> v) as Digit } else { ds[0] >> v };
      return DInt::from_digits(nb, vec![r])
    }

    if W <= 2 * BITS_PER_DIGIT {
      let packed = (ds[1] as DoubleDigit) << BITS_PER_DIGIT | ds[0] as DoubleDigit;
      let r =
        if S::SIGNED { ((packed as SignedDoubleDigit) >> v) as DoubleDigit }
        else { packed >> v };
      let out =
        if nb > BITS_PER_DIGIT { vec![r as Digit, (r >> BITS_PER_DIGIT) as Digit] }
        else { vec![r as Digit] };
      return DInt::from_digits(nb, out)
    }

    let mut out = vec![0; digits_for(nb)];
    vector::extract(ds, &mut out, W, v);
    DInt::from_digits(nb, out)
  }
}

impl<S: Sign, const W: usize, const N: usize> Shr<u32> for &FixedInt<S, W, N> {
  type Output = DInt<S>;
  fn shr(self, amt: u32) -> DInt<S> { self.shr_narrow(amt) }
}

impl<S: Sign, const W: usize, const N: usize> Shr<u32> for FixedInt<S, W, N> {
  type Output = DInt<S>;
  fn shr(self, amt: u32) -> DInt<S> { self.shr_narrow(amt) }
}

impl<S: Sign, const W: usize, const N: usize> Shr<DIntRef<'_, Unsigned>> for &FixedInt<S, W, N> {
  type Output = DInt<S>;

  fn shr(self, amt: DIntRef<'_, Unsigned>) -> DInt<S> {
    dynint::contract!(amt.as_slice()[1 ..].iter().all(|&d| d == 0),
                      "shift amount does not fit in 32 bits");
    self.shr_narrow(amt.to_u32())
  }
}

impl<S: Sign, const W: usize, const N: usize> Shr<&DInt<Unsigned>> for &FixedInt<S, W, N> {
  type Output = DInt<S>;
  fn shr(self, amt: &DInt<Unsigned>) -> DInt<S> { self >> amt.as_ref() }
}


impl<S: Sign, const W: usize, const N: usize> std::ops::ShlAssign<usize> for FixedInt<S, W, N> {
  fn shl_assign(&mut self, amt: usize) { self.as_view_mut().shl_by(amt) }
}

impl<S: Sign, const W: usize, const N: usize> std::ops::ShrAssign<usize> for FixedInt<S, W, N> {
  fn shr_assign(&mut self, amt: usize) { self.as_view_mut().shr_by(amt) }
}


#[cfg(test)]
mod tests {
  use crate::DUnsigned;
  use crate::fixed::{BigInt, BigUint};
  use crate::proptest::*;

  #[test]
  fn test_minus_one() {
    let x = <BigInt!(40)>::from(-1_i64);
    let r = &x >> 10;
    assert_eq!(r.bits(), 30);
    assert_eq!(r, -1_i64);
  }

  #[test]
  fn test_shift_everything() {
    let x = <BigInt!(100)>::from(-7_i64);
    let r = &x >> 100;
    assert_eq!(r.bits(), 1);
    assert_eq!(r, -1_i64);
    assert_eq!(r.as_slice(), &[!0]);
    let y = <BigUint!(100)>::from(u64::MAX);
    let r = &y >> 250;
    assert_eq!(r.bits(), 1);
    assert_eq!(r, 0_i64);
    assert_eq!((&x >> 0).bits(), 100);
  }

  #[test]
  fn test_shift_amount() {
    let x = <BigUint!(96)>::from(0xF000_u32);
    let n = DUnsigned::from_u64(200, 12);
    let r = &x >> &n;
    assert_eq!(r.bits(), 84);
    assert_eq!(r, 0xF_u32);
  }

  // Every amount keeps the top W - v bits, whatever the width class.
  fn shift_width<const W: usize, const N: usize>() {
    run(|(x, y, n): (BigInt<W, N>, BigUint<W, N>, u8)| {
      let v = n as usize % (W + 3);
      let (rx, ry) = (&x >> v as u32, &y >> v as u32);
      if v >= W {
        let sign = if x.is_negative() { -1_i64 } else { 0 };
        return Some(rx.bits() == 1 && ry.bits() == 1 && rx == sign && ry == 0_i64)
      }
      let a = x.to_bigint();
      let b = y.to_bigint();
      let fa = num::Integer::div_floor(&a, &pow2(v));
      Some(rx.bits() == W - v && ry.bits() == W - v
        && rx.to_bigint() == fa && ry.to_bigint() == (b >> v))
    })
  }

  #[test]
  fn test_shift_width() {
    crate::for_widths!(shift_width)
  }

  #[test]
  fn test_unsigned_top_bit() {
    let ones96 = pow2(96) - 1;
    let x = <BigUint!(96)>::from(&ones96);
    for v in 1 .. 96_u32 {
      let r = &x >> v;
      assert_eq!(r.bits(), 96 - v as usize);
      assert_eq!(r.to_bigint(), &ones96 >> v, "shift by {}", v);
    }
    let ones256 = pow2(256) - 1;
    let y = <BigUint!(256)>::from(&ones256);
    for &v in &[1_u32, 31, 32, 33, 200, 255] {
      let r = &y >> v;
      assert_eq!(r.bits(), 256 - v as usize);
      assert_eq!(r.to_bigint(), &ones256 >> v, "shift by {}", v);
    }
  }

  #[test]
  fn test_in_place() {
    let mut x = <BigInt!(70)>::from(-3_i64);
    x <<= 2;
    assert_eq!(x, -12_i64);
    x >>= 1;
    assert_eq!(x, -6_i64);
  }
}
