use dynint::{Digit, Sign, DInt, DIntRef, vector};
use crate::fixed::FixedInt;
use crate::native::{Int, Uint};

/// Overwrite a value with another one, converting between widths.
///
/// Wider sources are truncated; narrower ones are extended with their sign
/// (signed sources) or with 0 (unsigned sources).
pub trait Assign<T> {
  fn assign(&mut self, value: T);
}

impl<S, S2, const W: usize, const N: usize, const WO: usize, const NO: usize>
  Assign<&FixedInt<S2, WO, NO>> for FixedInt<S, W, N>
  where S: Sign, S2: Sign {

  fn assign(&mut self, value: &FixedInt<S2, WO, NO>) {
    if W == WO && S::SIGNED == S2::SIGNED {
      vector::copy(value.as_slice(), self.as_slice_mut());
      return
    }
    self.as_view_mut().assign(value.as_view().into())
  }
}

impl<S: Sign, S2: Sign, const W: usize, const N: usize>
  Assign<DIntRef<'_, S2>> for FixedInt<S, W, N> {
  fn assign(&mut self, value: DIntRef<'_, S2>) {
    self.as_view_mut().assign(value.into())
  }
}

impl<S: Sign, S2: Sign, const W: usize, const N: usize>
  Assign<&DInt<S2>> for FixedInt<S, W, N> {
  fn assign(&mut self, value: &DInt<S2>) { self.assign(value.as_ref()) }
}

impl<S: Sign, const W: usize, const N: usize> Assign<&num::BigInt> for FixedInt<S, W, N> {
  /// Wraps around if the value does not fit.
  fn assign(&mut self, value: &num::BigInt) {
    self.as_view_mut().assign_bigint(value)
  }
}


impl<S: Sign, const W: usize, const N: usize> FixedInt<S, W, N> {

  /// Store a native value: `lo` goes in digit 0, `hi` (for 64-bit sources)
  /// in digit 1, and the rest is filled with `fill`.
  fn assign_native(&mut self, lo: Digit, hi: Option<Digit>, fill: Digit) {
    let ds = self.as_slice_mut();
    ds[0] = lo;
    let mut next = 1;
    if let Some(hi) = hi {
      if ds.len() > 1 { ds[1] = hi; next = 2 }
    }
    if ds.len() > next { vector::fill(fill, &mut ds[next ..]) }
    self.adjust_hod();
  }
}

impl<S: Sign, const W: usize, const N: usize> Assign<i64> for FixedInt<S, W, N> {
  fn assign(&mut self, value: i64) {
    let fill = if value < 0 { !0 } else { 0 };
    self.assign_native(value as Digit, Some((value >> 32) as Digit), fill)
  }
}

impl<S: Sign, const W: usize, const N: usize> Assign<u64> for FixedInt<S, W, N> {
  fn assign(&mut self, value: u64) {
    self.assign_native(value as Digit, Some((value >> 32) as Digit), 0)
  }
}

impl<S: Sign, const W: usize, const N: usize> Assign<i32> for FixedInt<S, W, N> {
  fn assign(&mut self, value: i32) {
    let fill = if value < 0 { !0 } else { 0 };
    self.assign_native(value as Digit, None, fill)
  }
}

impl<S: Sign, const W: usize, const N: usize> Assign<u32> for FixedInt<S, W, N> {
  fn assign(&mut self, value: u32) { self.assign_native(value, None, 0) }
}

impl<S: Sign, const W: usize, const N: usize, const WI: usize>
  Assign<Int<WI>> for FixedInt<S, W, N> {
  fn assign(&mut self, value: Int<WI>) { self.assign(value.value()) }
}

impl<S: Sign, const W: usize, const N: usize, const WI: usize>
  Assign<Uint<WI>> for FixedInt<S, W, N> {
  fn assign(&mut self, value: Uint<WI>) { self.assign(value.value()) }
}


// Every assignment also gives a conversion.
macro_rules! from_assign {
  ($($t:ty)*) => { $(
    impl<S: Sign, const W: usize, const N: usize> From<$t> for FixedInt<S, W, N> {
      fn from(value: $t) -> Self {
        let mut result = Self::new();
        result.assign(value);
        result
      }
    }
  )* };
}

from_assign!(i32 i64 u32 u64 &num::BigInt);

impl<S, S2, const W: usize, const N: usize, const WO: usize, const NO: usize>
  From<&FixedInt<S2, WO, NO>> for FixedInt<S, W, N>
  where S: Sign, S2: Sign {
  fn from(value: &FixedInt<S2, WO, NO>) -> Self {
    let mut result = Self::new();
    result.assign(value);
    result
  }
}

impl<S: Sign, S2: Sign, const W: usize, const N: usize>
  From<DIntRef<'_, S2>> for FixedInt<S, W, N> {
  fn from(value: DIntRef<'_, S2>) -> Self {
    let mut result = Self::new();
    result.assign(value);
    result
  }
}

impl<S: Sign, S2: Sign, const W: usize, const N: usize>
  From<&DInt<S2>> for FixedInt<S, W, N> {
  fn from(value: &DInt<S2>) -> Self { Self::from(value.as_ref()) }
}

impl<S: Sign, const W: usize, const N: usize, const WI: usize>
  From<Int<WI>> for FixedInt<S, W, N> {
  fn from(value: Int<WI>) -> Self { Self::from(value.value()) }
}

impl<S: Sign, const W: usize, const N: usize, const WI: usize>
  From<Uint<WI>> for FixedInt<S, W, N> {
  fn from(value: Uint<WI>) -> Self { Self::from(value.value()) }
}

impl<S: Sign, const W: usize, const N: usize> From<&FixedInt<S, W, N>> for num::BigInt {
  fn from(value: &FixedInt<S, W, N>) -> Self { value.to_bigint() }
}


#[cfg(test)]
mod tests {
  use crate::{Assign, Int, Uint};
  use crate::fixed::BigInt;
  use crate::proptest::*;

  fn fits(v: i64, w: usize) -> bool {
    w >= 64 || (v >= -(1_i64 << (w - 1)) && v < (1_i64 << (w - 1)))
  }

  fn round_trip<const W: usize, const N: usize>() {
    for &v in &[0_i64, 1, -1, 7, -7, 1 << 31, -(1 << 31), 1 << 40, -(1 << 40),
                i64::MAX, i64::MIN] {
      if fits(v, W) {
        assert_eq!(BigInt::<W, N>::from(v).to_i64(), v, "width {}", W);
      }
    }
  }

  #[test]
  fn test_round_trip() {
    crate::for_widths!(round_trip)
  }

  // Any in-range value, not just the corner cases above.
  fn round_trip_random<const W: usize, const N: usize>() {
    for _ in 0 .. 2000 {
      let v = rand::random::<i64>() >> (64 - W.min(64));
      assert_eq!(BigInt::<W, N>::from(v).to_i64(), v, "width {}", W);
    }
  }

  #[test]
  fn test_round_trip_random() {
    crate::for_widths!(round_trip_random)
  }

  #[test]
  fn test_mixed_width() {
    let a = <BigInt!(16)>::from(-5_i64);
    let b = <BigInt!(64)>::from(&a);
    assert_eq!(b.to_i64(), -5);
    let c = <BigInt!(8)>::from(&a);
    assert_eq!(c.to_i64(), -5);
    let d = <BigInt!(8)>::from(300_i64);
    assert_eq!(d.to_i64(), 44);
    let e = <BigInt!(130)>::from(&<BigUint!(64)>::from(u64::MAX));
    assert_eq!(e.to_bigint(), num::BigInt::from(u64::MAX));
    let f = <BigUint!(100)>::from(&a);
    assert_eq!(f.to_bigint(), (num::BigInt::from(1) << 100) - 5);
  }

  #[test]
  fn test_native_fill() {
    let mut x = <BigInt!(96)>::new();
    x.assign(-2_i32);
    assert_eq!(x.as_slice(), &[0xFFFF_FFFE, !0, !0]);
    x.assign(u32::MAX);
    assert_eq!(x.as_slice(), &[!0, 0, 0]);
    x.assign(-(1_i64 << 32));
    assert_eq!(x.as_slice(), &[0, !0, !0]);

    let mut y = <BigInt!(20)>::new();
    y.assign(-1_i64);
    assert_eq!(y.as_slice(), &[!0]);
    y.assign(0xFFFFF_u32);
    assert_eq!(y.to_i64(), -1);

    let mut z = <BigUint!(20)>::new();
    z.assign(-1_i32);
    assert_eq!(z.as_slice(), &[0xFFFFF]);
  }

  #[test]
  fn test_wrappers() {
    assert_eq!(<BigInt!(70)>::from(Int::<5>::new(-3)).to_i64(), -3);
    assert_eq!(<BigInt!(70)>::from(Uint::<5>::new(31)).to_i64(), 31);
  }

  fn through_dynamic<const W: usize, const N: usize>() {
    run(|x: BigInt<W, N>| {
      let y = <BigInt!(77)>::from(&x.to_dint());
      let z = <BigInt!(77)>::from(&x.to_bigint());
      Some(y.as_slice() == z.as_slice())
    })
  }

  #[test]
  fn test_dynamic() {
    crate::for_widths!(through_dynamic)
  }
}
