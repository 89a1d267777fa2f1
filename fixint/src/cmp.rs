use std::cmp::Ordering;
use dynint::{Sign, DInt, DIntRef, Native, compare};
use crate::fixed::FixedInt;

impl<S, S2, const W: usize, const N: usize, const WO: usize, const NO: usize>
  PartialEq<FixedInt<S2, WO, NO>> for FixedInt<S, W, N>
  where S: Sign, S2: Sign {
  fn eq(&self, other: &FixedInt<S2, WO, NO>) -> bool {
    self.as_view() == other.as_view()
  }
}

impl<S, S2, const W: usize, const N: usize, const WO: usize, const NO: usize>
  PartialOrd<FixedInt<S2, WO, NO>> for FixedInt<S, W, N>
  where S: Sign, S2: Sign {
  fn partial_cmp(&self, other: &FixedInt<S2, WO, NO>) -> Option<Ordering> {
    self.as_view().partial_cmp(&other.as_view())
  }
}

impl<S: Sign, const W: usize, const N: usize> Eq for FixedInt<S, W, N> {}

impl<S: Sign, const W: usize, const N: usize> Ord for FixedInt<S, W, N> {
  fn cmp(&self, other: &Self) -> Ordering {
    compare(self.as_view().into(), other.as_view().into())
  }
}

impl<S: Sign, S2: Sign, const W: usize, const N: usize> PartialEq<DInt<S2>> for FixedInt<S, W, N> {
  fn eq(&self, other: &DInt<S2>) -> bool { self.as_view() == other.as_ref() }
}

impl<S: Sign, S2: Sign, const W: usize, const N: usize>
  PartialEq<DIntRef<'_, S2>> for FixedInt<S, W, N> {
  fn eq(&self, other: &DIntRef<'_, S2>) -> bool { self.as_view() == *other }
}

macro_rules! cmp_native {
  ($($t:ty)*) => { $(
    impl<S: Sign, const W: usize, const N: usize> PartialEq<$t> for FixedInt<S, W, N> {
      fn eq(&self, other: &$t) -> bool {
        compare(self.as_view().into(), Native::from(*other).operand()) == Ordering::Equal
      }
    }

    impl<S: Sign, const W: usize, const N: usize> PartialOrd<$t> for FixedInt<S, W, N> {
      fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
        Some(compare(self.as_view().into(), Native::from(*other).operand()))
      }
    }
  )* };
}

cmp_native!(i32 i64 u32 u64);


#[cfg(test)]
mod tests {
  use crate::fixed::{BigInt, BigUint};
  use crate::proptest::*;

  #[test]
  fn test_across_widths() {
    assert_eq!(<BigInt!(8)>::from(-3_i32), <BigInt!(200)>::from(-3_i32));
    assert_ne!(<BigInt!(8)>::from(-1_i32), <BigUint!(8)>::from(255_u32));
    assert!(<BigInt!(8)>::from(-1_i32) < <BigUint!(2)>::from(0_u32));
    assert!(<BigUint!(70)>::from(u64::MAX) > i64::MAX);
    assert!(<BigInt!(3)>::from(3_i32) < 4_u32);
  }

  fn order<const W: usize, const N: usize>() {
    run(|(x, y): (BigInt<W, N>, BigUint<65, 3>)| {
      let (a, b) = (x.to_bigint(), y.to_bigint());
      Some(x.partial_cmp(&y) == Some(a.cmp(&b))
        && x.cmp(&x) == std::cmp::Ordering::Equal
        && (x == y) == (a == b))
    })
  }

  #[test]
  fn test_order() {
    crate::for_widths!(order)
  }
}
