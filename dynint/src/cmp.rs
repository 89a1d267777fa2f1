use std::cmp::Ordering;
use crate::core::{Sign, DInt, DIntRef};
use crate::operand::{Operand, Native};

/// Compare the values of two operands, whatever their widths.
pub fn compare(lhs: Operand<'_>, rhs: Operand<'_>) -> Ordering {
  match (lhs.is_negative(), rhs.is_negative()) {
    (true, false) => return Ordering::Less,
    (false, true) => return Ordering::Greater,
    _ => ()
  }
  let len = lhs.as_slice().len().max(rhs.as_slice().len());
  for i in (0 .. len).rev() {
    match lhs.digit(i).cmp(&rhs.digit(i)) {
      Ordering::Equal => continue,
      other => return other
    }
  }
  Ordering::Equal
}

impl<S: Sign, T: Sign> PartialEq<DIntRef<'_, T>> for DIntRef<'_, S> {
  fn eq(&self, other: &DIntRef<'_, T>) -> bool {
    compare((*self).into(), (*other).into()) == Ordering::Equal
  }
}

impl<S: Sign, T: Sign> PartialOrd<DIntRef<'_, T>> for DIntRef<'_, S> {
  fn partial_cmp(&self, other: &DIntRef<'_, T>) -> Option<Ordering> {
    Some(compare((*self).into(), (*other).into()))
  }
}

impl<S: Sign, T: Sign> PartialEq<DInt<T>> for DInt<S> {
  fn eq(&self, other: &DInt<T>) -> bool { self.as_ref() == other.as_ref() }
}

impl<S: Sign, T: Sign> PartialOrd<DInt<T>> for DInt<S> {
  fn partial_cmp(&self, other: &DInt<T>) -> Option<Ordering> {
    self.as_ref().partial_cmp(&other.as_ref())
  }
}

impl<S: Sign> Eq for DIntRef<'_, S> {}
impl<S: Sign> Eq for DInt<S> {}

impl<S: Sign> Ord for DIntRef<'_, S> {
  fn cmp(&self, other: &Self) -> Ordering {
    compare((*self).into(), (*other).into())
  }
}

impl<S: Sign> Ord for DInt<S> {
  fn cmp(&self, other: &Self) -> Ordering { self.as_ref().cmp(&other.as_ref()) }
}

macro_rules! cmp_native {
  ($($t:ty)*) => { $(
    impl<S: Sign> PartialEq<$t> for DIntRef<'_, S> {
      fn eq(&self, other: &$t) -> bool {
        compare((*self).into(), Native::from(*other).operand()) == Ordering::Equal
      }
    }

    impl<S: Sign> PartialOrd<$t> for DIntRef<'_, S> {
      fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
        Some(compare((*self).into(), Native::from(*other).operand()))
      }
    }

    impl<S: Sign> PartialEq<$t> for DInt<S> {
      fn eq(&self, other: &$t) -> bool { self.as_ref() == *other }
    }

    impl<S: Sign> PartialOrd<$t> for DInt<S> {
      fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
        self.as_ref().partial_cmp(other)
      }
    }
  )* };
}

cmp_native!(i32 i64 u32 u64);
