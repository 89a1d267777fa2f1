use std::ops::Neg;
use dynint::{Digit, DoubleDigit, Sign, BITS_PER_DIGIT};
use crate::fixed::FixedInt;

impl<S: Sign, const W: usize, const N: usize> Neg for &FixedInt<S, W, N> {
  type Output = FixedInt<S, W, N>;

  fn neg(self) -> Self::Output {
    let mut result = FixedInt::<S, W, N>::new();
    let mut carry: DoubleDigit = 1;
    for (r, &d) in result.as_slice_mut().iter_mut().zip(self.as_slice()) {
      carry += (!d) as DoubleDigit;
      *r = carry as Digit;
      carry >>= BITS_PER_DIGIT;
    }
    result.adjust_hod();
    result
  }
}

impl<S: Sign, const W: usize, const N: usize> Neg for FixedInt<S, W, N> {
  type Output = FixedInt<S, W, N>;
  fn neg(self) -> Self::Output { -&self }
}


/// Implement a compound assignment operator for every kind of right hand
/// side by borrowing a view of the left hand side and applying the dynamic
/// operator to it.  Also gives the value returning version of the operator.
macro_rules! delegate {
  ($assign:ident, $assign_method:ident, $op:ident, $op_method:ident) => {

    impl<S, S2, const W: usize, const N: usize, const WO: usize, const NO: usize>
      std::ops::$assign<&FixedInt<S2, WO, NO>> for FixedInt<S, W, N>
      where S: Sign, S2: Sign {
      fn $assign_method(&mut self, rhs: &FixedInt<S2, WO, NO>) {
        std::ops::$assign::$assign_method(&mut self.as_view_mut(), rhs.as_view())
      }
    }

    impl<S, S2, const W: usize, const N: usize, const WO: usize, const NO: usize>
      std::ops::$assign<FixedInt<S2, WO, NO>> for FixedInt<S, W, N>
      where S: Sign, S2: Sign {
      fn $assign_method(&mut self, rhs: FixedInt<S2, WO, NO>) {
        std::ops::$assign::$assign_method(&mut self.as_view_mut(), rhs.as_view())
      }
    }

    impl<S: Sign, S2: Sign, const W: usize, const N: usize>
      std::ops::$assign<dynint::DIntRef<'_, S2>> for FixedInt<S, W, N> {
      fn $assign_method(&mut self, rhs: dynint::DIntRef<'_, S2>) {
        std::ops::$assign::$assign_method(&mut self.as_view_mut(), rhs)
      }
    }

    impl<S: Sign, S2: Sign, const W: usize, const N: usize>
      std::ops::$assign<&dynint::DInt<S2>> for FixedInt<S, W, N> {
      fn $assign_method(&mut self, rhs: &dynint::DInt<S2>) {
        std::ops::$assign::$assign_method(&mut self.as_view_mut(), rhs)
      }
    }

    delegate!(@native $assign, $assign_method, i32 i64 u32 u64);

    impl<S: Sign, const W: usize, const N: usize, const WI: usize>
      std::ops::$assign<crate::native::Int<WI>> for FixedInt<S, W, N> {
      fn $assign_method(&mut self, rhs: crate::native::Int<WI>) {
        std::ops::$assign::$assign_method(&mut self.as_view_mut(), rhs.value())
      }
    }

    impl<S: Sign, const W: usize, const N: usize, const WI: usize>
      std::ops::$assign<crate::native::Uint<WI>> for FixedInt<S, W, N> {
      fn $assign_method(&mut self, rhs: crate::native::Uint<WI>) {
        std::ops::$assign::$assign_method(&mut self.as_view_mut(), rhs.value())
      }
    }

    impl<S: Sign, const W: usize, const N: usize, R> std::ops::$op<R> for FixedInt<S, W, N>
      where FixedInt<S, W, N>: std::ops::$assign<R> {
      type Output = FixedInt<S, W, N>;
      fn $op_method(mut self, rhs: R) -> Self::Output {
        std::ops::$assign::$assign_method(&mut self, rhs);
        self
      }
    }

    impl<S: Sign, const W: usize, const N: usize, R> std::ops::$op<R> for &FixedInt<S, W, N>
      where FixedInt<S, W, N>: std::ops::$assign<R> {
      type Output = FixedInt<S, W, N>;
      fn $op_method(self, rhs: R) -> Self::Output {
        let mut result = *self;
        std::ops::$assign::$assign_method(&mut result, rhs);
        result
      }
    }
  };

  (@native $assign:ident, $assign_method:ident, $($t:ty)*) => { $(
    impl<S: Sign, const W: usize, const N: usize>
      std::ops::$assign<$t> for FixedInt<S, W, N> {
      fn $assign_method(&mut self, rhs: $t) {
        std::ops::$assign::$assign_method(&mut self.as_view_mut(), rhs)
      }
    }
  )* };
}

delegate!(AddAssign, add_assign, Add, add);
delegate!(SubAssign, sub_assign, Sub, sub);
delegate!(MulAssign, mul_assign, Mul, mul);
delegate!(DivAssign, div_assign, Div, div);
delegate!(RemAssign, rem_assign, Rem, rem);
