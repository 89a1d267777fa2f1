use std::marker::PhantomData;
use dynint::{Digit, Sign};
use crate::FixedInt;
use proptest::prelude::*;
use proptest::strategy::{Strategy, ValueTree, NewTree};
use proptest::test_runner::{Config, TestRunner, TestCaseError};

impl<S: Sign, const W: usize, const N: usize> std::fmt::Debug for FixedStrategy<S, W, N> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "FixedStrategy<{}>", W)
  }
}

impl<S: Sign, const W: usize, const N: usize> ValueTree for FixedInt<S, W, N> {
  type Value = FixedInt<S, W, N>;

  fn current(&self) -> Self::Value { *self }

  fn simplify(&mut self) -> bool { false }
  fn complicate(&mut self) -> bool { false }
}

pub struct FixedStrategy<S, const W: usize, const N: usize>(PhantomData<S>);

impl<S: Sign, const W: usize, const N: usize> Strategy for FixedStrategy<S, W, N> {
  type Tree  = FixedInt<S, W, N>;
  type Value = FixedInt<S, W, N>;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let mut digits: [Digit; N] = [0; N];
    let rng = runner.rng();
    for d in digits.iter_mut() {
      *d = rng.next_u32()
    }
    Ok(FixedInt::from_digits(digits))
  }
}

impl<S: Sign, const W: usize, const N: usize> Arbitrary for FixedInt<S, W, N> {
  type Parameters = ();
  type Strategy   = FixedStrategy<S, W, N>;

  fn arbitrary_with(_: ()) -> Self::Strategy { FixedStrategy(PhantomData) }
}


/// Check a property on random inputs of one type.
pub fn run<T>(p: impl Fn(T) -> Option<bool>)
  where T: Arbitrary, T::Parameters: Default {
  let mut cfg: Config = <_>::default();
  cfg.cases = 64;
  cfg.failure_persistence = None;
  let mut runner = TestRunner::new(cfg);
  runner.run(&any::<T>(), |arg| {
    match p(arg) {
      Some(result) =>
        if result { Ok(()) }
        else {
          Err(TestCaseError::Fail("unexpected result".into()))
        },
      None => Err(TestCaseError::Reject("invalid input".into()))
    }
  }).unwrap()
}

/// Instantiate a function generic in `W` and `N` at a selection of widths
/// around the digit boundaries, and call it.
#[macro_export]
macro_rules! for_widths {
  ($f:ident) => {
    $crate::for_widths!(@ $f, 1 7 32 33 40 64 65 96 130 256)
  };
  (@ $f:ident, $($w:literal)*) => {{ $(
    $f::<$w, { $crate::digits_for($w) }>();
  )* }};
}

pub fn pow2(bits: usize) -> num::BigInt {
  num::BigInt::from(1) << bits
}
