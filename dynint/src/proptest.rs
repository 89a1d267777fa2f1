use crate::{Digit, Sign, DInt, DIntRef, DSigned, DUnsigned, digits_for};
pub use crate::{Signed, Unsigned};
use proptest::prelude::*;
use proptest::strategy::*;
use proptest::arbitrary::*;
use proptest::test_runner::*;

impl<S: Sign> ValueTree for DInt<S> {
  type Value = DInt<S>;

  fn current(&self) -> DInt<S> { self.clone() }

  fn simplify(&mut self) -> bool { false }
  fn complicate(&mut self) -> bool { false }
}

#[derive(Debug)]
pub struct DIntStrategy<S> { pub bits: usize, sign: std::marker::PhantomData<S> }

impl<S: Sign> Strategy for DIntStrategy<S> {
  type Tree  = DInt<S>;
  type Value = DInt<S>;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let n = digits_for(self.bits);
    let mut digits = Vec::<Digit>::with_capacity(n);
    let rng = runner.rng();
    for _ in 0 .. n {
      digits.push(rng.next_u32())
    }
    Ok(DInt::from_digits(self.bits, digits))
  }
}

impl<S: Sign> Arbitrary for DInt<S> {
  type Parameters = usize;
  type Strategy   = DIntStrategy<S>;

  fn arbitrary_with(bits: usize) -> Self::Strategy {
    DIntStrategy { bits: bits, sign: std::marker::PhantomData }
  }
}



pub fn do_test<T: Arbitrary>
    ( s: fn (usize) -> StrategyFor<T>
    , p: fn(T)      -> Option<bool>
    ) {
  for bits in 1 ..= 160 {
    let mut cfg: Config = <_>::default();
    cfg.cases = 64;
    cfg.failure_persistence = None;
    let mut runner = TestRunner::new(cfg);
    let strategy = s(bits);
    runner.run(&strategy, |arg| {
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
}

impl<S: Sign> DInt<S> {
  pub fn sem<'a>(&'a self) -> (DIntRef<'a, S>, num::BigInt) {
    let x = self.as_ref();
    (x, x.into())
  }
}

pub fn pow2(bits: usize) -> num::BigInt {
  num::BigInt::from(1) << bits
}

pub fn binary(bits: usize) -> StrategyFor<(DSigned,DSigned)> {
  arbitrary_with((bits,bits))
}

/// A signed and an unsigned value, usually of different widths.
pub fn binary_mixed(bits: usize) -> StrategyFor<(DSigned,DUnsigned)> {
  arbitrary_with((bits, 1 + bits * 7 % 150))
}

pub fn unary<S: Sign>(bits: usize) -> StrategyFor<DInt<S>> {
  arbitrary_with(bits)
}

pub fn word_and<S, T>(bits: usize) -> StrategyFor<(DInt<S>,T)>
  where S: Sign, T: Arbitrary<Parameters=()> {
  arbitrary_with((bits,()))
}
