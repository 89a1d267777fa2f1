use std::ops::Not;
use dynint::{Sign, vector};
use crate::fixed::FixedInt;

impl<S: Sign, const W: usize, const N: usize> Not for &FixedInt<S, W, N> {
  type Output = FixedInt<S, W, N>;

  fn not(self) -> Self::Output {
    let mut result = *self;
    for d in result.as_slice_mut().iter_mut() { *d = !*d }
    result.adjust_hod();
    result
  }
}

impl<S: Sign, const W: usize, const N: usize> Not for FixedInt<S, W, N> {
  type Output = FixedInt<S, W, N>;
  fn not(self) -> Self::Output { !&self }
}

delegate!(BitAndAssign, bitand_assign, BitAnd, bitand);
delegate!(BitOrAssign, bitor_assign, BitOr, bitor);
delegate!(BitXorAssign, bitxor_assign, BitXor, bitxor);


/// Reductions over the `W` bits of the value.
impl<S: Sign, const W: usize, const N: usize> FixedInt<S, W, N> {
  pub fn and_reduce(&self) -> bool { vector::and_reduce(W, self.as_slice()) }
  pub fn or_reduce(&self)  -> bool { vector::or_reduce(W, self.as_slice()) }
  pub fn xor_reduce(&self) -> bool { vector::xor_reduce(W, self.as_slice()) }

  pub fn nand_reduce(&self) -> bool { !self.and_reduce() }
  pub fn nor_reduce(&self)  -> bool { !self.or_reduce() }
  pub fn xnor_reduce(&self) -> bool { !self.xor_reduce() }
}


#[cfg(test)]
mod tests {
  use crate::fixed::{BigInt, BigUint};
  use crate::proptest::*;

  fn double_complement<const W: usize, const N: usize>() {
    run(|(x, y): (BigInt<W, N>, BigUint<W, N>)| Some(!!x == x && !!y == y))
  }

  #[test]
  fn test_double_complement() {
    crate::for_widths!(double_complement)
  }

  fn reductions<const W: usize, const N: usize>() {
    run(|x: BigUint<W, N>| {
      let ones = (0 .. W).filter(|&i| x.bit(i)).count();
      Some(x.and_reduce() == (ones == W)
        && x.or_reduce() == (ones != 0)
        && x.xor_reduce() == (ones % 2 == 1)
        && x.nand_reduce() == !x.and_reduce()
        && x.nor_reduce() == !x.or_reduce()
        && x.xnor_reduce() == !x.xor_reduce())
    })
  }

  #[test]
  fn test_reductions() {
    crate::for_widths!(reductions)
  }

  #[test]
  fn test_reduce_ignores_extension() {
    let x = <BigInt!(40)>::from(-1_i64);
    assert!(x.and_reduce());
    assert!(!x.xor_reduce());
    let y = <BigInt!(33)>::from(1_i64 << 32);
    assert!(y.or_reduce());
    assert!(y.xor_reduce());
    assert!(!y.and_reduce());
    assert!(<BigUint!(7)>::new().nor_reduce());
  }

  #[test]
  fn test_complement() {
    let x = <BigUint!(12)>::from(0xF0F_u32);
    assert_eq!((!x).to_u64(), 0x0F0);
    let y = <BigInt!(12)>::from(5_i32);
    assert_eq!(!y, -6_i64);
    let mut z = <BigInt!(70)>::from(-1_i64);
    z &= 0xFF_u32;
    z |= <BigUint!(8)>::from(0x100_u32);
    z ^= 1_i32;
    assert_eq!(z, 0xFE_i64);
  }
}
