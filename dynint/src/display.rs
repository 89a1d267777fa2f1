use std::fmt;
use crate::core::{Sign, DInt, DIntRef};

impl<S: Sign> fmt::Display for DIntRef<'_, S> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let x = self.to_bigint();
    f.pad_integral(x.sign() != num::bigint::Sign::Minus, "", &x.magnitude().to_string())
  }
}

impl<S: Sign> fmt::Binary for DIntRef<'_, S> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut s = String::with_capacity(self.bits());
    for b in self.iter_bits_msb() {
      s.push(if b { '1' } else { '0' })
    }
    f.pad_integral(true, "0b", &s)
  }
}

impl<S: Sign> DIntRef<'_, S> {
  /// Print the bit pattern, one digit per 4 bits, most significant first.
  fn fmt_hex(&self, f: &mut fmt::Formatter, upper: bool) -> fmt::Result {
    let digits = (self.bits() + 3) / 4;
    let mut s  = self.to_pattern().to_str_radix(16);
    if upper { s.make_ascii_uppercase() }
    let pad = "0".repeat(digits - s.len());
    f.pad_integral(true, "0x", &(pad + &s))
  }
}

impl<S: Sign> fmt::LowerHex for DIntRef<'_, S> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { self.fmt_hex(f, false) }
}

impl<S: Sign> fmt::UpperHex for DIntRef<'_, S> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { self.fmt_hex(f, true) }
}


macro_rules! fmt_owned {
  ($($trait:ident)*) => { $(
    impl<S: Sign> fmt::$trait for DInt<S> {
      fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::$trait::fmt(&self.as_ref(), f)
      }
    }
  )* };
}

fmt_owned!(Display Binary LowerHex UpperHex);


#[cfg(test)]
mod test {
  use crate::{DSigned, DUnsigned};
  use crate::proptest::*;

  #[test]
  fn decimal() {
    do_test(unary::<Signed>, |x: DSigned| {
      let (_, a) = x.sem();
      Some(format!("{}", x) == a.to_string())
    })
  }

  #[test]
  fn patterns() {
    let x = DSigned::from_i64(10, -1);
    assert_eq!(format!("{}", x), "-1");
    assert_eq!(format!("{:b}", x), "1111111111");
    assert_eq!(format!("{:x}", x), "3ff");
    assert_eq!(format!("{:#X}", x), "0x3FF");

    let y = DUnsigned::from_u64(36, 0xAB);
    assert_eq!(format!("{:x}", y), "0000000ab");
    assert_eq!(format!("{:>6}", DUnsigned::from_u64(8, 42)), "    42");
    assert_eq!(format!("{:?}", DSigned::from_i64(70, -3)), "DSigned<70>(-3)");
  }
}
