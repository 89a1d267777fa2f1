use crate::core::{Sign, DInt};
use crate::error::{Error, Result};

/// Split off a radix prefix.  Decimal if there is none.
fn radix_of(text: &str) -> (u32, &str) {
  let lower = |p: &str| text.get(.. 2).map_or(false, |s| s.eq_ignore_ascii_case(p));
  if lower("0x") { (16, &text[2 ..]) }
  else if lower("0o") { (8, &text[2 ..]) }
  else if lower("0b") { (2, &text[2 ..]) }
  else if lower("0d") { (10, &text[2 ..]) }
  else { (10, text) }
}

impl<S: Sign> DInt<S> {

  /// Parse an integer with an optional sign and radix prefix (`0x`, `0o`,
  /// `0b`, `0d`).  Underscores are ignored.  The value wraps around if it
  /// does not fit in `bits`.
  pub fn parse(bits: usize, text: &str) -> Result<Self> {
    let (negative, rest) = match text.as_bytes().first() {
      Some(b'-') => (true, &text[1 ..]),
      Some(b'+') => (false, &text[1 ..]),
      _ => (false, text)
    };
    let (radix, digits) = radix_of(rest);
    Self::parse_digits(bits, negative, digits, radix)
  }

  /// Parse digits in the given radix, with an optional sign but no prefix.
  ///
  /// Panics if `radix` is not in `2 ..= 36`, like the native `from_str_radix`.
  pub fn from_str_radix(bits: usize, text: &str, radix: u32) -> Result<Self> {
    assert!((2 ..= 36).contains(&radix), "from_str_radix: radix {} not in 2..=36", radix);
    let (negative, digits) = match text.as_bytes().first() {
      Some(b'-') => (true, &text[1 ..]),
      Some(b'+') => (false, &text[1 ..]),
      _ => (false, text)
    };
    Self::parse_digits(bits, negative, digits, radix)
  }

  fn parse_digits(bits: usize, negative: bool, text: &str, radix: u32)
    -> Result<Self> {
    let mut value = num::BigUint::from(0_u32);
    let mut seen  = false;
    for c in text.chars() {
      if c == '_' { continue }
      let d = c.to_digit(radix).ok_or_else(|| {
        log::debug!("bad digit {:?} in {:?}", c, text);
        Error::InvalidDigit { digit: c, radix: radix }
      })?;
      value = value * radix + d;
      seen  = true;
    }
    if !seen {
      log::debug!("no digits in {:?}", text);
      return Err(Error::Empty)
    }
    let mut value = num::BigInt::from(value);
    if negative { value = -value }
    Ok(DInt::from_bigint(bits, &value))
  }
}
