//! Operations on raw digit slices.
//!
//! These do not own storage and do not check their inputs beyond the
//! `contract!` assertions: lengths and widths are the caller's business.

use crate::core::{Digit, BITS_PER_DIGIT, hod_for};

/// Mask selecting the `used` low bits of a digit, `1 <= used <= BITS_PER_DIGIT`.
pub fn low_mask(used: usize) -> Digit {
  if used >= BITS_PER_DIGIT { !0 } else { (1 << used) - 1 }
}

/// Number of bits of the value that live in the top digit.
fn top_bits(width: usize) -> usize {
  width - hod_for(width) * BITS_PER_DIGIT
}

/// Copy the low digits that both slices have in common.
/// Does not touch the rest of `dst`.  Returns the number of copied digits.
pub fn copy(src: &[Digit], dst: &mut [Digit]) -> usize {
  let n = src.len().min(dst.len());
  dst[.. n].copy_from_slice(&src[.. n]);
  n
}

/// Set every digit in `dst` to `value`.
/// Use `!0` to sign extend a negative value and `0` otherwise.
pub fn fill(value: Digit, dst: &mut [Digit]) {
  for d in dst.iter_mut() { *d = value }
}

/// The digit that continues a normalized signed value past its top digit.
pub fn sign_fill(digits: &[Digit]) -> Digit {
  match digits.last() {
    Some(&d) if (d as i32) < 0 => !0,
    _ => 0
  }
}

/// Is bit `width - 1` set?
pub fn is_negative(width: usize, digits: &[Digit]) -> bool {
  let bit = (width - 1) % BITS_PER_DIGIT;
  (digits[hod_for(width)] >> bit) & 1 == 1
}

/// Make the bits of the top digit that are above `width` copies of bit
/// `width - 1` (`signed`), or 0 (unsigned).
pub fn adjust_hod(width: usize, digits: &mut [Digit], signed: bool) {
  let used = top_bits(width);
  if used == BITS_PER_DIGIT { return }
  let top = &mut digits[hod_for(width)];
  if signed {
    let pad = BITS_PER_DIGIT - used;
    *top = (((*top << pad) as i32) >> pad) as Digit;
  } else {
    *top &= low_mask(used);
  }
}

/// Shift the `width`-bit value in `src` right by `shift` bits, filling with
/// its sign, and store as many digits of the result as fit in `dst`.
/// The top digit of `dst` is not normalized.
pub fn extract(src: &[Digit], dst: &mut [Digit], width: usize, shift: usize) {
  crate::contract!(shift < width);
  crate::contract!(src.len() > hod_for(width));

  let fill   = sign_fill(&src[..= hod_for(width)]);
  let at     = |i: usize| if i < src.len() { src[i] } else { fill };
  let skip   = shift / BITS_PER_DIGIT;
  let off    = shift % BITS_PER_DIGIT;

  for (i, out) in dst.iter_mut().enumerate() {
    let lo = at(skip + i);
    *out =
      if off == 0 { lo }
      else { (lo >> off) | (at(skip + i + 1) << (BITS_PER_DIGIT - off)) };
  }
}

/// Are all bits in `[0, width)` set?
pub fn and_reduce(width: usize, digits: &[Digit]) -> bool {
  let hod  = hod_for(width);
  let mask = low_mask(top_bits(width));
  digits[.. hod].iter().all(|&d| d == !0) && digits[hod] & mask == mask
}

/// Is any bit in `[0, width)` set?
pub fn or_reduce(width: usize, digits: &[Digit]) -> bool {
  let hod  = hod_for(width);
  let mask = low_mask(top_bits(width));
  digits[.. hod].iter().any(|&d| d != 0) || digits[hod] & mask != 0
}

/// Is an odd number of bits in `[0, width)` set?
pub fn xor_reduce(width: usize, digits: &[Digit]) -> bool {
  let hod  = hod_for(width);
  let mask = low_mask(top_bits(width));
  let ones = digits[.. hod].iter().map(|d| d.count_ones()).sum::<u32>()
           + (digits[hod] & mask).count_ones();
  ones % 2 == 1
}
