//! Bounded and derived values built from the raw word stream.
//!
//! [`GeneratorExt`] is implemented for every [`Generator`], including
//! `dyn Generator`, so any algorithm gets unbiased ranged integers, floats in
//! several interval conventions, booleans, byte fills and shuffles.
//!
//! ## Range Conventions
//!
//! The `*_between(inner, outer)` draws treat `inner` as inclusive and
//! `outer` as exclusive. When `outer < inner` the bounds are swapped rather
//! than rejected, so the result lies in `[outer, inner)` and the same word
//! stream gives the same values as the corrected call.
//!
//! ## Bias
//!
//! Integer ranges use Lemire's widening multiply with rejection, so every
//! value in a range of size `n` has probability exactly `1/n`.

use crate::generator::Generator;

/// 2^-53, the spacing of `f64` values produced by [`GeneratorExt::next_f64`].
const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// 2^-24, the spacing of `f32` values produced by [`GeneratorExt::next_f32`].
const F32_UNIT: f32 = 1.0 / (1u32 << 24) as f32;

/// Derived draws available on every generator.
///
/// # Examples
///
/// ```rust
/// use prng_core::{GeneratorExt, MizuchiRandom};
///
/// let mut rng = MizuchiRandom::with_seed(42);
///
/// let die = rng.next_i64_between(1, 7);
/// assert!((1..=6).contains(&die));
///
/// let p = rng.next_exclusive_f64();
/// assert!(p > 0.0 && p < 1.0);
/// ```
pub trait GeneratorExt: Generator {
    /// Returns the top `bits` bits of one word (0 for `bits == 0`, a full
    /// word for `bits >= 64`). Always consumes a word.
    #[inline]
    fn next_bits(&mut self, bits: u32) -> u64 {
        let word = self.next_word();
        match bits {
            0 => 0,
            1..=63 => word >> (64 - bits),
            _ => word,
        }
    }

    /// Returns a uniform value in `[0, bound)`, or 0 when `bound == 0`.
    fn next_u64_below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        let mut product = u128::from(self.next_word()) * u128::from(bound);
        let mut low = product as u64;
        if low < bound {
            // 2^64 mod bound: products whose low half falls below this are
            // the surplus that would bias the high half.
            let threshold = bound.wrapping_neg() % bound;
            while low < threshold {
                product = u128::from(self.next_word()) * u128::from(bound);
                low = product as u64;
            }
        }
        (product >> 64) as u64
    }

    /// Returns a uniform value between `inner` (inclusive) and `outer`
    /// (exclusive); see the module docs for inverted bounds.
    fn next_u64_between(&mut self, inner: u64, outer: u64) -> u64 {
        let (low, high) = if outer < inner { (outer, inner) } else { (inner, outer) };
        low + self.next_u64_below(high - low)
    }

    /// Returns a uniform value between `inner` (inclusive) and `outer`
    /// (exclusive); see the module docs for inverted bounds.
    fn next_i64_between(&mut self, inner: i64, outer: i64) -> i64 {
        let (low, high) = if outer < inner { (outer, inner) } else { (inner, outer) };
        let span = high.wrapping_sub(low) as u64;
        low.wrapping_add(self.next_u64_below(span) as i64)
    }

    /// Returns a uniform value between 0 (inclusive) and `bound` (exclusive).
    /// A negative bound yields values in `[bound, 0)`.
    #[inline]
    fn next_i64_below(&mut self, bound: i64) -> i64 {
        self.next_i64_between(0, bound)
    }

    /// Returns a uniform value in `[0, bound)`, or 0 when `bound == 0`.
    #[inline]
    fn next_u32_below(&mut self, bound: u32) -> u32 {
        self.next_u64_below(u64::from(bound)) as u32
    }

    /// 32-bit form of [`next_u64_between`](GeneratorExt::next_u64_between).
    #[inline]
    fn next_u32_between(&mut self, inner: u32, outer: u32) -> u32 {
        self.next_u64_between(u64::from(inner), u64::from(outer)) as u32
    }

    /// 32-bit form of [`next_i64_between`](GeneratorExt::next_i64_between).
    #[inline]
    fn next_i32_between(&mut self, inner: i32, outer: i32) -> i32 {
        self.next_i64_between(i64::from(inner), i64::from(outer)) as i32
    }

    /// 32-bit form of [`next_i64_below`](GeneratorExt::next_i64_below).
    #[inline]
    fn next_i32_below(&mut self, bound: i32) -> i32 {
        self.next_i32_between(0, bound)
    }

    /// Returns a uniform `f64` in `[0, 1)` with 53 bits of precision.
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (self.next_word() >> 11) as f64 * F64_UNIT
    }

    /// Returns a uniform `f32` in `[0, 1)` with 24 bits of precision.
    #[inline]
    fn next_f32(&mut self) -> f32 {
        (self.next_word() >> 40) as f32 * F32_UNIT
    }

    /// Returns a uniform `f64` in `[0, 1]`, both ends included.
    #[inline]
    fn next_inclusive_f64(&mut self) -> f64 {
        self.next_u64_below((1u64 << 53) + 1) as f64 * F64_UNIT
    }

    /// Returns a uniform `f64` between `inner` (inclusive) and `outer`
    /// (exclusive). Inverted bounds are swapped, as for the integer draws.
    #[inline]
    fn next_f64_between(&mut self, inner: f64, outer: f64) -> f64 {
        let (low, high) = if outer < inner { (outer, inner) } else { (inner, outer) };
        low + self.next_f64() * (high - low)
    }

    /// Returns an `f64` in the open interval `(0, 1)`.
    ///
    /// The IEEE-754 bits are assembled directly: the exponent is
    /// `1022 - trailing_zeros(word)`, which picks `[1/2, 1)` with probability
    /// 1/2, `[1/4, 1/2)` with probability 1/4 and so on, and the 52 high bits
    /// of the same word fill the mantissa. The smallest result is 2^-65 (all
    /// zero word) and the largest is `1 - 2^-53`, so neither 0.0 nor 1.0 can
    /// occur, and values near zero keep full relative precision.
    #[inline]
    fn next_exclusive_f64(&mut self) -> f64 {
        let bits = self.next_word();
        let exponent = 1022 - u64::from(bits.trailing_zeros());
        f64::from_bits((exponent << 52) | (bits >> 12))
    }

    /// Returns an `f32` in the open interval `(0, 1)`.
    ///
    /// Same construction as [`next_exclusive_f64`](GeneratorExt::next_exclusive_f64)
    /// with exponent `126 - trailing_zeros(word)` and 23 mantissa bits; the
    /// range is `[2^-65, 1 - 2^-24]`.
    #[inline]
    fn next_exclusive_f32(&mut self) -> f32 {
        let bits = self.next_word();
        let exponent = 126 - bits.trailing_zeros();
        f32::from_bits((exponent << 23) | (bits >> 41) as u32)
    }

    /// Returns `true` or `false` with equal probability.
    #[inline]
    fn next_bool(&mut self) -> bool {
        (self.next_word() as i64) < 0
    }

    /// Fills `dest` with random bytes, eight per word (little-endian). A
    /// trailing partial chunk consumes one whole word.
    fn next_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    /// Shuffles `items` in place with the Fisher-Yates algorithm.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_u64_below(i as u64 + 1) as usize;
            items.swap(i, j);
        }
    }

    /// Returns a uniformly chosen element, or `None` for an empty slice.
    fn random_element<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.next_u64_below(items.len() as u64) as usize;
        items.get(index)
    }
}

impl<G: Generator + ?Sized> GeneratorExt for G {}
