//! Generic bit regrouping between fixed-width tuples.
//!
//! A single width-parameterized routine serves both codec directions:
//! bytes to 10-bit codes on encode (m=8, n=10) and codes back to bytes on
//! decode (m=10, n=8).

/// Result of regrouping a stream of m-bit values into n-bit values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transposed {
    /// Complete n-bit groups, in bit-stream order.
    pub tuples: Vec<u16>,
    /// The final incomplete group, left-aligned into the high bits of an
    /// n-bit value with zero-filled low bits. Zero when the input divided
    /// evenly.
    pub remainder: u16,
    /// Number of real bits held in `remainder` (0..n).
    pub bits_remaining: u32,
}

/// Regroups an ordered sequence of m-bit values into n-bit values.
///
/// Bits are taken MSB-first within each value and concatenated in input
/// order; every complete n-bit slice becomes one output tuple. Bit order is
/// preserved exactly: the concatenation of all `tuples` bits followed by
/// the `bits_remaining` high bits of `remainder` equals the input bit
/// stream, with no bits inserted or dropped.
///
/// ```
/// use base_emoji::transpose;
///
/// // (a b c d e)(f g h i j)(k l o p q) -> (a b c)(d e f)(g h i)(j k l)(o p q)
/// let t = transpose([0b10110, 0b01101, 0b00111], 5, 3);
/// assert_eq!(t.tuples, vec![0b101, 0b100, 0b110, 0b100, 0b111]);
/// assert_eq!(t.bits_remaining, 0);
/// ```
///
/// Each input value must hold at most `m` significant bits; both widths
/// must be in 1..=15.
pub fn transpose(values: impl IntoIterator<Item = u16>, m: u32, n: u32) -> Transposed {
    debug_assert!((1..=15).contains(&m) && (1..=15).contains(&n));

    let mut tuples = Vec::new();
    let mut tuple: u16 = 0;
    let mut filled: u32 = 0;

    for value in values {
        debug_assert_eq!(value >> m, 0, "value wider than {m} bits");
        let mut left = m;

        while left > 0 {
            let taken = (n - filled).min(left);
            let bits = (value >> (left - taken)) & ((1u16 << taken) - 1);
            tuple |= bits << (n - filled - taken);
            left -= taken;
            filled += taken;
            if filled == n {
                tuples.push(tuple);
                tuple = 0;
                filled = 0;
            }
        }
    }

    Transposed {
        tuples,
        remainder: tuple,
        bits_remaining: filled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_division() {
        // m=5, n=3: 15 bits divide evenly into 5 groups
        let t = transpose([0b11111, 0b00000, 0b10101], 5, 3);
        assert_eq!(t.tuples, vec![0b111, 0b110, 0b000, 0b010, 0b101]);
        assert_eq!(t.remainder, 0);
        assert_eq!(t.bits_remaining, 0);
    }

    #[test]
    fn test_widening_with_remainder() {
        // m=9, n=5: 18 bits -> 3 groups plus 3 remaining bits
        let t = transpose([0b110011001, 0b101010111], 9, 5);
        assert_eq!(t.tuples, vec![0b11001, 0b10011, 0b01010]);
        assert_eq!(t.remainder, 0b11100);
        assert_eq!(t.bits_remaining, 3);
    }

    #[test]
    fn test_narrowing_with_remainder() {
        // m=4, n=7: 12 bits -> 1 group plus 5 remaining bits
        let t = transpose([0b1011, 0b0110, 0b0101], 4, 7);
        assert_eq!(t.tuples, vec![0b1011011]);
        assert_eq!(t.remainder, 0b0010100);
        assert_eq!(t.bits_remaining, 5);
    }

    #[test]
    fn test_identity_widths() {
        let input = [0b10110101u16, 0b00001111];
        let t = transpose(input, 8, 8);
        assert_eq!(t.tuples, input);
        assert_eq!(t.bits_remaining, 0);
    }

    #[test]
    fn test_empty_input() {
        let t = transpose([], 8, 10);
        assert!(t.tuples.is_empty());
        assert_eq!(t.remainder, 0);
        assert_eq!(t.bits_remaining, 0);
    }

    #[test]
    fn test_round_trip_preserves_bits() {
        let bytes: Vec<u16> = (0u16..=255).collect();
        let codes = transpose(bytes.iter().copied(), 8, 10);
        // 2048 bits divide evenly into 10-bit codes, so no remainder
        assert_eq!(codes.bits_remaining, 0);
        let back = transpose(codes.tuples.iter().copied(), 10, 8);
        assert_eq!(back.tuples, bytes);
        assert_eq!(back.bits_remaining, 0);
    }

    #[test]
    fn test_codec_widths_remainder_pattern() {
        // 1..=4 bytes leave 8, 6, 4 and 2 bits beyond the complete codes
        for (len, expected) in [(1, 8), (2, 6), (3, 4), (4, 2)] {
            let t = transpose(std::iter::repeat_n(0xA5u16, len), 8, 10);
            assert_eq!(t.bits_remaining, expected, "{len} bytes");
        }
        let t = transpose(std::iter::repeat_n(0xA5u16, 5), 8, 10);
        assert_eq!(t.bits_remaining, 0);
    }
}
