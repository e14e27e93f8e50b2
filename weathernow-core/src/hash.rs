//! Stable string hash used to seed the synthetic weather.
//!
//! The accumulator is a 32-bit signed integer that wraps on overflow; the
//! final value is returned as its absolute magnitude. Changing the width
//! changes every derived reading, so the fixtures in the tests below are part
//! of the public contract.

/// Folds every UTF-16 code unit of `s` into `acc = acc * 31 + unit`.
///
/// Callers lowercase the input themselves. `i32::MIN` maps to `2^31`, which is
/// why the result is `u32` rather than `i32`.
pub fn string_hash(s: &str) -> u32 {
    let acc = s.encode_utf16().fold(0i32, |acc, unit| {
        acc.wrapping_shl(5)
            .wrapping_sub(acc)
            .wrapping_add(i32::from(unit))
    });

    acc.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_hashes_to_zero() {
        assert_eq!(string_hash(""), 0);
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(string_hash("london"), string_hash("london"));
    }

    #[test]
    fn literal_fixtures() {
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("hello"), 99_162_322);
        assert_eq!(string_hash("paris"), 106_437_003);
        assert_eq!(string_hash("new york"), 1_319_303_759);
    }

    #[test]
    fn negative_accumulator_is_folded_to_magnitude() {
        // wraps to -1_097_131_496
        assert_eq!(string_hash("london"), 1_097_131_496);
    }

    #[test]
    fn minimum_accumulator_does_not_overflow() {
        assert_eq!(string_hash("polygenelubricants"), 2_147_483_648);
    }

    #[test]
    fn non_ascii_input_hashes_by_utf16_units() {
        assert_eq!(string_hash("münchen"), 977_871_981);
        assert_eq!(string_hash("東京"), 841_051);
        // surrogate pair
        assert_eq!(string_hash("🌧"), 1_773_163);
    }
}
