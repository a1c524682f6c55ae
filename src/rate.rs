//! Difference rate: the share of tokens, relative to the longer side, that
//! are not part of the longest common subsequence.
//!
//! Rounding is fixed to "half up" and evaluated in integer arithmetic, so a
//! ratio of exactly `x.5` percent always rounds to `x + 1` regardless of
//! floating-point representation.

use align::LcsTable;

/// Percentage in `[0, 100]` of tokens not covered by the LCS.
///
/// - both sides empty: 0
/// - exactly one side empty: 100
/// - otherwise `round_half_up((max - lcs) / max * 100)` with
///   `max = max(len_a, len_b)` and `lcs` the table's bottom-right cell
///
/// `table` must have been built from sequences of length `len_a` and `len_b`.
///
/// ```
/// use variant_diff::{difference_rate, LcsTable};
///
/// let a = ["A", " ", "B"];
/// let b = ["A", " ", "C"];
/// let table = LcsTable::build(&a, &b);
/// assert_eq!(difference_rate(a.len(), b.len(), &table), 33);
/// ```
pub fn difference_rate(len_a: usize, len_b: usize, table: &LcsTable) -> u8 {
    if len_a == 0 && len_b == 0 {
        return 0;
    }
    if len_a == 0 || len_b == 0 {
        return 100;
    }
    debug_assert_eq!(table.rows(), len_a + 1, "table rows do not match A");
    debug_assert_eq!(table.cols(), len_b + 1, "table cols do not match B");

    let max_len = len_a.max(len_b);
    let unmatched = max_len - table.lcs_len();
    round_half_up_ratio(unmatched as u128 * 100, max_len as u128)
}

/// `round(numer / denom)` with halves rounded up, clamped to `u8`.
///
/// `denom` must be non-zero.
pub(crate) fn round_half_up_ratio(numer: u128, denom: u128) -> u8 {
    let rounded = (2 * numer + denom) / (2 * denom);
    u8::try_from(rounded).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sides() {
        let empty: [&str; 0] = [];
        let table = LcsTable::build(&empty, &empty);
        assert_eq!(difference_rate(0, 0, &table), 0);

        let table = LcsTable::build(&["a"], &empty);
        assert_eq!(difference_rate(1, 0, &table), 100);
        let table = LcsTable::build(&empty, &["a"]);
        assert_eq!(difference_rate(0, 1, &table), 100);
    }

    #[test]
    fn identical_is_zero_disjoint_is_hundred() {
        let a = ["x", "y", "z"];
        assert_eq!(difference_rate(3, 3, &LcsTable::build(&a, &a)), 0);

        let b = ["p", "q"];
        assert_eq!(difference_rate(3, 2, &LcsTable::build(&a, &b)), 100);
    }

    #[test]
    fn relative_to_longer_side() {
        // LCS 2, longer side 4 -> 50%.
        let a = ["a", "b"];
        let b = ["a", "b", "c", "d"];
        assert_eq!(difference_rate(2, 4, &LcsTable::build(&a, &b)), 50);
    }

    #[test]
    fn halves_round_up() {
        // 1 of 8 unmatched -> 12.5% -> 13.
        let a = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let b = ["a", "b", "c", "d", "e", "f", "g", "x"];
        assert_eq!(difference_rate(8, 8, &LcsTable::build(&a, &b)), 13);

        assert_eq!(round_half_up_ratio(1, 200), 0);
        assert_eq!(round_half_up_ratio(100, 200), 1);
        assert_eq!(round_half_up_ratio(250, 100), 3);
        assert_eq!(round_half_up_ratio(249, 100), 2);
    }

    #[test]
    fn thirds_round_to_nearest() {
        // 2 of 3 unmatched -> 66.67% -> 67.
        let a = ["a", "b", "c"];
        let b = ["a", "x", "y"];
        assert_eq!(difference_rate(3, 3, &LcsTable::build(&a, &b)), 67);
    }
}
