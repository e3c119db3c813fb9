//! Fixed-width formatters for PDB numeric columns.
//!
//! Both formatters deliberately reproduce classic PDB-format behavior:
//! values that overflow their column are silently truncated rather than
//! reported, because the fixed-column format has no way to widen a field.

/// Formats a decimal string into a fixed-width, fixed-precision PDB column.
///
/// The input is trimmed, given a decimal point if it lacks one, and brought
/// to exactly `precision` fractional digits: short values are zero-padded,
/// long values are rounded half-up algebraically. Only the first
/// `precision + 1` fractional digits take part in the rounding (half-up
/// never needs more), which keeps the scaled arithmetic within `i64` no
/// matter how many digits the input carries. A result of exactly zero drops
/// a leftover minus sign. The final string is left-padded with spaces to
/// `width`, or truncated on the right when it does not fit; a `width` of
/// zero skips the width adjustment.
pub fn format_fixed(raw: &str, width: usize, precision: usize) -> String {
    let mut result = raw.trim_matches(' ').to_string();
    if !result.contains('.') {
        result.push('.');
    }
    let dot = result.find('.').unwrap();
    let target = dot + precision + 1;
    if result.len() < target {
        let missing = target - result.len();
        result.extend(std::iter::repeat('0').take(missing));
    } else if result.len() > target {
        let frac_digits = take_front(&result[dot + 1..], precision + 1);
        let mut scale: i64 = 1;
        for _ in 0..frac_digits.chars().count() {
            scale *= 10;
        }
        let int_part: i64 = result[..dot].parse().unwrap_or(0);
        let mut frac_part: i64 = frac_digits.trim_start_matches('0').parse().unwrap_or(0);
        if result.starts_with('-') {
            frac_part = -frac_part;
        }
        let rounded = ((int_part * scale) as f64 + frac_part as f64 + 0.5) / scale as f64;
        result = format!("{:.*}", precision, rounded);
    }
    if result.starts_with("-0.") {
        let dot = result.find('.').unwrap();
        if result[dot + 1..].bytes().all(|b| b == b'0') {
            result.remove(0);
        }
    }
    if width > 0 {
        if result.chars().count() > width {
            result = take_front(&result, width).to_string();
        } else {
            result = format!("{result:>width$}");
        }
    }
    result
}

/// Formats an anisotropic tensor component as the signed 7-character integer
/// of an `ANISOU` column.
///
/// A value carrying a decimal point is interpreted as a real U-value and
/// scaled by 10,000, rounding half-to-even when the digits beyond the fourth
/// decimal place are exactly a trailing 5 (and half away from zero
/// otherwise). A value without a decimal point is taken to be an
/// already-scaled integer and passes through unchanged apart from width
/// adjustment; this is what makes the formatter idempotent on columns that
/// are already correctly formatted. Overflow keeps the most-significant
/// seven characters.
pub fn format_anisou(raw: &str) -> String {
    let trimmed = raw.trim_matches(' ');
    let Some(dot) = trimmed.find('.') else {
        let source = if trimmed.is_empty() { "0" } else { trimmed };
        let mut out = format!("{source:>7}");
        out.truncate(7);
        return out;
    };

    let negative = trimmed.starts_with('-');
    let magnitude = trimmed.trim_start_matches(['-', '+']);
    let dot = dot - (trimmed.len() - magnitude.len());
    let int_part: i64 = magnitude[..dot].parse().unwrap_or(0);
    let frac = &magnitude[dot + 1..];

    let mut value = if frac.chars().count() > 4 {
        let kept = take_front(frac, 4);
        let head: i64 = kept.parse().unwrap_or(0);
        let mut scaled = int_part * 10_000 + head;
        let tail = &frac[kept.len()..];
        if tail.trim_end_matches('0') == "5" {
            // exact tie: round to even
            if head % 2 != 0 {
                scaled += 1;
            }
        } else if tail.as_bytes().first().is_some_and(|&b| b.is_ascii_digit() && b >= b'5') {
            scaled += 1;
        }
        scaled
    } else {
        let mut fraction: i64 = frac.parse().unwrap_or(0);
        for _ in 0..(4 - frac.chars().count()) {
            fraction *= 10;
        }
        int_part * 10_000 + fraction
    };
    if negative {
        value = -value;
    }

    let mut out = format!("{value:>7}");
    out.truncate(7);
    out
}

/// First `n` characters of `value`, or the whole string when shorter.
pub fn take_front(value: &str, n: usize) -> &str {
    match value.char_indices().nth(n) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// Last `n` characters of `value`, or the whole string when shorter.
pub fn take_back(value: &str, n: usize) -> &str {
    let count = value.chars().count();
    if count <= n {
        return value;
    }
    match value.char_indices().nth(count - n) {
        Some((idx, _)) => &value[idx..],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_fixed_rounds_and_pads_to_width() {
        assert_eq!(format_fixed("1.23456", 8, 3), "   1.235");
        assert_eq!(format_fixed("58.39", 9, 3), "   58.390");
        assert_eq!(format_fixed("90", 7, 2), "  90.00");
    }

    #[test]
    fn format_fixed_zero_pads_short_fractions() {
        assert_eq!(format_fixed("1.2", 8, 3), "   1.200");
        assert_eq!(format_fixed("-4.5", 8, 3), "  -4.500");
    }

    #[test]
    fn format_fixed_strips_sign_from_rounded_zero() {
        assert_eq!(format_fixed("-0.0001", 8, 3), "   0.000");
        assert_eq!(format_fixed("-0.0009", 8, 3), "  -0.001");
        assert_eq!(format_fixed("-0.001", 8, 3), "  -0.001");
    }

    #[test]
    fn format_fixed_handles_arbitrarily_long_fractions() {
        assert_eq!(format_fixed("1.1234567890123456789012345", 8, 3), "   1.123");
        assert_eq!(format_fixed("-0.00000000000000000000000001", 8, 3), "   0.000");
        assert_eq!(format_fixed("99.99999999999999999999999999", 8, 3), " 100.000");
    }

    #[test]
    fn format_fixed_degrades_gracefully_on_non_numeric_input() {
        assert_eq!(format_fixed("ééééé", 9, 3), "ééééé.000");
        assert_eq!(format_fixed("ééééé.ééééé", 5, 3), "0.000");
    }

    #[test]
    fn format_fixed_truncates_on_overflow_instead_of_failing() {
        // documented lossy behavior of the fixed-column format
        assert_eq!(format_fixed("123456789.123", 8, 3), "12345678");
        assert_eq!(format_fixed("12345.678", 0, 3).len(), 9);
    }

    #[test]
    fn format_fixed_round_trips_within_half_ulp() {
        for raw in ["0.1234", "12.9995", "-3.0004", "7.77777", "100.5"] {
            let precision = 3;
            let formatted = format_fixed(raw, 10, precision);
            let back: f64 = formatted.trim().parse().unwrap();
            let original: f64 = raw.parse().unwrap();
            // exact ties like 12.9995 land on the bound itself, so allow
            // a float epsilon on top of the half-ulp tolerance
            assert!(
                (back - original).abs() <= 0.5 * 10f64.powi(-(precision as i32)) + 1e-9,
                "{raw} -> {formatted}"
            );
        }
    }

    #[test]
    fn format_anisou_scales_real_values_by_ten_thousand() {
        assert_eq!(format_anisou("0.1234"), "   1234");
        assert_eq!(format_anisou("1.0"), "  10000");
        assert_eq!(format_anisou("-0.0056"), "    -56");
        assert_eq!(format_anisou("0.12"), "   1200");
    }

    #[test]
    fn format_anisou_breaks_exact_ties_to_even() {
        // 0.12345 -> 1234.5, last kept digit even: stays 1234
        assert_eq!(format_anisou("0.12345"), "   1234");
        // 0.12355 -> 1235.5, last kept digit odd: becomes 1236
        assert_eq!(format_anisou("0.12355"), "   1236");
        // non-tie remainders round half away from zero
        assert_eq!(format_anisou("0.123456"), "   1235");
        assert_eq!(format_anisou("0.123449"), "   1234");
    }

    #[test]
    fn format_anisou_is_idempotent_on_formatted_columns() {
        for column in ["   1234", "  10000", "    -56", "      0", "-123456"] {
            assert_eq!(format_anisou(column), column);
        }
    }

    #[test]
    fn format_anisou_degrades_gracefully_on_non_numeric_input() {
        assert_eq!(format_anisou("0.aaaé"), "      0");
        assert_eq!(format_anisou("0.ééééé"), "      0");
        assert_eq!(format_anisou("é.5"), "   5000");
    }

    #[test]
    fn format_anisou_keeps_most_significant_digits_on_overflow() {
        let out = format_anisou("12345.6789");
        assert_eq!(out.len(), 7);
        assert_eq!(out, "1234567");
    }
}
