//! Human readable magnitudes ("1.5M", "3 billion"), spelled numbers and ordinals.
//!
//! A unit ladder is a list of `(exponent, label)` pairs. `summarize` snaps a
//! number down to the nearest exponent that is a multiple of three and
//! appends the label registered for it. Anything at or beyond 10^15 is
//! expressed as a multiple of the largest label, so values past the end of
//! the ladder still render ("1000Q", "1KQ").

use crate::format::format;

/// Ladder used by `abbreviate` and by `summarize` when given no units.
pub const ABBREVIATED_UNITS: &[(i32, &str)] = &[(3, "K"), (6, "M"), (9, "B"), (12, "T"), (15, "Q")];

/// Ladder used by `for_humans` when not abbreviating.
pub const FULL_UNITS: &[(i32, &str)] = &[
    (3, " thousand"),
    (6, " million"),
    (9, " billion"),
    (12, " trillion"),
    (15, " quadrillion"),
];

fn unit_for<'a>(units: &[(i32, &'a str)], exponent: i32) -> Option<&'a str> {
    units
        .iter()
        .find(|(unit_exponent, _)| *unit_exponent == exponent)
        .map(|(_, label)| *label)
}

/// Converts the number to its human readable equivalent using `units`.
///
/// An empty `units` slice falls back to [`ABBREVIATED_UNITS`]. `max_precision`
/// takes priority over `precision`.
pub fn summarize(
    number: f64,
    precision: usize,
    max_precision: Option<usize>,
    units: &[(i32, &str)],
) -> String {
    let units = if units.is_empty() { ABBREVIATED_UNITS } else { units };

    if !number.is_finite() {
        return format(number, None, None, None);
    }

    if number == 0.0 {
        return if precision > 0 {
            format(0.0, Some(precision), max_precision, None)
        } else {
            "0".to_string()
        };
    }

    if number < 0.0 {
        return format!("-{}", summarize(-number, precision, max_precision, units));
    }

    if number >= 1e15 {
        let largest = units
            .iter()
            .map(|(exponent, _)| *exponent)
            .fold(15, i32::max);
        let unit = unit_for(units, largest).unwrap_or("Q");
        let scaled = summarize(number / 1e15, precision, max_precision, units);
        return format!("{scaled}{unit}").trim().to_string();
    }

    let exponent = number.log10().floor() as i32;
    // Truncating remainder: exponents between -1 and -2 snap to 0.
    let display_exponent = exponent - exponent % 3;
    let scaled = number / 10f64.powi(display_exponent);

    let precision = max_precision.unwrap_or(precision);
    let formatted = format(scaled, Some(precision), None, None);
    match unit_for(units, display_exponent) {
        Some(unit) if !unit.is_empty() => format!("{formatted}{unit}").trim().to_string(),
        _ => formatted,
    }
}

/// Converts the number to its human readable equivalent, e.g. "1 million".
pub fn for_humans(number: f64, precision: usize, max_precision: Option<usize>, abbreviate: bool) -> String {
    let units = if abbreviate { ABBREVIATED_UNITS } else { FULL_UNITS };
    summarize(number, precision, max_precision, units)
}

/// Converts the number to its abbreviated equivalent, e.g. "1M".
pub fn abbreviate(number: f64, precision: usize, max_precision: Option<usize>) -> String {
    for_humans(number, precision, max_precision, true)
}

/// Spells out the number.
///
/// Numbers at or below `after`, or at or above `until`, are formatted as
/// digits instead. Only zero has a spelled form ("zero"); everything else is
/// rendered as a rounded integer.
pub fn spell(number: f64, locale: Option<&str>, after: Option<i64>, until: Option<i64>) -> String {
    let below_after = after.is_some_and(|after| number <= after as f64);
    let above_until = until.is_some_and(|until| number >= until as f64);
    if below_after || above_until {
        return format(number, None, None, locale);
    }

    if number == 0.0 {
        "zero".to_string()
    } else {
        format!("{number:.0}")
    }
}

fn ordinal_suffix(number: i64) -> &'static str {
    let number = number.unsigned_abs();
    if (11..=13).contains(&(number % 100)) {
        return "th";
    }
    match number % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Converts the number to ordinal form ("1st", "22nd"). Fractions are truncated.
pub fn ordinal(number: f64) -> String {
    let number = number as i64;
    format!("{number}{}", ordinal_suffix(number))
}

pub fn spell_ordinal(number: f64) -> String {
    format!("{} ordinal", ordinal(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize() {
        assert_eq!(summarize(1000.0, 0, None, &[]), "1K");
        assert_eq!(summarize(-1000.0, 0, None, &[]), "-1K");
        assert_eq!(summarize(0.0, 0, None, &[]), "0");
        assert_eq!(summarize(1e15, 0, None, &[]), "1Q");
        assert_eq!(summarize(1_000_000.0, 0, None, &[]), "1M");
        assert_eq!(summarize(1_250_000.0, 2, None, &[]), "1.25M");
        assert_eq!(summarize(3e9, 0, None, &[]), "3B");
        assert_eq!(summarize(7e12, 0, None, &[]), "7T");
        assert_eq!(summarize(123.0, 0, None, &[]), "123");
    }

    #[test]
    fn test_summarize_non_finite() {
        assert_eq!(summarize(f64::INFINITY, 0, None, &[]), "inf");
        assert_eq!(summarize(f64::NEG_INFINITY, 0, None, &[]), "-inf");
        assert_eq!(summarize(f64::NAN, 0, None, &[]), "NaN");
        assert_eq!(for_humans(f64::INFINITY, 0, None, false), "inf");
        assert_eq!(abbreviate(f64::NEG_INFINITY, 2, None), "-inf");
    }

    #[test]
    fn test_summarize_zero_with_precision() {
        assert_eq!(summarize(0.0, 2, None, &[]), "0.00");
        assert_eq!(summarize(0.0, 2, Some(1), &[]), "0.0");
    }

    #[test]
    fn test_summarize_max_precision_wins() {
        assert_eq!(summarize(1_234_000.0, 0, Some(2), &[]), "1.23M");
    }

    #[test]
    fn test_summarize_beyond_ladder() {
        assert_eq!(summarize(1e18, 0, None, &[]), "1KQ");
        assert_eq!(summarize(2.5e15, 1, None, &[]), "2.5Q");
    }

    #[test]
    fn test_summarize_custom_units() {
        let units = [(3, "k"), (6, "m")];
        assert_eq!(summarize(5000.0, 0, None, &units), "5k");
        assert_eq!(summarize(5e6, 0, None, &units), "5m");
        // no label registered for 10^9
        assert_eq!(summarize(5e9, 0, None, &units), "5");
        // nothing at or above 10^15 registered, so the fallback label is used
        assert_eq!(summarize(2e15, 0, None, &units), "2Q");

        let large = [(3, "k"), (18, "E")];
        assert_eq!(summarize(2e15, 0, None, &large), "2E");
    }

    #[test]
    fn test_summarize_small_numbers() {
        assert_eq!(summarize(0.25, 2, None, &[]), "0.25");
    }

    #[test]
    fn test_for_humans() {
        assert_eq!(for_humans(1000.0, 0, None, false), "1 thousand");
        assert_eq!(for_humans(1_250_000.0, 2, None, false), "1.25 million");
        assert_eq!(for_humans(-3e9, 0, None, false), "-3 billion");
        assert_eq!(for_humans(4e12, 0, None, true), "4T");
        assert_eq!(for_humans(1e15, 0, None, false), "1 quadrillion");
    }

    #[test]
    fn test_abbreviate() {
        assert_eq!(abbreviate(1000.0, 0, None), "1K");
        assert_eq!(abbreviate(1_200_000.0, 1, None), "1.2M");
        assert_eq!(abbreviate(489_939.0, 0, Some(1)), "489.9K");
    }

    #[test]
    fn test_spell() {
        assert_eq!(spell(123.0, Some("en"), None, None), "123");
        assert_eq!(spell(0.0, Some("en"), None, None), "zero");
        assert_eq!(spell(5.0, Some("en"), Some(10), None), "5");
        assert_eq!(spell(15.0, Some("en"), Some(10), None), "15");
        assert_eq!(spell(5.0, Some("en"), None, Some(10)), "5");
        assert_eq!(spell(15.0, Some("en"), None, Some(10)), "15");
        assert_eq!(spell(123.0, Some("id"), None, None), "123");
        assert_eq!(spell(-123.0, Some("en"), None, None), "-123");
        assert_eq!(spell(2.5, Some("id"), Some(10), None), "2,5");
    }

    #[test]
    fn test_ordinal() {
        let cases = [
            (1.0, "1st"),
            (2.0, "2nd"),
            (3.0, "3rd"),
            (4.0, "4th"),
            (11.0, "11th"),
            (12.0, "12th"),
            (13.0, "13th"),
            (21.0, "21st"),
            (22.0, "22nd"),
            (23.0, "23rd"),
            (100.0, "100th"),
            (111.0, "111th"),
            (-1.0, "-1st"),
            (0.0, "0th"),
            (1.9, "1st"),
        ];
        for (number, expected) in cases {
            assert_eq!(ordinal(number), expected, "ordinal({number})");
        }
    }

    #[test]
    fn test_spell_ordinal() {
        assert_eq!(spell_ordinal(1.0), "1st ordinal");
        assert_eq!(spell_ordinal(2.0), "2nd ordinal");
    }
}
