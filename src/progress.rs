//! Progress values: attribute parsing and percentage computation.
//!
//! Attribute values are parsed the way the browser's `parseFloat` does, so a
//! page renders the same bar whether the value is read here or by script:
//! leading whitespace is skipped, the longest numeric prefix wins, and text
//! with no numeric prefix becomes NaN.

/// Upper bound of the progress axis.
pub const PROGRESS_AXIS_MAX: f64 = 100.0;

/// Lower bound of the progress axis.
pub const PROGRESS_AXIS_MIN: f64 = 0.0;

/// Parse a string with `parseFloat` semantics.
///
/// Returns NaN when the string has no numeric prefix. Never fails.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start_matches(is_js_whitespace);
    let len = numeric_prefix_len(s);
    if len == 0 {
        return f64::NAN;
    }
    s.get(..len)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Percentage of completed tasks, 0 when there are no tasks.
///
/// This is the value a page template writes into `data-progress`.
pub fn progress_percent(completed: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(completed) / f64::from(total) * 100.0
}

/// Parse a `DONE/TOTAL` task count pair (e.g. `"3/4"`).
pub fn parse_task_counts(input: &str) -> Option<(u32, u32)> {
    let (done, total) = input.trim().split_once('/')?;
    let done = done.trim().parse().ok()?;
    let total = total.trim().parse().ok()?;
    Some((done, total))
}

/// JS `WhiteSpace` and `LineTerminator`: Unicode whitespace plus the BOM,
/// minus NEL (U+0085).
fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Length in bytes of the longest prefix of `s` that is a decimal literal
/// (`[+-]digits[.digits][e[+-]digits]`) or a signed `Infinity`.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if s.get(pos..).is_some_and(|rest| rest.starts_with("Infinity")) {
        return pos + "Infinity".len();
    }

    let int_digits = count_digits(bytes, pos);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(bytes, pos + 1);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    // An exponent only counts when at least one digit follows it.
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(bytes, exp);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    pos
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |tail| tail.iter().take_while(|b| b.is_ascii_digit()).count())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("42.5", 42.5; "decimal")]
    #[test_case("0", 0.0; "zero")]
    #[test_case("150", 150.0; "above axis")]
    #[test_case("-3", -3.0; "negative")]
    #[test_case("  12px", 12.0; "whitespace and suffix")]
    #[test_case("\n\t7", 7.0; "line terminators")]
    #[test_case("\u{a0}\u{feff}\u{2028}9", 9.0; "unicode spaces and bom")]
    #[test_case("1e3", 1000.0; "exponent")]
    #[test_case("2.5E-1", 0.25; "signed exponent")]
    #[test_case("1e", 1.0; "dangling exponent")]
    #[test_case("1e+", 1.0; "dangling signed exponent")]
    #[test_case(".5", 0.5; "leading dot")]
    #[test_case("5.", 5.0; "trailing dot")]
    #[test_case("+8", 8.0; "plus sign")]
    #[test_case("3.14.15", 3.14; "second dot stops")]
    #[test_case("1_000", 1.0; "underscore stops")]
    fn parses_numeric_prefix(input: &str, expected: f64) {
        assert_eq!(parse_float(input), expected);
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "blank")]
    #[test_case("abc"; "letters")]
    #[test_case("."; "lone dot")]
    #[test_case("-"; "lone sign")]
    #[test_case("e5"; "exponent only")]
    #[test_case("NaN"; "nan literal")]
    #[test_case("inf"; "lowercase inf")]
    #[test_case("\u{85}5"; "next line is not whitespace")]
    fn yields_nan_without_prefix(input: &str) {
        assert!(parse_float(input).is_nan());
    }

    #[test]
    fn parses_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_float(" +Infinityx"), f64::INFINITY);
    }

    #[test]
    fn percent_from_task_counts() {
        assert_eq!(progress_percent(0, 0), 0.0);
        assert_eq!(progress_percent(3, 4), 75.0);
        assert_eq!(progress_percent(5, 5), 100.0);
        assert!((progress_percent(1, 3) - 33.333_333).abs() < 1e-4);
    }

    #[test]
    fn task_counts() {
        assert_eq!(parse_task_counts("3/4"), Some((3, 4)));
        assert_eq!(parse_task_counts(" 0 / 0 "), Some((0, 0)));
        assert_eq!(parse_task_counts("3"), None);
        assert_eq!(parse_task_counts("a/4"), None);
    }
}
