//! Best-effort decimal parsing.
//!
//! Never fails: whatever can't be read as a decimal integer is reported as
//! a [`Warning`] and parsing carries on with what it has.

use std::fmt;
use warn::Warn;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Warning {
    /// No digits after optional whitespace and sign, the value is 0.
    NoDigits,
    /// Characters after the digits were ignored.
    TrailingCharacters,
    /// The number lies outside `-2^63..2^64` and was wrapped modulo 2^64.
    Overflow,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Warning::NoDigits => "no digits found, using 0",
            Warning::TrailingCharacters => "ignoring characters after the number",
            Warning::Overflow => "number does not fit into 64 bits, wrapped",
        })
    }
}

const NEGATIVE_LIMIT: u64 = 1 << 63;

/// Parses the leading decimal integer of `input`.
///
/// Leading ASCII whitespace (vertical tab included) and a single `+` or
/// `-` are accepted. Negative numbers come out in two's complement, so `-1`
/// yields `u64::max_value()`.
pub fn parse<W>(warn: &mut W, input: &str) -> u64
    where W: Warn<Warning>
{
    // Same set as C's isspace, which includes vertical tab.
    let rest = input.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        warn.warn(Warning::NoDigits);
        return 0;
    }
    let (digits, trailing) = rest.split_at(len);

    let mut overflow = false;
    let mut magnitude: u64 = 0;
    for b in digits.bytes() {
        let digit = u64::from(b - b'0');
        magnitude = match magnitude.checked_mul(10).and_then(|m| m.checked_add(digit)) {
            Some(m) => m,
            None => {
                overflow = true;
                magnitude.wrapping_mul(10).wrapping_add(digit)
            }
        };
    }
    if negative && magnitude > NEGATIVE_LIMIT {
        overflow = true;
    }
    if overflow {
        warn.warn(Warning::Overflow);
    }
    if !trailing.is_empty() {
        warn.warn(Warning::TrailingCharacters);
    }
    if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

#[cfg(test)]
mod test {
    use super::Warning::*;
    use super::Warning;
    use super::parse;
    use warn::Panic;

    fn assert_parse_warnings(input: &str, value: u64, warnings: &[Warning]) {
        let mut vec = vec![];
        assert_eq!(parse(&mut vec, input), value);
        assert_eq!(vec, warnings);
    }

    fn assert_parse_warn(input: &str, value: u64, warning: Warning) {
        assert_parse_warnings(input, value, &[warning]);
    }

    fn assert_parse(input: &str, value: u64) {
        assert_eq!(parse(&mut Panic, input), value);
    }

    #[test] fn zero() { assert_parse("0", 0) }
    #[test] fn simple() { assert_parse("134", 134) }
    #[test] fn leading_zeros() { assert_parse("0007", 7) }
    #[test] fn plus() { assert_parse("+5", 5) }
    #[test] fn minus() { assert_parse("-1", !0) }
    #[test] fn minus_zero() { assert_parse("-0", 0) }
    #[test] fn whitespace() { assert_parse(" \t\n42", 42) }
    #[test] fn vertical_tab() { assert_parse("\x0b\x0c\r5", 5) }
    #[test] fn u64_max() { assert_parse("18446744073709551615", !0) }
    #[test] fn i64_min() { assert_parse("-9223372036854775808", 1 << 63) }

    #[test] fn empty() { assert_parse_warn("", 0, NoDigits) }
    #[test] fn blank() { assert_parse_warn("   ", 0, NoDigits) }
    #[test] fn letters() { assert_parse_warn("abc", 0, NoDigits) }
    #[test] fn sign_only() { assert_parse_warn("-", 0, NoDigits) }
    #[test] fn double_sign() { assert_parse_warn("--1", 0, NoDigits) }
    #[test] fn trailing_space() { assert_parse_warn("1 ", 1, TrailingCharacters) }
    #[test] fn trailing() { assert_parse_warn("12abc", 12, TrailingCharacters) }
    #[test] fn float() { assert_parse_warn("3.9", 3, TrailingCharacters) }
    #[test] fn u64_max_plus_1() { assert_parse_warn("18446744073709551616", 0, Overflow) }
    #[test] fn i64_min_minus_1() { assert_parse_warn("-9223372036854775809", (1 << 63) - 1, Overflow) }
    #[test] fn huge() { assert_parse_warn("100000000000000000000", 7766279631452241920, Overflow) }

    #[test]
    fn overflow_and_trailing() {
        assert_parse_warnings("18446744073709551617x", 1, &[Overflow, TrailingCharacters]);
    }
}
