/// Korean large-number normalization
/// Country briefs quote currency in 억/천만 units on a USD base and
/// population in 만 units; these helpers reduce that notation to
/// USD billions and millions of people.
use regex::Regex;

// 1억 달러 = 0.1 billion USD, 1천만 달러 = 0.01 billion USD
const USD_BILLION_PER_EOK: f64 = 0.1;
const USD_BILLION_PER_CHEONMAN: f64 = 0.01;

// 1만 명 = 0.01 million people
const MILLION_PER_MAN: f64 = 0.01;

/// Rounds to 4 decimal places, the precision every derived quantity
/// in the record carries.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Parses an amount like "74억 9천만" or "400억" into USD billions.
///
/// `"74억 9천만"` → 7.49, `"400억"` → 40.0, `"204억 6천만"` → 20.46.
/// Returns `None` when no 억 amount is present at all; a missing 천만
/// sub-unit contributes zero, but a string with neither unit is not a
/// partial match.
pub fn korean_amount_to_usd_billion(text: &str) -> Option<f64> {
    let compact = text.replace(',', "");
    let re = Regex::new(r"(\d+)\s*억(?:\s*(\d+)\s*천만)?").expect("valid amount pattern");
    let caps = re.captures(compact.trim())?;

    let eok: f64 = caps[1].parse().ok()?;
    let cheonman: f64 = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0);

    Some(round4(
        eok * USD_BILLION_PER_EOK + cheonman * USD_BILLION_PER_CHEONMAN,
    ))
}

/// Converts a population count expressed in 만 명 into millions.
pub fn man_units_to_million(man: u64) -> f64 {
    round4(man as f64 * MILLION_PER_MAN)
}

/// Strips thousands separators and parses the remaining digits.
pub fn parse_separated_int(text: &str) -> Option<u64> {
    text.replace(',', "").trim().parse().ok()
}

/// Midpoint of a `"low~high"` range string.
///
/// A bare number is its own midpoint; anything else is `None`. Shared by
/// every site that has to render a range-valued share as one number.
pub fn range_midpoint(text: &str) -> Option<f64> {
    let re = Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*~\s*(\d+(?:\.\d+)?)\s*$")
        .expect("valid range pattern");
    if let Some(caps) = re.captures(text) {
        let low: f64 = caps[1].parse().ok()?;
        let high: f64 = caps[2].parse().ok()?;
        return Some((low + high) / 2.0);
    }
    text.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_with_sub_unit() {
        assert_eq!(korean_amount_to_usd_billion("74억 9천만"), Some(7.49));
        assert_eq!(korean_amount_to_usd_billion("204억 6천만"), Some(20.46));
    }

    #[test]
    fn test_amount_without_sub_unit() {
        assert_eq!(korean_amount_to_usd_billion("400억"), Some(40.0));
        assert_eq!(korean_amount_to_usd_billion("1억"), Some(0.1));
    }

    #[test]
    fn test_amount_with_separators() {
        assert_eq!(korean_amount_to_usd_billion("1,234억"), Some(123.4));
    }

    #[test]
    fn test_amount_no_units_is_absent() {
        assert_eq!(korean_amount_to_usd_billion("no digits here"), None);
        assert_eq!(korean_amount_to_usd_billion("9천만"), None);
        assert_eq!(korean_amount_to_usd_billion(""), None);
    }

    #[test]
    fn test_population_scaling() {
        assert_eq!(man_units_to_million(661), 6.61);
        assert_eq!(man_units_to_million(100), 1.0);
    }

    #[test]
    fn test_separated_int() {
        assert_eq!(parse_separated_int("89,342"), Some(89_342));
        assert_eq!(parse_separated_int(" 3,980 "), Some(3_980));
        assert_eq!(parse_separated_int("abc"), None);
    }

    #[test]
    fn test_range_midpoint() {
        assert_eq!(range_midpoint("3~4"), Some(3.5));
        assert_eq!(range_midpoint("3 ~ 4"), Some(3.5));
        assert_eq!(range_midpoint("2.5~3.5"), Some(3.0));
    }

    #[test]
    fn test_midpoint_of_bare_number() {
        assert_eq!(range_midpoint("5"), Some(5.0));
        assert_eq!(range_midpoint("4.2"), Some(4.2));
    }

    #[test]
    fn test_midpoint_of_garbage_is_absent() {
        assert_eq!(range_midpoint("bad"), None);
        assert_eq!(range_midpoint("~4"), None);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(7.49 - 20.46), -12.97);
        assert_eq!(round4(0.123_456), 0.1235);
    }
}
