//! Accepted employment date formats.
//!
//! Exactly three shapes are accepted: a year range, a year to `Present`, and
//! a single year. Ranges are separated by an em dash (U+2014). Month-level
//! dates are not accepted.

use std::sync::LazyLock;

use regex::Regex;

static ACCEPTED_FORMATS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        r"^[0-9]{4}\x{2014}[0-9]{4}$",
        r"^[0-9]{4}\x{2014}Present$",
        r"^[0-9]{4}$",
    ]
    .map(|pattern| match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid date format regex: {err}"),
    })
});

/// Whether `value` matches one of the accepted date formats.
#[must_use]
pub fn is_accepted_format(value: &str) -> bool {
    ACCEPTED_FORMATS.iter().any(|re| re.is_match(value))
}

/// Whether `value` describes an ongoing position.
#[must_use]
pub fn is_open_ended(value: &str) -> bool {
    value.contains("Present")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_formats() {
        assert!(is_accepted_format("2021\u{2014}2022"));
        assert!(is_accepted_format("2023\u{2014}Present"));
        assert!(is_accepted_format("2019"));
    }

    #[test]
    fn test_rejected_formats() {
        assert!(!is_accepted_format("2021-2022"), "hyphen is not an em dash");
        assert!(!is_accepted_format("2021 \u{2014} 2022"));
        assert!(!is_accepted_format("2021\u{2013}2022"), "en dash");
        assert!(!is_accepted_format("Jan 2021\u{2014}Present"));
        assert!(!is_accepted_format("21"));
        assert!(!is_accepted_format(""));
        assert!(!is_accepted_format("2023\u{2014}present"));
    }

    #[test]
    fn test_open_ended() {
        assert!(is_open_ended("2023\u{2014}Present"));
        assert!(is_open_ended("Present"));
        assert!(!is_open_ended("2020\u{2014}2021"));
    }
}
