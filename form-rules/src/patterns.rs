use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[0-9\s\-()]{10,15}$").expect("phone pattern compiles"));

static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://.+").expect("url pattern compiles"));

/// `local@domain.tld` with no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Digits, spaces, dashes and parentheses with an optional leading `+`,
/// 10 to 15 characters in total.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE.is_match(value)
}

pub fn is_valid_url(value: &str) -> bool {
    URL.is_match(value)
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|d| d.date_naive()))
}
