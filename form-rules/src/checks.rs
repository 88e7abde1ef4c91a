use shared_types::FieldErrors;

use crate::patterns;

/// Present and not blank after trimming.
pub(crate) fn filled(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub(crate) fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// Largest magnitude an `f64` holds without losing integer precision.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Whole numbers, including decimals with no fractional part such as `5.0`.
pub(crate) fn parse_int(value: Option<&str>) -> Option<i64> {
    let v = filled(value)?.trim();
    if let Ok(n) = v.parse::<i64>() {
        return Some(n);
    }
    let f = v.parse::<f64>().ok()?;
    (f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT).then_some(f as i64)
}

/// Accumulates one message per field. The first failure recorded for a
/// field wins.
#[derive(Default)]
pub(crate) struct FieldCheck {
    errors: FieldErrors,
}

impl FieldCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn required<'v>(
        &mut self,
        field: &str,
        value: Option<&'v str>,
        missing: &str,
    ) -> Option<&'v str> {
        match filled(value) {
            Some(v) => Some(v),
            None => {
                self.fail(field, missing);
                None
            }
        }
    }

    /// Upper bound first, then lower bound.
    pub fn length(
        &mut self,
        field: &str,
        value: &str,
        min: Option<(usize, &str)>,
        max: Option<(usize, &str)>,
    ) {
        let len = char_len(value);
        if let Some((limit, message)) = max {
            if len > limit {
                self.fail(field, message);
                return;
            }
        }
        if let Some((limit, message)) = min {
            if len < limit {
                self.fail(field, message);
            }
        }
    }

    /// Required text with a maximum length.
    pub fn text(&mut self, field: &str, value: Option<&str>, missing: &str, max: usize, too_long: &str) {
        if let Some(v) = self.required(field, value, missing) {
            self.length(field, v, None, Some((max, too_long)));
        }
    }

    /// Optional text with a maximum length.
    pub fn optional_text(&mut self, field: &str, value: Option<&str>, max: usize, too_long: &str) {
        if let Some(v) = filled(value) {
            self.length(field, v, None, Some((max, too_long)));
        }
    }

    pub fn email(&mut self, field: &str, value: Option<&str>, message: &str) {
        match filled(value) {
            Some(v) if patterns::is_valid_email(v.trim()) => {}
            _ => self.fail(field, message),
        }
    }

    pub fn phone(&mut self, field: &str, value: Option<&str>, message: &str) {
        match filled(value) {
            Some(v) if patterns::is_valid_phone(v.trim()) => {}
            _ => self.fail(field, message),
        }
    }

    pub fn url(&mut self, field: &str, value: Option<&str>, message: &str) {
        match filled(value) {
            Some(v) if patterns::is_valid_url(v.trim()) => {}
            _ => self.fail(field, message),
        }
    }

    pub fn one_of(&mut self, field: &str, value: Option<&str>, allowed: &[&str], message: &str) {
        match value {
            Some(v) if allowed.contains(&v) => {}
            _ => self.fail(field, message),
        }
    }

    /// Non-empty selection drawn entirely from `allowed`.
    pub fn selection(
        &mut self,
        field: &str,
        values: Option<&[String]>,
        allowed: &[&str],
        empty: &str,
        foreign: &str,
    ) {
        match values {
            None | Some([]) => self.fail(field, empty),
            Some(items) => {
                if items.iter().any(|item| !allowed.contains(&item.as_str())) {
                    self.fail(field, foreign);
                }
            }
        }
    }

    /// Integer rating on the 1-5 scale.
    pub fn rating(&mut self, field: &str, value: Option<&str>, missing: &str) -> Option<u8> {
        if filled(value).is_none() {
            self.fail(field, missing);
            return None;
        }
        match parse_int(value) {
            Some(n) if (1..=5).contains(&n) => Some(n as u8),
            _ => {
                self.fail(field, "Rating must be between 1 and 5");
                None
            }
        }
    }

    pub fn finish(self) -> FieldErrors {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_whitespace() {
        let mut check = FieldCheck::new();
        assert!(check.required("jobTitle", Some("   "), "Job title is required").is_none());
        assert_eq!(check.finish()["jobTitle"], "Job title is required");
    }

    #[test]
    fn test_length_reports_max_before_min() {
        let mut check = FieldCheck::new();
        check.length("x", "abcdef", Some((10, "short")), Some((3, "long")));
        assert_eq!(check.finish()["x"], "long");
    }

    #[test]
    fn test_selection_rejects_foreign_values() {
        let mut check = FieldCheck::new();
        let picked = vec!["MBA".to_string(), "Juggling".to_string()];
        check.selection("eligibleDegrees", Some(picked.as_slice()), &["MBA", "PhD"], "empty", "foreign");
        check.selection("other", Some(&[][..]), &["MBA"], "empty", "foreign");
        let errors = check.finish();
        assert_eq!(errors["eligibleDegrees"], "foreign");
        assert_eq!(errors["other"], "empty");
    }

    #[test]
    fn test_parse_int_accepts_whole_decimals() {
        assert_eq!(parse_int(Some(" 42 ")), Some(42));
        assert_eq!(parse_int(Some("5.0")), Some(5));
        assert_eq!(parse_int(Some("-3.000")), Some(-3));
        assert_eq!(parse_int(Some("5.5")), None);
        assert_eq!(parse_int(Some("NaN")), None);
        assert_eq!(parse_int(Some("inf")), None);
        assert_eq!(parse_int(Some("five")), None);
        assert_eq!(parse_int(Some("  ")), None);
    }

    #[test]
    fn test_rating_bounds() {
        let mut check = FieldCheck::new();
        assert_eq!(check.rating("a", Some("4"), "missing"), Some(4));
        assert_eq!(check.rating("b", Some("6"), "missing"), None);
        assert_eq!(check.rating("c", None, "missing"), None);
        assert_eq!(check.rating("d", Some("3.0"), "missing"), Some(3));
        assert_eq!(check.rating("e", Some("3.5"), "missing"), None);
        let errors = check.finish();
        assert_eq!(errors["b"], "Rating must be between 1 and 5");
        assert_eq!(errors["c"], "missing");
        assert!(!errors.contains_key("a"));
        assert!(!errors.contains_key("d"));
        assert_eq!(errors["e"], "Rating must be between 1 and 5");
    }
}
