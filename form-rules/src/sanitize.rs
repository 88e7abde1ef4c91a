/// Trims and collapses every run of whitespace to a single space.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

pub(crate) fn collapse(value: &Option<String>) -> Option<String> {
    value.as_deref().map(collapse_whitespace)
}

pub(crate) fn email(value: &Option<String>) -> Option<String> {
    value.as_deref().map(normalize_email)
}

pub(crate) fn trim(value: &Option<String>) -> Option<String> {
    value.as_deref().map(|v| v.trim().to_string())
}

/// Trimmed value, or `None` when nothing but whitespace was sent.
pub(crate) fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Acme \t  Robotics\n Pvt  "), "Acme Robotics Pvt");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_collapse_is_idempotent() {
        for input in ["  a  b  ", "already clean", "\n\n", "x\u{a0} y", "tab\tsep\tvalues"] {
            let once = collapse_whitespace(input);
            assert_eq!(collapse_whitespace(&once), once);
        }
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  HR@Acme.COM "), "hr@acme.com");
        let once = normalize_email(" A@B.C ");
        assert_eq!(normalize_email(&once), once);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&Some("   ".to_string())), None);
        assert_eq!(non_empty(&Some(" x ".to_string())), Some("x".to_string()));
        assert_eq!(non_empty(&None), None);
    }
}
