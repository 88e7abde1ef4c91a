//! Deserializers for raw form payloads.
//!
//! Browser forms post numbers as strings and strings as numbers depending on
//! the input widget, so request types accept either and leave judging the
//! value to the validator.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string, number or boolean. `null` and absent fields become `None`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_to_string))
}

/// Accepts an array of scalars. Anything that is not an array becomes `None`
/// so the validator reports it the same way as a missing selection.
/// Non-scalar elements are kept as empty entries so they still fail the
/// vocabulary and count checks.
pub fn text_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .map(|item| scalar_to_string(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}

/// Accepts `true`/`false` or their string spellings.
pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" => Some(true),
            "false" | "no" | "off" | "" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct FormFields {
        #[serde(default, deserialize_with = "text")]
        hires: Option<String>,
        #[serde(default, deserialize_with = "text_list")]
        rounds: Option<Vec<String>>,
        #[serde(default, deserialize_with = "flag")]
        consent: Option<bool>,
    }

    #[test]
    fn test_numbers_become_text() {
        let fields: FormFields = serde_json::from_str(r#"{"hires": 5}"#).unwrap();
        assert_eq!(fields.hires.as_deref(), Some("5"));
        assert!(fields.rounds.is_none());
        assert!(fields.consent.is_none());
    }

    #[test]
    fn test_non_array_list_is_none() {
        let fields: FormFields = serde_json::from_str(r#"{"rounds": "HR Round"}"#).unwrap();
        assert!(fields.rounds.is_none());

        let fields: FormFields = serde_json::from_str(r#"{"rounds": ["HR Round", 3]}"#).unwrap();
        assert_eq!(fields.rounds.unwrap(), vec!["HR Round".to_string(), "3".to_string()]);
    }

    #[test]
    fn test_non_scalar_list_entries_are_kept() {
        let fields: FormFields =
            serde_json::from_str(r#"{"rounds": ["HR Round", null, {}, []]}"#).unwrap();
        assert_eq!(
            fields.rounds.unwrap(),
            vec!["HR Round".to_string(), String::new(), String::new(), String::new()]
        );
    }

    #[test]
    fn test_flag_spellings() {
        let fields: FormFields = serde_json::from_str(r#"{"consent": "Yes"}"#).unwrap();
        assert_eq!(fields.consent, Some(true));

        let fields: FormFields = serde_json::from_str(r#"{"consent": null}"#).unwrap();
        assert_eq!(fields.consent, None);
    }
}
