//! Input parsing: pair lists and value dictionaries, schema-checked up
//! front instead of failing later on field access.

use serde_json::Value;

use crate::saliency::SaliencyMap;

/// A parsed (token, value) record. `value` is `None` when no saliency is
/// known for the token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord {
    pub raw: String,
    pub value: Option<f64>,
}

/// Rejected input shapes. All recoverable: surfaces report the message and
/// render an empty segment list with the default range.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON array of [token, value] pairs")]
    ExpectedPairArray,
    #[error("pair {index}: expected a [string, number] pair")]
    MalformedPair { index: usize },
    #[error("expected a JSON object mapping tokens to numbers")]
    ExpectedValueObject,
    #[error("value for {key:?} is not a number")]
    NonNumericValue { key: String },
}

/// Built-in demo pair list used by the surfaces when no input is supplied.
pub const DEMO_PAIR_LIST: &str = r#"[
  ["Ċ", 9.5],
  ["You", 1.0],
  ["Ġare", 0.9],
  ["Ġa", 4.0],
  ["Ġhelpful", 2.5],
  ["Ġassistant", 1.8],
  [".Ċ", 1.4],
  ["Command", 11.1],
  [":Ċ", 7.3],
  ["Go", 19.6],
  ["Ġpress", 16.6],
  ["Ġthat", 8.4],
  ["Ġswitch", 12.0]
]"#;

/// Parse pair-list input: a JSON array of `[token, value]` 2-arrays,
/// order-significant, duplicates allowed.
///
/// A JSON `null` value parses as a token with no known saliency; any other
/// non-number value is rejected.
pub fn parse_pair_list(json: &str) -> Result<Vec<TokenRecord>, ParseError> {
    let parsed: Value = serde_json::from_str(json)?;
    let Value::Array(items) = parsed else {
        return Err(ParseError::ExpectedPairArray);
    };
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Value::Array(pair) = item else {
            return Err(ParseError::MalformedPair { index });
        };
        let [Value::String(raw), value] = pair.as_slice() else {
            return Err(ParseError::MalformedPair { index });
        };
        let value = match value {
            Value::Number(number) => Some(
                number
                    .as_f64()
                    .ok_or(ParseError::MalformedPair { index })?,
            ),
            Value::Null => None,
            _ => return Err(ParseError::MalformedPair { index }),
        };
        records.push(TokenRecord {
            raw: raw.clone(),
            value,
        });
    }
    Ok(records)
}

/// Parse dictionary input: a JSON object mapping token strings to numbers.
/// Artifact keys are discarded by [`SaliencyMap::new`].
pub fn parse_value_map(json: &str) -> Result<SaliencyMap, ParseError> {
    let parsed: Value = serde_json::from_str(json)?;
    let Value::Object(entries) = parsed else {
        return Err(ParseError::ExpectedValueObject);
    };
    let mut values = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let Value::Number(number) = value else {
            return Err(ParseError::NonNumericValue { key });
        };
        let Some(number) = number.as_f64() else {
            return Err(ParseError::NonNumericValue { key });
        };
        values.push((key, number));
    }
    Ok(SaliencyMap::new(values))
}

#[cfg(test)]
mod tests {
    use super::{parse_pair_list, parse_value_map, ParseError, DEMO_PAIR_LIST};

    #[test]
    fn parses_pairs_in_order_with_duplicates() {
        let records = parse_pair_list(r#"[["a", 1.0], ["b", 2.5], ["a", 3.0]]"#)
            .unwrap_or_default();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].raw, "a");
        assert_eq!(records[0].value, Some(1.0));
        assert_eq!(records[2].raw, "a");
        assert_eq!(records[2].value, Some(3.0));
    }

    #[test]
    fn null_value_parses_as_unknown() {
        let records = parse_pair_list(r#"[["a", null]]"#).unwrap_or_default();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value, None);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(
            parse_pair_list("not json"),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn non_array_top_level_is_rejected() {
        assert!(matches!(
            parse_pair_list(r#"{"a": 1}"#),
            Err(ParseError::ExpectedPairArray)
        ));
    }

    #[test]
    fn malformed_pairs_are_rejected_with_index() {
        for bad in [
            r#"[["ok", 1.0], ["short"]]"#,
            r#"[["ok", 1.0], ["three", 1, 2]]"#,
            r#"[["ok", 1.0], [5, 1.0]]"#,
            r#"[["ok", 1.0], ["text-value", "high"]]"#,
            r#"[["ok", 1.0], "flat"]"#,
        ] {
            assert!(
                matches!(
                    parse_pair_list(bad),
                    Err(ParseError::MalformedPair { index: 1 })
                ),
                "input={bad}"
            );
        }
    }

    #[test]
    fn empty_array_parses_to_no_records() {
        assert!(parse_pair_list("[]").unwrap_or_default().is_empty());
    }

    #[test]
    fn demo_pair_list_parses() {
        let records = parse_pair_list(DEMO_PAIR_LIST).unwrap_or_default();
        assert_eq!(records.len(), 13);
        assert_eq!(records[9].raw, "Go");
        assert_eq!(records[9].value, Some(19.6));
    }

    #[test]
    fn value_map_parses_numeric_entries() {
        let saliency = parse_value_map(r#"{"fox": 0.95, "dog": 0.2}"#).unwrap_or_default();
        assert_eq!(saliency.len(), 2);
        assert_eq!(saliency.lookup("fox"), Some(0.95));
    }

    #[test]
    fn value_map_rejects_non_numbers() {
        assert!(matches!(
            parse_value_map(r#"{"fox": "high"}"#),
            Err(ParseError::NonNumericValue { .. })
        ));
    }

    #[test]
    fn value_map_rejects_non_objects() {
        assert!(matches!(
            parse_value_map("[1, 2]"),
            Err(ParseError::ExpectedValueObject)
        ));
    }
}
