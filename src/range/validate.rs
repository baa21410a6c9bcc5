use super::grammar::Expression;
use super::trim::canonicalize;
use serde_json::Value;

/// Outcome of checking range text against the grammar, before any engine
/// round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    /// the first segment that failed the grammar, verbatim
    GrammarViolation { segment: String },
    /// the input was not text at all
    TypeMismatch { field: String, found: &'static str },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }
}

impl std::fmt::Display for Validation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Validation::Valid => write!(f, "valid"),
            Validation::GrammarViolation { segment } => write!(
                f,
                "'{}' is not a valid range. For an example of a valid range, assign a range manually.",
                segment
            ),
            Validation::TypeMismatch { field, found } => write!(
                f,
                "Expected '{}' to be a string but got '{}'",
                field, found
            ),
        }
    }
}

/// Splits canonical text into segments, forgiving one trailing separator.
pub fn segments(canonical: &str) -> Vec<&str> {
    let mut segments = canonical.split(',').collect::<Vec<_>>();
    if segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    segments
}

/// Checks every segment of `input` against the range grammar and reports
/// the first one that fails. Overlaps between segments are not examined.
pub fn validate_str(input: &str) -> Validation {
    let canonical = canonicalize(input);
    segments(&canonical)
        .into_iter()
        .find(|segment| segment.parse::<Expression>().is_err())
        .map(|segment| {
            log::debug!("range segment rejected: {:?}", segment);
            Validation::GrammarViolation {
                segment: segment.to_string(),
            }
        })
        .unwrap_or(Validation::Valid)
}

/// Validates untyped input, e.g. a field of an IPC payload. Anything other
/// than a JSON string is a type mismatch on `field`.
pub fn validate(input: &Value, field: &str) -> Validation {
    match input {
        Value::String(text) => validate_str(text),
        other => Validation::TypeMismatch {
            field: field.to_string(),
            found: kind(other),
        },
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts() {
        for s in ["AKs", "AA-22", "72o:0.5", "JJ+", "AA, KK, AKs:0.5", "AKs+,A5s-A2s:.25", ""] {
            assert_eq!(validate_str(s), Validation::Valid, "{}", s);
        }
    }

    #[test]
    fn reports_first_offending_segment() {
        assert_eq!(
            validate_str("AKs, XYZ"),
            Validation::GrammarViolation {
                segment: "XYZ".to_string()
            }
        );
        assert_eq!(
            validate_str("ak, QQ+:3, 7"),
            Validation::GrammarViolation {
                segment: "ak".to_string()
            }
        );
    }

    #[test]
    fn trailing_separator() {
        assert_eq!(validate_str("AKs,"), validate_str("AKs"));
        assert_eq!(validate_str("AKs , "), Validation::Valid);
    }

    #[test]
    fn weight_bound() {
        assert_eq!(
            validate_str("AA:1.5"),
            Validation::GrammarViolation {
                segment: "AA:1.5".to_string()
            }
        );
        assert!(validate_str("AA:1").is_valid());
        assert!(validate_str("AA:0.75").is_valid());
    }

    #[test]
    fn engine_semantics_are_not_checked_here() {
        // rank order, pair markers and interval direction belong to the engine
        assert!(validate_str("89").is_valid());
        assert!(validate_str("AAs").is_valid());
        assert!(validate_str("K2-K5").is_valid());
        assert!(validate_str("AA,AA:0.5").is_valid());
    }

    #[test]
    fn mismatched_interval_markers() {
        assert!(!validate_str("AQo-86s").is_valid());
    }

    #[test]
    fn type_mismatch() {
        let v = validate(&json!(123), "range");
        assert_eq!(
            v,
            Validation::TypeMismatch {
                field: "range".to_string(),
                found: "number"
            }
        );
        assert_eq!(v.to_string(), "Expected 'range' to be a string but got 'number'");
        assert!(matches!(
            validate(&json!(null), "oopRange"),
            Validation::TypeMismatch { ref field, .. } if field == "oopRange"
        ));
        assert_eq!(validate(&json!("QQ+"), "range"), Validation::Valid);
    }

    #[test]
    fn message_names_segment() {
        let v = validate_str("AKs, XYZ");
        assert!(v.to_string().contains("'XYZ'"));
    }
}
