//! JSON text -> gq Value conversion

use crate::Value;

use super::CliError;

/// Convert serde_json::Value to gq Value
///
/// Integer literals become integers and must fit an i64; literals with a
/// fraction or exponent become floats and must be finite. Object key order
/// is preserved.
pub fn json_to_value(v: serde_json::Value) -> Result<Value, CliError> {
    Ok(match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => number_to_value(&n)?,
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => Value::Array(
            arr.into_iter()
                .map(json_to_value)
                .collect::<Result<_, CliError>>()?,
        ),
        serde_json::Value::Object(obj) => Value::Object(
            obj.into_iter()
                .map(|(k, v)| Ok((k, json_to_value(v)?)))
                .collect::<Result<_, CliError>>()?,
        ),
    })
}

// `arbitrary_precision` keeps the literal text, so integer literals are told
// apart from floats by their spelling rather than by magnitude.
fn number_to_value(n: &serde_json::Number) -> Result<Value, CliError> {
    let text = n.to_string();
    if text.contains(['.', 'e', 'E']) {
        n.as_f64()
            .map(Value::Float)
            .ok_or(CliError::NumberOutOfRange(text))
    } else {
        n.as_i64()
            .map(Value::Integer)
            .ok_or(CliError::NumberOutOfRange(text))
    }
}

/// Parse JSON text into a gq Value
///
/// ```
/// use gq::{parse_value, Value};
///
/// assert_eq!(parse_value("[1, 2.5]").unwrap(), Value::Array(vec![
///     Value::Integer(1),
///     Value::Float(2.5),
/// ]));
/// ```
pub fn parse_value(text: &str) -> Result<Value, CliError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    json_to_value(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_kinds() {
        assert_eq!(parse_value("7").unwrap(), Value::Integer(7));
        assert_eq!(parse_value("7.0").unwrap(), Value::Float(7.0));
        assert_eq!(parse_value("1e2").unwrap(), Value::Float(100.0));
        assert_eq!(parse_value("-3").unwrap(), Value::Integer(-3));
    }

    #[test]
    fn test_integer_limits() {
        assert_eq!(
            parse_value("9223372036854775807").unwrap(),
            Value::Integer(i64::MAX)
        );
        assert_eq!(
            parse_value("-9223372036854775808").unwrap(),
            Value::Integer(i64::MIN)
        );
    }

    #[test]
    fn test_integer_past_i64_is_rejected() {
        match parse_value("18446744073709551615") {
            Err(CliError::NumberOutOfRange(text)) => assert_eq!(text, "18446744073709551615"),
            other => panic!("expected NumberOutOfRange, got {:?}", other),
        }
        assert!(matches!(
            parse_value(r#"{"id": [1, 9223372036854775808]}"#),
            Err(CliError::NumberOutOfRange(_))
        ));
    }

    #[test]
    fn test_large_float_literal_stays_float() {
        assert_eq!(
            parse_value("18446744073709551615.0").unwrap(),
            Value::Float(18446744073709551615.0)
        );
        assert!(parse_value("1e400").is_err());
    }

    #[test]
    fn test_object_order_follows_source() {
        let value = parse_value(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        match value {
            Value::Object(obj) => {
                let keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
                assert_eq!(keys, vec!["z", "a", "m"]);
            }
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_value("{\"a\": }"), Err(CliError::Json(_))));
    }
}
