use serde_json::Value;

/// Revenue attached to a conversion. The remote service accepts numbers and
/// numeric strings; everything else is dropped at ingestion rather than
/// re-checked inside every builder.
#[derive(Debug, Clone, PartialEq)]
pub enum RevenueValue {
    Int(i64),
    Float(f64),
    NumericString(String),
}

impl RevenueValue {
    /// Permissive ingestion check: numbers and strings that parse as numbers
    /// become a `RevenueValue`; booleans, nulls, arrays, objects, and
    /// non-numeric strings yield `None`. Omission here is policy, not an
    /// error - the tracking call still goes out without the revenue field.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<RevenueValue> {
        match value {
            Value::Number(num) => {
                if let Some(int) = num.as_i64() {
                    Some(RevenueValue::Int(int))
                } else {
                    num.as_f64().map(RevenueValue::Float)
                }
            }
            Value::String(raw) => {
                if raw.parse::<f64>().is_ok() {
                    Some(RevenueValue::NumericString(raw.clone()))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Wire form for the legacy `r` query parameter.
    #[must_use]
    pub fn to_param_string(&self) -> String {
        match self {
            RevenueValue::Int(int) => int.to_string(),
            RevenueValue::Float(float) => float.to_string(),
            RevenueValue::NumericString(raw) => raw.clone(),
        }
    }

    /// JSON form for event-architecture revenue props.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            RevenueValue::Int(int) => Value::from(*int),
            RevenueValue::Float(float) => Value::from(*float),
            RevenueValue::NumericString(raw) => Value::from(raw.clone()),
        }
    }
}

#[cfg(test)]
mod revenue_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_are_accepted() {
        assert_eq!(
            RevenueValue::from_json(&json!(300)),
            Some(RevenueValue::Int(300))
        );
        assert_eq!(
            RevenueValue::from_json(&json!(10.5)),
            Some(RevenueValue::Float(10.5))
        );
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        assert_eq!(
            RevenueValue::from_json(&json!("123.45")),
            Some(RevenueValue::NumericString("123.45".to_string()))
        );
    }

    #[test]
    fn test_everything_else_is_rejected() {
        assert_eq!(RevenueValue::from_json(&json!(true)), None);
        assert_eq!(RevenueValue::from_json(&json!(null)), None);
        assert_eq!(RevenueValue::from_json(&json!({"amount": 10})), None);
        assert_eq!(RevenueValue::from_json(&json!([10])), None);
        assert_eq!(RevenueValue::from_json(&json!("ten dollars")), None);
    }

    #[test]
    fn test_param_string_round_trips_value() {
        assert_eq!(RevenueValue::Int(300).to_param_string(), "300");
        assert_eq!(
            RevenueValue::NumericString("123.45".to_string()).to_param_string(),
            "123.45"
        );
    }
}
