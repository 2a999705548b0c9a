//! Custom deserializers for flexible parameter parsing in sequential-tools.
//!
//! Calling agents are language models and are not always precise about JSON
//! types in nested recommendation fields. These deserializers accept the common
//! near-misses while still rejecting values that make no sense.

use serde::{Deserialize, Deserializer};

/// Deserializes a tool confidence in the closed range 0.0-1.0.
///
/// # Accepted Formats
///
/// * **Number**: `0.85`
/// * **String numeric**: `"0.85"`
///
/// # Errors
///
/// Returns an error if the value is not numeric, not finite, or outside 0.0-1.0.
pub fn de_confidence<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let v = serde_json::Value::deserialize(deserializer)?;
    let val = match v {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom("invalid numeric for confidence"))?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
            D::Error::custom(format!("Invalid confidence '{}'. Use a number 0.0-1.0", s))
        })?,
        other => {
            return Err(D::Error::custom(format!(
                "invalid type for confidence: {}",
                other
            )));
        }
    };
    if !val.is_finite() || !(0.0..=1.0).contains(&val) {
        return Err(D::Error::custom(format!(
            "confidence {} is outside 0.0-1.0",
            val
        )));
    }
    Ok(val)
}

/// Deserializes a tool priority accepting integers, floats (rounded), and numeric strings.
/// Examples: 1, 1.0, "1", "1.6" -> 2
pub fn de_priority_forgiving<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let v = serde_json::Value::deserialize(deserializer)?;
    let as_rounded = |f: f64| -> Result<i64, D::Error> {
        if !f.is_finite() {
            return Err(D::Error::custom("non-finite numeric for priority"));
        }
        Ok(f.round() as i64)
    };
    match v {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                as_rounded(f)
            } else {
                Err(D::Error::custom("invalid numeric for priority"))
            }
        }
        serde_json::Value::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                Ok(i)
            } else if let Ok(f) = s.parse::<f64>() {
                as_rounded(f)
            } else {
                Err(D::Error::custom(format!("invalid priority value: '{}'", s)))
            }
        }
        other => Err(D::Error::custom(format!(
            "invalid type for priority: {}",
            other
        ))),
    }
}

/// Deserializes Option<u32> accepting integers, floats (rounded), and numeric strings.
/// Examples: 2, 2.0, "2" -> 2; null or "" -> None
///
/// Negative values and values above u32::MAX are rejected rather than clamped.
pub fn de_option_u32_forgiving<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let from_f64 = |f: f64| -> Result<Option<u32>, D::Error> {
        if !f.is_finite() {
            return Err(D::Error::custom("non-finite numeric for u32"));
        }
        let r = f.round();
        if r < 0.0 || r > f64::from(u32::MAX) {
            return Err(D::Error::custom(format!("{} is outside 0-{}", f, u32::MAX)));
        }
        Ok(Some(r as u32))
    };
    let opt = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(v) = opt else { return Ok(None) };
    match v {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u32::try_from(u)
                    .map(Some)
                    .map_err(|_| D::Error::custom(format!("{} is outside 0-{}", u, u32::MAX)))
            } else if let Some(f) = n.as_f64() {
                from_f64(f)
            } else {
                Err(D::Error::custom("invalid numeric for u32"))
            }
        }
        serde_json::Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            if let Ok(u) = s.parse::<u64>() {
                u32::try_from(u)
                    .map(Some)
                    .map_err(|_| D::Error::custom(format!("{} is outside 0-{}", u, u32::MAX)))
            } else if let Ok(f) = s.parse::<f64>() {
                from_f64(f)
            } else {
                Err(D::Error::custom(format!("invalid numeric string: '{}'", s)))
            }
        }
        other => Err(D::Error::custom(format!("invalid type for u32: {}", other))),
    }
}

/// Deserializes an optional list of strings with support for string, array, or null values.
///
/// * **Null**: `null` → `None`
/// * **String**: `"search"` → `Some(vec!["search"])`
/// * **Array**: `["a", "b"]` → `Some(vec!["a", "b"])`; non-string elements are stringified
pub fn de_option_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let opt = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(v) = opt else { return Ok(None) };
    match v {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(vec![s])),
        serde_json::Value::Array(arr) => {
            let mut out = Vec::with_capacity(arr.len());
            for el in arr {
                match el {
                    serde_json::Value::String(s) => out.push(s),
                    other => out.push(other.to_string()),
                }
            }
            Ok(Some(out))
        }
        other => Err(D::Error::custom(format!(
            "invalid type for string list: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use crate::thinking::ToolRecommendation;
    use serde_json::json;

    fn tool(confidence: serde_json::Value, priority: serde_json::Value) -> serde_json::Value {
        json!({
            "tool_name": "search_docs",
            "confidence": confidence,
            "rationale": "find the API",
            "priority": priority
        })
    }

    #[test]
    fn confidence_accepts_numeric_strings() {
        let rec: ToolRecommendation =
            serde_json::from_value(tool(json!("0.75"), json!(1))).unwrap();
        assert_eq!(rec.confidence, 0.75);
    }

    #[test]
    fn confidence_out_of_range_is_rejected() {
        assert!(serde_json::from_value::<ToolRecommendation>(tool(json!(1.5), json!(1))).is_err());
        assert!(serde_json::from_value::<ToolRecommendation>(tool(json!(-0.1), json!(1))).is_err());
    }

    #[test]
    fn priority_rounds_floats_and_strings() {
        let rec: ToolRecommendation =
            serde_json::from_value(tool(json!(0.5), json!(1.6))).unwrap();
        assert_eq!(rec.priority, 2);
        let rec: ToolRecommendation =
            serde_json::from_value(tool(json!(0.5), json!("3"))).unwrap();
        assert_eq!(rec.priority, 3);
    }

    #[test]
    fn alternatives_accept_single_string() {
        let mut value = tool(json!(0.5), json!(1));
        value["alternatives"] = json!("grep");
        let rec: ToolRecommendation = serde_json::from_value(value).unwrap();
        assert_eq!(rec.alternatives, Some(vec!["grep".to_string()]));
    }

    #[test]
    fn u32_forgiving_accepts_whole_floats_and_strings() {
        let de = |v: serde_json::Value| super::de_option_u32_forgiving(v);
        assert_eq!(de(json!(1.0)).unwrap(), Some(1));
        assert_eq!(de(json!(2)).unwrap(), Some(2));
        assert_eq!(de(json!(" 3 ")).unwrap(), Some(3));
        assert_eq!(de(json!(null)).unwrap(), None);
        assert_eq!(de(json!("")).unwrap(), None);
    }

    #[test]
    fn u32_forgiving_rejects_out_of_range() {
        let de = |v: serde_json::Value| super::de_option_u32_forgiving(v);
        assert!(de(json!(-1)).is_err());
        assert!(de(json!(5_000_000_000u64)).is_err());
        assert!(de(json!("many")).is_err());
        assert!(de(json!(true)).is_err());
    }

    #[test]
    fn missing_alternatives_is_none() {
        let rec: ToolRecommendation =
            serde_json::from_value(tool(json!(0.5), json!(1))).unwrap();
        assert_eq!(rec.alternatives, None);
        assert_eq!(rec.suggested_inputs, None);
    }
}
