use serde_json::Value;

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", extract(value));
}

// Well-known result fields, most decision-relevant first. Every entry is a
// field carried by one of the core output types.
const PRIORITY_KEYS: [&str; 6] = [
    "overall_risk_level",
    "adjusted_score",
    "score",
    "default_probability",
    "risk_level",
    "total_default_risk",
];

/// Pick the single most relevant value from a result envelope, falling back
/// to the first field of the result object.
fn extract(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        for key in &PRIORITY_KEYS {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    return format_minimal(val);
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_minimal(val));
        }
    }

    format_minimal(result_obj)
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_property_analysis_reduces_to_overall_level() {
        let envelope = json!({
            "result": {
                "property_id": "prop-42",
                "overall_risk_level": "low",
                "total_default_risk": "0.1149"
            }
        });
        assert_eq!(extract(&envelope), "low");
    }

    #[test]
    fn test_scoring_output_prefers_adjusted_score() {
        let envelope = json!({
            "result": {
                "adjusted_score": "57.46",
                "base_score": "55.25"
            }
        });
        assert_eq!(extract(&envelope), "57.46");
    }

    #[test]
    fn test_total_default_risk_as_fallback_key() {
        let envelope = json!({"result": {"total_default_risk": "0.1149"}});
        assert_eq!(extract(&envelope), "0.1149");
    }

    #[test]
    fn test_unknown_shape_falls_back_to_first_field() {
        let value = json!({"historical_average": "170"});
        assert_eq!(extract(&value), "historical_average: 170");
    }
}
