use serde_json::{Map, Value};

// Field names seen across versions of the hacker profile endpoint. Best effort.
const SOLVED_KEYS: [&str; 6] = [
    "solved_challenges",
    "solved_count",
    "problems_solved",
    "challenges_solved",
    "total_solved",
    "solved",
];

pub fn extract(body: &str) -> Option<String> {
    let root: Value = serde_json::from_str(body).ok()?;
    // profile payloads are either bare or wrapped in {"model": {...}}
    let record = root.get("model").and_then(Value::as_object).or_else(|| root.as_object())?;

    let solved = primary_count(record).or_else(|| track_total(record))?;
    Some(format!("Solved {}", solved))
}

fn primary_count(record: &Map<String, Value>) -> Option<u64> {
    SOLVED_KEYS.iter().find_map(|k| record.get(*k).and_then(as_count))
}

// Sum of per-track counters ("algorithms_solved", ...) and tracks[*].solved.
// An overflowing sum is garbage, not a count.
fn track_total(record: &Map<String, Value>) -> Option<u64> {
    let mut total = 0u64;
    for (k, v) in record {
        if k.ends_with("_solved") {
            total = total.checked_add(as_count(v).unwrap_or(0))?;
        }
    }
    if let Some(tracks) = record.get("tracks").and_then(Value::as_array) {
        for t in tracks {
            total = total.checked_add(t.get("solved").and_then(as_count).unwrap_or(0))?;
        }
    }
    if total > 0 { Some(total) } else { None }
}

fn as_count(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => super::text::parse_count(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_field_at_root() {
        assert_eq!(extract(r#"{"username":"x","solved_challenges":321}"#).as_deref(), Some("Solved 321"));
    }

    #[test]
    fn nested_model_and_string_value() {
        let body = r#"{"model":{"username":"x","problems_solved":"1,204"}}"#;
        assert_eq!(extract(body).as_deref(), Some("Solved 1204"));
    }

    #[test]
    fn primary_order_wins() {
        let body = r#"{"solved": 3, "solved_count": 10}"#;
        assert_eq!(extract(body).as_deref(), Some("Solved 10"));
    }

    #[test]
    fn aggregates_per_track_counters() {
        let body = r#"{"model":{"algorithms_solved":40,"python_solved":"12","tracks":[{"name":"sql","solved":8},{"name":"java"}]}}"#;
        assert_eq!(extract(body).as_deref(), Some("Solved 60"));
    }

    #[test]
    fn missing_fields_is_none() {
        assert!(extract(r#"{"model":{"username":"x","followers_count":5}}"#).is_none());
        assert!(extract(r#"{"algorithms_solved":0}"#).is_none());
    }

    #[test]
    fn overflowing_track_sum_is_none() {
        let body = r#"{"algorithms_solved":18446744073709551615,"python_solved":1}"#;
        assert!(extract(body).is_none());
        let body = r#"{"tracks":[{"solved":18446744073709551615},{"solved":"1"}]}"#;
        assert!(extract(body).is_none());
    }

    #[test]
    fn malformed_body_is_none() {
        assert!(extract("<html>blocked</html>").is_none());
        assert!(extract("[1,2,3]").is_none());
    }
}
