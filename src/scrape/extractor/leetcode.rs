use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsResponse {
    status: Option<String>,
    total_solved: Option<u64>,
    contest_rating: Option<f64>,
}

pub fn extract(body: &str) -> Option<String> {
    let stats: StatsResponse = serde_json::from_str(body).ok()?;
    if stats.status.as_deref().is_some_and(|s| s.eq_ignore_ascii_case("error")) {
        return None;
    }
    let total = stats.total_solved.filter(|n| *n > 0)?;
    match stats.contest_rating.filter(|r| r.is_finite() && *r > 0.0) {
        Some(r) => Some(format!("Solved {} • Rating {}", total, r.round() as i64)),
        None => Some(format!("Solved {}", total)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_and_rating() {
        assert_eq!(extract(r#"{"totalSolved": 900, "contestRating": 1550}"#).as_deref(), Some("Solved 900 • Rating 1550"));
    }

    #[test]
    fn solved_only() {
        assert_eq!(extract(r#"{"totalSolved": 900}"#).as_deref(), Some("Solved 900"));
    }

    #[test]
    fn fractional_rating_is_rounded() {
        let body = r#"{"status":"success","totalSolved":12,"easySolved":10,"contestRating":1612.73}"#;
        assert_eq!(extract(body).as_deref(), Some("Solved 12 • Rating 1613"));
    }

    #[test]
    fn error_status_and_zero_are_none() {
        assert!(extract(r#"{"status":"error","message":"user does not exist"}"#).is_none());
        assert!(extract(r#"{"totalSolved": 0}"#).is_none());
        assert!(extract(r#"{"contestRating": 1500}"#).is_none());
    }

    #[test]
    fn malformed_body_is_none() {
        assert!(extract("Application Error").is_none());
        assert!(extract(r#"{"totalSolved": "many"}"#).is_none());
    }
}
