//! JSON output formatting.

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use cloudhub_core::listing::{run_query, Item, Query};

    #[test]
    fn test_format_json_query_result_is_camel_case() {
        let items = vec![Item::event(
            "AI Summit",
            Utc.with_ymd_and_hms(2024, 2, 10, 17, 0, 0).unwrap(),
        )
        .with_id("e-1")];
        let result = run_query(&items, &Query::new()).unwrap();

        let output = format_json(&result);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["totalMatching"], 1);
        assert_eq!(value["hasMore"], false);
        assert_eq!(value["items"][0]["id"], "e-1");
        assert!(!output.contains('\n'));
    }
}
