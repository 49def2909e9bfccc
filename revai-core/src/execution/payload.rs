//! Submission payload shaping.

use crate::types::JobOptions;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Merge the common optional fields into `payload`.
///
/// Absent options are left out entirely; present ones (including `0` and
/// empty strings) are written verbatim.
pub fn enhance_payload(mut payload: Map<String, Value>, options: &JobOptions) -> Map<String, Value> {
    if let Some(metadata) = &options.metadata {
        payload.insert("metadata".to_string(), Value::from(metadata.as_str()));
    }
    if let Some(callback_url) = &options.callback_url {
        payload.insert("callback_url".to_string(), Value::from(callback_url.as_str()));
    }
    if let Some(seconds) = options.delete_after_seconds {
        payload.insert("delete_after_seconds".to_string(), Value::from(seconds));
    }
    payload
}

/// Serialize a payload with its top-level keys in sorted order.
///
/// Used for the `options` part of multipart uploads so the text is
/// reproducible regardless of how the map was built.
pub fn to_sorted_json(payload: &Map<String, Value>) -> Result<String, serde_json::Error> {
    let sorted: BTreeMap<&String, &Value> = payload.iter().collect();
    serde_json::to_string(&sorted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> Map<String, Value> {
        let mut m = Map::new();
        m.insert("media_url".into(), json!("http://x/a.mp3"));
        m
    }

    #[test]
    fn absent_options_are_omitted() {
        let payload = enhance_payload(base(), &JobOptions::default());
        assert_eq!(Value::Object(payload), json!({"media_url": "http://x/a.mp3"}));
    }

    #[test]
    fn present_options_are_included_verbatim() {
        let options = JobOptions::new()
            .with_metadata("t")
            .with_callback_url("https://cb/")
            .with_delete_after_seconds(0);
        let payload = enhance_payload(base(), &options);
        assert_eq!(
            Value::Object(payload),
            json!({
                "media_url": "http://x/a.mp3",
                "metadata": "t",
                "callback_url": "https://cb/",
                "delete_after_seconds": 0
            })
        );
    }

    #[test]
    fn sorted_json_orders_keys() {
        let options = JobOptions::new().with_metadata("m").with_delete_after_seconds(5);
        let payload = enhance_payload(Map::new(), &options);
        assert_eq!(
            to_sorted_json(&payload).unwrap(),
            r#"{"delete_after_seconds":5,"metadata":"m"}"#
        );
    }
}
