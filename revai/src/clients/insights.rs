//! Payload shaping shared by the text/transcript based insights APIs.

use revai_core::RevAiError;
use revai_core::execution::payload::enhance_payload;
use revai_core::types::{InsightsInput, InsightsJobOptions};
use serde_json::{Map, Value};

/// Build `{text | json, language?, metadata?, callback_url?, delete_after_seconds?}`.
///
/// Exactly one of `text` and `json` must be present.
pub(crate) fn insights_payload(
    input: InsightsInput,
    options: &InsightsJobOptions,
) -> Result<Map<String, Value>, RevAiError> {
    let mut payload = Map::new();
    match (input.text, input.json) {
        (Some(_), Some(_)) => {
            return Err(RevAiError::invalid_argument(
                "only one of text or json may be provided",
            ));
        }
        (None, None) => {
            return Err(RevAiError::invalid_argument("text or json must be provided"));
        }
        (Some(text), None) => {
            if text.is_empty() {
                return Err(RevAiError::invalid_argument("text must be provided"));
            }
            payload.insert("text".to_string(), Value::String(text));
        }
        (None, Some(transcript)) => {
            payload.insert("json".to_string(), transcript.to_json()?);
        }
    }
    if let Some(language) = &options.language {
        payload.insert("language".to_string(), Value::from(language.as_str()));
    }
    Ok(enhance_payload(payload, &options.job))
}
