//! Judge response decoding.
//!
//! The judge replies with a `generateContent` envelope:
//!
//! ```json
//! {"candidates":[{"content":{"parts":[{"text":"{\"score\":4,\"comment\":\"...\"}"}]}}]}
//! ```
//!
//! The inner `text` is itself JSON. Decoding never fails outward: any
//! missing piece yields [`EvaluationResult::failed`].

use super::result::EvaluationResult;
use serde_json::Value;

/// Decode a raw judge payload into an [`EvaluationResult`].
///
/// # Examples
///
/// ```
/// use ogiri_domain::decode_judge_response;
///
/// let raw = r#"{"candidates":[{"content":{"parts":[{"text":"{\"score\":9,\"comment\":\"wow\"}"}]}}]}"#;
/// let result = decode_judge_response(raw);
/// assert_eq!(result.score(), 6);
/// assert_eq!(result.comment(), "wow");
///
/// assert!(decode_judge_response("{}").is_failure());
/// ```
pub fn decode_judge_response(raw: &str) -> EvaluationResult {
    if raw.trim().is_empty() {
        return EvaluationResult::failed();
    }

    let Some(text) = candidate_text(raw) else {
        return EvaluationResult::failed();
    };

    let Some(inner) = extract_json_object(&text) else {
        return EvaluationResult::failed();
    };

    let Some(score) = inner.get("score").and_then(score_value) else {
        return EvaluationResult::failed();
    };

    let comment = inner.get("comment").and_then(Value::as_str).unwrap_or("");
    EvaluationResult::judged(score, comment)
}

/// `candidates[0].content.parts[0].text`
fn candidate_text(raw: &str) -> Option<String> {
    let document: Value = serde_json::from_str(raw).ok()?;
    let text = document
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()?;
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Parse the object between the first `{` and the last `}` so replies
/// wrapped in markdown fences still decode.
fn extract_json_object(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    let value: Value = serde_json::from_str(&text[start..=end]).ok()?;
    value.is_object().then_some(value)
}

fn score_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
