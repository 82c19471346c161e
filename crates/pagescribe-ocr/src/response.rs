// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Interpretation of the OCR service's JSON response.
//
// Expected shape:
//
//     {"message": "Success",
//      "result": [{"prediction": [{"ocr_text": "...", "score": 0.98}, ...]}]}
//
// Only the first `result` entry is consulted. Missing fields produce empty
// text rather than an error; only a body that is not JSON at all, or one
// that carries a failure message instead of results, is rejected.

use pagescribe_core::error::{PagescribeError, Result};
use serde_json::Value;

use crate::client::OcrOutput;

/// Parse a response body into an [`OcrOutput`].
///
/// # Errors
///
/// - [`PagescribeError::Response`] if the body is not valid JSON.
/// - [`PagescribeError::Processing`] if the body has no `result` list and a
///   top-level `message` other than "Success".
pub fn interpret(body: &[u8]) -> Result<OcrOutput> {
    let json: Value = serde_json::from_slice(body)
        .map_err(|e| PagescribeError::Response(format!("malformed JSON body: {e}")))?;

    if !json.get("result").is_some_and(Value::is_array) {
        match json.get("message").and_then(Value::as_str) {
            Some(message) if !message.eq_ignore_ascii_case("success") => {
                return Err(PagescribeError::Processing(message.to_owned()));
            }
            _ => {}
        }
    }

    Ok(OcrOutput {
        text: prediction_text(&json),
        confidence: mean_score(&json),
    })
}

/// Join the `ocr_text` of every prediction in the first result with `\n`.
pub fn prediction_text(json: &Value) -> String {
    predictions(json)
        .iter()
        .filter_map(|p| p.get("ocr_text").and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join("\n")
}

fn mean_score(json: &Value) -> Option<f64> {
    let scores: Vec<f64> = predictions(json)
        .iter()
        .filter_map(|p| p.get("score").and_then(Value::as_f64))
        .collect();
    if scores.is_empty() {
        None
    } else {
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }
}

fn predictions(json: &Value) -> &[Value] {
    json.get("result")
        .and_then(Value::as_array)
        .and_then(|results| results.first())
        .and_then(|first| first.get("prediction"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn joins_predictions_in_order() {
        let body = json!({
            "message": "Success",
            "result": [{
                "prediction": [
                    {"ocr_text": "Meeting Notes"},
                    {"ocr_text": "10/05/2024"},
                    {"ocr_text": "body text"}
                ]
            }]
        });
        let out = interpret(body.to_string().as_bytes()).unwrap();
        assert_eq!(out.text, "Meeting Notes\n10/05/2024\nbody text");
        assert_eq!(out.confidence, None);
    }

    #[test]
    fn only_first_result_is_used() {
        let body = json!({
            "result": [
                {"prediction": [{"ocr_text": "first"}]},
                {"prediction": [{"ocr_text": "second"}]}
            ]
        });
        assert_eq!(interpret(body.to_string().as_bytes()).unwrap().text, "first");
    }

    #[test]
    fn entries_without_text_are_skipped() {
        let body = json!({
            "result": [{"prediction": [{"ocr_text": "a"}, {"label": "x"}, {"ocr_text": "b"}]}]
        });
        assert_eq!(interpret(body.to_string().as_bytes()).unwrap().text, "a\nb");
    }

    #[test]
    fn missing_fields_yield_empty_text() {
        for body in [
            json!({}),
            json!({"result": []}),
            json!({"result": [{}]}),
            json!({"result": [{"prediction": "nope"}]}),
        ] {
            let out = interpret(body.to_string().as_bytes()).unwrap();
            assert_eq!(out.text, "", "body {body}");
        }
    }

    #[test]
    fn scores_are_averaged() {
        let body = json!({
            "result": [{"prediction": [
                {"ocr_text": "a", "score": 0.5},
                {"ocr_text": "b", "score": 1.0}
            ]}]
        });
        let out = interpret(body.to_string().as_bytes()).unwrap();
        assert_eq!(out.confidence, Some(0.75));
    }

    #[test]
    fn non_json_is_response_error() {
        let err = interpret(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, PagescribeError::Response(_)), "got {err}");
    }

    #[test]
    fn failure_message_is_processing_error() {
        let body = json!({"message": "Model is not trained yet"});
        match interpret(body.to_string().as_bytes()).unwrap_err() {
            PagescribeError::Processing(msg) => assert_eq!(msg, "Model is not trained yet"),
            other => panic!("unexpected error variant: {other}"),
        }
    }
}
