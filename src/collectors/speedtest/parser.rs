//! Decoding of captured Speedtest CLI output
//!
//! The CLI is asked for `--format=json`, but the capture also contains
//! whatever the process wrote to stderr (progress lines, license notices,
//! TLS warnings). The parser therefore tries the whole trimmed capture
//! first and then falls back to scanning individual lines for a JSON
//! object. Every decode problem is converted into a [`ParseError`] - the
//! retry loop treats a parse failure exactly like the CLI reporting its
//! own error, and nothing here ever panics on untrusted output.

use serde_json::Value;

use super::errors::ParseError;
use super::record::SpeedtestRecord;

/// Kind discriminator the CLI attaches to a completed measurement
const RESULT_KIND: &str = "result";

/// Decodes one captured output into a completed measurement record
///
/// The kind discriminator is probed before the full record is decoded: the
/// CLI reports its own failures (host resolution, configuration) as JSON
/// objects of a different kind that carry none of the measurement fields,
/// and those must surface as [`ParseError::UnexpectedKind`] rather than as
/// missing-field noise.
pub fn parse_result(captured: &str) -> Result<SpeedtestRecord, ParseError> {
    let value = decode_object(captured)?;
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if kind != RESULT_KIND {
        return Err(ParseError::UnexpectedKind {
            kind: kind.to_string(),
        });
    }
    Ok(serde_json::from_value(value)?)
}

/// Finds the JSON object in a possibly noisy capture
///
/// When stderr noise surrounds the document, the CLI's JSON is still a
/// single line; the line scan prefers a result-kind object so a stray
/// progress object never shadows the measurement.
fn decode_object(captured: &str) -> Result<Value, ParseError> {
    let trimmed = captured.trim();
    if trimmed.is_empty() {
        return Err(ParseError::NoJsonObject);
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        if value.is_object() {
            return Ok(value);
        }
    }

    let mut first_object = None;
    for line in trimmed.lines() {
        let line = line.trim();
        if !line.starts_with('{') {
            continue;
        }
        let Ok(value) = serde_json::from_str::<Value>(line) else {
            continue;
        };
        if !value.is_object() {
            continue;
        }
        if value.get("type").and_then(Value::as_str) == Some(RESULT_KIND) {
            return Ok(value);
        }
        first_object.get_or_insert(value);
    }

    first_object.ok_or(ParseError::NoJsonObject)
}
