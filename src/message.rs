use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of one forwarded datagram: the stream id plus a single log line.
///
/// Each datagram carries exactly one message; the transport's own
/// boundaries are the only framing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WireMessage {
    pub id: String,
    pub line: Value,
}

impl WireMessage {
    /// Frame one raw line under a stream id.
    ///
    /// The line is carried as structured JSON when it parses as JSON and
    /// verbatim as a string otherwise, so numeric or object-shaped log
    /// lines arrive as data while free text passes through losslessly.
    /// Receivers rely on getting plain strings for non-JSON lines, so a
    /// parse failure is not an error.
    pub fn frame(id: &str, line: &str) -> Self {
        let line = serde_json::from_str(line).unwrap_or_else(|_| Value::String(line.to_owned()));
        Self {
            id: id.to_owned(),
            line,
        }
    }

    /// Encode to the UTF-8 JSON datagram payload.
    pub fn to_bytes(&self) -> Vec<u8> {
        // A string id plus an already-parsed JSON value always serializes.
        serde_json::to_vec(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn roundtrip(id: &str, line: &str) -> WireMessage {
        let bytes = WireMessage::frame(id, line).to_bytes();
        serde_json::from_slice(&bytes).expect("datagram payload should be valid JSON")
    }

    #[test]
    fn json_lines_are_forwarded_as_structured_values() {
        let message = roundtrip("s1", "{\"a\":1}");
        assert_eq!(message.id, "s1");
        assert_eq!(message.line, json!({"a": 1}));
    }

    #[test]
    fn numeric_lines_are_forwarded_as_numbers() {
        let message = roundtrip("s1", "42");
        assert_eq!(message.line, json!(42));
    }

    #[test]
    fn free_text_falls_back_to_a_plain_string() {
        let message = roundtrip("s1", "hello world");
        assert_eq!(message.line, json!("hello world"));
    }

    #[test]
    fn truncated_json_falls_back_to_a_plain_string() {
        let message = roundtrip("s1", "{\"a\":");
        assert_eq!(message.line, json!("{\"a\":"));
    }

    #[test]
    fn empty_lines_are_still_framed() {
        let message = roundtrip("s1", "");
        assert_eq!(message.line, json!(""));
    }

    #[test]
    fn id_is_carried_unchanged() {
        let message = roundtrip("prod server", "ready");
        assert_eq!(message.id, "prod server");
    }
}
