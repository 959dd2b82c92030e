use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Response {
    pub id: String,
    pub model: String,
    pub output: Vec<OutputItem>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// Reasoning models emit `reasoning` items ahead of the message; anything that
/// is not a message is skipped.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    Message(OutputMessage),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    #[serde(default)]
    pub total_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct OutputMessage {
    #[serde(default)]
    pub content: Vec<MessageContent>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    OutputText {
        text: String,
    },
    Refusal {
        /// The refusal explanation from the model.
        refusal: String,
    },
    #[serde(other)]
    Other,
}

impl Response {
    /// All `output_text` parts of all messages, in order.
    pub fn output_text(&self) -> String {
        self.texts().collect()
    }

    pub fn refusal(&self) -> Option<&str> {
        self.contents().find_map(|c| match c {
            MessageContent::Refusal { refusal } => Some(refusal.as_str()),
            _ => None,
        })
    }

    fn contents(&self) -> impl Iterator<Item = &MessageContent> {
        self.output
            .iter()
            .filter_map(|item| match item {
                OutputItem::Message(message) => Some(message.content.iter()),
                OutputItem::Other => None,
            })
            .flatten()
    }

    fn texts(&self) -> impl Iterator<Item = &str> {
        self.contents().filter_map(|c| match c {
            MessageContent::OutputText { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reasoning_items_are_skipped() {
        let raw = json!({
            "id": "resp_1",
            "model": "o3-mini-2025-01-31",
            "output": [
                { "id": "rs_1", "type": "reasoning", "summary": [] },
                {
                    "id": "msg_1",
                    "type": "message",
                    "status": "completed",
                    "role": "assistant",
                    "content": [
                        { "type": "output_text", "text": "The stapler ", "annotations": [] },
                        { "type": "output_text", "text": "foresees all.", "annotations": [] }
                    ]
                }
            ],
            "usage": { "input_tokens": 12, "output_tokens": 7, "total_tokens": 19 }
        });

        let response: Response = serde_json::from_value(raw).unwrap();
        assert_eq!(response.output_text(), "The stapler foresees all.");
        assert!(response.refusal().is_none());
        assert_eq!(response.usage.unwrap().output_tokens, 7);
    }

    #[test]
    fn test_refusal_is_exposed() {
        let raw = json!({
            "id": "resp_2",
            "model": "gpt-4o-mini",
            "output": [{
                "type": "message",
                "content": [{ "type": "refusal", "refusal": "[REDACTED]" }]
            }]
        });

        let response: Response = serde_json::from_value(raw).unwrap();
        assert_eq!(response.output_text(), "");
        assert_eq!(response.refusal(), Some("[REDACTED]"));
        assert!(response.usage.is_none());
    }
}
