use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Request {
    pub model: String,

    pub input: Vec<InputMessage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    /// Rejected by reasoning models; must be absent for them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Rejected by reasoning models; must be absent for them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct InputMessage {
    pub role: InputMessageRole,
    pub content: String,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InputMessageRole {
    User,
    Assistant,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_sampling_fields_are_not_serialized() {
        let request = Request {
            model: "o3-mini".to_string(),
            input: vec![InputMessage {
                role: InputMessageRole::User,
                content: "hello".to_string(),
            }],
            instructions: Some("be mysterious".to_string()),
            temperature: None,
            seed: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "o3-mini",
                "input": [{ "role": "user", "content": "hello" }],
                "instructions": "be mysterious"
            })
        );
    }
}
