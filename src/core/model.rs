use std::fmt;
use std::str::FromStr;

use super::error::LlmError;

/// Prefix that marks a model as accepting sampling controls.
const SAMPLING_PREFIX: &str = "gpt-";

pub const DEFAULT_MODELS: [&str; 3] = ["gpt-4o-mini", "gpt-5-mini", "o3-mini"];

/// Whether a model accepts `temperature` and `seed`.
///
/// Reasoning models reject both with a request-validation error, so they must
/// be omitted from the payload entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    Sampling,
    Reasoning,
}

impl ModelFamily {
    pub fn of(model: &str) -> Self {
        if model.starts_with(SAMPLING_PREFIX) {
            ModelFamily::Sampling
        } else {
            ModelFamily::Reasoning
        }
    }

    pub fn supports_sampling(self) -> bool {
        self == ModelFamily::Sampling
    }
}

/// Ordered, non-empty list of model ids. Position is priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelList(Vec<String>);

impl ModelList {
    pub fn new<I, S>(models: I) -> Result<Self, LlmError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let models: Vec<String> = models
            .into_iter()
            .map(|m| {
                let m: String = m.into();
                m.trim().to_string()
            })
            .filter(|m| !m.is_empty())
            .collect();

        if models.is_empty() {
            return Err(LlmError::Configuration(
                "Model list is empty. Provide at least one model id.".to_string(),
            ));
        }

        Ok(Self(models))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn primary(&self) -> &str {
        &self.0[0]
    }
}

impl Default for ModelList {
    fn default() -> Self {
        Self(DEFAULT_MODELS.iter().map(|m| m.to_string()).collect())
    }
}

/// Parses comma-separated ids, e.g. `gpt-4o-mini, gpt-5-mini,o3-mini`.
impl FromStr for ModelList {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.split(','))
    }
}

impl fmt::Display for ModelList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_by_prefix() {
        assert_eq!(ModelFamily::of("gpt-4o-mini"), ModelFamily::Sampling);
        assert_eq!(ModelFamily::of("gpt-5-mini"), ModelFamily::Sampling);
        assert_eq!(ModelFamily::of("o3-mini"), ModelFamily::Reasoning);
        assert_eq!(ModelFamily::of("o1"), ModelFamily::Reasoning);
        // Case matters, the convention is lowercase.
        assert_eq!(ModelFamily::of("GPT-4o"), ModelFamily::Reasoning);
    }

    #[test]
    fn test_parse_trims_and_drops_blanks() {
        let models: ModelList = " gpt-4o-mini, ,o3-mini ,".parse().unwrap();
        assert_eq!(models.iter().collect::<Vec<_>>(), vec!["gpt-4o-mini", "o3-mini"]);
        assert_eq!(models.primary(), "gpt-4o-mini");
        assert_eq!(models.to_string(), "gpt-4o-mini,o3-mini");
    }

    #[test]
    fn test_empty_list_is_configuration_error() {
        assert!(matches!(
            " , ".parse::<ModelList>(),
            Err(LlmError::Configuration(_))
        ));
        assert!(matches!(
            ModelList::new(Vec::<String>::new()),
            Err(LlmError::Configuration(_))
        ));
    }

    #[test]
    fn test_default_order() {
        let models = ModelList::default();
        assert_eq!(models.iter().collect::<Vec<_>>(), DEFAULT_MODELS.to_vec());
    }
}
