use serde::{Deserialize, Serialize};

pub const DEFAULT_SMALL_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BIG_MODEL: &str = "gpt-4";
pub const DEFAULT_SMALL_MAX_TOKENS: u32 = 10;
pub const DEFAULT_BIG_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Model selection and sampling limits for the two pipeline stages.
///
/// The "small" model classifies the query into a topic; the "big" model
/// writes the HTML fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmSettings {
    small_model: String,
    big_model: String,
    small_max_tokens: u32,
    big_max_tokens: u32,
    temperature: f32,
}

impl LlmSettings {
    pub fn new() -> Self {
        Self {
            small_model: DEFAULT_SMALL_MODEL.to_string(),
            big_model: DEFAULT_BIG_MODEL.to_string(),
            small_max_tokens: DEFAULT_SMALL_MAX_TOKENS,
            big_max_tokens: DEFAULT_BIG_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_small_model(mut self, model: impl Into<String>) -> Self {
        self.small_model = model.into();
        self
    }

    pub fn with_big_model(mut self, model: impl Into<String>) -> Self {
        self.big_model = model.into();
        self
    }

    pub fn with_small_max_tokens(mut self, max_tokens: u32) -> Self {
        // A zero ceiling would make every completion empty
        self.small_max_tokens = max_tokens.max(1);
        self
    }

    pub fn with_big_max_tokens(mut self, max_tokens: u32) -> Self {
        self.big_max_tokens = max_tokens.max(1);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn small_model(&self) -> &str {
        &self.small_model
    }

    pub fn big_model(&self) -> &str {
        &self.big_model
    }

    pub fn small_max_tokens(&self) -> u32 {
        self.small_max_tokens
    }

    pub fn big_max_tokens(&self) -> u32 {
        self.big_max_tokens
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self::new()
    }
}
