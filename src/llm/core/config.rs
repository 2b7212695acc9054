//! Generation configuration parameters

use serde::{Deserialize, Serialize};

/// Output cap applied to every persona reply and summary
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Sampling temperature applied to every persona reply and summary
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Parameters for controlling text generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Randomness (0.0-1.0, higher = more random)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl GenerationConfig {
    /// Create a new configuration with the specified max tokens
    pub fn new(max_tokens: u32) -> Self {
        Self {
            max_tokens,
            temperature: None,
        }
    }

    /// Set the temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TOKENS).with_temperature(DEFAULT_TEMPERATURE)
    }
}
