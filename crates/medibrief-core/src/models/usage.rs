//! Token accounting for a generation call.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

const TOKENS_PER_RATE_UNIT: f64 = 1_000_000.0;

/// Tokens the model reports for one request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TokenCount {
    pub input: u64,
    pub output: u64,
}

impl TokenCount {
    pub fn total(self) -> u64 {
        self.input + self.output
    }
}

/// USD rates per million tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModelPricing {
    pub input_per_million: f64,
    pub output_per_million: f64,
}

impl ModelPricing {
    pub fn cost_usd(&self, tokens: TokenCount) -> f64 {
        (tokens.input as f64 * self.input_per_million
            + tokens.output as f64 * self.output_per_million)
            / TOKENS_PER_RATE_UNIT
    }
}

/// Token counts and, when the model's rates are known, their cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TokenUsage {
    pub tokens: TokenCount,
    pub cost_usd: Option<f64>,
}

impl TokenUsage {
    pub fn new(tokens: TokenCount, pricing: Option<ModelPricing>) -> Self {
        Self {
            tokens,
            cost_usd: pricing.map(|p| p.cost_usd(tokens)),
        }
    }
}
