//! Token counts and cost estimates for Converse responses.

use medibrief_core::models::usage::{ModelPricing, TokenCount, TokenUsage};

/// Rates per million tokens, matched by id fragment so regional inference
/// profiles (`us.`, `eu.`, `apac.`) resolve to the same entry. Approximate.
const PRICING: &[(&str, ModelPricing)] = &[
    ("claude-opus-4", rates(15.0, 75.0)),
    ("claude-sonnet-4", rates(3.0, 15.0)),
    ("claude-haiku-4", rates(1.0, 5.0)),
    ("nova-pro", rates(0.8, 3.2)),
    ("nova-lite", rates(0.06, 0.24)),
];

const fn rates(input_per_million: f64, output_per_million: f64) -> ModelPricing {
    ModelPricing {
        input_per_million,
        output_per_million,
    }
}

/// Token counts reported in a Converse response. Negative counts read as 0.
pub fn token_count(usage: &aws_sdk_bedrockruntime::types::TokenUsage) -> TokenCount {
    TokenCount {
        input: u64::try_from(usage.input_tokens).unwrap_or(0),
        output: u64::try_from(usage.output_tokens).unwrap_or(0),
    }
}

pub fn get_pricing(model_id: &str) -> Option<ModelPricing> {
    PRICING
        .iter()
        .find(|(fragment, _)| model_id.contains(fragment))
        .map(|(_, pricing)| *pricing)
}

/// Usage for `model_id`; the cost is `None` when its rates are unknown.
pub fn usage_for(model_id: &str, tokens: TokenCount) -> TokenUsage {
    TokenUsage::new(tokens, get_pricing(model_id))
}
