// SPDX-FileCopyrightText: 2026 Raychain Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raycast AI backend adapter for the Raychain LLM framework.
//!
//! This crate implements [`Llm`] over the host's AI-ask capability,
//! letting chains call Raycast's built-in model like any other
//! backend. Each prompt in a batch becomes exactly one host round
//! trip, issued strictly in input order.

pub mod config;
pub mod host;
pub mod model;

use async_trait::async_trait;
use raychain_core::{Generation, Llm, LlmResult, RaychainError};
use serde_json::{Map, Value};
use tracing::{debug, info};

pub use crate::config::{RaycastAiConfig, load_config, load_config_from_path, load_config_from_str};
pub use crate::host::{AiAsk, AskOptions};
pub use crate::model::{Creativity, Model};

/// Raycast AI backend implementing [`Llm`].
///
/// Holds the model and creativity settings plus a handle to the host
/// capability; carries no other state, so successive `generate` calls
/// are independent. The fields are public for explicit reassignment,
/// but each batch snapshots them once before its first request.
pub struct RaycastAi<H: AiAsk> {
    host: H,
    /// Model identifier sent with every host request.
    pub model: Model,
    /// Creativity level sent with every host request.
    pub creativity: Creativity,
}

impl<H: AiAsk> RaycastAi<H> {
    /// Creates an adapter with default settings
    /// (`text-davinci-003`, `medium`).
    pub fn new(host: H) -> Self {
        Self::with_config(host, RaycastAiConfig::default())
    }

    /// Creates an adapter from the given configuration.
    pub fn with_config(host: H, config: RaycastAiConfig) -> Self {
        info!(
            model = %config.model,
            creativity = %config.creativity,
            "Raycast AI adapter initialized"
        );
        Self {
            host,
            model: config.model,
            creativity: config.creativity,
        }
    }

    /// The options record for the current settings.
    fn ask_options(&self) -> AskOptions {
        AskOptions {
            model: self.model,
            creativity: self.creativity,
        }
    }
}

#[async_trait]
impl<H: AiAsk> Llm for RaycastAi<H> {
    fn llm_type(&self) -> &'static str {
        "raycastai"
    }

    fn is_serializable(&self) -> bool {
        true
    }

    fn invocation_params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("model".into(), self.model.to_string().into());
        params.insert("creativity".into(), self.creativity.to_string().into());
        params
    }

    fn identifying_params(&self) -> Map<String, Value> {
        let mut params = self.invocation_params();
        params.insert("model_name".into(), self.model.to_string().into());
        params
    }

    /// Issues one host ask per prompt, sequentially: the request for
    /// prompt *i+1* starts only after the request for prompt *i*
    /// resolves, so output order equals input order. The first host
    /// failure aborts the batch; no partial result is returned.
    ///
    /// An absent or empty host response becomes an empty-string
    /// candidate, never an error.
    async fn generate(&self, prompts: &[String]) -> Result<LlmResult, RaychainError> {
        // One snapshot per batch; every request carries the same options.
        let options = self.ask_options();
        let mut generations = Vec::with_capacity(prompts.len());

        for (index, prompt) in prompts.iter().enumerate() {
            debug!(index, model = %options.model, "sending prompt to host AI");
            let text = self.host.ask(prompt, &options).await?.unwrap_or_default();
            generations.push(vec![Generation::new(text)]);
        }

        Ok(LlmResult { generations })
    }
}
