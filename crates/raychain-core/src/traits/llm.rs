// SPDX-FileCopyrightText: 2026 Raychain Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The LLM backend contract that chain components call into.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::RaychainError;
use crate::types::LlmResult;

/// Call-option keys shared by every LLM backend, in the order chains
/// expose them. Backends that accept extra per-call options append
/// their own keys via [`Llm::call_keys`].
pub const BASE_CALL_KEYS: &[&str] =
    &["verbose", "callbacks", "tags", "metadata", "stop", "timeout", "signal"];

/// An interchangeable LLM backend.
///
/// Chains treat every backend uniformly through this trait: a batch
/// [`generate`](Llm::generate) operation plus synchronous introspection
/// accessors used for dispatch, logging, and serialization.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Fixed string tag naming this backend implementation, used by
    /// chain registries to distinguish backends.
    fn llm_type(&self) -> &'static str;

    /// Whether instances of this backend may be serialized for
    /// downstream tooling. Defaults to `false`.
    fn is_serializable(&self) -> bool {
        false
    }

    /// The per-call option keys this backend understands.
    ///
    /// The default is the shared [`BASE_CALL_KEYS`]; backends override
    /// to append their own.
    fn call_keys(&self) -> Vec<&'static str> {
        BASE_CALL_KEYS.to_vec()
    }

    /// The parameters this backend sends with each request. Pure; no
    /// side effects.
    fn invocation_params(&self) -> Map<String, Value>;

    /// [`invocation_params`](Llm::invocation_params) plus a
    /// `model_name` entry identifying the concrete model, as required
    /// by the framework's model-identification contract.
    fn identifying_params(&self) -> Map<String, Value>;

    /// Generates one completion group per prompt, in input order.
    ///
    /// An empty prompt slice is legal and yields an empty result. On
    /// the first backend failure the whole batch fails; no partial
    /// result is returned.
    async fn generate(&self, prompts: &[String]) -> Result<LlmResult, RaychainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBackend;

    #[async_trait]
    impl Llm for FixedBackend {
        fn llm_type(&self) -> &'static str {
            "fixed"
        }

        fn invocation_params(&self) -> Map<String, Value> {
            Map::new()
        }

        fn identifying_params(&self) -> Map<String, Value> {
            let mut params = self.invocation_params();
            params.insert("model_name".into(), "fixed-1".into());
            params
        }

        async fn generate(&self, prompts: &[String]) -> Result<LlmResult, RaychainError> {
            Ok(LlmResult {
                generations: prompts
                    .iter()
                    .map(|p| vec![crate::types::Generation::new(p.clone())])
                    .collect(),
            })
        }
    }

    #[test]
    fn defaults_apply_to_minimal_backend() {
        let backend = FixedBackend;
        assert!(!backend.is_serializable());
        assert_eq!(backend.call_keys(), BASE_CALL_KEYS.to_vec());
    }

    #[tokio::test]
    async fn trait_object_dispatch_works() {
        let backend: Box<dyn Llm> = Box::new(FixedBackend);
        let result = backend.generate(&["a".into()]).await.unwrap();
        assert_eq!(result.generations.len(), 1);
        assert_eq!(result.generations[0][0].text, "a");
    }
}
