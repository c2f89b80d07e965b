// SPDX-FileCopyrightText: 2026 Raychain Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The host AI-ask capability consumed by the adapter.
//!
//! Raycast exposes its built-in model through a single opaque ask
//! call. [`AiAsk`] is the seam for that capability: production code
//! implements it over the real host bridge, tests implement it with
//! scripted responses.

use async_trait::async_trait;
use raychain_core::RaychainError;

use crate::model::{Creativity, Model};

/// Options carried on every host ask call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct AskOptions {
    pub model: Model,
    pub creativity: Creativity,
}

/// The host's AI-ask capability.
///
/// `ask` resolves to the completion text, `None` when the host
/// produced no output for the prompt, or a host error (entitlement
/// denial, network failure, model backend error) surfaced verbatim.
#[async_trait]
pub trait AiAsk: Send + Sync {
    async fn ask(
        &self,
        prompt: &str,
        options: &AskOptions,
    ) -> Result<Option<String>, RaychainError>;
}
