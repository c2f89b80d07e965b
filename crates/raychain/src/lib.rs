// SPDX-FileCopyrightText: 2026 Raychain Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raychain plugs Raycast's built-in AI into chain frameworks as an
//! interchangeable LLM backend.
//!
//! # Usage
//!
//! ```no_run
//! use raychain::{Llm, RaycastAi};
//! # use raychain::{AiAsk, AskOptions, RaychainError};
//! # use async_trait::async_trait;
//! # struct HostBridge;
//! # #[async_trait]
//! # impl AiAsk for HostBridge {
//! #     async fn ask(
//! #         &self,
//! #         _prompt: &str,
//! #         _options: &AskOptions,
//! #     ) -> Result<Option<String>, RaychainError> {
//! #         Ok(Some(String::new()))
//! #     }
//! # }
//!
//! # async fn run() -> Result<(), RaychainError> {
//! let raycast_ai = RaycastAi::new(HostBridge);
//! let response = raycast_ai.generate(&["Tell me a joke.".into()]).await?;
//! println!("{}", response.generations[0][0].text);
//! # Ok(())
//! # }
//! ```

pub use raychain_core::{BASE_CALL_KEYS, Generation, Llm, LlmResult, RaychainError};
pub use raychain_raycast::{
    AiAsk, AskOptions, Creativity, Model, RaycastAi, RaycastAiConfig, load_config,
    load_config_from_path, load_config_from_str,
};
