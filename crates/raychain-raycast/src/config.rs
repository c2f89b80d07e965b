// SPDX-FileCopyrightText: 2026 Raychain Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter configuration and its Figment-based loader.
//!
//! Both fields are optional in the TOML source and fall back to
//! compiled defaults, so a constructed config never has an unset
//! field. Unknown keys and unrecognized model/creativity identifiers
//! are rejected at load time.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::model::{Creativity, Model};

/// Construction-time configuration for the Raycast AI adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RaycastAiConfig {
    /// Model identifier sent with every host request.
    #[serde(default)]
    pub model: Model,

    /// Creativity level sent with every host request.
    #[serde(default)]
    pub creativity: Creativity,
}

/// Load configuration from `./raychain.toml` with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `./raychain.toml`
/// 3. `RAYCHAIN_*` environment variables (`RAYCHAIN_MODEL`,
///    `RAYCHAIN_CREATIVITY`)
pub fn load_config() -> Result<RaycastAiConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RaycastAiConfig::default()))
        .merge(Toml::file("raychain.toml"))
        .merge(Env::prefixed("RAYCHAIN_"))
        .extract()
}

/// Load configuration from a TOML string only (no file or env lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<RaycastAiConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RaycastAiConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<RaycastAiConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RaycastAiConfig::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("RAYCHAIN_"))
        .extract()
}
