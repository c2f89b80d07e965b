// SPDX-FileCopyrightText: 2026 Raychain Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Raychain LLM framework.

use thiserror::Error;

/// The primary error type used across Raychain traits and backends.
#[derive(Debug, Error)]
pub enum RaychainError {
    /// Configuration errors (invalid TOML, unknown fields, unrecognized
    /// model or creativity identifiers).
    #[error("configuration error: {0}")]
    Config(String),

    /// Host AI capability errors (entitlement denial, network failure,
    /// model backend error). Surfaced verbatim from the host; the
    /// adapter performs no recovery.
    #[error("host error: {message}")]
    Host {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
