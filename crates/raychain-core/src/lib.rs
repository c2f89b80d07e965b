// SPDX-FileCopyrightText: 2026 Raychain Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Raychain LLM framework.
//!
//! This crate provides the backend contract ([`Llm`]), the shared
//! result shapes, and the error type used throughout the Raychain
//! workspace. Backend adapter crates implement the traits defined
//! here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::RaychainError;
pub use traits::{BASE_CALL_KEYS, Llm};
pub use types::{Generation, LlmResult};
