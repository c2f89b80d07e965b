// SPDX-FileCopyrightText: 2026 Raychain Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for Raychain LLM backends.

pub mod llm;

pub use llm::{BASE_CALL_KEYS, Llm};
