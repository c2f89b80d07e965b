// SPDX-FileCopyrightText: 2026 Raychain Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Result shapes shared by all Raychain LLM backends.

use serde::{Deserialize, Serialize};

/// A single candidate completion for one prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    /// The completion text. Empty when the backend produced no output.
    pub text: String,
}

impl Generation {
    /// Creates a generation from any string-like value.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// The full output of a batch generate call.
///
/// `generations` holds one group per input prompt, in input order.
/// Each group is the ordered list of candidate completions for that
/// prompt; backends that produce a single candidate emit groups of
/// length one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LlmResult {
    pub generations: Vec<Vec<Generation>>,
}
