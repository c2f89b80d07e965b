// SPDX-FileCopyrightText: 2026 Raychain Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Closed enumerations for the Raycast AI model and creativity knobs.
//!
//! The Raycast API accepts these values as loose strings; here they
//! are closed enums so an unrecognized identifier is rejected when a
//! config is parsed rather than silently forwarded to the host.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Model identifier selecting which underlying model the host uses.
///
/// Wire names match the identifiers the Raycast API publishes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
pub enum Model {
    /// Baseline completion model, the default.
    #[default]
    #[strum(serialize = "text-davinci-003")]
    #[serde(rename = "text-davinci-003")]
    TextDavinci003,

    #[strum(serialize = "gpt-3.5-turbo")]
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,

    #[strum(serialize = "gpt-3.5-turbo-instruct")]
    #[serde(rename = "gpt-3.5-turbo-instruct")]
    Gpt35TurboInstruct,

    #[strum(serialize = "gpt-4")]
    #[serde(rename = "gpt-4")]
    Gpt4,
}

/// Creativity level, the host's temperature-like sampling control.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Creativity {
    None,
    Low,
    /// Middle setting, the default.
    #[default]
    Medium,
    High,
    Maximum,
}
