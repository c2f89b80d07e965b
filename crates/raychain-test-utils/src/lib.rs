// SPDX-FileCopyrightText: 2026 Raychain Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Raychain integration tests.
//!
//! Provides a mock host AI capability for fast, deterministic,
//! CI-runnable tests without a running Raycast host.
//!
//! # Components
//!
//! - [`MockHost`] - Mock AI-ask capability with scripted replies and
//!   call recording

pub mod mock_host;

pub use mock_host::{HostReply, MockHost, RecordedCall};
