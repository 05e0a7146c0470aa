// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Thin wrappers around `tracing`.
//!
//! Every event carries a `status` field which the binary's formatter turns
//! into a symbol, and may carry a `verbosity` level (0 when omitted) that is
//! compared against the `-v` count. Library code logs through these macros
//! only, never through `tracing` directly.

/// Target shared by every event emitted through these macros.
pub const TARGET: &str = "mgmtip";

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        tracing::info!(target: $crate::logging::TARGET, status = "info", $($arg)+)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        tracing::info!(target: $crate::logging::TARGET, status = "success", $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        tracing::debug!(target: $crate::logging::TARGET, status = "debug", $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        tracing::warn!(target: $crate::logging::TARGET, status = "warn", $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        tracing::error!(target: $crate::logging::TARGET, status = "error", $($arg)+)
    };
}
