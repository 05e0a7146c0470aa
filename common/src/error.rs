// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Errors raised while parsing IP-like patterns.
//!
//! Selection itself never fails; a computer without a usable interface
//! simply yields no management network.

/// Reasons a pattern string cannot be turned into an [`IpLikePattern`].
///
/// [`IpLikePattern`]: crate::utils::iplike::IpLikePattern
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern '{pattern}' has {found} octets, expected 4")]
    OctetCount { pattern: String, found: usize },

    #[error("pattern '{pattern}' contains an empty octet")]
    EmptyOctet { pattern: String },

    #[error("pattern '{pattern}': '{value}' is not an octet value (0-255)")]
    InvalidValue { pattern: String, value: String },

    #[error("pattern '{pattern}': range {start}-{end} starts after it ends")]
    InvertedRange { pattern: String, start: u8, end: u8 },
}

impl PatternError {
    /// The offending pattern text as it was handed in.
    pub fn pattern(&self) -> &str {
        match self {
            Self::OctetCount { pattern, .. }
            | Self::EmptyOctet { pattern }
            | Self::InvalidValue { pattern, .. }
            | Self::InvertedRange { pattern, .. } => pattern,
        }
    }
}
