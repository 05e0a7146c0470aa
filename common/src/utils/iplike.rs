// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # IP-like Patterns
//!
//! Glob-style matching of dotted-quad IPv4 addresses, octet by octet.
//!
//! Each of the four octet positions of a pattern is one of:
//! * a literal value (`10`)
//! * a wildcard (`*`) matching 0-255
//! * an inclusive range (`1-20`)
//! * a comma separated list of the above (`1,5,10-12`)
//!
//! Matching is purely textual. Nothing is resolved and an address that is
//! not four decimal octets never matches.

use std::fmt;
use std::str::FromStr;

use crate::debug;
use crate::error::PatternError;

const OCTETS: usize = 4;

/// A single alternative within one octet position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OctetMatcher {
    Any,
    Exact(u8),
    Range(u8, u8),
}

impl OctetMatcher {
    fn contains(&self, value: u8) -> bool {
        match *self {
            Self::Any => true,
            Self::Exact(expected) => value == expected,
            Self::Range(start, end) => (start..=end).contains(&value),
        }
    }
}

/// A parsed IP-like pattern such as `10.1-3.*.5,7`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IpLikePattern {
    source: String,
    octets: [Vec<OctetMatcher>; OCTETS],
}

impl IpLikePattern {
    /// Returns true if every octet of `ip` is accepted by the matching
    /// position of the pattern.
    pub fn matches(&self, ip: &str) -> bool {
        let Some(address) = parse_address(ip) else {
            return false;
        };

        self.octets
            .iter()
            .zip(address)
            .all(|(alternatives, value)| alternatives.iter().any(|m| m.contains(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for IpLikePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let source = s.trim();
        let parts: Vec<&str> = source.split('.').collect();

        if parts.len() != OCTETS {
            return Err(PatternError::OctetCount {
                pattern: source.to_string(),
                found: parts.len(),
            });
        }

        let mut octets: [Vec<OctetMatcher>; OCTETS] = Default::default();
        for (slot, part) in octets.iter_mut().zip(parts) {
            *slot = parse_octet(part, source)?;
        }

        Ok(Self {
            source: source.to_string(),
            octets,
        })
    }
}

impl fmt::Display for IpLikePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Checks `ip` against a pattern given in text form.
///
/// A pattern that does not parse matches nothing. Callers that want the
/// parse error should go through [`IpLikePattern::from_str`] instead.
pub fn matches(ip: &str, pattern: &str) -> bool {
    match pattern.parse::<IpLikePattern>() {
        Ok(parsed) => parsed.matches(ip),
        Err(e) => {
            debug!(verbosity = 1, "Treating '{pattern}' as a non-match: {e}");
            false
        }
    }
}

fn parse_octet(part: &str, pattern: &str) -> Result<Vec<OctetMatcher>, PatternError> {
    part.split(',')
        .map(|alternative| parse_alternative(alternative.trim(), pattern))
        .collect()
}

fn parse_alternative(s: &str, pattern: &str) -> Result<OctetMatcher, PatternError> {
    if s.is_empty() {
        return Err(PatternError::EmptyOctet {
            pattern: pattern.to_string(),
        });
    }

    if s == "*" {
        return Ok(OctetMatcher::Any);
    }

    let Some((start_str, end_str)) = s.split_once('-') else {
        return parse_value(s, pattern).map(OctetMatcher::Exact);
    };

    let start = parse_value(start_str.trim(), pattern)?;
    let end = parse_value(end_str.trim(), pattern)?;

    if start > end {
        return Err(PatternError::InvertedRange {
            pattern: pattern.to_string(),
            start,
            end,
        });
    }

    Ok(OctetMatcher::Range(start, end))
}

fn parse_value(s: &str, pattern: &str) -> Result<u8, PatternError> {
    decimal_octet(s).ok_or_else(|| PatternError::InvalidValue {
        pattern: pattern.to_string(),
        value: s.to_string(),
    })
}

/// Digits only. `u8::from_str` alone would also take a leading `+`.
fn decimal_octet(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u8>().ok()
}

fn parse_address(ip: &str) -> Option<[u8; OCTETS]> {
    let mut address = [0u8; OCTETS];
    let mut parts = ip.trim().split('.');

    for slot in address.iter_mut() {
        *slot = decimal_octet(parts.next()?)?;
    }

    match parts.next() {
        Some(_) => None,
        None => Some(address),
    }
}
