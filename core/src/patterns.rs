// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Whitelist and blacklist of IP-like patterns owned by a selector.

use mgmtip_common::error::PatternError;
use mgmtip_common::info;
use mgmtip_common::utils::iplike::IpLikePattern;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    White,
    Black,
}

/// Append-only pattern lists. Patterns are parsed on the way in.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    whitelist: Vec<IpLikePattern>,
    blacklist: Vec<IpLikePattern>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `pattern` and appends it to the chosen list.
    ///
    /// Returns `Ok(false)` when an identical pattern was already present,
    /// in which case the list is left untouched.
    pub fn add(&mut self, kind: ListKind, pattern: &str) -> Result<bool, PatternError> {
        let parsed: IpLikePattern = pattern.parse()?;
        let list = match kind {
            ListKind::White => &mut self.whitelist,
            ListKind::Black => &mut self.blacklist,
        };

        if list.contains(&parsed) {
            info!(verbosity = 2, "{parsed} already in {kind:?} list");
            return Ok(false);
        }

        info!(verbosity = 2, "Adding {parsed} to {kind:?} list");
        list.push(parsed);
        Ok(true)
    }

    pub fn is_whitelisted(&self, ip: &str) -> bool {
        self.whitelist.iter().any(|p| p.matches(ip))
    }

    pub fn is_blacklisted(&self, ip: &str) -> bool {
        self.blacklist.iter().any(|p| p.matches(ip))
    }

    pub fn whitelist(&self) -> &[IpLikePattern] {
        &self.whitelist
    }

    pub fn blacklist(&self) -> &[IpLikePattern] {
        &self.blacklist
    }

    pub fn is_empty(&self) -> bool {
        self.whitelist.is_empty() && self.blacklist.is_empty()
    }
}
