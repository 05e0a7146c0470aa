// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Management interface selection.
//!
//! Picks the one network interface of a [`Computer`] that monitoring should
//! talk to. The rules, in order:
//! 1. The first interface matching the whitelist wins, regardless of
//!    anything else on the computer.
//! 2. Otherwise the default interface (the one carrying the hardware's
//!    primary address) is used, unless it is blacklisted itself.
//! 3. Otherwise there is no management interface.
//!
//! A blacklisted interface that is not the default one has no effect.

use mgmtip_common::config::Config;
use mgmtip_common::debug;
use mgmtip_common::error::PatternError;
use mgmtip_common::models::inventory::{Computer, Computers, Network};

use crate::patterns::{ListKind, PatternSet};

/// Outcome of looking at one computer, with the reason attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Whitelisted(&'a Network),
    Default(&'a Network),
    /// The default interface exists but is blacklisted.
    Blacklisted(&'a Network),
    Unmatched,
}

impl<'a> Selection<'a> {
    /// The interface to use under full selection, if any.
    pub fn network(&self) -> Option<&'a Network> {
        match *self {
            Self::Whitelisted(network) | Self::Default(network) => Some(network),
            Self::Blacklisted(_) | Self::Unmatched => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ManagementSelector {
    patterns: PatternSet,
}

impl ManagementSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selector from the configured pattern strings.
    ///
    /// Fails on the first pattern that does not parse.
    pub fn from_config(cfg: &Config) -> Result<Self, PatternError> {
        let mut selector = Self::new();
        for pattern in &cfg.whitelist {
            selector.add_whitelist_pattern(pattern)?;
        }
        for pattern in &cfg.blacklist {
            selector.add_blacklist_pattern(pattern)?;
        }
        Ok(selector)
    }

    pub fn add_whitelist_pattern(&mut self, pattern: &str) -> Result<(), PatternError> {
        self.patterns.add(ListKind::White, pattern).map(|_| ())
    }

    pub fn add_blacklist_pattern(&mut self, pattern: &str) -> Result<(), PatternError> {
        self.patterns.add(ListKind::Black, pattern).map(|_| ())
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn classify<'c>(&self, computer: &'c Computer) -> Selection<'c> {
        let name = computer.name();

        if let Some(network) = computer
            .networks
            .iter()
            .find(|network| self.patterns.is_whitelisted(&network.ip_address))
        {
            debug!(verbosity = 1, "{name}: {} is whitelisted", network.ip_address);
            return Selection::Whitelisted(network);
        }

        match computer.default_network() {
            Some(network) if self.patterns.is_blacklisted(&network.ip_address) => {
                debug!(verbosity = 1, "{name}: default {} is blacklisted", network.ip_address);
                Selection::Blacklisted(network)
            }
            Some(network) => {
                debug!(verbosity = 1, "{name}: using default {}", network.ip_address);
                Selection::Default(network)
            }
            None => {
                debug!(verbosity = 1, "{name}: no whitelisted or default interface");
                Selection::Unmatched
            }
        }
    }

    /// Full selection: whitelist first, then the default interface.
    pub fn select_management_network<'c>(&self, computer: &'c Computer) -> Option<&'c Network> {
        self.classify(computer).network()
    }

    /// Whitelist hits only. Never falls back to the default interface.
    pub fn select_management_network_white_and_black_only<'c>(
        &self,
        computer: &'c Computer,
    ) -> Option<&'c Network> {
        match self.classify(computer) {
            Selection::Whitelisted(network) => Some(network),
            _ => None,
        }
    }

    /// Selects in the chosen mode; `fallback_to_default` mirrors [`Config`].
    pub fn select<'c>(
        &self,
        computer: &'c Computer,
        fallback_to_default: bool,
    ) -> Option<&'c Network> {
        if fallback_to_default {
            self.select_management_network(computer)
        } else {
            self.select_management_network_white_and_black_only(computer)
        }
    }

    /// Runs full selection over an inventory page, keeping its order.
    pub fn select_all<'c>(
        &self,
        computers: &'c Computers,
    ) -> Vec<(&'c Computer, Option<&'c Network>)> {
        computers
            .iter()
            .map(|computer| (computer, self.select_management_network(computer)))
            .collect()
    }
}
