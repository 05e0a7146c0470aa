// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

/// Runtime options for a selection run.
///
/// Built from CLI arguments; the library never reads configuration files
/// on its own. Pattern strings are kept raw here and only parsed when a
/// selector is built from them, so a bad pattern is reported before any
/// computer is looked at.
#[derive(Debug, Clone)]
pub struct Config {
    /// IP-like patterns whose matching interface is always chosen.
    ///
    /// Checked before anything else. The first interface (in inventory
    /// order) matching any of these wins, even if it is also blacklisted.
    pub whitelist: Vec<String>,

    /// IP-like patterns that forbid an interface from being chosen.
    ///
    /// Only consulted for the default interface. A blacklisted interface
    /// elsewhere on the computer does not stop the default from being used.
    pub blacklist: Vec<String>,

    /// Whether to fall back to the interface carrying the hardware's
    /// primary address when nothing is whitelisted.
    ///
    /// # Behavior
    /// * **True** (Default): full selection, whitelist first then default.
    /// * **False**: whitelist hits only; everything else yields nothing.
    pub fallback_to_default: bool,

    /// Controls the density of the terminal output.
    ///
    /// # Levels
    /// * **0** (Default): one labelled line per computer.
    /// * **1+**: raw mode, selected addresses only, suitable for piping.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            whitelist: Vec::new(),
            blacklist: Vec::new(),
            fallback_to_default: true,
            quiet: 0,
        }
    }
}
