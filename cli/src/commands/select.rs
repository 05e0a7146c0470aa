// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::fs;
use std::path::Path;

use anyhow::Context;
use mgmtip_common::config::Config;
use mgmtip_common::models::inventory::Computers;
use mgmtip_common::{success, warn};
use mgmtip_core::selector::ManagementSelector;

use crate::terminal::print;

pub fn select(inventory: &Path, cfg: &Config) -> anyhow::Result<()> {
    let selector = ManagementSelector::from_config(cfg)?;
    if selector.patterns().is_empty() {
        warn!("No whitelist or blacklist patterns given");
    }

    let computers = load_inventory(inventory)?;
    if computers.is_empty() {
        warn!("{} lists no computers", inventory.display());
        return Ok(());
    }

    let mut selected = 0usize;
    for computer in &computers {
        let network = selector.select(computer, cfg.fallback_to_default);
        selected += usize::from(network.is_some());
        print::selection(computer, network, cfg.quiet);
    }

    success!("Selected {selected} of {} management interfaces", computers.len());
    Ok(())
}

fn load_inventory(path: &Path) -> anyhow::Result<Computers> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Could not read inventory '{}'", path.display()))?;

    toml::from_str(&raw).with_context(|| format!("Malformed inventory '{}'", path.display()))
}
