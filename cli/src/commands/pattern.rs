// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use mgmtip_common::config::Config;
use mgmtip_common::utils::iplike::IpLikePattern;

use crate::terminal::print;

/// Parses the pattern strictly, so a typo is an error rather than a quiet "no".
pub fn check(ip: &str, pattern: &str, cfg: &Config) -> anyhow::Result<()> {
    let parsed: IpLikePattern = pattern.parse()?;
    print::match_result(ip, &parsed, parsed.matches(ip), cfg.quiet);
    Ok(())
}
