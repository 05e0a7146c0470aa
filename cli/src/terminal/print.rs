// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Result lines written to stdout.
//!
//! At quiet level 0 each line is labelled and coloured; at 1 and above only
//! the bare data is printed so the output can be piped.

use colored::*;
use mgmtip_common::models::inventory::{Computer, Network};
use mgmtip_common::utils::iplike::IpLikePattern;

const NONE_MARKER: &str = "-";

pub fn selection(computer: &Computer, network: Option<&Network>, q_level: u8) {
    if let Some(line) = selection_line(computer, network, q_level) {
        println!("{line}");
    }
}

pub fn match_result(ip: &str, pattern: &IpLikePattern, matched: bool, q_level: u8) {
    println!("{}", match_line(ip, pattern, matched, q_level));
}

/// Raw mode prints nothing for a computer without a management interface.
fn selection_line(
    computer: &Computer,
    network: Option<&Network>,
    q_level: u8,
) -> Option<String> {
    if q_level > 0 {
        return network.map(|n| n.ip_address.clone());
    }

    let value = match network {
        Some(n) if n.description.is_empty() => n.ip_address.green().to_string(),
        Some(n) => format!("{} ({})", n.ip_address.green(), n.description.dimmed()),
        None => NONE_MARKER.red().to_string(),
    };
    Some(format!("{}: {value}", computer.name().bold()))
}

fn match_line(ip: &str, pattern: &IpLikePattern, matched: bool, q_level: u8) -> String {
    if q_level > 0 {
        return matched.to_string();
    }

    let verdict = if matched {
        "matches".green().bold()
    } else {
        "does not match".red().bold()
    };
    format!("{} {verdict} {}", ip.bold(), pattern.to_string().cyan())
}
