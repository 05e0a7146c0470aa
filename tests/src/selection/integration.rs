// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]
use mgmtip_common::models::inventory::{Computer, Computers, Network};
use mgmtip_common::utils::iplike;
use mgmtip_core::selector::{ManagementSelector, Selection};

use crate::fixtures::*;

fn selector_under_test() -> ManagementSelector {
    selector().expect("fixture patterns are valid")
}

fn full(selector: &ManagementSelector, computer: &Computer) -> Option<String> {
    selector
        .select_management_network(computer)
        .map(|n| n.ip_address.clone())
}

fn strict(selector: &ManagementSelector, computer: &Computer) -> Option<String> {
    selector
        .select_management_network_white_and_black_only(computer)
        .map(|n| n.ip_address.clone())
}

#[test]
fn test_iplike_reference_patterns() {
    let ip = "1.1.1.1";

    assert!(iplike::matches(ip, "1.*.1.1"));
    assert!(iplike::matches(ip, "1.1-2.1.1"));
    assert!(!iplike::matches(ip, "1.2.1.1"));
    assert!(!iplike::matches(ip, "1.2-3.1.1"));
}

#[test]
fn test_select_management_network() {
    let sel = selector_under_test();

    assert_eq!(full(&sel, &computer_white()).as_deref(), Some(IP_WHITE));
    assert_eq!(full(&sel, &computer_default()).as_deref(), Some(IP_DEFAULT));
    assert_eq!(full(&sel, &computer_black()), None);
    assert_eq!(full(&sel, &computer_default_white()).as_deref(), Some(IP_WHITE));
    assert_eq!(full(&sel, &computer_default_black()).as_deref(), Some(IP_DEFAULT));
    assert_eq!(full(&sel, &computer_black_white()).as_deref(), Some(IP_WHITE));
    assert_eq!(full(&sel, &computer_default_black_white()).as_deref(), Some(IP_WHITE));
}

#[test]
fn test_select_management_network_white_and_black_only() {
    let sel = selector_under_test();

    assert_eq!(strict(&sel, &computer_white()).as_deref(), Some(IP_WHITE));
    assert_eq!(strict(&sel, &computer_default()), None);
    assert_eq!(strict(&sel, &computer_black()), None);
    assert_eq!(strict(&sel, &computer_default_white()).as_deref(), Some(IP_WHITE));
    assert_eq!(strict(&sel, &computer_default_black()), None);
    assert_eq!(strict(&sel, &computer_black_white()).as_deref(), Some(IP_WHITE));
    assert_eq!(strict(&sel, &computer_default_black_white()).as_deref(), Some(IP_WHITE));
}

#[test]
fn test_whitelisted_network_is_returned_by_reference() {
    let sel = selector_under_test();
    let pc = computer_default_black_white();

    let selected = sel.select_management_network(&pc).expect("whitelisted");
    assert!(std::ptr::eq(selected, &pc.networks[2]));
    assert_eq!(selected.description, "NetworkWhite");
}

#[test]
fn test_black_computer_reports_veto() {
    let sel = selector_under_test();
    let pc = computer_black();

    assert_eq!(sel.classify(&pc), Selection::Blacklisted(&pc.networks[0]));
}

#[test]
fn test_selection_is_repeatable() {
    let sel = selector_under_test();

    for pc in &computers() {
        assert_eq!(full(&sel, pc), full(&sel, pc), "{}", pc.name());
        assert_eq!(strict(&sel, pc), strict(&sel, pc), "{}", pc.name());
    }
}

#[test]
fn test_non_matching_networks_do_not_change_outcome() {
    let sel = selector_under_test();
    let filler = ["10.0.0.1", "172.16.5.4", "192.168.1.1"];

    for pc in &computers() {
        let before = (full(&sel, pc), strict(&sel, pc));

        let padded = filler.iter().fold(pc.clone(), |pc, ip| {
            pc.with_network(Network::new(*ip, "Filler"))
        });
        let mut front_padded = padded.clone();
        front_padded.networks.rotate_right(filler.len());

        assert_eq!(before, (full(&sel, &padded), strict(&sel, &padded)), "{}", pc.name());
        assert_eq!(
            before,
            (full(&sel, &front_padded), strict(&sel, &front_padded)),
            "{}",
            pc.name()
        );
    }
}

#[test]
fn test_select_all_over_inventory_page() {
    let sel = selector_under_test();
    let page = computers();

    let picked: Vec<(&str, Option<&str>)> = sel
        .select_all(&page)
        .into_iter()
        .map(|(pc, n)| (pc.name(), n.map(|n| n.ip_address.as_str())))
        .collect();

    assert_eq!(
        picked,
        [
            ("ComputerWhite", Some(IP_WHITE)),
            ("ComputerBlack", None),
            ("ComputerDefaultBlack", Some(IP_DEFAULT)),
            ("ComputerDefaultBlackWhite", Some(IP_WHITE)),
            ("ComputerBlackWhite", Some(IP_WHITE)),
            ("ComputerDefault", Some(IP_DEFAULT)),
        ]
    );
}

#[test]
fn test_inventory_file_round_trip_selection() {
    let doc = r#"
        [[computers]]
        [computers.hardware]
        ip_address = "3.3.3.3"
        name = "ComputerDefaultBlack"

        [[computers.networks]]
        ip_address = "3.3.3.3"
        description = "NetworkDefault"

        [[computers.networks]]
        ip_address = "2.2.2.2"
        description = "NetworkBlack"
    "#;

    let page: Computers = toml::from_str(doc).expect("valid inventory");
    assert_eq!(page.computers[0], computer_default_black());

    let sel = selector_under_test();
    assert_eq!(full(&sel, &page.computers[0]).as_deref(), Some(IP_DEFAULT));
}

#[test]
fn test_wildcard_blacklist_only_vetoes_default_interface() {
    let mut sel = ManagementSelector::new();
    sel.add_blacklist_pattern("3.*.*.*").expect("valid pattern");

    assert_eq!(full(&sel, &computer_default()), None);
    // Primary address is 1.1.1.1 here, so the 3.3.3.3 entry is not the default.
    assert_eq!(full(&sel, &computer_default_white()).as_deref(), Some(IP_WHITE));
}
