// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.


/// Reference inventory: one interface per role and a computer for each
/// combination of roles.
pub mod fixtures {
    use mgmtip_common::models::inventory::{Computer, Computers, Hardware, Network};
    use mgmtip_core::selector::ManagementSelector;

    pub const IP_WHITE: &str = "1.1.1.1";
    pub const IP_BLACK: &str = "2.2.2.2";
    pub const IP_DEFAULT: &str = "3.3.3.3";

    pub fn network_white() -> Network {
        Network::new(IP_WHITE, "NetworkWhite")
    }

    pub fn network_black() -> Network {
        Network::new(IP_BLACK, "NetworkBlack")
    }

    pub fn network_default() -> Network {
        Network::new(IP_DEFAULT, "NetworkDefault")
    }

    /// Whitelists [`IP_WHITE`] and blacklists [`IP_BLACK`].
    pub fn selector() -> Option<ManagementSelector> {
        let mut selector = ManagementSelector::new();
        selector.add_whitelist_pattern(IP_WHITE).ok()?;
        selector.add_blacklist_pattern(IP_BLACK).ok()?;
        Some(selector)
    }

    fn computer(hw_ip: &str, name: &str, networks: Vec<Network>) -> Computer {
        networks
            .into_iter()
            .fold(Computer::new(Hardware::new(hw_ip, name)), Computer::with_network)
    }

    pub fn computer_white() -> Computer {
        computer(IP_WHITE, "ComputerWhite", vec![network_white()])
    }

    pub fn computer_black() -> Computer {
        computer(IP_BLACK, "ComputerBlack", vec![network_black()])
    }

    pub fn computer_default() -> Computer {
        computer(IP_DEFAULT, "ComputerDefault", vec![network_default()])
    }

    pub fn computer_default_white() -> Computer {
        computer(
            IP_WHITE,
            "ComputerDefaultWhite",
            vec![network_default(), network_white()],
        )
    }

    pub fn computer_default_black() -> Computer {
        computer(
            IP_DEFAULT,
            "ComputerDefaultBlack",
            vec![network_default(), network_black()],
        )
    }

    pub fn computer_black_white() -> Computer {
        computer(
            IP_WHITE,
            "ComputerBlackWhite",
            vec![network_black(), network_white()],
        )
    }

    pub fn computer_default_black_white() -> Computer {
        computer(
            IP_WHITE,
            "ComputerDefaultBlackWhite",
            vec![network_default(), network_black(), network_white()],
        )
    }

    pub fn computers() -> Computers {
        [
            computer_white(),
            computer_black(),
            computer_default_black(),
            computer_default_black_white(),
            computer_black_white(),
            computer_default(),
        ]
        .into_iter()
        .collect()
    }
}
