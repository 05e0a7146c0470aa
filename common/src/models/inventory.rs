// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Inventory Model
//!
//! The records an inventory service hands out for a managed computer.
//!
//! ## Key Concepts
//! * **Ownership**: A [`Computer`] owns exactly one [`Hardware`] record and any number of
//!   [`Network`] interfaces. The graph is a plain tree, so everything is held by value.
//! * **Default network**: The interface whose address equals the hardware's primary IP.
//!   Inventories may or may not list the primary address as its own interface.
//! * **Read-only**: Selection code only ever borrows these records.

use serde::Deserialize;

/// A network interface reported for a computer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Network {
    /// Dotted-quad address as reported, not normalised.
    pub ip_address: String,

    #[serde(default)]
    pub description: String,
}

impl Network {
    pub fn new(ip_address: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            description: description.into(),
        }
    }
}

/// Hardware summary of a computer: its primary address and display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Hardware {
    pub ip_address: String,
    pub name: String,
}

impl Hardware {
    pub fn new(ip_address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Computer {
    pub hardware: Hardware,

    /// Interfaces in the order the inventory listed them.
    #[serde(default)]
    pub networks: Vec<Network>,
}

impl Computer {
    /// Creates a computer without any network interfaces.
    pub fn new(hardware: Hardware) -> Self {
        Self {
            hardware,
            networks: Vec::new(),
        }
    }

    pub fn with_network(mut self, network: Network) -> Self {
        self.networks.push(network);
        self
    }

    pub fn name(&self) -> &str {
        &self.hardware.name
    }

    /// Returns the first interface carrying the hardware's primary address.
    ///
    /// Surrounding whitespace is ignored on both sides, as in pattern matching.
    pub fn default_network(&self) -> Option<&Network> {
        let primary = self.hardware.ip_address.trim();
        self.networks
            .iter()
            .find(|network| network.ip_address.trim() == primary)
    }
}

/// A page of computers as returned by one inventory query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Computers {
    #[serde(default)]
    pub computers: Vec<Computer>,
}

impl Computers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, computer: Computer) {
        self.computers.push(computer);
    }

    pub fn len(&self) -> usize {
        self.computers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.computers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Computer> + '_ {
        self.computers.iter()
    }
}

impl FromIterator<Computer> for Computers {
    fn from_iter<I: IntoIterator<Item = Computer>>(iter: I) -> Self {
        Self {
            computers: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Computers {
    type Item = &'a Computer;
    type IntoIter = std::slice::Iter<'a, Computer>;

    fn into_iter(self) -> Self::IntoIter {
        self.computers.iter()
    }
}
