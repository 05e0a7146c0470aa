// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! Argument schema for the `mgmtip` binary. Execution lives in the
//! submodules; this module only defines flags and translates them into a
//! [`Config`] through `From<&CommandLine>`, so the library never sees clap
//! types.

pub mod pattern;
pub mod select;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use mgmtip_common::config::Config;

#[derive(Parser)]
#[command(name = "mgmtip")]
#[command(about = "Pick the management IP of inventoried computers.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print raw addresses only
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Increase logging detail (-v: decisions, -vv: pattern bookkeeping)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select the management interface of every computer in an inventory file
    #[command(alias = "s")]
    Select {
        /// TOML inventory with [[computers]] entries
        #[arg(value_name = "INVENTORY")]
        inventory: PathBuf,

        /// IP-like pattern whose interface is always chosen (repeatable)
        #[arg(short = 'w', long = "white", value_name = "PATTERN")]
        whitelist: Vec<String>,

        /// IP-like pattern whose default interface is never chosen (repeatable)
        #[arg(short = 'b', long = "black", value_name = "PATTERN")]
        blacklist: Vec<String>,

        /// Only accept whitelisted interfaces, never the default one
        #[arg(long = "strict")]
        strict: bool,
    },

    /// Check a single address against an IP-like pattern
    #[command(alias = "m")]
    Match {
        #[arg(value_name = "IP")]
        ip: String,

        #[arg(value_name = "PATTERN")]
        pattern: String,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<&CommandLine> for Config {
    fn from(cmd: &CommandLine) -> Self {
        let mut cfg = Config {
            quiet: cmd.quiet,
            ..Config::default()
        };

        if let Commands::Select {
            whitelist,
            blacklist,
            strict,
            ..
        } = &cmd.command
        {
            cfg.whitelist = whitelist.clone();
            cfg.blacklist = blacklist.clone();
            cfg.fallback_to_default = !strict;
        }

        cfg
    }
}
