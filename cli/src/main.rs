// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # mgmtip CLI Entry Point
//!
//! Parses arguments, installs the log subscriber, maps flags onto the
//! library [`Config`] and dispatches to a command. Errors bubbling out of a
//! command are logged here and turned into a non-zero exit code.
//!
//! [`Config`]: mgmtip_common::config::Config

mod commands;
mod terminal;

use std::process::ExitCode;

use mgmtip_common::{config::Config, error};

use crate::{
    commands::{CommandLine, Commands, pattern, select},
    terminal::logging,
};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    logging::init_logging(commands.verbosity);

    let cfg = Config::from(&commands);

    let result = match &commands.command {
        Commands::Select { inventory, .. } => select::select(inventory, &cfg),
        Commands::Match { ip, pattern } => pattern::check(ip, pattern, &cfg),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Critical failure: {e:#}");
            ExitCode::FAILURE
        }
    }
}
