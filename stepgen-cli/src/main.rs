// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

mod args;
mod arn;
mod patterns;

use anyhow::Result;
use clap::{crate_version, App, AppSettings};

pub fn main() -> Result<()> {
    // Command line arg parsing and configuration.
    let matches = App::new("Stepgen")
        .version(crate_version!())
        .about("Command Line Controller for the Stepgen task-building utilities")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .args(args::get_logging_args())
        .subcommand(arn::command_args())
        .subcommand(patterns::command_args())
        .get_matches();

    match matches.subcommand() {
        Some(("arn", sub_matches)) => {
            args::get_logging(&matches, sub_matches)?.init();
            arn::command(sub_matches)
        }
        Some(("patterns", sub_matches)) => {
            args::get_logging(&matches, sub_matches)?.init();
            patterns::command(sub_matches)
        }
        _ => unreachable!("SubcommandRequiredElseHelp rejects everything else"),
    }
}
