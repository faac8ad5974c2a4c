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

//! Stepgen CLI lists the known service integration patterns.

use anyhow::Result;
use clap::{App, AppSettings, ArgMatches};
use stepgen::prelude::*;

pub fn command(_matches: &ArgMatches) -> Result<()> {
    for pattern in IntegrationPattern::ALL {
        println!(
            "{:<20} resource ARN suffix: {:?}",
            pattern.to_string(),
            pattern.suffix()
        );
    }
    Ok(())
}

pub fn command_args() -> App<'static> {
    App::new("patterns")
        .about("Lists the known service integration patterns and their ARN suffixes")
        .setting(AppSettings::DisableVersionFlag)
}
