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

//! Stepgen CLI synthesizes service integration resource ARNs.

use anyhow::Result;
use clap::{App, AppSettings, Arg, ArgMatches};
use log::debug;
use stepgen::prelude::*;

pub fn command(matches: &ArgMatches) -> Result<()> {
    let service = matches.value_of("service").expect("No service provided");
    let api = matches.value_of("api").expect("No api provided");
    let pattern = matches
        .value_of("pattern")
        .map(|p| p.parse::<IntegrationPattern>())
        .transpose()?;

    // A task type's supported patterns, when declared, gate the request the
    // same way task constructs do at synthesis time.
    if let Some(supported) = matches.values_of("supported") {
        let supported = supported
            .map(|p| p.parse::<IntegrationPattern>())
            .collect::<stepgen::error::Result<Vec<_>>>()?;
        validate_pattern_supported(pattern.unwrap_or_default(), &supported)?;
    }

    let partition = matches
        .value_of("partition")
        .map(Partition::new)
        .unwrap_or_default();
    debug!("resolved deployment partition: {}", partition);

    println!(
        "{}",
        integration_resource_arn(&partition, service, api, pattern)?
    );
    Ok(())
}

pub fn command_args() -> App<'static> {
    App::new("arn")
        .about("Synthesizes the resource ARN for a service integration")
        .setting(AppSettings::DisableVersionFlag)
        .arg(
            Arg::new("service")
                .short('s')
                .long("service")
                .value_name("SERVICE")
                .help("Sets the service namespace of the integrated API, e.g. sns")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("api")
                .short('a')
                .long("api")
                .value_name("API")
                .help("Sets the API name of the service integration, e.g. publish")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("pattern")
                .short('p')
                .long("pattern")
                .value_name("PATTERN")
                .possible_values(["request-response", "run-job", "wait-for-task-token"])
                .help("Sets the service integration pattern")
                .takes_value(true),
        )
        .arg(
            Arg::new("supported")
                .long("supported")
                .value_name("PATTERNS")
                .help("Validates the pattern against the patterns the task type supports")
                .takes_value(true)
                .multiple_values(true),
        )
        .arg(
            Arg::new("partition")
                .long("partition")
                .value_name("PARTITION")
                .help("Overrides the deployment partition, e.g. aws-cn")
                .takes_value(true),
        )
}
