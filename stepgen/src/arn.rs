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

//! Resource ARN synthesis for Step Functions service integrations.

use crate::configs::STEPGEN_DEFAULT_PARTITION;
use crate::error::{Result, StepgenError};
use crate::integration::IntegrationPattern;
use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter};

/// Service namespace of Step Functions service integration ARNs.
pub const ARN_SERVICE_NAMESPACE: &str = "states";

/// An isolated deployment realm within the target cloud provider, the second
/// token of every ARN. Stepgen treats the partition as an opaque string; it
/// is resolved by the surrounding framework and passed into the builder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Partition(String);

impl Partition {
    /// The commercial partition.
    pub const AWS: &'static str = "aws";
    /// The China regions partition.
    pub const AWS_CN: &'static str = "aws-cn";
    /// The GovCloud (US) regions partition.
    pub const AWS_US_GOV: &'static str = "aws-us-gov";

    /// Wrap a partition name the caller has already resolved.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Partition(name.into())
    }

    /// Derive the partition from a region name.
    ///
    /// Regions map to partitions by prefix: `cn-*` regions live in the China
    /// partition and `us-gov-*` regions in GovCloud; everything else is the
    /// commercial partition.
    pub fn from_region(region: &str) -> Self {
        if region.starts_with("cn-") {
            Partition::new(Self::AWS_CN)
        } else if region.starts_with("us-gov-") {
            Partition::new(Self::AWS_US_GOV)
        } else {
            Partition::new(Self::AWS)
        }
    }

    /// Return the partition name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Partition {
    /// Resolve the deployment partition from the process environment.
    ///
    /// `STEPGEN_PARTITION` wins if set; otherwise the partition is derived
    /// from `AWS_REGION` / `AWS_DEFAULT_REGION`; otherwise the configured
    /// default applies.
    fn default() -> Self {
        if let Ok(partition) = env::var("STEPGEN_PARTITION") {
            return Partition::new(partition);
        }
        if let Ok(region) = env::var("AWS_REGION").or_else(|_| env::var("AWS_DEFAULT_REGION")) {
            return Partition::from_region(&region);
        }
        Partition::new(STEPGEN_DEFAULT_PARTITION.clone())
    }
}

impl Display for Partition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Synthesizes the resource ARN for a Step Functions service integration.
///
/// The returned string has the exact form
/// `arn:<partition>:states:::<service>:<api><suffix>`, where the suffix
/// selects the integration pattern and is empty when no pattern is given.
///
/// # Arguments
/// * `partition` - The deployment partition resolved by the caller.
/// * `service` - The service namespace of the integrated API, e.g. `sns`.
/// * `api` - The API name, e.g. `publish`.
/// * `pattern` - The requested service integration pattern, if any.
pub fn integration_resource_arn(
    partition: &Partition,
    service: &str,
    api: &str,
    pattern: Option<IntegrationPattern>,
) -> Result<String> {
    if service.is_empty() || api.is_empty() {
        return Err(StepgenError::InvalidArgument(
            "Both 'service' and 'api' must be provided to build the resource ARN.".to_string(),
        ));
    }
    let arn = format!(
        "arn:{}:{}:::{}:{}{}",
        partition,
        ARN_SERVICE_NAMESPACE,
        service,
        api,
        pattern.map(|p| p.suffix()).unwrap_or("")
    );
    debug!("synthesized service integration ARN: {}", arn);
    Ok(arn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aws() -> Partition {
        Partition::new(Partition::AWS)
    }

    #[test]
    fn arn_without_a_pattern_has_no_suffix() -> Result<()> {
        assert_eq!(
            "arn:aws:states:::lambda:invoke",
            integration_resource_arn(&aws(), "lambda", "invoke", None)?
        );
        Ok(())
    }

    #[test]
    fn run_job_appends_the_sync_suffix() -> Result<()> {
        assert_eq!(
            "arn:aws:states:::sns:publish.sync",
            integration_resource_arn(&aws(), "sns", "publish", Some(IntegrationPattern::RunJob))?
        );
        Ok(())
    }

    #[test]
    fn wait_for_task_token_appends_the_callback_suffix() -> Result<()> {
        assert_eq!(
            "arn:aws:states:::sns:publish.waitForTaskToken",
            integration_resource_arn(
                &aws(),
                "sns",
                "publish",
                Some(IntegrationPattern::WaitForTaskToken)
            )?
        );
        Ok(())
    }

    #[test]
    fn request_response_is_indistinguishable_from_no_pattern() -> Result<()> {
        assert_eq!(
            integration_resource_arn(&aws(), "sqs", "sendMessage", None)?,
            integration_resource_arn(
                &aws(),
                "sqs",
                "sendMessage",
                Some(IntegrationPattern::RequestResponse)
            )?
        );
        Ok(())
    }

    #[test]
    fn empty_service_is_rejected_before_anything_else() {
        let err = integration_resource_arn(&aws(), "", "publish", None).unwrap_err();
        assert!(err
            .to_string()
            .contains("Both 'service' and 'api' must be provided"));
    }

    #[test]
    fn empty_api_is_rejected_before_anything_else() {
        assert!(
            integration_resource_arn(&aws(), "sns", "", Some(IntegrationPattern::RunJob)).is_err()
        );
    }

    #[test]
    fn identical_inputs_always_produce_identical_arns() -> Result<()> {
        let partition = Partition::new(Partition::AWS_CN);
        let first = integration_resource_arn(
            &partition,
            "ecs",
            "runTask",
            Some(IntegrationPattern::RunJob),
        )?;
        for _ in 0..3 {
            assert_eq!(
                first,
                integration_resource_arn(
                    &partition,
                    "ecs",
                    "runTask",
                    Some(IntegrationPattern::RunJob),
                )?
            );
        }
        assert_eq!("arn:aws-cn:states:::ecs:runTask.sync", first);
        Ok(())
    }

    #[test]
    fn regions_map_to_partitions_by_prefix() {
        assert_eq!(Partition::new("aws"), Partition::from_region("us-east-1"));
        assert_eq!(Partition::new("aws"), Partition::from_region("eu-west-2"));
        assert_eq!(
            Partition::new("aws-cn"),
            Partition::from_region("cn-north-1")
        );
        assert_eq!(
            Partition::new("aws-us-gov"),
            Partition::from_region("us-gov-west-1")
        );
    }
}
