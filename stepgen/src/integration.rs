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

//! Service integration patterns for Step Functions tasks.
//!
//! A state machine task invokes another service in one of three ways: it
//! fires the request and moves on, it waits for the invoked job to finish,
//! or it pauses until the service calls back with a task token. The pattern
//! a task uses is selected by a suffix on the task's resource ARN.
//! <https://docs.aws.amazon.com/step-functions/latest/dg/connect-to-resource.html>

use crate::error::{Result, StepgenError};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// How a state machine task waits for, or receives results from, an invoked
/// service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum IntegrationPattern {
    /// Call the service API and proceed as soon as the HTTP response comes
    /// back. The task does not wait for the underlying job to complete.
    RequestResponse,
    /// Run the job to completion. Step Functions polls the service and only
    /// leaves the task state when the job has finished.
    RunJob,
    /// Pause the task until the invoked service reports back with the task
    /// token that was passed to it in the request payload.
    WaitForTaskToken,
}

impl IntegrationPattern {
    /// All known service integration patterns, in declaration order.
    pub const ALL: [IntegrationPattern; 3] = [
        IntegrationPattern::RequestResponse,
        IntegrationPattern::RunJob,
        IntegrationPattern::WaitForTaskToken,
    ];

    /// Return the resource ARN suffix that selects this pattern.
    ///
    /// The match is exhaustive, so adding a new pattern forces an update
    /// here rather than leaving a silent runtime gap.
    pub fn suffix(&self) -> &'static str {
        match self {
            IntegrationPattern::RequestResponse => "",
            IntegrationPattern::RunJob => ".sync",
            IntegrationPattern::WaitForTaskToken => ".waitForTaskToken",
        }
    }
}

impl Default for IntegrationPattern {
    fn default() -> Self {
        IntegrationPattern::RequestResponse
    }
}

impl Display for IntegrationPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrationPattern::RequestResponse => write!(f, "REQUEST_RESPONSE"),
            IntegrationPattern::RunJob => write!(f, "RUN_JOB"),
            IntegrationPattern::WaitForTaskToken => write!(f, "WAIT_FOR_TASK_TOKEN"),
        }
    }
}

impl FromStr for IntegrationPattern {
    type Err = StepgenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "REQUEST_RESPONSE" | "request-response" => Ok(IntegrationPattern::RequestResponse),
            "RUN_JOB" | "run-job" => Ok(IntegrationPattern::RunJob),
            "WAIT_FOR_TASK_TOKEN" | "wait-for-task-token" => {
                Ok(IntegrationPattern::WaitForTaskToken)
            }
            _ => Err(StepgenError::InvalidArgument(format!(
                "Unknown service integration pattern: {}",
                s
            ))),
        }
    }
}

/// Verifies that an integration pattern is supported for a service
/// integration.
///
/// Task constructs declare the patterns their service API supports; a
/// requested pattern outside that set is a configuration error that must
/// abort synthesis, so the message carries both the supported set and the
/// requested value.
pub fn validate_pattern_supported(
    requested: IntegrationPattern,
    supported: &[IntegrationPattern],
) -> Result<()> {
    if !supported.contains(&requested) {
        return Err(StepgenError::Validation(format!(
            "Unsupported service integration pattern. Supported Patterns: {}. Received: {}",
            supported.iter().join(", "),
            requested
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_passes_against_the_full_set() -> Result<()> {
        for pattern in IntegrationPattern::ALL {
            validate_pattern_supported(pattern, &IntegrationPattern::ALL)?;
        }
        Ok(())
    }

    #[test]
    fn unsupported_pattern_is_rejected_with_both_sides_in_the_message() {
        let supported = [IntegrationPattern::RequestResponse, IntegrationPattern::RunJob];
        let err = validate_pattern_supported(IntegrationPattern::WaitForTaskToken, &supported)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Unsupported service integration pattern"));
        assert!(msg.contains("REQUEST_RESPONSE, RUN_JOB"));
        assert!(msg.contains("Received: WAIT_FOR_TASK_TOKEN"));
    }

    #[test]
    fn empty_supported_set_rejects_everything() {
        for pattern in IntegrationPattern::ALL {
            assert!(validate_pattern_supported(pattern, &[]).is_err());
        }
    }

    #[test]
    fn suffix_table_matches_the_service_integration_docs() {
        assert_eq!("", IntegrationPattern::RequestResponse.suffix());
        assert_eq!(".sync", IntegrationPattern::RunJob.suffix());
        assert_eq!(".waitForTaskToken", IntegrationPattern::WaitForTaskToken.suffix());
    }

    #[test]
    fn patterns_parse_from_both_name_styles() -> Result<()> {
        for pattern in IntegrationPattern::ALL {
            assert_eq!(pattern, pattern.to_string().parse()?);
        }
        assert_eq!(
            IntegrationPattern::WaitForTaskToken,
            "wait-for-task-token".parse()?
        );
        assert!("fire-and-forget".parse::<IntegrationPattern>().is_err());
        Ok(())
    }

    #[test]
    fn default_pattern_is_request_response() {
        assert_eq!(
            IntegrationPattern::RequestResponse,
            IntegrationPattern::default()
        );
    }

    #[test]
    fn patterns_round_trip_through_serde() -> Result<()> {
        let json = serde_json::to_string(&IntegrationPattern::RunJob)
            .map_err(|e| StepgenError::Internal(e.to_string()))?;
        assert_eq!("\"RunJob\"", json);
        let back: IntegrationPattern =
            serde_json::from_str(&json).map_err(|e| StepgenError::Internal(e.to_string()))?;
        assert_eq!(IntegrationPattern::RunJob, back);
        Ok(())
    }
}
