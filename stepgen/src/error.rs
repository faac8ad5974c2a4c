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

//! Stepgen error types

use std::error;
use std::fmt::{Display, Formatter};
use std::result;

/// Result type for operations that could result in an [StepgenError]
pub type Result<T> = result::Result<T, StepgenError>;

/// Stepgen error
#[derive(Debug)]
pub enum StepgenError {
    /// Error returned when a requested service integration pattern is absent
    /// from the set of patterns a task type supports. This surfaces at
    /// synthesis time and aborts template generation; it is a configuration
    /// error, not a transient runtime fault.
    Validation(String),
    /// Error returned when a caller violates an argument precondition, such
    /// as passing an empty service or API name to the ARN builder.
    InvalidArgument(String),
    /// Error returned as a consequence of an error in Stepgen.
    /// This error should not happen in normal usage of Stepgen.
    Internal(String),
}

impl From<&str> for StepgenError {
    fn from(e: &str) -> Self {
        StepgenError::Internal(e.to_string())
    }
}

impl Display for StepgenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            StepgenError::Validation(ref desc) => write!(f, "Validation error: {}", desc),
            StepgenError::InvalidArgument(ref desc) => {
                write!(f, "Invalid argument error: {}", desc)
            }
            StepgenError::Internal(ref desc) => write!(
                f,
                "Internal error: {}. This was likely caused by a bug in Stepgen's \
                    code and we would welcome that you file an bug report in our issue tracker",
                desc
            ),
        }
    }
}

impl error::Error for StepgenError {}
