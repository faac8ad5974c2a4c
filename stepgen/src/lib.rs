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

#![warn(missing_docs, clippy::needless_borrow)]
// Clippy lints, some should be disabled incrementally
#![allow(clippy::comparison_to_empty, clippy::upper_case_acronyms)]

//! Stepgen is the task-building layer of an infrastructure-as-code toolkit:
//! it validates requested Step Functions service integration patterns against
//! the patterns a task type supports, and synthesizes the resource ARN strings
//! that select those integrations in a generated state machine definition.

pub mod arn;
pub mod configs;
pub mod error;
pub mod integration;
pub mod prelude;
