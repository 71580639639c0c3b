// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The capability contract shared by every node of an expression tree

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use super::context::EvaluationContext;
use crate::core::Result;

/// A named node that evaluates to a boolean
///
/// Implemented by the constants, by the four logical operators, and by any
/// host type that wants to take part in a tree (a rule lookup, a feature
/// flag, ...). Implementations must not mutate the node during evaluation
/// and must tolerate concurrent calls.
#[async_trait]
pub trait Operand: Debug + Send + Sync {
    /// Display name of the node
    ///
    /// Used for rendering only, never for equality or dispatch.
    fn name(&self) -> &str;

    /// Evaluate the node
    ///
    /// Failures are returned as-is; parents never wrap them.
    async fn evaluate(&self, context: &EvaluationContext) -> Result<bool>;
}

/// Shared handle to a node stored inside an operator
pub type OperandRef = Arc<dyn Operand>;

