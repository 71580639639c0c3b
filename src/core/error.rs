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

//! Error types for expression evaluation

use std::error::Error as StdError;
use std::sync::Arc;
use thiserror::Error;

use super::arity::Arity;
use super::error_code::{ErrorCode, LX0001, LX0002, LX0003, LX0004};

/// Errors raised while evaluating an expression tree
///
/// Operators never wrap the errors of their children: the first failure
/// produced anywhere in a subtree is returned to the caller unchanged.
#[derive(Debug, Clone, Error)]
pub enum ExpressionError {
    /// Operator evaluated with an operand count outside its arity
    #[error("{code}: invalid number of operands: {operator} expects {expected}, got {actual}", code = LX0001)]
    InvalidOperands {
        /// Name of the operator that was evaluated
        operator: String,
        /// Operand count the operator requires
        expected: Arity,
        /// Operand count found at evaluation time
        actual: usize,
    },

    /// Evaluation descended past the configured depth limit
    #[error("{code}: recursion limit of {limit} exceeded while entering {operator}", code = LX0002)]
    RecursionLimitExceeded {
        /// Operator that would have exceeded the limit
        operator: String,
        /// Configured maximum depth
        limit: usize,
    },

    /// Failure reported by a host-provided operand
    #[error("{code}: {operand}: {message}", code = LX0003)]
    OperandFailure {
        /// Name of the failing operand
        operand: String,
        /// Failure description
        message: String,
    },

    /// Foreign error returned by a host-provided operand
    #[error(transparent)]
    External(Arc<dyn StdError + Send + Sync>),
}

impl ExpressionError {
    /// Create an invalid operand count error
    pub fn invalid_operands(operator: impl Into<String>, expected: Arity, actual: usize) -> Self {
        Self::InvalidOperands {
            operator: operator.into(),
            expected,
            actual,
        }
    }

    /// Create a recursion limit error
    pub fn recursion_limit(operator: impl Into<String>, limit: usize) -> Self {
        Self::RecursionLimitExceeded {
            operator: operator.into(),
            limit,
        }
    }

    /// Create a failure on behalf of a custom operand
    pub fn operand_failure(operand: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OperandFailure {
            operand: operand.into(),
            message: message.into(),
        }
    }

    /// Wrap a foreign error raised by a custom operand
    pub fn external<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::External(Arc::new(error))
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidOperands { .. } => LX0001,
            Self::RecursionLimitExceeded { .. } => LX0002,
            Self::OperandFailure { .. } => LX0003,
            Self::External(_) => LX0004,
        }
    }

    pub fn is_invalid_operands(&self) -> bool {
        matches!(self, Self::InvalidOperands { .. })
    }
}

/// Result type for expression evaluation
pub type Result<T> = std::result::Result<T, ExpressionError>;
