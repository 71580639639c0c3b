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

//! Evaluation context passed down the expression tree
//!
//! A context is cheap to clone: the configuration and the cancellation flag
//! are shared, only the nesting depth is per-level.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::config::EvaluationConfig;
use crate::core::{ExpressionError, Result};

/// A cancellation token for signalling that an evaluation should stop.
///
/// Built-in operators do not poll the token. It is carried through every
/// level of the tree so that host operands (which may perform I/O) can
/// observe it.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check if cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Context for one evaluation of an expression tree
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
    /// Configuration shared by all levels
    config: Arc<EvaluationConfig>,
    /// Number of operators entered above this point
    depth: usize,
    /// Caller-controlled cancellation flag
    cancellation: CancellationToken,
}

impl EvaluationContext {
    /// Create a root context with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a root context with the given configuration
    pub fn with_config(config: EvaluationConfig) -> Self {
        Self {
            config: Arc::new(config),
            ..Self::default()
        }
    }

    /// Attach a cancellation token owned by the caller
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Current operator nesting depth (0 at the root context)
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Derive the context used for the children of `operator`
    ///
    /// Fails with `RecursionLimitExceeded` when the configured depth limit
    /// would be passed.
    pub fn enter(&self, operator: &str) -> Result<EvaluationContext> {
        let depth = self.depth + 1;
        if let Some(limit) = self.config.max_recursion_depth {
            if depth > limit {
                log::debug!("{operator}: recursion limit {limit} reached");
                return Err(ExpressionError::recursion_limit(operator, limit));
            }
        }

        Ok(Self {
            config: Arc::clone(&self.config),
            depth,
            cancellation: self.cancellation.clone(),
        })
    }
}
