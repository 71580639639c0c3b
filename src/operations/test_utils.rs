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

//! Helpers for operator tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::core::{ExpressionError, Result};
use crate::evaluator::{EvaluationContext, Operand, OperandRef};

/// Operand that records how often it was evaluated
#[derive(Debug)]
pub(crate) struct Probe {
    outcome: Result<bool>,
    calls: AtomicUsize,
}

impl Probe {
    pub(crate) fn returning(value: bool) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(value),
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(ExpressionError::operand_failure("Probe", message)),
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn operand(self: &Arc<Self>) -> OperandRef {
        Arc::clone(self) as OperandRef
    }
}

#[async_trait]
impl Operand for Probe {
    fn name(&self) -> &str {
        "Probe"
    }

    async fn evaluate(&self, _context: &EvaluationContext) -> Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Assert that `result` is the probe failure carrying `message`
pub(crate) fn assert_probe_failure(result: Result<bool>, message: &str) {
    match result {
        Err(ExpressionError::OperandFailure {
            operand,
            message: actual,
        }) => {
            assert_eq!(operand, "Probe");
            assert_eq!(actual, message);
        }
        other => panic!("expected probe failure, got {other:?}"),
    }
}
