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

//! Shared operands for integration tests

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use logic_expressions::{EvaluationContext, ExpressionError, Operand, OperandRef, Result};

/// Host operand that counts evaluations and returns a fixed outcome
#[derive(Debug)]
pub struct CountingOperand {
    name: String,
    outcome: Result<bool>,
    calls: AtomicUsize,
}

impl CountingOperand {
    pub fn returning(name: &str, value: bool) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            outcome: Ok(value),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(name: &str, message: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            outcome: Err(ExpressionError::operand_failure(name, message)),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn operand(self: &Arc<Self>) -> OperandRef {
        Arc::clone(self) as OperandRef
    }
}

#[async_trait]
impl Operand for CountingOperand {
    fn name(&self) -> &str {
        &self.name
    }

    async fn evaluate(&self, _context: &EvaluationContext) -> Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Host operand that reports whether the evaluation was cancelled
#[derive(Debug)]
pub struct CancellationAware;

#[async_trait]
impl Operand for CancellationAware {
    fn name(&self) -> &str {
        "CancellationAware"
    }

    async fn evaluate(&self, context: &EvaluationContext) -> Result<bool> {
        if context.is_cancelled() {
            return Err(ExpressionError::operand_failure(self.name(), "cancelled"));
        }
        Ok(true)
    }
}

pub fn arc<O: Operand + 'static>(operand: O) -> OperandRef {
    Arc::new(operand)
}
