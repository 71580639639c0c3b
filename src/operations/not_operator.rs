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

//! Logical NOT operator

use std::fmt;

use async_trait::async_trait;

use super::{OperandList, Operator};
use crate::core::{Arity, Result};
use crate::evaluator::{EvaluationContext, Operand, OperandRef};

/// Negation of exactly one operand
#[derive(Debug, Default)]
pub struct Not {
    operands: OperandList,
}

impl Not {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a NOT over a single operand
    pub fn of(operand: OperandRef) -> Self {
        Self::with_operands([operand])
    }

    pub fn with_operands<I>(operands: I) -> Self
    where
        I: IntoIterator<Item = OperandRef>,
    {
        Self {
            operands: OperandList::from_operands(operands),
        }
    }
}

impl Operator for Not {
    fn operands(&self) -> &OperandList {
        &self.operands
    }

    fn arity(&self) -> Arity {
        Arity::Exactly(1)
    }
}

#[async_trait]
impl Operand for Not {
    fn name(&self) -> &str {
        "Not"
    }

    async fn evaluate(&self, context: &EvaluationContext) -> Result<bool> {
        let (operands, child_context) = self.prepare(context)?;
        let value = operands[0].evaluate(&child_context).await?;
        Ok(!value)
    }
}

impl fmt::Display for Not {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExpressionError;
    use crate::operations::test_utils::{Probe, assert_probe_failure};
    use crate::operations::{FALSE, TRUE};
    use pretty_assertions::assert_eq;

    async fn eval(operator: &Not) -> Result<bool> {
        operator.evaluate(&EvaluationContext::new()).await
    }

    #[test]
    fn test_not_name() {
        assert_eq!(Not::new().name(), "Not");
    }

    #[tokio::test]
    async fn test_not_negates() {
        assert!(!eval(&Not::of(TRUE.clone())).await.unwrap());
        assert!(eval(&Not::of(FALSE.clone())).await.unwrap());
    }

    #[tokio::test]
    async fn test_not_without_operands() {
        let err = eval(&Not::new()).await.unwrap_err();
        assert!(matches!(
            err,
            ExpressionError::InvalidOperands {
                expected: Arity::Exactly(1),
                actual: 0,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_not_rejects_two_operands_before_evaluating() {
        let first = Probe::returning(true);
        let second = Probe::returning(true);
        let not = Not::with_operands([first.operand(), second.operand()]);

        let err = eval(&not).await.unwrap_err();
        assert!(err.is_invalid_operands());
        assert_eq!(first.calls(), 0);
        assert_eq!(second.calls(), 0);
    }

    #[tokio::test]
    async fn test_not_propagates_failure() {
        let failing = Probe::failing("unavailable");
        assert_probe_failure(eval(&Not::of(failing.operand())).await, "unavailable");
    }

    #[tokio::test]
    async fn test_not_becomes_invalid_after_second_add() {
        let not = Not::of(TRUE.clone());
        assert!(!eval(&not).await.unwrap());

        not.add_operand(crate::operations::Constant::False);
        assert!(eval(&not).await.unwrap_err().is_invalid_operands());
    }
}
