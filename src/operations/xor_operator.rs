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

//! Logical XOR operator
//!
//! Exclusive-or can never be decided by one side alone, so both operands are
//! always evaluated, left first.

use std::fmt;

use async_trait::async_trait;

use super::{OperandList, Operator};
use crate::core::{Arity, Result};
use crate::evaluator::{EvaluationContext, Operand, OperandRef};

/// Exclusive-or of exactly two operands
#[derive(Debug, Default)]
pub struct Xor {
    operands: OperandList,
}

impl Xor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an XOR over `left` and `right`
    pub fn of(left: OperandRef, right: OperandRef) -> Self {
        Self::with_operands([left, right])
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

impl Operator for Xor {
    fn operands(&self) -> &OperandList {
        &self.operands
    }

    fn arity(&self) -> Arity {
        Arity::Exactly(2)
    }
}

#[async_trait]
impl Operand for Xor {
    fn name(&self) -> &str {
        "Xor"
    }

    async fn evaluate(&self, context: &EvaluationContext) -> Result<bool> {
        let (operands, child_context) = self.prepare(context)?;
        let left = operands[0].evaluate(&child_context).await?;
        let right = operands[1].evaluate(&child_context).await?;
        Ok(left != right)
    }
}

impl fmt::Display for Xor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_utils::{Probe, assert_probe_failure};
    use crate::operations::{Constant, TRUE};
    use pretty_assertions::assert_eq;

    async fn eval(operator: &Xor) -> Result<bool> {
        operator.evaluate(&EvaluationContext::new()).await
    }

    #[test]
    fn test_xor_name() {
        assert_eq!(Xor::new().name(), "Xor");
    }

    #[tokio::test]
    async fn test_xor_truth_table() {
        for a in [false, true] {
            for b in [false, true] {
                let xor = Xor::new();
                xor.add_operand(Constant::from(a));
                xor.add_operand(Constant::from(b));
                assert_eq!(eval(&xor).await.unwrap(), a != b, "Xor({a}, {b})");
            }
        }
    }

    #[tokio::test]
    async fn test_xor_arity() {
        assert!(eval(&Xor::new()).await.unwrap_err().is_invalid_operands());
        assert!(
            eval(&Xor::with_operands([TRUE.clone()]))
                .await
                .unwrap_err()
                .is_invalid_operands()
        );
        assert!(
            eval(&Xor::with_operands([TRUE.clone(), TRUE.clone(), TRUE.clone()]))
                .await
                .unwrap_err()
                .is_invalid_operands()
        );
    }

    #[tokio::test]
    async fn test_xor_evaluates_both_operands_once() {
        let left = Probe::returning(true);
        let right = Probe::returning(false);
        let xor = Xor::of(left.operand(), right.operand());

        assert!(eval(&xor).await.unwrap());
        assert_eq!(left.calls(), 1);
        assert_eq!(right.calls(), 1);
    }

    #[tokio::test]
    async fn test_xor_left_failure_skips_right() {
        let left = Probe::failing("left");
        let right = Probe::returning(false);
        let xor = Xor::of(left.operand(), right.operand());

        assert_probe_failure(eval(&xor).await, "left");
        assert_eq!(right.calls(), 0);
    }

    #[tokio::test]
    async fn test_xor_right_failure() {
        let left = Probe::returning(true);
        let right = Probe::failing("right");
        let xor = Xor::of(left.operand(), right.operand());

        assert_probe_failure(eval(&xor).await, "right");
        assert_eq!(left.calls(), 1);
    }

    #[test]
    fn test_xor_render() {
        let xor = Xor::of(TRUE.clone(), Constant::False.into_operand());
        assert_eq!(xor.to_string(), "Xor(True, False)");
    }
}
