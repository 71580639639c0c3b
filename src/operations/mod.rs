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

//! Logical operators and boolean constants
//!
//! Every operator owns an [`OperandList`] and implements [`Operator`], which
//! supplies composition, rendering and the arity check shared by all of
//! them. The evaluation algorithm itself lives in each operator's
//! [`Operand`] implementation.

mod and_operator;
mod constant;
mod not_operator;
mod operand_list;
mod or_operator;
mod xor_operator;

#[cfg(test)]
pub(crate) mod test_utils;

pub use and_operator::And;
pub use constant::{Constant, FALSE, TRUE};
pub use not_operator::Not;
pub use operand_list::{OperandList, OperandSnapshot};
pub use or_operator::Or;
pub use xor_operator::Xor;

use std::sync::Arc;

use crate::core::{Arity, ExpressionError, Result};
use crate::evaluator::{EvaluationContext, Operand, OperandRef};
use operand_list::render_operator;

/// A node that composes child operands
pub trait Operator: Operand {
    /// The guarded child sequence owned by this operator
    fn operands(&self) -> &OperandList;

    /// Operand count accepted at evaluation time
    fn arity(&self) -> Arity;

    /// Append operands after the existing children
    ///
    /// Never fails; the operand count is only checked on evaluation.
    fn add<I>(&self, operands: I)
    where
        I: IntoIterator<Item = OperandRef>,
        Self: Sized,
    {
        self.operands().extend(operands);
    }

    /// Append a single operand
    fn add_operand<O>(&self, operand: O)
    where
        O: Operand + 'static,
        Self: Sized,
    {
        self.operands().push(Arc::new(operand));
    }

    /// Human-readable form: `Name(child1, child2, ...)`
    fn render(&self) -> String {
        self.operands().render(self.name())
    }

    /// Snapshot the children, check the arity and derive the child context
    ///
    /// The snapshot is taken under the read lock, so evaluation sees either
    /// all or none of the operands appended by a concurrent `add`.
    fn prepare(&self, context: &EvaluationContext) -> Result<(OperandSnapshot, EvaluationContext)> {
        let operands = self.operands().snapshot();
        let arity = self.arity();
        if !arity.accepts(operands.len()) {
            log::debug!(
                "{}: expected {} operands, got {}",
                self.name(),
                arity,
                operands.len()
            );
            return Err(ExpressionError::invalid_operands(
                self.name(),
                arity,
                operands.len(),
            ));
        }

        let child_context = context.enter(self.name())?;
        if context.config().trace_evaluation {
            log::trace!(
                "evaluating {} at depth {}",
                render_operator(self.name(), &operands),
                child_context.depth()
            );
        }

        Ok((operands, child_context))
    }
}
