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

//! Logical OR operator

use std::fmt;

use async_trait::async_trait;

use super::{OperandList, Operator};
use crate::core::{Arity, Result};
use crate::evaluator::{EvaluationContext, Operand, OperandRef};

/// Disjunction of one or more operands, stopping at the first `true`
#[derive(Debug, Default)]
pub struct Or {
    operands: OperandList,
}

impl Or {
    pub fn new() -> Self {
        Self::default()
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

impl Operator for Or {
    fn operands(&self) -> &OperandList {
        &self.operands
    }

    fn arity(&self) -> Arity {
        Arity::AtLeast(1)
    }
}

#[async_trait]
impl Operand for Or {
    fn name(&self) -> &str {
        "Or"
    }

    async fn evaluate(&self, context: &EvaluationContext) -> Result<bool> {
        let (operands, child_context) = self.prepare(context)?;

        for (index, operand) in operands.iter().enumerate() {
            if operand.evaluate(&child_context).await? {
                log::trace!("Or: short-circuit on operand {index} ({})", operand.name());
                return Ok(true);
            }
        }

        Ok(false)
    }
}

impl fmt::Display for Or {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
