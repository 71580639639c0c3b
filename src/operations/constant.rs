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

//! Boolean constants

use std::sync::{Arc, LazyLock};

use async_trait::async_trait;

use crate::core::Result;
use crate::evaluator::{EvaluationContext, Operand, OperandRef};

/// Immutable boolean leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    True,
    False,
}

impl Constant {
    pub fn value(self) -> bool {
        matches!(self, Constant::True)
    }

    /// The shared singleton for this constant
    pub fn into_operand(self) -> OperandRef {
        match self {
            Constant::True => TRUE.clone(),
            Constant::False => FALSE.clone(),
        }
    }
}

impl From<bool> for Constant {
    fn from(value: bool) -> Self {
        if value { Constant::True } else { Constant::False }
    }
}

#[async_trait]
impl Operand for Constant {
    fn name(&self) -> &str {
        match self {
            Constant::True => "True",
            Constant::False => "False",
        }
    }

    async fn evaluate(&self, _context: &EvaluationContext) -> Result<bool> {
        Ok(self.value())
    }
}

/// Shared `True` leaf
pub static TRUE: LazyLock<OperandRef> = LazyLock::new(|| Arc::new(Constant::True));

/// Shared `False` leaf
pub static FALSE: LazyLock<OperandRef> = LazyLock::new(|| Arc::new(Constant::False));
