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

//! Guarded child sequence shared by all operators

use std::sync::Arc;

use parking_lot::RwLock;
use smallvec::SmallVec;

use crate::evaluator::{Operand, OperandRef};

/// Children copied out of an [`OperandList`] for one evaluation
pub type OperandSnapshot = SmallVec<[OperandRef; 4]>;

/// Ordered children of an operator behind a read/write lock
///
/// Insertion order is evaluation order. Composition takes the write lock;
/// evaluation and rendering take the read lock.
#[derive(Debug, Default)]
pub struct OperandList {
    operands: RwLock<Vec<OperandRef>>,
}

impl OperandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list that already holds `operands`
    pub fn from_operands<I>(operands: I) -> Self
    where
        I: IntoIterator<Item = OperandRef>,
    {
        Self {
            operands: RwLock::new(operands.into_iter().collect()),
        }
    }

    /// Append operands, all under a single write guard
    pub fn extend<I>(&self, operands: I)
    where
        I: IntoIterator<Item = OperandRef>,
    {
        // Collect first so foreign iterator code never runs under the lock
        let incoming: Vec<OperandRef> = operands.into_iter().collect();
        if incoming.is_empty() {
            return;
        }

        let mut guard = self.operands.write();
        if guard.is_empty() {
            *guard = incoming;
        } else {
            guard.extend(incoming);
        }
    }

    /// Append a single operand
    pub fn push(&self, operand: OperandRef) {
        self.operands.write().push(operand);
    }

    pub fn len(&self) -> usize {
        self.operands.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.operands.read().is_empty()
    }

    /// Copy the current children out from under the read lock
    pub fn snapshot(&self) -> OperandSnapshot {
        self.operands.read().iter().map(Arc::clone).collect()
    }

    /// Names of the current children, in order
    pub fn names(&self) -> Vec<String> {
        self.operands
            .read()
            .iter()
            .map(|operand| operand.name().to_string())
            .collect()
    }

    /// Render as `name(child1, child2, ...)`
    pub fn render(&self, name: &str) -> String {
        render_operator(name, &self.operands.read())
    }
}

pub(crate) fn render_operator(name: &str, operands: &[OperandRef]) -> String {
    let names: Vec<&str> = operands.iter().map(|operand| operand.name()).collect();
    format!("{}({})", name, names.join(", "))
}
