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

//! Operand count requirements for operators

use std::fmt;

/// Number of operands an operator accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// At least `n` operands
    AtLeast(usize),
    /// Exactly `n` operands
    Exactly(usize),
}

impl Arity {
    /// Check whether `count` operands satisfy this requirement
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::AtLeast(min) => count >= min,
            Arity::Exactly(n) => count == n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::AtLeast(min) => write!(f, "at least {min}"),
            Arity::Exactly(n) => write!(f, "exactly {n}"),
        }
    }
}
