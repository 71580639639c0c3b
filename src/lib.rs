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

//! Boolean expression trees in Rust
//!
//! Trees are built from the constants [`TRUE`] and [`FALSE`], the operators
//! [`And`], [`Or`], [`Not`] and [`Xor`], and any host type implementing
//! [`Operand`]. Evaluation is asynchronous, walks children in insertion order
//! and returns the first failure it meets unchanged.
//!
//! ```rust
//! use std::sync::Arc;
//! use logic_expressions::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let or = Or::with_operands([FALSE.clone(), TRUE.clone()]);
//! let and = And::new();
//! and.add([Arc::new(or) as OperandRef, Arc::new(Not::of(FALSE.clone()))]);
//!
//! assert_eq!(and.to_string(), "And(Or, Not)");
//! assert!(and.evaluate(&EvaluationContext::new()).await.unwrap());
//! # }
//! ```

pub mod core;
pub mod evaluator;
pub mod operations;
pub mod prelude;

pub use crate::core::{Arity, ErrorCode, ExpressionError, Result};
pub use evaluator::{
    CancellationToken, EvaluationConfig, EvaluationContext, Operand, OperandRef,
};
pub use operations::{And, Constant, FALSE, Not, OperandList, Operator, Or, TRUE, Xor};
