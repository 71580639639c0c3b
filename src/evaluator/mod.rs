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

//! Expression evaluation
//!
//! Holds the `Operand` contract every tree node implements, together with the
//! context and configuration threaded through recursive evaluation.

mod config;
mod context;
mod traits;

pub use config::EvaluationConfig;
pub use context::{CancellationToken, EvaluationContext};
pub use traits::{Operand, OperandRef};
