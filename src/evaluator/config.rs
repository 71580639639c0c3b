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

//! Evaluation configuration
//!
//! Controls optional safety limits and diagnostic output for expression
//! evaluation. The defaults reproduce the plain algorithm: no depth limit and
//! no per-operator tracing.

/// Configuration shared by every context derived from one evaluation
///
/// # Examples
///
/// ```rust
/// use logic_expressions::evaluator::EvaluationConfig;
///
/// // Unbounded evaluation
/// let config = EvaluationConfig::default();
/// assert_eq!(config.max_recursion_depth, None);
///
/// // Guard against cyclic trees
/// let config = EvaluationConfig::default()
///     .with_max_recursion_depth(64)
///     .with_trace_evaluation(true);
/// assert!(config.validate().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationConfig {
    /// Maximum operator nesting depth
    ///
    /// `None` disables the check. With `Some(n)`, entering an operator at a
    /// depth greater than `n` fails with `RecursionLimitExceeded`. The root
    /// operator is at depth 1.
    pub max_recursion_depth: Option<usize>,

    /// Emit a `trace!` line for every operator evaluation
    pub trace_evaluation: bool,
}

impl EvaluationConfig {
    /// Create new configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration that bounds nesting depth
    pub fn bounded(depth: usize) -> Self {
        Self::default().with_max_recursion_depth(depth)
    }

    /// Configuration for unit tests: a small depth limit and tracing enabled
    pub fn for_testing() -> Self {
        Self {
            max_recursion_depth: Some(32),
            trace_evaluation: true,
        }
    }

    /// Set maximum recursion depth
    ///
    /// # Arguments
    /// * `depth` - Maximum operator nesting depth (recommended: 32-1000)
    pub fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = Some(depth);
        self
    }

    /// Remove the recursion limit
    pub fn unbounded(mut self) -> Self {
        self.max_recursion_depth = None;
        self
    }

    /// Enable or disable per-operator tracing
    pub fn with_trace_evaluation(mut self, enabled: bool) -> Self {
        self.trace_evaluation = enabled;
        self
    }

    /// Validate configuration values
    ///
    /// Returns warnings for settings that are accepted but probably wrong.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        match self.max_recursion_depth {
            Some(0) => warnings.push(
                "max_recursion_depth is 0 - every operator evaluation will fail".to_string(),
            ),
            Some(depth) if depth > 10_000 => warnings.push(
                "max_recursion_depth is very high (>10000) - may overflow the stack before the limit trips"
                    .to_string(),
            ),
            _ => {}
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let config = EvaluationConfig::default();
        assert_eq!(config.max_recursion_depth, None);
        assert!(!config.trace_evaluation);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_builders() {
        let config = EvaluationConfig::bounded(10).with_trace_evaluation(true);
        assert_eq!(config.max_recursion_depth, Some(10));
        assert!(config.trace_evaluation);
        assert_eq!(config.unbounded().max_recursion_depth, None);
    }

    #[test]
    fn test_validate_warnings() {
        assert_eq!(EvaluationConfig::bounded(0).validate().len(), 1);
        assert_eq!(EvaluationConfig::bounded(20_000).validate().len(), 1);
        assert!(EvaluationConfig::for_testing().validate().is_empty());
    }
}
