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

//! Error code system following the Rust compiler pattern (LX0001, LX0002, ...)

use std::fmt;

/// Error code rendered as `LX` followed by four digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    pub code: u16,
}

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self { code }
    }

    /// Get the full error code string (e.g., "LX0001")
    pub fn code_str(&self) -> String {
        self.to_string()
    }

    /// Get error information from the registry
    pub fn info(&self) -> &'static ErrorInfo {
        match self.code {
            1 => &LX0001_INFO,
            2 => &LX0002_INFO,
            3 => &LX0003_INFO,
            4 => &LX0004_INFO,
            _ => &UNKNOWN_ERROR_INFO,
        }
    }

    /// Get human-readable description for this error code
    pub fn description(&self) -> &'static str {
        self.info().title
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LX{:04}", self.code)
    }
}

/// Static description of an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Error code number
    pub code: u16,
    /// Human-readable error title
    pub title: &'static str,
    /// Help information and suggested solutions
    pub help: &'static str,
}

impl ErrorInfo {
    pub const fn new(code: u16, title: &'static str, help: &'static str) -> Self {
        Self { code, title, help }
    }
}

pub const LX0001: ErrorCode = ErrorCode::new(1); // Invalid number of operands
pub const LX0002: ErrorCode = ErrorCode::new(2); // Recursion limit exceeded
pub const LX0003: ErrorCode = ErrorCode::new(3); // Operand reported a failure
pub const LX0004: ErrorCode = ErrorCode::new(4); // External operand error

pub static LX0001_INFO: ErrorInfo = ErrorInfo::new(
    1,
    "Invalid number of operands",
    "And and Or need at least one operand, Not exactly one, Xor exactly two",
);

pub static LX0002_INFO: ErrorInfo = ErrorInfo::new(
    2,
    "Recursion limit exceeded",
    "Check the tree for cycles or raise max_recursion_depth",
);

pub static LX0003_INFO: ErrorInfo = ErrorInfo::new(
    3,
    "Operand evaluation failed",
    "The failing operand was supplied by the host program",
);

pub static LX0004_INFO: ErrorInfo = ErrorInfo::new(
    4,
    "External operand error",
    "Inspect the source error for details",
);

pub static UNKNOWN_ERROR_INFO: ErrorInfo = ErrorInfo::new(0, "Unknown error", "");
