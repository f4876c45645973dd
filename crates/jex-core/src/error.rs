// Dweve JEX - Streaming JSON Projection
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for path parsing and schema compilation.

use thiserror::Error;

/// Errors raised while parsing path patterns or compiling a schema.
///
/// Construction-time errors: once a [`Schema`](crate::Schema) compiles, no
/// further `CoreError` can occur while it is used.
///
/// # Examples
///
/// ```rust
/// use jex_core::{CoreError, Path};
///
/// let err = Path::parse("ID").unwrap_err();
/// assert!(matches!(err, CoreError::InvalidPattern { .. }));
/// assert!(err.to_string().contains("ID"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A source path pattern does not conform to the path grammar.
    #[error("Invalid path pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The offending pattern, verbatim.
        pattern: String,
        /// What the parser objected to.
        message: String,
    },

    /// Two schema entries share a destination key.
    #[error("Duplicate destination key '{0}'")]
    DuplicateKey(String),

    /// The schema contains no entries.
    #[error("Schema has no entries")]
    EmptySchema,
}

impl CoreError {
    /// Create an invalid-pattern error.
    #[inline]
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

/// Result type for schema construction.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_display() {
        let err = CoreError::pattern(".[x]", "non-numeric array index 'x'");
        let msg = err.to_string();
        assert!(msg.contains(".[x]"));
        assert!(msg.contains("non-numeric"));
    }

    #[test]
    fn test_duplicate_key_display() {
        let err = CoreError::DuplicateKey("id".to_string());
        assert!(err.to_string().contains("'id'"));
    }

    #[test]
    fn test_empty_schema_display() {
        let err = CoreError::EmptySchema;
        assert!(err.to_string().contains("no entries"));
    }

    #[test]
    fn test_pattern_constructor() {
        let err = CoreError::pattern("bad", "reason");
        if let CoreError::InvalidPattern { pattern, message } = err {
            assert_eq!(pattern, "bad");
            assert_eq!(message, "reason");
        } else {
            panic!("Expected InvalidPattern variant");
        }
    }
}
