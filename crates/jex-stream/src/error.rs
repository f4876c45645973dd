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

//! Error types for the streaming projector.
//!
//! Two families share one enum: *transport* errors from reading and
//! tokenizing the input (I/O, UTF-8, syntax, limits), and *data* errors from
//! the record protocol itself (incomplete records, collisions, skipped
//! elements, truncation). The [`is_data_error()`](StreamError::is_data_error)
//! classifier separates them; the CLI maps the data family to its
//! stream-failure exit code.

use thiserror::Error;

/// Errors that can occur while streaming records out of a JSON document.
///
/// Scanner errors carry the input line they were detected on; use
/// [`line()`](Self::line) to extract it uniformly.
///
/// # Examples
///
/// ```rust
/// use jex_stream::StreamError;
///
/// let err = StreamError::syntax(42, "unexpected character '%'");
/// assert_eq!(err.line(), Some(42));
/// assert!(!err.is_data_error());
/// ```
#[derive(Error, Debug)]
pub enum StreamError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid UTF-8 encoding.
    #[error("Invalid UTF-8 at line {line}: {message}")]
    Utf8 { line: usize, message: String },

    /// Malformed JSON input.
    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// A configured scanner limit was exceeded.
    #[error("Limit exceeded at line {line}: {message}")]
    Limit { line: usize, message: String },

    /// Input ended inside an unclosed container.
    #[error("Unexpected end of input at line {line}: document is truncated")]
    Truncated { line: usize },

    /// A record scope closed before every schema entry was bound.
    #[error("Incomplete record at {path}: seen only {seen:?}")]
    IncompleteRecord {
        /// Rendered traversal path where the boundary was crossed.
        path: String,
        /// Rendered source patterns bound so far.
        seen: Vec<String>,
    },

    /// A non-multi destination key was bound twice before the record
    /// completed.
    #[error("Collision on '{key}' before record was full at {path} (bad order?)")]
    Collision { key: String, path: String },

    /// A record scope closed with multi bindings that were overwritten
    /// before the record ever completed.
    #[error("Skipped elements at {path} (input out of order?): {skipped:?}")]
    SkippedElements {
        /// Rendered traversal path where the boundary was crossed.
        path: String,
        /// Rendered concrete paths of the overwritten bindings.
        skipped: Vec<String>,
    },
}

impl StreamError {
    /// Create a syntax error.
    #[inline]
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid-UTF-8 error.
    #[inline]
    pub fn utf8(line: usize, message: impl Into<String>) -> Self {
        Self::Utf8 {
            line,
            message: message.into(),
        }
    }

    /// Create a limit-exceeded error.
    #[inline]
    pub fn limit(line: usize, message: impl Into<String>) -> Self {
        Self::Limit {
            line,
            message: message.into(),
        }
    }

    /// Get the input line number if available.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Utf8 { line, .. }
            | Self::Syntax { line, .. }
            | Self::Limit { line, .. }
            | Self::Truncated { line } => Some(*line),
            _ => None,
        }
    }

    /// True for record-protocol violations (incomplete record, collision,
    /// skipped elements, truncated document), as opposed to transport
    /// errors from reading or tokenizing the input.
    #[inline]
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::Truncated { .. }
                | Self::IncompleteRecord { .. }
                | Self::Collision { .. }
                | Self::SkippedElements { .. }
        )
    }
}

/// Result type for streaming operations.
pub type StreamResult<T> = Result<T, StreamError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    // ==================== Display tests ====================

    #[test]
    fn test_io_display() {
        let err = StreamError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let msg = err.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_syntax_display() {
        let err = StreamError::syntax(10, "unexpected character ';'");
        let msg = err.to_string();
        assert!(msg.contains("line 10"));
        assert!(msg.contains("';'"));
    }

    #[test]
    fn test_incomplete_display() {
        let err = StreamError::IncompleteRecord {
            path: ".[1]".to_string(),
            seen: vec![".[].ID".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains(".[1]"));
        assert!(msg.contains(".[].ID"));
    }

    #[test]
    fn test_collision_display() {
        let err = StreamError::Collision {
            key: "id".to_string(),
            path: ".[0].ID".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'id'"));
        assert!(msg.contains(".[0].ID"));
    }

    #[test]
    fn test_skipped_display() {
        let err = StreamError::SkippedElements {
            path: ".[1]".to_string(),
            skipped: vec![".[0].TOKENS[1]".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("out of order"));
        assert!(msg.contains(".[0].TOKENS[1]"));
    }

    // ==================== line() tests ====================

    #[test]
    fn test_line_present() {
        assert_eq!(StreamError::syntax(3, "x").line(), Some(3));
        assert_eq!(StreamError::utf8(4, "x").line(), Some(4));
        assert_eq!(StreamError::limit(5, "x").line(), Some(5));
        assert_eq!(StreamError::Truncated { line: 6 }.line(), Some(6));
    }

    #[test]
    fn test_line_absent() {
        let err = StreamError::Collision {
            key: "k".to_string(),
            path: ".".to_string(),
        };
        assert_eq!(err.line(), None);
        assert_eq!(StreamError::Io(io::Error::other("x")).line(), None);
    }

    // ==================== Classifier tests ====================

    #[test]
    fn test_data_error_classification() {
        assert!(StreamError::Truncated { line: 1 }.is_data_error());
        assert!(StreamError::IncompleteRecord {
            path: ".".to_string(),
            seen: Vec::new(),
        }
        .is_data_error());
        assert!(StreamError::Collision {
            key: "k".to_string(),
            path: ".".to_string(),
        }
        .is_data_error());
        assert!(StreamError::SkippedElements {
            path: ".".to_string(),
            skipped: Vec::new(),
        }
        .is_data_error());
    }

    #[test]
    fn test_transport_error_classification() {
        assert!(!StreamError::syntax(1, "x").is_data_error());
        assert!(!StreamError::utf8(1, "x").is_data_error());
        assert!(!StreamError::limit(1, "x").is_data_error());
        assert!(!StreamError::Io(io::Error::other("x")).is_data_error());
    }
}
