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

//! Structured error types for the JEX CLI.
//!
//! All CLI operations return `Result<T, CliError>`; `main` maps the variant
//! to the process exit code via [`CliError::exit_code`].

use jex_core::CoreError;
use jex_stream::StreamError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for JEX CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use jex_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// I/O operation failed (open, read, write).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The schema file is not a JSON object of string-to-string pairs.
    #[error("Schema file error: {0}")]
    SchemaFormat(String),

    /// The schema did not compile (bad pattern, duplicate key, empty).
    #[error("Schema error: {0}")]
    Schema(#[from] CoreError),

    /// The record stream failed.
    #[error("Streaming error: {0}")]
    Stream(#[from] StreamError),

    /// Record serialization failed.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// The process exit code this error maps to.
    ///
    /// Streaming failures exit 3; everything else (open and schema load
    /// failures) exits 1. Usage errors never reach here: clap exits 2 on
    /// its own.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Stream(_) => 3,
            _ => 1,
        }
    }
}

// Automatic conversion from serde_json::Error
impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}
