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

//! Streaming JSON Projection Engine
//!
//! This crate reads a single JSON document of unbounded size as a token
//! stream and emits flat records assembled according to a
//! [`Schema`](jex_core::Schema) of path patterns. The canonical use case is
//! a top-level array of objects, each containing an inner array too large to
//! materialize: the engine cross-joins the outer scalar fields with every
//! inner element, yielding one record per element without ever holding the
//! inner array in memory.
//!
//! # Features
//!
//! - **Memory Bounded**: usage grows with nesting depth and schema size,
//!   never with document size
//! - **Iterator-based**: standard Rust iterator interface over records
//! - **Pull-driven**: the caller's thread does all the work; dropping the
//!   stream cancels it
//! - **Loud Failure**: incomplete records, collisions, and out-of-order
//!   input are surfaced as errors instead of emitting corrupt records
//!
//! # Example
//!
//! ```rust
//! use jex_core::Schema;
//! use jex_stream::RecordStream;
//! use std::io::Cursor;
//!
//! let input = r#"[
//!     {"ID": "1", "NAME": "a", "TOKENS": ["x", "y"]}
//! ]"#;
//!
//! let schema = Schema::compile(vec![
//!     ("id", ".[].ID"),
//!     ("name", ".[].NAME"),
//!     ("token", ".[].TOKENS[]"),
//! ]).unwrap();
//!
//! let records: Vec<_> = RecordStream::new(Cursor::new(input), schema)
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0]["token"].as_str(), Some("x"));
//! assert_eq!(records[1]["token"].as_str(), Some("y"));
//! assert_eq!(records[1]["id"].as_str(), Some("1"));
//! ```

mod error;
mod projector;
mod scanner;
mod token;
mod tracker;

pub use error::{StreamError, StreamResult};
pub use projector::RecordStream;
pub use scanner::{JsonScanner, ScannerConfig};
pub use token::Token;
pub use tracker::{PathTracker, StringRole};
