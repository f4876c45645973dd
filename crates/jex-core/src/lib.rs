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

//! Core data model for JEX projection.
//!
//! This crate provides the path grammar, the compiled schema index, and the
//! scalar/record value types used by the streaming projection engine. It
//! performs no I/O: everything here is a pure data structure that the
//! `jex-stream` driver feeds as it walks a JSON token stream.
//!
//! # Path grammar
//!
//! A source path addresses a position in a JSON document:
//!
//! ```text
//! .[].ID           any element of the top-level array, member "ID"
//! .[0].NAME        first element only, member "NAME"
//! .[].TOKENS[]     any element of the member array "TOKENS"
//! ```
//!
//! Object steps are written `.KEY`, array steps `[i]` (bound) or `[]`
//! (wildcard). A pattern whose final step is a wildcard array is a *multi*
//! pattern: it binds once per matching element, producing one output record
//! per element.
//!
//! # Example
//!
//! ```rust
//! use jex_core::{Path, Schema};
//!
//! let schema = Schema::compile(vec![
//!     ("id", ".[].ID"),
//!     ("token", ".[].TOKENS[]"),
//! ]).unwrap();
//!
//! assert_eq!(schema.len(), 2);
//! assert_eq!(schema.boundary_depth(), 2);
//!
//! let concrete = Path::parse(".[4].TOKENS[17]").unwrap();
//! let entry = schema.lookup(&concrete).unwrap();
//! assert_eq!(entry.dest(), "token");
//! assert!(entry.is_multi());
//! ```

mod error;
mod path;
mod schema;
mod value;

pub use error::{CoreError, CoreResult};
pub use path::{Frame, FrameTag, Path};
pub use schema::{Schema, SchemaEntry};
pub use value::{Record, Scalar};
