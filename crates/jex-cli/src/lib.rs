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

//! JEX CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **extract**: stream records out of a JSON document (file or stdin)
//!   according to a schema file, one JSON object per line
//! - **check**: compile a schema file and display its entries, multi flags,
//!   and boundary depth without reading any input
//! - **completion**: generate shell completion scripts (bash, zsh, fish,
//!   powershell, elvish)
//!
//! # Schema files
//!
//! A schema file is a JSON object mapping destination keys to source path
//! patterns:
//!
//! ```json
//! {
//!     "id": ".[].ID",
//!     "name": ".[].NAME",
//!     "token": ".[].TOKENS[]"
//! }
//! ```
//!
//! # Exit codes
//!
//! - `0` - success
//! - `1` - input could not be opened, or the schema failed to load
//! - `2` - command-line usage error (reported by clap)
//! - `3` - streaming failure: incomplete record, collision, out-of-order
//!   input, or malformed JSON

pub mod cli;
pub mod commands;
pub mod error;
