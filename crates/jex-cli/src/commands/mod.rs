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

//! CLI command implementations

mod check;
mod completion;
mod extract;

pub use check::check;
pub use completion::generate_completion_for_command;
pub use extract::extract;

use crate::error::CliError;
use jex_core::Schema;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

/// Open the input document: a file path, or `-` for standard input.
pub(crate) fn open_input(path: &str) -> Result<Box<dyn Read>, CliError> {
    if path == "-" {
        return Ok(Box::new(io::stdin()));
    }
    let file = File::open(path).map_err(|e| CliError::io_error(path, e))?;
    Ok(Box::new(file))
}

/// Open the output sink: a file path, or stdout when `None`.
pub(crate) fn open_output(path: Option<&str>) -> Result<Box<dyn Write>, CliError> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| CliError::io_error(path, e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Load and compile a schema file.
pub(crate) fn load_schema(path: &str) -> Result<Schema, CliError> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))?;
    parse_schema(&content)
}

/// Compile schema text: a JSON object of destination-key to source-path
/// pairs.
pub(crate) fn parse_schema(content: &str) -> Result<Schema, CliError> {
    let pairs: BTreeMap<String, String> = serde_json::from_str(content)
        .map_err(|e| CliError::SchemaFormat(e.to_string()))?;
    Ok(Schema::compile(pairs)?)
}
