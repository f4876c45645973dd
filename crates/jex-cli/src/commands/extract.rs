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

//! Extract command - stream records out of a JSON document

use super::{load_schema, open_input, open_output};
use crate::error::CliError;
use jex_stream::RecordStream;
use std::io::Write;

/// Project a JSON document into flat records.
///
/// Opens the input (file or `-` for stdin), compiles the schema file, and
/// streams one JSON object per completed record to the output. Records
/// appear in the order their completing value appears in the input.
///
/// # Arguments
///
/// * `file` - Path to the input document, or `-` for standard input
/// * `schema` - Path to the schema file
/// * `output` - Optional output file path. If `None`, writes to stdout
/// * `pretty` - If `true`, pretty-prints each record
///
/// # Errors
///
/// Returns `Err` if:
/// - The input or schema file cannot be opened
/// - The schema does not compile
/// - The stream fails (malformed JSON, incomplete record, collision,
///   out-of-order input)
/// - Output writing fails
///
/// # Examples
///
/// ```no_run
/// use jex_cli::commands::extract;
///
/// # fn main() -> Result<(), jex_cli::error::CliError> {
/// // Records to stdout, one JSON object per line
/// extract("data.json", "schema.json", None, false)?;
///
/// // Pretty records into a file
/// extract("data.json", "schema.json", Some("records.jsonl"), true)?;
/// # Ok(())
/// # }
/// ```
pub fn extract(
    file: &str,
    schema: &str,
    output: Option<&str>,
    pretty: bool,
) -> Result<(), CliError> {
    let schema = load_schema(schema)?;
    let input = open_input(file)?;
    let mut writer = open_output(output)?;
    let sink_name = output.unwrap_or("<stdout>");

    for result in RecordStream::new(input, schema) {
        let record = result?;
        let line = if pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };
        writeln!(writer, "{line}").map_err(|e| CliError::io_error(sink_name, e))?;
    }
    writer.flush().map_err(|e| CliError::io_error(sink_name, e))?;
    Ok(())
}
