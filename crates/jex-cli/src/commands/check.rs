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

//! Check command - schema file compilation and display

use super::load_schema;
use crate::error::CliError;
use colored::Colorize;

/// Compile a schema file and print its compiled form.
///
/// # Arguments
///
/// * `schema` - Path to the schema file
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, is not a JSON object of
/// string pairs, or contains an invalid pattern or duplicate destination
/// key.
///
/// # Output
///
/// Prints a summary to stdout including:
/// - Compilation status (✓ or ✗)
/// - Each entry's destination key, source pattern, and multi flag
/// - The computed record boundary depth
pub fn check(schema: &str) -> Result<(), CliError> {
    match load_schema(schema) {
        Ok(compiled) => {
            println!("{} {}", "✓".green().bold(), schema);
            println!("  Entries: {}", compiled.len());
            println!("  Boundary depth: {}", compiled.boundary_depth());
            for entry in compiled.entries() {
                if entry.is_multi() {
                    println!(
                        "  {}: {} {}",
                        entry.dest().bold(),
                        entry.pattern(),
                        "(multi)".cyan()
                    );
                } else {
                    println!("  {}: {}", entry.dest().bold(), entry.pattern());
                }
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), schema);
            Err(e)
        }
    }
}
