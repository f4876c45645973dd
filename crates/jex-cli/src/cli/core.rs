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

//! Core projection commands.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Projection commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Stream records out of a JSON document
    ///
    /// Reads the document as a token stream and emits one JSON object per
    /// completed record to stdout (or a file). The document is never
    /// materialized: memory use depends only on nesting depth and schema
    /// size.
    Extract {
        /// Input JSON file, or '-' for standard input
        #[arg(value_name = "FILE")]
        file: String,

        /// Schema file: a JSON object of destination-key to source-path
        /// pairs
        #[arg(short, long, value_name = "FILE")]
        schema: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty print each emitted record
        #[arg(short, long)]
        pretty: bool,
    },

    /// Compile a schema file and display it
    ///
    /// Loads and compiles the schema, then prints each entry with its
    /// source pattern and multi flag, plus the computed record boundary
    /// depth. No input document is read.
    Check {
        /// Schema file to compile
        #[arg(value_name = "FILE")]
        schema: String,
    },
}

impl CoreCommands {
    /// Execute the projection command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Extract {
                file,
                schema,
                output,
                pretty,
            } => commands::extract(&file, &schema, output.as_deref(), pretty),
            CoreCommands::Check { schema } => commands::check(&schema),
        }
    }
}
