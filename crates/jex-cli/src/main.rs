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

//! JEX Command Line Interface

use clap::Parser;
use jex_cli::cli::Commands;
use std::process::ExitCode;

/// JEX - Streaming JSON projection
///
/// Streams flat records out of arbitrarily large JSON documents by applying
/// a schema of path patterns, without ever materializing the document.
///
/// # Examples
///
/// ```bash
/// # Project a file into records on stdout
/// jex extract data.json --schema schema.json
///
/// # Read the document from stdin
/// cat data.json | jex extract - --schema schema.json
///
/// # Inspect a schema without reading any input
/// jex check schema.json
/// ```
#[derive(Parser)]
#[command(name = "jex")]
#[command(author, version, about = "JEX - Streaming JSON projection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
