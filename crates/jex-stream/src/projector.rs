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

//! The record projector: assembles and emits records from the token stream.
//!
//! [`RecordStream`] owns the scanner and the traversal tracker. Each call to
//! [`next_record`](RecordStream::next_record) pulls tokens until a record
//! completes or the input ends. A record completes when every schema entry
//! has been bound once; for schemas with a multi entry, subsequent bindings
//! of the multi key within the same record scope re-complete the record, so
//! the outer fields are cross-joined with every matching inner element.
//!
//! # Record scopes
//!
//! The schema's boundary depth (frame count of its shortest pattern) defines
//! the scope of one record. Whenever traversal rises above it, the record in
//! progress must be either empty or complete: a partial record at the
//! boundary is an [`IncompleteRecord`](crate::StreamError::IncompleteRecord)
//! error, a complete one with overwritten multi bindings is a
//! [`SkippedElements`](crate::StreamError::SkippedElements) error, and a
//! complete clean one resets the state for the next scope. Completion cannot
//! be decided earlier: while inside the scope there is no local way to tell
//! "more multi elements coming" from "done".

use crate::error::{StreamError, StreamResult};
use crate::scanner::{JsonScanner, ScannerConfig};
use crate::token::Token;
use crate::tracker::{PathTracker, StringRole};
use jex_core::{Path, Record, Scalar, Schema};
use std::io::Read;

/// The record being assembled, with its bookkeeping.
#[derive(Debug, Default)]
struct RecordState {
    /// Destination key to bound value.
    record: Record,
    /// Source patterns bound so far, in arrival order. Duplicate multi
    /// bindings do not count again: fullness means every entry contributed.
    seen: Vec<Path>,
    /// Concrete paths whose binding overwrote an unconsumed multi value.
    skipped: Vec<Path>,
    /// Set once `seen` covers the whole schema; sticky until reset.
    full: bool,
}

impl RecordState {
    fn reset(&mut self) {
        self.record.clear();
        self.seen.clear();
        self.skipped.clear();
        self.full = false;
    }
}

/// Pull-based stream of projected records.
///
/// Implements `Iterator<Item = StreamResult<Record>>`; records are yielded
/// in the order their completing value appears in the input. All errors are
/// fatal: after one, the stream yields nothing further.
///
/// # Examples
///
/// ```rust
/// use jex_core::Schema;
/// use jex_stream::RecordStream;
/// use std::io::Cursor;
///
/// let schema = Schema::compile(vec![("id", ".[].ID")]).unwrap();
/// let input = r#"[{"ID": "1"}, {"ID": "2"}]"#;
///
/// let mut stream = RecordStream::new(Cursor::new(input), schema);
/// let first = stream.next_record().unwrap().unwrap();
/// assert_eq!(first["id"].as_str(), Some("1"));
/// let second = stream.next_record().unwrap().unwrap();
/// assert_eq!(second["id"].as_str(), Some("2"));
/// assert!(stream.next_record().unwrap().is_none());
/// ```
pub struct RecordStream<R: Read> {
    scanner: JsonScanner<R>,
    tracker: PathTracker,
    schema: Schema,
    state: RecordState,
    finished: bool,
}

impl<R: Read> RecordStream<R> {
    /// Create a stream with default scanner configuration.
    pub fn new(reader: R, schema: Schema) -> Self {
        Self::with_config(reader, schema, ScannerConfig::default())
    }

    /// Create a stream with a specific scanner configuration.
    pub fn with_config(reader: R, schema: Schema, config: ScannerConfig) -> Self {
        Self {
            scanner: JsonScanner::with_config(reader, config),
            tracker: PathTracker::new(),
            schema,
            state: RecordState::default(),
            finished: false,
        }
    }

    /// The schema this stream projects with.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Advance the token stream until a record completes.
    ///
    /// Returns `Ok(Some(record))` for each completed record, `Ok(None)` at
    /// end of input, and `Err` for transport or record-protocol failures
    /// (see [`StreamError`]). Errors are terminal.
    pub fn next_record(&mut self) -> StreamResult<Option<Record>> {
        if self.finished {
            return Ok(None);
        }
        let result = self.advance();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result
    }

    fn advance(&mut self) -> StreamResult<Option<Record>> {
        loop {
            let token = match self.scanner.next_token()? {
                Some(token) => token,
                None => return self.finish(),
            };
            match token {
                Token::ObjectStart => self.tracker.enter_object(),
                Token::ArrayStart => self.tracker.enter_array(),
                Token::ObjectEnd | Token::ArrayEnd => {
                    self.tracker.leave();
                    // Depth only decreases here, so this is the one place a
                    // record boundary can be crossed.
                    self.check_boundary()?;
                }
                Token::String(s) => match self.tracker.classify() {
                    StringRole::Key => self.tracker.bind_key(s),
                    StringRole::Value => {
                        let emitted = self.bind_value(s)?;
                        self.tracker.consume_value();
                        if emitted.is_some() {
                            return Ok(emitted);
                        }
                    }
                },
                // Non-string scalars are never projected, but they are
                // still values: positions advance past them.
                Token::Number(_) | Token::Bool(_) | Token::Null => {
                    self.tracker.consume_value();
                }
            }
        }
    }

    /// Feed one string value to the assembler; returns a completed record
    /// if this binding completed (or re-completed) one.
    fn bind_value(&mut self, value: String) -> StreamResult<Option<Record>> {
        let path = self.tracker.current_path();
        let Some(entry) = self.schema.lookup(&path) else {
            return Ok(None);
        };

        let mut marked_skipped = false;
        if self.state.record.contains_key(entry.dest()) {
            if entry.is_multi() {
                // The same multi target bound twice before emission: the
                // first value was never consumed by a completed record.
                self.state.skipped.push(path.clone());
                marked_skipped = true;
            } else {
                return Err(StreamError::Collision {
                    key: entry.dest().to_string(),
                    path: path.to_string(),
                });
            }
        } else {
            self.state.seen.push(entry.pattern().clone());
        }

        self.state
            .record
            .insert(entry.dest().to_string(), Scalar::String(value));
        if self.state.seen.len() == self.schema.len() {
            self.state.full = true;
        }

        if self.state.full {
            if marked_skipped {
                // Subsumed by the completion this binding just caused.
                self.state.skipped.pop();
            }
            // Keep the state: further multi bindings in this scope will
            // produce more records.
            return Ok(Some(self.state.record.clone()));
        }
        Ok(None)
    }

    /// After leaving a container, decide whether the current record scope
    /// has ended, and if so whether the record in progress was legal.
    fn check_boundary(&mut self) -> StreamResult<()> {
        if self.tracker.depth() >= self.schema.boundary_depth() {
            return Ok(());
        }
        if self.state.record.is_empty() {
            return Ok(());
        }
        if !self.state.full {
            return Err(self.incomplete_error());
        }
        if !self.state.skipped.is_empty() {
            return Err(self.skipped_error());
        }
        // The full record was already emitted as its completing values
        // arrived; new bindings belong to the next scope.
        self.state.reset();
        Ok(())
    }

    /// End of input: a partial record or an unclosed container is an error.
    fn finish(&mut self) -> StreamResult<Option<Record>> {
        if !self.state.record.is_empty() {
            if !self.state.full {
                return Err(self.incomplete_error());
            }
            if !self.state.skipped.is_empty() {
                return Err(self.skipped_error());
            }
        }
        if !self.tracker.is_balanced() {
            return Err(StreamError::Truncated {
                line: self.scanner.line(),
            });
        }
        self.state.reset();
        Ok(None)
    }

    fn incomplete_error(&self) -> StreamError {
        StreamError::IncompleteRecord {
            path: self.tracker.current_path().to_string(),
            seen: self.state.seen.iter().map(Path::to_string).collect(),
        }
    }

    fn skipped_error(&self) -> StreamError {
        StreamError::SkippedElements {
            path: self.tracker.current_path().to_string(),
            skipped: self.state.skipped.iter().map(Path::to_string).collect(),
        }
    }
}

impl<R: Read> Iterator for RecordStream<R> {
    type Item = StreamResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
