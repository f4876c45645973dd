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

//! Compiled projection schemas.
//!
//! A schema maps destination keys of the output record to source path
//! patterns in the input document. Compilation parses every pattern,
//! enforces destination-key uniqueness, tags multi entries, and computes the
//! *boundary depth*: the frame count of the shortest pattern, which is the
//! depth at which one output record's scope begins. The streaming driver
//! treats any traversal position shallower than the boundary depth as
//! outside the current record.
//!
//! # Examples
//!
//! ```rust
//! use jex_core::Schema;
//!
//! let schema = Schema::compile(vec![
//!     ("id", ".[].ID"),
//!     ("name", ".[].NAME"),
//!     ("token", ".[].TOKENS[]"),
//! ]).unwrap();
//!
//! // Shortest pattern (.[].ID) has two frames.
//! assert_eq!(schema.boundary_depth(), 2);
//! assert!(schema.entries().iter().any(|e| e.is_multi()));
//! ```

use crate::error::{CoreError, CoreResult};
use crate::path::Path;

/// One compiled schema entry: a source pattern bound to a destination key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pattern: Path,
    dest: String,
    multi: bool,
}

impl SchemaEntry {
    /// The source path pattern.
    #[inline]
    pub fn pattern(&self) -> &Path {
        &self.pattern
    }

    /// The destination key in the output record.
    #[inline]
    pub fn dest(&self) -> &str {
        &self.dest
    }

    /// True iff the pattern ends in a wildcard array step.
    ///
    /// A multi entry binds once per matching element and drives one output
    /// record per binding.
    #[inline]
    pub fn is_multi(&self) -> bool {
        self.multi
    }
}

/// A compiled set of schema entries.
///
/// Read-only after construction; see [`Schema::compile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    entries: Vec<SchemaEntry>,
    boundary: usize,
}

impl Schema {
    /// Compile `(destination, source-pattern)` pairs into a schema.
    ///
    /// Entry order is preserved and determines lookup priority (first match
    /// wins).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPattern`] if a source pattern does not
    /// parse, [`CoreError::DuplicateKey`] if a destination key repeats, and
    /// [`CoreError::EmptySchema`] for zero entries (an empty schema has no
    /// boundary depth and could never emit a record).
    pub fn compile<K, V, I>(pairs: I) -> CoreResult<Self>
    where
        K: Into<String>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut entries: Vec<SchemaEntry> = Vec::new();
        for (dest, src) in pairs {
            let dest = dest.into();
            if entries.iter().any(|e| e.dest == dest) {
                return Err(CoreError::DuplicateKey(dest));
            }
            let pattern = Path::parse(src.as_ref())?;
            let multi = pattern.is_multi();
            entries.push(SchemaEntry {
                pattern,
                dest,
                multi,
            });
        }
        if entries.is_empty() {
            return Err(CoreError::EmptySchema);
        }
        let boundary = entries
            .iter()
            .map(|e| e.pattern.len())
            .min()
            .unwrap_or_default();
        Ok(Self { entries, boundary })
    }

    /// The compiled entries, in lookup order.
    #[inline]
    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a compiled schema; present for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Frame count of the shortest pattern.
    ///
    /// Traversal positions shallower than this are outside every record
    /// scope; crossing below it is the record boundary signal.
    #[inline]
    pub fn boundary_depth(&self) -> usize {
        self.boundary
    }

    /// Find the first entry whose pattern matches the given concrete path.
    pub fn lookup(&self, path: &Path) -> Option<&SchemaEntry> {
        self.entries.iter().find(|e| path.matches(&e.pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schema {
        Schema::compile(vec![
            ("id", ".[].ID"),
            ("name", ".[].NAME"),
            ("token", ".[].TOKENS[]"),
        ])
        .unwrap()
    }

    // ==================== Compile tests ====================

    #[test]
    fn test_compile_basic() {
        let schema = sample();
        assert_eq!(schema.len(), 3);
        assert!(!schema.is_empty());
        assert_eq!(schema.entries()[0].dest(), "id");
    }

    #[test]
    fn test_compile_rejects_duplicate_dest() {
        let err = Schema::compile(vec![("id", ".[].ID"), ("id", ".[].NAME")]).unwrap_err();
        assert_eq!(err, CoreError::DuplicateKey("id".to_string()));
    }

    #[test]
    fn test_compile_rejects_empty() {
        let pairs: Vec<(&str, &str)> = Vec::new();
        assert_eq!(Schema::compile(pairs).unwrap_err(), CoreError::EmptySchema);
    }

    #[test]
    fn test_compile_rejects_bad_pattern() {
        let err = Schema::compile(vec![("id", "ID")]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPattern { .. }));
    }

    #[test]
    fn test_multi_flag() {
        let schema = sample();
        assert!(!schema.entries()[0].is_multi());
        assert!(schema.entries()[2].is_multi());
    }

    // ==================== Boundary depth ====================

    #[test]
    fn test_boundary_depth_is_min_frame_count() {
        // .[].ID and .[].NAME have 2 frames, .[].TOKENS[] has 3.
        assert_eq!(sample().boundary_depth(), 2);
    }

    #[test]
    fn test_boundary_depth_single_entry() {
        let schema = Schema::compile(vec![("v", ".[]")]).unwrap();
        assert_eq!(schema.boundary_depth(), 1);
    }

    // ==================== Lookup tests ====================

    #[test]
    fn test_lookup_matches_wildcard() {
        let schema = sample();
        let path = Path::parse(".[9].TOKENS[4]").unwrap();
        assert_eq!(schema.lookup(&path).unwrap().dest(), "token");
    }

    #[test]
    fn test_lookup_no_match() {
        let schema = sample();
        let path = Path::parse(".[0].OTHER").unwrap();
        assert!(schema.lookup(&path).is_none());
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let schema = Schema::compile(vec![("a", ".[].ID"), ("b", ".[0].ID")]).unwrap();
        let path = Path::parse(".[0].ID").unwrap();
        assert_eq!(schema.lookup(&path).unwrap().dest(), "a");
    }
}
