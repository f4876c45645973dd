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

//! Structural paths: the address of a position inside a JSON document.
//!
//! A [`Path`] is an ordered sequence of [`Frame`]s, one per container level.
//! Paths come in two flavors that share the same representation:
//!
//! - **Concrete paths** are produced by traversal; every array frame carries
//!   a bound element index.
//! - **Pattern paths** are parsed from schema source strings; array frames
//!   may be wildcards (`[]`), matching any index.
//!
//! The textual form uses `.` as the object-step delimiter and `[i]`/`[]` for
//! array steps; the leading `.` denotes the document root. Parsing and
//! rendering are mutual inverses on every path this module produces.
//!
//! # Examples
//!
//! ```rust
//! use jex_core::Path;
//!
//! let pattern = Path::parse(".[].TOKENS[]").unwrap();
//! assert!(pattern.is_multi());
//! assert_eq!(pattern.to_string(), ".[].TOKENS[]");
//!
//! let concrete = Path::parse(".[2].TOKENS[15]").unwrap();
//! assert!(concrete.matches(&pattern));
//! ```

use crate::error::{CoreError, CoreResult};
use std::fmt;

/// The two container kinds a path frame can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameTag {
    /// An object member step.
    Object,
    /// An array element step.
    Array,
}

/// One step of a structural path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Object member step. During traversal the key is empty while the
    /// member key has not been seen yet.
    Key(String),
    /// Array element step. `None` is the wildcard form and only occurs in
    /// pattern paths; concrete paths always carry a bound index.
    Index(Option<usize>),
}

impl Frame {
    /// Object step with the given member key.
    #[inline]
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }

    /// Array step bound to a concrete element index.
    #[inline]
    pub fn index(index: usize) -> Self {
        Self::Index(Some(index))
    }

    /// Wildcard array step, matching any element index.
    #[inline]
    pub fn wildcard() -> Self {
        Self::Index(None)
    }

    /// The container kind this frame refers to.
    #[inline]
    pub fn tag(&self) -> FrameTag {
        match self {
            Self::Key(_) => FrameTag::Object,
            Self::Index(_) => FrameTag::Array,
        }
    }
}

/// An ordered sequence of frames addressing a position in a document.
///
/// See the [module documentation](self) for the concrete/pattern distinction
/// and the textual form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path(Vec<Frame>);

impl Path {
    /// The empty path (document root).
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse a pattern string into a path.
    ///
    /// The string is split on `.`; the first component must be empty (the
    /// leading dot). Each subsequent component contributes an object step
    /// for its key prefix (if any) and an array step for a trailing
    /// `[digits]` or `[]` group.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPattern`] for a missing leading dot, an
    /// empty interior component, a trailing bracket group with non-numeric
    /// content, or an index too large to represent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jex_core::{Frame, Path};
    ///
    /// let path = Path::parse(".[0].NAME").unwrap();
    /// assert_eq!(path.frames(), &[Frame::index(0), Frame::key("NAME")]);
    ///
    /// assert!(Path::parse("NAME").is_err());
    /// assert!(Path::parse(".A..B").is_err());
    /// assert!(Path::parse(".A[x]").is_err());
    /// ```
    pub fn parse(pattern: &str) -> CoreResult<Self> {
        let mut parts = pattern.split('.');
        if parts.next() != Some("") {
            return Err(CoreError::pattern(pattern, "must start with '.'"));
        }

        let mut frames = Vec::new();
        for part in parts {
            if part.is_empty() {
                return Err(CoreError::pattern(pattern, "empty path component"));
            }

            // Peel a trailing "[digits]" / "[]" group off the component; the
            // rest (if any) is an object key. A component without such a
            // group is a plain object key.
            let mut key = part;
            let mut bracket = None;
            if let Some(stripped) = part.strip_suffix(']') {
                if let Some(open) = stripped.rfind('[') {
                    let digits = &stripped[open + 1..];
                    if !digits.bytes().all(|b| b.is_ascii_digit()) {
                        return Err(CoreError::pattern(
                            pattern,
                            format!("non-numeric array index '{digits}'"),
                        ));
                    }
                    key = &part[..open];
                    bracket = Some(digits);
                }
            }

            if !key.is_empty() {
                frames.push(Frame::Key(key.to_string()));
            }
            if let Some(digits) = bracket {
                let index = if digits.is_empty() {
                    None
                } else {
                    Some(digits.parse::<usize>().map_err(|_| {
                        CoreError::pattern(pattern, format!("array index '{digits}' out of range"))
                    })?)
                };
                frames.push(Frame::Index(index));
            }
        }

        if frames.is_empty() {
            return Err(CoreError::pattern(pattern, "expected at least one step"));
        }
        Ok(Self(frames))
    }

    /// The frames of this path, outermost first.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.0
    }

    /// Number of frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty (root) path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True iff the final step is a wildcard array step.
    ///
    /// A schema entry with a multi pattern binds once per matching element.
    #[inline]
    pub fn is_multi(&self) -> bool {
        matches!(self.0.last(), Some(Frame::Index(None)))
    }

    /// Match this concrete path against a pattern path.
    ///
    /// Frame counts must be equal and every frame must agree on its tag;
    /// object keys compare literally, and a bound array index matches a
    /// pattern frame that is either the wildcard or the same index. The
    /// empty path never matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jex_core::Path;
    ///
    /// let pattern = Path::parse(".[].ID").unwrap();
    /// assert!(Path::parse(".[7].ID").unwrap().matches(&pattern));
    /// assert!(!Path::parse(".[7].NAME").unwrap().matches(&pattern));
    ///
    /// let first = Path::parse(".[0].ID").unwrap();
    /// assert!(Path::parse(".[0].ID").unwrap().matches(&first));
    /// assert!(!Path::parse(".[1].ID").unwrap().matches(&first));
    /// ```
    pub fn matches(&self, pattern: &Path) -> bool {
        if self.0.is_empty() || self.0.len() != pattern.0.len() {
            return false;
        }
        self.0.iter().zip(&pattern.0).all(|(ours, theirs)| {
            match (ours, theirs) {
                (Frame::Key(a), Frame::Key(b)) => a == b,
                (Frame::Index(_), Frame::Index(None)) => true,
                (Frame::Index(a), Frame::Index(b)) => a == b,
                _ => false,
            }
        })
    }
}

impl From<Vec<Frame>> for Path {
    fn from(frames: Vec<Frame>) -> Self {
        Self(frames)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(".");
        }
        // An array step needs its own '.' separator unless it directly
        // follows an object step within the same component.
        let mut after_key = false;
        for frame in &self.0 {
            match frame {
                Frame::Key(key) => {
                    write!(f, ".{key}")?;
                    after_key = true;
                }
                Frame::Index(index) => {
                    if !after_key {
                        f.write_str(".")?;
                    }
                    match index {
                        Some(i) => write!(f, "[{i}]")?,
                        None => f.write_str("[]")?,
                    }
                    after_key = false;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Parse tests ====================

    #[test]
    fn test_parse_object_steps() {
        let path = Path::parse(".A.B").unwrap();
        assert_eq!(path.frames(), &[Frame::key("A"), Frame::key("B")]);
    }

    #[test]
    fn test_parse_wildcard_array() {
        let path = Path::parse(".[]").unwrap();
        assert_eq!(path.frames(), &[Frame::wildcard()]);
    }

    #[test]
    fn test_parse_bound_array() {
        let path = Path::parse(".[42]").unwrap();
        assert_eq!(path.frames(), &[Frame::index(42)]);
    }

    #[test]
    fn test_parse_key_with_array_suffix() {
        let path = Path::parse(".TOKENS[3]").unwrap();
        assert_eq!(path.frames(), &[Frame::key("TOKENS"), Frame::index(3)]);
    }

    #[test]
    fn test_parse_readme_shape() {
        let path = Path::parse(".[].TOKENS[]").unwrap();
        assert_eq!(
            path.frames(),
            &[Frame::wildcard(), Frame::key("TOKENS"), Frame::wildcard()]
        );
    }

    #[test]
    fn test_parse_missing_leading_dot() {
        assert!(Path::parse("ID").is_err());
        assert!(Path::parse("[0]").is_err());
    }

    #[test]
    fn test_parse_empty_string() {
        assert!(Path::parse("").is_err());
    }

    #[test]
    fn test_parse_lone_dot() {
        assert!(Path::parse(".").is_err());
    }

    #[test]
    fn test_parse_empty_component() {
        assert!(Path::parse(".A..B").is_err());
        assert!(Path::parse(".A.").is_err());
    }

    #[test]
    fn test_parse_non_numeric_index() {
        assert!(Path::parse(".A[x]").is_err());
        assert!(Path::parse(".A[-1]").is_err());
    }

    #[test]
    fn test_parse_index_overflow() {
        assert!(Path::parse(".A[99999999999999999999999]").is_err());
    }

    #[test]
    fn test_parse_bracket_not_at_end_is_part_of_key() {
        // Only a trailing bracket group is an array step; an interior one
        // stays in the key, mirroring the suffix-anchored grammar.
        let path = Path::parse(".A[1]B[2]").unwrap();
        assert_eq!(path.frames(), &[Frame::key("A[1]B"), Frame::index(2)]);
    }

    // ==================== Render tests ====================

    #[test]
    fn test_render_empty() {
        assert_eq!(Path::new().to_string(), ".");
    }

    #[test]
    fn test_render_mixed() {
        let path = Path::from(vec![Frame::index(0), Frame::key("ID")]);
        assert_eq!(path.to_string(), ".[0].ID");
    }

    #[test]
    fn test_render_adjacent_arrays() {
        let path = Path::from(vec![Frame::index(1), Frame::index(2)]);
        assert_eq!(path.to_string(), ".[1].[2]");
    }

    #[test]
    fn test_round_trip() {
        for pattern in [
            ".[].ID",
            ".[0].NAME",
            ".[].TOKENS[]",
            ".A.B.C",
            ".A[0].B[]",
            ".[3]",
            ".[].[]",
        ] {
            let parsed = Path::parse(pattern).unwrap();
            let rendered = parsed.to_string();
            assert_eq!(Path::parse(&rendered).unwrap(), parsed, "via {rendered}");
        }
    }

    // ==================== Match tests ====================

    #[test]
    fn test_match_wildcard_any_index() {
        let pattern = Path::parse(".[].ID").unwrap();
        for i in [0, 1, 999] {
            let concrete = Path::from(vec![Frame::index(i), Frame::key("ID")]);
            assert!(concrete.matches(&pattern));
        }
    }

    #[test]
    fn test_match_bound_index_exact() {
        let pattern = Path::parse(".[1].ID").unwrap();
        assert!(Path::parse(".[1].ID").unwrap().matches(&pattern));
        assert!(!Path::parse(".[2].ID").unwrap().matches(&pattern));
    }

    #[test]
    fn test_match_length_mismatch() {
        let pattern = Path::parse(".[].A.B").unwrap();
        assert!(!Path::parse(".[0].A").unwrap().matches(&pattern));
    }

    #[test]
    fn test_match_tag_mismatch() {
        let pattern = Path::parse(".[].ID").unwrap();
        let concrete = Path::from(vec![Frame::key("X"), Frame::key("ID")]);
        assert!(!concrete.matches(&pattern));
    }

    #[test]
    fn test_match_empty_never_matches() {
        let pattern = Path::parse(".[]").unwrap();
        assert!(!Path::new().matches(&pattern));
    }

    #[test]
    fn test_match_key_mismatch() {
        let pattern = Path::parse(".[].ID").unwrap();
        assert!(!Path::parse(".[0].NAME").unwrap().matches(&pattern));
    }

    // ==================== Multi detection ====================

    #[test]
    fn test_is_multi() {
        assert!(Path::parse(".[].TOKENS[]").unwrap().is_multi());
        assert!(Path::parse(".[]").unwrap().is_multi());
        assert!(!Path::parse(".[].TOKENS[0]").unwrap().is_multi());
        assert!(!Path::parse(".[].ID").unwrap().is_multi());
    }

    // ==================== Frame tests ====================

    #[test]
    fn test_frame_tags() {
        assert_eq!(Frame::key("A").tag(), FrameTag::Object);
        assert_eq!(Frame::index(0).tag(), FrameTag::Array);
        assert_eq!(Frame::wildcard().tag(), FrameTag::Array);
    }
}
