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

//! Traversal state: the current structural path through the document.
//!
//! [`PathTracker`] maintains a stack of frames that mirrors the container
//! nesting of the token stream. Object frames carry the member key currently
//! being read (empty until the key string arrives); array frames carry the
//! index of the current element. Popping a frame discards its position data,
//! so re-entry into a sibling container always begins fresh.
//!
//! Within an object, strings alternate between keys and values; the tracker
//! classifies an incoming string by whether the top object frame already has
//! its key.

use jex_core::{Frame, Path};

/// How an incoming string token should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringRole {
    /// The string is an object member key.
    Key,
    /// The string is a value at the current path.
    Value,
}

/// Frame stack driven by the structural tokens of the document.
#[derive(Debug, Default)]
pub struct PathTracker {
    stack: Vec<Frame>,
}

impl PathTracker {
    /// Create an empty tracker positioned at the document root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth in frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// True when the tracker is back at the document root.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty()
    }

    /// Enter an object: push an object frame with no key yet.
    pub fn enter_object(&mut self) {
        self.stack.push(Frame::key(""));
    }

    /// Enter an array: push an array frame positioned at element 0.
    pub fn enter_array(&mut self) {
        self.stack.push(Frame::index(0));
    }

    /// Leave the current container.
    ///
    /// The popped container was itself a value in its parent, so the parent
    /// position advances exactly as it does after a scalar value: an
    /// enclosing array moves to the next element, an enclosing object
    /// returns to the expecting-a-key state.
    pub fn leave(&mut self) {
        self.stack.pop();
        self.advance();
    }

    /// Classify an incoming string token.
    ///
    /// Inside an object whose current key is empty the string is a key;
    /// everywhere else (key already set, inside an array, or at the root) it
    /// is a value.
    pub fn classify(&self) -> StringRole {
        match self.stack.last() {
            Some(Frame::Key(key)) if key.is_empty() => StringRole::Key,
            _ => StringRole::Value,
        }
    }

    /// Record an object member key.
    pub fn bind_key(&mut self, key: String) {
        if let Some(Frame::Key(slot)) = self.stack.last_mut() {
            *slot = key;
        }
    }

    /// Advance past a consumed value at the current position.
    pub fn consume_value(&mut self) {
        self.advance();
    }

    /// Snapshot the current concrete path.
    pub fn current_path(&self) -> Path {
        Path::from(self.stack.clone())
    }

    fn advance(&mut self) {
        match self.stack.last_mut() {
            Some(Frame::Index(Some(index))) => *index += 1,
            Some(Frame::Key(key)) => key.clear(),
            _ => {}
        }
    }
}
