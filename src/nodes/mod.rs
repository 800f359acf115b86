// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Syntax tree node definitions.
//!
//! The tree is a strict hierarchy of owned, typed nodes rooted at one
//! [`ScriptBlock`]. Every node owns its children exclusively; there is no
//! sharing and no cycle. Traversal passes either read the tree in place
//! (see [`crate::visitor::Visitor`]) or produce a brand-new tree (see
//! [`crate::visitor::Rewriter`]); originals are never mutated.
//!
//! # Extents
//!
//! Every node carries an [`Extent`], an opaque source-provenance span
//! produced by the upstream parser. The core copies extents verbatim into
//! replacement nodes and never synthesizes or edits one.

use serde::{Deserialize, Serialize};

mod expression;
mod statement;

pub use expression::*;
pub use statement::*;

/// A line/column/offset position inside the original source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
    /// Byte offset into the source.
    pub offset: usize,
}

impl Position {
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

/// Opaque source-provenance span attached to every node.
///
/// Extents are produced once by the upstream parser and copied unchanged
/// through every rewrite stage. `Extent::default()` exists for building
/// trees by hand in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extent {
    pub start: Position,
    pub end: Position,
}

impl Extent {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}
