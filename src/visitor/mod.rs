// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Tree traversal: read-only visitors, walk functions and copy-rewriting.

pub mod dispatch;
pub mod harvest;
pub mod rewrite;
mod traits;

pub use dispatch::*;
pub use harvest::{IdentifierCollector, IdentifierKind};
pub use rewrite::Rewriter;
pub use traits::{VisitResult, Visitor};
