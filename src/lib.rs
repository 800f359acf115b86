// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! A PowerShell syntax-tree anonymizer and minifying code generator.
//!
//! This crate takes a parsed PowerShell script, rewrites every variable and
//! function identifier to a short, seeded, deterministic replacement, and
//! renders the result as minimal reparseable source.
//!
//! # Overview
//!
//! - **Node model**: typed, owned tree nodes in [`nodes`], rooted at a
//!   [`nodes::ScriptBlock`]. Extents from the original source are carried
//!   through every rewrite untouched.
//! - **Traversal**: the [`visitor`] module provides a read-only
//!   [`Visitor`] with `walk_*` dispatch functions, and a copy-producing
//!   [`Rewriter`] whose defaults rebuild every node structurally.
//! - **Anonymization**: [`anonymize()`] harvests identifiers of one
//!   [`IdentifierKind`], allocates replacements into a [`NameTable`], and
//!   rewrites a fresh tree.
//! - **Rendering**: [`render`] emits minified source via the [`Codegen`]
//!   trait; [`obfuscate`] chains both renaming passes and rendering behind
//!   a parse-diagnostic gate.
//!
//! # Quick Start
//!
//! ```
//! use poshmin::{AnonymizeOptions, IdentifierKind, NameTable};
//!
//! let options = AnonymizeOptions {
//!     seed: 42,
//!     alphabet: "ab".to_string(),
//!     min_length: 1,
//! };
//! let table = NameTable::build(&["Bar".to_string()], IdentifierKind::Variable, &options);
//!
//! // Lookup is case-insensitive; replacements come from the alphabet.
//! let renamed = table.lookup("bar").expect("allocated");
//! assert!(renamed.chars().all(|c| c == 'a' || c == 'b'));
//! ```
//!
//! # Determinism
//!
//! For a fixed `(tree, seed, alphabet, min_length)` the rewritten output is
//! byte-identical across runs: the allocator sorts harvested identifiers
//! before the seeded shuffle, so nothing depends on hash-set iteration
//! order.

pub mod anonymize;
pub mod codegen;
pub mod error;
pub mod nodes;
pub mod pipeline;
pub mod visitor;

pub use anonymize::{
    anonymize, is_constant_variable, split_qualifier, AnonymizeOptions, NameTable,
};
pub use codegen::{render, Codegen, CodegenState};
pub use error::{Error, Result};
pub use nodes::*;
pub use pipeline::{obfuscate, Diagnostic, ParseOutcome};
pub use visitor::{IdentifierCollector, IdentifierKind, Rewriter, VisitResult, Visitor};
