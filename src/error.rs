// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for the anonymizer pipeline.
//!
//! Every failure in the core is one of three conditions:
//!
//! - [`Error::Parse`] - the upstream parser reported diagnostics; the
//!   pipeline refuses to rewrite a tree that came from a broken source.
//! - [`Error::UnmappedIdentifier`] - a rewrite pass met an identifier that
//!   the harvest pass never saw. The two passes run over the same tree with
//!   the same exclusion rules, so this is an invariant violation, not a
//!   user-recoverable condition.
//! - [`Error::UnsupportedConstruct`] - the code generator met a node it
//!   cannot render (parser error-recovery nodes). Guessing a spelling would
//!   silently change program meaning, so this aborts instead.
//!
//! No operation in the core retries: everything is pure and deterministic,
//! so the same input produces the same failure.

use crate::pipeline::Diagnostic;
use thiserror::Error;

/// Errors produced by the anonymizer core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The upstream parser reported one or more diagnostics.
    #[error("source failed to parse: {} diagnostic(s) reported", diagnostics.len())]
    Parse {
        /// The diagnostics reported by the parser, verbatim.
        diagnostics: Vec<Diagnostic>,
    },

    /// A rewrite pass encountered an identifier absent from its name table.
    #[error("identifier `{name}` was not harvested before rewriting")]
    UnmappedIdentifier {
        /// The canonical (qualifier-stripped, case-folded) spelling.
        name: String,
    },

    /// The code generator encountered a construct it cannot render.
    #[error("cannot render unsupported construct: {construct}")]
    UnsupportedConstruct {
        /// A description of the offending construct.
        construct: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
