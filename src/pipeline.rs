// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The full obfuscation pipeline: gate on parse diagnostics, rename
//! variables, rename functions, render.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::anonymize::{anonymize, AnonymizeOptions};
use crate::codegen::render;
use crate::error::{Error, Result};
use crate::nodes::{Extent, ScriptBlock};
use crate::visitor::IdentifierKind;

/// One problem reported by the upstream parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
    pub extent: Option<Extent>,
}

/// What the upstream parser hands over: a tree when it could build one, and
/// whatever diagnostics it reported along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub tree: Option<ScriptBlock>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Rewrites a parsed script with anonymized identifiers and returns the
/// rendered source.
///
/// Any reported diagnostic is fatal: a tree recovered from bad source must
/// not be rewritten. Variables are renamed first, then function names, each
/// pass producing a fresh tree. Output is byte-identical across runs for
/// the same outcome and options.
pub fn obfuscate(outcome: &ParseOutcome, options: &AnonymizeOptions) -> Result<String> {
    if !outcome.diagnostics.is_empty() {
        return Err(Error::Parse {
            diagnostics: outcome.diagnostics.clone(),
        });
    }
    let tree = outcome.tree.as_ref().ok_or_else(|| Error::Parse {
        diagnostics: Vec::new(),
    })?;

    let tree = anonymize(tree, IdentifierKind::Variable, options)?;
    let tree = anonymize(&tree, IdentifierKind::FunctionName, options)?;
    let source = render(&tree)?;
    debug!(bytes = source.len(), "rendered anonymized source");
    Ok(source)
}
