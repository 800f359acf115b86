// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Identifier harvesting - the first pass of renaming.

use std::collections::HashSet;

use crate::anonymize::{is_constant_variable, split_qualifier};
use crate::nodes::{FunctionDefinition, ScriptBlock, VariableExpression};
use crate::visitor::dispatch::walk_script_block;
use crate::visitor::{VisitResult, Visitor};

/// Which identifier namespace a pass operates on. Variables and function
/// names never collide with one another, so each kind gets its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    Variable,
    FunctionName,
}

/// Collects every distinct identifier of one kind reachable in a tree,
/// case preserved as first seen.
///
/// Variable references to language constants (`$true`, `$false`, `$null`)
/// are not identifiers and are skipped. Function names are recorded with
/// any scope qualifier stripped, so `global:Install` and a bare call to
/// `Install` harvest as the same name.
#[derive(Debug)]
pub struct IdentifierCollector {
    kind: IdentifierKind,
    seen: HashSet<String>,
    names: Vec<String>,
}

impl IdentifierCollector {
    pub fn new(kind: IdentifierKind) -> Self {
        IdentifierCollector {
            kind,
            seen: HashSet::new(),
            names: Vec::new(),
        }
    }

    /// Walks `tree` and returns the harvested names in first-seen order.
    pub fn harvest(mut self, tree: &ScriptBlock) -> Vec<String> {
        walk_script_block(&mut self, tree);
        self.names
    }

    fn record(&mut self, name: &str) {
        if self.seen.insert(name.to_ascii_lowercase()) {
            self.names.push(name.to_string());
        }
    }
}

impl Visitor for IdentifierCollector {
    fn visit_variable_expression(&mut self, node: &VariableExpression) -> VisitResult {
        if self.kind == IdentifierKind::Variable && !is_constant_variable(&node.name) {
            let (_, bare) = split_qualifier(&node.name);
            self.record(bare);
        }
        VisitResult::Continue
    }

    fn visit_function_definition(&mut self, node: &FunctionDefinition) -> VisitResult {
        if self.kind == IdentifierKind::FunctionName {
            let (_, bare) = split_qualifier(&node.name);
            self.record(bare);
        }
        VisitResult::Continue
    }
}
