// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Identifier anonymization: harvest, deterministic name allocation, and the
//! copy-rewriting passes that substitute the allocated names.

use std::collections::{BTreeMap, HashSet};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::nodes::{FunctionDefinition, ScriptBlock, StringConstantExpression, VariableExpression};
use crate::visitor::{IdentifierCollector, IdentifierKind, Rewriter};

/// The recognized scope qualifier prefix.
const GLOBAL_QUALIFIER: &str = "global:";

/// Variable spellings that always map to themselves, whatever the seed.
const VARIABLE_BLACKLIST: [&str; 4] = ["args", "true", "false", "ErrorActionPreference"];

/// Splits a recognized scope qualifier off an identifier. Returns the
/// qualifier with its original casing (or `""`) and the bare spelling, so
/// `format!("{qualifier}{renamed}")` reattaches it unchanged.
pub fn split_qualifier(name: &str) -> (&str, &str) {
    match name.get(..GLOBAL_QUALIFIER.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(GLOBAL_QUALIFIER) => {
            name.split_at(GLOBAL_QUALIFIER.len())
        }
        _ => ("", name),
    }
}

/// True for variable spellings that are language constants rather than
/// renameable identifiers.
pub fn is_constant_variable(name: &str) -> bool {
    let (_, bare) = split_qualifier(name);
    bare.eq_ignore_ascii_case("true")
        || bare.eq_ignore_ascii_case("false")
        || bare.eq_ignore_ascii_case("null")
}

/// Knobs for one anonymization run. The alphabet must be non-empty and
/// `min_length` at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnonymizeOptions {
    pub seed: u64,
    pub alphabet: String,
    pub min_length: usize,
}

impl Default for AnonymizeOptions {
    fn default() -> Self {
        AnonymizeOptions {
            seed: 0,
            alphabet: "abcdefghijklmnopqrstuvwxyz".to_string(),
            min_length: 1,
        }
    }
}

/// Injective mapping from case-insensitive canonical spelling to assigned
/// replacement spelling. Built once per run, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameTable {
    entries: BTreeMap<String, String>,
}

impl NameTable {
    /// Allocates a replacement for every harvested identifier.
    ///
    /// Candidates are drawn one symbol at a time from the alphabet, starting
    /// at `min_length` symbols and growing by one per level. A candidate
    /// already issued at the current level is redrawn; the level advances
    /// once the count issued at it reaches `alphabet.len() * level`. The
    /// threshold is deliberately a count comparison, not the combinatorial
    /// capacity of the level, so lengths grow earlier than strictly needed.
    /// Per-level spellings are distinct and spellings at different levels
    /// have different lengths, so the whole table is injective.
    ///
    /// The harvested sequence is sorted before the seeded shuffle so the
    /// mapping depends only on `(identifier set, kind, options)`.
    pub fn build(identifiers: &[String], kind: IdentifierKind, options: &AnonymizeOptions) -> Self {
        let mut pool: Vec<&str> = identifiers.iter().map(String::as_str).collect();
        pool.sort_unstable();
        let mut rng = StdRng::seed_from_u64(options.seed);
        pool.shuffle(&mut rng);

        let alphabet: Vec<char> = options.alphabet.chars().collect();
        let mut entries = BTreeMap::new();
        let mut level = 0usize;
        let mut used: HashSet<String> = HashSet::new();

        for name in pool {
            let canon = name.to_ascii_lowercase();
            if entries.contains_key(&canon) {
                continue;
            }
            let mut candidate = String::new();
            loop {
                candidate.clear();
                for _ in 0..options.min_length + level {
                    candidate.push(alphabet[rng.random_range(0..alphabet.len())]);
                }
                if !used.contains(&candidate) {
                    break;
                }
            }
            used.insert(candidate.clone());
            entries.insert(canon, candidate);

            // No effect at level 0, where the threshold is 0.
            if used.len() >= alphabet.len() * level {
                level += 1;
                used.clear();
            }
        }

        if kind == IdentifierKind::Variable {
            for name in VARIABLE_BLACKLIST {
                entries.insert(name.to_ascii_lowercase(), name.to_string());
            }
        }

        NameTable { entries }
    }

    /// Looks up the replacement for a bare (unqualified) spelling.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn reattach(qualifier: &str, renamed: &str) -> String {
    let mut name = String::with_capacity(qualifier.len() + renamed.len());
    name.push_str(qualifier);
    name.push_str(renamed);
    name
}

/// Substitutes variable references from a [`NameTable`]. A reference that
/// was not harvested is an invariant violation, not a recoverable miss.
struct VariableRenamer<'a> {
    table: &'a NameTable,
}

impl Rewriter for VariableRenamer<'_> {
    fn rewrite_variable_expression(
        &mut self,
        node: &VariableExpression,
    ) -> Result<VariableExpression> {
        if is_constant_variable(&node.name) {
            return Ok(node.clone());
        }
        let (qualifier, bare) = split_qualifier(&node.name);
        let renamed = self
            .table
            .lookup(bare)
            .ok_or_else(|| Error::UnmappedIdentifier {
                name: bare.to_string(),
            })?;
        Ok(VariableExpression {
            extent: node.extent,
            name: reattach(qualifier, renamed),
            splatted: node.splatted,
        })
    }
}

/// Substitutes function-definition names, plus any string constant whose
/// value matches a renamed function - that is how call sites are reached,
/// since command names parse as bare-word string constants.
struct FunctionRenamer<'a> {
    table: &'a NameTable,
}

impl Rewriter for FunctionRenamer<'_> {
    fn rewrite_function_definition(
        &mut self,
        node: &FunctionDefinition,
    ) -> Result<FunctionDefinition> {
        let (qualifier, bare) = split_qualifier(&node.name);
        let renamed = self
            .table
            .lookup(bare)
            .ok_or_else(|| Error::UnmappedIdentifier {
                name: bare.to_string(),
            })?;
        let parameters = node
            .parameters
            .iter()
            .map(|parameter| self.rewrite_parameter(parameter))
            .collect::<Result<Vec<_>>>()?;
        Ok(FunctionDefinition {
            extent: node.extent,
            is_filter: node.is_filter,
            is_workflow: node.is_workflow,
            name: reattach(qualifier, renamed),
            parameters,
            body: Box::new(self.rewrite_script_block(&node.body)?),
        })
    }

    fn rewrite_string_constant_expression(
        &mut self,
        node: &StringConstantExpression,
    ) -> Result<StringConstantExpression> {
        let (qualifier, bare) = split_qualifier(&node.value);
        match self.table.lookup(bare) {
            Some(renamed) => Ok(StringConstantExpression {
                extent: node.extent,
                value: reattach(qualifier, renamed),
                kind: node.kind,
            }),
            None => Ok(node.clone()),
        }
    }
}

/// Runs one full anonymization pass over `tree`: harvest every identifier
/// of `kind`, allocate replacements, and rewrite into a new tree. The input
/// tree is untouched.
pub fn anonymize(
    tree: &ScriptBlock,
    kind: IdentifierKind,
    options: &AnonymizeOptions,
) -> Result<ScriptBlock> {
    let identifiers = IdentifierCollector::new(kind).harvest(tree);
    let table = NameTable::build(&identifiers, kind, options);
    debug!(?kind, identifiers = identifiers.len(), "name table built");
    match kind {
        IdentifierKind::Variable => VariableRenamer { table: &table }.rewrite_script_block(tree),
        IdentifierKind::FunctionName => {
            FunctionRenamer { table: &table }.rewrite_script_block(tree)
        }
    }
}
