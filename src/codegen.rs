// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Source rendering.
//!
//! Emits the minimal text that reparses to the same tree: statements joined
//! with `;`, no insignificant whitespace, strings re-escaped with backtick
//! escapes. Here-strings are rendered as regular quoted strings since their
//! contents are escaped anyway.

use std::fmt;

use crate::error::{Error, Result};
use crate::nodes::{
    ArrayExpression, ArrayLiteral, AssignmentStatement, Attribute, AttributeBase,
    AttributedExpression, BinaryExpression, BlockStatement, BreakStatement, CatchClause, Command,
    CommandElement, CommandExpression, CommandParameter, ConstantExpression, ConstantValue,
    ContinueStatement, ConvertExpression, DataStatement, DoUntilStatement, DoWhileStatement,
    ErrorExpression, ErrorStatement, ExitStatement, ExpandableStringExpression, Expression,
    FileRedirection, ForEachStatement, ForStatement, FunctionDefinition, HashtableExpression,
    IfStatement, IndexExpression, InvocationOperator, InvokeMemberExpression, MemberExpression,
    MergingRedirection, NamedAttributeArgument, NamedBlock, ParamBlock, Parameter,
    ParenExpression, Pipeline, PipelineElement, Redirection, ReturnStatement, ScriptBlock,
    ScriptBlockExpression, Statement, StatementBlock, StringConstantExpression, StringKind,
    SubExpression, SwitchStatement, ThrowStatement, TrapStatement, TryStatement, TypeConstraint,
    TypeExpression, UnaryExpression, UsingExpression, VariableExpression, WhileStatement,
};

/// Accumulates emitted tokens during rendering.
#[derive(Debug, Default)]
pub struct CodegenState {
    tokens: String,
}

impl CodegenState {
    pub fn add_token(&mut self, token: &str) {
        self.tokens.push_str(token);
    }
}

impl fmt::Display for CodegenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens)
    }
}

/// Emits a node as source text. Fallible: parser error-recovery nodes have
/// no renderable form and abort the traversal.
pub trait Codegen {
    fn codegen(&self, state: &mut CodegenState) -> Result<()>;
}

/// Renders a whole tree to source text.
pub fn render(tree: &ScriptBlock) -> Result<String> {
    let mut state = CodegenState::default();
    tree.codegen(&mut state)?;
    Ok(state.to_string())
}

fn join<T: Codegen>(items: &[T], separator: &str, state: &mut CodegenState) -> Result<()> {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            state.add_token(separator);
        }
        item.codegen(state)?;
    }
    Ok(())
}

/// Backtick-escapes a string value for requoting. The backtick itself is
/// escaped first so later replacements never double up. Characters outside
/// ASCII are emitted as `$([char]0xXXXX)` subexpressions.
fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '`' => escaped.push_str("``"),
            '\'' => escaped.push_str("`'"),
            '\\' => escaped.push_str("`\\"),
            '"' => escaped.push_str("`\""),
            '\0' => escaped.push_str("`0"),
            '\u{07}' => escaped.push_str("`a"),
            '\u{08}' => escaped.push_str("`b"),
            '\u{0c}' => escaped.push_str("`f"),
            '\n' => escaped.push_str("`n"),
            '\r' => escaped.push_str("`r"),
            '\t' => escaped.push_str("`t"),
            '\u{0b}' => escaped.push_str("`v"),
            c if (c as u32) > 0x7f => {
                escaped.push_str(&format!("$([char]0x{:04x})", c as u32));
            }
            c => escaped.push(c),
        }
    }
    escaped
}

fn quoted_string(value: &str, kind: StringKind, state: &mut CodegenState) {
    let escaped = escape_string(value);
    match kind {
        StringKind::DoubleQuoted | StringKind::DoubleQuotedHereString => {
            state.add_token("\"");
            state.add_token(&escaped);
            state.add_token("\"");
        }
        StringKind::SingleQuoted | StringKind::SingleQuotedHereString => {
            state.add_token("'");
            state.add_token(&escaped);
            state.add_token("'");
        }
        StringKind::BareWord => state.add_token(&escaped),
    }
}

// ============================================================================
// Blocks
// ============================================================================

impl Codegen for ScriptBlock {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        let named_blocks = [
            &self.begin_block,
            &self.process_block,
            &self.end_block,
            &self.dynamic_param_block,
        ];
        if let Some(param_block) = &self.param_block {
            param_block.codegen(state)?;
            if named_blocks.iter().any(|block| block.is_some()) {
                state.add_token(";");
            }
        }
        for block in named_blocks.into_iter().flatten() {
            block.codegen(state)?;
        }
        Ok(())
    }
}

impl Codegen for NamedBlock {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        if self.unnamed {
            self.codegen_contents(state)
        } else {
            state.add_token(self.kind.keyword());
            state.add_token("{");
            self.codegen_contents(state)?;
            state.add_token("}");
            Ok(())
        }
    }
}

impl NamedBlock {
    fn codegen_contents(&self, state: &mut CodegenState) -> Result<()> {
        join(&self.traps, ";", state)?;
        if !self.traps.is_empty() && !self.statements.is_empty() {
            state.add_token(";");
        }
        join(&self.statements, ";", state)
    }
}

impl Codegen for ParamBlock {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        join(&self.attributes, "", state)?;
        state.add_token("param(");
        join(&self.parameters, ",", state)?;
        state.add_token(")");
        Ok(())
    }
}

impl Codegen for StatementBlock {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        join(&self.statements, ";", state)?;
        if !self.statements.is_empty() && !self.traps.is_empty() {
            state.add_token(";");
        }
        join(&self.traps, ";", state)
    }
}

impl Codegen for FunctionDefinition {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        let keyword = if self.is_workflow {
            "workflow "
        } else if self.is_filter {
            "filter "
        } else {
            "function "
        };
        state.add_token(keyword);
        state.add_token(&self.name);
        if !self.parameters.is_empty() {
            state.add_token("(");
            join(&self.parameters, ",", state)?;
            state.add_token(")");
        }
        state.add_token("{");
        self.body.codegen(state)?;
        state.add_token("}");
        Ok(())
    }
}

// ============================================================================
// Statements
// ============================================================================

impl Codegen for Statement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        match self {
            Statement::FunctionDefinition(n) => n.codegen(state),
            Statement::If(n) => n.codegen(state),
            Statement::Trap(n) => n.codegen(state),
            Statement::Switch(n) => n.codegen(state),
            Statement::Data(n) => n.codegen(state),
            Statement::ForEach(n) => n.codegen(state),
            Statement::For(n) => n.codegen(state),
            Statement::While(n) => n.codegen(state),
            Statement::DoWhile(n) => n.codegen(state),
            Statement::DoUntil(n) => n.codegen(state),
            Statement::Try(n) => n.codegen(state),
            Statement::Break(n) => n.codegen(state),
            Statement::Continue(n) => n.codegen(state),
            Statement::Return(n) => n.codegen(state),
            Statement::Exit(n) => n.codegen(state),
            Statement::Throw(n) => n.codegen(state),
            Statement::Assignment(n) => n.codegen(state),
            Statement::Pipeline(n) => n.codegen(state),
            Statement::Block(n) => n.codegen(state),
            Statement::Error(n) => n.codegen(state),
        }
    }
}

fn label_prefix(label: &Option<String>, state: &mut CodegenState) {
    if let Some(label) = label {
        state.add_token(":");
        state.add_token(label);
        state.add_token(" ");
    }
}

impl Codegen for IfStatement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        for (index, (condition, body)) in self.clauses.iter().enumerate() {
            state.add_token(if index == 0 { "if(" } else { "elseif(" });
            condition.codegen(state)?;
            state.add_token("){");
            body.codegen(state)?;
            state.add_token("}");
        }
        if let Some(else_clause) = &self.else_clause {
            state.add_token("else{");
            else_clause.codegen(state)?;
            state.add_token("}");
        }
        Ok(())
    }
}

impl Codegen for TrapStatement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("trap");
        if let Some(trap_type) = &self.trap_type {
            trap_type.codegen(state)?;
        }
        state.add_token("{");
        self.body.codegen(state)?;
        state.add_token("}");
        Ok(())
    }
}

impl Codegen for SwitchStatement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        label_prefix(&self.label, state);
        state.add_token("switch");
        for flag in &self.flags {
            state.add_token(" -");
            state.add_token(flag.keyword());
        }
        state.add_token("(");
        self.condition.codegen(state)?;
        state.add_token("){");
        for (pattern, body) in &self.clauses {
            pattern.codegen(state)?;
            state.add_token("{");
            body.codegen(state)?;
            state.add_token("}");
        }
        if let Some(default) = &self.default {
            state.add_token("default{");
            default.codegen(state)?;
            state.add_token("}");
        }
        state.add_token("}");
        Ok(())
    }
}

impl Codegen for DataStatement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("data");
        if let Some(variable) = &self.variable {
            state.add_token(" ");
            state.add_token(variable);
        }
        if !self.commands_allowed.is_empty() {
            state.add_token(" -supportedcommand ");
            join(&self.commands_allowed, ",", state)?;
        }
        state.add_token("{");
        self.body.codegen(state)?;
        state.add_token("}");
        Ok(())
    }
}

impl Codegen for ForEachStatement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        label_prefix(&self.label, state);
        state.add_token("foreach(");
        self.variable.codegen(state)?;
        state.add_token(" in ");
        self.condition.codegen(state)?;
        state.add_token("){");
        self.body.codegen(state)?;
        state.add_token("}");
        Ok(())
    }
}

impl Codegen for ForStatement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        label_prefix(&self.label, state);
        state.add_token("for(");
        if let Some(initializer) = &self.initializer {
            initializer.codegen(state)?;
        }
        state.add_token(";");
        if let Some(condition) = &self.condition {
            condition.codegen(state)?;
        }
        state.add_token(";");
        if let Some(iterator) = &self.iterator {
            iterator.codegen(state)?;
        }
        state.add_token("){");
        self.body.codegen(state)?;
        state.add_token("}");
        Ok(())
    }
}

impl Codegen for WhileStatement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        label_prefix(&self.label, state);
        state.add_token("while(");
        self.condition.codegen(state)?;
        state.add_token("){");
        self.body.codegen(state)?;
        state.add_token("}");
        Ok(())
    }
}

impl Codegen for DoWhileStatement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        label_prefix(&self.label, state);
        state.add_token("do{");
        self.body.codegen(state)?;
        state.add_token("}while(");
        self.condition.codegen(state)?;
        state.add_token(")");
        Ok(())
    }
}

impl Codegen for DoUntilStatement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        label_prefix(&self.label, state);
        state.add_token("do{");
        self.body.codegen(state)?;
        state.add_token("}until(");
        self.condition.codegen(state)?;
        state.add_token(")");
        Ok(())
    }
}

impl Codegen for TryStatement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("try{");
        self.body.codegen(state)?;
        state.add_token("}");
        join(&self.catch_clauses, "", state)?;
        if let Some(finally_clause) = &self.finally_clause {
            state.add_token("finally{");
            finally_clause.codegen(state)?;
            state.add_token("}");
        }
        Ok(())
    }
}

impl Codegen for CatchClause {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("catch");
        if !self.catch_types.is_empty() {
            state.add_token(" ");
            join(&self.catch_types, ",", state)?;
        }
        state.add_token("{");
        self.body.codegen(state)?;
        state.add_token("}");
        Ok(())
    }
}

impl Codegen for BreakStatement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("break");
        if let Some(label) = &self.label {
            state.add_token(" ");
            label.codegen(state)?;
        }
        Ok(())
    }
}

impl Codegen for ContinueStatement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("continue");
        if let Some(label) = &self.label {
            state.add_token(" ");
            label.codegen(state)?;
        }
        Ok(())
    }
}

impl Codegen for ReturnStatement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("return");
        if let Some(pipeline) = &self.pipeline {
            state.add_token(" ");
            pipeline.codegen(state)?;
        }
        Ok(())
    }
}

impl Codegen for ExitStatement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("exit");
        if let Some(pipeline) = &self.pipeline {
            state.add_token(" ");
            pipeline.codegen(state)?;
        }
        Ok(())
    }
}

impl Codegen for ThrowStatement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("throw");
        if let Some(pipeline) = &self.pipeline {
            state.add_token(" ");
            pipeline.codegen(state)?;
        }
        Ok(())
    }
}

impl Codegen for AssignmentStatement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        self.left.codegen(state)?;
        state.add_token(self.operator.spelling());
        self.right.codegen(state)
    }
}

impl Codegen for Pipeline {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        join(&self.elements, "|", state)
    }
}

impl Codegen for PipelineElement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        match self {
            PipelineElement::Command(n) => n.codegen(state),
            PipelineElement::Expression(n) => n.codegen(state),
        }
    }
}

impl Codegen for Command {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        match self.invocation_operator {
            InvocationOperator::None => {}
            InvocationOperator::Ampersand => state.add_token("& "),
            InvocationOperator::Dot => state.add_token(". "),
        }
        join(&self.elements, " ", state)?;
        if !self.redirections.is_empty() {
            state.add_token(" ");
            join(&self.redirections, " ", state)?;
        }
        Ok(())
    }
}

impl Codegen for CommandExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        self.expression.codegen(state)?;
        if !self.redirections.is_empty() {
            state.add_token(" ");
            join(&self.redirections, " ", state)?;
        }
        Ok(())
    }
}

impl Codegen for CommandElement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        match self {
            CommandElement::Expression(n) => n.codegen(state),
            CommandElement::Parameter(n) => n.codegen(state),
        }
    }
}

impl Codegen for CommandParameter {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("-");
        state.add_token(&self.name);
        if let Some(argument) = &self.argument {
            state.add_token(":");
            argument.codegen(state)?;
        }
        Ok(())
    }
}

impl Codegen for Redirection {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        match self {
            Redirection::File(n) => n.codegen(state),
            Redirection::Merging(n) => n.codegen(state),
        }
    }
}

impl Codegen for FileRedirection {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token(self.from_stream.token());
        state.add_token(if self.append { ">>" } else { ">" });
        self.location.codegen(state)
    }
}

impl Codegen for MergingRedirection {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token(self.from_stream.token());
        state.add_token(">&");
        state.add_token(self.to_stream.token());
        Ok(())
    }
}

impl Codegen for BlockStatement {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token(self.keyword.keyword());
        state.add_token("{");
        self.body.codegen(state)?;
        state.add_token("}");
        Ok(())
    }
}

impl Codegen for ErrorStatement {
    fn codegen(&self, _state: &mut CodegenState) -> Result<()> {
        Err(Error::UnsupportedConstruct {
            construct: "error-recovery statement".to_string(),
        })
    }
}

// ============================================================================
// Support nodes
// ============================================================================

impl Codegen for TypeConstraint {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("[");
        state.add_token(&self.type_name);
        state.add_token("]");
        Ok(())
    }
}

impl Codegen for Attribute {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("[");
        state.add_token(&self.type_name);
        state.add_token("(");
        join(&self.positional_arguments, ",", state)?;
        if !self.positional_arguments.is_empty() && !self.named_arguments.is_empty() {
            state.add_token(",");
        }
        join(&self.named_arguments, ",", state)?;
        state.add_token(")]");
        Ok(())
    }
}

impl Codegen for NamedAttributeArgument {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token(&self.argument_name);
        if !self.expression_omitted {
            state.add_token("=");
            self.argument.codegen(state)?;
        }
        Ok(())
    }
}

impl Codegen for Parameter {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        join(&self.attributes, "", state)?;
        self.name.codegen(state)?;
        if let Some(default_value) = &self.default_value {
            state.add_token("=");
            default_value.codegen(state)?;
        }
        Ok(())
    }
}

impl Codegen for AttributeBase {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        match self {
            AttributeBase::TypeConstraint(n) => n.codegen(state),
            AttributeBase::Attribute(n) => n.codegen(state),
        }
    }
}

// ============================================================================
// Expressions
// ============================================================================

impl Codegen for Expression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        match self {
            Expression::Binary(n) => n.codegen(state),
            Expression::Unary(n) => n.codegen(state),
            Expression::Convert(n) => n.codegen(state),
            Expression::Type(n) => n.codegen(state),
            Expression::Constant(n) => n.codegen(state),
            Expression::StringConstant(n) => n.codegen(state),
            Expression::ExpandableString(n) => n.codegen(state),
            Expression::Sub(n) => n.codegen(state),
            Expression::Using(n) => n.codegen(state),
            Expression::Variable(n) => n.codegen(state),
            Expression::Member(n) => n.codegen(state),
            Expression::InvokeMember(n) => n.codegen(state),
            Expression::Array(n) => n.codegen(state),
            Expression::ArrayLiteral(n) => n.codegen(state),
            Expression::Hashtable(n) => n.codegen(state),
            Expression::ScriptBlock(n) => n.codegen(state),
            Expression::Paren(n) => n.codegen(state),
            Expression::Index(n) => n.codegen(state),
            Expression::Attributed(n) => n.codegen(state),
            Expression::Error(n) => n.codegen(state),
        }
    }
}

impl Codegen for BinaryExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        self.left.codegen(state)?;
        state.add_token(self.operator.spelling());
        self.right.codegen(state)
    }
}

impl Codegen for UnaryExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        if self.operator.is_postfix() {
            self.child.codegen(state)?;
            state.add_token(self.operator.spelling());
        } else {
            state.add_token(self.operator.spelling());
            self.child.codegen(state)?;
        }
        Ok(())
    }
}

impl Codegen for ConvertExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        self.type_constraint.codegen(state)?;
        self.child.codegen(state)
    }
}

impl Codegen for TypeExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("[");
        state.add_token(&self.type_name);
        state.add_token("]");
        Ok(())
    }
}

impl Codegen for ConstantExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        match &self.value {
            ConstantValue::Int(value) => state.add_token(&value.to_string()),
            ConstantValue::Double(value) => state.add_token(&value.to_string()),
        }
        Ok(())
    }
}

impl Codegen for StringConstantExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        quoted_string(&self.value, self.kind, state);
        Ok(())
    }
}

impl Codegen for ExpandableStringExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        quoted_string(&self.value, self.kind, state);
        Ok(())
    }
}

impl Codegen for SubExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("$(");
        self.statements.codegen(state)?;
        state.add_token(")");
        Ok(())
    }
}

impl Codegen for UsingExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        // The wrapped expression spells its own `using:` path.
        self.sub_expression.codegen(state)
    }
}

impl Codegen for VariableExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token(if self.splatted { "@" } else { "$" });
        state.add_token(&self.name);
        Ok(())
    }
}

impl Codegen for MemberExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        self.expression.codegen(state)?;
        state.add_token(if self.static_access { "::" } else { "." });
        self.member.codegen(state)
    }
}

impl Codegen for InvokeMemberExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        self.expression.codegen(state)?;
        state.add_token(if self.static_access { "::" } else { "." });
        self.member.codegen(state)?;
        state.add_token("(");
        join(&self.arguments, ",", state)?;
        state.add_token(")");
        Ok(())
    }
}

impl Codegen for ArrayExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("@(");
        self.statements.codegen(state)?;
        state.add_token(")");
        Ok(())
    }
}

impl Codegen for ArrayLiteral {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        join(&self.elements, ",", state)
    }
}

impl Codegen for HashtableExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("@{");
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                state.add_token(";");
            }
            key.codegen(state)?;
            state.add_token("=");
            value.codegen(state)?;
        }
        state.add_token("}");
        Ok(())
    }
}

impl Codegen for ScriptBlockExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("{");
        self.script_block.codegen(state)?;
        state.add_token("}");
        Ok(())
    }
}

impl Codegen for ParenExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        state.add_token("(");
        self.pipeline.codegen(state)?;
        state.add_token(")");
        Ok(())
    }
}

impl Codegen for IndexExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        self.target.codegen(state)?;
        state.add_token("[");
        self.index.codegen(state)?;
        state.add_token("]");
        Ok(())
    }
}

impl Codegen for AttributedExpression {
    fn codegen(&self, state: &mut CodegenState) -> Result<()> {
        self.attribute.codegen(state)?;
        self.child.codegen(state)
    }
}

impl Codegen for ErrorExpression {
    fn codegen(&self, _state: &mut CodegenState) -> Result<()> {
        Err(Error::UnsupportedConstruct {
            construct: "error-recovery expression".to_string(),
        })
    }
}
