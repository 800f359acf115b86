// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Block, statement and support node definitions.

use crate::nodes::expression::{AttributeBase, Expression, VariableExpression};
use crate::nodes::Extent;

// ============================================================================
// Blocks
// ============================================================================

/// The root of every tree: a script block with up to four named blocks and
/// an optional `param(...)` block.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptBlock {
    pub extent: Extent,
    pub param_block: Option<ParamBlock>,
    pub begin_block: Option<NamedBlock>,
    pub process_block: Option<NamedBlock>,
    pub end_block: Option<NamedBlock>,
    pub dynamic_param_block: Option<NamedBlock>,
}

/// Which named block a [`NamedBlock`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Begin,
    Process,
    End,
    DynamicParam,
}

impl BlockKind {
    /// The keyword that introduces the block in source text.
    pub fn keyword(self) -> &'static str {
        match self {
            BlockKind::Begin => "begin",
            BlockKind::Process => "process",
            BlockKind::End => "end",
            BlockKind::DynamicParam => "dynamicparam",
        }
    }
}

/// A `begin`/`process`/`end`/`dynamicparam` block. Scripts without explicit
/// named blocks parse into a single unnamed `end` block.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedBlock {
    pub extent: Extent,
    pub kind: BlockKind,
    /// True when the block keyword was not written in the source.
    pub unnamed: bool,
    pub traps: Vec<TrapStatement>,
    pub statements: Vec<Statement>,
}

/// A `param(...)` block with its preceding attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamBlock {
    pub extent: Extent,
    pub attributes: Vec<Attribute>,
    pub parameters: Vec<Parameter>,
}

/// A brace-delimited sequence of statements with trailing trap statements.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementBlock {
    pub extent: Extent,
    pub statements: Vec<Statement>,
    pub traps: Vec<TrapStatement>,
}

/// A `function`/`filter`/`workflow` definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub extent: Extent,
    pub is_filter: bool,
    pub is_workflow: bool,
    /// The declared name, possibly carrying a `global:` qualifier.
    pub name: String,
    /// Parameters declared in parentheses after the name (as opposed to a
    /// `param` block inside the body).
    pub parameters: Vec<Parameter>,
    pub body: Box<ScriptBlock>,
}

// ============================================================================
// Statements
// ============================================================================

/// All statement kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    FunctionDefinition(FunctionDefinition),
    If(IfStatement),
    Trap(TrapStatement),
    Switch(SwitchStatement),
    Data(DataStatement),
    ForEach(ForEachStatement),
    For(ForStatement),
    While(WhileStatement),
    DoWhile(DoWhileStatement),
    DoUntil(DoUntilStatement),
    Try(TryStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    Return(ReturnStatement),
    Exit(ExitStatement),
    Throw(ThrowStatement),
    Assignment(AssignmentStatement),
    Pipeline(Pipeline),
    Block(BlockStatement),
    /// Parser error-recovery node. Trees containing one never reach the
    /// rewrite stages in a healthy pipeline.
    Error(ErrorStatement),
}

/// `if`/`elseif`/`else`. The first clause is the `if`, the rest are
/// `elseif` clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub extent: Extent,
    pub clauses: Vec<(Pipeline, StatementBlock)>,
    pub else_clause: Option<StatementBlock>,
}

/// `trap [type] { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct TrapStatement {
    pub extent: Extent,
    pub trap_type: Option<TypeConstraint>,
    pub body: StatementBlock,
}

/// A `-regex`-style flag on a `switch` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchFlag {
    File,
    Regex,
    Wildcard,
    Exact,
    CaseSensitive,
    Parallel,
}

impl SwitchFlag {
    pub fn keyword(self) -> &'static str {
        match self {
            SwitchFlag::File => "file",
            SwitchFlag::Regex => "regex",
            SwitchFlag::Wildcard => "wildcard",
            SwitchFlag::Exact => "exact",
            SwitchFlag::CaseSensitive => "casesensitive",
            SwitchFlag::Parallel => "parallel",
        }
    }
}

/// `switch [-flags] (condition) { pattern { ... } default { ... } }`
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    pub extent: Extent,
    pub label: Option<String>,
    pub flags: Vec<SwitchFlag>,
    pub condition: Pipeline,
    pub clauses: Vec<(Expression, StatementBlock)>,
    pub default: Option<StatementBlock>,
}

/// `data [name] [-supportedcommand ...] { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct DataStatement {
    pub extent: Extent,
    pub variable: Option<String>,
    pub commands_allowed: Vec<Expression>,
    pub body: StatementBlock,
}

/// `foreach ($x in <pipeline>) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct ForEachStatement {
    pub extent: Extent,
    pub label: Option<String>,
    pub variable: VariableExpression,
    pub condition: Pipeline,
    pub body: StatementBlock,
}

/// `for (init; cond; iter) { ... }` - all three header slots optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub extent: Extent,
    pub label: Option<String>,
    pub initializer: Option<Pipeline>,
    pub condition: Option<Pipeline>,
    pub iterator: Option<Pipeline>,
    pub body: StatementBlock,
}

/// `while (cond) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub extent: Extent,
    pub label: Option<String>,
    pub condition: Pipeline,
    pub body: StatementBlock,
}

/// `do { ... } while (cond)`
#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStatement {
    pub extent: Extent,
    pub label: Option<String>,
    pub condition: Pipeline,
    pub body: StatementBlock,
}

/// `do { ... } until (cond)`
#[derive(Debug, Clone, PartialEq)]
pub struct DoUntilStatement {
    pub extent: Extent,
    pub label: Option<String>,
    pub condition: Pipeline,
    pub body: StatementBlock,
}

/// `try { ... } catch ... finally { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct TryStatement {
    pub extent: Extent,
    pub body: StatementBlock,
    pub catch_clauses: Vec<CatchClause>,
    pub finally_clause: Option<StatementBlock>,
}

/// One `catch [type],[type] { ... }` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub extent: Extent,
    pub catch_types: Vec<TypeConstraint>,
    pub body: StatementBlock,
}

/// `break [label]`
#[derive(Debug, Clone, PartialEq)]
pub struct BreakStatement {
    pub extent: Extent,
    pub label: Option<Expression>,
}

/// `continue [label]`
#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStatement {
    pub extent: Extent,
    pub label: Option<Expression>,
}

/// `return [pipeline]`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub extent: Extent,
    pub pipeline: Option<Pipeline>,
}

/// `exit [pipeline]`
#[derive(Debug, Clone, PartialEq)]
pub struct ExitStatement {
    pub extent: Extent,
    pub pipeline: Option<Pipeline>,
}

/// `throw [pipeline]`
#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStatement {
    pub extent: Extent,
    pub pipeline: Option<Pipeline>,
}

/// Assignment operator tokens. One spelling per token; the set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOperator {
    Equals,
    PlusEquals,
    MinusEquals,
    MultiplyEquals,
    DivideEquals,
    RemainderEquals,
}

impl AssignmentOperator {
    pub fn spelling(self) -> &'static str {
        match self {
            AssignmentOperator::Equals => "=",
            AssignmentOperator::PlusEquals => "+=",
            AssignmentOperator::MinusEquals => "-=",
            AssignmentOperator::MultiplyEquals => "*=",
            AssignmentOperator::DivideEquals => "/=",
            AssignmentOperator::RemainderEquals => "%=",
        }
    }
}

/// `left op right`. The right-hand side is a statement so chained
/// assignments and pipelines both fit.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStatement {
    pub extent: Extent,
    pub left: Expression,
    pub operator: AssignmentOperator,
    pub right: Box<Statement>,
}

/// A sequence of commands joined by `|`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    pub extent: Extent,
    pub elements: Vec<PipelineElement>,
}

/// One stage of a pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineElement {
    Command(Command),
    Expression(CommandExpression),
}

/// How a command is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationOperator {
    None,
    /// `& name args`
    Ampersand,
    /// `. name args` (dot-sourcing)
    Dot,
}

/// A command invocation: name, arguments and redirections.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub extent: Extent,
    pub elements: Vec<CommandElement>,
    pub invocation_operator: InvocationOperator,
    pub redirections: Vec<Redirection>,
}

/// One element of a command: an argument expression or a `-Name` parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandElement {
    Expression(Expression),
    Parameter(CommandParameter),
}

/// A bare expression in statement position, with optional redirections.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandExpression {
    pub extent: Extent,
    pub expression: Expression,
    pub redirections: Vec<Redirection>,
}

/// `-Name` or `-Name:argument`.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandParameter {
    pub extent: Extent,
    pub name: String,
    pub argument: Option<Expression>,
}

/// Output streams addressable by redirections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectionStream {
    All,
    Output,
    Error,
    Warning,
    Verbose,
    Debug,
    Information,
}

impl RedirectionStream {
    /// The token written before `>`: a stream digit, or `*` for all streams.
    pub fn token(self) -> &'static str {
        match self {
            RedirectionStream::All => "*",
            RedirectionStream::Output => "1",
            RedirectionStream::Error => "2",
            RedirectionStream::Warning => "3",
            RedirectionStream::Verbose => "4",
            RedirectionStream::Debug => "5",
            RedirectionStream::Information => "6",
        }
    }
}

/// A redirection attached to a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Redirection {
    File(FileRedirection),
    Merging(MergingRedirection),
}

/// `n>location` or `n>>location`.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRedirection {
    pub extent: Extent,
    pub from_stream: RedirectionStream,
    pub location: Expression,
    pub append: bool,
}

/// `n>&m`.
#[derive(Debug, Clone, PartialEq)]
pub struct MergingRedirection {
    pub extent: Extent,
    pub from_stream: RedirectionStream,
    pub to_stream: RedirectionStream,
}

/// Keyword introducing a [`BlockStatement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKeyword {
    Parallel,
    Sequence,
}

impl BlockKeyword {
    pub fn keyword(self) -> &'static str {
        match self {
            BlockKeyword::Parallel => "parallel",
            BlockKeyword::Sequence => "sequence",
        }
    }
}

/// `parallel { ... }` / `sequence { ... }` (workflow bodies).
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub extent: Extent,
    pub keyword: BlockKeyword,
    pub body: StatementBlock,
}

/// Parser error-recovery statement; carries no renderable content.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorStatement {
    pub extent: Extent,
}

// ============================================================================
// Support nodes
// ============================================================================

/// `[TypeName]` used as a constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeConstraint {
    pub extent: Extent,
    pub type_name: String,
}

/// `[Name(positional, Named=value)]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub extent: Extent,
    pub type_name: String,
    pub positional_arguments: Vec<Expression>,
    pub named_arguments: Vec<NamedAttributeArgument>,
}

/// `Name=value` inside an attribute. When the expression was omitted in the
/// source (`[Parameter(Mandatory)]`) only the name is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedAttributeArgument {
    pub extent: Extent,
    pub argument_name: String,
    pub argument: Expression,
    pub expression_omitted: bool,
}

/// A declared parameter: attributes, variable, optional default value.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub extent: Extent,
    pub name: VariableExpression,
    pub attributes: Vec<AttributeBase>,
    pub default_value: Option<Expression>,
}
