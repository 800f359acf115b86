// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Walk functions for read-only tree traversal.
//!
//! Each `walk_*` function calls the visitor hook for its node, then descends
//! into the node's children in grammar-declaration order. Control flow:
//!
//! - [`VisitResult::Continue`] - traverse into children
//! - [`VisitResult::SkipChildren`] - skip children, continue with siblings
//! - [`VisitResult::Stop`] - halt traversal immediately
//!
//! Every node kind is dispatched through an exhaustive `match` with no
//! fallback arm, so adding a node kind forces every walk site to be updated.

use super::traits::{VisitResult, Visitor};
use crate::nodes::{
    ArrayExpression, ArrayLiteral, AssignmentStatement, Attribute, AttributeBase,
    AttributedExpression, BinaryExpression, BlockStatement, BreakStatement, CatchClause, Command,
    CommandElement, CommandExpression, CommandParameter, ContinueStatement, ConvertExpression,
    DataStatement, DoUntilStatement, DoWhileStatement, ExitStatement, Expression,
    FileRedirection, ForEachStatement, ForStatement, FunctionDefinition, HashtableExpression,
    IfStatement, IndexExpression, InvokeMemberExpression, MemberExpression, NamedAttributeArgument,
    NamedBlock, ParamBlock, Parameter, ParenExpression, Pipeline, PipelineElement, Redirection,
    ReturnStatement, ScriptBlock, ScriptBlockExpression, Statement, StatementBlock, SubExpression,
    SwitchStatement, ThrowStatement, TrapStatement, TryStatement, UnaryExpression,
    UsingExpression, WhileStatement,
};

/// Propagates `Stop` out of the enclosing walk function.
macro_rules! try_walk {
    ($expr:expr) => {
        if $expr == VisitResult::Stop {
            return VisitResult::Stop;
        }
    };
}

/// Handles the visitor hook result at the top of each walk function.
macro_rules! visit_hook {
    ($expr:expr) => {
        match $expr {
            VisitResult::Stop => return VisitResult::Stop,
            VisitResult::SkipChildren => return VisitResult::Continue,
            VisitResult::Continue => {}
        }
    };
}

/// Walk a [`ScriptBlock`] and its children.
pub fn walk_script_block<V: Visitor + ?Sized>(visitor: &mut V, node: &ScriptBlock) -> VisitResult {
    visit_hook!(visitor.visit_script_block(node));
    if let Some(param_block) = &node.param_block {
        try_walk!(walk_param_block(visitor, param_block));
    }
    for block in [
        &node.begin_block,
        &node.process_block,
        &node.end_block,
        &node.dynamic_param_block,
    ]
    .into_iter()
    .flatten()
    {
        try_walk!(walk_named_block(visitor, block));
    }
    VisitResult::Continue
}

pub fn walk_named_block<V: Visitor + ?Sized>(visitor: &mut V, node: &NamedBlock) -> VisitResult {
    visit_hook!(visitor.visit_named_block(node));
    for trap in &node.traps {
        try_walk!(walk_trap_statement(visitor, trap));
    }
    for statement in &node.statements {
        try_walk!(walk_statement(visitor, statement));
    }
    VisitResult::Continue
}

pub fn walk_param_block<V: Visitor + ?Sized>(visitor: &mut V, node: &ParamBlock) -> VisitResult {
    visit_hook!(visitor.visit_param_block(node));
    for attribute in &node.attributes {
        try_walk!(walk_attribute(visitor, attribute));
    }
    for parameter in &node.parameters {
        try_walk!(walk_parameter(visitor, parameter));
    }
    VisitResult::Continue
}

pub fn walk_statement_block<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &StatementBlock,
) -> VisitResult {
    visit_hook!(visitor.visit_statement_block(node));
    for statement in &node.statements {
        try_walk!(walk_statement(visitor, statement));
    }
    for trap in &node.traps {
        try_walk!(walk_trap_statement(visitor, trap));
    }
    VisitResult::Continue
}

pub fn walk_function_definition<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &FunctionDefinition,
) -> VisitResult {
    visit_hook!(visitor.visit_function_definition(node));
    for parameter in &node.parameters {
        try_walk!(walk_parameter(visitor, parameter));
    }
    try_walk!(walk_script_block(visitor, &node.body));
    VisitResult::Continue
}

/// Dispatch a [`Statement`] to the walk function for its kind.
pub fn walk_statement<V: Visitor + ?Sized>(visitor: &mut V, node: &Statement) -> VisitResult {
    match node {
        Statement::FunctionDefinition(n) => walk_function_definition(visitor, n),
        Statement::If(n) => walk_if_statement(visitor, n),
        Statement::Trap(n) => walk_trap_statement(visitor, n),
        Statement::Switch(n) => walk_switch_statement(visitor, n),
        Statement::Data(n) => walk_data_statement(visitor, n),
        Statement::ForEach(n) => walk_foreach_statement(visitor, n),
        Statement::For(n) => walk_for_statement(visitor, n),
        Statement::While(n) => walk_while_statement(visitor, n),
        Statement::DoWhile(n) => walk_do_while_statement(visitor, n),
        Statement::DoUntil(n) => walk_do_until_statement(visitor, n),
        Statement::Try(n) => walk_try_statement(visitor, n),
        Statement::Break(n) => walk_break_statement(visitor, n),
        Statement::Continue(n) => walk_continue_statement(visitor, n),
        Statement::Return(n) => walk_return_statement(visitor, n),
        Statement::Exit(n) => walk_exit_statement(visitor, n),
        Statement::Throw(n) => walk_throw_statement(visitor, n),
        Statement::Assignment(n) => walk_assignment_statement(visitor, n),
        Statement::Pipeline(n) => walk_pipeline(visitor, n),
        Statement::Block(n) => walk_block_statement(visitor, n),
        Statement::Error(n) => visitor.visit_error_statement(n),
    }
}

pub fn walk_if_statement<V: Visitor + ?Sized>(visitor: &mut V, node: &IfStatement) -> VisitResult {
    visit_hook!(visitor.visit_if_statement(node));
    for (condition, body) in &node.clauses {
        try_walk!(walk_pipeline(visitor, condition));
        try_walk!(walk_statement_block(visitor, body));
    }
    if let Some(else_clause) = &node.else_clause {
        try_walk!(walk_statement_block(visitor, else_clause));
    }
    VisitResult::Continue
}

pub fn walk_trap_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &TrapStatement,
) -> VisitResult {
    visit_hook!(visitor.visit_trap_statement(node));
    if let Some(trap_type) = &node.trap_type {
        try_walk!(visitor.visit_type_constraint(trap_type));
    }
    try_walk!(walk_statement_block(visitor, &node.body));
    VisitResult::Continue
}

pub fn walk_switch_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &SwitchStatement,
) -> VisitResult {
    visit_hook!(visitor.visit_switch_statement(node));
    try_walk!(walk_pipeline(visitor, &node.condition));
    for (pattern, body) in &node.clauses {
        try_walk!(walk_expression(visitor, pattern));
        try_walk!(walk_statement_block(visitor, body));
    }
    if let Some(default) = &node.default {
        try_walk!(walk_statement_block(visitor, default));
    }
    VisitResult::Continue
}

pub fn walk_data_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &DataStatement,
) -> VisitResult {
    visit_hook!(visitor.visit_data_statement(node));
    for command in &node.commands_allowed {
        try_walk!(walk_expression(visitor, command));
    }
    try_walk!(walk_statement_block(visitor, &node.body));
    VisitResult::Continue
}

pub fn walk_foreach_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ForEachStatement,
) -> VisitResult {
    visit_hook!(visitor.visit_foreach_statement(node));
    try_walk!(visitor.visit_variable_expression(&node.variable));
    try_walk!(walk_pipeline(visitor, &node.condition));
    try_walk!(walk_statement_block(visitor, &node.body));
    VisitResult::Continue
}

pub fn walk_for_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ForStatement,
) -> VisitResult {
    visit_hook!(visitor.visit_for_statement(node));
    for slot in [&node.initializer, &node.condition, &node.iterator]
        .into_iter()
        .flatten()
    {
        try_walk!(walk_pipeline(visitor, slot));
    }
    try_walk!(walk_statement_block(visitor, &node.body));
    VisitResult::Continue
}

pub fn walk_while_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &WhileStatement,
) -> VisitResult {
    visit_hook!(visitor.visit_while_statement(node));
    try_walk!(walk_pipeline(visitor, &node.condition));
    try_walk!(walk_statement_block(visitor, &node.body));
    VisitResult::Continue
}

pub fn walk_do_while_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &DoWhileStatement,
) -> VisitResult {
    visit_hook!(visitor.visit_do_while_statement(node));
    try_walk!(walk_pipeline(visitor, &node.condition));
    try_walk!(walk_statement_block(visitor, &node.body));
    VisitResult::Continue
}

pub fn walk_do_until_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &DoUntilStatement,
) -> VisitResult {
    visit_hook!(visitor.visit_do_until_statement(node));
    try_walk!(walk_pipeline(visitor, &node.condition));
    try_walk!(walk_statement_block(visitor, &node.body));
    VisitResult::Continue
}

pub fn walk_try_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &TryStatement,
) -> VisitResult {
    visit_hook!(visitor.visit_try_statement(node));
    try_walk!(walk_statement_block(visitor, &node.body));
    for catch_clause in &node.catch_clauses {
        try_walk!(walk_catch_clause(visitor, catch_clause));
    }
    if let Some(finally_clause) = &node.finally_clause {
        try_walk!(walk_statement_block(visitor, finally_clause));
    }
    VisitResult::Continue
}

pub fn walk_catch_clause<V: Visitor + ?Sized>(visitor: &mut V, node: &CatchClause) -> VisitResult {
    visit_hook!(visitor.visit_catch_clause(node));
    for catch_type in &node.catch_types {
        try_walk!(visitor.visit_type_constraint(catch_type));
    }
    try_walk!(walk_statement_block(visitor, &node.body));
    VisitResult::Continue
}

pub fn walk_break_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &BreakStatement,
) -> VisitResult {
    visit_hook!(visitor.visit_break_statement(node));
    if let Some(label) = &node.label {
        try_walk!(walk_expression(visitor, label));
    }
    VisitResult::Continue
}

pub fn walk_continue_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ContinueStatement,
) -> VisitResult {
    visit_hook!(visitor.visit_continue_statement(node));
    if let Some(label) = &node.label {
        try_walk!(walk_expression(visitor, label));
    }
    VisitResult::Continue
}

pub fn walk_return_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ReturnStatement,
) -> VisitResult {
    visit_hook!(visitor.visit_return_statement(node));
    if let Some(pipeline) = &node.pipeline {
        try_walk!(walk_pipeline(visitor, pipeline));
    }
    VisitResult::Continue
}

pub fn walk_exit_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ExitStatement,
) -> VisitResult {
    visit_hook!(visitor.visit_exit_statement(node));
    if let Some(pipeline) = &node.pipeline {
        try_walk!(walk_pipeline(visitor, pipeline));
    }
    VisitResult::Continue
}

pub fn walk_throw_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ThrowStatement,
) -> VisitResult {
    visit_hook!(visitor.visit_throw_statement(node));
    if let Some(pipeline) = &node.pipeline {
        try_walk!(walk_pipeline(visitor, pipeline));
    }
    VisitResult::Continue
}

pub fn walk_assignment_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &AssignmentStatement,
) -> VisitResult {
    visit_hook!(visitor.visit_assignment_statement(node));
    try_walk!(walk_expression(visitor, &node.left));
    try_walk!(walk_statement(visitor, &node.right));
    VisitResult::Continue
}

pub fn walk_block_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &BlockStatement,
) -> VisitResult {
    visit_hook!(visitor.visit_block_statement(node));
    try_walk!(walk_statement_block(visitor, &node.body));
    VisitResult::Continue
}

pub fn walk_pipeline<V: Visitor + ?Sized>(visitor: &mut V, node: &Pipeline) -> VisitResult {
    visit_hook!(visitor.visit_pipeline(node));
    for element in &node.elements {
        try_walk!(walk_pipeline_element(visitor, element));
    }
    VisitResult::Continue
}

/// Dispatch a [`PipelineElement`] to the walk function for its kind.
pub fn walk_pipeline_element<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &PipelineElement,
) -> VisitResult {
    match node {
        PipelineElement::Command(n) => walk_command(visitor, n),
        PipelineElement::Expression(n) => walk_command_expression(visitor, n),
    }
}

pub fn walk_command<V: Visitor + ?Sized>(visitor: &mut V, node: &Command) -> VisitResult {
    visit_hook!(visitor.visit_command(node));
    for element in &node.elements {
        match element {
            CommandElement::Expression(expression) => {
                try_walk!(walk_expression(visitor, expression));
            }
            CommandElement::Parameter(parameter) => {
                try_walk!(walk_command_parameter(visitor, parameter));
            }
        }
    }
    for redirection in &node.redirections {
        try_walk!(walk_redirection(visitor, redirection));
    }
    VisitResult::Continue
}

pub fn walk_command_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &CommandExpression,
) -> VisitResult {
    visit_hook!(visitor.visit_command_expression(node));
    try_walk!(walk_expression(visitor, &node.expression));
    for redirection in &node.redirections {
        try_walk!(walk_redirection(visitor, redirection));
    }
    VisitResult::Continue
}

pub fn walk_command_parameter<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &CommandParameter,
) -> VisitResult {
    visit_hook!(visitor.visit_command_parameter(node));
    if let Some(argument) = &node.argument {
        try_walk!(walk_expression(visitor, argument));
    }
    VisitResult::Continue
}

/// Dispatch a [`Redirection`] to the walk function for its kind.
pub fn walk_redirection<V: Visitor + ?Sized>(visitor: &mut V, node: &Redirection) -> VisitResult {
    match node {
        Redirection::File(n) => walk_file_redirection(visitor, n),
        Redirection::Merging(n) => visitor.visit_merging_redirection(n),
    }
}

pub fn walk_file_redirection<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &FileRedirection,
) -> VisitResult {
    visit_hook!(visitor.visit_file_redirection(node));
    try_walk!(walk_expression(visitor, &node.location));
    VisitResult::Continue
}

pub fn walk_attribute<V: Visitor + ?Sized>(visitor: &mut V, node: &Attribute) -> VisitResult {
    visit_hook!(visitor.visit_attribute(node));
    for argument in &node.positional_arguments {
        try_walk!(walk_expression(visitor, argument));
    }
    for argument in &node.named_arguments {
        try_walk!(walk_named_attribute_argument(visitor, argument));
    }
    VisitResult::Continue
}

pub fn walk_named_attribute_argument<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &NamedAttributeArgument,
) -> VisitResult {
    visit_hook!(visitor.visit_named_attribute_argument(node));
    try_walk!(walk_expression(visitor, &node.argument));
    VisitResult::Continue
}

pub fn walk_parameter<V: Visitor + ?Sized>(visitor: &mut V, node: &Parameter) -> VisitResult {
    visit_hook!(visitor.visit_parameter(node));
    try_walk!(visitor.visit_variable_expression(&node.name));
    for attribute in &node.attributes {
        try_walk!(walk_attribute_base(visitor, attribute));
    }
    if let Some(default_value) = &node.default_value {
        try_walk!(walk_expression(visitor, default_value));
    }
    VisitResult::Continue
}

/// Dispatch an [`AttributeBase`] to the walk function for its kind.
pub fn walk_attribute_base<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &AttributeBase,
) -> VisitResult {
    match node {
        AttributeBase::TypeConstraint(n) => visitor.visit_type_constraint(n),
        AttributeBase::Attribute(n) => walk_attribute(visitor, n),
    }
}

/// Dispatch an [`Expression`] to the walk function for its kind.
pub fn walk_expression<V: Visitor + ?Sized>(visitor: &mut V, node: &Expression) -> VisitResult {
    match node {
        Expression::Binary(n) => walk_binary_expression(visitor, n),
        Expression::Unary(n) => walk_unary_expression(visitor, n),
        Expression::Convert(n) => walk_convert_expression(visitor, n),
        Expression::Type(n) => visitor.visit_type_expression(n),
        Expression::Constant(n) => visitor.visit_constant_expression(n),
        Expression::StringConstant(n) => visitor.visit_string_constant_expression(n),
        Expression::ExpandableString(n) => visitor.visit_expandable_string_expression(n),
        Expression::Sub(n) => walk_sub_expression(visitor, n),
        Expression::Using(n) => walk_using_expression(visitor, n),
        Expression::Variable(n) => visitor.visit_variable_expression(n),
        Expression::Member(n) => walk_member_expression(visitor, n),
        Expression::InvokeMember(n) => walk_invoke_member_expression(visitor, n),
        Expression::Array(n) => walk_array_expression(visitor, n),
        Expression::ArrayLiteral(n) => walk_array_literal(visitor, n),
        Expression::Hashtable(n) => walk_hashtable(visitor, n),
        Expression::ScriptBlock(n) => walk_script_block_expression(visitor, n),
        Expression::Paren(n) => walk_paren_expression(visitor, n),
        Expression::Index(n) => walk_index_expression(visitor, n),
        Expression::Attributed(n) => walk_attributed_expression(visitor, n),
        Expression::Error(n) => visitor.visit_error_expression(n),
    }
}

pub fn walk_binary_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &BinaryExpression,
) -> VisitResult {
    visit_hook!(visitor.visit_binary_expression(node));
    try_walk!(walk_expression(visitor, &node.left));
    try_walk!(walk_expression(visitor, &node.right));
    VisitResult::Continue
}

pub fn walk_unary_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &UnaryExpression,
) -> VisitResult {
    visit_hook!(visitor.visit_unary_expression(node));
    try_walk!(walk_expression(visitor, &node.child));
    VisitResult::Continue
}

pub fn walk_convert_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ConvertExpression,
) -> VisitResult {
    visit_hook!(visitor.visit_convert_expression(node));
    try_walk!(visitor.visit_type_constraint(&node.type_constraint));
    try_walk!(walk_expression(visitor, &node.child));
    VisitResult::Continue
}

pub fn walk_sub_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &SubExpression,
) -> VisitResult {
    visit_hook!(visitor.visit_sub_expression(node));
    try_walk!(walk_statement_block(visitor, &node.statements));
    VisitResult::Continue
}

pub fn walk_using_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &UsingExpression,
) -> VisitResult {
    visit_hook!(visitor.visit_using_expression(node));
    try_walk!(walk_expression(visitor, &node.sub_expression));
    VisitResult::Continue
}

pub fn walk_member_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &MemberExpression,
) -> VisitResult {
    visit_hook!(visitor.visit_member_expression(node));
    try_walk!(walk_expression(visitor, &node.expression));
    try_walk!(walk_expression(visitor, &node.member));
    VisitResult::Continue
}

pub fn walk_invoke_member_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &InvokeMemberExpression,
) -> VisitResult {
    visit_hook!(visitor.visit_invoke_member_expression(node));
    try_walk!(walk_expression(visitor, &node.expression));
    try_walk!(walk_expression(visitor, &node.member));
    for argument in &node.arguments {
        try_walk!(walk_expression(visitor, argument));
    }
    VisitResult::Continue
}

pub fn walk_array_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ArrayExpression,
) -> VisitResult {
    visit_hook!(visitor.visit_array_expression(node));
    try_walk!(walk_statement_block(visitor, &node.statements));
    VisitResult::Continue
}

pub fn walk_array_literal<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ArrayLiteral,
) -> VisitResult {
    visit_hook!(visitor.visit_array_literal(node));
    for element in &node.elements {
        try_walk!(walk_expression(visitor, element));
    }
    VisitResult::Continue
}

pub fn walk_hashtable<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &HashtableExpression,
) -> VisitResult {
    visit_hook!(visitor.visit_hashtable(node));
    for (key, value) in &node.entries {
        try_walk!(walk_expression(visitor, key));
        try_walk!(walk_statement(visitor, value));
    }
    VisitResult::Continue
}

pub fn walk_script_block_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ScriptBlockExpression,
) -> VisitResult {
    visit_hook!(visitor.visit_script_block_expression(node));
    try_walk!(walk_script_block(visitor, &node.script_block));
    VisitResult::Continue
}

pub fn walk_paren_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ParenExpression,
) -> VisitResult {
    visit_hook!(visitor.visit_paren_expression(node));
    try_walk!(walk_pipeline(visitor, &node.pipeline));
    VisitResult::Continue
}

pub fn walk_index_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &IndexExpression,
) -> VisitResult {
    visit_hook!(visitor.visit_index_expression(node));
    try_walk!(walk_expression(visitor, &node.target));
    try_walk!(walk_expression(visitor, &node.index));
    VisitResult::Continue
}

pub fn walk_attributed_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &AttributedExpression,
) -> VisitResult {
    visit_hook!(visitor.visit_attributed_expression(node));
    try_walk!(walk_attribute_base(visitor, &node.attribute));
    try_walk!(walk_expression(visitor, &node.child));
    VisitResult::Continue
}
