// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor trait definitions for read-only tree traversal.

use crate::nodes::{
    ArrayExpression, ArrayLiteral, AssignmentStatement, Attribute, AttributedExpression,
    BinaryExpression, BlockStatement, BreakStatement, CatchClause, Command, CommandExpression,
    CommandParameter, ConstantExpression, ContinueStatement, ConvertExpression, DataStatement,
    DoUntilStatement, DoWhileStatement, ErrorExpression, ErrorStatement, ExitStatement,
    ExpandableStringExpression, FileRedirection, ForEachStatement, ForStatement,
    FunctionDefinition, HashtableExpression, IfStatement, IndexExpression,
    InvokeMemberExpression, MemberExpression, MergingRedirection, NamedAttributeArgument,
    NamedBlock, ParamBlock, Parameter, ParenExpression, Pipeline, ReturnStatement, ScriptBlock,
    ScriptBlockExpression, StatementBlock, StringConstantExpression, SubExpression,
    SwitchStatement, ThrowStatement, TrapStatement, TryStatement, TypeConstraint, TypeExpression,
    UnaryExpression, UsingExpression, VariableExpression, WhileStatement,
};

/// Result of visiting a node - controls traversal behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitResult {
    /// Continue traversal into children.
    #[default]
    Continue,
    /// Skip children, continue with siblings.
    SkipChildren,
    /// Stop traversal entirely.
    Stop,
}

/// Read-only visitor over every node kind.
///
/// Every method defaults to [`VisitResult::Continue`]; concrete passes
/// override only the kinds they care about and the `walk_*` functions in
/// [`crate::visitor::dispatch`] handle the recursion for everything else.
/// Children are visited in grammar-declaration order.
#[allow(unused_variables)]
pub trait Visitor {
    fn visit_script_block(&mut self, node: &ScriptBlock) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_named_block(&mut self, node: &NamedBlock) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_param_block(&mut self, node: &ParamBlock) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_statement_block(&mut self, node: &StatementBlock) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_function_definition(&mut self, node: &FunctionDefinition) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_if_statement(&mut self, node: &IfStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_trap_statement(&mut self, node: &TrapStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_switch_statement(&mut self, node: &SwitchStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_data_statement(&mut self, node: &DataStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_foreach_statement(&mut self, node: &ForEachStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_for_statement(&mut self, node: &ForStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_while_statement(&mut self, node: &WhileStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_do_while_statement(&mut self, node: &DoWhileStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_do_until_statement(&mut self, node: &DoUntilStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_try_statement(&mut self, node: &TryStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_catch_clause(&mut self, node: &CatchClause) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_break_statement(&mut self, node: &BreakStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_continue_statement(&mut self, node: &ContinueStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_return_statement(&mut self, node: &ReturnStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_exit_statement(&mut self, node: &ExitStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_throw_statement(&mut self, node: &ThrowStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_assignment_statement(&mut self, node: &AssignmentStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_block_statement(&mut self, node: &BlockStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_error_statement(&mut self, node: &ErrorStatement) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_pipeline(&mut self, node: &Pipeline) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_command(&mut self, node: &Command) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_command_expression(&mut self, node: &CommandExpression) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_command_parameter(&mut self, node: &CommandParameter) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_file_redirection(&mut self, node: &FileRedirection) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_merging_redirection(&mut self, node: &MergingRedirection) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_type_constraint(&mut self, node: &TypeConstraint) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_attribute(&mut self, node: &Attribute) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_named_attribute_argument(&mut self, node: &NamedAttributeArgument) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_parameter(&mut self, node: &Parameter) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_binary_expression(&mut self, node: &BinaryExpression) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_unary_expression(&mut self, node: &UnaryExpression) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_convert_expression(&mut self, node: &ConvertExpression) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_type_expression(&mut self, node: &TypeExpression) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_constant_expression(&mut self, node: &ConstantExpression) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_string_constant_expression(
        &mut self,
        node: &StringConstantExpression,
    ) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_expandable_string_expression(
        &mut self,
        node: &ExpandableStringExpression,
    ) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_sub_expression(&mut self, node: &SubExpression) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_using_expression(&mut self, node: &UsingExpression) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_variable_expression(&mut self, node: &VariableExpression) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_member_expression(&mut self, node: &MemberExpression) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_invoke_member_expression(&mut self, node: &InvokeMemberExpression) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_array_expression(&mut self, node: &ArrayExpression) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_array_literal(&mut self, node: &ArrayLiteral) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_hashtable(&mut self, node: &HashtableExpression) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_script_block_expression(&mut self, node: &ScriptBlockExpression) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_paren_expression(&mut self, node: &ParenExpression) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_index_expression(&mut self, node: &IndexExpression) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_attributed_expression(&mut self, node: &AttributedExpression) -> VisitResult {
        VisitResult::Continue
    }
    fn visit_error_expression(&mut self, node: &ErrorExpression) -> VisitResult {
        VisitResult::Continue
    }
}
