// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Copy-rewriting traversal.
//!
//! A [`Rewriter`] visits every reachable node and produces a structurally
//! equivalent new tree. Every `rewrite_*` method defaults to the matching
//! `copy_*` function, which rebuilds a node of the same kind with the same
//! [`crate::nodes::Extent`] and the rewritten children; concrete passes
//! override only the node kinds they substitute. The input tree is never
//! mutated - each pass's output is an independently owned tree.
//!
//! Rewrites are fallible: a pass can abort the whole traversal by returning
//! an [`crate::Error`], which propagates out through every `copy_*` call.

use crate::error::Result;
use crate::nodes::{
    ArrayExpression, ArrayLiteral, AssignmentStatement, Attribute, AttributeBase,
    AttributedExpression, BinaryExpression, BlockStatement, BreakStatement, CatchClause, Command,
    CommandElement, CommandExpression, CommandParameter, ConstantExpression, ContinueStatement,
    ConvertExpression, DataStatement, DoUntilStatement, DoWhileStatement, ErrorExpression,
    ErrorStatement, ExitStatement, ExpandableStringExpression, Expression, FileRedirection,
    ForEachStatement, ForStatement, FunctionDefinition, HashtableExpression, IfStatement,
    IndexExpression, InvokeMemberExpression, MemberExpression, MergingRedirection,
    NamedAttributeArgument, NamedBlock, ParamBlock, Parameter, ParenExpression, Pipeline,
    PipelineElement, Redirection, ReturnStatement, ScriptBlock, ScriptBlockExpression, Statement,
    StatementBlock, StringConstantExpression, SubExpression, SwitchStatement, ThrowStatement,
    TrapStatement, TryStatement, TypeConstraint, TypeExpression, UnaryExpression, UsingExpression,
    VariableExpression, WhileStatement,
};

/// Copy-rewriting visitor over every node kind.
///
/// The default for each method is the exhaustive structural copy implemented
/// by the `copy_*` functions in this module.
pub trait Rewriter {
    fn rewrite_script_block(&mut self, node: &ScriptBlock) -> Result<ScriptBlock> {
        copy_script_block(self, node)
    }
    fn rewrite_named_block(&mut self, node: &NamedBlock) -> Result<NamedBlock> {
        copy_named_block(self, node)
    }
    fn rewrite_param_block(&mut self, node: &ParamBlock) -> Result<ParamBlock> {
        copy_param_block(self, node)
    }
    fn rewrite_statement_block(&mut self, node: &StatementBlock) -> Result<StatementBlock> {
        copy_statement_block(self, node)
    }
    fn rewrite_function_definition(
        &mut self,
        node: &FunctionDefinition,
    ) -> Result<FunctionDefinition> {
        copy_function_definition(self, node)
    }
    fn rewrite_statement(&mut self, node: &Statement) -> Result<Statement> {
        copy_statement(self, node)
    }
    fn rewrite_if_statement(&mut self, node: &IfStatement) -> Result<IfStatement> {
        copy_if_statement(self, node)
    }
    fn rewrite_trap_statement(&mut self, node: &TrapStatement) -> Result<TrapStatement> {
        copy_trap_statement(self, node)
    }
    fn rewrite_switch_statement(&mut self, node: &SwitchStatement) -> Result<SwitchStatement> {
        copy_switch_statement(self, node)
    }
    fn rewrite_data_statement(&mut self, node: &DataStatement) -> Result<DataStatement> {
        copy_data_statement(self, node)
    }
    fn rewrite_foreach_statement(&mut self, node: &ForEachStatement) -> Result<ForEachStatement> {
        copy_foreach_statement(self, node)
    }
    fn rewrite_for_statement(&mut self, node: &ForStatement) -> Result<ForStatement> {
        copy_for_statement(self, node)
    }
    fn rewrite_while_statement(&mut self, node: &WhileStatement) -> Result<WhileStatement> {
        copy_while_statement(self, node)
    }
    fn rewrite_do_while_statement(&mut self, node: &DoWhileStatement) -> Result<DoWhileStatement> {
        copy_do_while_statement(self, node)
    }
    fn rewrite_do_until_statement(&mut self, node: &DoUntilStatement) -> Result<DoUntilStatement> {
        copy_do_until_statement(self, node)
    }
    fn rewrite_try_statement(&mut self, node: &TryStatement) -> Result<TryStatement> {
        copy_try_statement(self, node)
    }
    fn rewrite_catch_clause(&mut self, node: &CatchClause) -> Result<CatchClause> {
        copy_catch_clause(self, node)
    }
    fn rewrite_break_statement(&mut self, node: &BreakStatement) -> Result<BreakStatement> {
        copy_break_statement(self, node)
    }
    fn rewrite_continue_statement(
        &mut self,
        node: &ContinueStatement,
    ) -> Result<ContinueStatement> {
        copy_continue_statement(self, node)
    }
    fn rewrite_return_statement(&mut self, node: &ReturnStatement) -> Result<ReturnStatement> {
        copy_return_statement(self, node)
    }
    fn rewrite_exit_statement(&mut self, node: &ExitStatement) -> Result<ExitStatement> {
        copy_exit_statement(self, node)
    }
    fn rewrite_throw_statement(&mut self, node: &ThrowStatement) -> Result<ThrowStatement> {
        copy_throw_statement(self, node)
    }
    fn rewrite_assignment_statement(
        &mut self,
        node: &AssignmentStatement,
    ) -> Result<AssignmentStatement> {
        copy_assignment_statement(self, node)
    }
    fn rewrite_block_statement(&mut self, node: &BlockStatement) -> Result<BlockStatement> {
        copy_block_statement(self, node)
    }
    fn rewrite_error_statement(&mut self, node: &ErrorStatement) -> Result<ErrorStatement> {
        Ok(node.clone())
    }
    fn rewrite_pipeline(&mut self, node: &Pipeline) -> Result<Pipeline> {
        copy_pipeline(self, node)
    }
    fn rewrite_pipeline_element(&mut self, node: &PipelineElement) -> Result<PipelineElement> {
        copy_pipeline_element(self, node)
    }
    fn rewrite_command(&mut self, node: &Command) -> Result<Command> {
        copy_command(self, node)
    }
    fn rewrite_command_expression(
        &mut self,
        node: &CommandExpression,
    ) -> Result<CommandExpression> {
        copy_command_expression(self, node)
    }
    fn rewrite_command_element(&mut self, node: &CommandElement) -> Result<CommandElement> {
        copy_command_element(self, node)
    }
    fn rewrite_command_parameter(&mut self, node: &CommandParameter) -> Result<CommandParameter> {
        copy_command_parameter(self, node)
    }
    fn rewrite_redirection(&mut self, node: &Redirection) -> Result<Redirection> {
        copy_redirection(self, node)
    }
    fn rewrite_file_redirection(&mut self, node: &FileRedirection) -> Result<FileRedirection> {
        copy_file_redirection(self, node)
    }
    fn rewrite_merging_redirection(
        &mut self,
        node: &MergingRedirection,
    ) -> Result<MergingRedirection> {
        Ok(node.clone())
    }
    fn rewrite_type_constraint(&mut self, node: &TypeConstraint) -> Result<TypeConstraint> {
        Ok(node.clone())
    }
    fn rewrite_attribute(&mut self, node: &Attribute) -> Result<Attribute> {
        copy_attribute(self, node)
    }
    fn rewrite_named_attribute_argument(
        &mut self,
        node: &NamedAttributeArgument,
    ) -> Result<NamedAttributeArgument> {
        copy_named_attribute_argument(self, node)
    }
    fn rewrite_parameter(&mut self, node: &Parameter) -> Result<Parameter> {
        copy_parameter(self, node)
    }
    fn rewrite_attribute_base(&mut self, node: &AttributeBase) -> Result<AttributeBase> {
        copy_attribute_base(self, node)
    }
    fn rewrite_expression(&mut self, node: &Expression) -> Result<Expression> {
        copy_expression(self, node)
    }
    fn rewrite_binary_expression(&mut self, node: &BinaryExpression) -> Result<BinaryExpression> {
        copy_binary_expression(self, node)
    }
    fn rewrite_unary_expression(&mut self, node: &UnaryExpression) -> Result<UnaryExpression> {
        copy_unary_expression(self, node)
    }
    fn rewrite_convert_expression(
        &mut self,
        node: &ConvertExpression,
    ) -> Result<ConvertExpression> {
        copy_convert_expression(self, node)
    }
    fn rewrite_type_expression(&mut self, node: &TypeExpression) -> Result<TypeExpression> {
        Ok(node.clone())
    }
    fn rewrite_constant_expression(
        &mut self,
        node: &ConstantExpression,
    ) -> Result<ConstantExpression> {
        Ok(node.clone())
    }
    fn rewrite_string_constant_expression(
        &mut self,
        node: &StringConstantExpression,
    ) -> Result<StringConstantExpression> {
        Ok(node.clone())
    }
    fn rewrite_expandable_string_expression(
        &mut self,
        node: &ExpandableStringExpression,
    ) -> Result<ExpandableStringExpression> {
        Ok(node.clone())
    }
    fn rewrite_sub_expression(&mut self, node: &SubExpression) -> Result<SubExpression> {
        copy_sub_expression(self, node)
    }
    fn rewrite_using_expression(&mut self, node: &UsingExpression) -> Result<UsingExpression> {
        copy_using_expression(self, node)
    }
    fn rewrite_variable_expression(
        &mut self,
        node: &VariableExpression,
    ) -> Result<VariableExpression> {
        Ok(node.clone())
    }
    fn rewrite_member_expression(&mut self, node: &MemberExpression) -> Result<MemberExpression> {
        copy_member_expression(self, node)
    }
    fn rewrite_invoke_member_expression(
        &mut self,
        node: &InvokeMemberExpression,
    ) -> Result<InvokeMemberExpression> {
        copy_invoke_member_expression(self, node)
    }
    fn rewrite_array_expression(&mut self, node: &ArrayExpression) -> Result<ArrayExpression> {
        copy_array_expression(self, node)
    }
    fn rewrite_array_literal(&mut self, node: &ArrayLiteral) -> Result<ArrayLiteral> {
        copy_array_literal(self, node)
    }
    fn rewrite_hashtable(&mut self, node: &HashtableExpression) -> Result<HashtableExpression> {
        copy_hashtable(self, node)
    }
    fn rewrite_script_block_expression(
        &mut self,
        node: &ScriptBlockExpression,
    ) -> Result<ScriptBlockExpression> {
        copy_script_block_expression(self, node)
    }
    fn rewrite_paren_expression(&mut self, node: &ParenExpression) -> Result<ParenExpression> {
        copy_paren_expression(self, node)
    }
    fn rewrite_index_expression(&mut self, node: &IndexExpression) -> Result<IndexExpression> {
        copy_index_expression(self, node)
    }
    fn rewrite_attributed_expression(
        &mut self,
        node: &AttributedExpression,
    ) -> Result<AttributedExpression> {
        copy_attributed_expression(self, node)
    }
    fn rewrite_error_expression(&mut self, node: &ErrorExpression) -> Result<ErrorExpression> {
        Ok(node.clone())
    }
}

fn rewrite_all<T, R, F>(rewriter: &mut R, nodes: &[T], mut f: F) -> Result<Vec<T>>
where
    R: Rewriter + ?Sized,
    F: FnMut(&mut R, &T) -> Result<T>,
{
    nodes.iter().map(|node| f(rewriter, node)).collect()
}

pub fn copy_script_block<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &ScriptBlock,
) -> Result<ScriptBlock> {
    Ok(ScriptBlock {
        extent: node.extent,
        param_block: node
            .param_block
            .as_ref()
            .map(|block| rewriter.rewrite_param_block(block))
            .transpose()?,
        begin_block: node
            .begin_block
            .as_ref()
            .map(|block| rewriter.rewrite_named_block(block))
            .transpose()?,
        process_block: node
            .process_block
            .as_ref()
            .map(|block| rewriter.rewrite_named_block(block))
            .transpose()?,
        end_block: node
            .end_block
            .as_ref()
            .map(|block| rewriter.rewrite_named_block(block))
            .transpose()?,
        dynamic_param_block: node
            .dynamic_param_block
            .as_ref()
            .map(|block| rewriter.rewrite_named_block(block))
            .transpose()?,
    })
}

pub fn copy_named_block<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &NamedBlock,
) -> Result<NamedBlock> {
    Ok(NamedBlock {
        extent: node.extent,
        kind: node.kind,
        unnamed: node.unnamed,
        traps: rewrite_all(rewriter, &node.traps, R::rewrite_trap_statement)?,
        statements: rewrite_all(rewriter, &node.statements, R::rewrite_statement)?,
    })
}

pub fn copy_param_block<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &ParamBlock,
) -> Result<ParamBlock> {
    Ok(ParamBlock {
        extent: node.extent,
        attributes: rewrite_all(rewriter, &node.attributes, R::rewrite_attribute)?,
        parameters: rewrite_all(rewriter, &node.parameters, R::rewrite_parameter)?,
    })
}

pub fn copy_statement_block<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &StatementBlock,
) -> Result<StatementBlock> {
    Ok(StatementBlock {
        extent: node.extent,
        statements: rewrite_all(rewriter, &node.statements, R::rewrite_statement)?,
        traps: rewrite_all(rewriter, &node.traps, R::rewrite_trap_statement)?,
    })
}

pub fn copy_function_definition<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &FunctionDefinition,
) -> Result<FunctionDefinition> {
    Ok(FunctionDefinition {
        extent: node.extent,
        is_filter: node.is_filter,
        is_workflow: node.is_workflow,
        name: node.name.clone(),
        parameters: rewrite_all(rewriter, &node.parameters, R::rewrite_parameter)?,
        body: Box::new(rewriter.rewrite_script_block(&node.body)?),
    })
}

pub fn copy_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &Statement,
) -> Result<Statement> {
    Ok(match node {
        Statement::FunctionDefinition(n) => {
            Statement::FunctionDefinition(rewriter.rewrite_function_definition(n)?)
        }
        Statement::If(n) => Statement::If(rewriter.rewrite_if_statement(n)?),
        Statement::Trap(n) => Statement::Trap(rewriter.rewrite_trap_statement(n)?),
        Statement::Switch(n) => Statement::Switch(rewriter.rewrite_switch_statement(n)?),
        Statement::Data(n) => Statement::Data(rewriter.rewrite_data_statement(n)?),
        Statement::ForEach(n) => Statement::ForEach(rewriter.rewrite_foreach_statement(n)?),
        Statement::For(n) => Statement::For(rewriter.rewrite_for_statement(n)?),
        Statement::While(n) => Statement::While(rewriter.rewrite_while_statement(n)?),
        Statement::DoWhile(n) => Statement::DoWhile(rewriter.rewrite_do_while_statement(n)?),
        Statement::DoUntil(n) => Statement::DoUntil(rewriter.rewrite_do_until_statement(n)?),
        Statement::Try(n) => Statement::Try(rewriter.rewrite_try_statement(n)?),
        Statement::Break(n) => Statement::Break(rewriter.rewrite_break_statement(n)?),
        Statement::Continue(n) => Statement::Continue(rewriter.rewrite_continue_statement(n)?),
        Statement::Return(n) => Statement::Return(rewriter.rewrite_return_statement(n)?),
        Statement::Exit(n) => Statement::Exit(rewriter.rewrite_exit_statement(n)?),
        Statement::Throw(n) => Statement::Throw(rewriter.rewrite_throw_statement(n)?),
        Statement::Assignment(n) => {
            Statement::Assignment(rewriter.rewrite_assignment_statement(n)?)
        }
        Statement::Pipeline(n) => Statement::Pipeline(rewriter.rewrite_pipeline(n)?),
        Statement::Block(n) => Statement::Block(rewriter.rewrite_block_statement(n)?),
        Statement::Error(n) => Statement::Error(rewriter.rewrite_error_statement(n)?),
    })
}

pub fn copy_if_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &IfStatement,
) -> Result<IfStatement> {
    let mut clauses = Vec::with_capacity(node.clauses.len());
    for (condition, body) in &node.clauses {
        clauses.push((
            rewriter.rewrite_pipeline(condition)?,
            rewriter.rewrite_statement_block(body)?,
        ));
    }
    Ok(IfStatement {
        extent: node.extent,
        clauses,
        else_clause: node
            .else_clause
            .as_ref()
            .map(|block| rewriter.rewrite_statement_block(block))
            .transpose()?,
    })
}

pub fn copy_trap_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &TrapStatement,
) -> Result<TrapStatement> {
    Ok(TrapStatement {
        extent: node.extent,
        trap_type: node
            .trap_type
            .as_ref()
            .map(|constraint| rewriter.rewrite_type_constraint(constraint))
            .transpose()?,
        body: rewriter.rewrite_statement_block(&node.body)?,
    })
}

pub fn copy_switch_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &SwitchStatement,
) -> Result<SwitchStatement> {
    let mut clauses = Vec::with_capacity(node.clauses.len());
    for (pattern, body) in &node.clauses {
        clauses.push((
            rewriter.rewrite_expression(pattern)?,
            rewriter.rewrite_statement_block(body)?,
        ));
    }
    Ok(SwitchStatement {
        extent: node.extent,
        label: node.label.clone(),
        flags: node.flags.clone(),
        condition: rewriter.rewrite_pipeline(&node.condition)?,
        clauses,
        default: node
            .default
            .as_ref()
            .map(|block| rewriter.rewrite_statement_block(block))
            .transpose()?,
    })
}

pub fn copy_data_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &DataStatement,
) -> Result<DataStatement> {
    Ok(DataStatement {
        extent: node.extent,
        variable: node.variable.clone(),
        commands_allowed: rewrite_all(rewriter, &node.commands_allowed, R::rewrite_expression)?,
        body: rewriter.rewrite_statement_block(&node.body)?,
    })
}

pub fn copy_foreach_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &ForEachStatement,
) -> Result<ForEachStatement> {
    Ok(ForEachStatement {
        extent: node.extent,
        label: node.label.clone(),
        variable: rewriter.rewrite_variable_expression(&node.variable)?,
        condition: rewriter.rewrite_pipeline(&node.condition)?,
        body: rewriter.rewrite_statement_block(&node.body)?,
    })
}

pub fn copy_for_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &ForStatement,
) -> Result<ForStatement> {
    Ok(ForStatement {
        extent: node.extent,
        label: node.label.clone(),
        initializer: node
            .initializer
            .as_ref()
            .map(|pipeline| rewriter.rewrite_pipeline(pipeline))
            .transpose()?,
        condition: node
            .condition
            .as_ref()
            .map(|pipeline| rewriter.rewrite_pipeline(pipeline))
            .transpose()?,
        iterator: node
            .iterator
            .as_ref()
            .map(|pipeline| rewriter.rewrite_pipeline(pipeline))
            .transpose()?,
        body: rewriter.rewrite_statement_block(&node.body)?,
    })
}

pub fn copy_while_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &WhileStatement,
) -> Result<WhileStatement> {
    Ok(WhileStatement {
        extent: node.extent,
        label: node.label.clone(),
        condition: rewriter.rewrite_pipeline(&node.condition)?,
        body: rewriter.rewrite_statement_block(&node.body)?,
    })
}

pub fn copy_do_while_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &DoWhileStatement,
) -> Result<DoWhileStatement> {
    Ok(DoWhileStatement {
        extent: node.extent,
        label: node.label.clone(),
        condition: rewriter.rewrite_pipeline(&node.condition)?,
        body: rewriter.rewrite_statement_block(&node.body)?,
    })
}

pub fn copy_do_until_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &DoUntilStatement,
) -> Result<DoUntilStatement> {
    Ok(DoUntilStatement {
        extent: node.extent,
        label: node.label.clone(),
        condition: rewriter.rewrite_pipeline(&node.condition)?,
        body: rewriter.rewrite_statement_block(&node.body)?,
    })
}

pub fn copy_try_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &TryStatement,
) -> Result<TryStatement> {
    Ok(TryStatement {
        extent: node.extent,
        body: rewriter.rewrite_statement_block(&node.body)?,
        catch_clauses: rewrite_all(rewriter, &node.catch_clauses, R::rewrite_catch_clause)?,
        finally_clause: node
            .finally_clause
            .as_ref()
            .map(|block| rewriter.rewrite_statement_block(block))
            .transpose()?,
    })
}

pub fn copy_catch_clause<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &CatchClause,
) -> Result<CatchClause> {
    Ok(CatchClause {
        extent: node.extent,
        catch_types: rewrite_all(rewriter, &node.catch_types, R::rewrite_type_constraint)?,
        body: rewriter.rewrite_statement_block(&node.body)?,
    })
}

pub fn copy_break_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &BreakStatement,
) -> Result<BreakStatement> {
    Ok(BreakStatement {
        extent: node.extent,
        label: node
            .label
            .as_ref()
            .map(|label| rewriter.rewrite_expression(label))
            .transpose()?,
    })
}

pub fn copy_continue_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &ContinueStatement,
) -> Result<ContinueStatement> {
    Ok(ContinueStatement {
        extent: node.extent,
        label: node
            .label
            .as_ref()
            .map(|label| rewriter.rewrite_expression(label))
            .transpose()?,
    })
}

pub fn copy_return_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &ReturnStatement,
) -> Result<ReturnStatement> {
    Ok(ReturnStatement {
        extent: node.extent,
        pipeline: node
            .pipeline
            .as_ref()
            .map(|pipeline| rewriter.rewrite_pipeline(pipeline))
            .transpose()?,
    })
}

pub fn copy_exit_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &ExitStatement,
) -> Result<ExitStatement> {
    Ok(ExitStatement {
        extent: node.extent,
        pipeline: node
            .pipeline
            .as_ref()
            .map(|pipeline| rewriter.rewrite_pipeline(pipeline))
            .transpose()?,
    })
}

pub fn copy_throw_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &ThrowStatement,
) -> Result<ThrowStatement> {
    Ok(ThrowStatement {
        extent: node.extent,
        pipeline: node
            .pipeline
            .as_ref()
            .map(|pipeline| rewriter.rewrite_pipeline(pipeline))
            .transpose()?,
    })
}

pub fn copy_assignment_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &AssignmentStatement,
) -> Result<AssignmentStatement> {
    Ok(AssignmentStatement {
        extent: node.extent,
        left: rewriter.rewrite_expression(&node.left)?,
        operator: node.operator,
        right: Box::new(rewriter.rewrite_statement(&node.right)?),
    })
}

pub fn copy_block_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &BlockStatement,
) -> Result<BlockStatement> {
    Ok(BlockStatement {
        extent: node.extent,
        keyword: node.keyword,
        body: rewriter.rewrite_statement_block(&node.body)?,
    })
}

pub fn copy_pipeline<R: Rewriter + ?Sized>(rewriter: &mut R, node: &Pipeline) -> Result<Pipeline> {
    Ok(Pipeline {
        extent: node.extent,
        elements: rewrite_all(rewriter, &node.elements, R::rewrite_pipeline_element)?,
    })
}

pub fn copy_pipeline_element<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &PipelineElement,
) -> Result<PipelineElement> {
    Ok(match node {
        PipelineElement::Command(n) => PipelineElement::Command(rewriter.rewrite_command(n)?),
        PipelineElement::Expression(n) => {
            PipelineElement::Expression(rewriter.rewrite_command_expression(n)?)
        }
    })
}

pub fn copy_command<R: Rewriter + ?Sized>(rewriter: &mut R, node: &Command) -> Result<Command> {
    Ok(Command {
        extent: node.extent,
        elements: rewrite_all(rewriter, &node.elements, R::rewrite_command_element)?,
        invocation_operator: node.invocation_operator,
        redirections: rewrite_all(rewriter, &node.redirections, R::rewrite_redirection)?,
    })
}

pub fn copy_command_expression<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &CommandExpression,
) -> Result<CommandExpression> {
    Ok(CommandExpression {
        extent: node.extent,
        expression: rewriter.rewrite_expression(&node.expression)?,
        redirections: rewrite_all(rewriter, &node.redirections, R::rewrite_redirection)?,
    })
}

pub fn copy_command_element<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &CommandElement,
) -> Result<CommandElement> {
    Ok(match node {
        CommandElement::Expression(n) => {
            CommandElement::Expression(rewriter.rewrite_expression(n)?)
        }
        CommandElement::Parameter(n) => {
            CommandElement::Parameter(rewriter.rewrite_command_parameter(n)?)
        }
    })
}

pub fn copy_command_parameter<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &CommandParameter,
) -> Result<CommandParameter> {
    Ok(CommandParameter {
        extent: node.extent,
        name: node.name.clone(),
        argument: node
            .argument
            .as_ref()
            .map(|argument| rewriter.rewrite_expression(argument))
            .transpose()?,
    })
}

pub fn copy_redirection<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &Redirection,
) -> Result<Redirection> {
    Ok(match node {
        Redirection::File(n) => Redirection::File(rewriter.rewrite_file_redirection(n)?),
        Redirection::Merging(n) => Redirection::Merging(rewriter.rewrite_merging_redirection(n)?),
    })
}

pub fn copy_file_redirection<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &FileRedirection,
) -> Result<FileRedirection> {
    Ok(FileRedirection {
        extent: node.extent,
        from_stream: node.from_stream,
        location: rewriter.rewrite_expression(&node.location)?,
        append: node.append,
    })
}

pub fn copy_attribute<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &Attribute,
) -> Result<Attribute> {
    Ok(Attribute {
        extent: node.extent,
        type_name: node.type_name.clone(),
        positional_arguments: rewrite_all(
            rewriter,
            &node.positional_arguments,
            R::rewrite_expression,
        )?,
        named_arguments: rewrite_all(
            rewriter,
            &node.named_arguments,
            R::rewrite_named_attribute_argument,
        )?,
    })
}

pub fn copy_named_attribute_argument<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &NamedAttributeArgument,
) -> Result<NamedAttributeArgument> {
    Ok(NamedAttributeArgument {
        extent: node.extent,
        argument_name: node.argument_name.clone(),
        argument: rewriter.rewrite_expression(&node.argument)?,
        expression_omitted: node.expression_omitted,
    })
}

pub fn copy_parameter<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &Parameter,
) -> Result<Parameter> {
    Ok(Parameter {
        extent: node.extent,
        name: rewriter.rewrite_variable_expression(&node.name)?,
        attributes: rewrite_all(rewriter, &node.attributes, R::rewrite_attribute_base)?,
        default_value: node
            .default_value
            .as_ref()
            .map(|value| rewriter.rewrite_expression(value))
            .transpose()?,
    })
}

pub fn copy_attribute_base<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &AttributeBase,
) -> Result<AttributeBase> {
    Ok(match node {
        AttributeBase::TypeConstraint(n) => {
            AttributeBase::TypeConstraint(rewriter.rewrite_type_constraint(n)?)
        }
        AttributeBase::Attribute(n) => AttributeBase::Attribute(rewriter.rewrite_attribute(n)?),
    })
}

pub fn copy_expression<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &Expression,
) -> Result<Expression> {
    Ok(match node {
        Expression::Binary(n) => Expression::Binary(rewriter.rewrite_binary_expression(n)?),
        Expression::Unary(n) => Expression::Unary(rewriter.rewrite_unary_expression(n)?),
        Expression::Convert(n) => Expression::Convert(rewriter.rewrite_convert_expression(n)?),
        Expression::Type(n) => Expression::Type(rewriter.rewrite_type_expression(n)?),
        Expression::Constant(n) => Expression::Constant(rewriter.rewrite_constant_expression(n)?),
        Expression::StringConstant(n) => {
            Expression::StringConstant(rewriter.rewrite_string_constant_expression(n)?)
        }
        Expression::ExpandableString(n) => {
            Expression::ExpandableString(rewriter.rewrite_expandable_string_expression(n)?)
        }
        Expression::Sub(n) => Expression::Sub(rewriter.rewrite_sub_expression(n)?),
        Expression::Using(n) => Expression::Using(rewriter.rewrite_using_expression(n)?),
        Expression::Variable(n) => {
            Expression::Variable(rewriter.rewrite_variable_expression(n)?)
        }
        Expression::Member(n) => Expression::Member(rewriter.rewrite_member_expression(n)?),
        Expression::InvokeMember(n) => {
            Expression::InvokeMember(rewriter.rewrite_invoke_member_expression(n)?)
        }
        Expression::Array(n) => Expression::Array(rewriter.rewrite_array_expression(n)?),
        Expression::ArrayLiteral(n) => {
            Expression::ArrayLiteral(rewriter.rewrite_array_literal(n)?)
        }
        Expression::Hashtable(n) => Expression::Hashtable(rewriter.rewrite_hashtable(n)?),
        Expression::ScriptBlock(n) => {
            Expression::ScriptBlock(rewriter.rewrite_script_block_expression(n)?)
        }
        Expression::Paren(n) => Expression::Paren(rewriter.rewrite_paren_expression(n)?),
        Expression::Index(n) => Expression::Index(rewriter.rewrite_index_expression(n)?),
        Expression::Attributed(n) => {
            Expression::Attributed(rewriter.rewrite_attributed_expression(n)?)
        }
        Expression::Error(n) => Expression::Error(rewriter.rewrite_error_expression(n)?),
    })
}

pub fn copy_binary_expression<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &BinaryExpression,
) -> Result<BinaryExpression> {
    Ok(BinaryExpression {
        extent: node.extent,
        left: Box::new(rewriter.rewrite_expression(&node.left)?),
        operator: node.operator,
        right: Box::new(rewriter.rewrite_expression(&node.right)?),
    })
}

pub fn copy_unary_expression<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &UnaryExpression,
) -> Result<UnaryExpression> {
    Ok(UnaryExpression {
        extent: node.extent,
        operator: node.operator,
        child: Box::new(rewriter.rewrite_expression(&node.child)?),
    })
}

pub fn copy_convert_expression<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &ConvertExpression,
) -> Result<ConvertExpression> {
    Ok(ConvertExpression {
        extent: node.extent,
        type_constraint: rewriter.rewrite_type_constraint(&node.type_constraint)?,
        child: Box::new(rewriter.rewrite_expression(&node.child)?),
    })
}

pub fn copy_sub_expression<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &SubExpression,
) -> Result<SubExpression> {
    Ok(SubExpression {
        extent: node.extent,
        statements: rewriter.rewrite_statement_block(&node.statements)?,
    })
}

pub fn copy_using_expression<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &UsingExpression,
) -> Result<UsingExpression> {
    Ok(UsingExpression {
        extent: node.extent,
        sub_expression: Box::new(rewriter.rewrite_expression(&node.sub_expression)?),
    })
}

pub fn copy_member_expression<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &MemberExpression,
) -> Result<MemberExpression> {
    Ok(MemberExpression {
        extent: node.extent,
        expression: Box::new(rewriter.rewrite_expression(&node.expression)?),
        member: Box::new(rewriter.rewrite_expression(&node.member)?),
        static_access: node.static_access,
    })
}

pub fn copy_invoke_member_expression<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &InvokeMemberExpression,
) -> Result<InvokeMemberExpression> {
    Ok(InvokeMemberExpression {
        extent: node.extent,
        expression: Box::new(rewriter.rewrite_expression(&node.expression)?),
        member: Box::new(rewriter.rewrite_expression(&node.member)?),
        arguments: rewrite_all(rewriter, &node.arguments, R::rewrite_expression)?,
        static_access: node.static_access,
    })
}

pub fn copy_array_expression<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &ArrayExpression,
) -> Result<ArrayExpression> {
    Ok(ArrayExpression {
        extent: node.extent,
        statements: rewriter.rewrite_statement_block(&node.statements)?,
    })
}

pub fn copy_array_literal<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &ArrayLiteral,
) -> Result<ArrayLiteral> {
    Ok(ArrayLiteral {
        extent: node.extent,
        elements: rewrite_all(rewriter, &node.elements, R::rewrite_expression)?,
    })
}

pub fn copy_hashtable<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &HashtableExpression,
) -> Result<HashtableExpression> {
    let mut entries = Vec::with_capacity(node.entries.len());
    for (key, value) in &node.entries {
        entries.push((
            rewriter.rewrite_expression(key)?,
            rewriter.rewrite_statement(value)?,
        ));
    }
    Ok(HashtableExpression {
        extent: node.extent,
        entries,
    })
}

pub fn copy_script_block_expression<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &ScriptBlockExpression,
) -> Result<ScriptBlockExpression> {
    Ok(ScriptBlockExpression {
        extent: node.extent,
        script_block: Box::new(rewriter.rewrite_script_block(&node.script_block)?),
    })
}

pub fn copy_paren_expression<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &ParenExpression,
) -> Result<ParenExpression> {
    Ok(ParenExpression {
        extent: node.extent,
        pipeline: rewriter.rewrite_pipeline(&node.pipeline)?,
    })
}

pub fn copy_index_expression<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &IndexExpression,
) -> Result<IndexExpression> {
    Ok(IndexExpression {
        extent: node.extent,
        target: Box::new(rewriter.rewrite_expression(&node.target)?),
        index: Box::new(rewriter.rewrite_expression(&node.index)?),
    })
}

pub fn copy_attributed_expression<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    node: &AttributedExpression,
) -> Result<AttributedExpression> {
    Ok(AttributedExpression {
        extent: node.extent,
        attribute: rewriter.rewrite_attribute_base(&node.attribute)?,
        child: Box::new(rewriter.rewrite_expression(&node.child)?),
    })
}
