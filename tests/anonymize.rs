// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Traversal, harvesting, allocation and whole-pipeline tests.

use poshmin::visitor::walk_script_block;
use poshmin::{
    anonymize, obfuscate, AnonymizeOptions, BinaryExpression, BinaryOperator, BlockKind,
    CommandExpression, ConstantExpression, ConstantValue, Diagnostic, Error, Expression, Extent,
    FunctionDefinition, IdentifierCollector, IdentifierKind, NameTable, NamedBlock, ParamBlock,
    Parameter, ParseOutcome, Pipeline, PipelineElement, ReturnStatement, Rewriter, ScriptBlock,
    Statement, VariableExpression, VisitResult, Visitor,
};

fn ext() -> Extent {
    Extent::default()
}

fn vexpr(name: &str) -> VariableExpression {
    VariableExpression {
        extent: ext(),
        name: name.to_string(),
        splatted: false,
    }
}

fn var(name: &str) -> Expression {
    Expression::Variable(vexpr(name))
}

fn int(value: i64) -> Expression {
    Expression::Constant(ConstantExpression {
        extent: ext(),
        value: ConstantValue::Int(value),
    })
}

fn pipeline_of(expression: Expression) -> Pipeline {
    Pipeline {
        extent: ext(),
        elements: vec![PipelineElement::Expression(CommandExpression {
            extent: ext(),
            expression,
            redirections: Vec::new(),
        })],
    }
}

fn expr_stmt(expression: Expression) -> Statement {
    Statement::Pipeline(pipeline_of(expression))
}

fn script(statements: Vec<Statement>) -> ScriptBlock {
    ScriptBlock {
        extent: ext(),
        param_block: None,
        begin_block: None,
        process_block: None,
        end_block: Some(NamedBlock {
            extent: ext(),
            kind: BlockKind::End,
            unnamed: true,
            traps: Vec::new(),
            statements,
        }),
        dynamic_param_block: None,
    }
}

/// `function Foo { param($Bar) return $Bar + 1 }`
fn foo_bar_tree() -> ScriptBlock {
    let body = ScriptBlock {
        extent: ext(),
        param_block: Some(ParamBlock {
            extent: ext(),
            attributes: Vec::new(),
            parameters: vec![Parameter {
                extent: ext(),
                name: vexpr("Bar"),
                attributes: Vec::new(),
                default_value: None,
            }],
        }),
        begin_block: None,
        process_block: None,
        end_block: Some(NamedBlock {
            extent: ext(),
            kind: BlockKind::End,
            unnamed: true,
            traps: Vec::new(),
            statements: vec![Statement::Return(ReturnStatement {
                extent: ext(),
                pipeline: Some(pipeline_of(Expression::Binary(BinaryExpression {
                    extent: ext(),
                    left: Box::new(var("Bar")),
                    operator: BinaryOperator::Plus,
                    right: Box::new(int(1)),
                }))),
            })],
        }),
        dynamic_param_block: None,
    };
    script(vec![Statement::FunctionDefinition(FunctionDefinition {
        extent: ext(),
        is_filter: false,
        is_workflow: false,
        name: "Foo".to_string(),
        parameters: Vec::new(),
        body: Box::new(body),
    })])
}

fn options(seed: u64, alphabet: &str) -> AnonymizeOptions {
    AnonymizeOptions {
        seed,
        alphabet: alphabet.to_string(),
        min_length: 1,
    }
}

#[derive(Default)]
struct VariableCounter {
    count: usize,
    stop_after: Option<usize>,
}

impl Visitor for VariableCounter {
    fn visit_variable_expression(&mut self, _node: &VariableExpression) -> VisitResult {
        self.count += 1;
        match self.stop_after {
            Some(limit) if self.count >= limit => VisitResult::Stop,
            _ => VisitResult::Continue,
        }
    }
}

#[test]
fn walk_visits_every_variable_once() {
    let tree = foo_bar_tree();
    let mut counter = VariableCounter::default();
    walk_script_block(&mut counter, &tree);
    // The declared parameter and the reference in the return expression.
    assert_eq!(counter.count, 2);
}

#[test]
fn stop_halts_the_walk() {
    let tree = foo_bar_tree();
    let mut counter = VariableCounter {
        count: 0,
        stop_after: Some(1),
    };
    let result = walk_script_block(&mut counter, &tree);
    assert_eq!(result, VisitResult::Stop);
    assert_eq!(counter.count, 1);
}

struct Identity;

impl Rewriter for Identity {}

#[test]
fn default_rewriter_reproduces_the_tree() {
    let tree = foo_bar_tree();
    let copy = Identity.rewrite_script_block(&tree).expect("rewrite failed");
    assert_eq!(copy, tree);
}

#[test]
fn harvest_is_case_insensitive_and_skips_constants() {
    let tree = script(vec![
        expr_stmt(var("Count")),
        expr_stmt(var("count")),
        expr_stmt(var("true")),
        expr_stmt(var("null")),
        expr_stmt(var("other")),
    ]);
    let names = IdentifierCollector::new(IdentifierKind::Variable).harvest(&tree);
    assert_eq!(names, vec!["Count".to_string(), "other".to_string()]);
}

#[test]
fn harvest_strips_function_qualifiers() {
    let tree = script(vec![Statement::FunctionDefinition(FunctionDefinition {
        extent: ext(),
        is_filter: false,
        is_workflow: false,
        name: "global:Install".to_string(),
        parameters: Vec::new(),
        body: Box::new(script(Vec::new())),
    })]);
    let names = IdentifierCollector::new(IdentifierKind::FunctionName).harvest(&tree);
    assert_eq!(names, vec!["Install".to_string()]);
}

#[test]
fn name_table_is_deterministic() {
    let identifiers: Vec<String> = (0..20).map(|i| format!("var{i}")).collect();
    let opts = options(7, "xyz");
    let first = NameTable::build(&identifiers, IdentifierKind::Variable, &opts);
    let second = NameTable::build(&identifiers, IdentifierKind::Variable, &opts);
    assert_eq!(first, second);
}

#[test]
fn name_table_is_injective() {
    let identifiers: Vec<String> = (0..40).map(|i| format!("var{i}")).collect();
    let table = NameTable::build(&identifiers, IdentifierKind::FunctionName, &options(3, "ab"));
    let mut assigned: Vec<&str> = identifiers
        .iter()
        .map(|name| table.lookup(name).expect("missing entry"))
        .collect();
    assigned.sort_unstable();
    let before = assigned.len();
    assigned.dedup();
    assert_eq!(assigned.len(), before);
}

#[test]
fn blacklisted_variables_map_to_themselves() {
    let identifiers = vec!["args".to_string(), "myVar".to_string()];
    for seed in [0, 1, 42, 999] {
        let table = NameTable::build(&identifiers, IdentifierKind::Variable, &options(seed, "ab"));
        assert_eq!(table.lookup("args"), Some("args"));
        assert_eq!(table.lookup("ErrorActionPreference"), Some("ErrorActionPreference"));
    }
}

#[test]
fn blacklist_applies_only_to_variables() {
    let identifiers = vec!["install".to_string()];
    let table = NameTable::build(
        &identifiers,
        IdentifierKind::FunctionName,
        &options(0, "ab"),
    );
    assert_eq!(table.lookup("args"), None);
}

#[test]
fn name_table_serializes_as_plain_map() {
    let table = NameTable::build(&["Bar".to_string()], IdentifierKind::FunctionName, &options(42, "ab"));
    let json = serde_json::to_value(&table).expect("serialize failed");
    let object = json.as_object().expect("expected a map");
    assert_eq!(object.len(), 1);
    let renamed = object["bar"].as_str().expect("expected a string");
    assert!(renamed.chars().all(|c| c == 'a' || c == 'b'));
}

#[test]
fn anonymize_renames_variables_and_preserves_shape() {
    let tree = foo_bar_tree();
    let renamed = anonymize(&tree, IdentifierKind::Variable, &options(42, "ab"))
        .expect("anonymize failed");
    assert_ne!(renamed, tree);

    let Statement::FunctionDefinition(function) =
        &renamed.end_block.as_ref().unwrap().statements[0]
    else {
        panic!("expected a function definition");
    };
    // The function name belongs to the other identifier kind.
    assert_eq!(function.name, "Foo");

    let param_block = function.body.param_block.as_ref().unwrap();
    let param_name = &param_block.parameters[0].name.name;
    assert!(!param_name.is_empty() && param_name.len() <= 2);
    assert!(param_name.chars().all(|c| c == 'a' || c == 'b'));

    // The reference in the return expression got the same replacement.
    let Statement::Return(ret) = &function.body.end_block.as_ref().unwrap().statements[0] else {
        panic!("expected a return statement");
    };
    let pipeline = ret.pipeline.as_ref().unwrap();
    let PipelineElement::Expression(command) = &pipeline.elements[0] else {
        panic!("expected a command expression");
    };
    let Expression::Binary(binary) = &command.expression else {
        panic!("expected a binary expression");
    };
    let Expression::Variable(reference) = binary.left.as_ref() else {
        panic!("expected a variable reference");
    };
    assert_eq!(&reference.name, param_name);
}

#[test]
fn anonymize_runs_are_identical() {
    let tree = foo_bar_tree();
    let opts = options(42, "ab");
    let first = anonymize(&tree, IdentifierKind::Variable, &opts).expect("anonymize failed");
    let second = anonymize(&tree, IdentifierKind::Variable, &opts).expect("anonymize failed");
    assert_eq!(first, second);
}

#[test]
fn constant_references_survive_renaming() {
    let tree = script(vec![expr_stmt(var("true")), expr_stmt(var("x"))]);
    let renamed =
        anonymize(&tree, IdentifierKind::Variable, &options(5, "ab")).expect("anonymize failed");
    let statements = &renamed.end_block.as_ref().unwrap().statements;
    let PipelineElement::Expression(first) = &as_pipeline(&statements[0]).elements[0] else {
        panic!("expected a command expression");
    };
    assert_eq!(first.expression, var("true"));
}

fn as_pipeline(statement: &Statement) -> &Pipeline {
    match statement {
        Statement::Pipeline(pipeline) => pipeline,
        _ => panic!("expected a pipeline statement"),
    }
}

#[test]
fn global_qualifier_is_reattached() {
    let tree = script(vec![
        expr_stmt(var("global:Counter")),
        expr_stmt(var("Counter")),
    ]);
    let renamed =
        anonymize(&tree, IdentifierKind::Variable, &options(9, "ab")).expect("anonymize failed");
    let statements = &renamed.end_block.as_ref().unwrap().statements;

    let name_of = |statement: &Statement| -> String {
        let PipelineElement::Expression(command) = &as_pipeline(statement).elements[0] else {
            panic!("expected a command expression");
        };
        let Expression::Variable(variable) = &command.expression else {
            panic!("expected a variable reference");
        };
        variable.name.clone()
    };

    let qualified = name_of(&statements[0]);
    let bare = name_of(&statements[1]);
    assert_eq!(qualified, format!("global:{bare}"));
}

#[test]
fn function_call_sites_are_renamed_through_string_constants() {
    use poshmin::{Command, CommandElement, InvocationOperator, StringConstantExpression, StringKind};

    let call = Statement::Pipeline(Pipeline {
        extent: ext(),
        elements: vec![PipelineElement::Command(Command {
            extent: ext(),
            elements: vec![CommandElement::Expression(Expression::StringConstant(
                StringConstantExpression {
                    extent: ext(),
                    value: "Foo".to_string(),
                    kind: StringKind::BareWord,
                },
            ))],
            invocation_operator: InvocationOperator::None,
            redirections: Vec::new(),
        })],
    });
    let mut tree = foo_bar_tree();
    tree.end_block.as_mut().unwrap().statements.push(call);

    let renamed = anonymize(&tree, IdentifierKind::FunctionName, &options(42, "ab"))
        .expect("anonymize failed");
    let statements = &renamed.end_block.as_ref().unwrap().statements;
    let Statement::FunctionDefinition(function) = &statements[0] else {
        panic!("expected a function definition");
    };
    let PipelineElement::Command(command) = &as_pipeline(&statements[1]).elements[0] else {
        panic!("expected a command");
    };
    let CommandElement::Expression(Expression::StringConstant(name)) = &command.elements[0] else {
        panic!("expected a string constant command name");
    };
    assert_eq!(name.value, function.name);
    assert!(function.name.chars().all(|c| c == 'a' || c == 'b'));
}

#[test]
fn pipeline_output_is_reproducible() {
    let outcome = ParseOutcome {
        tree: Some(foo_bar_tree()),
        diagnostics: Vec::new(),
    };
    let opts = options(42, "ab");
    let first = obfuscate(&outcome, &opts).expect("obfuscate failed");
    let second = obfuscate(&outcome, &opts).expect("obfuscate failed");
    assert_eq!(first, second);
    assert!(first.starts_with("function "));
    assert!(first.contains("param("));
    assert!(first.contains("return "));
    assert!(first.contains("+1"));
}

#[test]
fn diagnostics_abort_the_pipeline() {
    let outcome = ParseOutcome {
        tree: Some(script(Vec::new())),
        diagnostics: vec![Diagnostic {
            message: "unexpected token".to_string(),
            extent: None,
        }],
    };
    let result = obfuscate(&outcome, &AnonymizeOptions::default());
    assert!(matches!(
        result,
        Err(Error::Parse { diagnostics }) if diagnostics.len() == 1
    ));
}

#[test]
fn missing_tree_is_a_parse_error() {
    let outcome = ParseOutcome {
        tree: None,
        diagnostics: Vec::new(),
    };
    assert!(matches!(
        obfuscate(&outcome, &AnonymizeOptions::default()),
        Err(Error::Parse { .. })
    ));
}
