// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Golden rendering tests: hand-built trees against the exact minified text.

use poshmin::{
    render, AssignmentOperator, AssignmentStatement, Attribute, AttributeBase, BinaryExpression,
    BinaryOperator, BlockKind, CatchClause, Command, CommandElement, CommandExpression,
    CommandParameter, ConstantExpression, ConstantValue, Error, Expression, ErrorStatement,
    Extent, FileRedirection, ForEachStatement, ForStatement, FunctionDefinition,
    HashtableExpression, IfStatement, InvocationOperator, InvokeMemberExpression,
    MemberExpression, MergingRedirection, NamedAttributeArgument, NamedBlock, ParamBlock,
    Parameter, Pipeline, PipelineElement, Redirection, RedirectionStream, ReturnStatement,
    ScriptBlock, Statement, StatementBlock, StringConstantExpression, StringKind, SwitchFlag,
    SwitchStatement, ThrowStatement, TrapStatement, TryStatement, TypeConstraint, TypeExpression,
    UnaryExpression, UnaryOperator, VariableExpression,
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

fn bare(value: &str) -> Expression {
    Expression::StringConstant(StringConstantExpression {
        extent: ext(),
        value: value.to_string(),
        kind: StringKind::BareWord,
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

fn block(statements: Vec<Statement>) -> StatementBlock {
    StatementBlock {
        extent: ext(),
        statements,
        traps: Vec::new(),
    }
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

fn rendered(statements: Vec<Statement>) -> String {
    render(&script(statements)).expect("render failed")
}

#[test]
fn assignment_operators() {
    let stmt = Statement::Assignment(AssignmentStatement {
        extent: ext(),
        left: var("x"),
        operator: AssignmentOperator::Equals,
        right: Box::new(expr_stmt(int(1))),
    });
    assert_eq!(rendered(vec![stmt]), "$x=1");

    let stmt = Statement::Assignment(AssignmentStatement {
        extent: ext(),
        left: var("x"),
        operator: AssignmentOperator::PlusEquals,
        right: Box::new(expr_stmt(int(2))),
    });
    assert_eq!(rendered(vec![stmt]), "$x+=2");
}

#[test]
fn statements_joined_with_semicolons() {
    let statements = vec![expr_stmt(int(1)), expr_stmt(int(2)), expr_stmt(int(3))];
    assert_eq!(rendered(statements), "1;2;3");
}

#[test]
fn if_elseif_else() {
    let stmt = Statement::If(IfStatement {
        extent: ext(),
        clauses: vec![
            (pipeline_of(var("a")), block(vec![expr_stmt(int(1))])),
            (pipeline_of(var("b")), block(vec![expr_stmt(int(2))])),
        ],
        else_clause: Some(block(vec![expr_stmt(int(3))])),
    });
    assert_eq!(rendered(vec![stmt]), "if($a){1}elseif($b){2}else{3}");
}

#[test]
fn function_definition_with_parameters() {
    let stmt = Statement::FunctionDefinition(FunctionDefinition {
        extent: ext(),
        is_filter: false,
        is_workflow: false,
        name: "Get-Thing".to_string(),
        parameters: vec![Parameter {
            extent: ext(),
            name: vexpr("x"),
            attributes: Vec::new(),
            default_value: None,
        }],
        body: Box::new(script(vec![expr_stmt(var("x"))])),
    });
    assert_eq!(rendered(vec![stmt]), "function Get-Thing($x){$x}");
}

#[test]
fn filter_keyword() {
    let stmt = Statement::FunctionDefinition(FunctionDefinition {
        extent: ext(),
        is_filter: true,
        is_workflow: false,
        name: "f".to_string(),
        parameters: Vec::new(),
        body: Box::new(script(Vec::new())),
    });
    assert_eq!(rendered(vec![stmt]), "filter f{}");
}

#[test]
fn foreach_loop() {
    let stmt = Statement::ForEach(ForEachStatement {
        extent: ext(),
        label: None,
        variable: vexpr("i"),
        condition: pipeline_of(var("list")),
        body: block(vec![expr_stmt(var("i"))]),
    });
    assert_eq!(rendered(vec![stmt]), "foreach($i in $list){$i}");
}

#[test]
fn for_loop_with_empty_slots() {
    let stmt = Statement::For(ForStatement {
        extent: ext(),
        label: None,
        initializer: None,
        condition: Some(pipeline_of(var("x"))),
        iterator: None,
        body: block(Vec::new()),
    });
    assert_eq!(rendered(vec![stmt]), "for(;$x;){}");
}

#[test]
fn labeled_switch_with_flags_and_default() {
    let stmt = Statement::Switch(SwitchStatement {
        extent: ext(),
        label: Some("outer".to_string()),
        flags: vec![SwitchFlag::Regex],
        condition: pipeline_of(var("x")),
        clauses: vec![(bare("a"), block(vec![expr_stmt(int(1))]))],
        default: Some(block(Vec::new())),
    });
    assert_eq!(rendered(vec![stmt]), ":outer switch -regex($x){a{1}default{}}");
}

#[test]
fn try_catch_finally() {
    let stmt = Statement::Try(TryStatement {
        extent: ext(),
        body: block(vec![expr_stmt(int(1))]),
        catch_clauses: vec![CatchClause {
            extent: ext(),
            catch_types: vec![TypeConstraint {
                extent: ext(),
                type_name: "System.Exception".to_string(),
            }],
            body: block(Vec::new()),
        }],
        finally_clause: Some(block(Vec::new())),
    });
    assert_eq!(
        rendered(vec![stmt]),
        "try{1}catch [System.Exception]{}finally{}"
    );
}

#[test]
fn trap_with_type_constraint() {
    let stmt = Statement::Trap(TrapStatement {
        extent: ext(),
        trap_type: Some(TypeConstraint {
            extent: ext(),
            type_name: "System.IO.IOException".to_string(),
        }),
        body: block(Vec::new()),
    });
    assert_eq!(rendered(vec![stmt]), "trap[System.IO.IOException]{}");
}

#[test]
fn do_loops() {
    let stmt = Statement::DoWhile(poshmin::DoWhileStatement {
        extent: ext(),
        label: None,
        condition: pipeline_of(var("y")),
        body: block(vec![expr_stmt(var("x"))]),
    });
    assert_eq!(rendered(vec![stmt]), "do{$x}while($y)");

    let stmt = Statement::DoUntil(poshmin::DoUntilStatement {
        extent: ext(),
        label: None,
        condition: pipeline_of(var("y")),
        body: block(Vec::new()),
    });
    assert_eq!(rendered(vec![stmt]), "do{}until($y)");
}

#[test]
fn return_exit_throw() {
    let ret = Statement::Return(ReturnStatement {
        extent: ext(),
        pipeline: None,
    });
    assert_eq!(rendered(vec![ret]), "return");

    let exit = Statement::Exit(poshmin::ExitStatement {
        extent: ext(),
        pipeline: Some(pipeline_of(int(1))),
    });
    assert_eq!(rendered(vec![exit]), "exit 1");

    let throw = Statement::Throw(ThrowStatement {
        extent: ext(),
        pipeline: Some(pipeline_of(var("e"))),
    });
    assert_eq!(rendered(vec![throw]), "throw $e");
}

#[test]
fn command_with_parameter_argument_and_redirection() {
    let command = Command {
        extent: ext(),
        elements: vec![
            CommandElement::Expression(bare("Get-Item")),
            CommandElement::Parameter(CommandParameter {
                extent: ext(),
                name: "Path".to_string(),
                argument: Some(bare("log.txt")),
            }),
        ],
        invocation_operator: InvocationOperator::None,
        redirections: vec![Redirection::File(FileRedirection {
            extent: ext(),
            from_stream: RedirectionStream::Error,
            location: bare("err.txt"),
            append: true,
        })],
    };
    let stmt = Statement::Pipeline(Pipeline {
        extent: ext(),
        elements: vec![PipelineElement::Command(command)],
    });
    assert_eq!(rendered(vec![stmt]), "Get-Item -Path:log.txt 2>>err.txt");
}

#[test]
fn invocation_operators() {
    let command = |op| {
        Statement::Pipeline(Pipeline {
            extent: ext(),
            elements: vec![PipelineElement::Command(Command {
                extent: ext(),
                elements: vec![CommandElement::Expression(bare("helper.ps1"))],
                invocation_operator: op,
                redirections: Vec::new(),
            })],
        })
    };
    assert_eq!(rendered(vec![command(InvocationOperator::Ampersand)]), "& helper.ps1");
    assert_eq!(rendered(vec![command(InvocationOperator::Dot)]), ". helper.ps1");
}

#[test]
fn pipeline_stages_joined_with_bar() {
    let stage = |name: &str| {
        PipelineElement::Command(Command {
            extent: ext(),
            elements: vec![CommandElement::Expression(bare(name))],
            invocation_operator: InvocationOperator::None,
            redirections: Vec::new(),
        })
    };
    let stmt = Statement::Pipeline(Pipeline {
        extent: ext(),
        elements: vec![stage("Get-Process"), stage("Sort-Object")],
    });
    assert_eq!(rendered(vec![stmt]), "Get-Process|Sort-Object");
}

#[test]
fn merging_redirection() {
    let stmt = Statement::Pipeline(Pipeline {
        extent: ext(),
        elements: vec![PipelineElement::Expression(CommandExpression {
            extent: ext(),
            expression: var("x"),
            redirections: vec![Redirection::Merging(MergingRedirection {
                extent: ext(),
                from_stream: RedirectionStream::Error,
                to_stream: RedirectionStream::Output,
            })],
        })],
    });
    assert_eq!(rendered(vec![stmt]), "$x 2>&1");
}

#[test]
fn hashtable_entries() {
    let stmt = expr_stmt(Expression::Hashtable(HashtableExpression {
        extent: ext(),
        entries: vec![
            (bare("a"), expr_stmt(int(1))),
            (bare("b"), expr_stmt(int(2))),
        ],
    }));
    assert_eq!(rendered(vec![stmt]), "@{a=1;b=2}");
}

#[test]
fn string_escaping() {
    let stmt = expr_stmt(Expression::StringConstant(StringConstantExpression {
        extent: ext(),
        value: "tick ` and\tnewline\n".to_string(),
        kind: StringKind::DoubleQuoted,
    }));
    assert_eq!(rendered(vec![stmt]), "\"tick `` and`tnewline`n\"");
}

#[test]
fn non_ascii_becomes_char_subexpression() {
    let stmt = expr_stmt(Expression::StringConstant(StringConstantExpression {
        extent: ext(),
        value: "caf\u{e9}".to_string(),
        kind: StringKind::SingleQuoted,
    }));
    assert_eq!(rendered(vec![stmt]), "'caf$([char]0x00e9)'");
}

#[test]
fn here_strings_collapse_to_regular_quotes() {
    let stmt = expr_stmt(Expression::StringConstant(StringConstantExpression {
        extent: ext(),
        value: "body".to_string(),
        kind: StringKind::SingleQuotedHereString,
    }));
    assert_eq!(rendered(vec![stmt]), "'body'");
}

#[test]
fn unary_operator_spellings() {
    let prefix = expr_stmt(Expression::Unary(UnaryExpression {
        extent: ext(),
        operator: UnaryOperator::Not,
        child: Box::new(var("x")),
    }));
    assert_eq!(rendered(vec![prefix]), "-not $x");

    let postfix = expr_stmt(Expression::Unary(UnaryExpression {
        extent: ext(),
        operator: UnaryOperator::PostfixPlusPlus,
        child: Box::new(var("i")),
    }));
    assert_eq!(rendered(vec![postfix]), "$i++");
}

#[test]
fn binary_operator_spellings() {
    let binary = |operator| {
        expr_stmt(Expression::Binary(BinaryExpression {
            extent: ext(),
            left: Box::new(var("a")),
            operator,
            right: Box::new(var("b")),
        }))
    };
    assert_eq!(rendered(vec![binary(BinaryOperator::DotDot)]), "$a..$b");
    assert_eq!(rendered(vec![binary(BinaryOperator::Ieq)]), "$a-eq$b");
    assert_eq!(rendered(vec![binary(BinaryOperator::Ceq)]), "$a-ceq$b");
    assert_eq!(rendered(vec![binary(BinaryOperator::Format)]), "$a-f$b");
}

#[test]
fn param_block_separated_from_body() {
    let tree = ScriptBlock {
        extent: ext(),
        param_block: Some(ParamBlock {
            extent: ext(),
            attributes: Vec::new(),
            parameters: vec![Parameter {
                extent: ext(),
                name: vexpr("a"),
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
            statements: vec![expr_stmt(var("a"))],
        }),
        dynamic_param_block: None,
    };
    assert_eq!(render(&tree).expect("render failed"), "param($a);$a");
}

#[test]
fn named_blocks_keep_their_keywords() {
    let named = |kind, statements| {
        Some(NamedBlock {
            extent: ext(),
            kind,
            unnamed: false,
            traps: Vec::new(),
            statements,
        })
    };
    let tree = ScriptBlock {
        extent: ext(),
        param_block: None,
        begin_block: named(BlockKind::Begin, vec![expr_stmt(int(1))]),
        process_block: named(BlockKind::Process, vec![expr_stmt(int(2))]),
        end_block: named(BlockKind::End, Vec::new()),
        dynamic_param_block: None,
    };
    assert_eq!(render(&tree).expect("render failed"), "begin{1}process{2}end{}");
}

#[test]
fn parameter_attributes() {
    let parameter = Parameter {
        extent: ext(),
        name: vexpr("p"),
        attributes: vec![AttributeBase::Attribute(Attribute {
            extent: ext(),
            type_name: "Parameter".to_string(),
            positional_arguments: vec![int(0)],
            named_arguments: vec![NamedAttributeArgument {
                extent: ext(),
                argument_name: "Mandatory".to_string(),
                argument: var("true"),
                expression_omitted: true,
            }],
        })],
        default_value: Some(int(7)),
    };
    let tree = ScriptBlock {
        extent: ext(),
        param_block: Some(ParamBlock {
            extent: ext(),
            attributes: Vec::new(),
            parameters: vec![parameter],
        }),
        begin_block: None,
        process_block: None,
        end_block: None,
        dynamic_param_block: None,
    };
    assert_eq!(
        render(&tree).expect("render failed"),
        "param([Parameter(0,Mandatory)]$p=7)"
    );
}

#[test]
fn member_access_and_invocation() {
    let member = expr_stmt(Expression::Member(MemberExpression {
        extent: ext(),
        expression: Box::new(Expression::Type(TypeExpression {
            extent: ext(),
            type_name: "Math".to_string(),
        })),
        member: Box::new(bare("Pi")),
        static_access: true,
    }));
    assert_eq!(rendered(vec![member]), "[Math]::Pi");

    let invoke = expr_stmt(Expression::InvokeMember(InvokeMemberExpression {
        extent: ext(),
        expression: Box::new(var("s")),
        member: Box::new(bare("Substring")),
        arguments: vec![int(0), int(3)],
        static_access: false,
    }));
    assert_eq!(rendered(vec![invoke]), "$s.Substring(0,3)");
}

#[test]
fn splatted_variable_uses_at_sigil() {
    let stmt = expr_stmt(Expression::Variable(VariableExpression {
        extent: ext(),
        name: "params".to_string(),
        splatted: true,
    }));
    assert_eq!(rendered(vec![stmt]), "@params");
}

#[test]
fn double_literals() {
    let stmt = expr_stmt(Expression::Constant(ConstantExpression {
        extent: ext(),
        value: ConstantValue::Double(1.5),
    }));
    assert_eq!(rendered(vec![stmt]), "1.5");
}

#[test]
fn error_statement_is_unsupported() {
    let result = render(&script(vec![Statement::Error(ErrorStatement {
        extent: ext(),
    })]));
    assert!(matches!(
        result,
        Err(Error::UnsupportedConstruct { construct }) if construct.contains("statement")
    ));
}
