// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Expression node definitions.

use crate::nodes::statement::{Attribute, Pipeline, StatementBlock, TypeConstraint};
use crate::nodes::{Extent, ScriptBlock, Statement};

/// All expression kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Convert(ConvertExpression),
    Type(TypeExpression),
    Constant(ConstantExpression),
    StringConstant(StringConstantExpression),
    ExpandableString(ExpandableStringExpression),
    Sub(SubExpression),
    Using(UsingExpression),
    Variable(VariableExpression),
    Member(MemberExpression),
    InvokeMember(InvokeMemberExpression),
    Array(ArrayExpression),
    ArrayLiteral(ArrayLiteral),
    Hashtable(HashtableExpression),
    ScriptBlock(ScriptBlockExpression),
    Paren(ParenExpression),
    Index(IndexExpression),
    Attributed(AttributedExpression),
    /// Parser error-recovery node.
    Error(ErrorExpression),
}

/// Binary operator tokens. One spelling per token; the set is closed, so an
/// unrecognized operator is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Remainder,
    DotDot,
    Format,
    And,
    Or,
    Xor,
    Band,
    Bor,
    Bxor,
    Shl,
    Shr,
    Is,
    IsNot,
    // Case-insensitive comparison family.
    Ieq,
    Ine,
    Ilt,
    Ile,
    Igt,
    Ige,
    Ilike,
    Inotlike,
    Imatch,
    Inotmatch,
    Icontains,
    Inotcontains,
    Iin,
    Inotin,
    Ireplace,
    Isplit,
    Join,
    // Case-sensitive comparison family.
    Ceq,
    Cne,
    Clt,
    Cle,
    Cgt,
    Cge,
    Clike,
    Cnotlike,
    Cmatch,
    Cnotmatch,
    Ccontains,
    Cnotcontains,
    Cin,
    Cnotin,
    Creplace,
    Csplit,
}

impl BinaryOperator {
    /// The textual spelling of the operator. Word operators carry their
    /// leading dash; no surrounding spaces are required by the grammar.
    pub fn spelling(self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Remainder => "%",
            BinaryOperator::DotDot => "..",
            BinaryOperator::Format => "-f",
            BinaryOperator::And => "-and",
            BinaryOperator::Or => "-or",
            BinaryOperator::Xor => "-xor",
            BinaryOperator::Band => "-band",
            BinaryOperator::Bor => "-bor",
            BinaryOperator::Bxor => "-bxor",
            BinaryOperator::Shl => "-shl",
            BinaryOperator::Shr => "-shr",
            BinaryOperator::Is => "-is",
            BinaryOperator::IsNot => "-isnot",
            BinaryOperator::Ieq => "-eq",
            BinaryOperator::Ine => "-ne",
            BinaryOperator::Ilt => "-lt",
            BinaryOperator::Ile => "-le",
            BinaryOperator::Igt => "-gt",
            BinaryOperator::Ige => "-ge",
            BinaryOperator::Ilike => "-like",
            BinaryOperator::Inotlike => "-notlike",
            BinaryOperator::Imatch => "-match",
            BinaryOperator::Inotmatch => "-notmatch",
            BinaryOperator::Icontains => "-contains",
            BinaryOperator::Inotcontains => "-notcontains",
            BinaryOperator::Iin => "-in",
            BinaryOperator::Inotin => "-notin",
            BinaryOperator::Ireplace => "-replace",
            BinaryOperator::Isplit => "-split",
            BinaryOperator::Join => "-join",
            BinaryOperator::Ceq => "-ceq",
            BinaryOperator::Cne => "-cne",
            BinaryOperator::Clt => "-clt",
            BinaryOperator::Cle => "-cle",
            BinaryOperator::Cgt => "-cgt",
            BinaryOperator::Cge => "-cge",
            BinaryOperator::Clike => "-clike",
            BinaryOperator::Cnotlike => "-cnotlike",
            BinaryOperator::Cmatch => "-cmatch",
            BinaryOperator::Cnotmatch => "-cnotmatch",
            BinaryOperator::Ccontains => "-ccontains",
            BinaryOperator::Cnotcontains => "-cnotcontains",
            BinaryOperator::Cin => "-cin",
            BinaryOperator::Cnotin => "-cnotin",
            BinaryOperator::Creplace => "-creplace",
            BinaryOperator::Csplit => "-csplit",
        }
    }
}

/// `left op right`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub extent: Extent,
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
}

/// Unary operator tokens, prefix and postfix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    PlusPlus,
    MinusMinus,
    Plus,
    Minus,
    Exclaim,
    Not,
    Bnot,
    PostfixPlusPlus,
    PostfixMinusMinus,
}

impl UnaryOperator {
    /// True for operators written after their operand.
    pub fn is_postfix(self) -> bool {
        matches!(
            self,
            UnaryOperator::PostfixPlusPlus | UnaryOperator::PostfixMinusMinus
        )
    }

    /// The textual spelling. Word operators carry a trailing space so they
    /// never glue onto their operand.
    pub fn spelling(self) -> &'static str {
        match self {
            UnaryOperator::PlusPlus | UnaryOperator::PostfixPlusPlus => "++",
            UnaryOperator::MinusMinus | UnaryOperator::PostfixMinusMinus => "--",
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::Exclaim => "!",
            UnaryOperator::Not => "-not ",
            UnaryOperator::Bnot => "-bnot ",
        }
    }
}

/// `op child` or `child op` for postfix operators.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub extent: Extent,
    pub operator: UnaryOperator,
    pub child: Box<Expression>,
}

/// `[type]child`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertExpression {
    pub extent: Extent,
    pub type_constraint: TypeConstraint,
    pub child: Box<Expression>,
}

/// `[TypeName]` in expression position.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeExpression {
    pub extent: Extent,
    pub type_name: String,
}

/// A numeric constant value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Int(i64),
    Double(f64),
}

/// A numeric literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantExpression {
    pub extent: Extent,
    pub value: ConstantValue,
}

/// How a string literal was quoted in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKind {
    SingleQuoted,
    DoubleQuoted,
    SingleQuotedHereString,
    DoubleQuotedHereString,
    BareWord,
}

/// A constant (non-interpolating) string literal. Bare command names are
/// string constants with [`StringKind::BareWord`].
#[derive(Debug, Clone, PartialEq)]
pub struct StringConstantExpression {
    pub extent: Extent,
    pub value: String,
    pub kind: StringKind,
}

/// An interpolating (`"$x ..."`) string literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandableStringExpression {
    pub extent: Extent,
    pub value: String,
    pub kind: StringKind,
}

/// `$( ... )`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubExpression {
    pub extent: Extent,
    pub statements: StatementBlock,
}

/// `$using:` scope import; the wrapped expression carries its own sigil.
#[derive(Debug, Clone, PartialEq)]
pub struct UsingExpression {
    pub extent: Extent,
    pub sub_expression: Box<Expression>,
}

/// A variable reference. `name` may carry a `global:` qualifier; `splatted`
/// marks `@name` references.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpression {
    pub extent: Extent,
    pub name: String,
    pub splatted: bool,
}

/// `expr.member` or `expr::member`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    pub extent: Extent,
    pub expression: Box<Expression>,
    pub member: Box<Expression>,
    pub static_access: bool,
}

/// `expr.member(args)` or `expr::member(args)`.
#[derive(Debug, Clone, PartialEq)]
pub struct InvokeMemberExpression {
    pub extent: Extent,
    pub expression: Box<Expression>,
    pub member: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub static_access: bool,
}

/// `@( ... )`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpression {
    pub extent: Extent,
    pub statements: StatementBlock,
}

/// `a, b, c`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub extent: Extent,
    pub elements: Vec<Expression>,
}

/// `@{ k = v; ... }`. Values are statements, matching the grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct HashtableExpression {
    pub extent: Extent,
    pub entries: Vec<(Expression, Statement)>,
}

/// `{ ... }` in expression position.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptBlockExpression {
    pub extent: Extent,
    pub script_block: Box<ScriptBlock>,
}

/// `( pipeline )`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParenExpression {
    pub extent: Extent,
    pub pipeline: Pipeline,
}

/// `target[index]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpression {
    pub extent: Extent,
    pub target: Box<Expression>,
    pub index: Box<Expression>,
}

/// Either constraint form usable in front of a parameter or expression.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeBase {
    TypeConstraint(TypeConstraint),
    Attribute(Attribute),
}

/// `[attr]child` outside a parameter declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributedExpression {
    pub extent: Extent,
    pub attribute: AttributeBase,
    pub child: Box<Expression>,
}

/// Parser error-recovery expression; carries no renderable content.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorExpression {
    pub extent: Extent,
}
