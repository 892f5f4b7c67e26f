use super::lexer::{CompareOp, StringOp};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Property(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Compare { property: String, op: CompareOp, value: Value },
    StringOp { property: String, op: StringOp, value: String },
    Exists { property: String, value: bool },
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    /// A parenthesised subexpression; kept distinct from its inner node so
    /// the emitter can preserve the source parens verbatim.
    Group(Box<Expr>),
}
