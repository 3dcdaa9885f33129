mod error;

pub use error::{Error, LexError, SyntaxError};

use std::fmt;

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Token {
    Integer { value: i64 },
    Identifier { value: String },
    // Operators
    Plus,
    Minus,
    Times,
    Equals,
    LessThan,
    GreaterThan,
    LessOrEqual,
    GreaterOrEqual,
    Assignment, // :=
    Not,        // ¬
    And,        // ^
    // Boolean literals
    True,  // tt
    False, // ff
    // Keywords
    Skip,
    If,
    Then,
    Else,
    While,
    Do,
    End,
    // Delimiters
    Semicolon,
    LeftParen,
    RightParen,
    Eof,
}

impl Token {
    /// Literal payload carried by the token, if its kind alone is not enough.
    pub fn value(&self) -> Option<String> {
        match self {
            Token::Integer { value } => Some(value.to_string()),
            Token::Identifier { value } => Some(value.clone()),
            _ => None,
        }
    }

    /// Upper-case kind name, as printed by the token dump.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Integer { .. } => "INTEGER",
            Token::Identifier { .. } => "IDENTIFIER",
            Token::Plus => "PLUS",
            Token::Minus => "MINUS",
            Token::Times => "TIMES",
            Token::Equals => "EQUALS",
            Token::LessThan => "LESS_THAN",
            Token::GreaterThan => "GREATER_THAN",
            Token::LessOrEqual => "LESS_OR_EQUAL",
            Token::GreaterOrEqual => "GREATER_OR_EQUAL",
            Token::Assignment => "ASSIGNMENT",
            Token::Not => "NOT",
            Token::And => "AND",
            Token::True => "TT",
            Token::False => "FF",
            Token::Skip => "SKIP",
            Token::If => "IF",
            Token::Then => "THEN",
            Token::Else => "ELSE",
            Token::While => "WHILE",
            Token::Do => "DO",
            Token::End => "END",
            Token::Semicolon => "EOL",
            Token::LeftParen => "LEFT_BRACKET",
            Token::RightParen => "RIGHT_BRACKET",
            Token::Eof => "EOF",
        }
    }

    /// Comparison operator denoted by this token, if any.
    pub fn comparison_op(&self) -> Option<CmpOp> {
        match self {
            Token::Equals => Some(CmpOp::Equal),
            Token::LessThan => Some(CmpOp::Less),
            Token::LessOrEqual => Some(CmpOp::LessEqual),
            Token::GreaterThan => Some(CmpOp::Greater),
            Token::GreaterOrEqual => Some(CmpOp::GreaterEqual),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Token::Integer { value } => return write!(f, "{value}"),
            Token::Identifier { value } => return f.write_str(value),
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Times => "*",
            Token::Equals => "=",
            Token::LessThan => "<",
            Token::GreaterThan => ">",
            Token::LessOrEqual => "<=",
            Token::GreaterOrEqual => ">=",
            Token::Assignment => ":=",
            Token::Not => "¬",
            Token::And => "^",
            Token::True => "tt",
            Token::False => "ff",
            Token::Skip => "skip",
            Token::If => "if",
            Token::Then => "then",
            Token::Else => "else",
            Token::While => "while",
            Token::Do => "do",
            Token::End => "end",
            Token::Semicolon => ";",
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::Eof => "end of input",
        };
        f.write_str(text)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Stmt {
    Assign {
        target: String,
        value: ArithExpr,
    },
    If {
        cond: BoolExpr,
        then_body: Vec<Stmt>,
        else_body: Vec<Stmt>,
    },
    While {
        cond: BoolExpr,
        body: Vec<Stmt>,
    },
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ArithExpr {
    Constant(i64),
    Variable(String),
    Binary {
        left: Box<ArithExpr>,
        op: ArithOp,
        right: Box<ArithExpr>,
    },
}

impl ArithExpr {
    pub fn binary(left: ArithExpr, op: ArithOp, right: ArithExpr) -> Self {
        ArithExpr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
        })
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum BoolExpr {
    Literal(bool),
    Not(Box<BoolExpr>),
    Comparison {
        left: Box<BoolExpr>,
        op: CmpOp,
        right: Box<BoolExpr>,
    },
    And {
        left: Box<BoolExpr>,
        right: Box<BoolExpr>,
    },
    /// Arithmetic value used as a comparand
    Operand(ArithExpr),
}

impl BoolExpr {
    pub fn comparison(left: BoolExpr, op: CmpOp, right: BoolExpr) -> Self {
        BoolExpr::Comparison {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn and(left: BoolExpr, right: BoolExpr) -> Self {
        BoolExpr::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CmpOp {
    Equal,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CmpOp::Equal => "=",
            CmpOp::Less => "<",
            CmpOp::LessEqual => "<=",
            CmpOp::Greater => ">",
            CmpOp::GreaterEqual => ">=",
        })
    }
}
