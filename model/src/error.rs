//! Error types shared by the lexer and parser.
//!
//! Both kinds are fatal for the parse attempt that raised them: nothing is
//! recovered and no partial result is returned. [`Error`] unifies them so a
//! caller running the whole front end can propagate either with `?`.
use crate::Token;
use thiserror::Error;

/// Failure while turning characters into tokens.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum LexError {
    /// A character that is neither whitespace, alphanumeric, nor an operator.
    #[error("invalid character '{ch}'")]
    InvalidCharacter { ch: char },

    /// An integer literal interrupted by a non-digit before a separator.
    #[error("expected digit, found '{ch}'")]
    ExpectedDigit { ch: char },

    /// Digits that do not fit in a 64-bit signed integer.
    #[error("integer literal {text} is out of range")]
    IntegerOverflow { text: String },
}

/// Failure while turning tokens into a syntax tree.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SyntaxError {
    #[error("expected {expected}, found {found}")]
    Expected { expected: &'static str, found: Token },

    #[error("unexpected token {found}")]
    UnexpectedToken { found: Token },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    /// Parentheses, `¬` or compound statements nested past the parser's limit.
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),

    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_messages_name_the_character() {
        let err = LexError::InvalidCharacter { ch: '@' };
        assert_eq!(err.to_string(), "invalid character '@'");
        let err = LexError::ExpectedDigit { ch: 'a' };
        assert_eq!(err.to_string(), "expected digit, found 'a'");
    }

    #[test]
    fn syntax_error_messages_name_the_token() {
        let err = SyntaxError::Expected {
            expected: "';'",
            found: Token::Identifier { value: "y".to_string() },
        };
        assert_eq!(err.to_string(), "expected ';', found y");

        let err = SyntaxError::UnexpectedEof { expected: "'end'" };
        assert_eq!(err.to_string(), "unexpected end of input, expected 'end'");

        let err = SyntaxError::NestingTooDeep { limit: 256 };
        assert_eq!(err.to_string(), "nesting deeper than 256 levels");
    }

    #[test]
    fn stage_errors_convert_into_error() {
        let err: Error = LexError::InvalidCharacter { ch: '#' }.into();
        assert!(matches!(err, Error::Lex(_)));
        assert!(err.to_string().starts_with("lexical error"));

        let err: Error = SyntaxError::UnexpectedToken { found: Token::Else }.into();
        assert!(matches!(err, Error::Syntax(_)));
        assert_eq!(err.to_string(), "syntax error: unexpected token else");
    }

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}
    #[test]
    fn error_is_send_sync_static() {
        _assert_send_sync_static::<Error>();
    }
}
