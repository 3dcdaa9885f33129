mod keywords;
mod literals;
mod scanner;

use model::{LexError, Token};
pub use scanner::Scanner;

/// Scan the whole input. The last token is always `Token::Eof`.
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(input);
    scanner.tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Token {
        Token::Identifier { value: name.to_string() }
    }

    fn int(value: i64) -> Token {
        Token::Integer { value }
    }

    #[test]
    fn lex_simple_assignment() {
        let tokens = lex("x := 1 + 2;").expect("lexing should succeed");
        assert_eq!(
            tokens,
            vec![
                ident("x"),
                Token::Assignment,
                int(1),
                Token::Plus,
                int(2),
                Token::Semicolon,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn lex_keyword_disambiguation() {
        let tokens = lex("iffy := 1;").unwrap();
        assert_eq!(
            tokens,
            vec![ident("iffy"), Token::Assignment, int(1), Token::Semicolon, Token::Eof]
        );
    }

    #[test]
    fn lex_control_flow_keywords() {
        let tokens = lex("if then else while do end skip tt ff").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::If,
                Token::Then,
                Token::Else,
                Token::While,
                Token::Do,
                Token::End,
                Token::Skip,
                Token::True,
                Token::False,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn lex_keyword_before_semicolon() {
        let tokens = lex("end;").unwrap();
        assert_eq!(tokens, vec![Token::End, Token::Semicolon, Token::Eof]);
    }

    #[test]
    fn lex_all_operators() {
        let tokens = lex(":= <= >= < > = + - * ¬ ^ ( ) ;").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Assignment,
                Token::LessOrEqual,
                Token::GreaterOrEqual,
                Token::LessThan,
                Token::GreaterThan,
                Token::Equals,
                Token::Plus,
                Token::Minus,
                Token::Times,
                Token::Not,
                Token::And,
                Token::LeftParen,
                Token::RightParen,
                Token::Semicolon,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn lex_adjacent_tokens_no_space() {
        let tokens = lex("x<=10^1<x").unwrap();
        assert_eq!(
            tokens,
            vec![
                ident("x"),
                Token::LessOrEqual,
                int(10),
                Token::And,
                int(1),
                Token::LessThan,
                ident("x"),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn lex_not_operator() {
        let tokens = lex("¬(x=1)").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Not,
                Token::LeftParen,
                ident("x"),
                Token::Equals,
                int(1),
                Token::RightParen,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn lex_minus_is_never_part_of_a_literal() {
        let tokens = lex("-5").unwrap();
        assert_eq!(tokens, vec![Token::Minus, int(5), Token::Eof]);
    }

    #[test]
    fn lex_malformed_number() {
        assert_eq!(lex("12a3"), Err(LexError::ExpectedDigit { ch: 'a' }));
    }

    #[test]
    fn lex_unknown_character() {
        assert_eq!(
            lex("x := 1 @ 2;"),
            Err(LexError::InvalidCharacter { ch: '@' })
        );
    }

    #[test]
    fn lex_integer_out_of_range() {
        assert!(matches!(
            lex("x := 99999999999999999999;"),
            Err(LexError::IntegerOverflow { .. })
        ));
    }

    #[test]
    fn lex_empty_input() {
        assert_eq!(lex("").unwrap(), vec![Token::Eof]);
    }

    #[test]
    fn lex_whitespace_only() {
        assert_eq!(lex("   \t\n  ").unwrap(), vec![Token::Eof]);
    }
}
