use log::{debug, trace};
use model::{Program, SyntaxError, Token};
use crate::statements::StatementParser;

/// Stands in for every position past the end of the token slice.
static EOF: Token = Token::Eof;

/// Deepest nesting of parentheses, `¬` and compound statements accepted
/// before parsing gives up.
pub(crate) const MAX_NESTING: usize = 256;

/// Core parser struct that maintains parsing state
pub(crate) struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) pos: usize,
    pub(crate) depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0, depth: 0 }
    }

    /// Parse the entire program: `(Statement ';')*` up to the end of input
    pub fn parse_program(&mut self) -> Result<Program, SyntaxError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            trace!("parsing statement, token: {}", self.peek());
            statements.push(self.parse_stmt()?);
            self.expect(|t| matches!(t, Token::Semicolon), "';'")?;
        }

        debug!("parsed program with {} statements", statements.len());
        Ok(Program { statements })
    }

    /// Run `parse` one nesting level deeper, failing once the limit is passed.
    pub(crate) fn nested<T, F>(&mut self, parse: F) -> Result<T, SyntaxError>
    where
        F: FnOnce(&mut Self) -> Result<T, SyntaxError>,
    {
        if self.depth >= MAX_NESTING {
            return Err(SyntaxError::NestingTooDeep { limit: MAX_NESTING });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek(), Token::Eof)
    }

    pub(crate) fn peek(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    pub(crate) fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn check<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Token) -> bool,
    {
        predicate(self.peek())
    }

    pub(crate) fn expect<F>(&mut self, predicate: F, expected: &'static str) -> Result<&'a Token, SyntaxError>
    where
        F: Fn(&Token) -> bool,
    {
        if self.check(predicate) {
            Ok(self.advance())
        } else {
            let found = self.peek().clone();
            debug!("parse error at pos {}: expected {}, found {:?}", self.pos, expected, found);
            Err(SyntaxError::Expected { expected, found })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_reads_eof_past_the_end() {
        let tokens = vec![Token::Identifier { value: "x".to_string() }];
        let mut parser = Parser::new(&tokens);
        assert!(!parser.is_at_end());
        assert_eq!(parser.advance(), &tokens[0]);
        assert!(parser.is_at_end());
        assert_eq!(parser.advance(), &Token::Eof);
        assert_eq!(parser.pos, 1);
    }

    #[test]
    fn expect_reports_found_token() {
        let tokens = vec![Token::Then, Token::Eof];
        let mut parser = Parser::new(&tokens);
        let err = parser.expect(|t| matches!(t, Token::Do), "'do'").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::Expected { expected: "'do'", found: Token::Then }
        );
        assert_eq!(parser.pos, 0);
    }

    #[test]
    fn nested_restores_depth() {
        let tokens = vec![Token::Eof];
        let mut parser = Parser::new(&tokens);
        let result: Result<(), SyntaxError> =
            parser.nested(|p| p.nested(|_| Err(SyntaxError::UnexpectedToken { found: Token::Eof })));
        assert!(result.is_err());
        assert_eq!(parser.depth, 0);
    }

    #[test]
    fn nested_stops_at_limit() {
        let tokens = vec![Token::Eof];
        let mut parser = Parser::new(&tokens);
        parser.depth = MAX_NESTING;
        let result = parser.nested(|_| Ok(()));
        assert_eq!(result, Err(SyntaxError::NestingTooDeep { limit: MAX_NESTING }));
        assert_eq!(parser.depth, MAX_NESTING);
    }
}
