use log::trace;
use model::{Stmt, SyntaxError, Token};
use crate::expressions::ExpressionParser;
use crate::parser::Parser;

/// Statement parsing functionality
pub(crate) trait StatementParser {
    fn parse_stmt(&mut self) -> Result<Stmt, SyntaxError>;
    /// Parse `(Statement ';')*` until `terminator` matches; the terminator
    /// itself is left for the caller.
    fn parse_body<F>(&mut self, terminator: F, expected: &'static str) -> Result<Vec<Stmt>, SyntaxError>
    where
        F: Fn(&Token) -> bool;
}

impl<'a> StatementParser for Parser<'a> {
    fn parse_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        match self.peek() {
            Token::If => self.nested(Self::parse_if_stmt),
            Token::While => self.nested(Self::parse_while_stmt),
            Token::Identifier { .. } => self.parse_assign_stmt(),
            other => Err(SyntaxError::UnexpectedToken { found: other.clone() }),
        }
    }

    fn parse_body<F>(&mut self, terminator: F, expected: &'static str) -> Result<Vec<Stmt>, SyntaxError>
    where
        F: Fn(&Token) -> bool,
    {
        let mut body = Vec::new();
        while !self.check(&terminator) {
            let found = self.peek();
            if self.is_at_end() {
                return Err(SyntaxError::UnexpectedEof { expected });
            }
            // Anything that cannot open a statement means the closing
            // keyword is missing.
            if !starts_stmt(found) {
                return Err(SyntaxError::Expected { expected, found: found.clone() });
            }
            body.push(self.parse_stmt()?);
            self.expect(|t| matches!(t, Token::Semicolon), "';'")?;
        }
        Ok(body)
    }
}

fn starts_stmt(token: &Token) -> bool {
    matches!(token, Token::If | Token::While | Token::Identifier { .. })
}

impl<'a> Parser<'a> {
    fn parse_assign_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        let target = match self.advance() {
            Token::Identifier { value } => value.clone(),
            other => {
                return Err(SyntaxError::Expected {
                    expected: "identifier",
                    found: other.clone(),
                });
            }
        };
        trace!("parsing assignment to {}", target);

        self.expect(|t| matches!(t, Token::Assignment), "':='")?;
        let value = self.parse_arith_expr()?;
        Ok(Stmt::Assign { target, value })
    }

    fn parse_if_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        self.expect(|t| matches!(t, Token::If), "'if'")?;
        let cond = self.parse_bool_expr()?;
        self.expect(|t| matches!(t, Token::Then), "'then'")?;

        let then_body = self.parse_body(|t| matches!(t, Token::Else), "'else'")?;
        self.expect(|t| matches!(t, Token::Else), "'else'")?;

        let else_body = self.parse_body(|t| matches!(t, Token::End), "'end'")?;
        self.expect(|t| matches!(t, Token::End), "'end'")?;

        Ok(Stmt::If { cond, then_body, else_body })
    }

    fn parse_while_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        self.expect(|t| matches!(t, Token::While), "'while'")?;
        let cond = self.parse_bool_expr()?;
        self.expect(|t| matches!(t, Token::Do), "'do'")?;

        let body = self.parse_body(|t| matches!(t, Token::End), "'end'")?;
        self.expect(|t| matches!(t, Token::End), "'end'")?;

        Ok(Stmt::While { cond, body })
    }
}
