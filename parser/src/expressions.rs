use log::trace;
use model::{ArithExpr, ArithOp, BoolExpr, SyntaxError, Token};
use crate::parser::Parser;

/// Expression parsing functionality using precedence climbing
///
/// Arithmetic: `+`/`-` < `*` < atoms. Boolean: `^` < comparisons < atoms,
/// where an atom may itself be an arithmetic comparand.
pub(crate) trait ExpressionParser {
    fn parse_arith_expr(&mut self) -> Result<ArithExpr, SyntaxError>;
    fn parse_bool_expr(&mut self) -> Result<BoolExpr, SyntaxError>;
}

impl<'a> ExpressionParser for Parser<'a> {
    fn parse_arith_expr(&mut self) -> Result<ArithExpr, SyntaxError> {
        let mut expr = self.parse_term()?;
        loop {
            let op = match self.peek() {
                Token::Plus => ArithOp::Add,
                Token::Minus => ArithOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            expr = ArithExpr::binary(expr, op, right);
        }
        Ok(expr)
    }

    fn parse_bool_expr(&mut self) -> Result<BoolExpr, SyntaxError> {
        trace!("parsing boolean expression, token: {}", self.peek());
        let mut expr = self.parse_bool_term()?;
        while self.check(|t| matches!(t, Token::And)) {
            self.advance();
            let right = self.parse_bool_term()?;
            expr = BoolExpr::and(expr, right);
        }
        Ok(expr)
    }
}

impl<'a> Parser<'a> {
    fn parse_term(&mut self) -> Result<ArithExpr, SyntaxError> {
        let mut expr = self.parse_factor()?;
        while self.check(|t| matches!(t, Token::Times)) {
            self.advance();
            let right = self.parse_factor()?;
            expr = ArithExpr::binary(expr, ArithOp::Mul, right);
        }
        Ok(expr)
    }

    fn parse_factor(&mut self) -> Result<ArithExpr, SyntaxError> {
        match self.advance() {
            Token::Identifier { value } => Ok(ArithExpr::Variable(value.clone())),
            Token::Integer { value } => Ok(ArithExpr::Constant(*value)),
            Token::LeftParen => self.nested(|p| {
                let expr = p.parse_arith_expr()?;
                p.expect(|t| matches!(t, Token::RightParen), "')'")?;
                Ok(expr)
            }),
            other => Err(SyntaxError::UnexpectedToken { found: other.clone() }),
        }
    }

    // Comparisons chain left-associatively: `a < b = tt` is `(a < b) = tt`
    fn parse_bool_term(&mut self) -> Result<BoolExpr, SyntaxError> {
        trace!("parsing boolean term, token: {}", self.peek());
        let mut expr = self.parse_bool_factor()?;
        while let Some(op) = self.peek().comparison_op() {
            self.advance();
            let right = self.parse_bool_factor()?;
            expr = BoolExpr::comparison(expr, op, right);
        }
        Ok(expr)
    }

    fn parse_bool_factor(&mut self) -> Result<BoolExpr, SyntaxError> {
        trace!("parsing boolean factor, token: {}", self.peek());
        match self.peek() {
            Token::True => {
                self.advance();
                Ok(BoolExpr::Literal(true))
            }
            Token::False => {
                self.advance();
                Ok(BoolExpr::Literal(false))
            }
            Token::Not => {
                self.advance();
                let operand = self.nested(Self::parse_bool_expr)?;
                Ok(BoolExpr::Not(Box::new(operand)))
            }
            Token::LeftParen => self.nested(Self::parse_parenthesized),
            // A bare identifier or integer is the one-token case of this
            Token::Identifier { .. } | Token::Integer { .. } => {
                Ok(BoolExpr::Operand(self.parse_arith_expr()?))
            }
            other => Err(SyntaxError::UnexpectedToken { found: other.clone() }),
        }
    }

    /// `(` opens either an arithmetic comparand such as `(x + 1) * 2 < y` or
    /// a nested boolean expression. The arithmetic reading wins only when a
    /// comparison operator follows it.
    fn parse_parenthesized(&mut self) -> Result<BoolExpr, SyntaxError> {
        let saved_pos = self.pos;
        if let Ok(expr) = self.parse_arith_expr()
            && self.peek().comparison_op().is_some()
        {
            return Ok(BoolExpr::Operand(expr));
        }
        self.pos = saved_pos;

        self.expect(|t| matches!(t, Token::LeftParen), "'('")?;
        let expr = self.parse_bool_expr()?;
        self.expect(|t| matches!(t, Token::RightParen), "')'")?;
        Ok(expr)
    }
}
