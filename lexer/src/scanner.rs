use log::trace;
use model::{LexError, Token};
use crate::keywords::{
    KEYWORDS, LONG_OPERATORS, keyword_token, long_operator_token, single_char_token,
};
use crate::literals::parse_int_constant;

/// Cursor over the source text that hands out one token per call.
///
/// Cloning a scanner captures its cursor, so a clone resumes from the same
/// position and produces the same tokens.
#[derive(Debug, Clone)]
pub struct Scanner {
    input: Vec<char>,
    pos: usize,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    /// Scan to the end of input. The returned sequence always ends with
    /// `Token::Eof`.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token == Token::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Return the next token and move past it. Once the input is exhausted
    /// every call returns `Token::Eof`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let token = self.scan_token()?;
        trace!("scanned {:?}, cursor at {}", token, self.pos);
        Ok(token)
    }

    fn scan_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(Token::Eof);
        };

        // Order matters: keywords, long operators, single characters,
        // then literals.
        for keyword in KEYWORDS {
            if keyword.starts_with(ch)
                && let Some(token) = self.match_keyword(keyword)
            {
                return Ok(token);
            }
        }

        for op in LONG_OPERATORS {
            if op.starts_with(ch)
                && let Some(token) = self.match_long_operator(op)
            {
                return Ok(token);
            }
        }

        if let Some(token) = single_char_token(ch) {
            self.pos += 1;
            return Ok(token);
        }

        if !ch.is_alphanumeric() {
            return Err(LexError::InvalidCharacter { ch });
        }

        if ch.is_ascii_digit() {
            return self.lex_number();
        }

        Ok(self.lex_identifier())
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    /// Up to `n` characters starting at the cursor, without consuming them.
    fn lookahead(&self, n: usize) -> &[char] {
        let end = (self.pos + n).min(self.input.len());
        &self.input[self.pos..end]
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// A keyword only counts when followed by whitespace, `;` or the end of
    /// input; otherwise it is the prefix of an identifier.
    fn match_keyword(&mut self, keyword: &str) -> Option<Token> {
        let len = keyword.chars().count();
        let window = self.lookahead(len + 1);

        if window.len() < len || !window[..len].iter().copied().eq(keyword.chars()) {
            return None;
        }
        match window.get(len) {
            Some(&next) if !(next.is_whitespace() || next == ';') => return None,
            _ => {}
        }

        self.pos += len;
        keyword_token(keyword)
    }

    fn match_long_operator(&mut self, op: &str) -> Option<Token> {
        let len = op.chars().count();
        if !self.lookahead(len).iter().copied().eq(op.chars()) {
            return None;
        }
        self.pos += len;
        long_operator_token(op)
    }

    fn lex_number(&mut self) -> Result<Token, LexError> {
        let start = self.pos;

        // Digits run until whitespace, end of input or an operator.
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() || single_char_token(ch).is_some() {
                break;
            }
            if !ch.is_ascii_digit() {
                return Err(LexError::ExpectedDigit { ch });
            }
            self.pos += 1;
        }

        let text: String = self.input[start..self.pos].iter().collect();
        let value = parse_int_constant(&text)?;
        Ok(Token::Integer { value })
    }

    fn lex_identifier(&mut self) -> Token {
        let start = self.pos;
        while self.current_char().is_some_and(char::is_alphanumeric) {
            self.pos += 1;
        }
        let value: String = self.input[start..self.pos].iter().collect();
        Token::Identifier { value }
    }
}
