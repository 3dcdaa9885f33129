// Parser module: Converts a list of tokens into an abstract syntax tree (AST)
//
// Module organization:
// - parser.rs: Core Parser struct, token cursor and top-level parsing (program)
// - statements.rs: Statement parsing (assignment, if, while) and bodies
// - expressions.rs: Arithmetic and boolean expression parsing with precedence climbing

mod parser;
mod expressions;
mod statements;

use model::{Error, Program, SyntaxError, Token};
use parser::Parser;

/// Parse a list of tokens into a Program AST
///
/// # Arguments
/// * `tokens` - Slice of tokens from the lexer, normally ending in `Token::Eof`
///
/// # Returns
/// * `Ok(Program)` - One statement per top-level `;`
/// * `Err(SyntaxError)` - The first malformed construct; nothing is recovered
pub fn parse_tokens(tokens: &[Token]) -> Result<Program, SyntaxError> {
    let mut parser = Parser::new(tokens);
    parser.parse_program()
}

/// Lex and parse a complete source string
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = lexer::lex(source)?;
    Ok(parse_tokens(&tokens)?)
}
