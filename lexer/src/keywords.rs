use model::Token;

/// Keywords in the order they are tried against the input.
pub const KEYWORDS: [&str; 9] = ["ff", "tt", "skip", "if", "then", "else", "while", "do", "end"];

/// Operators spanning more than one character.
pub const LONG_OPERATORS: [&str; 3] = [":=", "<=", ">="];

pub fn keyword_token(word: &str) -> Option<Token> {
    let token = match word {
        "ff" => Token::False,
        "tt" => Token::True,
        "skip" => Token::Skip,
        "if" => Token::If,
        "then" => Token::Then,
        "else" => Token::Else,
        "while" => Token::While,
        "do" => Token::Do,
        "end" => Token::End,
        _ => return None,
    };
    Some(token)
}

pub fn long_operator_token(op: &str) -> Option<Token> {
    match op {
        ":=" => Some(Token::Assignment),
        "<=" => Some(Token::LessOrEqual),
        ">=" => Some(Token::GreaterOrEqual),
        _ => None,
    }
}

/// Single-character operators and delimiters. These also terminate an
/// integer literal.
pub fn single_char_token(ch: char) -> Option<Token> {
    let token = match ch {
        '+' => Token::Plus,
        '-' => Token::Minus,
        '*' => Token::Times,
        '=' => Token::Equals,
        '<' => Token::LessThan,
        '>' => Token::GreaterThan,
        '¬' => Token::Not,
        '^' => Token::And,
        ';' => Token::Semicolon,
        '(' => Token::LeftParen,
        ')' => Token::RightParen,
        _ => return None,
    };
    Some(token)
}
