use model::LexError;

/// Parse the digits of an integer literal
pub fn parse_int_constant(text: &str) -> Result<i64, LexError> {
    text.parse::<i64>()
        .map_err(|_| LexError::IntegerOverflow { text: text.to_string() })
}
