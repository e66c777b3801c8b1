use crate::{
    ast::Identifier,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::{ParseResult, Parser}},
};

impl Parser<'_> {
    /// Parses a comma-separated list of items until a closing token.
    ///
    /// This utility is shared by parameter lists and call arguments. It
    /// repeatedly calls `parse_item` to parse one element, expecting either:
    ///
    /// - a comma, to continue the list, or
    /// - the specified closing token, to end it.
    ///
    /// An immediately encountered closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)? closing`
    ///
    /// # Parameters
    /// - `parse_item`: Function used to parse each list element.
    /// - `closing`: The token that terminates the list.
    /// - `description`: How to describe `closing` in error messages.
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - an item fails to parse,
    /// - an unexpected token is encountered,
    /// - the stream ends before the closing token.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>,
        closing: &Token,
        description: &'static str)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.peek() == Some(closing) {
            self.advance();
            return Ok(items);
        }

        loop {
            items.push(parse_item(self)?);
            match self.advance() {
                Some((Token::Comma, _)) => {},
                Some((token, _)) if token == closing => break,
                Some((token, line)) => {
                    return Err(ParseError::UnexpectedToken { expected: description,
                                                             found: token.to_string(),
                                                             line });
                },
                None => {
                    return Err(ParseError::UnexpectedEndOfInput { expected: description,
                                                                  line:     self.current_line(), });
                },
            }
        }

        Ok(items)
    }

    /// Parses a plain identifier.
    ///
    /// The current token must be `Token::Identifier`.
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - the current token is not an identifier,
    /// - the input ends unexpectedly.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> ParseResult<Identifier> {
        match self.advance() {
            Some((Token::Identifier(name), line)) => Ok(Identifier { name: name.clone(),
                                                                     line }),
            Some((token, line)) => Err(ParseError::UnexpectedToken { expected: "an identifier",
                                                                     found: token.to_string(),
                                                                     line }),
            None => Err(ParseError::UnexpectedEndOfInput { expected: "an identifier",
                                                           line:     self.current_line(), }),
        }
    }
}
