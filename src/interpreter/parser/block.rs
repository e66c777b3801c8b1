use crate::{
    ast::BlockStatement,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::{ParseResult, Parser}},
};

impl Parser<'_> {
    /// Parses a block delimited by braces.
    ///
    /// Statements are parsed until the closing `}`. Like the top level, a
    /// statement that fails inside the block is recorded and skipped, so one
    /// mistake does not discard the rest of the block.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// # Errors
    /// - `UnexpectedToken` if the block does not start with `{`.
    /// - `UnexpectedEndOfInput` if the input ends before the closing `}`.
    /// - `NestingTooDeep` if blocks nest too deeply.
    pub fn parse_block(&mut self) -> ParseResult<BlockStatement> {
        self.nested(Self::parse_block_at)
    }

    fn parse_block_at(&mut self) -> ParseResult<BlockStatement> {
        let line = self.expect(&Token::LBrace, "'{'")?;
        let mut statements = Vec::new();

        loop {
            match self.peek() {
                Some(Token::RBrace) => {
                    self.advance();
                    break;
                },
                Some(Token::Semicolon) => {
                    self.advance();
                },
                Some(_) => {
                    let before = self.consumed();
                    match self.parse_statement() {
                        Ok(statement) => statements.push(statement),
                        Err(error) => self.record_error(error, before),
                    }
                },
                None => {
                    return Err(ParseError::UnexpectedEndOfInput { expected: "'}'",
                                                                  line:     self.current_line(), });
                },
            }
        }

        Ok(BlockStatement { statements, line })
    }
}
