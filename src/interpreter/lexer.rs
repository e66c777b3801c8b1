use std::fmt;

use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    ///
    /// The literal text is kept so that the parser can report literals that do
    /// not fit in an `i64`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `let`
    #[token("let")]
    Let,
    /// `fn`
    #[token("fn")]
    Function,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; binding names such as `x` or `add`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// Newlines are skipped, but counted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// Text the lexer could not classify.
    ///
    /// Never produced by the derived lexer itself; [`tokenize`] substitutes it
    /// for lexing errors so that the parser can report them.
    Illegal(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Integer(literal) | Self::Identifier(literal) | Self::Illegal(literal) => {
                return write!(f, "{literal}");
            },
            Self::True => "true",
            Self::False => "false",
            Self::Let => "let",
            Self::Function => "fn",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Bang => "!",
            Self::Less => "<",
            Self::Greater => ">",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            // Skipped by the lexer, so never shown in a diagnostic.
            Self::NewLine | Self::Ignored => "",
        };
        write!(f, "{text}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Converts source text into a finite sequence of `(Token, line)` pairs.
///
/// Lines are 1-based. Unrecognized input does not stop tokenization: each
/// offending slice becomes a [`Token::Illegal`] and the parser reports it.
///
/// # Example
/// ```
/// use kestrel::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("let x = 5;\nx");
///
/// assert_eq!(tokens[0], (Token::Let, 1));
/// assert_eq!(tokens[3], (Token::Integer("5".to_string()), 1));
/// assert_eq!(tokens[5], (Token::Identifier("x".to_string()), 2));
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let token = token.unwrap_or_else(|()| Token::Illegal(lexer.slice().to_string()));
        tokens.push((token, lexer.extras.line));
    }

    tokens
}
