//! Marker lexer - splits a marker expression into tokens

use pyreq_version::Operator;

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Ident(String),
    Str(String),
    Cmp(Operator),
    In,
    Not,
    And,
    Or,
    LParen,
    RParen,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    /// Byte offset of the token start.
    pub pos: usize,
}

pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, c)) = chars.peek() {
        let kind = match c {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '(' => {
                chars.next();
                TokenKind::LParen
            }
            ')' => {
                chars.next();
                TokenKind::RParen
            }
            '\'' | '"' => {
                chars.next();
                let mut value = String::new();
                loop {
                    match chars.next() {
                        Some((_, ch)) if ch == c => break,
                        Some((_, ch)) => value.push(ch),
                        None => {
                            return Err(Error::Syntax {
                                pos,
                                message: "unterminated string",
                            })
                        }
                    }
                }
                TokenKind::Str(value)
            }
            '<' | '>' | '=' | '!' | '~' => {
                let mut symbol = String::new();
                while let Some(&(_, ch)) = chars.peek() {
                    if !matches!(ch, '<' | '>' | '=' | '!' | '~') {
                        break;
                    }
                    symbol.push(ch);
                    chars.next();
                }
                let op = symbol
                    .parse::<Operator>()
                    .map_err(|_| Error::UnknownOperator(symbol))?;
                TokenKind::Cmp(op)
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut ident = String::new();
                while let Some(&(_, ch)) = chars.peek() {
                    if !(ch.is_ascii_alphanumeric() || ch == '_' || ch == '.') {
                        break;
                    }
                    ident.push(ch);
                    chars.next();
                }
                match ident.as_str() {
                    "and" => TokenKind::And,
                    "or" => TokenKind::Or,
                    "in" => TokenKind::In,
                    "not" => TokenKind::Not,
                    _ => TokenKind::Ident(ident),
                }
            }
            _ => {
                return Err(Error::Syntax {
                    pos,
                    message: "unexpected character",
                })
            }
        };
        tokens.push(Token { kind, pos });
    }

    Ok(tokens)
}
