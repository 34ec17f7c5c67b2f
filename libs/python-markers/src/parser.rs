//! Recursive-descent parser for marker expressions
//!
//! ```text
//! marker  := and_expr ("or" and_expr)*
//! and_expr := atom ("and" atom)*
//! atom    := "(" marker ")" | operand op operand
//! op      := "==" | "!=" | "<" | "<=" | ">" | ">=" | "in" | "not" "in"
//! operand := identifier | quoted string
//! ```

use crate::ast::{MarkerExpr, MarkerOp, MarkerVariable, Operand};
use crate::error::{Error, Result};
use crate::lexer::{tokenize, Token, TokenKind};

pub(crate) fn parse_marker(input: &str) -> Result<MarkerExpr> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens,
        position: 0,
        end: input.len(),
    };
    if parser.tokens.is_empty() {
        return Err(Error::Syntax {
            pos: 0,
            message: "empty marker",
        });
    }
    let expr = parser.parse_or()?;
    if let Some(token) = parser.peek() {
        return Err(Error::Syntax {
            pos: token.pos,
            message: "unexpected trailing input",
        });
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    position: usize,
    end: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn current_pos(&self) -> usize {
        self.peek().map_or(self.end, |t| t.pos)
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().is_some_and(|t| &t.kind == kind) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn parse_or(&mut self) -> Result<MarkerExpr> {
        let mut expr = self.parse_and()?;
        while self.eat(&TokenKind::Or) {
            let rhs = self.parse_and()?;
            expr = MarkerExpr::Or(Box::new(expr), Box::new(rhs));
        }
        Ok(expr)
    }

    fn parse_and(&mut self) -> Result<MarkerExpr> {
        let mut expr = self.parse_atom()?;
        while self.eat(&TokenKind::And) {
            let rhs = self.parse_atom()?;
            expr = MarkerExpr::And(Box::new(expr), Box::new(rhs));
        }
        Ok(expr)
    }

    fn parse_atom(&mut self) -> Result<MarkerExpr> {
        if self.eat(&TokenKind::LParen) {
            let expr = self.parse_or()?;
            if !self.eat(&TokenKind::RParen) {
                return Err(Error::Syntax {
                    pos: self.current_pos(),
                    message: "expected ')'",
                });
            }
            return Ok(expr);
        }

        let lhs = self.parse_operand()?;
        let op = self.parse_op()?;
        let rhs = self.parse_operand()?;
        Ok(MarkerExpr::Compare { lhs, op, rhs })
    }

    fn parse_operand(&mut self) -> Result<Operand> {
        let pos = self.current_pos();
        match self.advance().map(|t| t.kind) {
            Some(TokenKind::Ident(name)) => Ok(Operand::Variable(MarkerVariable::from_name(&name))),
            Some(TokenKind::Str(value)) => Ok(Operand::Literal(value)),
            _ => Err(Error::Syntax {
                pos,
                message: "expected a marker variable or quoted string",
            }),
        }
    }

    fn parse_op(&mut self) -> Result<MarkerOp> {
        let pos = self.current_pos();
        match self.advance().map(|t| t.kind) {
            Some(TokenKind::Cmp(op)) => Ok(MarkerOp::Compare(op)),
            Some(TokenKind::In) => Ok(MarkerOp::In),
            Some(TokenKind::Not) if self.eat(&TokenKind::In) => Ok(MarkerOp::NotIn),
            _ => Err(Error::Syntax {
                pos,
                message: "expected a comparison operator",
            }),
        }
    }
}
