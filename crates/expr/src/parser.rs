//! Pratt parser for the expression grammar.
//!
//! Precedence, loosest to tightest: `+ -`, `* /`, unary minus, `^`.
//! `^` is right-associative and binds tighter than unary minus, so
//! `-x^2` parses as `-(x^2)` and `x^y^z` as `x^(y^z)`. Multiplication is
//! always explicit (`2*x`, never `2x`).

use crate::ast::{Ast, BinOp, Func};
use crate::error::ExprError;
use crate::token::{tokenize, Spanned, Token};

pub(crate) fn parse(src: &str) -> Result<Ast, ExprError> {
    let tokens = tokenize(src)?;
    let mut parser = Parser { tokens, pos: 0 };
    let ast = parser.parse_expr(0)?;

    if let Some(sp) = parser.peek() {
        return Err(ExprError::UnexpectedToken {
            token: sp.token.describe(),
            at: sp.at,
        });
    }
    Ok(ast)
}

// Binding powers. Infix operators carry a (left, right) pair; left < right
// gives left associativity, left > right gives right associativity.
const BP_ADD: (u8, u8) = (1, 2);
const BP_MUL: (u8, u8) = (3, 4);
const BP_NEG: u8 = 5;
const BP_POW: (u8, u8) = (8, 7);

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn parse_expr(&mut self, min_bp: u8) -> Result<Ast, ExprError> {
        let mut lhs = self.parse_prefix()?;

        while let Some(sp) = self.peek() {
            let (op, (lbp, rbp)) = match sp.token {
                Token::Plus => (BinOp::Add, BP_ADD),
                Token::Minus => (BinOp::Sub, BP_ADD),
                Token::Star => (BinOp::Mul, BP_MUL),
                Token::Slash => (BinOp::Div, BP_MUL),
                Token::Caret => (BinOp::Pow, BP_POW),
                _ => break,
            };
            if lbp < min_bp {
                break;
            }
            self.pos += 1;
            let rhs = self.parse_expr(rbp)?;
            lhs = Ast::Binary(op, Box::new(lhs), Box::new(rhs));
        }

        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> Result<Ast, ExprError> {
        let Some(sp) = self.peek().cloned() else {
            return Err(ExprError::UnexpectedEnd);
        };

        match sp.token {
            Token::Number(n) => {
                self.pos += 1;
                Ok(Ast::Number(n))
            }
            Token::Minus => {
                self.pos += 1;
                let inner = self.parse_expr(BP_NEG)?;
                Ok(Ast::Neg(Box::new(inner)))
            }
            Token::Plus => {
                // Unary plus is accepted and ignored.
                self.pos += 1;
                self.parse_expr(BP_NEG)
            }
            Token::LParen => {
                self.pos += 1;
                let inner = self.parse_expr(0)?;
                self.expect_rparen()?;
                Ok(inner)
            }
            Token::Ident(name) => {
                self.pos += 1;
                if matches!(
                    self.peek(),
                    Some(Spanned {
                        token: Token::LParen,
                        ..
                    })
                ) {
                    let Some(func) = Func::from_name(&name) else {
                        return Err(ExprError::UnknownFunction(name));
                    };
                    self.pos += 1;
                    let arg = self.parse_expr(0)?;
                    self.expect_rparen()?;
                    Ok(Ast::Call(func, Box::new(arg)))
                } else {
                    Ok(match name.as_str() {
                        "pi" | "PI" => Ast::Number(std::f64::consts::PI),
                        "e" | "E" => Ast::Number(std::f64::consts::E),
                        _ => Ast::Variable(name),
                    })
                }
            }
            _ => Err(ExprError::UnexpectedToken {
                token: sp.token.describe(),
                at: sp.at,
            }),
        }
    }

    fn expect_rparen(&mut self) -> Result<(), ExprError> {
        match self.peek() {
            Some(sp) if sp.token == Token::RParen => {
                self.pos += 1;
                Ok(())
            }
            Some(sp) => Err(ExprError::UnexpectedToken {
                token: sp.token.describe(),
                at: sp.at,
            }),
            None => Err(ExprError::UnexpectedEnd),
        }
    }
}
