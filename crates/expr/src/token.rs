//! Tokenizer for expression strings.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::ExprError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl Token {
    /// Human-readable rendering for error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            Token::Number(n) => format!("{n}"),
            Token::Ident(name) => name.clone(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Caret => "^".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        }
    }
}

/// A token plus the byte offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub token: Token,
    pub at: usize,
}

pub(crate) fn tokenize(src: &str) -> Result<Vec<Spanned>, ExprError> {
    let mut tokens = Vec::new();
    let mut chars = src.char_indices().peekable();

    while let Some(&(at, ch)) = chars.peek() {
        let token = match ch {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '^' => Token::Caret,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                tokens.push(lex_number(src, &mut chars)?);
                continue;
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                tokens.push(lex_ident(src, &mut chars));
                continue;
            }
            other => return Err(ExprError::UnexpectedChar { ch: other, at }),
        };
        chars.next();
        tokens.push(Spanned { token, at });
    }

    Ok(tokens)
}

/// Lex a numeric literal: digits/dots, then an optional `e[+-]digits`
/// exponent. The exponent is only consumed when digits actually follow, so
/// `2e` lexes as the number 2 followed by the identifier `e` (and the parser
/// rejects the sequence).
fn lex_number(
    src: &str,
    chars: &mut Peekable<CharIndices<'_>>,
) -> Result<Spanned, ExprError> {
    let &(start, _) = chars.peek().expect("lex_number called at end of input");
    let mut end = start;

    while let Some(&(i, c)) = chars.peek() {
        if c.is_ascii_digit() || c == '.' {
            end = i + c.len_utf8();
            chars.next();
        } else {
            break;
        }
    }

    if let Some(&(_, c)) = chars.peek() {
        if c == 'e' || c == 'E' {
            let mut probe = chars.clone();
            probe.next();
            if let Some(&(_, s)) = probe.peek() {
                if s == '+' || s == '-' {
                    probe.next();
                }
            }
            let mut exponent_end = None;
            while let Some(&(j, d)) = probe.peek() {
                if d.is_ascii_digit() {
                    exponent_end = Some(j + 1);
                    probe.next();
                } else {
                    break;
                }
            }
            if let Some(j) = exponent_end {
                *chars = probe;
                end = j;
            }
        }
    }

    let text = &src[start..end];
    let value: f64 = text
        .parse()
        .map_err(|_| ExprError::InvalidNumber(text.to_string()))?;

    Ok(Spanned {
        token: Token::Number(value),
        at: start,
    })
}

fn lex_ident(src: &str, chars: &mut Peekable<CharIndices<'_>>) -> Spanned {
    let &(start, _) = chars.peek().expect("lex_ident called at end of input");
    let mut end = start;

    while let Some(&(i, c)) = chars.peek() {
        if c.is_ascii_alphanumeric() || c == '_' {
            end = i + c.len_utf8();
            chars.next();
        } else {
            break;
        }
    }

    Spanned {
        token: Token::Ident(src[start..end].to_string()),
        at: start,
    }
}
