//! Lexer for normalized expressions.

use super::error::EvalError;
use std::fmt;

/// Lexical token of a normalized expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lexeme {
    Num(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    ParenOpen,
    ParenClose,
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(num) => write!(f, "{num}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::ParenOpen => write!(f, "("),
            Self::ParenClose => write!(f, ")"),
        }
    }
}

/// A lexeme together with its character offset in the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spanned {
    pub lexeme: Lexeme,
    pub position: usize,
}

/// Split a normalized expression into lexemes.
///
/// Whitespace is skipped. Number literals are runs of ASCII digits and
/// dots; a run with more than one dot is rejected.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, EvalError> {
    let mut out = Vec::new();
    let mut chars = input.chars().enumerate().peekable();

    while let Some((position, ch)) = chars.next() {
        let lexeme = match ch {
            c if c.is_whitespace() => continue,
            '+' => Lexeme::Plus,
            '-' => Lexeme::Minus,
            '*' => Lexeme::Star,
            '/' => Lexeme::Slash,
            '^' => Lexeme::Caret,
            '(' => Lexeme::ParenOpen,
            ')' => Lexeme::ParenClose,
            '0'..='9' | '.' => {
                let mut literal = String::from(ch);
                while let Some(&(_, next)) = chars.peek() {
                    if next.is_ascii_digit() || next == '.' {
                        literal.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                Lexeme::Num(parse_literal(&literal)?)
            }
            ch => return Err(EvalError::UnexpectedCharacter { ch, position }),
        };
        out.push(Spanned { lexeme, position });
    }

    Ok(out)
}

fn parse_literal(literal: &str) -> Result<f64, EvalError> {
    let well_formed = literal.chars().any(|c| c.is_ascii_digit())
        && literal.chars().all(|c| c.is_ascii_digit() || c == '.')
        && literal.matches('.').count() <= 1;
    if !well_formed {
        return Err(EvalError::InvalidNumber(literal.to_string()));
    }
    literal
        .parse()
        .map_err(|_| EvalError::InvalidNumber(literal.to_string()))
}
