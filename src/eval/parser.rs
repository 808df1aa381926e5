//! Recursive-descent parser and tree evaluator.
//!
//! Precedence, lowest first:
//! - `expr`:  `term (('+' | '-') term)*`
//! - `term`:  `unary (('*' | '/') unary)*`
//! - `unary`: `('-' | '+') unary | power`
//! - `power`: `atom ('^' unary)?`, right associative
//! - `atom`:  number | `'(' expr ')'`
//!
//! Unary minus binds looser than `^`, so `-2^2` is `-4` while `2^-1` is
//! `0.5`. Trees deeper than [`MAX_DEPTH`] are rejected with
//! [`EvalError::TooDeep`].

use super::error::EvalError;
use super::lexer::{Lexeme, Spanned};
use std::iter::Peekable;

/// Parsed arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Evaluate the tree.
    ///
    /// Division by an exact zero fails with [`EvalError::DivisionByZero`];
    /// any other non-finite intermediate fails with
    /// [`EvalError::NonFinite`].
    pub fn eval(&self) -> Result<f64, EvalError> {
        let value = match self {
            Self::Num(num) => *num,
            Self::Neg(inner) => -inner.eval()?,
            Self::Add(lhs, rhs) => lhs.eval()? + rhs.eval()?,
            Self::Sub(lhs, rhs) => lhs.eval()? - rhs.eval()?,
            Self::Mul(lhs, rhs) => lhs.eval()? * rhs.eval()?,
            Self::Div(lhs, rhs) => {
                let dividend = lhs.eval()?;
                let divisor = rhs.eval()?;
                if divisor == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                dividend / divisor
            }
            Self::Pow(base, exponent) => base.eval()?.powf(exponent.eval()?),
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite)
        }
    }
}

/// Deepest expression tree the parser will build.
///
/// Counts parenthesis levels, stacked signs, exponents and chained binary
/// operators alike, which also bounds the recursion in [`Expr::eval`].
pub const MAX_DEPTH: usize = 256;

/// Parse lexemes into an expression tree.
pub fn parse(lexemes: Vec<Spanned>) -> Result<Expr, EvalError> {
    if lexemes.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser {
        tokens: lexemes.into_iter().peekable(),
        depth: 0,
    };
    let node = parser.parse_expr()?;

    if let Some(extra) = parser.tokens.next() {
        return Err(unexpected(extra));
    }

    Ok(node.expr)
}

/// A subtree together with its height.
struct Node {
    expr: Expr,
    height: usize,
}

impl Node {
    fn leaf(num: f64) -> Self {
        Self {
            expr: Expr::Num(num),
            height: 1,
        }
    }

    fn unary(
        build: fn(Box<Expr>) -> Expr,
        inner: Node,
        position: usize,
    ) -> Result<Self, EvalError> {
        let height = check_height(inner.height + 1, position)?;
        Ok(Self {
            expr: build(Box::new(inner.expr)),
            height,
        })
    }

    fn binary(
        build: fn(Box<Expr>, Box<Expr>) -> Expr,
        lhs: Node,
        rhs: Node,
        position: usize,
    ) -> Result<Self, EvalError> {
        let height = check_height(lhs.height.max(rhs.height) + 1, position)?;
        Ok(Self {
            expr: build(Box::new(lhs.expr), Box::new(rhs.expr)),
            height,
        })
    }
}

fn check_height(height: usize, position: usize) -> Result<usize, EvalError> {
    if height > MAX_DEPTH {
        Err(EvalError::TooDeep {
            position,
            max: MAX_DEPTH,
        })
    } else {
        Ok(height)
    }
}

fn unexpected(spanned: Spanned) -> EvalError {
    EvalError::UnexpectedToken {
        found: spanned.lexeme.to_string(),
        position: spanned.position,
    }
}

struct Parser {
    tokens: Peekable<std::vec::IntoIter<Spanned>>,
    depth: usize,
}

impl Parser {
    fn peek(&mut self) -> Option<Spanned> {
        self.tokens.peek().copied()
    }

    /// Run `f` one recursion level deeper.
    fn nested<T>(
        &mut self,
        position: usize,
        f: impl FnOnce(&mut Self) -> Result<T, EvalError>,
    ) -> Result<T, EvalError> {
        if self.depth >= MAX_DEPTH {
            return Err(EvalError::TooDeep {
                position,
                max: MAX_DEPTH,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn parse_expr(&mut self) -> Result<Node, EvalError> {
        let mut lhs = self.parse_term()?;

        while let Some(op @ Spanned {
            lexeme: Lexeme::Plus | Lexeme::Minus,
            ..
        }) = self.peek()
        {
            self.tokens.next();
            let rhs = self.parse_term()?;
            let build: fn(Box<Expr>, Box<Expr>) -> Expr = match op.lexeme {
                Lexeme::Plus => Expr::Add,
                _ => Expr::Sub,
            };
            lhs = Node::binary(build, lhs, rhs, op.position)?;
        }

        Ok(lhs)
    }

    fn parse_term(&mut self) -> Result<Node, EvalError> {
        let mut lhs = self.parse_unary()?;

        while let Some(op @ Spanned {
            lexeme: Lexeme::Star | Lexeme::Slash,
            ..
        }) = self.peek()
        {
            self.tokens.next();
            let rhs = self.parse_unary()?;
            let build: fn(Box<Expr>, Box<Expr>) -> Expr = match op.lexeme {
                Lexeme::Star => Expr::Mul,
                _ => Expr::Div,
            };
            lhs = Node::binary(build, lhs, rhs, op.position)?;
        }

        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Node, EvalError> {
        match self.peek() {
            Some(Spanned {
                lexeme: Lexeme::Minus,
                position,
            }) => {
                self.tokens.next();
                let inner = self.nested(position, Self::parse_unary)?;
                Node::unary(Expr::Neg, inner, position)
            }
            Some(Spanned {
                lexeme: Lexeme::Plus,
                position,
            }) => {
                self.tokens.next();
                self.nested(position, Self::parse_unary)
            }
            _ => self.parse_power(),
        }
    }

    fn parse_power(&mut self) -> Result<Node, EvalError> {
        let base = self.parse_atom()?;

        if let Some(Spanned {
            lexeme: Lexeme::Caret,
            position,
        }) = self.peek()
        {
            self.tokens.next();
            let exponent = self.nested(position, Self::parse_unary)?;
            return Node::binary(Expr::Pow, base, exponent, position);
        }

        Ok(base)
    }

    fn parse_atom(&mut self) -> Result<Node, EvalError> {
        let Some(spanned) = self.tokens.next() else {
            return Err(EvalError::UnexpectedEnd);
        };

        match spanned.lexeme {
            Lexeme::Num(num) => Ok(Node::leaf(num)),
            Lexeme::ParenOpen => {
                let inner = self.nested(spanned.position, Self::parse_expr)?;
                match self.tokens.next() {
                    Some(Spanned {
                        lexeme: Lexeme::ParenClose,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(unexpected(other)),
                    None => Err(EvalError::UnclosedParenthesis {
                        position: spanned.position,
                    }),
                }
            }
            _ => Err(unexpected(spanned)),
        }
    }
}
