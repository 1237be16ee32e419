use tc_lexer::TokenKind;
use tc_span::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOpKind {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl BinOpKind {
    pub fn from_token(kind: TokenKind) -> Option<BinOpKind> {
        match kind {
            TokenKind::Plus => Some(BinOpKind::Add),
            TokenKind::Minus => Some(BinOpKind::Subtract),
            TokenKind::Star => Some(BinOpKind::Multiply),
            TokenKind::Slash => Some(BinOpKind::Divide),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinOpKind::Add => "+",
            BinOpKind::Subtract => "-",
            BinOpKind::Multiply => "*",
            BinOpKind::Divide => "/",
        }
    }

    /// Wrapping `u64` arithmetic; `None` only for division by zero.
    pub fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            BinOpKind::Add => Some(lhs.wrapping_add(rhs)),
            BinOpKind::Subtract => Some(lhs.wrapping_sub(rhs)),
            BinOpKind::Multiply => Some(lhs.wrapping_mul(rhs)),
            BinOpKind::Divide => lhs.checked_div(rhs),
        }
    }
}

/// The operator waiting for its right-hand literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinOp {
    pub kind: BinOpKind,
    pub span: Span,
}
