use std::ops::ControlFlow;

use tc_format::render;
use tc_lexer::cursor::Cursor;
use tc_lexer::{Base, TokenKind};
use tc_parse::session::ParseSession;
use tc_parse::{parse_directive, parse_literal};
use tc_span::Span;

use crate::op::{BinOp, BinOpKind};
use crate::EvalError;

type Step = Result<ControlFlow<String>, EvalError>;

/// Left-to-right evaluator over an already whitespace-stripped expression.
pub struct Evaluator<'a> {
    session: &'a ParseSession,
    cursor: Cursor<'a>,
    acc: u64,
    pending: Option<BinOp>,
}

impl<'a> Evaluator<'a> {
    pub fn new(session: &'a ParseSession, expr: &'a str) -> Self {
        Self {
            session,
            cursor: Cursor::new(expr),
            acc: 0,
            pending: None,
        }
    }

    pub fn run(mut self) -> Result<String, EvalError> {
        loop {
            if let ControlFlow::Break(output) = self.step()? {
                return Ok(output);
            }
        }
    }

    fn step(&mut self) -> Step {
        let lo = self.cursor.pos();
        let kind = self.cursor.next_token();
        let span = Span::new(lo, self.cursor.pos());

        match kind {
            TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash => {
                self.pending = BinOpKind::from_token(kind).map(|kind| BinOp { kind, span });
                Ok(ControlFlow::Continue(()))
            }

            TokenKind::TypeMarker => self.typed_literal(span),

            TokenKind::FormatMarker => self.finish(span),

            TokenKind::Whitespace | TokenKind::Unknown => Ok(ControlFlow::Continue(())),

            TokenKind::Eof => {
                self.warn_dangling_operator();
                Ok(ControlFlow::Break(String::new()))
            }
        }
    }

    fn typed_literal(&mut self, marker: Span) -> Step {
        let lo = self.cursor.pos();
        let Some(code) = self.cursor.next() else {
            self.session
                .diag_ctx
                .create_span_warning(marker, "type marker at the end of the expression")
                .with_note("`t` must be followed by `b`, `o`, `d` or `h` and digits")
                .emit();
            self.warn_dangling_operator();
            return Ok(ControlFlow::Break(String::new()));
        };

        let base = Base::from_code(code).ok_or(EvalError::UnknownOperandType {
            code,
            span: Span::new(lo, self.cursor.pos()),
        })?;

        let lit = parse_literal(&mut self.cursor, base)?;
        let value = lit.value as u64;

        self.acc = match self.pending.take() {
            Some(op) => op.kind.apply(self.acc, value).ok_or(EvalError::DivisionByZero {
                dividend: self.acc,
                span: lit.span,
                op_span: op.span,
            })?,
            None => value,
        };

        Ok(ControlFlow::Continue(()))
    }

    /// Terminal state: the directive consumes the rest of the input.
    fn finish(&mut self, eq: Span) -> Step {
        self.warn_dangling_operator();

        let lo = self.cursor.pos();
        let format = parse_directive(&mut self.cursor);
        let span = eq.to(Span::new(lo, self.cursor.pos()));

        let output = render(self.acc, &format).map_err(|error| EvalError::Format { error, span })?;

        Ok(ControlFlow::Break(output))
    }

    fn warn_dangling_operator(&mut self) {
        if let Some(op) = self.pending.take() {
            self.session
                .diag_ctx
                .create_span_warning(op.span, format!("operator `{}` has no right-hand operand", op.kind.as_str()))
                .with_span_label(op.span, "ignored")
                .emit();
        }
    }
}
