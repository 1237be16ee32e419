use std::fmt;

use tc_error::diag::Diagnostic;
use tc_error::diag_ctx::DiagnosticContext;
use tc_error::ErrorGuaranteed;
use tc_format::FormatError;
use tc_parse::LiteralError;
use tc_span::Span;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    MalformedLiteral(LiteralError),
    UnknownOperandType { code: char, span: Span },
    /// `span` covers the divisor literal, `op_span` the `/`.
    DivisionByZero { dividend: u64, span: Span, op_span: Span },
    Format { error: FormatError, span: Span },
}

impl EvalError {
    pub fn span(&self) -> Span {
        match self {
            EvalError::MalformedLiteral(err) => err.span,
            EvalError::UnknownOperandType { span, .. }
            | EvalError::DivisionByZero { span, .. }
            | EvalError::Format { span, .. } => *span,
        }
    }

    pub fn to_diagnostic<'a>(&self, ctx: &'a DiagnosticContext) -> Diagnostic<'a> {
        let diag = ctx.create_span_error(self.span(), self.to_string());

        match self {
            EvalError::MalformedLiteral(err) => diag
                .with_span_label(err.span, format!("expected {} digits", err.base.name()))
                .with_note("literals are read as signed 64-bit integers"),

            EvalError::UnknownOperandType { span, .. } => {
                diag.with_span_label(*span, "expected `b`, `o`, `d` or `h`")
            }

            EvalError::DivisionByZero { dividend, span, op_span } => diag
                .with_span_label(*span, "divisor is zero")
                .with_span_label(*op_span, "division happens here")
                .with_note(format!("the accumulator was {dividend}")),

            EvalError::Format { error: FormatError::MissingRadix, span } => diag
                .with_span_label(*span, "in this directive")
                .with_note("add one of `b`, `o`, `d` or `h` after `=`"),

            EvalError::Format { error: FormatError::PadTooWide { .. }, span } => diag
                .with_span_label(*span, "in this directive")
                .with_note("the pad width is the bit width, or a quarter of it for `h`"),
        }
    }

    pub fn emit(&self, ctx: &DiagnosticContext) -> Option<ErrorGuaranteed> {
        self.to_diagnostic(ctx).emit()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::MalformedLiteral(err) => fmt::Display::fmt(err, f),
            EvalError::UnknownOperandType { code, .. } => write!(f, "unknown operand type `{code}`"),
            EvalError::DivisionByZero { .. } => f.write_str("attempt to divide by zero"),
            EvalError::Format { error, .. } => fmt::Display::fmt(error, f),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvalError::MalformedLiteral(err) => Some(err),
            EvalError::Format { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<LiteralError> for EvalError {
    fn from(err: LiteralError) -> Self {
        EvalError::MalformedLiteral(err)
    }
}
