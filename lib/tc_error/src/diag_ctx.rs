use std::cell::RefCell;
use std::io;

use tc_span::FatalError;
use termcolor::WriteColor;
use thin_vec::ThinVec;

use crate::diag::{Diagnostic, DiagnosticInner};
use crate::emitter::Emitter;
use crate::level::Level;
use crate::msg::DiagnosticMessage;
use crate::{ErrorGuaranteed, MultiSpan};

/// Collects diagnostics for one driver run.
#[derive(Default)]
pub struct DiagnosticContext {
    inner: RefCell<DiagnosticContextInner>
}

impl DiagnosticContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_error(&self, msg: impl Into<DiagnosticMessage>) -> Diagnostic<'_> {
        Diagnostic::new(self, Level::Error, msg)
    }

    pub fn create_span_error(&self, span: impl Into<MultiSpan>, msg: impl Into<DiagnosticMessage>) -> Diagnostic<'_> {
        self.create_error(msg).with_span(span)
    }

    pub fn create_warning(&self, msg: impl Into<DiagnosticMessage>) -> Diagnostic<'_> {
        Diagnostic::new(self, Level::Warning, msg)
    }

    pub fn create_span_warning(&self, span: impl Into<MultiSpan>, msg: impl Into<DiagnosticMessage>) -> Diagnostic<'_> {
        self.create_warning(msg).with_span(span)
    }

    /// Emits a span-less error right away.
    pub fn emit_err(&self, msg: impl Into<DiagnosticMessage>) -> ErrorGuaranteed {
        self.emit_diagnostic(DiagnosticInner::new(Level::Error, msg))
            .unwrap_or_else(ErrorGuaranteed::new)
    }

    pub(crate) fn emit_diagnostic(&self, diag: DiagnosticInner) -> Option<ErrorGuaranteed> {
        let mut inner = self.inner.borrow_mut();

        let guar = if diag.level.is_error() {
            inner.err_count += 1;
            Some(ErrorGuaranteed::new())
        } else {
            None
        };

        inner.pending.push(diag);

        guar
    }

    pub fn err_count(&self) -> usize {
        self.inner.borrow().err_count
    }

    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        (self.err_count() > 0).then(ErrorGuaranteed::new)
    }

    pub fn abort_if_errors(&self) {
        if self.has_errors().is_some() {
            FatalError::raise();
        }
    }

    /// Removes and returns every diagnostic not yet rendered.
    pub fn take_pending(&self) -> ThinVec<DiagnosticInner> {
        std::mem::take(&mut self.inner.borrow_mut().pending)
    }

    /// Renders pending diagnostics against `source`, sorted by position.
    pub fn flush_to(&self, writer: &mut impl WriteColor, source: &str) -> io::Result<()> {
        let mut pending = self.take_pending();
        pending.sort_by_key(|diag| diag.sort_span.lo);

        let mut emitter = Emitter::new(writer);
        for diag in &pending {
            emitter.emit_diagnostic(diag, source)?;
        }

        Ok(())
    }
}

#[derive(Default)]
struct DiagnosticContextInner {
    pending: ThinVec<DiagnosticInner>,
    err_count: usize,
}
