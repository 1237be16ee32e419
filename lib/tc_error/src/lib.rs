pub mod level;
pub mod msg;
pub mod diag;
pub mod diag_ctx;
pub mod emitter;


use msg::DiagnosticMessage;
use tc_span::Span;

/// Proof that at least one error diagnostic has been emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    pub(crate) fn new() -> Self {
        Self(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct MultiSpan {
    primary: Vec<Span>,
    labels: Vec<(Span, DiagnosticMessage)>,
}

impl MultiSpan {
    pub fn new() -> Self {
        Self { primary: vec![], labels: vec![] }
    }

    pub fn get_primary(&self) -> Option<Span> {
        self.primary.first().cloned()
    }

    pub fn push_label(&mut self, span: Span, label: impl Into<DiagnosticMessage>) {
        self.labels.push((span, label.into()));
    }

    pub fn labels(&self) -> impl Iterator<Item = &(Span, DiagnosticMessage)> {
        self.labels.iter()
    }

    /// Label attached to the primary span, if any.
    pub fn primary_label(&self) -> Option<&DiagnosticMessage> {
        let primary = self.get_primary()?;
        self.labels.iter().find(|(span, _)| *span == primary).map(|(_, label)| label)
    }
}

impl From<Span> for MultiSpan {
    fn from(span: Span) -> Self {
        Self { primary: vec![span], labels: vec![] }
    }
}
