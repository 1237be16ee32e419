use std::ops::{Deref, DerefMut};

use tc_span::Span;
use thin_vec::{thin_vec, ThinVec};

use crate::{diag_ctx::DiagnosticContext, level::Level, msg::DiagnosticMessage, ErrorGuaranteed, MultiSpan};

/// A diagnostic under construction. Nothing is recorded until [`Diagnostic::emit`].
pub struct Diagnostic<'a> {
    pub ctx: &'a DiagnosticContext,

    diag: Box<DiagnosticInner>,
}

impl Deref for Diagnostic<'_> {
    type Target = DiagnosticInner;

    fn deref(&self) -> &Self::Target {
        &self.diag
    }
}

impl DerefMut for Diagnostic<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.diag
    }
}

macro_rules! with {
    {
        $(#[$attrs:meta])*
        pub fn ($f:ident, $with_f:ident)(&mut $self:ident, $($name:ident: $ty:ty),* $(,)?) -> &mut Self {
            $($body:tt)*
        }
    } => {
        // The `&mut self` builder.
        $(#[$attrs])*
        #[doc = concat!("See [`Diagnostic::", stringify!($f), "()`].")]
        pub fn $f(&mut $self, $($name: $ty),*) -> &mut Self {
            $($body)*
        }

        // The `with_*` variant.
        $(#[$attrs])*
        #[doc = concat!("See [`Diagnostic::", stringify!($f), "()`].")]
        pub fn $with_f(mut $self, $($name: $ty),*) -> Self {
            $self.$f($($name),*);
            $self
        }
    };
}

impl<'a> Diagnostic<'a> {
    pub fn new(ctx: &'a DiagnosticContext, level: Level, msg: impl Into<DiagnosticMessage>) -> Self {
        Self {
            ctx,
            diag: Box::new(DiagnosticInner::new(level, msg))
        }
    }

    with! {
        pub fn (span, with_span)(&mut self, span: impl Into<MultiSpan>) -> &mut Self {
            self.span = span.into();

            if let Some(span) = self.span.get_primary() {
                self.sort_span = span;
            }

            self
        }
    }

    with! {
        pub fn (span_label, with_span_label)(&mut self, span: Span, label: impl Into<DiagnosticMessage>) -> &mut Self {
            self.span.push_label(span, label);
            self
        }
    }

    with! {
        pub fn (note, with_note)(&mut self, note: impl Into<DiagnosticMessage>) -> &mut Self {
            self.notes.push(note.into());
            self
        }
    }

    /// Records the diagnostic in its context.
    pub fn emit(self) -> Option<ErrorGuaranteed> {
        let Diagnostic { ctx, diag } = self;
        ctx.emit_diagnostic(*diag)
    }
}

#[derive(Clone, Debug)]
pub struct DiagnosticInner {
    pub level: Level,

    pub messages: ThinVec<DiagnosticMessage>,
    pub notes: ThinVec<DiagnosticMessage>,
    pub span: MultiSpan,

    pub sort_span: Span,
}

impl DiagnosticInner {
    pub fn new<M: Into<DiagnosticMessage>>(level: Level, msg: M) -> Self {
        Self {
            level,
            messages: thin_vec![msg.into()],
            notes: ThinVec::new(),
            span: MultiSpan::new(),
            sort_span: Span::DUMMY
        }
    }
}
