use tc_error::diag_ctx::DiagnosticContext;

#[derive(Default)]
pub struct ParseSession {
    pub diag_ctx: DiagnosticContext,
}

impl ParseSession {
    pub fn new() -> Self {
        Self::default()
    }
}
