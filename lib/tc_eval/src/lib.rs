pub mod op;
pub mod error;
pub mod eval;


use tc_lexer::strip_whitespace;
use tc_parse::session::ParseSession;

pub use error::EvalError;
pub use eval::Evaluator;

/// Evaluates one expression after stripping its whitespace.
///
/// Returns an empty string when the expression has no `=` directive.
/// Spans in errors and diagnostics refer to the stripped text.
pub fn evaluate(session: &ParseSession, source: &str) -> Result<String, EvalError> {
    let expr = strip_whitespace(source);
    Evaluator::new(session, &expr).run()
}
