pub mod config;


use std::env;
use std::io::{self, IsTerminal};
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};
use std::process;

use tc_error::ErrorGuaranteed;
use tc_eval::evaluate;
use tc_lexer::strip_whitespace;
use tc_parse::session::ParseSession;
use tc_span::{FatalError, FatalErrorMarker};
use termcolor::{StandardStream, WriteColor};

/// Evaluated when no expression is given on the command line.
pub const DEFAULT_EXPR: &str = "td10+td20+td50=hfp16";

pub fn main() -> ! {
    let exit_code = catch_with_exit_code(|| {
        let exprs: Vec<String> = env::args().skip(1).collect();

        let color_var = env::var(config::COLOR_ENV).ok();
        let stdout_choice = config::color_choice(color_var.as_deref(), io::stdout().is_terminal());
        let stderr_choice = config::color_choice(color_var.as_deref(), io::stderr().is_terminal());

        let mut stdout = StandardStream::stdout(stdout_choice);
        let mut stderr = StandardStream::stderr(stderr_choice);

        let session = ParseSession::new();

        RunCalculator::new(exprs).run(&session, &mut stdout, &mut stderr)?;

        session.diag_ctx.abort_if_errors();

        Ok(())
    });

    process::exit(exit_code);
}

pub fn catch_fatal_error<R>(f: impl FnOnce() -> R) -> Result<R, FatalError> {
    catch_unwind(AssertUnwindSafe(f)).map_err(|value| {
        if value.is::<FatalErrorMarker>() {
            FatalError
        } else {
            resume_unwind(value)
        }
    })
}

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

pub fn catch_with_exit_code(f: impl FnOnce() -> Result<(), ErrorGuaranteed>) -> i32 {
    match catch_fatal_error(f) {
        Ok(Ok(())) => EXIT_SUCCESS,
        _ => EXIT_FAILURE,
    }
}

/// One driver invocation over a list of expressions.
pub struct RunCalculator {
    exprs: Vec<String>,
}

impl RunCalculator {
    pub fn new(exprs: Vec<String>) -> Self {
        let exprs = if exprs.is_empty() { vec![DEFAULT_EXPR.to_string()] } else { exprs };

        Self { exprs }
    }

    /// Prints one line per expression to `out` and renders diagnostics to `err`.
    ///
    /// Evaluation errors are recorded in the session; only a failure to write
    /// is returned here.
    pub fn run(
        &self,
        session: &ParseSession,
        out: &mut impl WriteColor,
        err: &mut impl WriteColor,
    ) -> Result<(), ErrorGuaranteed> {
        for expr in &self.exprs {
            let source = strip_whitespace(expr);

            let written = match evaluate(session, &source) {
                Ok(output) => writeln!(out, "{output}"),
                Err(error) => {
                    error.emit(&session.diag_ctx);
                    Ok(())
                }
            };

            written
                .and_then(|()| session.diag_ctx.flush_to(err, &source))
                .map_err(|e| session.diag_ctx.emit_err(format!("failed to write output: {e}")))?;
        }

        out.flush()
            .map_err(|e| session.diag_ctx.emit_err(format!("failed to flush output: {e}")))
    }
}
