use std::panic::resume_unwind;

/// Unwinding payload used to abort a run after errors were already reported.
#[derive(Clone, Copy, Debug)]
#[must_use]
pub struct FatalError;

impl FatalError {
    pub fn raise() -> ! {
        resume_unwind(Box::new(FatalErrorMarker));
    }
}

pub struct FatalErrorMarker;
