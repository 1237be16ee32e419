use std::borrow::Cow;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticMessage {
    String(Cow<'static, str>),
}

impl DiagnosticMessage {
    pub fn as_str(&self) -> &str {
        match self {
            DiagnosticMessage::String(s) => s,
        }
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for DiagnosticMessage {
    fn from(s: String) -> Self {
        Self::String(Cow::Owned(s))
    }
}

impl From<&'static str> for DiagnosticMessage {
    fn from(s: &'static str) -> Self {
        Self::String(Cow::Borrowed(s))
    }
}
