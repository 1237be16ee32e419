use std::io;

use itertools::Itertools;
use tc_span::Span;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::diag::DiagnosticInner;
use crate::level::Level;
use crate::msg::DiagnosticMessage;

/// Writes diagnostics in the familiar `error: ...` / `-->` / caret layout.
pub struct Emitter<'w, W: WriteColor> {
    writer: &'w mut W,
}

impl<'w, W: WriteColor> Emitter<'w, W> {
    pub fn new(writer: &'w mut W) -> Self {
        Self { writer }
    }

    pub fn emit_diagnostic(&mut self, diag: &DiagnosticInner, source: &str) -> io::Result<()> {
        self.writer.set_color(&diag.level.color())?;
        write!(self.writer, "{}", diag.level.to_str())?;
        self.writer.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(self.writer, ": {}", diag.messages.iter().join(" "))?;
        self.writer.reset()?;

        if let Some(primary) = diag.span.get_primary() {
            self.emit_snippet(diag, primary, source)?;
        }

        for note in &diag.notes {
            self.emit_note(note)?;
        }

        Ok(())
    }

    fn emit_snippet(&mut self, diag: &DiagnosticInner, primary: Span, source: &str) -> io::Result<()> {
        let gutter = gutter_spec();

        self.writer.set_color(&gutter)?;
        write!(self.writer, " --> ")?;
        self.writer.reset()?;
        writeln!(self.writer, "1:{}", column(source, primary) + 1)?;

        self.writer.set_color(&gutter)?;
        writeln!(self.writer, "  |")?;
        write!(self.writer, "1 | ")?;
        self.writer.reset()?;
        writeln!(self.writer, "{source}")?;

        self.emit_underline(diag.level, primary, '^', diag.span.primary_label(), source)?;

        for (span, label) in diag.span.labels().filter(|(span, _)| *span != primary) {
            self.emit_underline(Level::Note, *span, '-', Some(label), source)?;
        }

        Ok(())
    }

    fn emit_underline(
        &mut self,
        level: Level,
        span: Span,
        mark: char,
        label: Option<&DiagnosticMessage>,
        source: &str,
    ) -> io::Result<()> {
        let padding = " ".repeat(column(source, span));
        let width = source
            .get(span.lo.to_usize()..span.hi.to_usize())
            .map_or(0, |s| s.chars().count())
            .max(1);

        self.writer.set_color(&gutter_spec())?;
        write!(self.writer, "  | ")?;
        self.writer.set_color(&level.color())?;
        write!(self.writer, "{padding}{}", itertools::repeat_n(mark, width).collect::<String>())?;

        if let Some(label) = label {
            write!(self.writer, " {label}")?;
        }

        self.writer.reset()?;
        writeln!(self.writer)
    }

    fn emit_note(&mut self, note: &DiagnosticMessage) -> io::Result<()> {
        self.writer.set_color(&gutter_spec())?;
        write!(self.writer, "  = ")?;
        self.writer.set_color(ColorSpec::new().set_bold(true))?;
        write!(self.writer, "note")?;
        self.writer.reset()?;
        writeln!(self.writer, ": {note}")
    }
}

fn gutter_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Blue)).set_bold(true);
    spec
}

/// Column of `span.lo` in characters, clamped to the source.
fn column(source: &str, span: Span) -> usize {
    let lo = span.lo.to_usize().min(source.len());
    source.char_indices().take_while(|(idx, _)| *idx < lo).count()
}
