//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use flr_core::Colors;

use super::Diagnostics;
use super::message::Severity;

/// Renders diagnostics one block per finding:
///
/// ```text
/// warning[dangling-record-ref]: field `Line.end` refers to an unregistered record
///   --> b.h#5
///   = hint: ...
/// ```
pub struct DiagnosticsPrinter<'d> {
    diagnostics: &'d Diagnostics,
    colored: bool,
}

impl<'d> DiagnosticsPrinter<'d> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            colored: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let c = Colors::new(self.colored);

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(w)?;
            }

            let severity_color = match diag.severity() {
                Severity::Warning => c.yellow,
                Severity::Note => c.blue,
            };
            writeln!(
                w,
                "{}{}[{}]{}: {}",
                severity_color,
                diag.severity(),
                diag.kind().code(),
                c.reset,
                diag.message()
            )?;

            if let Some(subject) = diag.subject() {
                writeln!(w, "  {}-->{} {}", c.dim, c.reset, subject)?;
            }
            for hint in diag.hints() {
                writeln!(w, "  {}={} hint: {}", c.dim, c.reset, hint)?;
            }
        }

        Ok(())
    }
}
