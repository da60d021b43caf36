//! Nested-block writer for braced initializer syntax.
//!
//! Knows nothing about records or fields. It tracks indentation and the
//! terminator each open block will close with.

use super::invariants::{ensure_balanced, ensure_open_block};

/// Trailing punctuation after a closing brace or an assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terminator {
    /// `,` for members of an initializer list.
    Comma,
    /// `;` for top-level declarations.
    Semicolon,
    /// Nothing, for function bodies and the last member of a list.
    Bare,
}

impl Terminator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Bare => "",
        }
    }
}

#[derive(Debug)]
pub struct Writer {
    pub(super) out: String,
    pub(super) unit: String,
    pub(super) open: Vec<Terminator>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Writer indenting with tabs.
    pub fn new() -> Self {
        Self::with_indent("\t")
    }

    pub fn with_indent(unit: impl Into<String>) -> Self {
        Self {
            out: String::new(),
            unit: unit.into(),
            open: Vec::new(),
        }
    }

    /// Number of blocks currently open.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    fn indent(&mut self) {
        for _ in 0..self.open.len() {
            self.out.push_str(&self.unit);
        }
    }

    /// One indented line.
    pub fn line(&mut self, text: &str) {
        self.indent();
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// An empty line. Carries no indentation.
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn comment(&mut self, text: &str) {
        self.line(&format!("// {text}"));
    }

    /// Open a block: `header {`, or a bare `{` when the header is empty.
    ///
    /// `terminator` is written after the matching closing brace.
    pub fn begin_block(&mut self, header: &str, terminator: Terminator) {
        if header.is_empty() {
            self.line("{");
        } else {
            self.line(&format!("{header} {{"));
        }
        self.open.push(terminator);
    }

    /// Close the innermost block with the terminator it was opened with.
    pub fn end_block(&mut self) {
        let terminator = ensure_open_block(self.open.pop());
        self.line(&format!("}}{}", terminator.as_str()));
    }

    /// `dst = value<terminator>`.
    pub fn assign(&mut self, dst: &str, value: impl std::fmt::Display, terminator: Terminator) {
        self.line(&format!("{dst} = {value}{}", terminator.as_str()));
    }

    /// `dst = header {` with no line break before the brace.
    pub fn assign_block(&mut self, dst: &str, header: &str, terminator: Terminator) {
        if header.is_empty() {
            self.begin_block(&format!("{dst} ="), terminator);
        } else {
            self.begin_block(&format!("{dst} = {header}"), terminator);
        }
    }

    /// Take the output. Every opened block must have been closed.
    pub fn finish(self) -> String {
        ensure_balanced(self.open.len());
        self.out
    }
}

/// Quote `s` as a C string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
