//! Diagnostic collection and rendering.
//!
//! The checker reports through a `Reporter` and knows nothing about how
//! diagnostics are displayed; rendering into colored, caret-underlined
//! output happens here, in the driver's hands.

use std::fmt;
use std::path::Path;

use crate::ast::SourcePos;
use crate::semantic::ErrorCode;

pub mod color;

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub code: ErrorCode,
    /// Interpolated detail: the offending identifier, operator symbol,
    /// found-type name or initializer index, depending on the code
    pub token: Option<String>,
    pub pos: SourcePos,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Some(token) => write!(f, "{}: {}", self.code, token),
            None => write!(f, "{}", self.code),
        }
    }
}

/// Collects diagnostics in the order they are reported.
#[derive(Debug, Default)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn report(&mut self, code: ErrorCode, token: Option<String>, pos: SourcePos) {
        self.diagnostics.push(Diagnostic { code, token, pos });
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Renders one diagnostic against its source file: message, location
/// and a caret line under the offending column.
pub fn render(diagnostic: &Diagnostic, path: &Path, source: &str) -> String {
    let line = diagnostic.pos.line_start;
    let column = diagnostic.pos.col_start;

    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        color::error_tag(),
        color::bold(&diagnostic.to_string())
    ));
    out.push_str(&format!(
        "{}\n",
        color::location(&path.display().to_string(), line, column)
    ));
    if let Some(line_text) = source.lines().nth(line.saturating_sub(1)) {
        out.push_str(&color::caret_line(line_text, column));
        out.push('\n');
    }
    out
}
