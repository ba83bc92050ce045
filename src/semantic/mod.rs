pub mod analyzer;
pub mod error;
pub mod scope;
pub mod std_env;


use crate::ast::Program;
use crate::diagnostics::{Diagnostic, Reporter};
use analyzer::Checker;
pub use error::ErrorCode;

/// Runs the semantic pass over a parsed program. The AST is decorated
/// and rewritten in place; the collected diagnostics come back in
/// source order. Errors never abort the pass, so the list covers the
/// whole program.
pub fn check(program: &mut Program) -> Vec<Diagnostic> {
    let mut checker = Checker::new(Reporter::new());
    checker.check_program(program);
    checker.into_diagnostics()
}
