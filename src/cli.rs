use std::path::PathBuf;

use anyhow::bail;
use serde_json;

use crate::diagnostics;
use crate::lexer::tokenize;
use crate::parser::parse;
use crate::semantic;

/// Validates that the input file has a .vc extension.
fn validate_vc_file(input: &PathBuf) -> anyhow::Result<()> {
    if input.extension().map_or(false, |ext| ext == "vc") {
        Ok(())
    } else {
        bail!("Input file must have a .vc extension, but got: {}", input.display());
    }
}

/// Runs the full front end over a source file: scan, parse, check.
/// Every semantic diagnostic is rendered; scan and parse errors stop
/// their own phase.
pub fn check(input: PathBuf) -> anyhow::Result<()> {
    validate_vc_file(&input)?;

    let source = std::fs::read_to_string(&input)?;

    let tokens = tokenize(&source)?;
    let mut program = parse(&tokens)?;
    let diagnostics = semantic::check(&mut program);

    if diagnostics.is_empty() {
        println!("{}: no errors", input.display());
        return Ok(());
    }

    for diagnostic in &diagnostics {
        eprintln!("{}", diagnostics::render(diagnostic, &input, &source));
    }
    bail!("{} error(s) found in {}", diagnostics.len(), input.display());
}

pub fn lex(input: PathBuf, output: Option<PathBuf>) -> anyhow::Result<()> {
    validate_vc_file(&input)?;

    let source = std::fs::read_to_string(&input)?;
    let tokens = tokenize(&source)?;

    let token_data: Vec<serde_json::Value> = tokens
        .iter()
        .map(|token| {
            serde_json::json!({
                "type": format!("{:?}", token.token_type),
                "lexeme": token.lexeme,
                "line": token.pos.line_start,
                "column": token.pos.col_start,
            })
        })
        .collect();

    let output_path = output.unwrap_or_else(|| {
        let mut path = input.clone();
        path.set_extension("vc.lex.json");
        path
    });

    let json = serde_json::to_string_pretty(&token_data)?;
    std::fs::write(&output_path, json)?;

    println!("Tokens written to: {}", output_path.display());
    Ok(())
}

/// Dumps the decorated AST as JSON: parse, run the checker so types,
/// declaration links and rewrites are present, then serialize.
pub fn gen_ast(input: PathBuf, output: Option<PathBuf>) -> anyhow::Result<()> {
    validate_vc_file(&input)?;

    let source = std::fs::read_to_string(&input)?;
    let tokens = tokenize(&source)?;
    let mut program = parse(&tokens)?;
    let diagnostics = semantic::check(&mut program);
    for diagnostic in &diagnostics {
        eprintln!("{}", diagnostics::render(diagnostic, &input, &source));
    }

    let json = serde_json::to_string_pretty(&program)?;

    let output_path = output.unwrap_or_else(|| {
        let mut path = input.clone();
        path.set_extension("vc.ast.json");
        path
    });

    std::fs::write(&output_path, json)?;

    println!("AST written to: {}", output_path.display());
    Ok(())
}

pub fn version() -> anyhow::Result<()> {
    println!("vc front end version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
