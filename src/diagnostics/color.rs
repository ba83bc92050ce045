pub fn red(s: &str) -> String { format!("\x1b[31m{}\x1b[0m", s) }
pub fn blue(s: &str) -> String { format!("\x1b[34m{}\x1b[0m", s) }
pub fn bold(s: &str) -> String { format!("\x1b[1m{}\x1b[0m", s) }

pub fn error_tag() -> String { red(&bold("error:")) }

pub fn location(path: &str, line: usize, column: usize) -> String {
    format!("  {} {}:{}:{}", blue("-->"), path, line, column)
}

pub fn caret_line(line_text: &str, column: usize) -> String {
    let mut buf = String::new();
    buf.push_str("   |\n");
    buf.push_str(&format!("   | {}\n", line_text));
    let mut caret = String::new();
    caret.push_str("   | ");
    for _ in 1..column { caret.push(' '); }
    caret.push_str(&red("^"));
    buf.push_str(&caret);
    buf
}
