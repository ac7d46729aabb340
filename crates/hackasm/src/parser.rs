//! Hack assembly parser.
//!
//! Whitespace is stripped entirely (not just trimmed — matching
//! `original_source/Project 6/assembler.cpp`'s blanket `isspace` removal,
//! which also tolerates `A M D = D + 1 ; J M P`-style spaced-out source),
//! then a `//` comment truncates the rest of the line. What remains
//! classifies as an `A`-instruction (`@...`), an `L`-instruction (a
//! `(LABEL)` pseudo-instruction), or a `C`-instruction.

use toolchain_core::ToolError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    A(String),
    C {
        dest: String,
        comp: String,
        jump: String,
    },
    Label(String),
}

fn strip_whitespace_and_comment(raw: &str) -> String {
    let no_space: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    match no_space.find('/') {
        Some(idx) => no_space[..idx].to_string(),
        None => no_space,
    }
}

fn parse_line(line: &str, line_no: usize) -> Result<Instruction, ToolError> {
    if let Some(inner) = line.strip_prefix('(') {
        let name = inner.strip_suffix(')').ok_or_else(|| {
            ToolError::Malformed(format!("line {line_no}: unterminated label '{line}'"))
        })?;
        return Ok(Instruction::Label(name.to_string()));
    }
    if let Some(symbol) = line.strip_prefix('@') {
        if symbol.is_empty() {
            return Err(ToolError::Malformed(format!(
                "line {line_no}: empty A-instruction"
            )));
        }
        return Ok(Instruction::A(symbol.to_string()));
    }

    let (dest, rest) = match line.find('=') {
        Some(idx) => (line[..idx].to_string(), &line[idx + 1..]),
        None => (String::new(), line),
    };
    let (comp, jump) = match rest.find(';') {
        Some(idx) => (rest[..idx].to_string(), rest[idx + 1..].to_string()),
        None => (rest.to_string(), String::new()),
    };
    if comp.is_empty() {
        return Err(ToolError::Malformed(format!(
            "line {line_no}: missing comp field in '{line}'"
        )));
    }
    Ok(Instruction::C { dest, comp, jump })
}

/// Parse a complete `.asm` source file into its instruction sequence,
/// skipping blank lines and full-line comments.
pub fn parse(source: &str) -> Result<Vec<Instruction>, ToolError> {
    let mut out = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = strip_whitespace_and_comment(raw);
        if line.is_empty() {
            continue;
        }
        out.push(parse_line(&line, idx + 1)?);
    }
    Ok(out)
}
