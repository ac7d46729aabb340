//! VM instruction parser.
//!
//! One instruction per line; `//` starts a comment that runs to end of
//! line, blank and whitespace-only lines are skipped. The whole file is
//! parsed eagerly into a `Vec<VmInstruction>` rather than streamed — VM
//! files are small enough that this costs nothing and lets the code writer
//! work instruction-at-a-time without owning any I/O state.

use toolchain_core::{ArithmeticOp, Segment, ToolError, VmInstruction};

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn parse_index(s: &str, line_no: usize) -> Result<u16, ToolError> {
    s.parse().map_err(|_| {
        ToolError::Malformed(format!("line {line_no}: expected an integer, found '{s}'"))
    })
}

fn parse_line(line: &str, line_no: usize) -> Result<VmInstruction, ToolError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let malformed = |msg: String| Err(ToolError::Malformed(format!("line {line_no}: {msg}")));

    match parts.as_slice() {
        [op] if ArithmeticOp::parse(op).is_some() => {
            Ok(VmInstruction::Arithmetic(ArithmeticOp::parse(op).unwrap()))
        }
        ["return"] => Ok(VmInstruction::Return),
        ["push", seg, idx] => {
            let segment = Segment::parse(seg)
                .ok_or_else(|| ToolError::Malformed(format!("line {line_no}: unknown segment '{seg}'")))?;
            Ok(VmInstruction::Push(segment, parse_index(idx, line_no)?))
        }
        ["pop", seg, idx] => {
            let segment = Segment::parse(seg)
                .ok_or_else(|| ToolError::Malformed(format!("line {line_no}: unknown segment '{seg}'")))?;
            Ok(VmInstruction::Pop(segment, parse_index(idx, line_no)?))
        }
        ["label", name] => Ok(VmInstruction::Label(name.to_string())),
        ["goto", name] => Ok(VmInstruction::Goto(name.to_string())),
        ["if-goto", name] => Ok(VmInstruction::IfGoto(name.to_string())),
        ["function", name, n] => Ok(VmInstruction::Function(name.to_string(), parse_index(n, line_no)?)),
        ["call", name, n] => Ok(VmInstruction::Call(name.to_string(), parse_index(n, line_no)?)),
        [] => unreachable!("blank lines are filtered before parse_line is called"),
        other => malformed(format!("unrecognized instruction '{}'", other.join(" "))),
    }
}

/// Parse a complete VM source file into its instruction sequence.
pub fn parse(source: &str) -> Result<Vec<VmInstruction>, ToolError> {
    let mut instructions = Vec::new();
    for (idx, raw_line) in source.lines().enumerate() {
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }
        instructions.push(parse_line(line, idx + 1)?);
    }
    Ok(instructions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        let src = "// header\n\npush constant 7 // seven\nadd\n";
        let instrs = parse(src).unwrap();
        assert_eq!(
            instrs,
            vec![
                VmInstruction::Push(Segment::Constant, 7),
                VmInstruction::Arithmetic(ArithmeticOp::Add),
            ]
        );
    }

    #[test]
    fn parses_control_flow_and_calls() {
        let src = "label LOOP\ngoto LOOP\nif-goto LOOP\ncall Math.multiply 2\nfunction Main.main 3\nreturn\n";
        let instrs = parse(src).unwrap();
        assert_eq!(
            instrs,
            vec![
                VmInstruction::Label("LOOP".to_string()),
                VmInstruction::Goto("LOOP".to_string()),
                VmInstruction::IfGoto("LOOP".to_string()),
                VmInstruction::Call("Math.multiply".to_string(), 2),
                VmInstruction::Function("Main.main".to_string(), 3),
                VmInstruction::Return,
            ]
        );
    }

    #[test]
    fn unknown_instruction_is_malformed() {
        let err = parse("frobnicate 1 2").unwrap_err();
        assert!(matches!(err, ToolError::Malformed(_)));
    }

    #[test]
    fn unknown_segment_is_malformed() {
        let err = parse("push nowhere 0").unwrap_err();
        assert!(matches!(err, ToolError::Malformed(_)));
    }
}
