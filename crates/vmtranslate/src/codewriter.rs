//! Lowers parsed VM instructions to Hack assembly text.
//!
//! Segment addressing is corrected relative to the reference translator:
//! `local`/`argument`/`this`/`that` go through their base register's
//! indirection (`@LCL`/`@ARG`/`@THIS`/`@THAT` then `A=D+M`), and
//! `pointer`/`temp` address their fixed RAM cells directly. The reference
//! translator instead emits a literal `@local`/`@argument`/... A-instruction
//! for every non-pointer/temp segment, which only works by accident because
//! those strings aren't Hack symbols at all — not reproduced here.
//!
//! Label/goto/if-goto use the reference translator's `file$label` mangling
//! so the same label text in two different source files in one translation
//! unit can't collide; `function`/`call` labels are left unmangled since VM
//! function names (`Class.method`) are already globally unique.

use std::io::{BufWriter, Write};

use toolchain_core::{ArithmeticOp, Segment, ToolError, VmInstruction};

fn segment_register(segment: Segment) -> &'static str {
    match segment {
        Segment::Local => "LCL",
        Segment::Argument => "ARG",
        Segment::This => "THIS",
        Segment::That => "THAT",
        _ => unreachable!("only the four indirect segments have a base register"),
    }
}

pub struct CodeWriter<W: Write> {
    out: BufWriter<W>,
    file_base: String,
    return_index: usize,
    continue_index: usize,
}

impl<W: Write> CodeWriter<W> {
    pub fn new(sink: W) -> Self {
        CodeWriter {
            out: BufWriter::new(sink),
            file_base: String::new(),
            return_index: 0,
            continue_index: 0,
        }
    }

    /// Begin lowering a new source file: resets the per-file label
    /// counters and sets the `static`/local-label name prefix.
    pub fn set_file_base(&mut self, base: &str) {
        self.file_base = base.to_string();
        self.return_index = 0;
        self.continue_index = 0;
    }

    pub fn flush(&mut self) -> Result<(), ToolError> {
        self.out.flush()?;
        Ok(())
    }

    fn asm(&mut self, s: &str) -> Result<(), ToolError> {
        self.out.write_all(s.as_bytes())?;
        Ok(())
    }

    fn emit_push_d(&mut self) -> Result<(), ToolError> {
        self.asm("@SP\nM=M+1\nA=M-1\nM=D\n")
    }

    fn emit_pop_to_d(&mut self) -> Result<(), ToolError> {
        self.asm("@SP\nAM=M-1\nD=M\n")
    }

    pub fn write_instruction(&mut self, instr: &VmInstruction) -> Result<(), ToolError> {
        match instr {
            VmInstruction::Arithmetic(op) => self.write_arithmetic(*op),
            VmInstruction::Push(seg, idx) => self.write_push(*seg, *idx),
            VmInstruction::Pop(seg, idx) => self.write_pop(*seg, *idx),
            VmInstruction::Label(name) => self.write_label(name),
            VmInstruction::Goto(name) => self.write_goto(name),
            VmInstruction::IfGoto(name) => self.write_if(name),
            VmInstruction::Function(name, n_locals) => self.write_function(name, *n_locals),
            VmInstruction::Call(name, n_args) => self.write_call(name, *n_args),
            VmInstruction::Return => self.write_return(),
        }
    }

    pub fn write_arithmetic(&mut self, op: ArithmeticOp) -> Result<(), ToolError> {
        // Unary ops rewrite the top cell in place; binary ops pop the right
        // operand into D first and combine it with the new top cell.
        if op.is_unary() {
            let expr = match op {
                ArithmeticOp::Neg => "-M",
                ArithmeticOp::Not => "!M",
                _ => unreachable!("is_unary only admits Neg and Not"),
            };
            return self.asm(&format!("@SP\nA=M-1\nM={expr}\n"));
        }

        match op {
            ArithmeticOp::Add | ArithmeticOp::Sub | ArithmeticOp::And | ArithmeticOp::Or => {
                self.emit_pop_to_d()?;
                let expr = match op {
                    ArithmeticOp::Add => "M+D",
                    // x - y: D holds y (popped last), M holds x; M-D is the
                    // corrected operand order (the reference translator's
                    // D-M computes y-x for this non-commutative op).
                    ArithmeticOp::Sub => "M-D",
                    ArithmeticOp::And => "M&D",
                    ArithmeticOp::Or => "M|D",
                    _ => unreachable!(),
                };
                self.asm(&format!("@SP\nA=M-1\nM={expr}\n"))
            }
            ArithmeticOp::Eq | ArithmeticOp::Gt | ArithmeticOp::Lt => {
                let label = format!("{}$CONTINUE.{}", self.file_base, self.continue_index);
                self.continue_index += 1;
                self.emit_pop_to_d()?;
                let jump = match op {
                    ArithmeticOp::Eq => "JEQ",
                    ArithmeticOp::Gt => "JGT",
                    ArithmeticOp::Lt => "JLT",
                    _ => unreachable!(),
                };
                self.asm(&format!(
                    "@SP\nA=M-1\nD=M-D\nM=-1\n@{label}\nD;{jump}\n@SP\nA=M-1\nM=0\n({label})\n"
                ))
            }
            ArithmeticOp::Neg | ArithmeticOp::Not => unreachable!("handled by the unary branch above"),
        }
    }

    pub fn write_push(&mut self, segment: Segment, index: u16) -> Result<(), ToolError> {
        match segment {
            Segment::Constant => self.asm(&format!("@{index}\nD=A\n"))?,
            Segment::Local | Segment::Argument | Segment::This | Segment::That => {
                let base = segment_register(segment);
                if index == 0 {
                    self.asm(&format!("@{base}\nA=M\nD=M\n"))?;
                } else {
                    self.asm(&format!("@{index}\nD=A\n@{base}\nA=D+M\nD=M\n"))?;
                }
            }
            Segment::Pointer => {
                let reg = if index == 0 { "THIS" } else { "THAT" };
                self.asm(&format!("@{reg}\nD=M\n"))?;
            }
            Segment::Temp => self.asm(&format!("@{}\nD=M\n", 5 + index))?,
            Segment::Static => self.asm(&format!("@{}.{index}\nD=M\n", self.file_base))?,
        }
        self.emit_push_d()
    }

    pub fn write_pop(&mut self, segment: Segment, index: u16) -> Result<(), ToolError> {
        match segment {
            Segment::Constant => {
                return Err(ToolError::Malformed(
                    "pop constant is not a valid VM instruction".to_string(),
                ));
            }
            Segment::Local | Segment::Argument | Segment::This | Segment::That => {
                let base = segment_register(segment);
                if index == 0 {
                    self.asm(&format!("@{base}\nD=M\n@R13\nM=D\n"))?;
                } else {
                    self.asm(&format!("@{index}\nD=A\n@{base}\nD=D+M\n@R13\nM=D\n"))?;
                }
                self.emit_pop_to_d()?;
                self.asm("@R13\nA=M\nM=D\n")
            }
            Segment::Pointer => {
                let reg = if index == 0 { "THIS" } else { "THAT" };
                self.emit_pop_to_d()?;
                self.asm(&format!("@{reg}\nM=D\n"))
            }
            Segment::Temp => {
                self.emit_pop_to_d()?;
                self.asm(&format!("@{}\nM=D\n", 5 + index))
            }
            Segment::Static => {
                let label = format!("{}.{index}", self.file_base);
                self.emit_pop_to_d()?;
                self.asm(&format!("@{label}\nM=D\n"))
            }
        }
    }

    pub fn write_label(&mut self, name: &str) -> Result<(), ToolError> {
        self.asm(&format!("({}${name})\n", self.file_base))
    }

    pub fn write_goto(&mut self, name: &str) -> Result<(), ToolError> {
        self.asm(&format!("@{}${name}\n0;JMP\n", self.file_base))
    }

    pub fn write_if(&mut self, name: &str) -> Result<(), ToolError> {
        self.emit_pop_to_d()?;
        self.asm(&format!("@{}${name}\nD;JNE\n", self.file_base))
    }

    pub fn write_function(&mut self, name: &str, n_locals: u16) -> Result<(), ToolError> {
        self.asm(&format!("({name})\n"))?;
        for _ in 0..n_locals {
            self.asm("@SP\nM=M+1\nA=M-1\nM=0\n")?;
        }
        Ok(())
    }

    pub fn write_call(&mut self, name: &str, n_args: u16) -> Result<(), ToolError> {
        let ret_label = format!("{}.{name}$ret.{}", self.file_base, self.return_index);
        self.return_index += 1;

        self.asm(&format!("@{ret_label}\nD=A\n"))?;
        self.emit_push_d()?;
        for reg in ["LCL", "ARG", "THIS", "THAT"] {
            self.asm(&format!("@{reg}\nD=M\n"))?;
            self.emit_push_d()?;
        }
        self.asm(&format!(
            "@SP\nD=M\n@LCL\nM=D\n@{}\nD=D-A\n@ARG\nM=D\n",
            5 + n_args
        ))?;
        self.asm(&format!("@{name}\n0;JMP\n"))?;
        self.asm(&format!("({ret_label})\n"))
    }

    pub fn write_return(&mut self) -> Result<(), ToolError> {
        // R13 = frame (LCL); R14 = *(frame - 5), the return address.
        self.asm("@LCL\nD=M\n@R13\nM=D\n")?;
        self.asm("@5\nA=D-A\nD=M\n@R14\nM=D\n")?;

        // *ARG = return value; SP = ARG + 1.
        self.emit_pop_to_d()?;
        self.asm("@ARG\nA=M\nM=D\n")?;
        self.asm("@ARG\nD=M+1\n@SP\nM=D\n")?;

        for reg in ["THAT", "THIS", "ARG", "LCL"] {
            self.asm(&format!("@R13\nAM=M-1\nD=M\n@{reg}\nM=D\n"))?;
        }
        self.asm("@R14\nA=M\n0;JMP\n")
    }

    /// Prepend the bootstrap sequence (spec.md §4.5.5 / SPEC_FULL.md §4.5):
    /// initialize `SP` to 256, then call `Sys.init` with no arguments. Used
    /// only for multi-file (directory) translation units.
    pub fn write_bootstrap(&mut self) -> Result<(), ToolError> {
        self.asm("@256\nD=A\n@SP\nM=D\n")?;
        let saved = std::mem::replace(&mut self.file_base, "Bootstrap".to_string());
        self.write_call("Sys.init", 0)?;
        self.file_base = saved;
        Ok(())
    }
}
