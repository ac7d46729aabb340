//! Thin append-only VM bytecode formatter.
//!
//! One instruction per line, exactly the mnemonics spec.md §4.3 names. No
//! buffering semantics beyond the `BufWriter`'s own; the writer is opened
//! 1:1 per source file and flushed when the owning `CompileEngine` is done
//! with it.

use std::io::{self, BufWriter, Write};

use toolchain_core::{ArithmeticOp, Segment};

pub struct VmWriter<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> VmWriter<W> {
    pub fn new(sink: W) -> Self {
        VmWriter {
            out: BufWriter::new(sink),
        }
    }

    pub fn write_push(&mut self, segment: Segment, index: usize) -> io::Result<()> {
        writeln!(self.out, "push {segment} {index}")
    }

    pub fn write_pop(&mut self, segment: Segment, index: usize) -> io::Result<()> {
        writeln!(self.out, "pop {segment} {index}")
    }

    pub fn write_arithmetic(&mut self, op: ArithmeticOp) -> io::Result<()> {
        writeln!(self.out, "{op}")
    }

    pub fn write_label(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out, "label {label}")
    }

    pub fn write_goto(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out, "goto {label}")
    }

    pub fn write_if(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out, "if-goto {label}")
    }

    pub fn write_call(&mut self, name: &str, n_args: usize) -> io::Result<()> {
        writeln!(self.out, "call {name} {n_args}")
    }

    pub fn write_function(&mut self, name: &str, n_locals: usize) -> io::Result<()> {
        writeln!(self.out, "function {name} {n_locals}")
    }

    pub fn write_return(&mut self) -> io::Result<()> {
        writeln!(self.out, "return")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
