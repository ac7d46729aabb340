//! Toolchain Core: shared data model for the Nand2Tetris pipeline
//!
//! Three independent crates (`jackc`, `vmtranslate`, `hackasm`) each lower
//! one stage of the pipeline. This crate holds the pieces that more than one
//! of them needs so the data model doesn't drift between stages: the token
//! model shared by the Jack tokenizer and compile engine, the two-tier
//! symbol table, the VM instruction model shared by the Jack compiler's
//! writer and the VM translator's parser, the error type every binary's
//! `main` converges on, and logging setup.
//!
//! # Modules
//!
//! - `token`: Jack token kinds and the fixed keyword set
//! - `symbol`: `VarKind`, `SymbolEntry`, `SymbolTable`
//! - `vm_instr`: `Segment`, `ArithmeticOp`, `VmInstruction`
//! - `error`: `ToolError`, the shared fail-fast error type
//! - `logging`: one-line `tracing` setup shared by every binary

pub mod error;
pub mod logging;
pub mod symbol;
pub mod token;
pub mod vm_instr;

pub use error::ToolError;
pub use symbol::{SymbolEntry, SymbolTable, VarKind};
pub use token::{is_symbol, Keyword, Token};
pub use vm_instr::{ArithmeticOp, Segment, VmInstruction};
