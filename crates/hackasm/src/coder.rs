//! `comp`/`dest`/`jump` mnemonic encoding.
//!
//! `comp` and `jump` are reproduced verbatim from
//! `original_source/Project 6/assembler.cpp`'s `Coder::initCompTable`/
//! `initJumpTable` — both are complete, canonical Hack ISA tables. `dest`
//! is **not** reproduced verbatim: the original's `initDestTable` only
//! covers 3 of the 6 possible orderings of a three-register destination
//! (`ADM`/`AMD`/`MDA`, missing `DAM`/`MAD`/`DMA`), an omission rather than
//! a deliberate design choice, so a real program spelling `MAD=D` would
//! silently assemble to garbage. `dest` is encoded here by checking which
//! of `A`/`D`/`M` the mnemonic contains, order-independent — the standard
//! and unambiguous reading of the destination field.

use toolchain_core::ToolError;

pub fn comp(mnemonic: &str) -> Option<&'static str> {
    Some(match mnemonic {
        "0" => "0101010",
        "1" => "0111111",
        "-1" => "0111010",
        "D" => "0001100",
        "A" => "0110000",
        "!D" => "0001101",
        "!A" => "0110001",
        "-D" => "0001111",
        "-A" => "0110011",
        "D+1" => "0011111",
        "A+1" => "0110111",
        "D-1" => "0001110",
        "A-1" => "0110010",
        "D+A" => "0000010",
        "D-A" => "0010011",
        "A-D" => "0000111",
        "D&A" => "0000000",
        "D|A" => "0010101",
        "M" => "1110000",
        "!M" => "1110001",
        "-M" => "1110011",
        "M+1" => "1110111",
        "M-1" => "1110010",
        "D+M" => "1000010",
        "D-M" => "1010011",
        "M-D" => "1000111",
        "D&M" => "1000000",
        "D|M" => "1010101",
        _ => return None,
    })
}

pub fn dest(mnemonic: &str) -> String {
    let a = if mnemonic.contains('A') { '1' } else { '0' };
    let d = if mnemonic.contains('D') { '1' } else { '0' };
    let m = if mnemonic.contains('M') { '1' } else { '0' };
    format!("{a}{d}{m}")
}

pub fn jump(mnemonic: &str) -> Option<&'static str> {
    Some(match mnemonic {
        "" => "000",
        "JGT" => "001",
        "JEQ" => "010",
        "JGE" => "011",
        "JLT" => "100",
        "JNE" => "101",
        "JLE" => "110",
        "JMP" => "111",
        _ => return None,
    })
}

/// Encode a C-instruction's three fields into the 13 low bits, with the
/// three leading `1` op-code bits prepended.
pub fn encode_c_instruction(comp_mnemonic: &str, dest_mnemonic: &str, jump_mnemonic: &str) -> Result<String, ToolError> {
    let comp_bits = comp(comp_mnemonic).ok_or_else(|| {
        ToolError::Malformed(format!("unknown comp mnemonic '{comp_mnemonic}'"))
    })?;
    let jump_bits = jump(jump_mnemonic)
        .ok_or_else(|| ToolError::Malformed(format!("unknown jump mnemonic '{jump_mnemonic}'")))?;
    Ok(format!("111{comp_bits}{}{jump_bits}", dest(dest_mnemonic)))
}
