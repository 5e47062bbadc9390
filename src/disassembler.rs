//! Linear disassembly of a memory image, sharing the instruction table with
//! the execution engine.
//!
//! Unlike the engine, the disassembler never resolves or validates
//! operands — it just slices memory into instruction-shaped runs by greedy
//! left-to-right consumption, exactly as `vm.cpp::disassemble_to_file` does.

use crate::constants::MEMORY_WORDS;
use crate::instructions::Opcode;
use std::fmt::Write as _;

/// Produces the full listing for `memory`, one line per instruction or
/// unknown word.
pub fn disassemble(memory: &[u16]) -> String {
    let mut out = String::new();
    out.push_str("Byte    Addr    Inst  Args\n");

    let mut pc = 0usize;
    while pc < MEMORY_WORDS {
        let word = memory.get(pc).copied().unwrap_or(0);
        let byte_addr = (pc as u32) * 2;

        write!(out, "0x{:04x}  0x{:04x}  ", byte_addr, pc).unwrap();

        match Opcode::from_word(word) {
            Some(opcode) => {
                let arity = opcode.arity();
                write!(out, "{:<4}", opcode.mnemonic()).unwrap();
                for i in 0..arity {
                    let arg = memory.get(pc + 1 + i).copied().unwrap_or(0);
                    if i == 0 {
                        write!(out, "  0x{:04x}", arg).unwrap();
                    } else {
                        write!(out, ", 0x{:04x}", arg).unwrap();
                    }
                }
                pc += 1 + arity;
            }
            None => {
                write!(out, "Unknown: 0x{:04x}", word).unwrap();
                pc += 1;
            }
        }

        out.push('\n');
    }

    out
}
