//! The instruction table: opcode values, mnemonics, and arities.
//!
//! Opcode semantics themselves live in [`crate::processor`]; this module is
//! only the decode side (opcode → mnemonic/arity), shared by the execution
//! engine and the disassembler.

use num_derive::{FromPrimitive, ToPrimitive};

/// The 22 opcodes understood by the virtual machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum Opcode {
    /// Terminate execution normally.
    Halt,
    /// `SET a b` — set register `a` to the value of `b`.
    Set,
    /// `PUSH a` — push the value of `a` onto the stack.
    Push,
    /// `POP a` — pop the stack into register `a`; faults if the stack is empty.
    Pop,
    /// `EQ a b c` — set `a` to 1 if `b == c`, else 0.
    Eq,
    /// `GT a b c` — set `a` to 1 if `b > c` (unsigned), else 0.
    Gt,
    /// `JMP a` — jump to `a`.
    Jmp,
    /// `JT a b` — jump to `b` if `a` is nonzero.
    Jt,
    /// `JF a b` — jump to `b` if `a` is zero.
    Jf,
    /// `ADD a b c` — set `a` to `(b + c) mod 32768`.
    Add,
    /// `MULT a b c` — set `a` to `(b * c) mod 32768`.
    Mult,
    /// `MOD a b c` — set `a` to `b mod c`.
    Mod,
    /// `AND a b c` — set `a` to the bitwise and of `b` and `c`.
    And,
    /// `OR a b c` — set `a` to the bitwise or of `b` and `c`.
    Or,
    /// `NOT a b` — set `a` to the 15-bit bitwise complement of `b`.
    Not,
    /// `RMEM a b` — set `a` to the value at memory address `b`.
    Rmem,
    /// `WMEM a b` — write `b` to memory address `a`.
    Wmem,
    /// `CALL a` — push the return address, then jump to `a`.
    Call,
    /// `RET` — pop the stack and jump to it; halts if the stack is empty.
    Ret,
    /// `OUT a` — write the low byte of `a` to standard output.
    Out,
    /// `IN a` — read one byte from standard input into register `a`.
    In,
    /// No effect.
    Noop,
}

impl Opcode {
    /// Number of operand words that follow this opcode in memory.
    pub fn arity(self) -> usize {
        match self {
            Opcode::Halt | Opcode::Ret | Opcode::Noop => 0,
            Opcode::Push | Opcode::Pop | Opcode::Jmp | Opcode::Call | Opcode::Out | Opcode::In => {
                1
            }
            Opcode::Set
            | Opcode::Jt
            | Opcode::Jf
            | Opcode::Not
            | Opcode::Rmem
            | Opcode::Wmem => 2,
            Opcode::Eq | Opcode::Gt | Opcode::Add | Opcode::Mult | Opcode::Mod | Opcode::And
            | Opcode::Or => 3,
        }
    }

    /// Four-character mnemonic used by the disassembler listing.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Halt => "HALT",
            Opcode::Set => "SET",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Eq => "EQ",
            Opcode::Gt => "GT",
            Opcode::Jmp => "JMP",
            Opcode::Jt => "JT",
            Opcode::Jf => "JF",
            Opcode::Add => "ADD",
            Opcode::Mult => "MULT",
            Opcode::Mod => "MOD",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Not => "NOT",
            Opcode::Rmem => "RMEM",
            Opcode::Wmem => "WMEM",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
            Opcode::Out => "OUT",
            Opcode::In => "IN",
            Opcode::Noop => "NOOP",
        }
    }

    /// Looks up the opcode denoted by a raw memory word, if any.
    pub fn from_word(word: u16) -> Option<Opcode> {
        num::traits::FromPrimitive::from_u16(word)
    }
}
