//! A Synacor-style 16-bit virtual machine: the execution engine and the
//! disassembler that shares its instruction table.
//!
//! The core fetch/decode/execute loop lives in [`processor`]; operand
//! classification in [`value`]; the opcode table in [`instructions`]; and a
//! linear disassembler over the same table in [`disassembler`]. Program
//! images are decoded by the sibling `svm-image` crate and fed to
//! [`Processor::new`].

pub mod constants;
pub mod disassembler;
pub mod error;
pub mod instructions;
pub mod io;
pub mod memory;
pub mod processor;
pub mod register;
pub mod value;

pub use disassembler::disassemble;
pub use error::ErrorKind;
pub use io::{Io, StdIo};
pub use processor::{Processor, State};
