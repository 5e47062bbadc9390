//! Pure operand-classification helpers shared by every instruction handler.
//!
//! A 16-bit word is either a literal (`< 32768`), a register reference
//! (`32768..=32775`), or invalid (`32776..=65535`). These checks happen at
//! the moment an operand is used, never at fetch time.

use crate::constants::{REGISTER_BASE, REGISTER_MAX};
use crate::error::ErrorKind;

/// Resolves an operand word to the value it denotes: itself if a literal,
/// or the current contents of the register it names.
pub fn resolve(word: u16, registers: &[u16]) -> Result<u16, ErrorKind> {
    if word < REGISTER_BASE {
        Ok(word)
    } else if word <= REGISTER_MAX {
        Ok(registers[(word - REGISTER_BASE) as usize])
    } else {
        Err(ErrorKind::InvalidOperand(word))
    }
}

/// Interprets an operand word as a register index, for instructions that
/// write into a register rather than read a value.
pub fn as_register(word: u16) -> Result<usize, ErrorKind> {
    if (REGISTER_BASE..=REGISTER_MAX).contains(&word) {
        Ok((word - REGISTER_BASE) as usize)
    } else {
        Err(ErrorKind::InvalidRegister(word))
    }
}

/// Validates a resolved value as a memory address.
pub fn as_memaddr(word: u16) -> Result<usize, ErrorKind> {
    if (word as usize) < crate::constants::MEMORY_WORDS {
        Ok(word as usize)
    } else {
        Err(ErrorKind::InvalidAddress(word))
    }
}
