//! Fixed sizes and value-space boundaries of the virtual machine.

/// Total addressable words of main memory.
pub const MEMORY_WORDS: usize = 32768;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// First operand value that denotes a register instead of a literal.
pub const REGISTER_BASE: u16 = 32768;

/// Last operand value that denotes a register (`REGISTER_BASE + REGISTER_COUNT - 1`).
pub const REGISTER_MAX: u16 = 32775;

/// Mask that clears bit 15, used by `NOT` to keep its result below `REGISTER_BASE`.
pub const VALUE_MASK: u16 = 0x7FFF;
