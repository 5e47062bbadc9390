use std::error::Error as StdError;
use std::fmt;

/// Reasons a running program can fault, per the instruction semantics in
/// [`crate::instructions`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Decode encountered a word not present in the instruction table.
    UnknownOpcode(u16),
    /// An operand value of 32776 or higher was used where a value was required.
    InvalidOperand(u16),
    /// An operand was used as a register target but wasn't in `[32768,32775]`.
    InvalidRegister(u16),
    /// A memory address fell outside `[0,32767]`.
    InvalidAddress(u16),
    /// `POP` was executed against an empty stack.
    StackUnderflow,
    /// The image loader produced more than `MEMORY_WORDS` words.
    ImageTooLarge(usize),
    /// An inline CSV literal did not fit in a 16-bit word.
    OperandOverflow(String),
    /// `run` was called again on a VM that had already reached a terminal state.
    HaltedReentry,
    /// A read/write against standard input, standard output, or the input
    /// transcript failed at the host level. Fatal: the run is not retried.
    Io(String),
    /// `MOD` was executed with a zero divisor. The original source inherits
    /// the host's division-by-zero behavior (a crash); this engine instead
    /// surfaces it as a fault so the run terminates cleanly and the case
    /// stays testable (see DESIGN.md).
    DivisionByZero,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::UnknownOpcode(word) => {
                write!(f, "unknown opcode encountered: {}", word)
            }
            ErrorKind::InvalidOperand(word) => {
                write!(f, "operand value out of range for evaluation: {}", word)
            }
            ErrorKind::InvalidRegister(word) => {
                write!(f, "operand is not a valid register reference: {}", word)
            }
            ErrorKind::InvalidAddress(word) => {
                write!(f, "memory address out of range: {}", word)
            }
            ErrorKind::StackUnderflow => f.write_str("pop from an empty stack"),
            ErrorKind::ImageTooLarge(len) => {
                write!(f, "program image has {} words, exceeds memory capacity", len)
            }
            ErrorKind::OperandOverflow(literal) => {
                write!(f, "literal \"{}\" does not fit in a 16-bit word", literal)
            }
            ErrorKind::HaltedReentry => f.write_str("run called on a VM that has already halted"),
            ErrorKind::Io(message) => write!(f, "I/O error: {}", message),
            ErrorKind::DivisionByZero => f.write_str("MOD by zero"),
        }
    }
}

impl StdError for ErrorKind {}
