//! The execution engine: owns registers, memory, stack, and PC, and drives
//! the [`core::Core::tick`] loop to completion.

mod core;

use self::core::{Core, TickOutcome};
use crate::error::ErrorKind;
use crate::io::Io;

/// Lifecycle state of a [`Processor`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum State {
    Running,
    Halted,
    Faulted(ErrorKind),
}

/// A VM instance: fixed memory, eight registers, an unbounded stack, and a
/// program counter, constructed from a program image.
pub struct Processor {
    core: Core,
    state: State,
}

impl Processor {
    /// Builds a processor with memory initialized from `image` (the prefix
    /// of memory matching `image`'s length; the rest stays zero).
    pub fn new(image: &[u16]) -> Processor {
        Processor {
            core: Core::new(image),
            state: State::Running,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn program_counter(&self) -> usize {
        self.core.pc
    }

    pub fn register(&self, index: usize) -> u16 {
        self.core.registers.get(index)
    }

    pub fn memory_word(&self, address: usize) -> u16 {
        self.core.memory.read(address)
    }

    pub fn stack(&self) -> &[u16] {
        &self.core.stack
    }

    /// Runs until halt or fault, driving `io` for every `IN`/`OUT`.
    ///
    /// Faults with [`ErrorKind::HaltedReentry`] if the processor has already
    /// reached a terminal state from a previous call.
    pub fn run(&mut self, io: &mut dyn Io) -> Result<(), ErrorKind> {
        if self.state != State::Running {
            return Err(ErrorKind::HaltedReentry);
        }

        loop {
            match self.core.tick(io) {
                TickOutcome::Continue => {}
                TickOutcome::Halt => {
                    self.state = State::Halted;
                    return Ok(());
                }
                TickOutcome::Fault(err) => {
                    self.state = State::Faulted(err);
                    return Err(err);
                }
            }
        }
    }

    /// Runs for at most `max_ticks` instructions, for tests that bound
    /// otherwise-infinite loops.
    #[cfg(test)]
    pub fn run_bounded(&mut self, io: &mut dyn Io, max_ticks: usize) -> Option<Result<(), ErrorKind>> {
        if self.state != State::Running {
            return Some(Err(ErrorKind::HaltedReentry));
        }

        for _ in 0..max_ticks {
            match self.core.tick(io) {
                TickOutcome::Continue => {}
                TickOutcome::Halt => {
                    self.state = State::Halted;
                    return Some(Ok(()));
                }
                TickOutcome::Fault(err) => {
                    self.state = State::Faulted(err);
                    return Some(Err(err));
                }
            }
        }
        None
    }
}
