//! The I/O bridge: one byte in, one byte out, with an input transcript.
//!
//! A single trait abstracts the byte stream the `IN`/`OUT` instructions use.
//! `StdIo` is the production implementation (stdin/stdout plus an
//! `input.log` transcript); tests use `BufferIo`.

use std::io::{self, Read, Write};

/// Abstracts the standard input/output the `IN` and `OUT` instructions use.
pub trait Io {
    /// Blocks until one byte is available and returns it, or `None` on EOF.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Writes one byte to the output stream.
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;

    /// Records a byte consumed by `IN` in the input transcript. Never called
    /// with a null byte or with the EOF sentinel.
    fn log_input(&mut self, byte: u8) -> io::Result<()>;
}

/// Production `Io`: real standard input/output plus an `input.log` transcript
/// file in the current directory, flushed after every logged byte.
pub struct StdIo {
    stdin: io::Stdin,
    stdout: io::Stdout,
    transcript: std::fs::File,
}

impl StdIo {
    pub fn new() -> io::Result<StdIo> {
        let transcript = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("input.log")?;

        Ok(StdIo {
            stdin: io::stdin(),
            stdout: io::stdout(),
            transcript,
        })
    }
}

impl Io for StdIo {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        let mut handle = self.stdin.lock();
        match handle.read(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        let mut handle = self.stdout.lock();
        handle.write_all(&[byte])?;
        handle.flush()
    }

    fn log_input(&mut self, byte: u8) -> io::Result<()> {
        self.transcript.write_all(&[byte])?;
        self.transcript.flush()
    }
}

/// Deterministic in-memory `Io` used by tests: reads from a fixed byte queue,
/// collects written bytes and the transcript into plain `Vec<u8>`s.
#[cfg(test)]
pub struct BufferIo {
    input: std::collections::VecDeque<u8>,
    pub output: Vec<u8>,
    pub transcript: Vec<u8>,
}

#[cfg(test)]
impl BufferIo {
    pub fn new(input: &[u8]) -> BufferIo {
        BufferIo {
            input: input.iter().copied().collect(),
            output: Vec::new(),
            transcript: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Io for BufferIo {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.input.pop_front())
    }

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.output.push(byte);
        Ok(())
    }

    fn log_input(&mut self, byte: u8) -> io::Result<()> {
        self.transcript.push(byte);
        Ok(())
    }
}
