//! Program image codec: the two ways a program can reach the engine — a
//! little-endian binary file, or an inline comma-separated decimal list.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use svm::constants::MEMORY_WORDS;
use svm::error::ErrorKind;

/// Decodes a little-endian binary image, as produced by the challenge's
/// `.bin` files. A trailing odd byte (the file ended mid-word) is ignored,
/// matching the original reader's `gcount() < 2` early exit.
pub fn from_bytes(bytes: &[u8]) -> Result<Vec<u16>, ErrorKind> {
    let mut words = Vec::with_capacity(bytes.len() / 2);
    let mut reader = bytes;
    loop {
        match reader.read_u16::<LittleEndian>() {
            Ok(word) => words.push(word),
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(ErrorKind::Io(err.to_string())),
        }
    }
    check_capacity(&words)?;
    Ok(words)
}

/// Decodes a comma-separated list of decimal code points, as accepted by the
/// `-c` CLI mode. Each literal must fit in a `u16`; anything else faults with
/// [`ErrorKind::OperandOverflow`] naming the offending literal.
pub fn from_csv(code: &str) -> Result<Vec<u16>, ErrorKind> {
    let mut words = Vec::new();
    for literal in code.split(',') {
        let literal = literal.trim();
        let word = literal
            .parse::<u16>()
            .map_err(|_| ErrorKind::OperandOverflow(literal.to_string()))?;
        words.push(word);
    }
    check_capacity(&words)?;
    Ok(words)
}

fn check_capacity(words: &[u16]) -> Result<(), ErrorKind> {
    if words.len() > MEMORY_WORDS {
        Err(ErrorKind::ImageTooLarge(words.len()))
    } else {
        Ok(())
    }
}

/// Reads and decodes a binary image file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u16>, ErrorKind> {
    let mut bytes = Vec::new();
    BufReader::new(File::open(path).map_err(|err| ErrorKind::Io(err.to_string()))?)
        .read_to_end(&mut bytes)
        .map_err(|err| ErrorKind::Io(err.to_string()))?;
    from_bytes(&bytes)
}

/// Re-emits `words` as a little-endian binary image, for round-tripping a
/// loaded program back to disk.
pub fn write_words<P: AsRef<Path>>(path: P, words: &[u16]) -> Result<(), ErrorKind> {
    let mut writer =
        BufWriter::new(File::create(path).map_err(|err| ErrorKind::Io(err.to_string()))?);
    for &word in words {
        writer
            .write_u16::<LittleEndian>(word)
            .map_err(|err| ErrorKind::Io(err.to_string()))?;
    }
    writer.flush().map_err(|err| ErrorKind::Io(err.to_string()))
}
