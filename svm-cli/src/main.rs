//! Front end: three mutually exclusive modes over a program image — run a
//! binary file, run an inline comma-separated image, or disassemble a file.

#[macro_use]
extern crate clap;

use clap::{Arg, ArgGroup};
use std::fmt;
use std::process;

use svm::constants::MEMORY_WORDS;
use svm::{ErrorKind, Processor, StdIo};

/// Top-level error for the front end: a VM fault, or a host I/O failure
/// that happened outside the engine (opening a file, writing a listing).
/// Mirrors the teacher's `vex` binary, whose `main.rs` wraps `vex::Error`
/// and `clap::Error` in a local two-variant enum rather than pulling in an
/// error-handling crate.
#[derive(Debug)]
enum Error {
    Engine(ErrorKind),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Engine(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "{}", err),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(err: ErrorKind) -> Error {
        Error::Engine(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("file")
                .short("f")
                .takes_value(true)
                .value_name("PATH")
                .help("Interpret a binary image file"),
        )
        .arg(
            Arg::with_name("code")
                .short("c")
                .takes_value(true)
                .value_name("CSV")
                .help("Interpret an inline comma-separated decimal image"),
        )
        .arg(
            Arg::with_name("disassemble")
                .short("d")
                .takes_value(true)
                .value_name("PATH")
                .help("Disassemble a binary image file to PATH.sasm"),
        )
        .group(ArgGroup::with_name("mode").args(&["file", "code", "disassemble"]))
        .get_matches();

    let outcome = if let Some(path) = matches.value_of("file") {
        interpret_file(path)
    } else if let Some(code) = matches.value_of("code") {
        interpret_code(code)
    } else if let Some(path) = matches.value_of("disassemble") {
        disassemble_file(path)
    } else {
        println!("Only -f, -c, or -d options are supported");
        return;
    };

    if let Err(err) = outcome {
        eprintln!("Error during VM execution: {}", err);
    }

    // The original front end always exits 0, even after printing a
    // diagnostic; faults are reported, not treated as process failure.
    process::exit(0);
}

fn interpret_file(path: &str) -> Result<(), Error> {
    let image = svm_image::read_file(path)?;
    run(&image)
}

fn interpret_code(code: &str) -> Result<(), Error> {
    let image = svm_image::from_csv(code)?;
    run(&image)
}

fn run(image: &[u16]) -> Result<(), Error> {
    let mut processor = Processor::new(image);
    let mut io = StdIo::new()?;
    processor.run(&mut io)?;
    Ok(())
}

fn disassemble_file(path: &str) -> Result<(), Error> {
    let mut image = svm_image::read_file(path)?;
    image.resize(MEMORY_WORDS, 0);

    let listing = svm::disassemble(&image);
    let out_path = format!("{}.sasm", path);
    std::fs::write(&out_path, listing)?;

    println!("Disassembled {} to {}", path, out_path);
    Ok(())
}
