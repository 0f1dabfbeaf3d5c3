use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::bytes::{Captures, Regex};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum Error {
    InvalidOperand(String),
    ProductOverflow(u64, u64),
    SumOverflow,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidOperand(s) => {
                write!(f, "Operand({}) of multiply instruction is too large.", s)
            }
            Error::ProductOverflow(l, r) => {
                write!(f, "Product of {} and {} is too large.", l, r)
            }
            Error::SumOverflow => write!(f, "Sum of multiply instructions is too large."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// Installs the stderr log subscriber, filtered by `RUST_LOG` (`warn` if unset).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Digit runs of both factors, parsed only when the product is needed.
    Mul(&'a [u8], &'a [u8]),
    Do,
    Dont,
}

impl<'a> From<&Captures<'a>> for Token<'a> {
    fn from(caps: &Captures<'a>) -> Self {
        match (caps.get(1), caps.get(2)) {
            (Some(l), Some(r)) => Token::Mul(l.as_bytes(), r.as_bytes()),
            _ => match &caps[0] {
                b"do()" => Token::Do,
                b"don't()" => Token::Dont,
                s => unreachable!(
                    "Unexpected instruction({}) matched.",
                    String::from_utf8_lossy(s)
                ),
            },
        }
    }
}

/// Contents of one corrupted memory file, kept as raw bytes.
#[derive(Debug, Clone)]
pub struct Memory {
    text: Vec<u8>,
}

impl From<Vec<u8>> for Memory {
    fn from(text: Vec<u8>) -> Self {
        Self { text }
    }
}

impl Memory {
    pub fn new(s: &str) -> Self {
        Self {
            text: s.as_bytes().to_vec(),
        }
    }

    /// Sums the products of every `mul(a,b)`, ignoring everything else.
    pub fn mul_sum(&self) -> std::result::Result<u64, Error> {
        static MUL_INST_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"mul\(([0-9]+),([0-9]+)\)").unwrap());

        let mut sum = 0;
        let mut mul_n = 0;
        for caps in MUL_INST_PATTERN.captures_iter(&self.text) {
            debug_assert!(caps.len() == 3);
            sum = add_product(sum, &caps[1], &caps[2])?;
            mul_n += 1;
        }

        debug!(mul_n, sum, "Summed all multiply instructions.");
        Ok(sum)
    }

    /// Multiply instructions and toggles, in the order they appear.
    pub fn tokens(&self) -> impl Iterator<Item = Token<'_>> + '_ {
        static INST_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"mul\(([0-9]+),([0-9]+)\)|do\(\)|don't\(\)").unwrap());

        INST_PATTERN
            .captures_iter(&self.text)
            .map(|caps| Token::from(&caps))
    }

    /// Like [`Memory::mul_sum`], but `don't()` disables the following
    /// multiply instructions until the next `do()`. Disabled instructions are
    /// skipped without reading their factors.
    pub fn enabled_mul_sum(&self) -> std::result::Result<u64, Error> {
        let (sum, do_mul) = self.tokens().enumerate().try_fold(
            (0, true),
            |(sum, do_mul), (ind, token)| -> std::result::Result<(u64, bool), Error> {
                match token {
                    Token::Mul(l_digits, r_digits) if do_mul => {
                        Ok((add_product(sum, l_digits, r_digits)?, do_mul))
                    }
                    Token::Mul(..) => Ok((sum, do_mul)),
                    Token::Do => {
                        trace!(ind, "Multiply instructions enabled.");
                        Ok((sum, true))
                    }
                    Token::Dont => {
                        trace!(ind, "Multiply instructions disabled.");
                        Ok((sum, false))
                    }
                }
            },
        )?;

        debug!(sum, do_mul, "Summed enabled multiply instructions.");
        Ok(sum)
    }
}

fn parse_operand(digits: &[u8]) -> std::result::Result<u64, Error> {
    digits
        .iter()
        .try_fold(0u64, |n, d| {
            n.checked_mul(10)
                .and_then(|n| n.checked_add(u64::from(d - b'0')))
        })
        .ok_or_else(|| Error::InvalidOperand(String::from_utf8_lossy(digits).into_owned()))
}

fn add_product(sum: u64, l_digits: &[u8], r_digits: &[u8]) -> std::result::Result<u64, Error> {
    let l_factor = parse_operand(l_digits)?;
    let r_factor = parse_operand(r_digits)?;
    let product = l_factor
        .checked_mul(r_factor)
        .ok_or(Error::ProductOverflow(l_factor, r_factor))?;
    sum.checked_add(product).ok_or(Error::SumOverflow)
}

pub fn read_memory<P: AsRef<Path>>(path: P) -> Result<Memory> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let mut reader = BufReader::new(file);
    let mut text = Vec::new();
    reader.read_to_end(&mut text).with_context(|| {
        format!(
            "Failed to read content of given file({}).",
            path.as_ref().display()
        )
    })?;

    debug!(path = %path.as_ref().display(), len = text.len(), "Loaded memory.");
    Ok(Memory::from(text))
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<u64> {
    let memory = read_memory(&path)?;
    memory.mul_sum().with_context(|| {
        format!(
            "Failed to sum multiply instructions in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<u64> {
    let memory = read_memory(&path)?;
    memory.enabled_mul_sum().with_context(|| {
        format!(
            "Failed to sum enabled multiply instructions in given file({}).",
            path.as_ref().display()
        )
    })
}
