//! `decode encrypt` / `decode decrypt` – run text through a cipher.

use anyhow::{Context, Result};
use decode_core::codec::{self, CipherId};
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

pub fn run_codec(
    direction: Direction,
    cipher: CipherId,
    shift: i64,
    text: Option<String>,
) -> Result<()> {
    let input = match text {
        Some(t) => t,
        None => read_stdin()?,
    };
    let out = transform(direction, cipher, shift, &input)?;
    println!("{out}");
    Ok(())
}

fn transform(direction: Direction, cipher: CipherId, shift: i64, input: &str) -> Result<String> {
    let name = cipher.descriptor().name;
    let out = match direction {
        Direction::Encrypt => {
            codec::encrypt(input, cipher, shift).with_context(|| format!("{name} encode"))?
        }
        Direction::Decrypt => {
            codec::decrypt(input, cipher, shift).with_context(|| format!("{name} decode"))?
        }
    };
    Ok(out)
}

/// Whole of stdin with one trailing newline removed.
fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("read text from stdin")?;
    Ok(strip_trailing_newline(buf))
}

fn strip_trailing_newline(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}
