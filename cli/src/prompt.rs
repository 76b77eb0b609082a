//! Interactive input parsing.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

/// Print `question` and read one trimmed line (empty at end of input)
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}

/// Split a comma separated feature line; a blank line means no features
pub fn parse_features(line: &str) -> Vec<String> {
    if line.trim().is_empty() {
        return Vec::new();
    }
    line.split(',').map(|f| f.trim().to_string()).collect()
}

/// Parse a member count, which must be a whole number of at least 1
pub fn parse_members(line: &str) -> Result<u32> {
    let members: i64 = line
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a whole number", line.trim()))?;
    if members < 1 {
        bail!("Member count must be at least 1.");
    }
    u32::try_from(members).context("Member count is too large.")
}

/// Anything other than a case-insensitive "yes" declines
pub fn is_confirmed(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
