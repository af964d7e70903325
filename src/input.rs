//! Address list input
//!
//! Addresses come one per line, either from a file or pasted on stdin.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use crate::Result;

/// Read addresses from a file, skipping blank lines
pub fn read_address_file(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_address_lines(&contents))
}

/// One address per non-blank line, surrounding whitespace trimmed
pub fn parse_address_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read pasted addresses until the first blank line or end of input
pub fn read_pasted_addresses<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut addresses = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let address = line.trim();
        if address.is_empty() {
            break;
        }
        addresses.push(address.to_string());
    }
    Ok(addresses)
}
