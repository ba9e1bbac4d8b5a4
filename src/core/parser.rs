//! Fixed-width punch file parser.
//!
//! Layout of one line (0-indexed character offsets):
//! - `[0,10)`  record identifier (free text, kept for round-trip only)
//! - `[10,34)` timestamp, ISO-8601 with UTC offset (`2025-02-24T08:03:12-0400`)
//! - `[34,45)` employee code, only when the line length is in `[45,90)`;
//!   otherwise everything from offset 34 to end-of-line is the code
//! - `[45,..)` opaque trailer value, whitespace-trimmed
//!
//! Malformed lines are dropped and counted, never fatal to the batch.

use crate::models::punch::TIMESTAMP_FORMAT;
use chrono::{DateTime, FixedOffset};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct RawPunch {
    pub record_id: String,
    pub timestamp: DateTime<FixedOffset>,
    pub employee_code: String,
    pub trailer: String,
}

/// Result of parsing a whole file: decoded punches plus the count of lines
/// skipped because the timestamp segment did not match the expected
/// pattern. Blank lines are ignored silently and not counted.
#[derive(Debug, Default)]
pub struct ParsedFile {
    pub punches: Vec<RawPunch>,
    pub skipped: usize,
}

/// Parse a single fixed-width line. `None` means the timestamp segment was
/// not a valid ISO-8601 instant; the caller counts it as skipped.
pub fn parse_line(line: &str) -> Option<RawPunch> {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();

    let seg = |from: usize, to: usize| -> String {
        chars[from.min(len)..to.min(len)].iter().collect()
    };

    let record_id = seg(0, 10);
    let timestamp = DateTime::parse_from_str(&seg(10, 34), TIMESTAMP_FORMAT).ok()?;

    // Short export variants place the code at the end of the line; the
    // 11-char field only exists on full-width records.
    let employee_code = if (45..90).contains(&len) {
        seg(34, 45)
    } else {
        seg(34, len)
    };

    let trailer = if len > 45 {
        seg(45, len).trim().to_string()
    } else {
        String::new()
    };

    Some(RawPunch {
        record_id,
        timestamp,
        employee_code: employee_code.trim().to_string(),
        trailer,
    })
}

/// Parse newline-delimited punch text, skipping blanks and counting
/// malformed lines.
pub fn parse_text(content: &str) -> ParsedFile {
    let mut out = ParsedFile::default();

    for line in content.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(p) => out.punches.push(p),
            None => out.skipped += 1,
        }
    }

    out
}

/// Read a punch file from disk. The clock exports ASCII/Latin-1; try UTF-8
/// first and fall back to a Latin-1 decode.
pub fn read_punch_file(path: &Path) -> std::io::Result<ParsedFile> {
    let bytes = fs::read(path)?;

    let content = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => e.as_bytes().iter().map(|&b| b as char).collect(),
    };

    Ok(parse_text(&content))
}
