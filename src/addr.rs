//! Conversion between the dotted-decimal notation of an IPv4 address and its 32-bit key.
//!
//! ```
//! # use ipv4_trie::addr;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let key = addr::parse("192.168.1.1")?;
//! assert_eq!(key, 3232235777);
//! assert_eq!(addr::format(key), "192.168.1.1");
//! assert!(addr::parse("256.0.0.1").is_err());
//! # Ok(())
//! # }
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

/// Number of segments in a dotted-decimal address.
const SEGMENTS: usize = 4;

/// The reason why a string is not a valid dotted-decimal IPv4 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddrParseError {
    /// The string is empty.
    #[error("empty address")]
    Empty,
    /// The string does not start with a digit.
    #[error("address must start with a digit")]
    LeadingNonDigit,
    /// The string contains a character that is neither a digit nor a `.`.
    #[error("invalid character {0:?} in address")]
    InvalidCharacter(char),
    /// The string has more than four segments.
    #[error("address has more than four segments")]
    TooManySegments,
    /// The string has less than four segments.
    #[error("address has only {0} segments")]
    TooFewSegments(usize),
    /// Two dots follow each other, or the string ends with a dot.
    #[error("empty segment in address")]
    EmptySegment,
    /// A segment is larger than 255.
    #[error("segment exceeds 255")]
    SegmentOutOfRange,
}

/// Parse the dotted-decimal notation `a.b.c.d` into the key `(a << 24) | (b << 16) | (c << 8) | d`.
///
/// The string must consist of exactly four non-empty decimal segments, each in `0..=255`, separated
/// by `.`. Leading zeros within a segment are accepted.
pub fn parse(s: &str) -> Result<u32, AddrParseError> {
    match s.chars().next() {
        None => return Err(AddrParseError::Empty),
        Some(c) if !c.is_ascii_digit() => return Err(AddrParseError::LeadingNonDigit),
        Some(_) => {}
    }

    let mut key: u32 = 0;
    let mut segments = 0;
    for segment in s.split('.') {
        if segments == SEGMENTS {
            return Err(AddrParseError::TooManySegments);
        }
        key = (key << 8) | u32::from(parse_segment(segment)?);
        segments += 1;
    }

    if segments < SEGMENTS {
        return Err(AddrParseError::TooFewSegments(segments));
    }
    Ok(key)
}

fn parse_segment(segment: &str) -> Result<u8, AddrParseError> {
    if segment.is_empty() {
        return Err(AddrParseError::EmptySegment);
    }
    let mut value: u16 = 0;
    for c in segment.chars() {
        let digit = c.to_digit(10).ok_or(AddrParseError::InvalidCharacter(c))?;
        value = value * 10 + digit as u16;
        if value > u8::MAX as u16 {
            return Err(AddrParseError::SegmentOutOfRange);
        }
    }
    Ok(value as u8)
}

/// Format a key in the dotted-decimal notation.
pub fn format(key: u32) -> String {
    DottedQuad(key).to_string()
}

/// Wrapper around a key that displays it in the dotted-decimal notation.
///
/// ```
/// # use ipv4_trie::DottedQuad;
/// assert_eq!(DottedQuad(0x0a000001).to_string(), "10.0.0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DottedQuad(pub u32);

impl Display for DottedQuad {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let [a, b, c, d] = self.0.to_be_bytes();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl std::str::FromStr for DottedQuad {
    type Err = AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(DottedQuad)
    }
}
