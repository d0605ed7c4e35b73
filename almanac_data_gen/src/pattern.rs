// Copyright 2026 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CLDR date pattern conversion.
//!
//! Converts a CLDR date/time pattern (`MMMM d, y`) to the strftime-style
//! format Almanac's formatter consumes. None of the generator commands call
//! this today, but the library side still relies on it when importing format
//! patterns by hand, and a pattern the table cannot express must be an error
//! rather than a silently wrong format string.

use core::fmt;

/// Converts a CLDR date pattern to a strftime-style format string.
///
/// Literal sections quoted with `'` pass through unchanged and `''` is an
/// escaped quote. A field letter outside the conversion table, or a known
/// letter with an unsupported repetition count, is an error.
pub fn convert_date_pattern(pattern: &str) -> Result<String, PatternError> {
    let mut out = String::new();
    let mut chars = pattern.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                out.push('\'');
                continue;
            }
            // Quoted literal run.
            loop {
                match chars.next() {
                    Some('\'') if chars.peek() == Some(&'\'') => {
                        chars.next();
                        out.push('\'');
                    }
                    Some('\'') | None => break,
                    Some(literal) => out.push(literal),
                }
            }
            continue;
        }
        if !ch.is_ascii_alphabetic() {
            out.push(ch);
            continue;
        }
        let mut len = 1;
        while chars.peek() == Some(&ch) {
            chars.next();
            len += 1;
        }
        out.push_str(directive(ch, len)?);
    }
    Ok(out)
}

fn directive(field: char, len: usize) -> Result<&'static str, PatternError> {
    let directive = match (field, len) {
        ('y', 1 | 4) => "%Y",
        ('y', 2) => "%y",
        ('M' | 'L', 1 | 2) => "%m",
        ('M' | 'L', 3) => "%b",
        ('M' | 'L', 4) => "%B",
        ('d', 1 | 2) => "%d",
        ('E', 1..=3) => "%a",
        ('E', 4) => "%A",
        ('D', 1..=3) => "%j",
        ('H', 1 | 2) => "%H",
        ('h', 1 | 2) => "%I",
        ('m', 1 | 2) => "%M",
        ('s', 1 | 2) => "%S",
        ('a', 1) => "%p",
        ('z', 1..=3) => "%Z",
        ('Z', 1..=3) => "%z",
        (field, len) => {
            return Err(if matches!(field, 'y' | 'M' | 'L' | 'd' | 'E' | 'D' | 'H' | 'h' | 'm' | 's' | 'a' | 'z' | 'Z')
            {
                PatternError::BadFieldLength { field, len }
            } else {
                PatternError::UnknownField(field)
            });
        }
    };
    Ok(directive)
}

/// A CLDR pattern contained something the conversion table cannot express.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PatternError {
    /// A field letter outside the conversion table.
    UnknownField(char),
    /// A known field letter repeated an unsupported number of times.
    BadFieldLength {
        /// The field letter.
        field: char,
        /// Its repetition count.
        len: usize,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField(field) => write!(f, "unsupported pattern field '{field}'"),
            Self::BadFieldLength { field, len } => {
                write!(f, "unsupported length {len} for pattern field '{field}'")
            }
        }
    }
}

impl std::error::Error for PatternError {}

#[cfg(test)]
mod tests {
    use super::{PatternError, convert_date_pattern};

    #[test]
    fn common_date_patterns() {
        assert_eq!(convert_date_pattern("MMMM d, y").unwrap(), "%B %d, %Y");
        assert_eq!(convert_date_pattern("EEEE, MMM d").unwrap(), "%A, %b %d");
        assert_eq!(convert_date_pattern("dd/MM/yy").unwrap(), "%d/%m/%y");
        assert_eq!(convert_date_pattern("h:mm a").unwrap(), "%I:%M %p");
        assert_eq!(convert_date_pattern("HH:mm:ss").unwrap(), "%H:%M:%S");
    }

    #[test]
    fn quoted_literals_pass_through() {
        assert_eq!(
            convert_date_pattern("y'-'MM 'at' HH").unwrap(),
            "%Y-%m at %H"
        );
        assert_eq!(convert_date_pattern("h 'o''clock' a").unwrap(), "%I o'clock %p");
        assert_eq!(convert_date_pattern("''y").unwrap(), "'%Y");
    }

    #[test]
    fn unknown_field_is_an_error() {
        assert_eq!(
            convert_date_pattern("y G"),
            Err(PatternError::UnknownField('G'))
        );
    }

    #[test]
    fn overlong_field_is_an_error() {
        assert_eq!(
            convert_date_pattern("MMMMM d"),
            Err(PatternError::BadFieldLength { field: 'M', len: 5 })
        );
        assert_eq!(
            convert_date_pattern("yyy"),
            Err(PatternError::BadFieldLength { field: 'y', len: 3 })
        );
    }
}
