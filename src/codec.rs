//! Line codec for the marina data file.
//!
//! Every boat is one line of five comma separated fields:
//!
//! ```text
//! name,length,kind,detail,amount_owed
//! Jones,21,land,A,0.00
//! ```
//!
//! `length` is written without decimals and `amount_owed` with exactly two.
//! Parsing is forgiving in the same places the file format always has been:
//! overlong names and tags are cut, and slip/storage numbers that are not
//! numeric read as zero.

use thiserror::Error;

use crate::models::{Boat, Location, LocationKind, MAX_NAME_LENGTH, MAX_TAG_LENGTH};

pub const DELIMITER: char = ',';

const MIN_LINE_LENGTH: usize = 5;

/// Why a line did not produce a boat.
///
/// Rejections are never fatal: loaders skip the line and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRejection {
    #[error("line is too short")]
    TooShort,

    #[error("line has no delimiter")]
    MissingDelimiter,

    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    #[error("{0} is empty")]
    EmptyField(&'static str),

    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unknown location kind: {0:?}")]
    UnknownLocation(String),

    #[error("line is not valid UTF-8")]
    InvalidEncoding,
}

/// Parse one data file line into a boat.
pub fn parse_line(line: &str) -> Result<Boat, ParseRejection> {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.chars().count() < MIN_LINE_LENGTH {
        return Err(ParseRejection::TooShort);
    }
    if !line.contains(DELIMITER) {
        return Err(ParseRejection::MissingDelimiter);
    }

    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let [name, length, kind, extra, owed] = fields.as_slice() else {
        return Err(ParseRejection::FieldCount(fields.len()));
    };

    if name.is_empty() {
        return Err(ParseRejection::EmptyField("name"));
    }
    if extra.is_empty() {
        return Err(ParseRejection::EmptyField("detail"));
    }

    let length = parse_real("length", length)?;
    if length < 0.0 {
        return Err(ParseRejection::InvalidNumber {
            field: "length",
            value: length.to_string(),
        });
    }
    let amount_owed = parse_real("amount owed", owed)?;

    let kind = LocationKind::from_str(kind)
        .ok_or_else(|| ParseRejection::UnknownLocation(kind.to_string()))?;

    Ok(Boat {
        name: name.chars().take(MAX_NAME_LENGTH).collect(),
        length,
        location: parse_location(kind, extra),
        amount_owed,
    })
}

/// Format a boat as its canonical data file line, without a line terminator.
pub fn format_line(boat: &Boat) -> String {
    format!(
        "{}{DELIMITER}{:.0}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{:.2}",
        boat.name,
        boat.length,
        boat.kind().as_str(),
        boat.location.detail(),
        boat.amount_owed,
    )
}

fn parse_real(field: &'static str, text: &str) -> Result<f64, ParseRejection> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseRejection::InvalidNumber {
            field,
            value: text.to_string(),
        })
}

/// `extra` is known to be non-empty here.
fn parse_location(kind: LocationKind, extra: &str) -> Location {
    match kind {
        LocationKind::Slip => Location::Slip(lenient_int(extra)),
        LocationKind::Land => Location::Land(extra.chars().next().unwrap_or(' ')),
        LocationKind::Trailor => {
            Location::Trailor(extra.chars().take(MAX_TAG_LENGTH).collect())
        }
        LocationKind::Storage => Location::Storage(lenient_int(extra)),
    }
}

/// Read a leading integer the way the data file always has: optional leading
/// whitespace and sign, then as many digits as are present. Text with no
/// leading digits is 0.
///
/// Known quirk: a typo such as `slip,A12` silently becomes slip 0. Existing
/// files depend on this, so it is kept rather than turned into a rejection.
pub fn lenient_int(text: &str) -> i32 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let limit = i64::from(i32::MAX) + 1;
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| (acc * 10 + i64::from(digit - b'0')).min(limit));

    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_int_reads_leading_digits() {
        assert_eq!(lenient_int("27"), 27);
        assert_eq!(lenient_int("  42abc"), 42);
        assert_eq!(lenient_int("-7"), -7);
        assert_eq!(lenient_int("+3"), 3);
    }

    #[test]
    fn test_lenient_int_defaults_to_zero() {
        assert_eq!(lenient_int("abc"), 0);
        assert_eq!(lenient_int("-"), 0);
        assert_eq!(lenient_int(""), 0);
    }

    #[test]
    fn test_lenient_int_saturates() {
        assert_eq!(lenient_int("99999999999999"), i32::MAX);
        assert_eq!(lenient_int("-99999999999999"), i32::MIN);
    }

    #[test]
    fn test_strips_line_terminators() {
        let boat = parse_line("Moby,30,slip,4,12.00\r\n").expect("parses");
        assert_eq!(boat.amount_owed, 12.0);
    }
}
