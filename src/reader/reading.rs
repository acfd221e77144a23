use crate::reader::errors::{Error, Result};
use std::fmt;

pub const TERMINATOR_LEN: usize = 2;

/// One value received from the device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading(pub f64);

/// Shortest round-trip digits, printed positionally for exponents in
/// `-4..16` (always with a fractional part) and as `d.ddde+XX` otherwise.
impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
        }

        // `{:e}` yields the shortest digits that round-trip, e.g. "-1.25e1".
        let sci = format!("{:e}", value);
        let (mantissa, exp) = sci.split_once('e').ok_or(fmt::Error)?;
        let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;
        let (sign, mantissa) = match mantissa.strip_prefix('-') {
            Some(m) => ("-", m),
            None => ("", mantissa),
        };
        let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

        if (-4..16).contains(&exp) {
            if exp < 0 {
                let zeros = "0".repeat((-exp - 1) as usize);
                return write!(f, "{}0.{}{}", sign, zeros, digits);
            }
            let int_len = exp as usize + 1;
            if digits.len() <= int_len {
                let zeros = "0".repeat(int_len - digits.len());
                write!(f, "{}{}{}.0", sign, digits, zeros)
            } else {
                let (int, frac) = digits.split_at(int_len);
                write!(f, "{}{}.{}", sign, int, frac)
            }
        } else {
            let (lead, rest) = digits.split_at(1);
            let exp_sign = if exp < 0 { '-' } else { '+' };
            if rest.is_empty() {
                write!(f, "{}{}e{}{:02}", sign, lead, exp_sign, exp.abs())
            } else {
                write!(f, "{}{}.{}e{}{:02}", sign, lead, rest, exp_sign, exp.abs())
            }
        }
    }
}

/// Splits off the last two bytes of `line`, whatever they are.
pub fn strip_terminator(line: &[u8]) -> Result<(&[u8], &[u8])> {
    if line.len() < TERMINATOR_LEN {
        return Err(Error::TruncatedLine(line.len()));
    }
    Ok(line.split_at(line.len() - TERMINATOR_LEN))
}

pub fn parse_reading(line: &[u8]) -> Result<Reading> {
    let (body, _) = strip_terminator(line)?;
    let text = std::str::from_utf8(body).map_err(|source| Error::Decode {
        bytes: hex::encode(body),
        source,
    })?;
    text.trim()
        .parse::<f64>()
        .map(Reading)
        .map_err(|source| Error::Parse {
            text: text.to_string(),
            source,
        })
}
