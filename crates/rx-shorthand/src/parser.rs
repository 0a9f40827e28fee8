//! Shorthand parser implementation using nom.
//!
//! The grammar is a fixed four-token line:
//!
//! ```text
//! <drug-code> <strength> <frequency-code> <duration>d
//! ```
//!
//! e.g. `metf 1000 bd 30d`. Input is lowercased before parsing, so the
//! grammar itself only ever sees lowercase text.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, digit1, multispace1},
    combinator::{all_consuming, map, map_res},
    sequence::{preceded, terminated, tuple},
    IResult,
};

use crate::ast::ShorthandOrder;
use crate::error::{ShorthandError, ShorthandResult};

/// Parse a medication shorthand line.
///
/// # Arguments
/// * `input` - The shorthand line, e.g. `"Metf 1000 bd 30d"`
///
/// # Returns
/// The parsed [`ShorthandOrder`] or an error. Leading/trailing whitespace
/// is ignored; everything else must match the grammar exactly.
///
/// # Examples
///
/// ```rust
/// use rx_shorthand::parse;
///
/// let order = parse("Metf 1000 bd 30d").unwrap();
/// assert_eq!(order.drug_code, "metf");
/// assert_eq!(order.duration_days, 30);
///
/// assert!(parse("").is_err());
/// assert!(parse("bad input").is_err());
/// ```
pub fn parse(input: &str) -> ShorthandResult<ShorthandOrder> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ShorthandError::Empty);
    }

    let lowered = input.to_lowercase();
    // Bind the parse result so the parser temporary is dropped before
    // `lowered` goes out of scope.
    let parsed = all_consuming(shorthand_order)(lowered.as_str());
    match parsed {
        Ok((_, order)) => Ok(order),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let position = lowered.len() - e.input.len();
            Err(ShorthandError::Malformed {
                position,
                message: format!("unexpected input at: '{}'", truncate(e.input, 20)),
            })
        }
        Err(nom::Err::Incomplete(_)) => Err(ShorthandError::Malformed {
            position: lowered.len(),
            message: "incomplete shorthand".to_string(),
        }),
    }
}

/// Truncates to at most `max_chars` characters, on a char boundary.
fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

// ============================================================================
// Grammar
// ============================================================================

fn shorthand_order(input: &str) -> IResult<&str, ShorthandOrder> {
    map(
        tuple((
            code,
            preceded(multispace1, integer),
            preceded(multispace1, code),
            preceded(multispace1, duration),
        )),
        |(drug_code, strength, frequency_code, duration_days)| ShorthandOrder {
            drug_code: drug_code.to_string(),
            strength,
            frequency_code: frequency_code.to_string(),
            duration_days,
        },
    )(input)
}

/// An alphanumeric code token (drug code or frequency code).
fn code(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric())(input)
}

fn integer(input: &str) -> IResult<&str, u32> {
    map_res(digit1, str::parse)(input)
}

/// Duration token: an integer day count with a `d` suffix, e.g. `30d`.
fn duration(input: &str) -> IResult<&str, u32> {
    terminated(integer, char('d'))(input)
}
