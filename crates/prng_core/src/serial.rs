//! Textual state format shared by every algorithm.
//!
//! A serialised generator looks like ``#MizR`496F2F5B705E2275~25F31CC6C3559F2D` ``:
//! a `#` sentinel, the algorithm tag, then a backtick-delimited section of
//! upper-case hexadecimal state words separated by `~`.
//!
//! Parsing is all-or-nothing: [`parse_state`] only returns words once every
//! field has been validated, so callers never apply half a state.

use std::fmt::Write;

use crate::error::{GeneratorError, Result};

/// Leading character of a plain serialised generator.
pub const SENTINEL: char = '#';

/// Opens and closes the state section.
pub const FIELD_DELIMITER: char = '`';

/// Separates state words inside the state section.
pub const WORD_SEPARATOR: char = '~';

/// Hex digits needed for a full `u64`.
const MAX_HEX_DIGITS: usize = 16;

/// Formats `words` under `tag` in the shared state format.
///
/// # Examples
///
/// ```rust
/// use prng_core::serial::format_state;
///
/// assert_eq!(format_state("MizR", &[0xAB, 1]), "#MizR`AB~1`");
/// ```
pub fn format_state(tag: &str, words: &[u64]) -> String {
    let mut out = String::with_capacity(tag.len() + 3 + words.len() * (MAX_HEX_DIGITS + 1));
    out.push(SENTINEL);
    out.push_str(tag);
    out.push(FIELD_DELIMITER);
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push(WORD_SEPARATOR);
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{:X}", word);
    }
    out.push(FIELD_DELIMITER);
    out
}

/// Splits a serialised state into its tag and its raw state section.
///
/// # Errors
///
/// Returns [`GeneratorError::MalformedState`] if the sentinel, the tag or
/// either delimiter is missing, or if anything follows the closing delimiter.
pub fn split_tag(data: &str) -> Result<(&str, &str)> {
    let rest = data
        .strip_prefix(SENTINEL)
        .ok_or_else(|| GeneratorError::malformed(data, "missing '#' sentinel"))?;
    let (tag, section) = rest
        .split_once(FIELD_DELIMITER)
        .ok_or_else(|| GeneratorError::malformed(data, "missing opening '`' delimiter"))?;
    if tag.is_empty() {
        return Err(GeneratorError::malformed(data, "empty tag"));
    }
    let (body, trailing) = section
        .split_once(FIELD_DELIMITER)
        .ok_or_else(|| GeneratorError::malformed(data, "missing closing '`' delimiter"))?;
    if !trailing.is_empty() {
        return Err(GeneratorError::malformed(
            data,
            "unexpected text after closing '`' delimiter",
        ));
    }
    Ok((tag, body))
}

/// Parses exactly `N` state words serialised under `expected_tag`.
///
/// # Errors
///
/// Returns [`GeneratorError::MalformedState`] when the string is not in the
/// shared format, carries a different tag, has the wrong number of words, or
/// contains anything other than 1 to 16 hexadecimal digits per word.
///
/// # Examples
///
/// ```rust
/// use prng_core::serial::parse_state;
///
/// let [a, b] = parse_state::<2>("#MizR`AB~1`", "MizR").unwrap();
/// assert_eq!((a, b), (0xAB, 1));
///
/// assert!(parse_state::<2>("#MizR`AB`", "MizR").is_err());
/// ```
pub fn parse_state<const N: usize>(data: &str, expected_tag: &str) -> Result<[u64; N]> {
    let (tag, body) = split_tag(data)?;
    if tag != expected_tag {
        return Err(GeneratorError::malformed(
            data,
            format!("expected tag '{}', found '{}'", expected_tag, tag),
        ));
    }

    let mut words = [0u64; N];
    let mut count = 0usize;
    for field in body.split(WORD_SEPARATOR) {
        if count == N {
            return Err(GeneratorError::malformed(
                data,
                format!("expected {} state words, found more", N),
            ));
        }
        words[count] = parse_word(data, field)?;
        count += 1;
    }
    if count != N {
        return Err(GeneratorError::malformed(
            data,
            format!("expected {} state words, found {}", N, count),
        ));
    }
    Ok(words)
}

fn parse_word(data: &str, field: &str) -> Result<u64> {
    if field.is_empty() || field.len() > MAX_HEX_DIGITS {
        return Err(GeneratorError::malformed(
            data,
            format!("state word '{}' must have 1 to 16 hex digits", field),
        ));
    }
    // from_str_radix would also accept a leading '+'.
    if !field.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(GeneratorError::malformed(
            data,
            format!("state word '{}' is not hexadecimal", field),
        ));
    }
    u64::from_str_radix(field, 16)
        .map_err(|e| GeneratorError::malformed(data, format!("state word '{}': {}", field, e)))
}
