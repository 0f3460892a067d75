//! ISBN-10 and ISBN-13 validation
//!
//! Both forms tolerate separators anywhere in the input. A separator is any
//! code point in the Unicode categories `Zs` (space separator) or `Pd` (dash
//! punctuation), so no-break spaces and en dashes are accepted as well as
//! plain spaces and hyphens. Digits are decimal digits in any script.
//!
//! ## Checksums
//! - ISBN-10: `sum(d[i] * (10 - i))` must be divisible by 11, `X` counts 10
//! - ISBN-13: `(10 - (sum(even) + 3 * sum(odd)) mod 10) mod 10` must equal
//!   the last digit

use crate::error::{Error, Result};
use crate::utils::chars::{decimal_value, CharClass};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const ISBN10_LEN: usize = 10;
const ISBN13_LEN: usize = 13;

/// Prefix used when converting an ISBN-10 into an ISBN-13
pub const BOOKLAND_PREFIX: &str = "978";

/// Rules for ISBN acceptance
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsbnRules {
    /// Accept a lowercase `x` as ISBN-10 check character
    pub lowercase_check_digit: bool,
}

impl IsbnRules {
    /// Validate an ISBN-10
    pub fn is_valid_isbn10(&self, input: Option<&str>) -> bool {
        match input {
            Some(input) => self.isbn10_digits(input).is_some(),
            None => false,
        }
    }

    /// Parse either ISBN form into a normalized [`Isbn`]
    pub fn parse(&self, input: &str) -> Result<Isbn> {
        if let Some(digits) = self.isbn10_digits(input) {
            return Ok(Isbn::from_values(IsbnKind::Isbn10, &digits));
        }
        if let Some(digits) = isbn13_digits(input) {
            return Ok(Isbn::from_values(IsbnKind::Isbn13, &digits));
        }
        Err(Error::validation(format!("'{}' is not a valid ISBN", input)))
    }

    fn is_ten(&self, c: char) -> bool {
        c == 'X' || (self.lowercase_check_digit && c == 'x')
    }

    /// Significant values of a valid ISBN-10, `None` if the input is invalid
    fn isbn10_digits(&self, input: &str) -> Option<[u32; ISBN10_LEN]> {
        let chars = remove_blanks_and_hyphens(input);
        if chars.len() != ISBN10_LEN {
            log::trace!(
                "ISBN-10 rejected: {} significant characters",
                chars.len()
            );
            return None;
        }

        let mut digits = [0u32; ISBN10_LEN];
        for (i, &c) in chars.iter().enumerate() {
            digits[i] = match decimal_value(c) {
                Some(value) => value,
                None if i == ISBN10_LEN - 1 && self.is_ten(c) => 10,
                None => {
                    log::trace!("ISBN-10 rejected: invalid character at position {}", i);
                    return None;
                }
            };
        }

        if isbn10_weighted_sum(&digits) % 11 != 0 {
            log::trace!("ISBN-10 rejected: checksum mismatch");
            return None;
        }
        Some(digits)
    }
}

/// Validate an ISBN-10 such as `"3-86680-192-0"`
///
/// Nine decimal digits followed by a digit or `X` must remain after all
/// separators are removed, and the weighted sum must be divisible by 11.
/// `None` is never valid.
///
/// # Example
/// ```rust
/// use stringutils::isbn::is_valid_isbn10;
///
/// assert!(is_valid_isbn10(Some("3-86680-192-0")));
/// assert!(is_valid_isbn10(Some("0-8044-2957-X")));
/// assert!(!is_valid_isbn10(Some("3-86680-192-9")));
/// ```
pub fn is_valid_isbn10(input: Option<&str>) -> bool {
    IsbnRules::default().is_valid_isbn10(input)
}

/// Validate an ISBN-13 such as `"978-0-321-35668-0"`
///
/// Exactly thirteen decimal digits must remain after all separators are
/// removed, and the last one must match the checksum of the first twelve.
///
/// # Example
/// ```rust
/// use stringutils::isbn::is_valid_isbn13;
///
/// assert!(is_valid_isbn13(Some("9780321356680")));
/// assert!(is_valid_isbn13(Some(" 978 0321 356680-")));
/// assert!(!is_valid_isbn13(Some("9780321356681")));
/// ```
pub fn is_valid_isbn13(input: Option<&str>) -> bool {
    match input {
        Some(input) => isbn13_digits(input).is_some(),
        None => false,
    }
}

/// Compute the ISBN-10 check character for nine leading digits
///
/// Separators are ignored. Returns `None` unless exactly nine decimal digits
/// are present.
///
/// # Example
/// ```rust
/// use stringutils::isbn::isbn10_check_digit;
///
/// assert_eq!(isbn10_check_digit("3-86680-192"), Some('0'));
/// assert_eq!(isbn10_check_digit("0-8044-2957"), Some('X'));
/// ```
pub fn isbn10_check_digit(first_nine: &str) -> Option<char> {
    let digits = significant_digits(first_nine, ISBN10_LEN - 1)?;
    let remainder = isbn10_weighted_sum(&digits) % 11;
    Some(digit_char((11 - remainder) % 11))
}

/// Compute the ISBN-13 check digit for twelve leading digits
///
/// # Example
/// ```rust
/// use stringutils::isbn::isbn13_check_digit;
///
/// assert_eq!(isbn13_check_digit("978-0-321-35668"), Some('0'));
/// ```
pub fn isbn13_check_digit(first_twelve: &str) -> Option<char> {
    let digits = significant_digits(first_twelve, ISBN13_LEN - 1)?;
    Some(digit_char(isbn13_checksum(&digits)))
}

/// The two ISBN forms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IsbnKind {
    Isbn10,
    Isbn13,
}

/// A validated ISBN
///
/// Only [`Isbn::parse`], [`IsbnRules::parse`] and deserialization build one,
/// so the stored values always hold 10 or 13 checked digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Isbn {
    kind: IsbnKind,
    values: Vec<u32>,
    text: String,
}

impl Isbn {
    /// Parse either ISBN form with the default rules
    ///
    /// # Errors
    /// `Error::Validation` if the input is neither a valid ISBN-10 nor a
    /// valid ISBN-13.
    pub fn parse(input: &str) -> Result<Self> {
        IsbnRules::default().parse(input)
    }

    fn from_values(kind: IsbnKind, values: &[u32]) -> Self {
        Self {
            kind,
            values: values.to_vec(),
            text: values.iter().map(|&v| digit_char(v)).collect(),
        }
    }

    pub fn kind(&self) -> IsbnKind {
        self.kind
    }

    /// Normalized form: ASCII digits, plus `X` for an ISBN-10 check value
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Convert to the 13-digit form
    ///
    /// An ISBN-10 gets the `978` prefix and a recomputed check digit; an
    /// ISBN-13 is returned unchanged.
    pub fn to_isbn13(&self) -> Isbn {
        match self.kind {
            IsbnKind::Isbn13 => self.clone(),
            IsbnKind::Isbn10 => {
                let mut values: Vec<u32> = BOOKLAND_PREFIX
                    .chars()
                    .filter_map(|c| c.to_digit(10))
                    .collect();
                values.extend_from_slice(&self.values[..ISBN10_LEN - 1]);
                values.push(isbn13_checksum(&values));
                Isbn::from_values(IsbnKind::Isbn13, &values)
            }
        }
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Isbn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Isbn::parse(s)
    }
}

impl Serialize for Isbn {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Isbn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Isbn::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Drop every space separator and dash punctuation code point
fn remove_blanks_and_hyphens(input: &str) -> Vec<char> {
    input
        .chars()
        .filter(|&c| !CharClass::of(c).is_separator())
        .collect()
}

/// Exactly `len` decimal digits after separator removal
fn significant_digits(input: &str, len: usize) -> Option<Vec<u32>> {
    let chars = remove_blanks_and_hyphens(input);
    if chars.len() != len {
        return None;
    }
    chars.into_iter().map(decimal_value).collect()
}

fn isbn13_digits(input: &str) -> Option<[u32; ISBN13_LEN]> {
    let values = match significant_digits(input, ISBN13_LEN) {
        Some(values) => values,
        None => {
            log::trace!("ISBN-13 rejected: expected 13 decimal digits");
            return None;
        }
    };

    let mut digits = [0u32; ISBN13_LEN];
    digits.copy_from_slice(&values);

    if isbn13_checksum(&digits[..ISBN13_LEN - 1]) != digits[ISBN13_LEN - 1] {
        log::trace!("ISBN-13 rejected: checksum mismatch");
        return None;
    }
    Some(digits)
}

/// Weighted sum with weights 10, 9, 8, ... over the given values
fn isbn10_weighted_sum(values: &[u32]) -> u32 {
    values
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (ISBN10_LEN - i) as u32)
        .sum()
}

/// Check digit for the first twelve ISBN-13 digits
fn isbn13_checksum(first_twelve: &[u32]) -> u32 {
    let (even, odd) = first_twelve
        .iter()
        .enumerate()
        .fold((0, 0), |(even, odd), (i, &d)| {
            if i % 2 == 0 {
                (even + d, odd)
            } else {
                (even, odd + d)
            }
        });
    (10 - (even + 3 * odd) % 10) % 10
}

/// ASCII character for a value in `0..=10`, `X` standing for 10
fn digit_char(value: u32) -> char {
    match value {
        10 => 'X',
        v => (b'0' + v as u8) as char,
    }
}
