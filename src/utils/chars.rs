//! Unicode character classification
//!
//! Classification follows the Unicode general category of a code point, so
//! non-Latin digits and letters behave exactly like their ASCII counterparts.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Coarse character classes used by the ISBN and password checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// General category `Nd`
    DecimalDigit,
    /// General category `Lu`
    Uppercase,
    /// General category `Ll`
    Lowercase,
    /// General category `Zs`
    SpaceSeparator,
    /// General category `Pd`
    DashPunctuation,
    /// Everything else
    Other,
}

impl CharClass {
    /// Classify a single code point
    pub fn of(c: char) -> Self {
        match get_general_category(c) {
            GeneralCategory::DecimalNumber => CharClass::DecimalDigit,
            GeneralCategory::UppercaseLetter => CharClass::Uppercase,
            GeneralCategory::LowercaseLetter => CharClass::Lowercase,
            GeneralCategory::SpaceSeparator => CharClass::SpaceSeparator,
            GeneralCategory::DashPunctuation => CharClass::DashPunctuation,
            _ => CharClass::Other,
        }
    }

    /// Whether this class separates groups inside an ISBN
    pub fn is_separator(self) -> bool {
        matches!(self, CharClass::SpaceSeparator | CharClass::DashPunctuation)
    }
}

/// Check whether a code point is a decimal digit (`Nd`)
pub fn is_decimal_digit(c: char) -> bool {
    CharClass::of(c) == CharClass::DecimalDigit
}

/// Numeric value of a decimal digit in any script
///
/// `Nd` code points always come in contiguous runs of ten starting at zero,
/// so the value is the offset from the start of the run modulo ten.
///
/// # Example
/// ```rust
/// use stringutils::utils::chars::decimal_value;
///
/// assert_eq!(decimal_value('7'), Some(7));
/// assert_eq!(decimal_value('\u{0663}'), Some(3)); // ARABIC-INDIC DIGIT THREE
/// assert_eq!(decimal_value('x'), None);
/// ```
pub fn decimal_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }

    Some((c as u32 - start) % 10)
}
