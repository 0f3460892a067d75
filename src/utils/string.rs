//! String helpers: blank checks, joining and character stripping
//!
//! Absent strings are modelled as `None`. All functions leave their input
//! untouched and return new values.

use crate::error::{Error, Result};
use std::collections::HashSet;

/// Placeholder rendered by [`join`] for absent elements
pub const NULL_PLACEHOLDER: &str = "(null)";

/// Separator placed between joined elements
pub const JOIN_SEPARATOR: char = ',';

/// Check whether a string is absent or empty
///
/// Whitespace is content: `" "` and `"\t"` are not blank.
///
/// # Example
/// ```rust
/// use stringutils::utils::string::is_blank;
///
/// assert!(is_blank(None));
/// assert!(is_blank(Some("")));
/// assert!(!is_blank(Some(" ")));
/// ```
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Join elements with a comma, rendering absent elements as `(null)`
///
/// At least one element is required.
///
/// # Arguments
/// * `elements` - Elements in output order
///
/// # Example
/// ```rust
/// use stringutils::utils::string::join;
///
/// let joined = join(&[Some("Hallo"), None, Some("du")]).unwrap();
/// assert_eq!(joined, "Hallo,(null),du");
/// ```
pub fn join<S: AsRef<str>>(elements: &[Option<S>]) -> Result<String> {
    if elements.is_empty() {
        return Err(Error::invalid_argument(
            "join requires at least one element",
        ));
    }

    let mut out = String::new();
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            out.push(JOIN_SEPARATOR);
        }
        match element {
            Some(s) => out.push_str(s.as_ref()),
            None => out.push_str(NULL_PLACEHOLDER),
        }
    }

    Ok(out)
}

/// Join a possibly absent list of elements
///
/// An absent list renders as a single `(null)`; an empty list is rejected
/// like in [`join`].
pub fn join_all<S: AsRef<str>>(elements: Option<&[Option<S>]>) -> Result<String> {
    match elements {
        Some(elements) => join(elements),
        None => Ok(NULL_PLACEHOLDER.to_string()),
    }
}

/// Remove every code point of `removal` from `input`
///
/// Membership is tested per code point, so `strip("Hallo-ollaH", "Halo")`
/// yields `"-"`. The relative order of the kept characters is preserved.
///
/// # Errors
/// `Error::InvalidArgument` when either argument is absent.
pub fn strip(input: Option<&str>, removal: Option<&str>) -> Result<String> {
    let (input, removal) = match (input, removal) {
        (Some(input), Some(removal)) => (input, removal),
        _ => return Err(Error::invalid_argument("strip does not accept null")),
    };

    if removal.is_empty() {
        return Ok(input.to_string());
    }

    let removed: HashSet<char> = removal.chars().collect();
    Ok(input.chars().filter(|c| !removed.contains(c)).collect())
}
