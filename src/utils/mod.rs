//! Global utilities module for stringutils
//!
//! The helpers are reachable both through their modules and through the `U`
//! namespace, which gathers every check in one place.
//!
//! # Usage
//! ```rust
//! use stringutils::U;
//!
//! assert!(U::is_blank(Some("")));
//! assert!(U::is_valid_isbn13(Some("978-0-321-35668-0")));
//! assert_eq!(U::strip(Some("a-b-c"), Some("-")).unwrap(), "abc");
//! ```

pub mod chars;
pub mod string;

/// Global utilities namespace
#[allow(non_snake_case)]
pub mod U {
    use super::*;
    use crate::error::Result;
    use std::string::String as StdString;

    /// String utilities namespace
    pub mod String {
        pub use super::super::string::*;
    }

    /// Character classification namespace
    pub mod Chars {
        pub use super::super::chars::*;
    }

    /// ISBN utilities namespace
    pub mod Isbn {
        pub use crate::isbn::*;
    }

    /// Password utilities namespace
    pub mod Security {
        pub use crate::security::*;
    }

    /// Check whether a string is absent or empty
    pub fn is_blank(value: Option<&str>) -> bool {
        string::is_blank(value)
    }

    /// Join elements with a comma, rendering absent elements as `(null)`
    ///
    /// # Example
    /// ```rust
    /// use stringutils::U;
    ///
    /// assert_eq!(U::join(&[Some("a"), None]).unwrap(), "a,(null)");
    /// ```
    pub fn join<S: AsRef<str>>(elements: &[Option<S>]) -> Result<StdString> {
        string::join(elements)
    }

    /// Remove all code points of `removal` from `input`
    pub fn strip(input: Option<&str>, removal: Option<&str>) -> Result<StdString> {
        string::strip(input, removal)
    }

    /// Validate an ISBN-10, separators allowed
    pub fn is_valid_isbn10(input: Option<&str>) -> bool {
        crate::isbn::is_valid_isbn10(input)
    }

    /// Validate an ISBN-13, separators allowed
    pub fn is_valid_isbn13(input: Option<&str>) -> bool {
        crate::isbn::is_valid_isbn13(input)
    }

    /// Check a password against the default policy
    pub fn is_secure(password: Option<&str>) -> bool {
        crate::security::is_secure(password)
    }
}
