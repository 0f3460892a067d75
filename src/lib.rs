//! stringutils - String validation and transformation helpers
//!
//! stringutils provides small, pure functions over strings:
//! - Blank checks, comma joining with a `(null)` placeholder, character stripping
//! - ISBN-10 and ISBN-13 validation with checksum arithmetic
//! - Password strength classification
//! - Named validation rules selectable at runtime
//!
//! Absent values are passed as `None`. Character classes follow the Unicode
//! general category, so the checks behave the same on non-Latin input.
//!
//! ```rust
//! use stringutils::prelude::*;
//!
//! assert!(is_blank(None));
//! assert_eq!(join(&[Some("a"), None, Some("b")]).unwrap(), "a,(null),b");
//! assert!(is_valid_isbn10(Some("3-86680-192-0")));
//! assert!(is_valid_isbn13(Some("978-0-321-35668-0")));
//! assert!(is_secure(Some("123456abcdefABCDEF#%&")));
//! ```

// Enforce error handling best practices
#![cfg_attr(
    not(test),
    warn(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
    )
)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used,))]

pub mod config;
pub mod error;
pub mod isbn;
pub mod security;
pub mod utils;
pub mod validators;

// Re-export main types for public API
pub use config::Config;
pub use error::{Error, Result};
pub use isbn::{
    is_valid_isbn10, is_valid_isbn13, isbn10_check_digit, isbn13_check_digit, Isbn, IsbnKind,
    IsbnRules,
};
pub use security::{is_secure, PasswordAssessment, PasswordPolicy, PasswordRequirement};
pub use utils::chars::CharClass;
pub use utils::string::{is_blank, join, join_all, strip};
pub use utils::U;
pub use validators::{validator, FieldError, Rule, Validator};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::*;
}
