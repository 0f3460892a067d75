//! Password strength classification
//!
//! A password is secure when it is long enough, uses enough distinct
//! characters and covers every character class:
//! - at least 20 code points
//! - at least 10 distinct code points
//! - a decimal digit, an uppercase letter, a lowercase letter and a special
//!   character (anything that is none of the former three)
//!
//! Classes are looked up on the set of distinct code points, so repeating one
//! special character does not help or hurt.

use crate::utils::chars::CharClass;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Password policy settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum number of code points
    pub min_length: usize,
    /// Minimum number of distinct code points
    pub min_distinct: usize,
    /// Require a decimal digit
    pub require_digit: bool,
    /// Require an uppercase letter
    pub require_uppercase: bool,
    /// Require a lowercase letter
    pub require_lowercase: bool,
    /// Require a character outside the three classes above
    pub require_special: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 20,
            min_distinct: 10,
            require_digit: true,
            require_uppercase: true,
            require_lowercase: true,
            require_special: true,
        }
    }
}

/// A single rule a password can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRequirement {
    MinLength(usize),
    MinDistinct(usize),
    Digit,
    Uppercase,
    Lowercase,
    Special,
}

impl fmt::Display for PasswordRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordRequirement::MinLength(n) => write!(f, "at least {} characters", n),
            PasswordRequirement::MinDistinct(n) => {
                write!(f, "at least {} different characters", n)
            }
            PasswordRequirement::Digit => f.write_str("a digit"),
            PasswordRequirement::Uppercase => f.write_str("an uppercase letter"),
            PasswordRequirement::Lowercase => f.write_str("a lowercase letter"),
            PasswordRequirement::Special => f.write_str("a special character"),
        }
    }
}

/// What a password contains, measured against a policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordAssessment {
    /// Length in code points
    pub length: usize,
    /// Number of distinct code points
    pub distinct: usize,
    pub has_digit: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_special: bool,
    missing: Vec<PasswordRequirement>,
}

impl PasswordAssessment {
    /// Requirements the password does not meet, in policy order
    pub fn missing(&self) -> &[PasswordRequirement] {
        &self.missing
    }

    pub fn is_secure(&self) -> bool {
        self.missing.is_empty()
    }
}

impl PasswordPolicy {
    /// Check a password against this policy
    ///
    /// Short passwords are rejected before any character is classified.
    pub fn is_secure(&self, password: &str) -> bool {
        if password.chars().count() < self.min_length {
            return false;
        }
        self.assess(password).is_secure()
    }

    /// Measure a password and list every unmet requirement
    pub fn assess(&self, password: &str) -> PasswordAssessment {
        let length = password.chars().count();
        let distinct: HashSet<char> = password.chars().collect();

        let mut has_digit = false;
        let mut has_uppercase = false;
        let mut has_lowercase = false;
        let mut has_special = false;

        for &c in &distinct {
            match CharClass::of(c) {
                CharClass::DecimalDigit => has_digit = true,
                CharClass::Uppercase => has_uppercase = true,
                CharClass::Lowercase => has_lowercase = true,
                _ => has_special = true,
            }
        }

        let mut missing = Vec::new();
        if length < self.min_length {
            missing.push(PasswordRequirement::MinLength(self.min_length));
        }
        if distinct.len() < self.min_distinct {
            missing.push(PasswordRequirement::MinDistinct(self.min_distinct));
        }
        if self.require_digit && !has_digit {
            missing.push(PasswordRequirement::Digit);
        }
        if self.require_uppercase && !has_uppercase {
            missing.push(PasswordRequirement::Uppercase);
        }
        if self.require_lowercase && !has_lowercase {
            missing.push(PasswordRequirement::Lowercase);
        }
        if self.require_special && !has_special {
            missing.push(PasswordRequirement::Special);
        }

        if !missing.is_empty() {
            log::trace!(
                "Password rejected: {} unmet requirement(s)",
                missing.len()
            );
        }

        PasswordAssessment {
            length,
            distinct: distinct.len(),
            has_digit,
            has_uppercase,
            has_lowercase,
            has_special,
            missing,
        }
    }
}

/// Check a password against the default policy
///
/// `None` is never secure.
///
/// # Example
/// ```rust
/// use stringutils::security::is_secure;
///
/// assert!(is_secure(Some("123456abcdefABCDEF#%&")));
/// assert!(!is_secure(Some("0123456789abcABC#%&")));
/// assert!(!is_secure(None));
/// ```
pub fn is_secure(password: Option<&str>) -> bool {
    match password {
        Some(password) => PasswordPolicy::default().is_secure(password),
        None => false,
    }
}
