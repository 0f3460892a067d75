//! Named validation rules
//!
//! A [`Rule`] names one of the string checks of this crate so that it can be
//! chosen at runtime, for example from a form definition. A [`Validator`]
//! applies rules with the ISBN and password settings of a [`Config`].
//!
//! | Rule name | Check |
//! |---|---|
//! | `required` | value present and not empty |
//! | `isbn10` | [`IsbnRules::is_valid_isbn10`] |
//! | `isbn13` | [`is_valid_isbn13`] |
//! | `isbn` | either ISBN form |
//! | `secure_password` | [`PasswordPolicy::assess`] |

use crate::config::Config;
use crate::error::{Error, Result};
use crate::isbn::{is_valid_isbn13, IsbnRules};
use crate::security::PasswordPolicy;
use crate::utils::string::is_blank;
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

static DEFAULT_VALIDATOR: Lazy<Validator> = Lazy::new(Validator::default);

/// Shared validator with the default settings
pub fn validator() -> &'static Validator {
    &DEFAULT_VALIDATOR
}

/// A check selectable by name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    Required,
    Isbn10,
    Isbn13,
    Isbn,
    SecurePassword,
}

impl Rule {
    pub const ALL: [Rule; 5] = [
        Rule::Required,
        Rule::Isbn10,
        Rule::Isbn13,
        Rule::Isbn,
        Rule::SecurePassword,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Isbn10 => "isbn10",
            Rule::Isbn13 => "isbn13",
            Rule::Isbn => "isbn",
            Rule::SecurePassword => "secure_password",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| Error::unknown_rule(s))
    }
}

/// A failed rule on a named field
#[derive(Debug)]
pub struct FieldError {
    pub field: String,
    pub rule: Rule,
    pub error: Error,
}

/// Applies rules with a fixed set of ISBN and password settings
#[derive(Clone, Debug, Default)]
pub struct Validator {
    isbn: IsbnRules,
    password: PasswordPolicy,
}

impl Validator {
    pub fn new(config: &Config) -> Self {
        Self {
            isbn: config.isbn.clone(),
            password: config.password.clone(),
        }
    }

    /// Apply one rule to a possibly absent value
    ///
    /// An absent value fails every rule.
    ///
    /// # Errors
    /// `Error::Validation` describing the failed check. For
    /// `secure_password` the message lists every unmet requirement.
    pub fn check(&self, rule: Rule, value: Option<&str>) -> Result<()> {
        let passed = match rule {
            Rule::Required => !is_blank(value),
            Rule::Isbn10 => self.isbn.is_valid_isbn10(value),
            Rule::Isbn13 => is_valid_isbn13(value),
            Rule::Isbn => self.isbn.is_valid_isbn10(value) || is_valid_isbn13(value),
            Rule::SecurePassword => return self.check_password(value),
        };

        if passed {
            return Ok(());
        }
        Err(Error::validation(match rule {
            Rule::Required => "Value is required",
            Rule::Isbn10 => "Invalid ISBN-10",
            Rule::Isbn13 => "Invalid ISBN-13",
            _ => "Invalid ISBN",
        }))
    }

    /// Apply a rule given by name
    ///
    /// # Errors
    /// `Error::UnknownRule` if no rule has that name, otherwise as [`Validator::check`].
    pub fn check_named(&self, name: &str, value: Option<&str>) -> Result<()> {
        self.check(name.parse()?, value)
    }

    /// Apply `(field, rule)` pairs to values looked up by field name
    ///
    /// Every pair is checked; the failures come back in input order.
    pub fn check_fields<'a, F>(&self, rules: &[(&str, Rule)], lookup: F) -> Vec<FieldError>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        rules
            .iter()
            .filter_map(|&(field, rule)| {
                self.check(rule, lookup(field)).err().map(|error| FieldError {
                    field: field.to_string(),
                    rule,
                    error,
                })
            })
            .collect()
    }

    fn check_password(&self, value: Option<&str>) -> Result<()> {
        let password = value.ok_or_else(|| Error::validation("Password is required"))?;
        let assessment = self.password.assess(password);
        if assessment.is_secure() {
            return Ok(());
        }

        let missing: Vec<String> = assessment
            .missing()
            .iter()
            .map(|r| r.to_string())
            .collect();
        Err(Error::validation(format!(
            "Password is not secure, requires: {}",
            missing.join(", ")
        )))
    }
}
