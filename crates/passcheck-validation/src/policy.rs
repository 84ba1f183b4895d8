//! Password composition policy

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const DEFAULT_MIN_LENGTH: usize = 8;
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*";

/// Character classes a password must draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CharClass {
    /// `a-z`
    Lowercase,
    /// `A-Z`
    Uppercase,
    /// `0-9`
    Digit,
    /// One of the policy's special characters
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase letter",
            CharClass::Uppercase => "uppercase letter",
            CharClass::Digit => "digit",
            CharClass::Special => "special character",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single unmet requirement
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("missing {0}")]
    MissingClass(CharClass),
    #[error("must be at least {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Every requirement the password failed, in policy order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("password does not satisfy the composition policy: {}", summarize(.violations))]
pub struct WeakPassword {
    pub violations: Vec<Violation>,
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl WeakPassword {
    pub fn is_too_short(&self) -> bool {
        self.violations
            .iter()
            .any(|v| matches!(v, Violation::TooShort { .. }))
    }

    pub fn missing_classes(&self) -> Vec<CharClass> {
        self.violations
            .iter()
            .filter_map(|v| match v {
                Violation::MissingClass(class) => Some(*class),
                Violation::TooShort { .. } => None,
            })
            .collect()
    }

    /// True when every character class is present and only the length fails
    pub fn is_length_only(&self) -> bool {
        self.missing_classes().is_empty() && self.is_too_short()
    }
}

/// Composition rules: one character of each [`CharClass`] plus a minimum length.
///
/// There is no maximum length and no ordering requirement; the classes may
/// appear anywhere in the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionPolicy {
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Characters that satisfy [`CharClass::Special`]
    #[serde(default = "default_special_chars")]
    pub special_chars: String,
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_special_chars() -> String {
    DEFAULT_SPECIAL_CHARS.to_string()
}

impl Default for CompositionPolicy {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            special_chars: default_special_chars(),
        }
    }
}

impl CompositionPolicy {
    pub fn required_classes(&self) -> &'static [CharClass] {
        &CharClass::ALL
    }

    /// Whether `c` counts towards `class` under this policy
    pub fn admits(&self, class: CharClass, c: char) -> bool {
        match class {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Special => self.special_chars.contains(c),
        }
    }

    /// Check a password, collecting every unmet requirement.
    ///
    /// Only the text before the first line terminator is examined. Length is
    /// counted in UTF-16 code units, the unit of a browser input's `value.length`.
    pub fn check(&self, password: &str) -> Result<(), WeakPassword> {
        let scope = first_line(password);
        let actual = scope.encode_utf16().count();

        let mut violations: Vec<Violation> = self
            .required_classes()
            .iter()
            .copied()
            .filter(|&class| !scope.chars().any(|c| self.admits(class, c)))
            .map(Violation::MissingClass)
            .collect();

        if actual < self.min_length {
            violations.push(Violation::TooShort {
                min: self.min_length,
                actual,
            });
        }

        if violations.is_empty() {
            tracing::debug!(length = actual, "password satisfies composition policy");
            Ok(())
        } else {
            tracing::debug!(
                length = actual,
                violations = violations.len(),
                "password rejected by composition policy"
            );
            Err(WeakPassword { violations })
        }
    }
}

/// Check a password against the default policy
pub fn check_strength(password: &str) -> Result<(), WeakPassword> {
    CompositionPolicy::default().check(password)
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn first_line(s: &str) -> &str {
    s.find(is_line_terminator).map_or(s, |end| &s[..end])
}
