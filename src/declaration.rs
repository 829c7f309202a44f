//! Declaration model shared by every provider and codec.
//!
//! A [`Declaration`] is deliberately parser-neutral: whatever produced the
//! text (the built-in codecs or a host editor's own CSS parser) adapts into
//! this `property` / `value` pair before conversion.

use std::fmt;

use crate::config::DuplicatePolicy;
use crate::error::{Error, Result};

/// A single CSS `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    /// Hyphen-case property name, always lowercase.
    pub property: String,
    /// Raw value text without the terminating semicolon or `!important`.
    pub value: String,
    /// Whether the declaration carried `!important`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub important: bool,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        let mut property = property.into();
        property.make_ascii_lowercase();
        Self {
            property,
            value: value.into(),
            important: false,
        }
    }

    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    /// The value with surrounding whitespace removed.
    pub fn trimmed_value(&self) -> &str {
        self.value.trim()
    }

    /// Whether the value is the `initial` placeholder used for unset slots.
    pub fn is_initial(&self) -> bool {
        self.trimmed_value().eq_ignore_ascii_case(INITIAL)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)?;
        if self.important {
            f.write_str(" !important")?;
        }
        f.write_str(";")
    }
}

/// Placeholder value for a longhand slot the shorthand did not set.
pub const INITIAL: &str = "initial";

/// An ordered list of declarations, e.g. the body of one rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DeclarationList(Vec<Declaration>);

impl DeclarationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, decl: Declaration) {
        self.0.push(decl);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Declaration] {
        &self.0
    }

    /// Find the declaration for `property`, resolving duplicates by `policy`.
    ///
    /// Returns `Ok(None)` when the property is absent.
    pub fn find(&self, property: &str, policy: DuplicatePolicy) -> Result<Option<&Declaration>> {
        let mut matches = self.0.iter().filter(|d| d.property == property);
        let found = match policy {
            DuplicatePolicy::FirstWins => matches.next(),
            DuplicatePolicy::LastWins => matches.next_back(),
            DuplicatePolicy::Reject => {
                let first = matches.next();
                if first.is_some() && matches.next().is_some() {
                    return Err(Error::DuplicateLonghand {
                        property: property.to_string(),
                    });
                }
                first
            }
        };
        Ok(found)
    }

    /// Like [`find`](Self::find), but a missing property fails the
    /// conversion of `shorthand`.
    pub fn require(
        &self,
        shorthand: &str,
        property: &str,
        policy: DuplicatePolicy,
    ) -> Result<&Declaration> {
        self.find(property, policy)?
            .ok_or_else(|| Error::incomplete(shorthand, property))
    }
}

impl From<Vec<Declaration>> for DeclarationList {
    fn from(decls: Vec<Declaration>) -> Self {
        Self(decls)
    }
}

impl FromIterator<Declaration> for DeclarationList {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for DeclarationList {
    type Item = Declaration;
    type IntoIter = std::vec::IntoIter<Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DeclarationList {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Extend<Declaration> for DeclarationList {
    fn extend<I: IntoIterator<Item = Declaration>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
