//! TRBL shorthand providers (margin, padding, border-width/style/color).

use crate::config::DuplicatePolicy;
use crate::declaration::{Declaration, DeclarationList};
use crate::error::{Error, Result};
use crate::trbl::{Side, Sides, collapse_trbl, expand_trbl};
use crate::values::tokenize;

use super::{ShorthandProvider, ensure_property, shared_priority, with_priority};

/// How a TRBL shorthand names its four longhands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LonghandNaming {
    /// `margin` -> `margin-top`
    Suffix,
    /// `border-width` -> `border-top-width`
    Infix,
}

/// Provider for shorthands whose value is 1-4 TRBL values.
#[derive(Debug, Clone)]
pub struct TrblProvider {
    property: String,
    naming: LonghandNaming,
    duplicates: DuplicatePolicy,
}

impl TrblProvider {
    pub fn new(property: impl Into<String>, naming: LonghandNaming) -> Self {
        Self {
            property: property.into(),
            naming,
            duplicates: DuplicatePolicy::default(),
        }
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Longhand property name for one side.
    pub fn longhand_name(&self, side: Side) -> String {
        match self.naming {
            LonghandNaming::Suffix => format!("{}-{}", self.property, side.as_str()),
            LonghandNaming::Infix => match self.property.rsplit_once('-') {
                Some((prefix, component)) => {
                    format!("{prefix}-{}-{component}", side.as_str())
                }
                None => format!("{}-{}", self.property, side.as_str()),
            },
        }
    }
}

impl ShorthandProvider for TrblProvider {
    fn property(&self) -> &str {
        &self.property
    }

    fn shorthand_to_longhand(&self, decl: &Declaration) -> Result<DeclarationList> {
        ensure_property(&self.property, decl)?;

        let tokens = tokenize(&decl.value);
        let Some(sides) = expand_trbl(&tokens) else {
            tracing::warn!(
                property = %self.property,
                value = %decl.value,
                count = tokens.len(),
                "expected 1-4 values"
            );
            return Ok(DeclarationList::new());
        };

        tracing::debug!(property = %self.property, "expanded TRBL shorthand");
        let longhands = Side::ALL
            .iter()
            .map(|side| Declaration::new(self.longhand_name(*side), *sides.get(*side)))
            .collect();
        Ok(with_priority(decl, longhands))
    }

    fn longhand_to_shorthand(&self, decls: &DeclarationList) -> Result<Declaration> {
        if decls.len() != 4 {
            return Err(Error::UnexpectedLonghandCount {
                shorthand: self.property.clone(),
                expected: 4,
                found: decls.len(),
            });
        }

        let mut found = Vec::with_capacity(4);
        for side in Side::ALL {
            found.push(decls.require(&self.property, &self.longhand_name(side), self.duplicates)?);
        }
        let important = shared_priority(&self.property, found.iter().copied())?;

        let values: Vec<&str> = found.iter().map(|d| d.trimmed_value()).collect();
        let sides = Sides::new(values[0], values[1], values[2], values[3]);
        Ok(
            Declaration::new(self.property.as_str(), collapse_trbl(&sides).join(" "))
                .with_important(important),
        )
    }
}
