//! `font` shorthand provider.
//!
//! ```text
//! font: [<style> || <variant> || <weight>]? <size> [/ <line-height>]? <family>
//!     | caption | icon | menu | message-box | small-caption | status-bar
//! ```
//!
//! The whole value is matched against one composite pattern with a capture
//! group per longhand. A value that fails the pattern expands to nothing.
//! The line-height slot is written as `font-height`. `line-height` is read
//! in its place when collapsing.

use std::sync::LazyLock;

use regex_lite::{Captures, Regex};

use crate::config::DuplicatePolicy;
use crate::declaration::{Declaration, DeclarationList, INITIAL};
use crate::error::{Error, Result};
use crate::keywords::{
    FontSizeKeyword, FontStyle, FontVariant, FontWeight, LENGTH_UNITS, SystemFont, alternation,
};

use super::{ShorthandProvider, ensure_property, shared_priority, with_priority};

const PROPERTY: &str = "font";

/// Standard name of the `font-height` slot, also accepted when collapsing.
const LINE_HEIGHT_ALIAS: &str = "line-height";

/// The seven font slots, in shorthand order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Style,
    Variant,
    Weight,
    Size,
    Height,
    Family,
    System,
}

impl Slot {
    const ALL: [Slot; 7] = [
        Slot::Style,
        Slot::Variant,
        Slot::Weight,
        Slot::Size,
        Slot::Height,
        Slot::Family,
        Slot::System,
    ];

    fn longhand(self) -> &'static str {
        match self {
            Slot::Style => "font-style",
            Slot::Variant => "font-variant",
            Slot::Weight => "font-weight",
            Slot::Size => "font-size",
            Slot::Height => "font-height",
            Slot::Family => "font-family",
            Slot::System => "font-values",
        }
    }

    /// Capture group of this slot in [`FONT_RE`].
    fn group(self) -> usize {
        self as usize + 1
    }
}

/// Keywords every slot accepts on top of its own.
const GLOBAL: &str = "initial|inherit";

static FONT_RE: LazyLock<Regex> = LazyLock::new(|| {
    let number = r"(?:\d+\.?\d*|\.\d+)";
    let units = alternation(LENGTH_UNITS.iter().copied().chain(["%"]));
    let word = "[a-zA-Z-][a-zA-Z0-9-]*";
    let family_name = format!(r#"(?:"[^"]*"|'[^']*'|{word}(?:\s+{word})*)"#);

    let style = format!("{}|{GLOBAL}", FontStyle::alternation());
    let variant = format!("{}|{GLOBAL}", FontVariant::alternation());
    let weight = format!(r"{}|{GLOBAL}|\d+", FontWeight::alternation());
    let size = format!(
        "{}|{GLOBAL}|{number}(?:{units})?",
        FontSizeKeyword::alternation()
    );
    let line_height = format!("normal|{GLOBAL}|{number}(?:{units})?");
    let family = format!(r"{GLOBAL}|{family_name}(?:\s*,\s*{family_name})*");
    let system = format!("{}|{GLOBAL}", SystemFont::alternation());

    Regex::new(&format!(
        r"(?i)^\s*(?:(?:({style})\s+)?(?:({variant})\s+)?(?:({weight})\s+)?({size})(?:\s*/\s*({line_height}))?\s+({family})|({system}))\s*$"
    ))
    .unwrap()
});

fn capture<'t>(caps: &Captures<'t>, slot: Slot) -> &'t str {
    caps.get(slot.group()).map_or(INITIAL, |m| m.as_str())
}

/// Provider for the `font` shorthand.
#[derive(Debug, Clone, Default)]
pub struct FontProvider {
    duplicates: DuplicatePolicy,
}

impl FontProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Look up one slot's longhand declaration.
    fn longhand<'d>(&self, decls: &'d DeclarationList, slot: Slot) -> Result<&'d Declaration> {
        match slot {
            Slot::Height => match decls.find(slot.longhand(), self.duplicates)? {
                Some(decl) => Ok(decl),
                None => decls
                    .find(LINE_HEIGHT_ALIAS, self.duplicates)?
                    .ok_or_else(|| Error::incomplete(PROPERTY, slot.longhand())),
            },
            _ => decls.require(PROPERTY, slot.longhand(), self.duplicates),
        }
    }
}

impl ShorthandProvider for FontProvider {
    fn property(&self) -> &str {
        PROPERTY
    }

    fn shorthand_to_longhand(&self, decl: &Declaration) -> Result<DeclarationList> {
        ensure_property(PROPERTY, decl)?;

        let Some(caps) = FONT_RE.captures(&decl.value) else {
            tracing::warn!(value = %decl.value, "value does not match the font grammar");
            return Ok(DeclarationList::new());
        };

        let longhands = Slot::ALL
            .iter()
            .map(|slot| Declaration::new(slot.longhand(), capture(&caps, *slot)))
            .collect();
        Ok(with_priority(decl, longhands))
    }

    fn longhand_to_shorthand(&self, decls: &DeclarationList) -> Result<Declaration> {
        let found = Slot::ALL
            .iter()
            .map(|slot| self.longhand(decls, *slot))
            .collect::<Result<Vec<&Declaration>>>()?;
        let important = shared_priority(PROPERTY, found.iter().copied())?;

        // `initial` reads as unset
        let slot_value = |slot: Slot| {
            let decl = found[slot as usize];
            (!decl.is_initial()).then(|| decl.trimmed_value())
        };
        let style = slot_value(Slot::Style);
        let variant = slot_value(Slot::Variant);
        let weight = slot_value(Slot::Weight);
        let size = slot_value(Slot::Size);
        let line_height = slot_value(Slot::Height);
        let family = slot_value(Slot::Family);
        let system = slot_value(Slot::System);

        let mut parts: Vec<String> = Vec::with_capacity(6);
        parts.extend([style, variant, weight].into_iter().flatten().map(str::to_string));

        match (size, line_height) {
            (Some(size), Some(line_height)) => parts.push(format!("{size}/{line_height}")),
            (Some(size), None) => parts.push(size.to_string()),
            (None, Some(_)) => {
                return Err(Error::invalid_value(
                    found[Slot::Height as usize].property.as_str(),
                    "a line-height needs a font-size",
                ));
            }
            (None, None) => {}
        }

        parts.extend([family, system].into_iter().flatten().map(str::to_string));

        let value = if parts.is_empty() {
            INITIAL.to_string()
        } else {
            parts.join(" ")
        };
        Ok(Declaration::new(PROPERTY, value).with_important(important))
    }
}
