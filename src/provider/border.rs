//! `border` shorthand provider.
//!
//! `border: <width> || <style> || <color>` is classified token by token, so
//! the order of components in the shorthand does not matter and any of them
//! may be omitted.

use crate::config::DuplicatePolicy;
use crate::declaration::{Declaration, DeclarationList};
use crate::error::{Error, Result};
use crate::keywords::BorderStyle;
use crate::values::{is_border_width, is_color, is_numeric, tokenize};

use super::{ShorthandProvider, ensure_property, shared_priority, with_priority};

const PROPERTY: &str = "border";

/// The three `border` components, in serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    Width,
    Style,
    Color,
}

impl Component {
    const ALL: [Component; 3] = [Component::Width, Component::Style, Component::Color];

    fn longhand(self) -> &'static str {
        match self {
            Component::Width => "border-width",
            Component::Style => "border-style",
            Component::Color => "border-color",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Classify a single shorthand token.
    ///
    /// Widths and styles are recognised explicitly; anything else is taken as
    /// a color unless it is a bare number, which cannot be one.
    fn classify(token: &str) -> Option<Component> {
        if is_border_width(token) {
            Some(Component::Width)
        } else if BorderStyle::from_css(token).is_some() {
            Some(Component::Style)
        } else if is_color(token) || !is_numeric(token) {
            Some(Component::Color)
        } else {
            None
        }
    }
}

/// Provider for the `border` shorthand.
#[derive(Debug, Clone, Default)]
pub struct BorderProvider {
    duplicates: DuplicatePolicy,
}

impl BorderProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}

impl ShorthandProvider for BorderProvider {
    fn property(&self) -> &str {
        PROPERTY
    }

    fn shorthand_to_longhand(&self, decl: &Declaration) -> Result<DeclarationList> {
        ensure_property(PROPERTY, decl)?;

        let mut slots: [Option<&str>; 3] = [None; 3];
        for token in tokenize(&decl.value) {
            let Some(component) = Component::classify(token) else {
                tracing::warn!(token, "dropping unclassifiable border token");
                continue;
            };
            let slot = &mut slots[component.index()];
            if slot.is_some() {
                tracing::warn!(token, longhand = component.longhand(), "component already set");
                continue;
            }
            *slot = Some(token);
        }

        let longhands = Component::ALL
            .iter()
            .filter_map(|c| slots[c.index()].map(|v| Declaration::new(c.longhand(), v)))
            .collect();
        Ok(with_priority(decl, longhands))
    }

    fn longhand_to_shorthand(&self, decls: &DeclarationList) -> Result<Declaration> {
        for decl in decls {
            if !Component::ALL.iter().any(|c| c.longhand() == decl.property) {
                tracing::warn!(property = %decl.property, "ignoring non-border longhand");
            }
        }

        let mut found = Vec::with_capacity(3);
        for component in Component::ALL {
            let Some(decl) = decls.find(component.longhand(), self.duplicates)? else {
                continue;
            };
            // border-width etc. accept 1-4 values, the border shorthand only one
            if tokenize(&decl.value).len() != 1 {
                return Err(Error::invalid_value(
                    component.longhand(),
                    "the border shorthand takes a single value per component",
                ));
            }
            found.push(decl);
        }

        if found.is_empty() {
            return Err(Error::incomplete(
                PROPERTY,
                "border-width, border-style or border-color",
            ));
        }

        let important = shared_priority(PROPERTY, found.iter().copied())?;
        let values: Vec<&str> = found.iter().map(|d| d.trimmed_value()).collect();
        Ok(Declaration::new(PROPERTY, values.join(" ")).with_important(important))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(value: &str) -> DeclarationList {
        BorderProvider::new()
            .shorthand_to_longhand(&Declaration::new("border", value))
            .unwrap()
    }

    fn longhands(pairs: &[(&str, &str)]) -> DeclarationList {
        pairs
            .iter()
            .map(|(p, v)| Declaration::new(*p, *v))
            .collect()
    }

    #[test]
    fn test_width_style_color() {
        assert_eq!(
            expand("1px solid white"),
            longhands(&[
                ("border-width", "1px"),
                ("border-style", "solid"),
                ("border-color", "white"),
            ])
        );
    }

    #[test]
    fn test_order_independent() {
        assert_eq!(expand("solid white 1px"), expand("1px solid white"));
        assert_eq!(expand("white 1px solid"), expand("1px solid white"));
    }

    #[test]
    fn test_partial() {
        assert_eq!(expand("dashed"), longhands(&[("border-style", "dashed")]));
        assert_eq!(
            expand("0 #ccc"),
            longhands(&[("border-width", "0"), ("border-color", "#ccc")])
        );
        assert!(expand("").is_empty());
    }

    #[test]
    fn test_keywords_and_functions() {
        assert_eq!(
            expand("thick inherit rgba(0, 0, 0, 0.5)"),
            longhands(&[
                ("border-width", "thick"),
                ("border-style", "inherit"),
                ("border-color", "rgba(0, 0, 0, 0.5)"),
            ])
        );
    }

    #[test]
    fn test_unclassifiable_tokens_are_dropped() {
        assert_eq!(
            expand("5 solid red"),
            longhands(&[("border-style", "solid"), ("border-color", "red")])
        );
    }

    #[test]
    fn test_repeated_component_keeps_first() {
        assert_eq!(
            expand("1px 2px solid"),
            longhands(&[("border-width", "1px"), ("border-style", "solid")])
        );
    }

    #[test]
    fn test_roundtrip() {
        let provider = BorderProvider::new();
        let decls = expand("solid 1px white");
        let shorthand = provider.longhand_to_shorthand(&decls).unwrap();
        assert_eq!(shorthand, Declaration::new("border", "1px solid white"));
    }

    #[test]
    fn test_shorthand_from_partial_longhands() {
        let provider = BorderProvider::new();
        let shorthand = provider
            .longhand_to_shorthand(&longhands(&[("border-color", "red"), ("border-style", "dotted")]))
            .unwrap();
        assert_eq!(shorthand.value, "dotted red");
    }

    #[test]
    fn test_shorthand_requires_a_component() {
        let err = BorderProvider::new()
            .longhand_to_shorthand(&longhands(&[("margin-top", "1px")]))
            .unwrap_err();
        assert!(matches!(err, Error::IncompleteLonghandSet { .. }));
    }

    #[test]
    fn test_multi_valued_width_is_rejected() {
        let err = BorderProvider::new()
            .longhand_to_shorthand(&longhands(&[
                ("border-width", "1px 2px"),
                ("border-style", "solid"),
            ]))
            .unwrap_err();
        assert_eq!(
            err,
            Error::invalid_value(
                "border-width",
                "the border shorthand takes a single value per component"
            )
        );
    }

    #[test]
    fn test_important_is_not_a_component() {
        let decls = BorderProvider::new()
            .shorthand_to_longhand(&Declaration::new("border", "1px solid").with_important(true))
            .unwrap();
        assert_eq!(
            decls,
            longhands(&[("border-width", "1px"), ("border-style", "solid")])
                .into_iter()
                .map(|d| d.with_important(true))
                .collect::<DeclarationList>()
        );

        let shorthand = BorderProvider::new().longhand_to_shorthand(&decls).unwrap();
        assert_eq!(shorthand.to_string(), "border: 1px solid !important;");
    }

    #[test]
    fn test_property_mismatch() {
        let err = BorderProvider::new()
            .shorthand_to_longhand(&Declaration::new("border-top", "1px"))
            .unwrap_err();
        assert_eq!(err, Error::mismatch("border", "border-top"));
    }
}
