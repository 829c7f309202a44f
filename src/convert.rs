//! Text-in, text-out shorthand conversion.
//!
//! # Example
//!
//! ```
//! use shorthand::Converter;
//!
//! let converter = Converter::new();
//! let longhands = converter.expand("padding: 5px;")?.unwrap();
//! assert_eq!(
//!     longhands,
//!     "padding-top: 5px;\npadding-right: 5px;\npadding-bottom: 5px;\npadding-left: 5px;\n"
//! );
//!
//! let shorthand = converter.collapse("padding", &longhands)?.unwrap();
//! assert_eq!(shorthand, "padding: 5px;\n");
//! # Ok::<(), shorthand::Error>(())
//! ```

use std::sync::Arc;

use crate::codec::{parse_declaration_list_with, unparse_declaration_list};
use crate::config::ConverterConfig;
use crate::declaration::{Declaration, DeclarationList};
use crate::error::Result;
use crate::provider::{Registry, ShorthandProvider};

/// Drives a conversion from declaration text to declaration text.
///
/// `Converter::new()` starts with the built-in providers; `with_config()`
/// and `with_registry()` customize it.
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConverterConfig,
    registry: Registry,
}

impl Converter {
    /// Create a converter with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ConverterConfig::default())
    }

    /// Create a converter whose built-in providers follow `config`.
    pub fn with_config(config: ConverterConfig) -> Self {
        Self {
            config,
            registry: Registry::with_builtins(config.duplicates),
        }
    }

    /// Replace the provider registry.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Parse declaration text with the configured codec.
    pub fn parse(&self, text: &str) -> Result<DeclarationList> {
        parse_declaration_list_with(text, self.config.codec)
    }

    fn provider(&self, property: &str) -> Option<Arc<dyn ShorthandProvider>> {
        let provider = self.registry.get(property);
        if provider.is_none() {
            tracing::debug!(property, "no shorthand provider");
        }
        provider
    }

    /// Expand one shorthand declaration.
    ///
    /// Returns `Ok(None)` when no provider is registered for its property.
    pub fn expand_declaration(&self, decl: &Declaration) -> Result<Option<DeclarationList>> {
        let Some(provider) = self.provider(&decl.property) else {
            return Ok(None);
        };
        let longhands = provider.shorthand_to_longhand(decl)?;
        tracing::debug!(
            property = %decl.property,
            longhands = longhands.len(),
            "expanded shorthand"
        );
        Ok(Some(longhands))
    }

    /// Collapse a longhand list into the `shorthand` declaration.
    ///
    /// Returns `Ok(None)` when no provider is registered for `shorthand`.
    pub fn collapse_declarations(
        &self,
        shorthand: &str,
        decls: &DeclarationList,
    ) -> Result<Option<Declaration>> {
        let Some(provider) = self.provider(shorthand) else {
            return Ok(None);
        };
        let decl = provider.longhand_to_shorthand(decls)?;
        tracing::debug!(property = %decl.property, value = %decl.value, "collapsed longhands");
        Ok(Some(decl))
    }

    /// Expand the shorthand declaration in `text` and serialize its longhands.
    ///
    /// `text` is expected to hold a single declaration. Any further
    /// declarations are ignored. Returns `Ok(None)` when `text` holds no
    /// declaration or its property has no provider.
    pub fn expand(&self, text: &str) -> Result<Option<String>> {
        let decls = self.parse(text)?;
        let mut iter = decls.iter();
        let Some(decl) = iter.next() else {
            return Ok(None);
        };
        let ignored = iter.count();
        if ignored > 0 {
            tracing::warn!(ignored, "only the first declaration is expanded");
        }

        Ok(self
            .expand_declaration(decl)?
            .map(|longhands| unparse_declaration_list(&longhands)))
    }

    /// Parse longhand `text` and serialize the `shorthand` declaration
    /// built from it.
    ///
    /// Returns `Ok(None)` when `shorthand` has no provider.
    pub fn collapse(&self, shorthand: &str, text: &str) -> Result<Option<String>> {
        let decls = self.parse(text)?;
        Ok(self
            .collapse_declarations(shorthand, &decls)?
            .map(|decl| unparse_declaration_list(&vec![decl].into())))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Codec, DuplicatePolicy};
    use crate::error::Error;

    #[test]
    fn test_expand_margin() {
        let out = Converter::new()
            .expand("margin: 1px 2px 3px 4px;")
            .unwrap()
            .unwrap();
        assert_eq!(
            out,
            "margin-top: 1px;\nmargin-right: 2px;\nmargin-bottom: 3px;\nmargin-left: 4px;\n"
        );
    }

    #[test]
    fn test_collapse_margin() {
        let out = Converter::new()
            .collapse(
                "margin",
                "margin-top: 1px;\nmargin-right: 2px;\nmargin-bottom: 3px;\nmargin-left: 4px;\n",
            )
            .unwrap()
            .unwrap();
        assert_eq!(out, "margin: 1px 2px 3px 4px;\n");
    }

    #[test]
    fn test_unsupported_property_is_none() {
        let converter = Converter::new();
        assert_eq!(converter.expand("color: red;").unwrap(), None);
        assert_eq!(converter.collapse("color", "color: red;").unwrap(), None);
        assert_eq!(converter.expand("").unwrap(), None);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = Converter::new().expand("margin 1px;").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_lenient_codec_skips_garbage() {
        let converter = Converter::with_config(ConverterConfig::default().with_codec(Codec::Lenient));
        let out = converter.expand("}}} border: 1px solid red").unwrap().unwrap();
        assert_eq!(
            out,
            "border-width: 1px;\nborder-style: solid;\nborder-color: red;\n"
        );
    }

    #[test]
    fn test_only_first_declaration_expanded() {
        let out = Converter::new()
            .expand("padding: 1px; margin: 2px;")
            .unwrap()
            .unwrap();
        assert!(out.starts_with("padding-top: 1px;"));
        assert!(!out.contains("margin"));
    }

    #[test]
    fn test_incomplete_longhands_fail() {
        let err = Converter::new()
            .collapse("padding", "padding-top: 1px; padding-left: 1px;")
            .unwrap_err();
        assert!(matches!(err, Error::UnexpectedLonghandCount { .. }));
    }

    #[test]
    fn test_duplicate_policy_reaches_providers() {
        let text = "border-width: 1px; border-width: 2px; border-style: solid;";

        let first = Converter::new().collapse("border", text).unwrap().unwrap();
        assert_eq!(first, "border: 1px solid;\n");

        let last = Converter::with_config(
            ConverterConfig::default().with_duplicates(DuplicatePolicy::LastWins),
        )
        .collapse("border", text)
        .unwrap()
        .unwrap();
        assert_eq!(last, "border: 2px solid;\n");

        let err = Converter::with_config(
            ConverterConfig::default().with_duplicates(DuplicatePolicy::Reject),
        )
        .collapse("border", text)
        .unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateLonghand {
                property: "border-width".to_string()
            }
        );
    }

    #[test]
    fn test_custom_registry() {
        let converter = Converter::new().with_registry(Registry::new());
        assert_eq!(converter.expand("margin: 1px;").unwrap(), None);
    }
}
