//! Shorthand providers and the registry that maps property names to them.
//!
//! # Architecture
//!
//! Every shorthand family implements [`ShorthandProvider`]:
//! - `shorthand_to_longhand()` expands one shorthand declaration
//! - `longhand_to_shorthand()` rebuilds the shorthand from its longhands
//!
//! Providers are immutable once built. Anything computed during a
//! conversion lives in locals, so one provider can serve concurrent calls.
//!
//! A [`Registry`] owns one provider per shorthand name. The process-wide
//! registry behind [`get_provider_for_property`] starts with the built-in
//! providers and can be amended with [`register_shorthand_provider`].

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use crate::config::DuplicatePolicy;
use crate::declaration::{Declaration, DeclarationList};
use crate::error::{Error, Result};

mod background;
mod border;
mod box_model;
mod font;

pub use background::BackgroundProvider;
pub use border::BorderProvider;
pub use box_model::{LonghandNaming, TrblProvider};
pub use font::FontProvider;

/// Converts one shorthand property family to and from its longhands.
pub trait ShorthandProvider: Send + Sync {
    /// The shorthand property this provider owns, e.g. `"margin"`.
    fn property(&self) -> &str;

    /// Expand a shorthand declaration into its longhand declarations.
    ///
    /// Fails with [`Error::PropertyMismatch`] when `decl` is not this
    /// provider's shorthand. Tokens that fit no longhand are dropped, so the
    /// result may be partial or empty. Every longhand keeps the shorthand's
    /// `!important` priority.
    fn shorthand_to_longhand(&self, decl: &Declaration) -> Result<DeclarationList>;

    /// Rebuild the shorthand declaration from a longhand list.
    ///
    /// Longhands are matched by name, not position. The longhands used must
    /// share one priority, which the shorthand takes.
    fn longhand_to_shorthand(&self, decls: &DeclarationList) -> Result<Declaration>;
}

/// Give every longhand the shorthand's `!important` priority.
pub(crate) fn with_priority(shorthand: &Declaration, longhands: DeclarationList) -> DeclarationList {
    longhands
        .into_iter()
        .map(|decl| decl.with_important(shorthand.important))
        .collect()
}

/// The priority shared by the longhands a shorthand is rebuilt from.
///
/// A shorthand has a single priority, so mixing `!important` and normal
/// longhands cannot be collapsed.
pub(crate) fn shared_priority<'a>(
    shorthand: &str,
    longhands: impl IntoIterator<Item = &'a Declaration>,
) -> Result<bool> {
    let mut priority = None;
    for decl in longhands {
        match priority {
            None => priority = Some(decl.important),
            Some(important) if important != decl.important => {
                return Err(Error::invalid_value(
                    decl.property.as_str(),
                    format!("'{shorthand}' longhands mix !important and normal priority"),
                ));
            }
            Some(_) => {}
        }
    }
    Ok(priority.unwrap_or(false))
}

/// Fail unless `decl` is the `owner` shorthand.
pub(crate) fn ensure_property(owner: &str, decl: &Declaration) -> Result<()> {
    if decl.property == owner {
        Ok(())
    } else {
        Err(Error::mismatch(owner, decl.property.as_str()))
    }
}

/// Maps shorthand property names to providers.
///
/// Registering a name that is already present replaces its provider.
#[derive(Clone, Default)]
pub struct Registry {
    providers: HashMap<String, Arc<dyn ShorthandProvider>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in provider.
    pub fn with_builtins(duplicates: DuplicatePolicy) -> Self {
        let mut registry = Self::new();
        for provider in builtin_providers(duplicates) {
            registry.register(provider.property().to_string(), provider);
        }
        registry
    }

    /// Register `provider` for `property`, returning the provider it replaced.
    pub fn register(
        &mut self,
        property: impl Into<String>,
        provider: Arc<dyn ShorthandProvider>,
    ) -> Option<Arc<dyn ShorthandProvider>> {
        let mut property = property.into();
        property.make_ascii_lowercase();
        let replaced = self.providers.insert(property, provider);
        if replaced.is_some() {
            tracing::debug!("replaced shorthand provider");
        }
        replaced
    }

    /// Look up the provider for `property`.
    ///
    /// `None` means no conversion is offered for that property.
    pub fn get(&self, property: &str) -> Option<Arc<dyn ShorthandProvider>> {
        self.providers
            .get(property.to_ascii_lowercase().as_str())
            .cloned()
    }

    pub fn contains(&self, property: &str) -> bool {
        self.providers
            .contains_key(property.to_ascii_lowercase().as_str())
    }

    /// Registered property names, sorted.
    pub fn properties(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("properties", &self.properties())
            .finish()
    }
}

/// Every built-in provider, configured with `duplicates`.
pub fn builtin_providers(duplicates: DuplicatePolicy) -> Vec<Arc<dyn ShorthandProvider>> {
    vec![
        Arc::new(TrblProvider::new("margin", LonghandNaming::Suffix).with_duplicates(duplicates)),
        Arc::new(TrblProvider::new("padding", LonghandNaming::Suffix).with_duplicates(duplicates)),
        Arc::new(
            TrblProvider::new("border-width", LonghandNaming::Infix).with_duplicates(duplicates),
        ),
        Arc::new(
            TrblProvider::new("border-style", LonghandNaming::Infix).with_duplicates(duplicates),
        ),
        Arc::new(
            TrblProvider::new("border-color", LonghandNaming::Infix).with_duplicates(duplicates),
        ),
        Arc::new(BorderProvider::new().with_duplicates(duplicates)),
        Arc::new(BackgroundProvider::new().with_duplicates(duplicates)),
        Arc::new(FontProvider::new().with_duplicates(duplicates)),
    ]
}

static GLOBAL_REGISTRY: LazyLock<RwLock<Registry>> =
    LazyLock::new(|| RwLock::new(Registry::with_builtins(DuplicatePolicy::default())));

/// Register `provider` in the process-wide registry, replacing any
/// provider already registered for `property`.
pub fn register_shorthand_provider(
    property: impl Into<String>,
    provider: Arc<dyn ShorthandProvider>,
) {
    GLOBAL_REGISTRY.write().register(property, provider);
}

/// Look up a provider in the process-wide registry.
pub fn get_provider_for_property(property: &str) -> Option<Arc<dyn ShorthandProvider>> {
    GLOBAL_REGISTRY.read().get(property)
}

/// A snapshot of the process-wide registry.
pub fn global_registry() -> Registry {
    GLOBAL_REGISTRY.read().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl ShorthandProvider for Fixed {
        fn property(&self) -> &str {
            "margin"
        }

        fn shorthand_to_longhand(&self, decl: &Declaration) -> Result<DeclarationList> {
            ensure_property(self.property(), decl)?;
            Ok(vec![Declaration::new("margin-top", self.0)].into())
        }

        fn longhand_to_shorthand(&self, _decls: &DeclarationList) -> Result<Declaration> {
            Ok(Declaration::new("margin", self.0))
        }
    }

    #[test]
    fn test_builtins_registered() {
        let registry = Registry::with_builtins(DuplicatePolicy::FirstWins);
        assert_eq!(
            registry.properties(),
            vec![
                "background",
                "border",
                "border-color",
                "border-style",
                "border-width",
                "font",
                "margin",
                "padding",
            ]
        );
    }

    #[test]
    fn test_unknown_property_is_none() {
        let registry = Registry::with_builtins(DuplicatePolicy::FirstWins);
        assert!(registry.get("unknown-prop").is_none());
        assert!(!registry.contains("color"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = Registry::with_builtins(DuplicatePolicy::FirstWins);
        assert_eq!(registry.get("MARGIN").unwrap().property(), "margin");
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = Registry::new();
        assert!(registry.register("margin", Arc::new(Fixed("1px"))).is_none());
        assert!(registry.register("margin", Arc::new(Fixed("2px"))).is_some());

        let provider = registry.get("margin").unwrap();
        let shorthand = provider.longhand_to_shorthand(&DeclarationList::new()).unwrap();
        assert_eq!(shorthand.value, "2px");
        assert_eq!(registry.properties(), vec!["margin"]);
    }

    #[test]
    fn test_shared_priority() {
        let normal = Declaration::new("margin-top", "1px");
        let important = Declaration::new("margin-left", "1px").with_important(true);

        assert!(!shared_priority("margin", [&normal, &normal]).unwrap());
        assert!(shared_priority("margin", [&important, &important]).unwrap());
        assert!(!shared_priority("margin", Vec::<&Declaration>::new()).unwrap());

        let err = shared_priority("margin", [&normal, &important]).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { property, .. } if property == "margin-left"));
    }

    #[test]
    fn test_with_priority() {
        let shorthand = Declaration::new("margin", "1px").with_important(true);
        let longhands = with_priority(
            &shorthand,
            vec![Declaration::new("margin-top", "1px")].into(),
        );
        assert!(longhands.iter().all(|d| d.important));
    }

    #[test]
    fn test_ensure_property() {
        let provider = Fixed("1px");
        let err = provider
            .shorthand_to_longhand(&Declaration::new("padding", "1px"))
            .unwrap_err();
        assert_eq!(err, Error::mismatch("margin", "padding"));
    }

    #[test]
    fn test_global_registry_has_builtins() {
        assert!(get_provider_for_property("font").is_some());
        assert!(get_provider_for_property("unknown-prop").is_none());
        assert!(global_registry().contains("background"));
    }
}
