//! Conversion configuration.

/// Which declaration-list codec parses longhand and shorthand text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Codec {
    /// Full CSS tokenizer; malformed declarations are reported as errors.
    #[default]
    Css,
    /// `property: value;` pattern scan. Unrecognised text is skipped.
    Lenient,
}

/// How longhand lookup treats a property that occurs more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DuplicatePolicy {
    /// The earliest declaration is used and later ones are ignored.
    #[default]
    FirstWins,
    /// The latest declaration is used, as the cascade would.
    LastWins,
    /// Any duplicate fails the conversion.
    Reject,
}

/// Configuration for a [`Converter`](crate::Converter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct ConverterConfig {
    pub codec: Codec,
    pub duplicates: DuplicatePolicy,
}

impl ConverterConfig {
    pub fn with_codec(mut self, codec: Codec) -> Self {
        self.codec = codec;
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}
