//! # shorthand
//!
//! Bidirectional conversion between CSS shorthand declarations and their
//! longhand equivalents.
//!
//! ## Features
//!
//! - `margin`, `padding` and `border-width` / `border-style` / `border-color`
//!   (1-4 value top/right/bottom/left shorthands)
//! - `border` (width, style and color in any order)
//! - `background` (eight longhand slots)
//! - `font` (including system font keywords)
//! - Pluggable providers through a process-wide [`Registry`]
//!
//! ## Quick Start
//!
//! ```
//! use shorthand::{Declaration, get_provider_for_property};
//!
//! let provider = get_provider_for_property("margin").unwrap();
//! let longhands = provider
//!     .shorthand_to_longhand(&Declaration::new("margin", "1px 2px"))
//!     .unwrap();
//! assert_eq!(longhands.len(), 4);
//!
//! let shorthand = provider.longhand_to_shorthand(&longhands).unwrap();
//! assert_eq!(shorthand.value, "1px 2px");
//! ```
//!
//! ## Working with Text
//!
//! [`Converter`] parses declaration text, converts it and serializes the
//! result:
//!
//! ```
//! use shorthand::Converter;
//!
//! let longhands = Converter::new()
//!     .expand("border: 1px solid white;")
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(
//!     longhands,
//!     "border-width: 1px;\nborder-style: solid;\nborder-color: white;\n"
//! );
//! ```

pub mod codec;
pub mod config;
pub mod convert;
pub mod declaration;
pub mod error;
pub mod keywords;
pub mod provider;
pub mod trbl;
pub mod values;

pub use codec::{parse_declaration_list, parse_declaration_list_with, unparse_declaration_list};
pub use config::{Codec, ConverterConfig, DuplicatePolicy};
pub use convert::Converter;
pub use declaration::{Declaration, DeclarationList};
pub use error::{Error, Result};
pub use provider::{
    BackgroundProvider, BorderProvider, FontProvider, LonghandNaming, Registry,
    ShorthandProvider, TrblProvider, get_provider_for_property, global_registry,
    register_shorthand_provider,
};
pub use trbl::{Side, Sides, collapse_trbl, expand_trbl};
pub use values::tokenize;
