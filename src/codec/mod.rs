//! Declaration list parsing and serialization.
//!
//! Two parsers are available (see [`Codec`]):
//! - `Codec::Css` walks the text with cssparser's rule-body parser and
//!   reports the first malformed declaration as [`Error::Parse`](crate::Error::Parse)
//! - `Codec::Lenient` scans for `property: value;` pairs and skips anything else
//!
//! Both accept a final declaration without a terminating semicolon.

mod css;
mod lenient;

use std::fmt::Write;

use crate::config::Codec;
use crate::declaration::DeclarationList;
use crate::error::Result;

/// Parse declaration-list text (a rule body without braces) using the CSS codec.
pub fn parse_declaration_list(text: &str) -> Result<DeclarationList> {
    css::parse(text)
}

/// Parse declaration-list text with the chosen codec.
pub fn parse_declaration_list_with(text: &str, codec: Codec) -> Result<DeclarationList> {
    match codec {
        Codec::Css => css::parse(text),
        Codec::Lenient => Ok(lenient::parse(text)),
    }
}

/// Serialize a declaration list as one `property: value;` line per declaration.
pub fn unparse_declaration_list(decls: &DeclarationList) -> String {
    let mut buf = String::new();
    for decl in decls {
        writeln!(buf, "{decl}").unwrap();
    }
    buf
}
