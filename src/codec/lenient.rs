//! Pattern-scan declaration list parsing.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::declaration::{Declaration, DeclarationList};

/// Matches `property: value;`, or `property: value` at the end of the text.
static DECLARATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z-]+)\s*:\s*([^;]*?)\s*(?:;|$)").unwrap()
});

/// A trailing `!important` priority.
static IMPORTANT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*!\s*important$").unwrap());

pub(super) fn parse(text: &str) -> DeclarationList {
    let decls: DeclarationList = DECLARATION_RE
        .captures_iter(text)
        .filter_map(|cap| {
            let property = cap.get(1)?.as_str();
            let mut value = cap.get(2)?.as_str();
            let important = match IMPORTANT_RE.find(value) {
                Some(m) => {
                    value = &value[..m.start()];
                    true
                }
                None => false,
            };
            Some(Declaration::new(property, value.trim()).with_important(important))
        })
        .collect();

    tracing::debug!(count = decls.len(), "scanned declaration list");
    decls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single() {
        assert_eq!(
            parse("margin: 1px 2px;").as_slice(),
            &[Declaration::new("margin", "1px 2px")]
        );
        assert_eq!(
            parse("margin: 1px 2px").as_slice(),
            &[Declaration::new("margin", "1px 2px")]
        );
    }

    #[test]
    fn test_parse_multiple() {
        let decls = parse("margin-top: 1px;\nmargin-right : 0px;\nmargin-left: 10px");
        assert_eq!(
            decls.as_slice(),
            &[
                Declaration::new("margin-top", "1px"),
                Declaration::new("margin-right", "0px"),
                Declaration::new("margin-left", "10px"),
            ]
        );
    }

    #[test]
    fn test_parse_skips_garbage() {
        let decls = parse("%% nonsense ;; padding: 5px; ???");
        assert_eq!(decls.as_slice(), &[Declaration::new("padding", "5px")]);
    }

    #[test]
    fn test_parse_splits_important() {
        let decls = parse("margin: 1px !Important; padding: 2px");
        assert_eq!(
            decls.as_slice(),
            &[
                Declaration::new("margin", "1px").with_important(true),
                Declaration::new("padding", "2px"),
            ]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").is_empty());
    }
}
