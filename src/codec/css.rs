//! Declaration list parsing with cssparser.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, Delimiter, ParseError, ParseErrorKind, Parser,
    ParserInput, ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
};

use crate::declaration::{Declaration, DeclarationList};
use crate::error::{Error, Result};

pub(super) fn parse(text: &str) -> Result<DeclarationList> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let mut collector = DeclarationCollector;
    let mut decls = DeclarationList::new();

    for result in RuleBodyParser::new(&mut parser, &mut collector) {
        match result {
            Ok(decl) => decls.push(decl),
            Err((err, slice)) => return Err(to_error(&err, slice)),
        }
    }

    tracing::debug!(count = decls.len(), "parsed declaration list");
    Ok(decls)
}

fn to_error(err: &ParseError<'_, ()>, slice: &str) -> Error {
    let reason = match &err.kind {
        ParseErrorKind::Basic(kind) => kind.to_string(),
        ParseErrorKind::Custom(()) => "empty value".to_string(),
    };
    // cssparser lines are 0-based, columns 1-based
    Error::parse(
        format!("{reason} in `{}`", slice.trim()),
        err.location.line + 1,
        err.location.column,
    )
}

/// Collects plain declarations; nested rules and at-rules are errors.
struct DeclarationCollector;

impl<'i> DeclarationParser<'i> for DeclarationCollector {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _start: &ParserState,
    ) -> std::result::Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let start = input.position();
        input.parse_until_before(Delimiter::Bang, |value| {
            while value.next().is_ok() {}
            Ok::<_, ParseError<'i, ()>>(())
        })?;
        let value = input.slice_from(start).trim();
        if value.is_empty() {
            return Err(input.new_custom_error(()));
        }
        let important = input.try_parse(cssparser::parse_important).is_ok();
        input.expect_exhausted()?;
        Ok(Declaration::new(name.as_ref(), value).with_important(important))
    }
}

impl<'i> AtRuleParser<'i> for DeclarationCollector {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for DeclarationCollector {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, Declaration, ()> for DeclarationCollector {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_with_semicolon() {
        let decls = parse("margin: 1px 2px;").unwrap();
        assert_eq!(decls.as_slice(), &[Declaration::new("margin", "1px 2px")]);
    }

    #[test]
    fn test_parse_single_without_semicolon() {
        let decls = parse("margin: 1px 2px").unwrap();
        assert_eq!(decls.as_slice(), &[Declaration::new("margin", "1px 2px")]);
    }

    #[test]
    fn test_parse_multiple_without_final_semicolon() {
        let decls = parse("margin-top: 1px;\n  margin-left : 4px\n").unwrap();
        assert_eq!(
            decls.as_slice(),
            &[
                Declaration::new("margin-top", "1px"),
                Declaration::new("margin-left", "4px"),
            ]
        );
    }

    #[test]
    fn test_parse_keeps_function_values_intact() {
        let decls = parse("background: url(\"a;b.png\") rgb(0, 0, 0);").unwrap();
        assert_eq!(decls.as_slice()[0].value, "url(\"a;b.png\") rgb(0, 0, 0)");
    }

    #[test]
    fn test_parse_lowercases_property() {
        let decls = parse("MARGIN-TOP: 1px;").unwrap();
        assert_eq!(decls.as_slice()[0].property, "margin-top");
    }

    #[test]
    fn test_parse_splits_important() {
        let decls = parse("padding: 0 ! IMPORTANT;\nmargin: 1px 2px").unwrap();
        assert_eq!(
            decls.as_slice(),
            &[
                Declaration::new("padding", "0").with_important(true),
                Declaration::new("margin", "1px 2px"),
            ]
        );
    }

    #[test]
    fn test_parse_stray_bang_fails() {
        assert!(matches!(parse("margin: 1px !foo;"), Err(Error::Parse { .. })));
        assert!(matches!(parse("margin: 1px !important 2px;"), Err(Error::Parse { .. })));
        assert!(matches!(parse("margin: !important;"), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("  \n ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_missing_colon_fails() {
        let err = parse("margin 1px;").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }), "got {err:?}");
    }

    #[test]
    fn test_parse_empty_value_fails() {
        assert!(matches!(parse("margin-top: ;"), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = parse("margin-top: 1px;\nmargin-left 4px;").unwrap_err();
        match err {
            Error::Parse { line, message, .. } => {
                assert_eq!(line, 2);
                assert!(message.contains("margin-left"), "message: {message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_nested_rule_fails() {
        assert!(parse("a { color: red; }").is_err());
    }
}
