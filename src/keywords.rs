//! CSS keyword sets and the enum_property! macro.
//!
//! Each shorthand grammar classifies tokens against a fixed keyword set.
//! The enums here are the single source of those sets: providers call
//! `from_css` to classify one token, and the background and font
//! recognizers build their regex alternations from `ALL`.

use std::fmt;

/// Macro for defining CSS keyword enums.
///
/// Inspired by lightningcss's `enum_property!` macro, this reduces boilerplate
/// for enums that map directly to CSS keywords.
///
/// # Example
///
/// ```ignore
/// enum_property! {
///     /// Font style (normal, italic, oblique).
///     pub enum FontStyle {
///         Normal => "normal",
///         Italic => "italic",
///         Oblique => "oblique",
///     }
/// }
/// ```
macro_rules! enum_property {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $css:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Every keyword of this set, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Returns the CSS keyword for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $css,)*
                }
            }

            /// Parse a CSS keyword (ASCII case-insensitive) into this enum.
            #[inline]
            pub fn from_css(s: &str) -> Option<Self> {
                $(
                    if s.eq_ignore_ascii_case($css) {
                        return Some($name::$variant);
                    }
                )*
                None
            }

            /// Regex alternation of all keywords, longest first.
            #[allow(dead_code)]
            pub(crate) fn alternation() -> String {
                alternation(Self::ALL.iter().map(|k| k.as_str()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) fn alternation<'a>(keywords: impl Iterator<Item = &'a str>) -> String {
    let mut keywords: Vec<&str> = keywords.collect();
    keywords.sort_by(|a, b| b.len().cmp(&a.len()));
    keywords.join("|")
}

enum_property! {
    /// `border-style` values, plus `inherit` which `border` accepts in that slot.
    pub enum BorderStyle {
        None => "none",
        Hidden => "hidden",
        Dotted => "dotted",
        Dashed => "dashed",
        Solid => "solid",
        Double => "double",
        Groove => "groove",
        Ridge => "ridge",
        Inset => "inset",
        Outset => "outset",
        Inherit => "inherit",
    }
}

enum_property! {
    /// Named `border-width` values.
    pub enum BorderWidthKeyword {
        Thin => "thin",
        Medium => "medium",
        Thick => "thick",
    }
}

enum_property! {
    pub enum RepeatStyle {
        RepeatX => "repeat-x",
        RepeatY => "repeat-y",
        Repeat => "repeat",
        Space => "space",
        Round => "round",
        NoRepeat => "no-repeat",
    }
}

enum_property! {
    pub enum Attachment {
        Fixed => "fixed",
        Local => "local",
        Scroll => "scroll",
    }
}

enum_property! {
    /// `<box>` values shared by `background-origin` and `background-clip`.
    pub enum BoxKeyword {
        BorderBox => "border-box",
        PaddingBox => "padding-box",
        ContentBox => "content-box",
    }
}

enum_property! {
    pub enum PositionKeyword {
        Left => "left",
        Right => "right",
        Top => "top",
        Bottom => "bottom",
        Center => "center",
    }
}

enum_property! {
    pub enum SizeKeyword {
        Auto => "auto",
        Cover => "cover",
        Contain => "contain",
    }
}

enum_property! {
    /// Font style (normal, italic, oblique).
    pub enum FontStyle {
        Normal => "normal",
        Italic => "italic",
        Oblique => "oblique",
    }
}

enum_property! {
    /// Font variant (normal, small-caps).
    pub enum FontVariant {
        Normal => "normal",
        SmallCaps => "small-caps",
    }
}

enum_property! {
    /// Named font weights. Numeric weights are matched separately.
    pub enum FontWeight {
        Normal => "normal",
        Bold => "bold",
        Bolder => "bolder",
        Lighter => "lighter",
    }
}

enum_property! {
    /// Absolute and relative font-size keywords.
    pub enum FontSizeKeyword {
        XxSmall => "xx-small",
        XSmall => "x-small",
        Small => "small",
        Medium => "medium",
        Large => "large",
        XLarge => "x-large",
        XxLarge => "xx-large",
        Smaller => "smaller",
        Larger => "larger",
    }
}

enum_property! {
    /// System font keywords, which stand for a whole `font` value.
    pub enum SystemFont {
        Caption => "caption",
        Icon => "icon",
        Menu => "menu",
        MessageBox => "message-box",
        SmallCaption => "small-caption",
        StatusBar => "status-bar",
    }
}

/// Length units recognised when classifying a dimension token.
pub const LENGTH_UNITS: &[&str] = &[
    "px", "em", "rem", "ex", "ch", "pt", "pc", "cm", "mm", "in", "q", "vw", "vh", "vmin", "vmax",
];

/// The CSS Level 2 extended color keywords.
pub const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "red", "rosybrown",
    "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke", "yellow",
    "yellowgreen",
];

/// Color keywords that are not named colors.
pub const SPECIAL_COLORS: &[&str] = &["inherit", "transparent", "currentcolor"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_css_is_case_insensitive() {
        assert_eq!(BorderStyle::from_css("SOLID"), Some(BorderStyle::Solid));
        assert_eq!(RepeatStyle::from_css("No-Repeat"), Some(RepeatStyle::NoRepeat));
        assert_eq!(BorderStyle::from_css("wavy"), None);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for style in BorderStyle::ALL {
            assert_eq!(BorderStyle::from_css(style.as_str()), Some(*style));
        }
    }

    #[test]
    fn test_alternation_is_longest_first() {
        let alt = RepeatStyle::alternation();
        let repeat_x = alt.find("repeat-x").unwrap();
        let bare_repeat = alt.find("|repeat|").unwrap();
        assert!(repeat_x < bare_repeat);
    }

    #[test]
    fn test_named_colors_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for name in NAMED_COLORS {
            assert_eq!(*name, name.to_ascii_lowercase());
            assert!(seen.insert(*name), "duplicate color {name}");
        }
        assert_eq!(NAMED_COLORS.len(), 147);
    }
}
