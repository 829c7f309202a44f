//! `background` shorthand provider.
//!
//! The shorthand is split into eight longhand slots by running one
//! recognizer per slot over the value:
//!
//! ```text
//! background: <image> <position> [/ <size>] <repeat> <attachment> <origin> <clip> <color>
//! ```
//!
//! Image and color are matched against the value itself (color with the
//! image cut out). The keyword and length slots are matched against a copy
//! with every function call blanked out, so nothing inside `url()` or
//! `rgb()` can be mistaken for a position or a keyword. A slot nothing
//! matches is `initial`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::config::DuplicatePolicy;
use crate::declaration::{Declaration, DeclarationList, INITIAL};
use crate::error::Result;
use crate::keywords::{
    Attachment, BoxKeyword, LENGTH_UNITS, NAMED_COLORS, PositionKeyword, RepeatStyle,
    SPECIAL_COLORS, SizeKeyword, alternation,
};

use super::{ShorthandProvider, ensure_property, shared_priority, with_priority};

const PROPERTY: &str = "background";

/// Initial values written out when a later slot needs an earlier one present.
const INITIAL_POSITION: &str = "0% 0%";
const INITIAL_ORIGIN: &str = "padding-box";
const INITIAL_CLIP: &str = "border-box";

/// A function call with at most one level of nested parentheses.
const FUNCTION: &str = r"[a-zA-Z-]+\((?:[^()]|\([^()]*\))*\)";

fn length_percentage() -> String {
    format!(
        r"[-+]?(?:\d+\.?\d*|\.\d+)(?:%|{})?",
        alternation(LENGTH_UNITS.iter().copied())
    )
}

/// Compile a whole-token recognizer: group 1 is the token.
fn token_regex(alternatives: &str) -> Regex {
    Regex::new(&format!(r"(?i)(?:^|\s)({alternatives})")).unwrap()
}

static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(FUNCTION).unwrap());

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    token_regex(r"url\((?:[^()]|\([^()]*\))*\)|(?:repeating-)?(?:linear|radial|conic)-gradient\((?:[^()]|\([^()]*\))*\)|none")
});

static POSITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    token_regex(&format!(
        "{}|{}",
        PositionKeyword::alternation(),
        length_percentage()
    ))
});

static SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    token_regex(&format!("{}|{}", SizeKeyword::alternation(), length_percentage()))
});

static REPEAT_RE: LazyLock<Regex> = LazyLock::new(|| token_regex(&RepeatStyle::alternation()));

static ATTACHMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| token_regex(&Attachment::alternation()));

static BOX_RE: LazyLock<Regex> = LazyLock::new(|| token_regex(&BoxKeyword::alternation()));

static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    let names = alternation(NAMED_COLORS.iter().chain(SPECIAL_COLORS).copied());
    token_regex(&format!(
        r"#[0-9a-f]{{6}}|#[0-9a-f]{{3}}|(?:rgba?|hsla?)\([^()]*\)|{names}"
    ))
});

/// Whole-token matches of `re` in `text`, in order.
///
/// A match only counts when it ends at whitespace, a `/`, or the end of the
/// text; `repeat` inside `repeat-xy` does not.
fn tokens_matching<'t>(re: &Regex, text: &'t str) -> Vec<&'t str> {
    re.captures_iter(text)
        .filter_map(|cap| {
            let m = cap.get(1)?;
            let ends_token = text[m.end()..]
                .chars()
                .next()
                .is_none_or(|c| c.is_whitespace() || c == '/');
            ends_token.then(|| m.as_str())
        })
        .collect()
}

fn first_token<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    tokens_matching(re, text).into_iter().next()
}

fn join_tokens(tokens: &[&str], limit: usize) -> Option<String> {
    if tokens.is_empty() {
        None
    } else {
        Some(tokens[..tokens.len().min(limit)].join(" "))
    }
}

/// The eight background longhand slots, in shorthand order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Image,
    Position,
    Size,
    Repeat,
    Attachment,
    Origin,
    Clip,
    Color,
}

impl Slot {
    const ALL: [Slot; 8] = [
        Slot::Image,
        Slot::Position,
        Slot::Size,
        Slot::Repeat,
        Slot::Attachment,
        Slot::Origin,
        Slot::Clip,
        Slot::Color,
    ];

    fn longhand(self) -> &'static str {
        match self {
            Slot::Image => "background-image",
            Slot::Position => "background-position",
            Slot::Size => "background-size",
            Slot::Repeat => "background-repeat",
            Slot::Attachment => "background-attachment",
            Slot::Origin => "background-origin",
            Slot::Clip => "background-clip",
            Slot::Color => "background-color",
        }
    }
}

/// Recognized slot values; `None` slots are `initial`.
#[derive(Debug, Default)]
struct Slots {
    image: Option<String>,
    position: Option<String>,
    size: Option<String>,
    repeat: Option<String>,
    attachment: Option<String>,
    origin: Option<String>,
    clip: Option<String>,
    color: Option<String>,
}

impl Slots {
    fn recognize(value: &str) -> Self {
        let image = first_token(&IMAGE_RE, value);

        let without_image: Cow<'_, str> = match image {
            Some(image) => Cow::Owned(value.replacen(image, " ", 1)),
            None => Cow::Borrowed(value),
        };
        let color = first_token(&COLOR_RE, &without_image).map(str::to_string);

        let masked = FUNCTION_RE.replace_all(value, " ");
        let (before_slash, after_slash) = match masked.split_once('/') {
            Some((before, after)) => (before, Some(after)),
            None => (masked.as_ref(), None),
        };

        let boxes = tokens_matching(&BOX_RE, &masked);

        Self {
            image: image.map(str::to_string),
            position: join_tokens(&tokens_matching(&POSITION_RE, before_slash), 4),
            size: after_slash.and_then(|after| join_tokens(&tokens_matching(&SIZE_RE, after), 2)),
            repeat: join_tokens(&tokens_matching(&REPEAT_RE, &masked), 2),
            attachment: first_token(&ATTACHMENT_RE, &masked).map(str::to_string),
            // One box value sets both origin and clip
            origin: boxes.first().map(|b| b.to_string()),
            clip: boxes.get(1).or(boxes.first()).map(|b| b.to_string()),
            color,
        }
    }

    fn get(&self, slot: Slot) -> Option<&str> {
        let value = match slot {
            Slot::Image => &self.image,
            Slot::Position => &self.position,
            Slot::Size => &self.size,
            Slot::Repeat => &self.repeat,
            Slot::Attachment => &self.attachment,
            Slot::Origin => &self.origin,
            Slot::Clip => &self.clip,
            Slot::Color => &self.color,
        };
        value.as_deref()
    }
}

/// Provider for the `background` shorthand.
#[derive(Debug, Clone, Default)]
pub struct BackgroundProvider {
    duplicates: DuplicatePolicy,
}

impl BackgroundProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}

impl ShorthandProvider for BackgroundProvider {
    fn property(&self) -> &str {
        PROPERTY
    }

    fn shorthand_to_longhand(&self, decl: &Declaration) -> Result<DeclarationList> {
        ensure_property(PROPERTY, decl)?;

        let slots = Slots::recognize(&decl.value);
        tracing::debug!(?slots, "recognized background slots");

        let longhands = Slot::ALL
            .iter()
            .map(|slot| Declaration::new(slot.longhand(), slots.get(*slot).unwrap_or(INITIAL)))
            .collect();
        Ok(with_priority(decl, longhands))
    }

    fn longhand_to_shorthand(&self, decls: &DeclarationList) -> Result<Declaration> {
        let found = Slot::ALL
            .iter()
            .map(|slot| decls.require(PROPERTY, slot.longhand(), self.duplicates))
            .collect::<Result<Vec<&Declaration>>>()?;
        let important = shared_priority(PROPERTY, found.iter().copied())?;

        // `initial` reads as unset
        let slot_value = |slot: Slot| {
            let decl = found[slot as usize];
            (!decl.is_initial()).then(|| decl.trimmed_value())
        };
        let image = slot_value(Slot::Image);
        let position = slot_value(Slot::Position);
        let size = slot_value(Slot::Size);
        let repeat = slot_value(Slot::Repeat);
        let attachment = slot_value(Slot::Attachment);
        let origin = slot_value(Slot::Origin);
        let clip = slot_value(Slot::Clip);
        let color = slot_value(Slot::Color);

        let mut parts: Vec<&str> = Vec::with_capacity(10);
        parts.extend(image);

        match (position, size) {
            (position, Some(size)) => {
                // A size is only valid after a position
                parts.push(position.unwrap_or(INITIAL_POSITION));
                parts.push("/");
                parts.push(size);
            }
            (Some(position), None) => parts.push(position),
            (None, None) => {}
        }

        parts.extend(repeat);
        parts.extend(attachment);

        match (origin, clip) {
            (None, None) => {}
            (Some(origin), Some(clip)) if origin.eq_ignore_ascii_case(clip) => parts.push(origin),
            (origin, clip) => {
                parts.push(origin.unwrap_or(INITIAL_ORIGIN));
                parts.push(clip.unwrap_or(INITIAL_CLIP));
            }
        }

        parts.extend(color);

        let value = if parts.is_empty() {
            INITIAL.to_string()
        } else {
            parts.join(" ")
        };
        Ok(Declaration::new(PROPERTY, value).with_important(important))
    }
}
