//! Inline emphasis formatting.
//!
//! Converts Fountain emphasis markers to HTML tags:
//!
//! | Markup            | Output                                  |
//! |-------------------|-----------------------------------------|
//! | `***text***`      | `<strong><em>text</em></strong>`        |
//! | `**text**`        | `<strong>text</strong>`                 |
//! | `*text*`          | `<em>text</em>`                         |
//! | `_text_`          | `<u>text</u>`                           |
//! | `_**text**_`      | `<strong><u>text</u></strong>`          |
//!
//! Combined underline forms accept the underscore on either side of the
//! asterisks (`_*text*_` or `*_text_*`). A backslash before `*` or `_`
//! escapes the marker: it never opens or closes emphasis and the backslash
//! itself is removed by the last substitution.
//!
//! Emphasised text is never empty and never starts or ends with whitespace
//! or a marker character, so `5 * 4` and `****` stay as they are.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// First and last character of an emphasis body: an escaped character, or
/// anything but whitespace, a marker or a lone backslash.
const EDGE: &str = r"\\[\s\S]|[^*_\s\\]";

/// Inner character of an emphasis body. A backslash is consumed together
/// with the character after it, so an escaped marker cannot close.
const INNER: &str = r"\\[\s\S]|[^\\]";

/// Leading alternative that claims escaped markers before an opener can.
const ESCAPED: &str = r"\\[*_]|";

static BOLD_ITALIC_UNDERLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| emphasis_regex(r"(?:_\*{3}|\*{3}_)", r"(?:\*{3}_|_\*{3})"));
static BOLD_ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| emphasis_regex(r"\*{3}", r"\*{3}"));
static BOLD_UNDERLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| emphasis_regex(r"(?:_\*{2}|\*{2}_)", r"(?:\*{2}_|_\*{2})"));
static ITALIC_UNDERLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| emphasis_regex(r"(?:_\*|\*_)", r"(?:\*_|_\*)"));
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| emphasis_regex(r"\*{2}", r"\*{2}"));
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| emphasis_regex(r"\*", r"\*"));
static UNDERLINE_RE: LazyLock<Regex> = LazyLock::new(|| emphasis_regex("_", "_"));

/// Escape marker: the backslash in front of an emphasis character.
static ESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\([*_])").unwrap());

fn emphasis_regex(open: &str, close: &str) -> Regex {
    let content = format!("((?:{EDGE})(?:(?:{INNER})*?(?:{EDGE}))??)");
    Regex::new(&format!("{ESCAPED}{open}{content}{close}")).unwrap()
}

/// One emphasis substitution: every match of `pattern` is wrapped in
/// `open`/`close`.
#[derive(Clone, Debug)]
pub struct EmphasisRule {
    pattern: Regex,
    open: &'static str,
    close: &'static str,
}

impl EmphasisRule {
    fn new(pattern: &Regex, open: &'static str, close: &'static str) -> Self {
        Self {
            pattern: pattern.clone(),
            open,
            close,
        }
    }

    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, |caps: &Captures<'_>| match caps.get(1) {
            Some(inner) => format!("{}{}{}", self.open, inner.as_str(), self.close),
            // Escaped marker: leave it for the final unescape step.
            None => caps[0].to_owned(),
        })
    }
}

/// Ordered chain of emphasis substitutions.
///
/// The most specific combinations run first so that `***text***` becomes a
/// single `<strong><em>` pair instead of a bold run wrapped around a stray
/// asterisk.
///
/// # Example
///
/// ```
/// use fountain_renderer::InlineFormatter;
///
/// let formatter = InlineFormatter::standard();
/// assert_eq!(formatter.format("He *enters*."), "He <em>enters</em>.");
/// assert_eq!(formatter.format(r"2 \* 3"), "2 * 3");
/// ```
#[derive(Clone, Debug)]
pub struct InlineFormatter {
    rules: Vec<EmphasisRule>,
    escape: Regex,
}

impl Default for InlineFormatter {
    fn default() -> Self {
        Self::standard()
    }
}

impl InlineFormatter {
    /// The Fountain emphasis rules.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rules: vec![
                EmphasisRule::new(
                    &BOLD_ITALIC_UNDERLINE_RE,
                    "<strong><em><u>",
                    "</u></em></strong>",
                ),
                EmphasisRule::new(&BOLD_ITALIC_RE, "<strong><em>", "</em></strong>"),
                EmphasisRule::new(&BOLD_UNDERLINE_RE, "<strong><u>", "</u></strong>"),
                EmphasisRule::new(&ITALIC_UNDERLINE_RE, "<em><u>", "</u></em>"),
                EmphasisRule::new(&BOLD_RE, "<strong>", "</strong>"),
                EmphasisRule::new(&ITALIC_RE, "<em>", "</em>"),
                EmphasisRule::new(&UNDERLINE_RE, "<u>", "</u>"),
            ],
            escape: ESCAPE_RE.clone(),
        }
    }

    /// Apply every substitution in order, then strip escape markers.
    ///
    /// The emphasis chain is repeated until it no longer changes the text.
    /// Each change consumes marker characters, so the loop ends, and the
    /// result is never rewritten by another pass.
    #[must_use]
    pub fn format(&self, text: &str) -> String {
        let mut current = text.to_owned();
        loop {
            let next = self.apply_rules(&current);
            if next == current {
                break;
            }
            current = next;
        }
        self.escape.replace_all(&current, "$1").into_owned()
    }

    fn apply_rules(&self, text: &str) -> String {
        let mut current = text.to_owned();
        for rule in &self.rules {
            let replaced = rule.apply(&current).into_owned();
            current = replaced;
        }
        current
    }
}
