//! Rule sets: the patterns and class names a renderer is built with.
//!
//! A [`RuleSet`] is immutable once constructed and owned by the
//! [`Renderer`](crate::Renderer). Two stock sets exist:
//!
//! - [`RuleSet::base`]: plain screenplay rendering, no component support
//! - [`RuleSet::extended`]: adds the component directive tags
//!
//! Extended rendering requires [`ComponentRules`]; the renderer checks for
//! them when it is constructed, not while rendering.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::ElementType;
use crate::inline::InlineFormatter;
use crate::renderer::Mode;

/// Dual-dialogue caret at the end of a character cue (`BRICK ^`).
static DUAL_ANGLE_MARK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\^\s*$").unwrap());

/// Separator between `key=value` pairs in a component arguments element.
static ARGUMENT_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(",").unwrap());

/// CSS classes and ids written into the output.
#[derive(Clone, Debug)]
pub struct ClassNames {
    pub title_div: String,
    pub title: String,
    pub credit: String,
    pub authors: String,
    pub source: String,
    pub draft_date: String,
    pub contact: String,
    pub scene_number_left: String,
    pub scene_number_right: String,
    pub dual_dialogue: String,
    pub dual_dialogue_left: String,
    pub dual_dialogue_right: String,
    /// Extra class token appended to centered paragraphs.
    pub center: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            title_div: "script-title".to_owned(),
            title: "title".to_owned(),
            credit: "credit".to_owned(),
            authors: "authors".to_owned(),
            source: "source".to_owned(),
            draft_date: "draft-date".to_owned(),
            contact: "contact".to_owned(),
            scene_number_left: "scene-number-left".to_owned(),
            scene_number_right: "scene-number-right".to_owned(),
            dual_dialogue: "dual-dialogue".to_owned(),
            dual_dialogue_left: "dual-dialogue-left".to_owned(),
            dual_dialogue_right: "dual-dialogue-right".to_owned(),
            center: "center".to_owned(),
        }
    }
}

/// Element tags and argument syntax for component directives.
#[derive(Clone, Debug)]
pub struct ComponentRules {
    /// Element type that opens a component definition.
    pub name: ElementType,
    /// Element type carrying `key=value` arguments.
    pub arguments: ElementType,
    /// Element type carrying the description; completes the definition.
    pub description: ElementType,
    /// Pattern separating argument pairs.
    pub argument_separator: Regex,
}

impl Default for ComponentRules {
    fn default() -> Self {
        Self {
            name: ElementType::ComponentName,
            arguments: ElementType::ComponentArguments,
            description: ElementType::ComponentDescription,
            argument_separator: ARGUMENT_SEPARATOR_RE.clone(),
        }
    }
}

/// Complete set of rules for one rendering mode.
#[derive(Clone, Debug)]
pub struct RuleSet {
    /// Emphasis substitutions.
    pub inline: InlineFormatter,
    /// Pattern stripped from dual-dialogue character cues.
    pub dual_angle_mark: Regex,
    /// Output class names.
    pub classes: ClassNames,
    /// Component directive tags. `None` disables extended rendering.
    pub components: Option<ComponentRules>,
}

impl RuleSet {
    /// Rules without component support.
    #[must_use]
    pub fn base() -> Self {
        Self {
            inline: InlineFormatter::standard(),
            dual_angle_mark: DUAL_ANGLE_MARK_RE.clone(),
            classes: ClassNames::default(),
            components: None,
        }
    }

    /// Base rules plus component directive tags.
    #[must_use]
    pub fn extended() -> Self {
        Self {
            components: Some(ComponentRules::default()),
            ..Self::base()
        }
    }

    /// Stock rules for a rendering mode.
    #[must_use]
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Base => Self::base(),
            Mode::Extended => Self::extended(),
        }
    }

    /// Strip the dual-dialogue caret from a character cue.
    pub(crate) fn strip_dual_mark(&self, text: &str) -> String {
        self.dual_angle_mark.replace_all(text, "").into_owned()
    }
}
