//! Parsed screenplay data model.
//!
//! The renderer never builds these values itself: a parser produces a
//! [`ScriptDocument`] and hands it over, either directly or as JSON when the
//! `serde` feature is enabled.

use std::collections::BTreeMap;
use std::fmt;

/// Title-page metadata: field key (`Title`, `Credit`, ...) to its lines.
pub type TitlePage = BTreeMap<String, Vec<String>>;

/// A parsed screenplay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScriptDocument {
    /// Title-page fields. Empty when the script has no title page.
    pub title_page: TitlePage,
    /// Body elements in source order.
    pub elements: Vec<Element>,
}

impl ScriptDocument {
    /// Create a document from body elements with no title page.
    #[must_use]
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            title_page: TitlePage::new(),
            elements,
        }
    }

    /// Add a title-page field.
    #[must_use]
    pub fn with_title_field<I, S>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.title_page
            .insert(key.into(), values.into_iter().map(Into::into).collect());
        self
    }
}

/// One structural unit of a screenplay.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    /// Structural role of the element.
    pub element_type: ElementType,
    /// Raw text, possibly containing emphasis markup.
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: String,
    /// Whether the element is centered (`> text <`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_centered: bool,
    /// Whether a character element opens a dual-dialogue column.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_dual_dialogue: bool,
    /// Scene number of a scene heading (`#12A#`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub scene_number: Option<String>,
}

impl Element {
    /// Create an element of the given type.
    #[must_use]
    pub fn new(element_type: ElementType, text: impl Into<String>) -> Self {
        Self {
            element_type,
            text: text.into(),
            is_centered: false,
            is_dual_dialogue: false,
            scene_number: None,
        }
    }

    /// Create a page break.
    #[must_use]
    pub fn page_break() -> Self {
        Self::new(ElementType::PageBreak, "")
    }

    /// Mark the element as centered.
    #[must_use]
    pub fn centered(mut self) -> Self {
        self.is_centered = true;
        self
    }

    /// Mark the element as part of dual dialogue.
    #[must_use]
    pub fn dual(mut self) -> Self {
        self.is_dual_dialogue = true;
        self
    }

    /// Attach a scene number.
    #[must_use]
    pub fn with_scene_number(mut self, number: impl Into<String>) -> Self {
        self.scene_number = Some(number.into());
        self
    }

    /// Whether this is a character cue flagged for dual dialogue.
    pub(crate) fn is_dual_character(&self) -> bool {
        self.is_dual_dialogue && self.element_type == ElementType::Character
    }
}

/// Structural role of an [`Element`].
///
/// Serialized as its display name (`"Scene Heading"`). Names the renderer
/// does not know are kept verbatim in [`ElementType::Other`] and rendered as
/// ordinary paragraphs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum ElementType {
    SceneHeading,
    Action,
    Character,
    Dialogue,
    Parenthetical,
    Transition,
    Lyrics,
    PageBreak,
    SectionHeading,
    Synopsis,
    Comment,
    Boneyard,
    ComponentName,
    ComponentArguments,
    ComponentDescription,
    /// A type declared by the parser but unknown to the renderer.
    Other(String),
}

impl ElementType {
    /// Display name, as produced by the parser.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::SceneHeading => "Scene Heading",
            Self::Action => "Action",
            Self::Character => "Character",
            Self::Dialogue => "Dialogue",
            Self::Parenthetical => "Parenthetical",
            Self::Transition => "Transition",
            Self::Lyrics => "Lyrics",
            Self::PageBreak => "Page Break",
            Self::SectionHeading => "Section Heading",
            Self::Synopsis => "Synopsis",
            Self::Comment => "Comment",
            Self::Boneyard => "Boneyard",
            Self::ComponentName => "Component Name",
            Self::ComponentArguments => "Component Arguments",
            Self::ComponentDescription => "Component Description",
            Self::Other(name) => name,
        }
    }

    /// Look up a type by display name. Unknown names become [`ElementType::Other`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Scene Heading" => Self::SceneHeading,
            "Action" => Self::Action,
            "Character" => Self::Character,
            "Dialogue" => Self::Dialogue,
            "Parenthetical" => Self::Parenthetical,
            "Transition" => Self::Transition,
            "Lyrics" => Self::Lyrics,
            "Page Break" => Self::PageBreak,
            "Section Heading" => Self::SectionHeading,
            "Synopsis" => Self::Synopsis,
            "Comment" => Self::Comment,
            "Boneyard" => Self::Boneyard,
            "Component Name" => Self::ComponentName,
            "Component Arguments" => Self::ComponentArguments,
            "Component Description" => Self::ComponentDescription,
            other => Self::Other(other.to_owned()),
        }
    }

    /// CSS class for paragraphs of this type: lower-cased, spaces as dashes.
    ///
    /// # Example
    ///
    /// ```
    /// use fountain_renderer::ElementType;
    ///
    /// assert_eq!(ElementType::SceneHeading.html_class(), "scene-heading");
    /// assert_eq!(ElementType::from_name("Stage Direction").html_class(), "stage-direction");
    /// ```
    #[must_use]
    pub fn html_class(&self) -> String {
        self.as_str().to_lowercase().replace(' ', "-")
    }

    /// Types that produce no output and never touch renderer state.
    pub(crate) fn is_ignored(&self) -> bool {
        matches!(
            self,
            Self::SectionHeading | Self::Synopsis | Self::Comment | Self::Boneyard
        )
    }

    /// Types that keep an open dual-dialogue pairing alive.
    pub(crate) fn continues_dialogue(&self) -> bool {
        matches!(self, Self::Character | Self::Dialogue | Self::Parenthetical)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ElementType {
    fn from(name: String) -> Self {
        match Self::from_name(&name) {
            Self::Other(_) => Self::Other(name),
            known => known,
        }
    }
}

impl From<ElementType> for String {
    fn from(element_type: ElementType) -> Self {
        match element_type {
            ElementType::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup_is_symmetric() {
        for element_type in [
            ElementType::SceneHeading,
            ElementType::PageBreak,
            ElementType::ComponentDescription,
        ] {
            assert_eq!(ElementType::from_name(element_type.as_str()), element_type);
        }
    }

    #[test]
    fn test_unknown_name_is_kept() {
        let element_type = ElementType::from("Shot".to_owned());
        assert_eq!(element_type, ElementType::Other("Shot".to_owned()));
        assert_eq!(String::from(element_type), "Shot");
    }

    #[test]
    fn test_html_class() {
        assert_eq!(ElementType::Action.html_class(), "action");
        assert_eq!(
            ElementType::ComponentArguments.html_class(),
            "component-arguments"
        );
    }

    #[test]
    fn test_ignored_types() {
        assert!(ElementType::Boneyard.is_ignored());
        assert!(ElementType::Synopsis.is_ignored());
        assert!(!ElementType::PageBreak.is_ignored());
        assert!(!ElementType::Action.is_ignored());
    }

    #[test]
    fn test_dual_character_requires_character_type() {
        assert!(Element::new(ElementType::Character, "BRICK ^").dual().is_dual_character());
        assert!(!Element::new(ElementType::Dialogue, "Hi.").dual().is_dual_character());
        assert!(!Element::new(ElementType::Character, "BRICK").is_dual_character());
    }

    #[test]
    fn test_with_title_field() {
        let doc = ScriptDocument::default().with_title_field("Title", ["Big Fish"]);
        assert_eq!(doc.title_page["Title"], vec!["Big Fish".to_owned()]);
        assert!(doc.elements.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_element() {
        let json = r#"{"element_type": "Scene Heading", "text": "INT. ROOM - DAY", "scene_number": "1"}"#;
        let element: Element = serde_json::from_str(json).unwrap();
        assert_eq!(element.element_type, ElementType::SceneHeading);
        assert_eq!(element.scene_number.as_deref(), Some("1"));
        assert!(!element.is_centered);
    }
}
