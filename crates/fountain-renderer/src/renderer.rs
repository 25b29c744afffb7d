//! Screenplay to HTML renderer.

use crate::component::{ComponentProcessor, ComponentStep};
use crate::document::{Element, ElementType, ScriptDocument};
use crate::dual::DualDialogueTracker;
use crate::rules::RuleSet;
use crate::title::write_title_block;

/// Rendering mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Plain screenplay; component elements render as ordinary paragraphs.
    Base,
    /// Component directives become custom elements with head imports.
    #[default]
    Extended,
}

/// Renderer configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RendererConfig {
    /// Stylesheet linked from the document head. `None` or empty links nothing.
    pub css_file: Option<String>,
    /// Directory holding component definitions (`{dir}/{name}.html`).
    pub component_parent: String,
    /// Rendering mode.
    pub mode: Mode,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            css_file: None,
            component_parent: "components".to_owned(),
            mode: Mode::default(),
        }
    }
}

impl RendererConfig {
    /// Set the stylesheet path.
    #[must_use]
    pub fn with_css_file(mut self, css_file: impl Into<String>) -> Self {
        self.css_file = Some(css_file.into());
        self
    }

    /// Set the component directory.
    #[must_use]
    pub fn with_component_parent(mut self, dir: impl Into<String>) -> Self {
        self.component_parent = dir.into();
        self
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

/// Renderer construction error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Extended mode was requested with rules that define no component tags.
    #[error("rule set has no component definitions; extended mode unavailable (version mismatch?)")]
    MissingComponentRules,
}

/// Result of rendering a document.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Complete HTML document.
    pub html: String,
    /// Component names imported in the head, in first-appearance order.
    pub components: Vec<String>,
    /// Non-fatal diagnostics (malformed component definitions).
    pub warnings: Vec<String>,
}

/// Screenplay renderer.
///
/// Holds only configuration and compiled rules; all per-document state is
/// created inside [`render`](Self::render), so one renderer can serve any
/// number of documents, from any number of threads.
///
/// # Example
///
/// ```
/// use fountain_renderer::{Element, ElementType, Mode, Renderer, RendererConfig, ScriptDocument};
///
/// let document = ScriptDocument::new(vec![
///     Element::new(ElementType::SceneHeading, "INT. ROOM - DAY").with_scene_number("12A"),
///     Element::new(ElementType::Action, "He *enters*."),
/// ]);
/// let renderer = Renderer::new(RendererConfig::default().with_mode(Mode::Base));
/// let result = renderer.render(&document);
///
/// assert!(result.html.contains(r#"<p class="action">He <em>enters</em>.</p>"#));
/// ```
#[derive(Debug)]
pub struct Renderer {
    config: RendererConfig,
    rules: RuleSet,
    /// `config.component_parent` with exactly one trailing slash.
    component_prefix: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RendererConfig::default())
    }
}

impl Renderer {
    /// Create a renderer with the stock rules for `config.mode`.
    #[must_use]
    pub fn new(config: RendererConfig) -> Self {
        let rules = RuleSet::for_mode(config.mode);
        Self::build(config, rules)
    }

    /// Create a renderer with custom rules.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingComponentRules`] if `config.mode` is
    /// [`Mode::Extended`] and `rules` define no component tags.
    pub fn with_rules(config: RendererConfig, rules: RuleSet) -> Result<Self, RenderError> {
        if config.mode == Mode::Extended && rules.components.is_none() {
            tracing::error!("Extended mode requested but rule set defines no component tags");
            return Err(RenderError::MissingComponentRules);
        }
        Ok(Self::build(config, rules))
    }

    fn build(config: RendererConfig, rules: RuleSet) -> Self {
        let component_prefix = format!("{}/", config.component_parent.trim_end_matches('/'));
        Self {
            config,
            rules,
            component_prefix,
        }
    }

    /// Render a document to a complete HTML page.
    pub fn render(&self, document: &ScriptDocument) -> RenderResult {
        let mut body = BodyWriter::new(&self.rules, self.config.mode);
        let body_html = body.write(document);
        let BodyWriter {
            components,
            warnings,
            ..
        } = body;
        let components = components.map(ComponentProcessor::into_registry).unwrap_or_default();

        let html = self.shell(&body_html, &components);
        RenderResult {
            html,
            components,
            warnings,
        }
    }

    /// Wrap body markup in the document shell.
    fn shell(&self, body: &str, components: &[String]) -> String {
        let mut html = String::with_capacity(body.len() + 256);
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        if let Some(css) = self.config.css_file.as_deref().filter(|css| !css.is_empty()) {
            html.push_str(&format!(
                "<link rel=\"stylesheet\" type=\"text/css\" href=\"{css}\">\n"
            ));
        }
        for name in components {
            html.push_str(&format!(
                "<link rel=\"import\" href=\"{}{name}.html\">\n",
                self.component_prefix
            ));
        }
        html.push_str("</head>\n<body>\n<section>\n");
        html.push_str(body);
        html.push_str("</section>\n</body>\n</html>\n");
        html
    }
}

/// Per-render state for the body pass.
struct BodyWriter<'r> {
    rules: &'r RuleSet,
    out: String,
    dual: DualDialogueTracker,
    /// Present only in extended mode.
    components: Option<ComponentProcessor<'r>>,
    warnings: Vec<String>,
}

impl<'r> BodyWriter<'r> {
    fn new(rules: &'r RuleSet, mode: Mode) -> Self {
        let components = match mode {
            Mode::Base => None,
            Mode::Extended => rules.components.as_ref().map(ComponentProcessor::new),
        };
        Self {
            rules,
            out: String::with_capacity(4096),
            dual: DualDialogueTracker::default(),
            components,
            warnings: Vec::new(),
        }
    }

    fn write(&mut self, document: &ScriptDocument) -> String {
        write_title_block(&document.title_page, &self.rules.classes, &mut self.out);

        for element in &document.elements {
            self.element(element);
        }

        if let Some(name) = self.components.as_ref().and_then(ComponentProcessor::open_component) {
            tracing::warn!(component = %name, "Component definition not closed by a description");
            self.warnings
                .push(format!("Component definition '{name}' has no description, dropped"));
        }

        std::mem::take(&mut self.out)
    }

    fn element(&mut self, element: &Element) {
        if element.element_type.is_ignored() {
            return;
        }
        if element.element_type == ElementType::PageBreak {
            self.out.push_str("</section>\n<section>\n");
            return;
        }

        self.dual.observe(element, &self.rules.classes, &mut self.out);

        if let Some(components) = &mut self.components {
            match components.process(element, &mut self.warnings) {
                ComponentStep::PassThrough => {}
                ComponentStep::Consumed => return,
                ComponentStep::Emit(markup) => {
                    self.out.push_str(&markup);
                    return;
                }
            }
        }

        let text = self.element_text(element);
        if text.is_empty() {
            return;
        }

        let center = if element.is_centered {
            format!(" {}", self.rules.classes.center)
        } else {
            String::new()
        };
        self.out.push_str(&format!(
            "<p class=\"{}{center}\">{text}</p>\n",
            element.element_type.html_class()
        ));
    }

    /// Element text with scene numbers, dual mark removal and emphasis applied.
    fn element_text(&self, element: &Element) -> String {
        let classes = &self.rules.classes;
        let raw = match (&element.element_type, &element.scene_number) {
            (ElementType::SceneHeading, Some(number)) => format!(
                "<span class=\"{}\">{number}</span>{}<span class=\"{}\">{number}</span>",
                classes.scene_number_left, element.text, classes.scene_number_right
            ),
            _ if element.is_dual_character() => self.rules.strip_dual_mark(&element.text),
            _ => element.text.clone(),
        };
        self.rules.inline.format(&raw)
    }
}

/// Render a document in one call.
///
/// # Errors
///
/// Currently infallible with the stock rule sets; the `Result` mirrors
/// [`Renderer::with_rules`] so callers can swap in custom rules.
pub fn render(document: &ScriptDocument, config: RendererConfig) -> Result<String, RenderError> {
    let rules = RuleSet::for_mode(config.mode);
    let renderer = Renderer::with_rules(config, rules)?;
    Ok(renderer.render(document).html)
}
