//! Screenplay to HTML renderer.
//!
//! Turns a parsed screenplay ([`ScriptDocument`]) into a standalone HTML page
//! with conventional screenplay structure: title page, scene headings with
//! scene numbers, dialogue, dual dialogue in side-by-side columns and inline
//! emphasis.
//!
//! # Modes
//!
//! - [`Mode::Base`]: plain screenplay rendering
//! - [`Mode::Extended`]: additionally turns component directives (a
//!   name/arguments/description run of elements) into custom HTML elements
//!   and imports their definitions in the document head
//!
//! Patterns and class names live in a [`RuleSet`] chosen when the
//! [`Renderer`] is built; rendering itself never fails.
//!
//! # Example
//!
//! ```
//! use fountain_renderer::{Element, ElementType, RendererConfig, ScriptDocument, render};
//!
//! let document = ScriptDocument::new(vec![
//!     Element::new(ElementType::SceneHeading, "EXT. BRICK'S PATIO - DAY"),
//!     Element::new(ElementType::Action, "A **gorgeous** day."),
//! ])
//! .with_title_field("Title", ["Brick & Steel"]);
//!
//! let html = render(&document, RendererConfig::default().with_css_file("script.css"))?;
//! assert!(html.contains("<strong>gorgeous</strong>"));
//! # Ok::<(), fountain_renderer::RenderError>(())
//! ```

mod component;
mod document;
mod dual;
mod inline;
mod renderer;
mod rules;
pub mod title;

pub use document::{Element, ElementType, ScriptDocument, TitlePage};
pub use inline::{EmphasisRule, InlineFormatter};
pub use renderer::{Mode, RenderError, RenderResult, Renderer, RendererConfig, render};
pub use rules::{ClassNames, ComponentRules, RuleSet};
