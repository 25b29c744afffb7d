//! Component directives.
//!
//! In extended mode a run of three elements defines a custom HTML element:
//!
//! ```text
//! Component Name         video-player
//! Component Arguments    src=intro.mp4, autoplay=true
//! Component Description  Opening titles
//! ```
//!
//! renders as
//!
//! ```text
//! <video-player src=intro.mp4 autoplay=true>Opening titles</video-player>
//! ```
//!
//! Every component name is also recorded in a [`ComponentRegistry`] so the
//! document head can import its definition.

use std::collections::HashSet;

use crate::document::Element;
use crate::rules::ComponentRules;

/// Component names in order of first appearance, without duplicates.
#[derive(Debug, Default)]
pub(crate) struct ComponentRegistry {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl ComponentRegistry {
    /// Record a name. Returns `false` if it was already present.
    pub(crate) fn insert(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_owned());
        self.names.push(name.to_owned());
        true
    }

    pub(crate) fn into_names(self) -> Vec<String> {
        self.names
    }
}

/// A component definition being collected.
#[derive(Debug, Default)]
struct PendingComponent {
    name: String,
    /// Attributes in first-seen order; a repeated key replaces the value in place.
    args: Vec<(String, String)>,
}

impl PendingComponent {
    fn set_arg(&mut self, key: &str, value: &str) {
        match self.args.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => value.clone_into(existing),
            None => self.args.push((key.to_owned(), value.to_owned())),
        }
    }

    fn render(&self, description: &str) -> String {
        let mut html = format!("<{}", self.name);
        for (key, value) in &self.args {
            // Values are written unquoted to keep existing output stable.
            html.push_str(&format!(" {key}={value}"));
        }
        html.push_str(&format!(">{description}</{}>\n", self.name));
        html
    }
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    InComponent(PendingComponent),
    ReadyToEmit(PendingComponent, String),
}

/// What the renderer should do with an element after the processor saw it.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ComponentStep {
    /// Not part of a component; render it normally.
    PassThrough,
    /// Swallowed by an open definition.
    Consumed,
    /// Definition complete; write this markup instead of a paragraph.
    Emit(String),
}

/// State machine collecting component definitions from the element stream.
#[derive(Debug)]
pub(crate) struct ComponentProcessor<'r> {
    rules: &'r ComponentRules,
    state: State,
    registry: ComponentRegistry,
}

impl<'r> ComponentProcessor<'r> {
    pub(crate) fn new(rules: &'r ComponentRules) -> Self {
        Self {
            rules,
            state: State::Idle,
            registry: ComponentRegistry::default(),
        }
    }

    /// Feed one element through the state machine.
    ///
    /// Diagnostics for malformed definitions are logged and pushed to
    /// `warnings`; they never stop rendering.
    pub(crate) fn process(&mut self, element: &Element, warnings: &mut Vec<String>) -> ComponentStep {
        let kind = &element.element_type;
        let state = std::mem::take(&mut self.state);

        self.state = match state {
            State::Idle if *kind == self.rules.name => {
                self.registry.insert(&element.text);
                tracing::debug!(component = %element.text, "Component definition opened");
                State::InComponent(PendingComponent {
                    name: element.text.clone(),
                    args: Vec::new(),
                })
            }
            State::Idle => return ComponentStep::PassThrough,
            State::InComponent(pending) if *kind == self.rules.name => {
                let message = format!(
                    "Nested component definition '{}' inside '{}' ignored",
                    element.text, pending.name
                );
                tracing::error!(
                    component = %pending.name,
                    nested = %element.text,
                    "Nested component definition ignored"
                );
                warnings.push(message);
                State::InComponent(pending)
            }
            State::InComponent(mut pending) if *kind == self.rules.arguments => {
                self.parse_arguments(&mut pending, &element.text, warnings);
                State::InComponent(pending)
            }
            State::InComponent(pending) if *kind == self.rules.description => {
                State::ReadyToEmit(pending, element.text.clone())
            }
            other => other,
        };

        match std::mem::take(&mut self.state) {
            State::ReadyToEmit(pending, description) => {
                ComponentStep::Emit(pending.render(&description))
            }
            state => {
                self.state = state;
                ComponentStep::Consumed
            }
        }
    }

    fn parse_arguments(
        &self,
        pending: &mut PendingComponent,
        text: &str,
        warnings: &mut Vec<String>,
    ) {
        for piece in self.rules.argument_separator.split(text) {
            if piece.trim().is_empty() {
                continue;
            }
            match piece.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => {
                    pending.set_arg(key.trim(), value.trim());
                }
                _ => {
                    tracing::warn!(
                        component = %pending.name,
                        argument = piece.trim(),
                        "Component argument has no key=value form, ignored"
                    );
                    warnings.push(format!(
                        "Component argument '{}' of '{}' has no '=', ignored",
                        piece.trim(),
                        pending.name
                    ));
                }
            }
        }
    }

    /// Name of a definition still open, if any.
    pub(crate) fn open_component(&self) -> Option<&str> {
        match &self.state {
            State::InComponent(pending) | State::ReadyToEmit(pending, _) => Some(&pending.name),
            State::Idle => None,
        }
    }

    /// Component names in first-appearance order.
    pub(crate) fn into_registry(self) -> Vec<String> {
        self.registry.into_names()
    }
}
