//! End-to-end rendering of complete documents.

use fountain_renderer::{
    Element, ElementType, Mode, RenderError, Renderer, RendererConfig, RuleSet, ScriptDocument,
    render,
};
use pretty_assertions::assert_eq;

fn brick_and_steel() -> ScriptDocument {
    ScriptDocument::new(vec![
        Element::new(ElementType::SceneHeading, "EXT. BRICK'S PATIO - DAY").with_scene_number("1"),
        Element::new(ElementType::Action, "A gorgeous day. The sun is shining."),
        Element::new(ElementType::Character, "BRICK ^").dual(),
        Element::new(ElementType::Dialogue, "Screw retirement."),
        Element::new(ElementType::Character, "STEEL ^").dual(),
        Element::new(ElementType::Parenthetical, "(beer raised)"),
        Element::new(ElementType::Dialogue, "To retirement."),
        Element::new(ElementType::Transition, "CUT TO:"),
        Element::new(ElementType::Synopsis, "Steel gets an idea."),
        Element::page_break(),
        Element::new(ElementType::SceneHeading, "INT. GARAGE - NIGHT"),
        Element::new(ElementType::Action, "_THE END_").centered(),
    ])
    .with_title_field("Title", ["BRICK & STEEL", "FULL RETIRED"])
    .with_title_field("Author", ["Stu Maschwitz"])
    .with_title_field("Draft date", ["1/20/2012"])
}

#[test]
fn test_full_script_base_mode() {
    let html = render(&brick_and_steel(), RendererConfig::default().with_mode(Mode::Base)).unwrap();

    let expected = concat!(
        "<!DOCTYPE html>\n<html>\n<head>\n</head>\n<body>\n<section>\n",
        "<div id=\"script-title\">",
        "<p class=\"title\">BRICK & STEEL<br>FULL RETIRED<br></p>",
        "<p class=\"credit\">written by</p>",
        "<p class=\"authors\">Stu Maschwitz<br></p>",
        "<p class=\"draft-date\">1/20/2012<br></p>",
        "</div>",
        "<p class=\"scene-heading\"><span class=\"scene-number-left\">1</span>",
        "EXT. BRICK'S PATIO - DAY<span class=\"scene-number-right\">1</span></p>\n",
        "<p class=\"action\">A gorgeous day. The sun is shining.</p>\n",
        "<div class=\"dual-dialogue\">\n",
        "<div class=\"dual-dialogue-left\">\n",
        "<p class=\"character\">BRICK</p>\n",
        "<p class=\"dialogue\">Screw retirement.</p>\n",
        "<div class=\"dual-dialogue-right\">\n",
        "<p class=\"character\">STEEL</p>\n",
        "<p class=\"parenthetical\">(beer raised)</p>\n",
        "<p class=\"dialogue\">To retirement.</p>\n",
        "</div>\n</div>\n",
        "<p class=\"transition\">CUT TO:</p>\n",
        "</section>\n<section>\n",
        "<p class=\"scene-heading\">INT. GARAGE - NIGHT</p>\n",
        "<p class=\"action center\"><u>THE END</u></p>\n",
        "</section>\n</body>\n</html>\n",
    );
    assert_eq!(html, expected);
}

#[test]
fn test_extended_mode_with_components() {
    let mut document = brick_and_steel();
    document.elements.splice(
        1..1,
        [
            Element::new(ElementType::ComponentName, "patio-map"),
            Element::new(ElementType::ComponentArguments, "lat=34.05, lng=-118.24, lat=34.06"),
            Element::new(ElementType::ComponentDescription, "Brick's backyard"),
        ],
    );

    let renderer = Renderer::new(
        RendererConfig::default()
            .with_css_file("ScriptCSS.css")
            .with_component_parent("components/"),
    );
    let result = renderer.render(&document);

    assert!(result.html.contains(concat!(
        "<head>\n",
        "<link rel=\"stylesheet\" type=\"text/css\" href=\"ScriptCSS.css\">\n",
        "<link rel=\"import\" href=\"components/patio-map.html\">\n",
        "</head>"
    )));
    assert!(result.html.contains(
        "<span class=\"scene-number-right\">1</span></p>\n<patio-map lat=34.06 lng=-118.24>Brick's backyard</patio-map>\n<p class=\"action\">"
    ));
    assert!(result.warnings.is_empty());
}

#[test]
fn test_malformed_components_still_render() {
    let document = ScriptDocument::new(vec![
        Element::new(ElementType::ComponentName, "outer"),
        Element::new(ElementType::ComponentName, "inner"),
        Element::new(ElementType::ComponentArguments, "novalue"),
        Element::new(ElementType::ComponentDescription, "Body"),
        Element::new(ElementType::Action, "After."),
    ]);
    let result = Renderer::default().render(&document);

    assert_eq!(result.warnings.len(), 2);
    assert_eq!(result.components, vec!["outer"]);
    assert!(result
        .html
        .contains("<outer>Body</outer>\n<p class=\"action\">After.</p>\n"));
}

#[test]
fn test_custom_rules_without_components_rejected() {
    let result = Renderer::with_rules(RendererConfig::default(), RuleSet::base());
    assert!(matches!(result, Err(RenderError::MissingComponentRules)));
}

#[test]
fn test_custom_component_tags() {
    let mut rules = RuleSet::extended();
    if let Some(components) = rules.components.as_mut() {
        components.name = ElementType::from_name("Widget");
        components.description = ElementType::from_name("Widget Body");
    }
    let renderer = Renderer::with_rules(RendererConfig::default(), rules).unwrap();
    let document = ScriptDocument::new(vec![
        Element::new(ElementType::from_name("Widget"), "x-w"),
        Element::new(ElementType::from_name("Widget Body"), "Hi"),
    ]);
    let result = renderer.render(&document);
    assert!(result.html.contains("<x-w>Hi</x-w>\n"));
    assert_eq!(result.components, vec!["x-w"]);
}

#[cfg(feature = "serde")]
#[test]
fn test_render_from_json() {
    let json = r#"{
        "title_page": {"Title": []},
        "elements": [
            {"element_type": "Scene Heading", "text": "INT. ROOM - DAY", "scene_number": "12A"},
            {"element_type": "Action", "text": "He *enters*."},
            {"element_type": "Boneyard", "text": "cut"}
        ]
    }"#;
    let document: ScriptDocument = serde_json::from_str(json).unwrap();
    let html = render(&document, RendererConfig::default()).unwrap();

    assert!(html.contains("<p class=\"title\">Untitled</p>"));
    assert!(html.contains("<p class=\"credit\">written by</p>"));
    assert!(html.contains("<p class=\"authors\">Anonymous</p>"));
    assert!(!html.contains("class=\"source\""));
    assert!(html.contains(
        "<span class=\"scene-number-left\">12A</span>INT. ROOM - DAY<span class=\"scene-number-right\">12A</span>"
    ));
    assert!(html.contains("<p class=\"action\">He <em>enters</em>.</p>"));
    assert!(!html.contains("cut"));
}
