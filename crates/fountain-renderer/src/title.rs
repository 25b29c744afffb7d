//! Title page block.

use crate::document::TitlePage;
use crate::rules::ClassNames;

/// Title-page field keys as produced by the parser.
pub const TITLE_KEY: &str = "Title";
pub const CREDIT_KEY: &str = "Credit";
pub const AUTHOR_KEY: &str = "Author";
pub const SOURCE_KEY: &str = "Source";
pub const DRAFT_DATE_KEY: &str = "Draft date";
pub const CONTACT_KEY: &str = "Contact";

const UNTITLED: &str = "Untitled";
const DEFAULT_CREDIT: &str = "written by";
const ANONYMOUS: &str = "Anonymous";

/// Write the title block for a non-empty title page.
///
/// Title, credit and author always appear, falling back to fixed text.
/// Source, draft date and contact appear only when present.
pub(crate) fn write_title_block(title_page: &TitlePage, classes: &ClassNames, out: &mut String) {
    if title_page.is_empty() {
        return;
    }

    out.push_str(&format!(r#"<div id="{}">"#, classes.title_div));

    // An empty title list falls back just like a missing one.
    let title = title_page
        .get(TITLE_KEY)
        .filter(|lines| !lines.is_empty())
        .map(Vec::as_slice);
    write_field(&classes.title, title, Some(UNTITLED), out);
    write_field(
        &classes.credit,
        title_page.get(CREDIT_KEY).map(Vec::as_slice),
        Some(DEFAULT_CREDIT),
        out,
    );
    write_field(
        &classes.authors,
        title_page.get(AUTHOR_KEY).map(Vec::as_slice),
        Some(ANONYMOUS),
        out,
    );

    for (key, class) in [
        (SOURCE_KEY, &classes.source),
        (DRAFT_DATE_KEY, &classes.draft_date),
        (CONTACT_KEY, &classes.contact),
    ] {
        write_field(class, title_page.get(key).map(Vec::as_slice), None, out);
    }

    out.push_str("</div>");
}

/// Write one title paragraph. Without lines, writes `fallback` or nothing.
fn write_field(class: &str, lines: Option<&[String]>, fallback: Option<&str>, out: &mut String) {
    let paragraph_start = format!(r#"<p class="{class}">"#);
    match (lines, fallback) {
        (Some(lines), _) => {
            out.push_str(&paragraph_start);
            for line in lines {
                out.push_str(line);
                out.push_str("<br>");
            }
        }
        (None, Some(fallback)) => {
            out.push_str(&paragraph_start);
            out.push_str(fallback);
        }
        (None, None) => return,
    }
    out.push_str("</p>");
}
