//! Dual-dialogue column tracking.

use crate::document::Element;
use crate::rules::ClassNames;

/// Pairs two consecutive dual-flagged character blocks into side-by-side
/// columns.
///
/// The counter counts dual character cues seen in the current pairing:
///
/// ```text
/// 0 --dual cue--> 1   open wrapper + left column
/// 1 --dual cue--> 2   open right column, left stays open
/// 2 --non-dialogue element--> 0   write two closing tags
/// ```
///
/// Columns still open when the document ends are left open.
#[derive(Debug, Default)]
pub(crate) struct DualDialogueTracker {
    count: u8,
}

impl DualDialogueTracker {
    /// Update state for `element` and write any wrapper markup it triggers.
    ///
    /// Runs before the element's own paragraph is written.
    pub(crate) fn observe(&mut self, element: &Element, classes: &ClassNames, out: &mut String) {
        if element.is_dual_character() {
            self.count = self.count.saturating_add(1);
            match self.count {
                1 => {
                    out.push_str(&format!("<div class=\"{}\">\n", classes.dual_dialogue));
                    out.push_str(&format!("<div class=\"{}\">\n", classes.dual_dialogue_left));
                }
                2 => {
                    out.push_str(&format!(
                        "<div class=\"{}\">\n",
                        classes.dual_dialogue_right
                    ));
                }
                _ => {}
            }
        }

        if self.count >= 2 && !element.element_type.continues_dialogue() {
            out.push_str("</div>\n</div>\n");
            self.count = 0;
        }
    }
}
