use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::UiError;
use crate::events::{query_all, Controller, Subscription};

const FOCUSED_CLASS: &str = "focused";
const CHECKBOX_ACCENT: &str = "var(--color-primary)";

/// Whether a select's wrapper should carry `focused` after `event_type`.
/// Other events leave the wrapper alone.
pub fn focused_after(event_type: &str) -> Option<bool> {
    match event_type {
        "focus" => Some(true),
        "blur" => Some(false),
        _ => None,
    }
}

fn mark_parent(select: &Element, focused: bool) {
    if let Some(parent) = select.parent_element() {
        let classes = parent.class_list();
        let _ = if focused { classes.add_1(FOCUSED_CLASS) } else { classes.remove_1(FOCUSED_CLASS) };
    }
}

/// Focus styling for select wrappers and brand-colored checkboxes.
pub struct FormEnhancer;

impl Controller for FormEnhancer {
    fn name(&self) -> &'static str {
        "Form enhancer"
    }

    fn mount(&self, document: &Document) -> Result<Vec<Subscription>, UiError> {
        let mut subscriptions = Vec::new();

        for select in query_all(document, "select")? {
            // focus and blur don't bubble, so each select gets its own pair
            for event in ["focus", "blur"] {
                let target = select.clone();
                subscriptions.push(Subscription::listen(&select, event, move |e| {
                    if let Some(focused) = focused_after(&e.type_()) {
                        mark_parent(&target, focused);
                    }
                })?);
            }
        }

        for checkbox in query_all(document, r#"input[type="checkbox"]"#)? {
            if let Some(checkbox) = checkbox.dyn_ref::<HtmlElement>() {
                let _ = checkbox.style().set_property("accent-color", CHECKBOX_ACCENT);
            }
        }

        Ok(subscriptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("focus", Some(true))]
    #[case("blur", Some(false))]
    #[case("change", None)]
    #[case("focusin", None)]
    fn wrapper_class_follows_focus(#[case] event_type: &str, #[case] expected: Option<bool>) {
        assert_eq!(focused_after(event_type), expected);
    }

}
