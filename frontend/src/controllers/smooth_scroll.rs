use log::debug;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::error::UiError;
use crate::events::{query_all, Controller, Subscription};

/// Element id an in-page link points at, percent-decoded. A bare `#` or a
/// link to another page has no target.
pub fn fragment_target(href: &str) -> Option<String> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    Some(
        urlencoding::decode(fragment)
            .map(|id| id.into_owned())
            .unwrap_or_else(|_| fragment.to_string()),
    )
}

/// Smoothly aligns the top edge of `element` with the viewport.
pub fn scroll_to(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Scrolls to `id` if it exists; missing targets are ignored.
pub fn scroll_to_id(document: &Document, id: &str) {
    match document.get_element_by_id(id) {
        Some(element) => scroll_to(&element),
        None => debug!("No #{} on page, not scrolling", id),
    }
}

pub struct SmoothScroll;

impl Controller for SmoothScroll {
    fn name(&self) -> &'static str {
        "Smooth scroll"
    }

    fn mount(&self, document: &Document) -> Result<Vec<Subscription>, UiError> {
        query_all(document, r##"a[href^="#"]"##)?
            .into_iter()
            .map(|link| {
                let document = document.clone();
                let href = link.get_attribute("href").unwrap_or_default();
                Subscription::listen(&link, "click", move |e| {
                    e.prevent_default();
                    if let Some(id) = fragment_target(&href) {
                        scroll_to_id(&document, &id);
                    }
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#roadmap", Some("roadmap"))]
    #[case("#faq", Some("faq"))]
    #[case("#getting%20started", Some("getting started"))]
    #[case("#", None)]
    #[case("", None)]
    #[case("/pricing#faq", None)]
    #[case("https://example.com/#faq", None)]
    fn resolves_fragment(#[case] href: &str, #[case] expected: Option<&str>) {
        assert_eq!(fragment_target(href).as_deref(), expected);
    }

    #[test]
    fn undecodable_fragment_is_used_as_is() {
        assert_eq!(fragment_target("#bad%ff").as_deref(), Some("bad%ff"));
    }
}
