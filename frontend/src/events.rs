//! Listener registration for the document-level controllers.
//!
//! A `Subscription` owns whatever it needs to undo its registration; dropping
//! it unsubscribes. Controllers hand their subscriptions back to the page
//! that mounted them, which keeps them alive until it unmounts.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget};

use crate::error::UiError;

pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, UiError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|_| UiError::Listen(event))?;

        let target = target.clone();
        Ok(Self::on_drop(move || {
            let _ = target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }))
    }

    pub fn on_drop<F>(teardown: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self { teardown: Some(Box::new(teardown)) }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

/// A piece of page behavior that binds itself to an already rendered document.
pub trait Controller {
    /// Label used when a mount failure is reported.
    fn name(&self) -> &'static str;

    fn mount(&self, document: &Document) -> Result<Vec<Subscription>, UiError>;
}

/// Keeps the subscriptions of every controller that mounted. A failure is
/// reported under the controller's name and doesn't stop the rest.
pub fn keep_mounted<I>(results: I) -> Vec<Subscription>
where
    I: IntoIterator<Item = (&'static str, Result<Vec<Subscription>, UiError>)>,
{
    let mut subscriptions = Vec::new();
    for (name, result) in results {
        match result {
            Ok(mounted) => {
                log::debug!("{} mounted with {} listeners", name, mounted.len());
                subscriptions.extend(mounted);
            }
            Err(err) => crate::error::report(name, &err),
        }
    }
    subscriptions
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, UiError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|_| UiError::Selector(selector.to_string()))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
