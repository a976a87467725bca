use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, window, Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, Window};

use crate::config;
use crate::error::UiError;
use crate::events::{query_all, Controller, Subscription};

pub fn header_blur(scroll_top: f64) -> &'static str {
    if scroll_top > config::HEADER_BLUR_THRESHOLD_PX {
        config::HEADER_BLUR_SCROLLED
    } else {
        config::HEADER_BLUR_TOP
    }
}

/// Lets one call through per window; calls arriving while one is pending are dropped.
#[derive(Default)]
pub struct Throttle {
    pending: Cell<bool>,
}

impl Throttle {
    pub fn try_begin(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn finish(&self) {
        self.pending.set(false);
    }
}

fn update_header(window: &Window, document: &Document) {
    let scroll_top = window.scroll_y().unwrap_or(0.0);
    if let Some(header) = document
        .query_selector(".header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = header.style().set_property("backdrop-filter", header_blur(scroll_top));
    }
}

fn watch_scroll(document: &Document) -> Result<Subscription, UiError> {
    let window = window().ok_or(UiError::NoWindow)?;
    let throttle = Rc::new(Throttle::default());
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let target = window.clone();
    let document = document.clone();
    Subscription::listen(&target, "scroll", move |_| {
        if !throttle.try_begin() {
            return;
        }
        let throttle = throttle.clone();
        let window = window.clone();
        let document = document.clone();
        // replacing the slot drops the previous, already fired timeout
        *pending.borrow_mut() = Some(Timeout::new(config::SCROLL_THROTTLE_MS, move || {
            throttle.finish();
            update_header(&window, &document);
        }));
    })
}

fn observe_lazy_images(document: &Document) -> Result<Option<Subscription>, UiError> {
    let images = query_all(document, "img[data-src]")?;
    if images.is_empty() {
        return Ok(None);
    }

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            let image = entry.target();
            if let Some(src) = image.get_attribute("data-src") {
                let _ = image.set_attribute("src", &src);
                let _ = image.class_list().remove_1("lazy");
                observer.unobserve(&image);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(_) => {
            debug!("IntersectionObserver unsupported, images load eagerly");
            return Ok(None);
        }
    };
    for image in &images {
        observer.observe(image);
    }

    Ok(Some(Subscription::on_drop(move || {
        observer.disconnect();
        drop(callback);
    })))
}

/// Header blur on scroll and lazy image loading.
pub struct PerformanceOptimizer;

impl Controller for PerformanceOptimizer {
    fn name(&self) -> &'static str {
        "Performance optimizer"
    }

    fn mount(&self, document: &Document) -> Result<Vec<Subscription>, UiError> {
        let mut subscriptions = vec![watch_scroll(document)?];
        subscriptions.extend(observe_lazy_images(document)?);
        Ok(subscriptions)
    }
}
