//! Frame-stepped animations that can be stopped part way.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, Window};

use crate::error::UiError;

/// Fraction of `duration_ms` covered after `elapsed_ms`, clamped to `0.0..=1.0`.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    // negated so a NaN duration also lands here
    if !(duration_ms > 0.0) || elapsed_ms.is_nan() {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

struct FrameLoop {
    window: Window,
    request_id: Cell<Option<i32>>,
    finished: Cell<bool>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoop {
    fn schedule(&self) {
        if self.finished.get() {
            return;
        }
        if let Some(callback) = self.callback.borrow().as_ref() {
            if let Ok(id) = self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                self.request_id.set(Some(id));
            }
        }
    }

    fn cancel(&self) {
        self.finished.set(true);
        if let Some(id) = self.request_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

/// Handle to a running animation. `stop` (or dropping the handle) cancels the
/// next pending frame; the element keeps whatever state the last frame left.
pub struct FrameTask {
    inner: Rc<FrameLoop>,
}

impl FrameTask {
    /// Calls `step` once per animation frame with the progress so far until
    /// it reaches 1.0.
    pub fn run<F>(duration_ms: f64, mut step: F) -> Result<Self, UiError>
    where
        F: FnMut(f64) + 'static,
    {
        let window = window().ok_or(UiError::NoWindow)?;
        let start = window.performance().map(|p| p.now()).unwrap_or(0.0);
        let inner = Rc::new(FrameLoop {
            window,
            request_id: Cell::new(None),
            finished: Cell::new(false),
            callback: RefCell::new(None),
        });

        let weak: Weak<FrameLoop> = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |now: f64| {
            let Some(frame_loop) = weak.upgrade() else { return };
            frame_loop.request_id.set(None);
            if frame_loop.finished.get() {
                return;
            }
            let t = progress(now - start, duration_ms);
            step(t);
            if t >= 1.0 {
                frame_loop.finished.set(true);
            } else {
                frame_loop.schedule();
            }
        }) as Box<dyn FnMut(f64)>);

        *inner.callback.borrow_mut() = Some(callback);
        inner.schedule();
        Ok(Self { inner })
    }

    pub fn stop(&self) {
        self.inner.cancel();
    }
}

impl Drop for FrameTask {
    fn drop(&mut self) {
        self.inner.cancel();
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn fade_in(element: &HtmlElement, duration_ms: f64) -> Result<FrameTask, UiError> {
    set_style(element, "opacity", "0");
    set_style(element, "display", "block");

    let element = element.clone();
    FrameTask::run(duration_ms, move |t| {
        set_style(&element, "opacity", &t.to_string());
    })
}

pub fn slide_down(element: &HtmlElement, duration_ms: f64) -> Result<FrameTask, UiError> {
    set_style(element, "height", "0");
    set_style(element, "overflow", "hidden");
    set_style(element, "display", "block");

    let target_height = f64::from(element.scroll_height());
    let element = element.clone();
    FrameTask::run(duration_ms, move |t| {
        if t >= 1.0 {
            set_style(&element, "height", "auto");
            set_style(&element, "overflow", "visible");
        } else {
            set_style(&element, "height", &format!("{}px", target_height * t));
        }
    })
}

/// Drops inline styles an animation left behind so stylesheet rules apply again.
pub fn reset(element: &HtmlElement) {
    let style = element.style();
    for property in ["height", "overflow", "display", "opacity"] {
        let _ = style.remove_property(property);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn progress_endpoints() {
        assert_eq!(progress(0.0, 300.0), 0.0);
        assert_eq!(progress(150.0, 300.0), 0.5);
        assert_eq!(progress(300.0, 300.0), 1.0);
        assert_eq!(progress(900.0, 300.0), 1.0);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        assert_eq!(progress(0.0, 0.0), 1.0);
        assert_eq!(progress(5.0, -1.0), 1.0);
    }

    #[test]
    fn nan_duration_completes_immediately() {
        assert_eq!(progress(10.0, f64::NAN), 1.0);
        assert_eq!(progress(f64::NAN, 300.0), 1.0);
    }

    #[test]
    fn clock_skew_does_not_go_negative() {
        assert_eq!(progress(-16.0, 300.0), 0.0);
    }

    proptest! {
        #[test]
        fn progress_stays_in_unit_range(elapsed in -1e6f64..1e6, duration in -10.0f64..1e4) {
            let t = progress(elapsed, duration);
            prop_assert!((0.0..=1.0).contains(&t));
        }

        #[test]
        fn progress_is_monotonic(a in 0.0f64..1e4, b in 0.0f64..1e4, duration in 1.0f64..1e4) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(progress(lo, duration) <= progress(hi, duration));
        }
    }
}
