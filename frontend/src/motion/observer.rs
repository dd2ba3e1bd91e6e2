use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

use super::scroll::{ScrollMetrics, TrackingWindow};

const EVENTS: [&str; 2] = ["scroll", "resize"];

/// Samples an element's position once per animation frame while the page
/// scrolls or resizes, and reports its progress through a tracking window,
/// clamped to [0, 1] so positions outside the window all read the same.
///
/// Scroll and resize events only request a frame; at most one frame is
/// pending at a time, so a burst of events yields a single measurement.
/// Everything is released when the observer is dropped.
pub struct ScrollObserver {
    window: Window,
    on_event: Closure<dyn Fn()>,
    pending: Rc<Cell<Option<i32>>>,
}

impl ScrollObserver {
    pub fn attach(
        target: NodeRef,
        tracking: TrackingWindow,
        on_progress: Callback<f64>,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let pending = Rc::new(Cell::new(None::<i32>));

        let on_frame = {
            let window = window.clone();
            let pending = pending.clone();
            Closure::<dyn Fn()>::new(move || {
                pending.set(None);
                if let Some(metrics) = sample(&window, &target) {
                    on_progress.emit(tracking.settled_progress(&metrics));
                }
            })
        };

        let schedule = {
            let window = window.clone();
            let pending = pending.clone();
            Rc::new(move || {
                if pending.get().is_some() {
                    return;
                }
                match window.request_animation_frame(on_frame.as_ref().unchecked_ref()) {
                    Ok(handle) => pending.set(Some(handle)),
                    Err(_) => warn!("requestAnimationFrame rejected, dropping scroll sample"),
                }
            })
        };

        let on_event = {
            let schedule = schedule.clone();
            Closure::<dyn Fn()>::new(move || schedule())
        };

        for event in EVENTS {
            if window
                .add_event_listener_with_callback(event, on_event.as_ref().unchecked_ref())
                .is_err()
            {
                warn!("could not listen for {} events", event);
            }
        }

        // first sample so cards already in view don't wait for a scroll
        schedule();

        Some(Self {
            window,
            on_event,
            pending,
        })
    }
}

impl Drop for ScrollObserver {
    fn drop(&mut self) {
        for event in EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.on_event.as_ref().unchecked_ref());
        }
        if let Some(handle) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }
}

fn sample(window: &Window, target: &NodeRef) -> Option<ScrollMetrics> {
    let element = target.cast::<Element>()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    Some(ScrollMetrics {
        element_top: rect.top(),
        element_height: rect.height(),
        viewport_height,
    })
}

/// Progress of `target` through `tracking`, updated every animation frame
/// in which the page scrolled. Starts at 0 until the element is measured.
/// Only changes while the element is inside the window, so cards far away
/// from it don't re-render.
///
/// `target` must not be the element the progress is applied to as a
/// transform, or the measurement would include the previous frame's style.
#[hook]
pub fn use_scroll_progress(target: NodeRef, tracking: TrackingWindow) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |(target, tracking): &(NodeRef, TrackingWindow)| {
                let on_progress = Callback::from(move |value: f64| progress.set(value));
                let observer = ScrollObserver::attach(target.clone(), *tracking, on_progress);
                if observer.is_none() {
                    warn!("no window to observe, card stays at rest");
                }
                move || drop(observer)
            },
            (target, tracking),
        );
    }

    *progress
}
