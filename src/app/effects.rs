//! Browser bindings for the page's scroll and pointer behaviour.
//!
//! Every listener and frame callback is registered through leptos-use, so it
//! is tied to the reactive owner of the calling component and released when
//! that component unmounts.

use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_event_listener_with_options, use_raf_fn, use_window,
    UseEventListenerOptions, UseRafFnCallbackArgs,
};
use wasm_bindgen::{JsCast, JsValue};

use crate::motion::smooth_scroll::{captures_wheel, DeltaMode, NATIVE_SCROLL_SELECTOR};
use crate::motion::{SmoothScroll, FAST_LAYER, SLOW_LAYER};
use crate::scroll_spy::{ScrollSpy, Section, SectionBounds};

pub fn section_bounds(section: Section) -> Option<SectionBounds> {
    let el = document()
        .get_element_by_id(section.id())?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    Some(SectionBounds::new(
        el.offset_top().into(),
        el.offset_height().into(),
    ))
}

fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Viewport height and the largest reachable scroll offset.
fn viewport_metrics() -> (f64, f64) {
    let height = window()
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
    let scroll_height = document()
        .document_element()
        .map(|el| el.scroll_height().into())
        .unwrap_or(height);
    (height, (scroll_height - height).max(0.0))
}

/// Writes inline style properties, stopping at the first one the browser rejects.
pub fn set_style(el: &web_sys::HtmlElement, props: &[(&str, &str)]) -> Result<(), JsValue> {
    // the leptos prelude also has a `style` builder method in scope
    let style = web_sys::HtmlElement::style(el);
    props
        .iter()
        .try_for_each(|(name, value)| style.set_property(name, value))
}

/// Tracks which section is in view. Starts at [`Section::Home`].
pub fn use_active_section() -> Signal<Section> {
    let spy = RwSignal::new(ScrollSpy::new());
    let observe = move || spy.maybe_update(|s| s.observe(scroll_y(), section_bounds));

    // page may be restored mid-scroll
    Effect::new(move |_| observe());
    let _ = use_event_listener(use_window(), ev::scroll, move |_| observe());

    Signal::derive(move || spy.with(|s| s.active()))
}

/// Moves the two backdrop blobs after the pointer, bypassing the reactive graph.
pub fn use_parallax(slow: NodeRef<html::Div>, fast: NodeRef<html::Div>) {
    let _ = use_event_listener(use_window(), ev::mousemove, move |e| {
        let (x, y) = (f64::from(e.client_x()), f64::from(e.client_y()));
        for (node, layer) in [(slow, SLOW_LAYER), (fast, FAST_LAYER)] {
            let Some(el) = node.get_untracked() else {
                continue;
            };
            let transform = layer.offset(x, y).transform();
            if let Err(e) = set_style(&el, &[("transform", transform.as_str())]) {
                log::warn!("couldn't move parallax layer: {e:?}");
            }
        }
    });
}

fn over_native_scroller(e: &web_sys::WheelEvent) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(NATIVE_SCROLL_SELECTOR).ok().flatten())
        .is_some()
}

/// Handle to the page's smooth-scroll engine.
#[derive(Debug, Clone, Copy)]
pub struct Scroller {
    engine: StoredValue<SmoothScroll>,
}

impl Scroller {
    pub fn scroll_to_section(&self, section: Section) {
        let Some(bounds) = section_bounds(section) else {
            return;
        };
        let (_, limit) = viewport_metrics();
        self.engine
            .update_value(|e| e.scroll_to(bounds.top, limit));
    }
}

/// Takes over wheel scrolling and eases it, one step per animation frame.
pub fn use_smooth_scroll() -> Scroller {
    let engine = StoredValue::new(SmoothScroll::new(0.0));
    drive_smooth_scroll(engine);
    Scroller { engine }
}

/// Wires `engine` to the window for the lifetime of the current owner and
/// destroys it when that owner is cleaned up.
fn drive_smooth_scroll(engine: StoredValue<SmoothScroll>) {
    Effect::new(move |_| engine.update_value(|e| e.sync(scroll_y())));

    let _ = use_event_listener_with_options(
        use_window(),
        ev::wheel,
        move |e| {
            if !captures_wheel(e.ctrl_key(), over_native_scroller(&e)) {
                return;
            }
            e.prevent_default();
            let (height, limit) = viewport_metrics();
            let mode = DeltaMode::from(e.delta_mode());
            engine.update_value(|s| s.on_wheel(e.delta_y(), mode, height, limit));
        },
        UseEventListenerOptions::default().passive(false),
    );
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        engine.update_value(|e| e.sync(scroll_y()));
    });

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        if let Some(y) = engine.try_update_value(|e| e.raf(args.timestamp)).flatten() {
            window().scroll_to_with_x_and_y(0.0, y);
        }
    });

    on_cleanup(move || {
        engine.try_update_value(|e| e.destroy());
    });
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_unmount_destroys_engine() {
        let page = Owner::new();
        page.set();
        let engine = StoredValue::new(SmoothScroll::new(0.0));

        let view = page.child();
        view.with(|| drive_smooth_scroll(engine));
        engine.update_value(|e| {
            e.raf(0.0);
            e.scroll_to(600.0, 2000.0);
        });
        assert!(engine.try_update_value(|e| e.raf(16.0)).flatten().is_some());

        view.cleanup();
        assert!(engine.with_value(|e| e.is_destroyed()));
        assert_eq!(engine.try_update_value(|e| e.raf(32.0)).flatten(), None);
        engine.update_value(|e| e.scroll_to(100.0, 2000.0));
        assert!(!engine.with_value(|e| e.is_animating()));
    }
}
