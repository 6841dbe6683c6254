//! Entrance animations.
//!
//! [`Reveal`] wraps content in an element that starts shifted down and
//! transparent (see `style/site.css`) and gains [`VISIBLE_CLASS`] once it
//! should be shown: right after mount, or the first time it scrolls into view.
//! Timing travels as CSS custom properties so the transition itself stays in
//! the stylesheet.

use leptos::prelude::*;

/// Class that flips a revealed element to its resting state.
pub const VISIBLE_CLASS: &str = "is-visible";

/// Fraction of the element that must be on screen before it is revealed.
pub const VIEW_THRESHOLD: f64 = 0.1;

/// Default duration for scroll-triggered reveals.
pub const IN_VIEW_DURATION_MS: u32 = 500;

/// When an element starts its transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    OnMount,
    /// First intersection with the viewport; never replays.
    InView,
}

impl Trigger {
    pub fn as_str(self) -> &'static str {
        match self {
            Trigger::OnMount => "mount",
            Trigger::InView => "in-view",
        }
    }
}

/// Initial offset and timing of one reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionSpec {
    /// Starting vertical offset in px; the element slides up from here.
    pub offset_y: u32,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub trigger: Trigger,
}

impl MotionSpec {
    pub const fn on_mount(offset_y: u32, duration_ms: u32) -> Self {
        Self {
            offset_y,
            duration_ms,
            delay_ms: 0,
            trigger: Trigger::OnMount,
        }
    }

    pub const fn in_view(offset_y: u32) -> Self {
        Self {
            offset_y,
            duration_ms: IN_VIEW_DURATION_MS,
            delay_ms: 0,
            trigger: Trigger::InView,
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Delay for the `index`-th item of a grid, `step_ms` apart.
    pub fn staggered(self, index: usize, step_ms: u32) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delayed(index.saturating_mul(step_ms))
    }

    /// Inline style consumed by the `[data-reveal]` rules.
    pub fn style(&self) -> String {
        format!(
            "--reveal-y: {}px; --reveal-duration: {}ms; --reveal-delay: {}ms;",
            self.offset_y, self.duration_ms, self.delay_ms
        )
    }
}

#[component]
pub fn Reveal(
    spec: MotionSpec,
    /// Classes for the wrapper itself (cards put their chrome here)
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(target_arch = "wasm32")]
    browser::attach(node_ref, spec.trigger);

    view! {
        <div
            node_ref=node_ref
            class=class
            data-reveal=spec.trigger.as_str()
            style=spec.style()
        >
            {children()}
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{Trigger, VIEW_THRESHOLD, VISIBLE_CLASS};
    use crate::error::{Result, SiteError};
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::{
        Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    pub(super) fn attach(node_ref: NodeRef<leptos::html::Div>, trigger: Trigger) {
        Effect::new(move || {
            let Some(el) = node_ref.get() else {
                return;
            };
            let el: Element = el.into();

            if trigger == Trigger::OnMount || prefers_reduced_motion().unwrap_or(false) {
                show(&el);
                return;
            }

            if let Err(err) = observe_once(&el) {
                tracing::warn!(%err, "scroll reveal unavailable, showing element");
                show(&el);
            }
        });
    }

    fn prefers_reduced_motion() -> Result<bool> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let query = window.match_media("(prefers-reduced-motion: reduce)")?;
        Ok(query.is_some_and(|q| q.matches()))
    }

    fn observe_once(el: &Element) -> Result<()> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        show(&target);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VIEW_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(el);

        // Lives as long as the page
        callback.forget();
        Ok(())
    }

    fn show(el: &Element) {
        if let Err(err) = el.class_list().add_1(VISIBLE_CLASS) {
            tracing::warn!(err = %SiteError::from(err), "could not mark element visible");
        }
    }
}
