//! One-shot viewport-entry trigger for reveal animations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections fade in the first time they scroll into view. Each tracked
//! element gets one `IntersectionObserver` subscription that disconnects
//! after its first positive observation; there is no polling.
//!
//! ERROR HANDLING
//! ==============
//! If the observer cannot be created the element is revealed immediately.
//! Off the browser every element is revealed from the start, so a missing
//! observation primitive can hide nothing.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::prelude::*;

/// What the observer should do after an observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    /// Keep observing.
    Keep,
    /// Revealed; disconnect.
    Done,
}

/// Reveal flag for one tracked element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub revealed: bool,
}

impl RevealState {
    /// Record one observation. Once revealed, the element stays revealed and
    /// every later observation reports `Done`.
    pub fn observe(&mut self, intersecting: bool) -> RevealStep {
        if intersecting {
            self.revealed = true;
        }
        if self.revealed { RevealStep::Done } else { RevealStep::Keep }
    }

    /// Reveal unconditionally when observation is unavailable.
    pub fn fallback(&mut self) {
        self.revealed = true;
    }
}

/// CSS class for the reveal transition in its current phase.
pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed { "reveal reveal--shown" } else { "reveal" }
}

/// Track `target` and flip the returned signal once it enters the viewport.
///
/// The observer is disconnected, and its callback released, when the calling
/// component's owner is cleaned up.
pub fn use_reveal(target: NodeRef<leptos::html::Div>, threshold: f64) -> RwSignal<bool> {
    #[cfg(feature = "csr")]
    {
        let revealed = RwSignal::new(false);
        let handle = StoredValue::new_local(None::<RevealObserver>);
        Effect::new(move || {
            let Some(el) = target.get() else {
                return;
            };
            if revealed.get_untracked() || handle.with_value(Option::is_some) {
                return;
            }
            match RevealObserver::observe(&el, threshold, revealed) {
                Ok(observer) => handle.set_value(Some(observer)),
                Err(err) => {
                    leptos::logging::warn!("reveal observer unavailable: {err:?}");
                    let mut state = RevealState::default();
                    state.fallback();
                    revealed.set(state.revealed);
                }
            }
        });
        on_cleanup(move || {
            // Dropping the observer disconnects it.
            let _ = handle.try_update_value(Option::take);
        });
        revealed
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (target, threshold);
        let mut state = RevealState::default();
        state.fallback();
        RwSignal::new(state.revealed)
    }
}

#[cfg(feature = "csr")]
type ObserverCallback =
    wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// A live `IntersectionObserver` together with the callback it invokes.
///
/// Dropping this disconnects the observer before the callback is freed.
#[cfg(feature = "csr")]
struct RevealObserver {
    observer: web_sys::IntersectionObserver,
    _callback: ObserverCallback,
}

#[cfg(feature = "csr")]
impl RevealObserver {
    fn observe(
        el: &web_sys::Element,
        threshold: f64,
        revealed: RwSignal<bool>,
    ) -> Result<Self, wasm_bindgen::JsValue> {
        use wasm_bindgen::JsCast as _;

        let callback = ObserverCallback::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                // Signal already disposed: the owning view is gone.
                let Some(revealed_now) = revealed.try_get_untracked() else {
                    observer.disconnect();
                    return;
                };
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<web_sys::IntersectionObserverEntry>()
                        .is_intersecting()
                });
                let mut state = RevealState {
                    revealed: revealed_now,
                };
                if state.observe(intersecting) == RevealStep::Done {
                    observer.disconnect();
                    let _ = revealed.try_set(true);
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        observer.observe(el);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

#[cfg(feature = "csr")]
impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
