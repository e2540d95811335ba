//! Scroll-triggered one-shot reveal animations

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::document;
use shared::RevealSet;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::utils::constants::{REVEAL_CLASS, REVEAL_ROOT_MARGIN, REVEAL_SELECTORS, REVEAL_THRESHOLD};

fn collect_targets() -> Vec<Element> {
    let document = document();
    let mut targets = Vec::new();
    for selector in REVEAL_SELECTORS {
        let Ok(list) = document.query_selector_all(selector) else {
            log::warn!("invalid reveal selector '{selector}'");
            continue;
        };
        for index in 0..list.length() {
            if let Some(node) = list.item(index) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    targets.push(element);
                }
            }
        }
    }
    targets
}

/// Observe the reveal targets. Each plays its entrance transition the first
/// time at least 10% of it enters the bottom-shrunk viewport, then is
/// unobserved; reveals never revert.
pub fn install_reveal_observer() {
    let targets = Rc::new(collect_targets());
    if targets.is_empty() {
        log::warn!("reveal animations disabled: no matching elements at startup");
        return;
    }

    let revealed = RefCell::new(RevealSet::default());
    let observed = Rc::clone(&targets);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                let Some(key) = observed.iter().position(|element| *element == target) else {
                    continue;
                };
                // A batch can deliver several entries for one element;
                // RevealSet keeps the transition one-shot.
                if revealed.borrow_mut().mark(key)
                    && target.class_list().add_1(REVEAL_CLASS).is_err()
                {
                    log::warn!("failed to apply reveal class");
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for element in targets.iter() {
                observer.observe(element);
            }
            // The observer outlives this call; the closure leaks with it.
            callback.forget();
        }
        Err(err) => log::warn!("reveal animations disabled: {err:?}"),
    }
}
