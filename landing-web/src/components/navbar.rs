//! Navigation bar with scroll-synced highlighting

use std::cell::Cell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use shared::active_section;

use crate::utils::constants::NAV_SCROLL_OFFSET;
use crate::utils::scroll::{collect_section_bounds, current_scroll_pos, scroll_to_anchor};

const NAV_ENTRIES: &[(&str, &str)] = &[
    ("features", "Features"),
    ("download", "Download"),
    ("stats", "Stats"),
    ("faq", "FAQ"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let active = RwSignal::new(None::<String>);

    // Install the scroll sync after the first render, once the section
    // landmarks exist. At most one recomputation per animation frame; a
    // scroll event arriving while one is pending is dropped, not queued.
    Effect::new(move |_| {
        if collect_section_bounds().is_empty() {
            log::warn!("navigation sync disabled: no section landmarks found");
            return;
        }
        let ticking = Rc::new(Cell::new(false));
        window_event_listener(ev::scroll, move |_| {
            if ticking.get() {
                return;
            }
            ticking.set(true);
            let ticking = Rc::clone(&ticking);
            request_animation_frame(move || {
                ticking.set(false);
                let sections = collect_section_bounds();
                let pos = current_scroll_pos(NAV_SCROLL_OFFSET);
                let next = active_section(&sections, pos).map(str::to_string);
                if active.get_untracked() != next {
                    active.set(next);
                }
            });
        });
    });

    view! {
        <nav>
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="brand-main">"Xeno"</span><span class="brand-sub">"Executor"</span>
                </a>
                <div class="nav-links">
                    {NAV_ENTRIES.iter().map(|(id, label)| {
                        view! {
                            <a
                                href=format!("#{id}")
                                class="nav-link"
                                class:active=move || active.get().as_deref() == Some(*id)
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    // Pre-empts the next scroll-driven recomputation.
                                    if scroll_to_anchor(id) {
                                        active.set(Some(id.to_string()));
                                    }
                                }
                            >
                                {*label}
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </nav>
    }
}
