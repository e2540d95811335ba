//! Xeno Landing - top-level component wiring
//!
//! Contexts are provided here, before anything renders, so the disclaimer
//! gate is decided from localStorage ahead of the first paint. Modals,
//! toasts, and the easter-egg overlay sit outside the routed content.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{
    DisclaimerModal, Navbar, NotificationHost, PartyOverlay, PatcherRequiredModal,
};
use crate::pages::LandingPage;
use crate::state::gate::provide_gate_context;
use crate::state::notifications::provide_notification_context;
use crate::state::party::provide_party_context;

#[component]
pub fn App() -> impl IntoView {
    provide_gate_context();
    provide_notification_context();
    provide_party_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                </Routes>
                <DisclaimerModal/>
                <PatcherRequiredModal/>
                <NotificationHost/>
                <PartyOverlay/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <a href="/" class="btn">"Back to the landing page"</a>
        </div>
    }
}
