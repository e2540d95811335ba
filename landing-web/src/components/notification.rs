//! Toast notification host

use leptos::prelude::*;

use crate::state::notifications::use_notification_context;

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notices = use_notification_context();

    view! {
        <div class="notification-stack">
            {move || notices.items.get().into_iter().map(|item| {
                let class = format!("download-notification {}", item.notification.style.css_class());
                view! {
                    <div class=class>
                        <div class="notification-content">
                            <span class="notification-icon">"✓"</span>
                            <span class="notification-text">{item.notification.message}</span>
                        </div>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
