//! Transient toast notifications

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use shared::Notification;

/// A live toast plus the id its dismissal timer will remove.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveNotification {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Clone, Copy)]
pub struct NotificationContext {
    pub items: RwSignal<Vec<ActiveNotification>>,
    next_id: StoredValue<u64>,
}

impl NotificationContext {
    fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Show a toast and schedule its dismissal. The timer always completes;
    /// there is no cancellation path.
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let lifetime_ms = notification.lifetime_ms;
        let items = self.items;
        items.update(|list| list.push(ActiveNotification { id, notification }));
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(lifetime_ms).await;
            items.update(|list| list.retain(|item| item.id != id));
        });
    }
}

pub fn provide_notification_context() -> NotificationContext {
    let context = NotificationContext::new();
    provide_context(context);
    context
}

pub fn use_notification_context() -> NotificationContext {
    expect_context::<NotificationContext>()
}
