//! Transient notification model

/// How long a toast stays on screen before its dismissal timer fires.
pub const DEFAULT_NOTIFICATION_LIFETIME_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationStyle {
    Success,
    Info,
    Warning,
}

impl NotificationStyle {
    /// Class suffix the stylesheet keys its toast variants on.
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationStyle::Success => "notification-success",
            NotificationStyle::Info => "notification-info",
            NotificationStyle::Warning => "notification-warning",
        }
    }
}

/// A toast message, created and destroyed within one flow-event call chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub style: NotificationStyle,
    pub lifetime_ms: u32,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: NotificationStyle::Success,
            lifetime_ms: DEFAULT_NOTIFICATION_LIFETIME_MS,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: NotificationStyle::Info,
            lifetime_ms: DEFAULT_NOTIFICATION_LIFETIME_MS,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: NotificationStyle::Warning,
            lifetime_ms: DEFAULT_NOTIFICATION_LIFETIME_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_style_and_default_lifetime() {
        let toast = Notification::success("Download started successfully!");
        assert_eq!(toast.style, NotificationStyle::Success);
        assert_eq!(toast.lifetime_ms, DEFAULT_NOTIFICATION_LIFETIME_MS);
        assert_eq!(Notification::warning("x").style.css_class(), "notification-warning");
    }
}
