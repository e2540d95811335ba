//! Small DOM helpers shared by components

use leptos::prelude::document;

/// Toggle a class on `<body>`. Failures are logged and swallowed so one
/// broken projection never takes down the handler that triggered it.
pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = document().body() else {
        log::warn!("document has no <body>; cannot toggle '{class}'");
        return;
    };
    let result = if enabled {
        body.class_list().add_1(class)
    } else {
        body.class_list().remove_1(class)
    };
    if result.is_err() {
        log::warn!("failed to toggle body class '{class}'");
    }
}
