//! Browser-side implementations of the notification and navigation ports.

use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use leptos::*;
use std::sync::atomic::{AtomicU64, Ordering};
use wasm_bindgen::JsValue;

use crate::domain::{
    logging::{LogComponent, get_logger},
    notifications::{Toast, ToastKind},
    ports::{Navigator, NotificationSink},
    routes::Route,
};
use crate::global_state::{current_route, toasts};
use crate::{log_debug, log_warn};

/// Oldest toasts are dropped beyond this many.
pub const MAX_VISIBLE_TOASTS: usize = 5;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

/// Pushes toasts into the global toast list and dismisses them after a delay
#[derive(Clone, Copy)]
pub struct ToastService {
    duration_ms: u32,
}

impl ToastService {
    pub fn new(duration_ms: u32) -> Self {
        Self { duration_ms }
    }
}

impl NotificationSink for ToastService {
    fn show_toast(&self, kind: ToastKind, message: &str) {
        let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
        get_logger().debug(
            LogComponent::Infrastructure("Toast"),
            &format!("Showing {kind} toast #{id}: {message}"),
        );

        toasts().update(|list| {
            list.push(Toast::new(id, kind, message));
            if list.len() > MAX_VISIBLE_TOASTS {
                let overflow = list.len() - MAX_VISIBLE_TOASTS;
                list.drain(..overflow);
            }
        });

        Timeout::new(self.duration_ms, move || dismiss_toast(id)).forget();
    }
}

pub fn dismiss_toast(id: u64) {
    toasts().update(|list| list.retain(|toast| toast.id != id));
}

/// Route changes backed by the History API
#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: Route) {
        if current_route().get_untracked() == route {
            return;
        }

        match web_sys::window().map(|w| w.history()) {
            Some(Ok(history)) => {
                if history
                    .push_state_with_url(&JsValue::NULL, "", Some(route.path()))
                    .is_err()
                {
                    log_warn!(LogComponent::Infrastructure("Navigator"), "pushState to {} failed", route.path());
                }
            }
            _ => {
                log_warn!(LogComponent::Infrastructure("Navigator"), "History API not available");
            }
        }

        log_debug!(LogComponent::Infrastructure("Navigator"), "Navigating to {}", route.path());
        current_route().set(route);
    }
}

/// Route matching the browser's current location
pub fn location_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or_default()
}

/// Keep the route signal in sync with back/forward navigation.
pub fn listen_for_history() {
    let Some(window) = web_sys::window() else {
        return;
    };
    EventListener::new(&window, "popstate", |_| {
        current_route().set(location_route());
    })
    .forget();
}
