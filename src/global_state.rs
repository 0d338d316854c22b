use crate::domain::{notifications::Toast, routes::Route};
use leptos::*;
use once_cell::sync::OnceCell;

/// Signals shared across screens
pub struct Globals {
    pub current_route: RwSignal<Route>,
    pub toasts: RwSignal<Vec<Toast>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        current_route: create_rw_signal(Route::Home),
        toasts: create_rw_signal(Vec::new()),
    })
}

crate::global_signals! {
    pub current_route => current_route: Route,
    pub toasts => toasts: Vec<Toast>,
}
