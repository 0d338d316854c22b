use leptos::*;

use crate::{
    config::AppConfig,
    domain::{ports::Navigator, routes::Route},
    global_state::current_route,
    infrastructure::ui::BrowserNavigator,
    presentation::{LandingPage, RegisterPage, components::ToastHost},
};

/// 🦀 Root component: navigation bar, current screen and toasts
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <style>{APP_STYLES}</style>
        <div class="fund-tracker-app">
            <NavBar/>
            <main class="content">
                {move || match current_route().get() {
                    Route::Home => view! { <LandingPage/> }.into_view(),
                    Route::Register => view! { <RegisterPage/> }.into_view(),
                }}
            </main>
            <ToastHost/>
        </div>
    }
}

/// 🧭 Top navigation
#[component]
fn NavBar() -> impl IntoView {
    let link = move |route: Route, label: &'static str| {
        view! {
            <a
                href=route.path()
                class=move || if current_route().get() == route { "nav-link active" } else { "nav-link" }
                on:click=move |ev| {
                    ev.prevent_default();
                    BrowserNavigator.navigate(route);
                }
            >
                {label}
            </a>
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-brand">"MutualTracker"</span>
            <div class="nav-links">
                {link(Route::Home, "Search")}
                {link(Route::Register, "Sign up")}
            </div>
        </nav>
    }
}

const APP_STYLES: &str = r#"
.fund-tracker-app {
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
    background: #000;
    min-height: 100vh;
    color: #fff;
}

.nav-bar {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 16px 32px;
    border-bottom: 1px solid rgba(255, 255, 255, 0.2);
}

.nav-brand { font-weight: 700; font-size: 20px; }
.nav-link { color: #d1d5db; margin-left: 20px; text-decoration: none; }
.nav-link.active, .nav-link:hover { color: #60a5fa; }

.content { max-width: 1200px; margin: 0 auto; padding: 32px 16px; }

.hero { text-align: center; padding: 48px 0; }
.hero-title { font-size: 56px; font-weight: 700; color: #bfdbfe; }
.hero-text { color: #d1d5db; font-size: 20px; max-width: 720px; margin: 0 auto; }

.search-bar { display: flex; gap: 8px; max-width: 720px; margin: 0 auto 32px; }
.search-input, .register-form input {
    flex: 1;
    padding: 14px 16px;
    background: #000;
    border: 2px solid rgba(255, 255, 255, 0.2);
    border-radius: 12px;
    color: #fff;
}
.search-btn, .submit-btn, .retry-btn, .suggestion-btn, .clear-btn {
    padding: 12px 20px;
    border-radius: 12px;
    border: 2px solid rgba(255, 255, 255, 0.2);
    background: #000;
    color: #fff;
    cursor: pointer;
}
.search-btn, .submit-btn { background: linear-gradient(90deg, #fff, #60a5fa); color: #000; font-weight: 700; }
button:disabled { opacity: 0.5; cursor: not-allowed; }

.suggestions { text-align: center; }
.hint { color: #9ca3af; font-size: 18px; }
.suggestion-list { display: flex; flex-wrap: wrap; justify-content: center; gap: 12px; }

.spinner-wrapper { display: flex; flex-direction: column; align-items: center; padding: 48px 0; }
.spinner {
    width: 40px;
    height: 40px;
    border: 4px solid rgba(255, 255, 255, 0.2);
    border-top-color: #60a5fa;
    border-radius: 50%;
    animation: spin 1s linear infinite;
}
.submit-btn .spinner-wrapper { padding: 0; }
.submit-btn .spinner { width: 18px; height: 18px; border-width: 3px; }
@keyframes spin { to { transform: rotate(360deg); } }

.error-box, .empty-box, .results-header, .fund-card, .register-card {
    border: 2px solid rgba(255, 255, 255, 0.2);
    border-radius: 12px;
    padding: 24px;
}
.error-box { border-color: #f87171; text-align: center; }
.error-title { color: #f87171; font-weight: 700; }
.empty-box { text-align: center; color: #9ca3af; }

.results-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px; }
.results-count { background: #60a5fa; color: #000; padding: 6px 12px; border-radius: 8px; font-weight: 600; }
.fund-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 24px; }
.fund-name { margin: 0 0 8px; }
.fund-code { color: #9ca3af; font-family: 'Courier New', monospace; }
.fund-attributes { display: grid; grid-template-columns: auto 1fr; gap: 4px 12px; color: #d1d5db; }

.register-page { max-width: 440px; margin: 0 auto; }
.register-header { text-align: center; }
.brand { font-size: 36px; color: #bfdbfe; }
.subtitle { color: #d1d5db; font-weight: 300; }
.register-form { display: flex; flex-direction: column; gap: 12px; }
.back-link { text-align: center; margin-top: 24px; }
.back-link a { color: #93c5fd; }

.toast-host { position: fixed; top: 16px; right: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 1000; }
.toast { padding: 12px 16px; border-radius: 10px; cursor: pointer; max-width: 360px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.5); }
.toast-success { background: #065f46; }
.toast-error { background: #7f1d1d; }
"#;
