use leptos::*;

use crate::domain::funds::MutualFund;
use crate::global_state::toasts;
use crate::infrastructure::ui::dismiss_toast;

/// 🔍 Query input with search and clear buttons
#[component]
pub fn SearchBar(
    #[prop(into)] on_search: Callback<String>,
    #[prop(into)] on_clear: Callback<()>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let (query, set_query) = create_signal(String::new());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_search.call(query.get_untracked());
    };

    let clear = move |_| {
        set_query.set(String::new());
        on_clear.call(());
    };

    view! {
        <form class="search-bar" on:submit=submit>
            <input
                type="text"
                class="search-input"
                placeholder="Search mutual funds by name, e.g. HDFC Top 100"
                prop:value=query
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <Show when=move || !query.with(String::is_empty)>
                <button type="button" class="clear-btn" on:click=clear>"✕"</button>
            </Show>
            <button type="submit" class="search-btn" disabled=move || loading.get()>
                {move || if loading.get() { "Searching..." } else { "Search" }}
            </button>
        </form>
    }
}

/// ⏳ Spinner with an optional caption
#[component]
pub fn LoadingSpinner(#[prop(optional, into)] text: Option<String>) -> impl IntoView {
    view! {
        <div class="spinner-wrapper">
            <div class="spinner"></div>
            {text.map(|text| view! { <p class="spinner-text">{text}</p> })}
        </div>
    }
}

/// ❌ Error box with a retry button
#[component]
pub fn ErrorMessage(message: String, #[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-box">
            <p class="error-title">"Something went wrong"</p>
            <p class="error-text">{message}</p>
            <button class="retry-btn" on:click=move |_| on_retry.call(())>"Try again"</button>
        </div>
    }
}

/// 📈 Single fund in the results grid
#[component]
pub fn FundCard(fund: MutualFund) -> impl IntoView {
    let attributes = fund.display_attributes();

    view! {
        <div class="fund-card">
            <h3 class="fund-name">{fund.display_name()}</h3>
            <p class="fund-code">"Scheme code: " {fund.scheme_code.to_string()}</p>
            <dl class="fund-attributes">
                {attributes
                    .into_iter()
                    .map(|(label, value)| view! {
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    })
                    .collect_view()}
            </dl>
        </div>
    }
}

/// 🔔 Stack of active toasts, click to dismiss
#[component]
pub fn ToastHost() -> impl IntoView {
    view! {
        <div class="toast-host">
            <For
                each=move || toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast toast-{}", toast.kind)
                            role="status"
                            on:click=move |_| dismiss_toast(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
