use leptos::*;
use std::rc::Rc;

use crate::application::SearchFundsUseCase;
use crate::config::AppConfig;
use crate::domain::search::SearchState;
use crate::infrastructure::http::MutualFundApiClient;
use crate::presentation::components::{ErrorMessage, FundCard, LoadingSpinner, SearchBar};

/// 🏠 Landing page: hero, search bar and results
#[component]
pub fn LandingPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let suggestions = store_value(config.suggestions.clone());
    let state = create_rw_signal(SearchState::Idle);

    let use_case = Rc::new(SearchFundsUseCase::new(MutualFundApiClient::from_config(&config)));
    let search = Callback::new(move |query: String| {
        let use_case = Rc::clone(&use_case);
        spawn_local(async move {
            use_case
                .execute(&query, |next| {
                    // the page may have been left while the request was in flight
                    let _ = state.try_set(next);
                })
                .await;
        });
    });

    let loading = Signal::derive(move || state.with(SearchState::is_loading));

    view! {
        <div class="landing">
            <section class="hero">
                <h1 class="hero-title">"Mutual Fund Tracker"</h1>
                <p class="hero-text">
                    "Discover, track, and manage your mutual fund investments with real-time data, "
                    "personalized insights, and premium analytics in our sleek dark interface."
                </p>
            </section>

            <section class="search-section">
                <SearchBar
                    on_search=search
                    on_clear=move |_| state.update(SearchState::clear)
                    loading=loading
                />

                <Show when=move || !state.with(SearchState::has_searched)>
                    <div class="suggestions">
                        <p class="hint">"Start by searching for mutual funds above"</p>
                        <div class="suggestion-list">
                            {suggestions
                                .get_value()
                                .into_iter()
                                .map(|suggestion| {
                                    let query = suggestion.clone();
                                    view! {
                                        <button
                                            class="suggestion-btn"
                                            on:click=move |_| search.call(query.clone())
                                        >
                                            {suggestion}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
            </section>

            <Show when=move || loading.get()>
                <LoadingSpinner text="Searching mutual funds..."/>
            </Show>

            {move || {
                state
                    .with(|s| s.error().map(str::to_string))
                    .map(|message| view! {
                        <ErrorMessage
                            message=message
                            on_retry=move |_| state.update(SearchState::retry)
                        />
                    })
            }}

            <Show when=move || state.with(SearchState::is_empty_result)>
                <div class="empty-box">
                    <p>"No mutual funds found. Try a different search term."</p>
                </div>
            </Show>

            <Show when=move || state.with(|s| s.result_count() > 0)>
                <div class="results">
                    <div class="results-header">
                        <h2>"Search Results"</h2>
                        <span class="results-count">
                            {move || format!("{} funds found", state.with(SearchState::result_count))}
                        </span>
                    </div>
                    <div class="fund-grid">
                        <For
                            each=move || state.with(|s| s.funds().to_vec())
                            key=|fund| fund.key().clone()
                            children=|fund| view! { <FundCard fund=fund/> }
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}
