use leptos::*;
use std::rc::Rc;

use crate::application::RegisterAccountUseCase;
use crate::config::AppConfig;
use crate::domain::{ports::Navigator, registration::RegistrationInput, routes::Route};
use crate::infrastructure::{
    http::MutualFundApiClient,
    ui::{BrowserNavigator, ToastService},
};
use crate::presentation::components::LoadingSpinner;

/// 📝 Account registration form
#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let submitting = create_rw_signal(false);

    let use_case = Rc::new(RegisterAccountUseCase::new(
        MutualFundApiClient::from_config(&config),
        ToastService::new(config.toast_duration_ms),
        BrowserNavigator,
    ));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let input = RegistrationInput::new(
            name.get_untracked(),
            email.get_untracked(),
            password.get_untracked(),
        );
        let use_case = Rc::clone(&use_case);
        submitting.set(true);
        spawn_local(async move {
            use_case.execute(&input).await;
            // success navigates away and disposes this page's signals
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <div class="register-page">
            <div class="register-header">
                <h1 class="brand">"MutualTracker"</h1>
                <h2 class="subtitle">"Create your account"</h2>
            </div>

            <div class="register-card">
                <form class="register-form" on:submit=on_submit novalidate=true>
                    <label for="name">"Full name"</label>
                    <input
                        id="name"
                        type="text"
                        placeholder="Enter your full name"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />

                    <label for="email">"Email address"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                        {move || {
                            if submitting.get() {
                                view! { <LoadingSpinner/> }.into_view()
                            } else {
                                view! { <span>"Create account"</span> }.into_view()
                            }
                        }}
                    </button>
                </form>

                <p class="back-link">
                    <a
                        href=Route::Home.path()
                        on:click=move |ev| {
                            ev.prevent_default();
                            BrowserNavigator.navigate(Route::Home);
                        }
                    >
                        "← Back to fund search"
                    </a>
                </p>
            </div>
        </div>
    }
}
