use crate::domain::{
    logging::{LogComponent, get_logger},
    notifications::ToastKind,
    ports::{AccountPort, Navigator, NotificationSink},
    registration::{
        REGISTRATION_SUCCESS_MESSAGE, RegistrationFailure, RegistrationInput,
        RegistrationValidationError,
    },
    routes::Route,
};
use crate::{log_error, log_info};

/// Result of one submit of the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// A local check failed; nothing was sent.
    Invalid(RegistrationValidationError),
    Registered,
    Failed(RegistrationFailure),
}

/// Use Case: validate the form, register the account, notify and navigate
pub struct RegisterAccountUseCase<A, N, V>
where
    A: AccountPort,
    N: NotificationSink,
    V: Navigator,
{
    accounts: A,
    notifications: N,
    navigator: V,
}

impl<A, N, V> RegisterAccountUseCase<A, N, V>
where
    A: AccountPort,
    N: NotificationSink,
    V: Navigator,
{
    pub fn new(accounts: A, notifications: N, navigator: V) -> Self {
        Self {
            accounts,
            notifications,
            navigator,
        }
    }

    /// Every outcome produces exactly one notification.
    pub async fn execute(&self, input: &RegistrationInput) -> RegistrationOutcome {
        let request = match input.validate() {
            Ok(request) => request,
            Err(error) => {
                get_logger().debug(
                    LogComponent::Application("RegisterAccount"),
                    &format!("Form rejected before submit: {error}"),
                );
                self.notifications.show_toast(ToastKind::Error, &error.to_string());
                return RegistrationOutcome::Invalid(error);
            }
        };

        log_info!(LogComponent::Application("RegisterAccount"), "📝 Registering account for {}", request.email());

        match self.accounts.register(&request).await {
            Ok(()) => {
                log_info!(LogComponent::Application("RegisterAccount"), "✅ Account created");
                self.notifications
                    .show_toast(ToastKind::Success, REGISTRATION_SUCCESS_MESSAGE);
                self.navigator.navigate(Route::Home);
                RegistrationOutcome::Registered
            }
            Err(error) => {
                log_error!(LogComponent::Application("RegisterAccount"), "❌ Registration failed: {error}");
                let failure = RegistrationFailure::classify(&error);
                self.notifications.show_toast(ToastKind::Error, failure.message());
                RegistrationOutcome::Failed(failure)
            }
        }
    }
}
