//! Domain layer: fund records, search and registration state, error kinds and
//! the ports through which the client talks to the outside world.

pub mod errors;
pub mod funds;
pub mod logging;
pub mod notifications;
pub mod ports;
pub mod registration;
pub mod routes;
pub mod search;

pub use errors::{ApiError, ApiErrorKind, AppError};
pub use funds::{MutualFund, SchemeCode};
pub use notifications::{Toast, ToastKind};
pub use registration::{RegistrationFailure, RegistrationInput, RegistrationRequest, RegistrationValidationError};
pub use routes::Route;
pub use search::SearchState;
