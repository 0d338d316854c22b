pub mod register_account;
pub mod search_funds;

pub use register_account::*;
pub use search_funds::*;
