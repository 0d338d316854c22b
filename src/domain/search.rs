//! View state of the fund search screen.

use crate::domain::errors::ApiError;
use crate::domain::funds::MutualFund;

pub const SEARCH_ERROR_FALLBACK: &str = "An error occurred";

/// Exactly one of these is active at a time; a new search replaces whatever
/// came before.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    /// Nothing searched yet, or cleared by the user.
    #[default]
    Idle,
    Loading { query: String },
    Failed { query: String, message: String },
    Loaded { query: String, funds: Vec<MutualFund> },
}

impl SearchState {
    /// Loading state for `query`, or `None` when the query is blank.
    pub fn begin(query: &str) -> Option<Self> {
        if query.trim().is_empty() {
            return None;
        }
        Some(Self::Loading {
            query: query.to_string(),
        })
    }

    pub fn resolve(query: String, result: Result<Vec<MutualFund>, ApiError>) -> Self {
        match result {
            Ok(funds) => Self::Loaded { query, funds },
            Err(error) => {
                let message = if error.message().trim().is_empty() {
                    SEARCH_ERROR_FALLBACK.to_string()
                } else {
                    error.message().to_string()
                };
                Self::Failed { query, message }
            }
        }
    }

    /// Back to the unsearched state.
    pub fn clear(&mut self) {
        *self = Self::Idle;
    }

    /// Drop the error and return to the unsearched state; the user searches
    /// again by hand.
    pub fn retry(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn has_searched(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn funds(&self) -> &[MutualFund] {
        match self {
            Self::Loaded { funds, .. } => funds,
            _ => &[],
        }
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Loading { query } | Self::Failed { query, .. } | Self::Loaded { query, .. } => {
                Some(query)
            }
        }
    }

    /// Searched, finished without error, nothing found.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::Loaded { funds, .. } if funds.is_empty())
    }

    pub fn result_count(&self) -> usize {
        self.funds().len()
    }
}
