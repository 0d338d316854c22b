use crate::domain::{
    logging::{LogComponent, get_logger},
    ports::FundSearchPort,
    search::SearchState,
};
use crate::log_info;

/// Use Case: search funds and publish each state transition
pub struct SearchFundsUseCase<R: FundSearchPort> {
    repository: R,
}

impl<R: FundSearchPort> SearchFundsUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Publishes `Loading` then the resolved state. A blank query publishes
    /// nothing, makes no request and returns `false`.
    ///
    /// Overlapping calls are not coordinated: whichever response resolves
    /// last is published last.
    pub async fn execute<F>(&self, query: &str, mut publish: F) -> bool
    where
        F: FnMut(SearchState),
    {
        let Some(loading) = SearchState::begin(query) else {
            get_logger().debug(
                LogComponent::Application("SearchFunds"),
                "Ignoring blank search query",
            );
            return false;
        };
        publish(loading);

        log_info!(LogComponent::Application("SearchFunds"), "🔍 Searching funds for '{query}'");

        let result = self.repository.search_funds(query).await;
        match &result {
            Ok(funds) => {
                log_info!(
                    LogComponent::Application("SearchFunds"),
                    "✅ {} funds found for '{query}'",
                    funds.len()
                );
            }
            Err(error) => get_logger().warn(
                LogComponent::Application("SearchFunds"),
                &format!("❌ Search for '{query}' failed: {error}"),
            ),
        }

        publish(SearchState::resolve(query.to_string(), result));
        true
    }
}
