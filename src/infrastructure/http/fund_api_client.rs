use crate::config::AppConfig;
use crate::domain::{
    errors::{ApiError, ApiErrorKind},
    funds::MutualFund,
    logging::{LogComponent, get_logger},
    ports::{AccountPort, FundSearchPort},
    registration::RegistrationRequest,
};
use futures::future::{FutureExt, LocalBoxFuture};
use serde::Deserialize;
use url::Url;

use super::GlooHttpClient;

/// Search responses come either as a bare array or wrapped in `data`.
#[derive(Deserialize)]
#[serde(untagged)]
enum FundsResponse {
    List(Vec<MutualFund>),
    Wrapped { data: Vec<MutualFund> },
}

/// Client for the mutual fund API
#[derive(Clone)]
pub struct MutualFundApiClient {
    http: GlooHttpClient,
}

impl MutualFundApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: GlooHttpClient::new(base_url),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn search_url(&self, query: &str) -> Result<String, ApiError> {
        let mut url = Url::parse(&self.http.endpoint_url("funds/search")).map_err(|e| {
            ApiError::new(
                ApiErrorKind::Unknown,
                format!("Invalid API URL '{}': {e}", self.http.base_url()),
            )
        })?;
        url.query_pairs_mut().append_pair("q", query);
        Ok(url.into())
    }

    pub fn register_url(&self) -> String {
        self.http.endpoint_url("auth/register")
    }

    pub async fn search_funds(&self, query: &str) -> Result<Vec<MutualFund>, ApiError> {
        let url = self.search_url(query)?;
        let body = self.http.get(&url).await?;
        let funds = parse_funds_body(&body)?;

        get_logger().debug(
            LogComponent::Infrastructure("FundApi"),
            &format!("Decoded {} funds", funds.len()),
        );
        Ok(funds)
    }

    pub async fn register(&self, request: &RegistrationRequest) -> Result<(), ApiError> {
        self.http.post_json(&self.register_url(), request).await?;
        Ok(())
    }
}

/// Decode a search response body.
pub fn parse_funds_body(body: &str) -> Result<Vec<MutualFund>, ApiError> {
    match serde_json::from_str::<FundsResponse>(body) {
        Ok(FundsResponse::List(funds)) | Ok(FundsResponse::Wrapped { data: funds }) => Ok(funds),
        Err(e) => Err(ApiError::decode(format!("Unexpected search response: {e}"))),
    }
}

impl FundSearchPort for MutualFundApiClient {
    fn search_funds<'a>(&'a self, query: &'a str) -> LocalBoxFuture<'a, Result<Vec<MutualFund>, ApiError>> {
        MutualFundApiClient::search_funds(self, query).boxed_local()
    }
}

impl AccountPort for MutualFundApiClient {
    fn register<'a>(&'a self, request: &'a RegistrationRequest) -> LocalBoxFuture<'a, Result<(), ApiError>> {
        MutualFundApiClient::register(self, request).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_encodes_query() {
        let client = MutualFundApiClient::new("http://localhost:5000/api");
        assert_eq!(
            client.search_url("HDFC Top 100 & more").unwrap(),
            "http://localhost:5000/api/funds/search?q=HDFC+Top+100+%26+more"
        );
    }

    #[test]
    fn search_url_rejects_relative_base() {
        let client = MutualFundApiClient::new("not a url");
        assert_eq!(client.search_url("SBI").unwrap_err().kind(), ApiErrorKind::Unknown);
    }

    #[test]
    fn register_url() {
        let client = MutualFundApiClient::new("https://funds.example.com/api/");
        assert_eq!(client.register_url(), "https://funds.example.com/api/auth/register");
    }

    #[test]
    fn parses_bare_and_wrapped_lists() {
        let bare = parse_funds_body(r#"[{"schemeCode":119551,"schemeName":"Axis Bluechip Fund"}]"#).unwrap();
        let wrapped =
            parse_funds_body(r#"{"data":[{"schemeCode":"119551","schemeName":"Axis Bluechip Fund"}]}"#).unwrap();
        assert_eq!(bare, wrapped);
        assert_eq!(bare[0].key().value(), "119551");
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let err = parse_funds_body(r#"{"funds": 3}"#).unwrap_err();
        assert_eq!(err.kind(), ApiErrorKind::Decode);
    }
}
