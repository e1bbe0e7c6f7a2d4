// HTTP implementation of the payment network contract

use super::{
    ClientError, CurrencyPairs, Fund, Profile, ProfileId, Quote, QuoteId, QuoteRequest, Recipient,
    RecipientRequest, RemotePaymentClient, RequirementType, TemporaryQuote, TemporaryQuoteRequest,
    Transfer, TransferId, TransferRequest,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Payment network client over HTTPS with bearer-token auth.
///
/// Request timeouts are owned by the underlying HTTP client; the engine
/// imposes no timeout or retry policy of its own.
pub struct HttpPaymentClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpPaymentClient {
    /// Create a client against the given API base URL
    /// (e.g. `https://api.sandbox.transferwise.tech`)
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured HTTP client (custom timeouts, proxies)
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let mut client = Self::new(base_url);
        client.http = http;
        client
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
    ) -> Result<T, ClientError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }
}

fn transport(err: reqwest::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }
    response
        .json()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

#[async_trait]
impl RemotePaymentClient for HttpPaymentClient {
    async fn get_profiles(&self, token: &str) -> Result<Vec<Profile>, ClientError> {
        self.get_json(token, "/v1/profiles").await
    }

    async fn get_temporary_quote(
        &self,
        token: &str,
        request: TemporaryQuoteRequest,
    ) -> Result<TemporaryQuote, ClientError> {
        // Same endpoint as final quotes; omitting the profile keeps it unbound
        self.post_json(token, "/v1/quotes", &request).await
    }

    async fn create_quote(&self, token: &str, request: QuoteRequest) -> Result<Quote, ClientError> {
        self.post_json(token, "/v1/quotes", &request).await
    }

    async fn create_recipient_account(
        &self,
        token: &str,
        request: RecipientRequest,
    ) -> Result<Recipient, ClientError> {
        self.post_json(token, "/v1/accounts", &request).await
    }

    async fn create_transfer(
        &self,
        token: &str,
        request: TransferRequest,
    ) -> Result<Transfer, ClientError> {
        self.post_json(token, "/v1/transfers", &request).await
    }

    async fn fund_transfer(
        &self,
        token: &str,
        profile_id: ProfileId,
        transfer_id: TransferId,
    ) -> Result<Fund, ClientError> {
        let path = format!("/v1/profiles/{profile_id}/transfers/{transfer_id}/payments");
        self.post_json(token, &path, &serde_json::json!({ "type": "BALANCE" }))
            .await
    }

    async fn get_account_requirements(
        &self,
        token: &str,
        quote_id: &QuoteId,
    ) -> Result<Vec<RequirementType>, ClientError> {
        let path = format!("/v1/quotes/{quote_id}/account-requirements");
        self.get_json(token, &path).await
    }

    async fn get_currency_pairs(&self, token: &str) -> Result<CurrencyPairs, ClientError> {
        self.get_json(token, "/v1/currency-pairs").await
    }
}
