// Mock implementation of RemotePaymentClient for testing
//
// Builder-configured canned responses plus a recorded call log, so tests can
// assert both what the engine received and how often it went upstream.

use super::{
    ClientError, CurrencyPairs, Fund, Profile, ProfileId, Quote, QuoteId, QuoteRequest, Recipient,
    RecipientRequest, RemotePaymentClient, RequirementType, SourceCurrencyPairs, TargetCurrency,
    TemporaryQuote, TemporaryQuoteRequest, Transfer, TransferId, TransferRequest,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

/// Operations of the payment network contract, for failure injection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MockOp {
    GetProfiles,
    GetTemporaryQuote,
    CreateQuote,
    CreateRecipientAccount,
    CreateTransfer,
    FundTransfer,
    GetAccountRequirements,
    GetCurrencyPairs,
}

/// One recorded upstream call with the request the engine sent
#[derive(Clone, Debug, PartialEq)]
pub enum MockCall {
    GetProfiles,
    GetTemporaryQuote(TemporaryQuoteRequest),
    CreateQuote(QuoteRequest),
    CreateRecipientAccount(RecipientRequest),
    CreateTransfer(TransferRequest),
    FundTransfer {
        profile_id: ProfileId,
        transfer_id: TransferId,
    },
    GetAccountRequirements(QuoteId),
    GetCurrencyPairs,
}

impl MockCall {
    fn op(&self) -> MockOp {
        match self {
            MockCall::GetProfiles => MockOp::GetProfiles,
            MockCall::GetTemporaryQuote(_) => MockOp::GetTemporaryQuote,
            MockCall::CreateQuote(_) => MockOp::CreateQuote,
            MockCall::CreateRecipientAccount(_) => MockOp::CreateRecipientAccount,
            MockCall::CreateTransfer(_) => MockOp::CreateTransfer,
            MockCall::FundTransfer { .. } => MockOp::FundTransfer,
            MockCall::GetAccountRequirements(_) => MockOp::GetAccountRequirements,
            MockCall::GetCurrencyPairs => MockOp::GetCurrencyPairs,
        }
    }
}

/// Configurable stand-in for the payment network
pub struct MockPaymentClient {
    profiles: Vec<Profile>,
    rate: Decimal,
    fund: Fund,
    requirements: Vec<RequirementType>,
    pairs: CurrencyPairs,
    failures: Mutex<HashMap<MockOp, (u16, String)>>,
    next_recipient_id: AtomicI64,
    next_transfer_id: AtomicI64,
    next_quote_seq: AtomicI64,
    calls: Mutex<Vec<MockCall>>,
}

impl MockPaymentClient {
    /// Create a mock with neutral defaults: no profiles, rate 1, fund OK,
    /// empty pair table
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
            rate: Decimal::ONE,
            fund: Fund::ok(),
            requirements: vec![RequirementType {
                recipient_type: "iban".to_string(),
                title: "IBAN".to_string(),
                fields: Vec::new(),
            }],
            pairs: CurrencyPairs::default(),
            failures: Mutex::new(HashMap::new()),
            next_recipient_id: AtomicI64::new(1),
            next_transfer_id: AtomicI64::new(1),
            next_quote_seq: AtomicI64::new(1),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Profiles returned by `get_profiles`
    pub fn with_profiles(mut self, profiles: Vec<Profile>) -> Self {
        self.profiles = profiles;
        self
    }

    /// Exchange rate used for temporary and final quotes
    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.rate = rate;
        self
    }

    /// Result returned by `fund_transfer`
    pub fn with_fund(mut self, fund: Fund) -> Self {
        self.fund = fund;
        self
    }

    /// Schema returned by `get_account_requirements`
    pub fn with_requirements(mut self, requirements: Vec<RequirementType>) -> Self {
        self.requirements = requirements;
        self
    }

    /// Full pair table returned by `get_currency_pairs`
    pub fn with_currency_pairs(mut self, pairs: CurrencyPairs) -> Self {
        self.pairs = pairs;
        self
    }

    /// Add one source currency with its payable targets to the pair table
    pub fn with_pairs(mut self, source: &str, targets: &[&str]) -> Self {
        self.pairs.source_currencies.push(SourceCurrencyPairs {
            currency_code: source.to_string(),
            target_currencies: targets
                .iter()
                .map(|c| TargetCurrency {
                    currency_code: c.to_string(),
                })
                .collect(),
        });
        self
    }

    /// Make one operation fail with an API error
    pub fn with_api_failure(self, op: MockOp, status: u16, message: &str) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert(op, (status, message.to_string()));
        self
    }

    /// Every upstream call recorded so far, in order
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    /// How many times an operation was called
    pub fn count(&self, op: MockOp) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.op() == op)
            .count()
    }

    /// Final-quote requests the engine sent, in order
    pub fn quote_requests(&self) -> Vec<QuoteRequest> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|c| match c {
                MockCall::CreateQuote(r) => Some(r.clone()),
                _ => None,
            })
            .collect()
    }

    /// Transfer requests the engine sent, in order
    pub fn transfer_requests(&self) -> Vec<TransferRequest> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|c| match c {
                MockCall::CreateTransfer(r) => Some(r.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: MockCall) -> Result<(), ClientError> {
        let op = call.op();
        self.calls.lock().unwrap().push(call);
        if let Some((status, message)) = self.failures.lock().unwrap().get(&op) {
            return Err(ClientError::Api {
                status: *status,
                message: message.clone(),
            });
        }
        Ok(())
    }
}

impl Default for MockPaymentClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemotePaymentClient for MockPaymentClient {
    async fn get_profiles(&self, _token: &str) -> Result<Vec<Profile>, ClientError> {
        self.record(MockCall::GetProfiles)?;
        Ok(self.profiles.clone())
    }

    async fn get_temporary_quote(
        &self,
        _token: &str,
        request: TemporaryQuoteRequest,
    ) -> Result<TemporaryQuote, ClientError> {
        self.record(MockCall::GetTemporaryQuote(request.clone()))?;
        Ok(TemporaryQuote {
            rate: self.rate,
            source_currency: request.source_currency,
            target_currency: request.target_currency,
            target_amount: request.target_amount,
        })
    }

    async fn create_quote(&self, _token: &str, request: QuoteRequest) -> Result<Quote, ClientError> {
        self.record(MockCall::CreateQuote(request.clone()))?;
        let seq = self.next_quote_seq.fetch_add(1, Ordering::SeqCst);
        Ok(Quote {
            id: QuoteId(format!("quote-{seq}")),
            rate: self.rate,
            source_currency: request.source_currency,
            target_currency: request.target_currency,
            target_amount: request.target_amount,
        })
    }

    async fn create_recipient_account(
        &self,
        _token: &str,
        request: RecipientRequest,
    ) -> Result<Recipient, ClientError> {
        self.record(MockCall::CreateRecipientAccount(request.clone()))?;
        let id = self.next_recipient_id.fetch_add(1, Ordering::SeqCst);
        Ok(Recipient {
            id: super::RecipientId(id),
            currency: request.currency,
        })
    }

    async fn create_transfer(
        &self,
        _token: &str,
        request: TransferRequest,
    ) -> Result<Transfer, ClientError> {
        self.record(MockCall::CreateTransfer(request))?;
        let id = self.next_transfer_id.fetch_add(1, Ordering::SeqCst);
        Ok(Transfer {
            id: TransferId(id),
            status: "incoming_payment_waiting".to_string(),
        })
    }

    async fn fund_transfer(
        &self,
        _token: &str,
        profile_id: ProfileId,
        transfer_id: TransferId,
    ) -> Result<Fund, ClientError> {
        self.record(MockCall::FundTransfer {
            profile_id,
            transfer_id,
        })?;
        Ok(self.fund.clone())
    }

    async fn get_account_requirements(
        &self,
        _token: &str,
        quote_id: &QuoteId,
    ) -> Result<Vec<RequirementType>, ClientError> {
        self.record(MockCall::GetAccountRequirements(quote_id.clone()))?;
        Ok(self.requirements.clone())
    }

    async fn get_currency_pairs(&self, _token: &str) -> Result<CurrencyPairs, ClientError> {
        self.record(MockCall::GetCurrencyPairs)?;
        Ok(self.pairs.clone())
    }
}
