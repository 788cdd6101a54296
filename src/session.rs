//! Session state for one page view: the playground form, the registration
//! form, and whatever request is currently outstanding.
//!
//! Operations are split into `begin_*` and `finish_*` so a UI can release its
//! borrow of the session while the request is awaited. Only one operation may
//! be outstanding; `begin_*` refuses a second one before any request exists.
//! Every accepted operation gets a [`Ticket`], and a `finish_*` call whose
//! ticket is not the outstanding one is dropped.

use serde_json::Value;

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::{RequestError, SessionError};
use crate::request::{ApiRequest, Transport, send};
use crate::response::ApiResult;

/// Target URL the playground starts with.
pub const DEFAULT_TARGET_URL: &str = "https://example.com";

pub type Ticket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Test,
    Registration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    ticket: Ticket,
    operation: Operation,
}

/// An accepted operation: the request to send and the ticket to settle it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    pub ticket: Ticket,
    pub request: ApiRequest,
}

/// What the registration card should tell the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationNotice {
    /// Key copied into the playground.
    KeyIssued(String),
    /// The server answered without a key but with an error message.
    Rejected(String),
    /// Transport or decode failure.
    Failed(String),
    /// The server answered with neither a key nor an error.
    NoKey,
    /// Completion for an operation that is no longer outstanding.
    Stale,
}

impl RegistrationNotice {
    /// Text for the blocking prompt, if one should be shown.
    pub fn message(&self) -> Option<String> {
        match self {
            RegistrationNotice::KeyIssued(_) => {
                Some("API Key generated! It has been filled in the test section.".to_string())
            }
            RegistrationNotice::Rejected(msg) | RegistrationNotice::Failed(msg) => {
                Some(format!("Error generating API key: {}", msg))
            }
            RegistrationNotice::NoKey | RegistrationNotice::Stale => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub endpoint: Endpoint,
    pub api_key: String,
    pub target_url: String,
    pub name: String,
    pub email: String,
    result: Option<ApiResult>,
    in_flight: Option<InFlight>,
    last_ticket: Ticket,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            api_key: String::new(),
            target_url: DEFAULT_TARGET_URL.to_string(),
            name: String::new(),
            email: String::new(),
            result: None,
            in_flight: None,
            last_ticket: 0,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Operation currently awaiting its response, if any.
    pub fn in_flight(&self) -> Option<Operation> {
        self.in_flight.map(|f| f.operation)
    }

    pub fn result(&self) -> Option<&ApiResult> {
        self.result.as_ref()
    }

    /// Changing the endpoint only affects the next test.
    pub fn select_endpoint(&mut self, endpoint: Endpoint) {
        self.endpoint = endpoint;
    }

    fn accept(&mut self, operation: Operation) -> Ticket {
        self.last_ticket += 1;
        self.in_flight = Some(InFlight {
            ticket: self.last_ticket,
            operation,
        });
        self.last_ticket
    }

    /// Clear the outstanding operation if `ticket` matches it.
    fn settle(&mut self, ticket: Ticket, operation: Operation) -> bool {
        match self.in_flight {
            Some(f) if f.ticket == ticket && f.operation == operation => {
                self.in_flight = None;
                true
            }
            _ => {
                log::warn!("dropping stale {:?} completion (ticket {})", operation, ticket);
                false
            }
        }
    }

    /// Validate the playground form and start a test.
    ///
    /// On success the loading flag is set and the previous result cleared.
    pub fn begin_test(&mut self, config: &ClientConfig) -> Result<Pending, SessionError> {
        if self.loading() {
            return Err(SessionError::Busy);
        }
        let api_key = self.api_key.trim();
        if api_key.is_empty() {
            return Err(SessionError::MissingApiKey);
        }

        let request = ApiRequest::scrape(config, self.endpoint, api_key, &self.target_url);
        self.result = None;
        let ticket = self.accept(Operation::Test);
        Ok(Pending { ticket, request })
    }

    /// Store the outcome of a test. Returns `false` if the ticket was stale.
    pub fn finish_test(&mut self, ticket: Ticket, outcome: Result<Value, RequestError>) -> bool {
        if !self.settle(ticket, Operation::Test) {
            return false;
        }

        let result = match outcome {
            Ok(value) => ApiResult::new(value),
            Err(e) => {
                let mut message = e.to_string();
                if message.trim().is_empty() {
                    message = "request failed".to_string();
                }
                ApiResult::failure(message)
            }
        };
        log::info!(
            "test {} settled: {}",
            ticket,
            result.status().label()
        );
        self.result = Some(result);
        true
    }

    /// Validate the registration form and start a registration.
    pub fn begin_registration(&mut self, config: &ClientConfig) -> Result<Pending, SessionError> {
        if self.loading() {
            return Err(SessionError::Busy);
        }
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(SessionError::MissingRegistrant);
        }

        let request = ApiRequest::register(config, name, email);
        let ticket = self.accept(Operation::Registration);
        Ok(Pending { ticket, request })
    }

    /// Apply a registration reply; an issued key lands in the API-key field.
    pub fn finish_registration(
        &mut self,
        ticket: Ticket,
        outcome: Result<Value, RequestError>,
    ) -> RegistrationNotice {
        if !self.settle(ticket, Operation::Registration) {
            return RegistrationNotice::Stale;
        }

        match outcome {
            Ok(value) => {
                let reply = ApiResult::new(value);
                if let Some(key) = reply.api_key() {
                    log::info!("registration {} issued an API key", ticket);
                    self.api_key = key.to_string();
                    RegistrationNotice::KeyIssued(key.to_string())
                } else if let Some(msg) = reply.error_message() {
                    RegistrationNotice::Rejected(msg.to_string())
                } else {
                    log::warn!("registration reply carried no api_key: {}", reply.value());
                    RegistrationNotice::NoKey
                }
            }
            Err(e) => RegistrationNotice::Failed(e.to_string()),
        }
    }

    /// Run a whole playground test against `transport`.
    pub async fn run_test<T: Transport>(
        &mut self,
        config: &ClientConfig,
        transport: &T,
    ) -> Result<ApiResult, SessionError> {
        let pending = self.begin_test(config)?;
        let outcome = send(transport, &pending.request).await;
        self.finish_test(pending.ticket, outcome);
        Ok(self
            .result
            .clone()
            .unwrap_or_else(|| ApiResult::failure("request failed")))
    }

    /// Run a whole registration against `transport`.
    pub async fn run_registration<T: Transport>(
        &mut self,
        config: &ClientConfig,
        transport: &T,
    ) -> Result<RegistrationNotice, SessionError> {
        let pending = self.begin_registration(config)?;
        let outcome = send(transport, &pending.request).await;
        Ok(self.finish_registration(pending.ticket, outcome))
    }
}
