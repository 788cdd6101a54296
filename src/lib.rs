//! # crawlic
//!
//! Client core for the Crawlic web scraping API, shared by the `crawlic`
//! command-line tool and the `wasm-ui` landing page.
//!
//! The API exposes three scraping endpoints behind a bearer key plus an open
//! registration endpoint that issues keys. A [`Session`] holds the playground
//! and registration forms for one page view and guarantees at most one
//! request is outstanding at a time.
//!
//! ## Example
//!
//! ```
//! use crawlic::{ClientConfig, Endpoint, Session};
//!
//! let config = ClientConfig::default();
//! let mut session = Session::new();
//! session.api_key = "abc123".to_string();
//! session.select_endpoint(Endpoint::DescribePage);
//!
//! let pending = session.begin_test(&config).unwrap();
//! assert_eq!(pending.request.url, "https://crawlic.ialae.com/api/describe-page");
//! assert!(session.loading());
//!
//! session.finish_test(pending.ticket, Ok(serde_json::json!({ "success": true })));
//! assert_eq!(session.result().unwrap().status().label(), "Success");
//! ```

pub mod config;
pub mod content;
pub mod endpoint;
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;
pub mod request;
pub mod response;
pub mod session;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use endpoint::Endpoint;
pub use error::{EndpointError, RequestError, SessionError};
pub use request::{ApiRequest, Transport, send};
pub use response::{ApiResult, Status};
pub use session::{Operation, Pending, RegistrationNotice, Session, Ticket};
