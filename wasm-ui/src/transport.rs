//! Browser `fetch` transport.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crawlic::{ApiRequest, ClientConfig, RequestError, Transport};
use gloo::net::http::Request;
use gloo::timers::callback::Timeout;
use web_sys::AbortController;

/// Sends requests with `fetch`, aborting them once the timeout elapses.
#[derive(Debug, Clone, Copy)]
pub struct FetchTransport {
    timeout: Option<Duration>,
}

impl FetchTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            timeout: config.timeout,
        }
    }
}

impl Transport for FetchTransport {
    async fn post(&self, request: &ApiRequest) -> Result<String, RequestError> {
        let controller = AbortController::new()
            .map_err(|e| RequestError::Transport(format!("{:?}", e)))?;
        let timed_out = Rc::new(Cell::new(false));

        // Dropping the handle at the end of this call cancels the timer.
        let _deadline = self.timeout.map(|timeout| {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, move || {
                timed_out.set(true);
                controller.abort();
            })
        });

        let signal = controller.signal();
        let mut builder = Request::post(&request.url).abort_signal(Some(&signal));
        for (name, value) in request.headers() {
            builder = builder.header(name, &value);
        }

        let outcome = async {
            let response = builder.body(request.body.clone())?.send().await?;
            log::debug!("{} answered {}", request.url, response.status());
            response.text().await
        }
        .await;

        outcome.map_err(|e| match self.timeout {
            Some(timeout) if timed_out.get() => RequestError::Timeout(timeout),
            _ => RequestError::Transport(e.to_string()),
        })
    }
}
