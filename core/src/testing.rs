//! In-memory transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use tokio::sync::Notify;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
    gate: Option<(usize, Notify)>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Hold the response to the `index`-th request (0-based) until
    /// `release` is called.
    pub(crate) fn gated(index: usize) -> Self {
        Self {
            gate: Some((index, Notify::new())),
            ..Self::default()
        }
    }

    pub(crate) fn release(&self) {
        if let Some((_, notify)) = &self.gate {
            notify.notify_one();
        }
    }

    pub(crate) fn push(&self, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub(crate) fn push_ok(&self) {
        self.push(200, r#"{"data":"ok"}"#);
    }

    pub(crate) fn push_list(&self, todos: &[(&str, &str)]) {
        let data: Vec<_> = todos
            .iter()
            .map(|(id, item)| serde_json::json!({"id": id, "item": item}))
            .collect();
        self.push(200, &serde_json::json!({ "data": data }).to_string());
    }

    pub(crate) fn push_failure(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError::new(message)));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn request_body(&self, index: usize) -> serde_json::Value {
        let requests = self.requests.borrow();
        serde_json::from_str(requests[index].body.as_deref().unwrap()).unwrap()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let index = {
            let mut requests = self.requests.borrow_mut();
            requests.push(request);
            requests.len() - 1
        };
        // Responses pair with requests in send order, even when one is held.
        let response = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted response left")));
        if let Some((gated, notify)) = &self.gate {
            if *gated == index {
                notify.notified().await;
            }
        }
        response
    }
}
