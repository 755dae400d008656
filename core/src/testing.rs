//! Scripted `HttpClient` for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::ApiError;
use crate::http::{HttpClient, HttpRequest, HttpResponse};

/// Replays queued outcomes in order and records every request it receives.
#[derive(Default)]
pub(crate) struct ScriptedClient {
    outcomes: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    pub(crate) requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        self.outcomes.borrow_mut().push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }));
        self
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.outcomes
            .borrow_mut()
            .push_back(Err(ApiError::Transport(message.to_string())));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl HttpClient for ScriptedClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
    }
}
