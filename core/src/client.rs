//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each endpoint is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//!
//! Reads and writes are parsed asymmetrically. A list response whose `data`
//! field is missing or malformed degrades to an empty list, while every
//! mutation reports a non-2xx status as an error. Mutation response bodies
//! are never inspected because the list is always refetched afterwards.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{EditTodo, NewTodo, RemoveTodo, Todo};

/// Characters escaped when an id is placed in a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Default base path; a browser host resolves it against its own origin.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl Default for TodoClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todo", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, format!("{}/todo", self.base_url), input)
    }

    pub fn build_update_todo(&self, id: &str, input: &EditTodo) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, self.item_path(id), input)
    }

    pub fn build_delete_todo(&self, id: &str) -> Result<HttpRequest, ApiError> {
        let body = RemoveTodo { id: id.to_string() };
        json_request(HttpMethod::Delete, self.item_path(id), &body)
    }

    /// Parse a `GET /todo` response into the list to render.
    ///
    /// Only a transport-level failure, a non-2xx status, or a body that is
    /// not JSON is an error. Anything else without a well-formed `data`
    /// array yields an empty list.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response)?;
        let mut body: serde_json::Value = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;

        let Some(data) = body.get_mut("data").map(serde_json::Value::take) else {
            tracing::warn!("list response has no data field; treating as empty");
            return Ok(Vec::new());
        };
        match serde_json::from_value::<Vec<Todo>>(data) {
            Ok(todos) => Ok(todos),
            Err(e) => {
                tracing::warn!("list response data is not a todo array ({e}); treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Parse the response of a POST, PUT or DELETE. The body is ignored.
    pub fn parse_mutation(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}/todo/{}", self.base_url, utf8_percent_encode(id, PATH_SEGMENT))
    }
}

fn json_request<B: Serialize>(
    method: HttpMethod,
    path: String,
    body: &B,
) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
