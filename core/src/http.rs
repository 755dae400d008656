//! HTTP transport types and the client seam used by the resource adapter.
//!
//! # Design
//! Requests and responses are plain data. `ProjectApi` builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network; an
//! `HttpClient` implementation performs the actual round-trip. Paths are
//! relative (`2.0/teams/...`) and the client decides which host they go to.
//!
//! All fields use owned types so values can be recorded, replayed and
//! compared in tests without lifetime concerns.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `ProjectApi::build_*` methods and handed to an `HttpClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// A request without headers or body.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// A request carrying a JSON body.
    pub fn json(method: HttpMethod, path: impl Into<String>, body: String) -> Self {
        Self {
            method,
            path: path.into(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }
}

/// An HTTP response described as plain data, body fully read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The externally supplied HTTP collaborator.
///
/// Implementations must return non-2xx responses as `Ok` values; only
/// failures to obtain a response at all (connection, TLS, body read) are
/// `Err`. Retries, pooling and timeouts are the implementation's business.
pub trait HttpClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;

    fn get(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.execute(HttpRequest::new(HttpMethod::Get, path))
    }

    fn post(&self, path: &str, body: String) -> Result<HttpResponse, ApiError> {
        self.execute(HttpRequest::json(HttpMethod::Post, path, body))
    }

    fn put(&self, path: &str, body: String) -> Result<HttpResponse, ApiError> {
        self.execute(HttpRequest::json(HttpMethod::Put, path, body))
    }

    fn delete(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.execute(HttpRequest::new(HttpMethod::Delete, path))
    }
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct Echo {
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl HttpClient for Echo {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.borrow_mut().push(request);
            Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: String::new(),
            })
        }
    }

    #[test]
    fn provided_methods_shape_requests() {
        let client = Echo {
            seen: RefCell::new(Vec::new()),
        };
        client.get("2.0/a").unwrap();
        client.post("2.0/b/", "{}".to_string()).unwrap();
        client.put("2.0/c", "{}".to_string()).unwrap();
        client.delete("2.0/d").unwrap();

        let seen = client.seen.borrow();
        assert_eq!(seen[0], HttpRequest::new(HttpMethod::Get, "2.0/a"));
        assert_eq!(seen[1].method, HttpMethod::Post);
        assert_eq!(seen[1].body.as_deref(), Some("{}"));
        assert_eq!(
            seen[1].headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        assert_eq!(seen[2].method, HttpMethod::Put);
        assert_eq!(seen[3], HttpRequest::new(HttpMethod::Delete, "2.0/d"));
    }

    #[test]
    fn references_are_clients_too() {
        let client = Echo {
            seen: RefCell::new(Vec::new()),
        };
        let by_ref = &client;
        by_ref.get("2.0/x").unwrap();
        assert_eq!(client.seen.borrow().len(), 1);
    }

    #[test]
    fn method_names_are_uppercase() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }
}
