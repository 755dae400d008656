//! Bitbucket project resource.
//!
//! # Overview
//! Maps create/read/update/delete of a declarative "project" record onto the
//! Bitbucket Cloud 2.0 REST API. A record is serialized to JSON, sent to
//! `2.0/teams/{owner}/projects[/{key}]`, and refreshed from the server's
//! answer.
//!
//! # Design
//! - `ProjectApi` is stateless: `build_*` produces plain-data requests,
//!   `parse_read_project` consumes plain-data responses.
//! - `HttpClient` is the only I/O seam. `UreqClient` is the stock
//!   implementation; tests script their own.
//! - `ProjectResource` implements the `Resource` lifecycle trait;
//!   `ProjectProvider` binds it to a host that speaks untyped JSON state.
//! - Non-200 reads leave the record unchanged and are not errors, and delete
//!   never looks at the response status.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod provider;
pub mod resource;
pub mod schema;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::ProjectApi;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError};
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use provider::{ProjectProvider, PROJECT_RESOURCE_TYPE};
pub use resource::{ProjectResource, Resource};
pub use schema::{project_schema, Attribute, AttributeType, ResourceSchema};
pub use transport::UreqClient;
pub use types::{Project, ProjectRecord};
