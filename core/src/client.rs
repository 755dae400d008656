//! Stateless HTTP request builder and response parser for the projects API.
//!
//! # Design
//! `ProjectApi` carries no state. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and, where the response matters, a
//! `parse_*` method that consumes an `HttpResponse`. Create, update and
//! delete responses are never inspected, so they have no parser.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Project, ProjectRecord};

/// Request builder and response parser for `2.0/teams/{owner}/projects`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectApi;

impl ProjectApi {
    pub fn build_create_project(&self, record: &ProjectRecord) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&record.to_wire()).map_err(ApiError::Serialization)?;
        Ok(HttpRequest::json(
            HttpMethod::Post,
            projects_path(&record.owner),
            body,
        ))
    }

    pub fn build_read_project(&self, record: &ProjectRecord) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, project_path(&record.owner, &record.key))
    }

    pub fn build_update_project(&self, record: &ProjectRecord) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&record.to_wire()).map_err(ApiError::Serialization)?;
        Ok(HttpRequest::json(
            HttpMethod::Put,
            project_path(&record.owner, &record.key),
            body,
        ))
    }

    pub fn build_delete_project(&self, record: &ProjectRecord) -> HttpRequest {
        HttpRequest::new(HttpMethod::Delete, project_path(&record.owner, &record.key))
    }

    /// `Some` only for status 200; every other status reads as absent.
    pub fn parse_read_project(&self, response: HttpResponse) -> Result<Option<Project>, ApiError> {
        if response.status != 200 {
            return Ok(None);
        }
        serde_json::from_str(&response.body)
            .map(Some)
            .map_err(ApiError::Deserialization)
    }
}

fn projects_path(owner: &str) -> String {
    format!("2.0/teams/{owner}/projects/")
}

fn project_path(owner: &str, key: &str) -> String {
    format!("2.0/teams/{owner}/projects/{key}")
}
