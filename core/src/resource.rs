//! Lifecycle operations for the project resource.
//!
//! # Design
//! `Resource` is the four-operation surface a host orchestrator drives.
//! `ProjectResource` implements it by pairing `ProjectApi` requests with an
//! `HttpClient`. Create and update finish with a reconciliation read so the
//! record reflects server-side defaults.
//!
//! Read follows a silent-absence policy: any status other than 200 leaves
//! the record untouched and returns `Ok`. A deleted project and a transient
//! server error therefore look the same to the caller.

use tracing::{debug, info};

use crate::client::ProjectApi;
use crate::error::ApiError;
use crate::http::{HttpClient, HttpRequest, HttpResponse};
use crate::types::ProjectRecord;

/// Create/read/update/delete hooks for one kind of managed record.
pub trait Resource {
    type Record;

    fn create(&self, record: &mut Self::Record) -> Result<(), ApiError>;
    fn read(&self, record: &mut Self::Record) -> Result<(), ApiError>;
    fn update(&self, record: &mut Self::Record) -> Result<(), ApiError>;
    fn delete(&self, record: &Self::Record) -> Result<(), ApiError>;
}

/// Project resource backed by an `HttpClient`.
#[derive(Debug, Clone)]
pub struct ProjectResource<C> {
    client: C,
    api: ProjectApi,
}

impl<C: HttpClient> ProjectResource<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            api: ProjectApi,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.client.execute(request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}

impl<C: HttpClient> Resource for ProjectResource<C> {
    type Record = ProjectRecord;

    fn create(&self, record: &mut ProjectRecord) -> Result<(), ApiError> {
        record.validate()?;
        let request = self.api.build_create_project(record)?;
        self.send(request)?;

        let id = record.identifier();
        info!(%id, "project created");
        record.id = Some(id);
        self.read(record)
    }

    fn read(&self, record: &mut ProjectRecord) -> Result<(), ApiError> {
        record.validate_identity()?;
        let response = self.send(self.api.build_read_project(record))?;
        let status = response.status;
        match self.api.parse_read_project(response)? {
            Some(project) => record.apply(project),
            None => debug!(
                status,
                id = %record.identifier(),
                "project not returned, keeping local state"
            ),
        }
        Ok(())
    }

    fn update(&self, record: &mut ProjectRecord) -> Result<(), ApiError> {
        record.validate()?;
        let request = self.api.build_update_project(record)?;
        self.send(request)?;
        self.read(record)
    }

    fn delete(&self, record: &ProjectRecord) -> Result<(), ApiError> {
        record.validate_identity()?;
        let response = self.send(self.api.build_delete_project(record))?;
        info!(id = %record.identifier(), status = response.status, "project delete sent");
        Ok(())
    }
}
