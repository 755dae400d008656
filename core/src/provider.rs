//! Host binding: untyped JSON state in, untyped JSON state out.
//!
//! # Design
//! The orchestrator hands over state as `serde_json::Value` keyed by
//! resource type. `ProjectProvider` decodes it into a `ProjectRecord` once,
//! runs the matching `Resource` operation and encodes the result. Nothing
//! here talks HTTP directly.

use serde_json::Value;
use tracing::warn;

use crate::error::{ApiError, ConfigError};
use crate::http::HttpClient;
use crate::resource::{ProjectResource, Resource};
use crate::schema::{project_schema, ResourceSchema};
use crate::types::ProjectRecord;

pub const PROJECT_RESOURCE_TYPE: &str = "bitbucket_project";

/// Dispatches host lifecycle calls to the project resource.
#[derive(Debug, Clone)]
pub struct ProjectProvider<C> {
    resource: ProjectResource<C>,
}

impl<C: HttpClient> ProjectProvider<C> {
    pub fn new(client: C) -> Self {
        Self {
            resource: ProjectResource::new(client),
        }
    }

    pub fn resources(&self) -> Vec<ResourceSchema> {
        vec![project_schema()]
    }

    pub fn create(&self, resource_type: &str, planned: Value) -> Result<Value, ApiError> {
        check_type(resource_type)?;
        let mut record = decode_state(planned)?;
        self.resource.create(&mut record)?;
        encode_state(&record)
    }

    pub fn read(&self, resource_type: &str, current: Value) -> Result<Value, ApiError> {
        check_type(resource_type)?;
        let mut record = decode_state(current)?;
        self.resource.read(&mut record)?;
        encode_state(&record)
    }

    /// Apply `planned` in place. Owner and key identify the project and
    /// cannot change here; the host has to replace the resource instead.
    pub fn update(
        &self,
        resource_type: &str,
        prior: Value,
        planned: Value,
    ) -> Result<Value, ApiError> {
        check_type(resource_type)?;
        let prior = decode_state(prior)?;
        let mut record = decode_state(planned)?;
        if record.owner != prior.owner {
            return Err(ConfigError::ImmutableField("owner").into());
        }
        if record.key != prior.key {
            return Err(ConfigError::ImmutableField("key").into());
        }
        if record.id.is_none() {
            record.id = prior.id;
        }
        self.resource.update(&mut record)?;
        encode_state(&record)
    }

    pub fn delete(&self, resource_type: &str, current: Value) -> Result<(), ApiError> {
        check_type(resource_type)?;
        let record = decode_state(current)?;
        self.resource.delete(&record)
    }

    /// Build state for an existing project from its `owner/key` identifier.
    ///
    /// A project the server does not return comes back with an empty name;
    /// the host should treat that as "nothing to import".
    pub fn import(&self, resource_type: &str, id: &str) -> Result<Value, ApiError> {
        check_type(resource_type)?;
        let mut record = ProjectRecord::from_identifier(id)?;
        self.resource.read(&mut record)?;
        if record.name.is_empty() {
            warn!(%id, "project to import was not returned by the server");
        }
        encode_state(&record)
    }
}

fn check_type(resource_type: &str) -> Result<(), ConfigError> {
    if resource_type == PROJECT_RESOURCE_TYPE {
        Ok(())
    } else {
        Err(ConfigError::UnknownResourceType(resource_type.to_string()))
    }
}

fn decode_state(state: Value) -> Result<ProjectRecord, ConfigError> {
    serde_json::from_value(state).map_err(|e| ConfigError::InvalidState(e.to_string()))
}

fn encode_state(record: &ProjectRecord) -> Result<Value, ApiError> {
    serde_json::to_value(record).map_err(ApiError::Serialization)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::ScriptedClient;

    fn planned() -> Value {
        json!({
            "owner": "team1",
            "name": "Demo",
            "key": "DEMO",
            "description": "x",
        })
    }

    #[test]
    fn create_returns_state_with_id() {
        let provider = ProjectProvider::new(ScriptedClient::new().respond(201, "").respond(
            200,
            r#"{"name":"Demo","key":"DEMO","is_private":true,"description":"x"}"#,
        ));
        let state = provider.create(PROJECT_RESOURCE_TYPE, planned()).unwrap();
        assert_eq!(
            state,
            json!({
                "id": "team1/DEMO",
                "owner": "team1",
                "name": "Demo",
                "key": "DEMO",
                "description": "x",
                "is_private": true,
            })
        );
    }

    #[test]
    fn unknown_resource_type_is_rejected() {
        let provider = ProjectProvider::new(ScriptedClient::new());
        let err = provider.create("bitbucket_repository", planned()).unwrap_err();
        assert!(matches!(
            err,
            ApiError::InvalidConfig(ConfigError::UnknownResourceType(ref t)) if t == "bitbucket_repository"
        ));
        assert!(provider.resource.client().requests().is_empty());
    }

    #[test]
    fn malformed_state_is_rejected_before_any_request() {
        let provider = ProjectProvider::new(ScriptedClient::new());
        let err = provider
            .create(PROJECT_RESOURCE_TYPE, json!({"owner": 7}))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidConfig(ConfigError::InvalidState(_))));

        let err = provider
            .create(PROJECT_RESOURCE_TYPE, json!({"owner": "team1", "key": "DEMO"}))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidConfig(ConfigError::MissingField("name"))));
        assert!(provider.resource.client().requests().is_empty());
    }

    #[test]
    fn update_refuses_key_change() {
        let provider = ProjectProvider::new(ScriptedClient::new());
        let mut changed = planned();
        changed["key"] = json!("OTHER");
        let err = provider
            .update(PROJECT_RESOURCE_TYPE, planned(), changed)
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidConfig(ConfigError::ImmutableField("key"))));
        assert!(provider.resource.client().requests().is_empty());
    }

    #[test]
    fn update_refuses_owner_change() {
        let provider = ProjectProvider::new(ScriptedClient::new());
        let mut changed = planned();
        changed["owner"] = json!("team2");
        let err = provider
            .update(PROJECT_RESOURCE_TYPE, planned(), changed)
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidConfig(ConfigError::ImmutableField("owner"))));
    }

    #[test]
    fn update_carries_id_from_prior_state() {
        let provider = ProjectProvider::new(ScriptedClient::new().respond(200, "").respond(
            200,
            r#"{"name":"Demo 2","key":"DEMO","is_private":true}"#,
        ));
        let mut prior = planned();
        prior["id"] = json!("team1/DEMO");
        let mut next = planned();
        next["name"] = json!("Demo 2");

        let state = provider.update(PROJECT_RESOURCE_TYPE, prior, next).unwrap();
        assert_eq!(state["id"], "team1/DEMO");
        assert_eq!(state["name"], "Demo 2");
        assert_eq!(state["description"], "");
        assert_eq!(provider.resource.client().requests()[0].method, HttpMethod::Put);
    }

    #[test]
    fn read_of_missing_project_returns_state_unchanged() {
        let provider = ProjectProvider::new(ScriptedClient::new().respond(404, ""));
        let mut current = planned();
        current["id"] = json!("team1/DEMO");
        let state = provider.read(PROJECT_RESOURCE_TYPE, current.clone()).unwrap();
        assert_eq!(state["name"], "Demo");
        assert_eq!(state["id"], "team1/DEMO");
    }

    #[test]
    fn delete_sends_one_request() {
        let provider = ProjectProvider::new(ScriptedClient::new().respond(204, ""));
        provider.delete(PROJECT_RESOURCE_TYPE, planned()).unwrap();
        let requests = provider.resource.client().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Delete);
    }

    #[test]
    fn import_reads_project_by_identifier() {
        let provider = ProjectProvider::new(ScriptedClient::new().respond(
            200,
            r#"{"name":"Demo","key":"DEMO","is_private":false,"description":"x"}"#,
        ));
        let state = provider.import(PROJECT_RESOURCE_TYPE, "team1/DEMO").unwrap();
        assert_eq!(state["owner"], "team1");
        assert_eq!(state["name"], "Demo");
        assert_eq!(state["is_private"], false);
        assert_eq!(
            provider.resource.client().requests()[0].path,
            "2.0/teams/team1/projects/DEMO"
        );
    }

    #[test]
    fn import_rejects_malformed_identifier() {
        let provider = ProjectProvider::new(ScriptedClient::new());
        let err = provider.import(PROJECT_RESOURCE_TYPE, "DEMO").unwrap_err();
        assert!(matches!(
            err,
            ApiError::InvalidConfig(ConfigError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn resources_lists_the_project_schema() {
        let provider = ProjectProvider::new(ScriptedClient::new());
        let resources = provider.resources();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].type_name, PROJECT_RESOURCE_TYPE);
    }
}
