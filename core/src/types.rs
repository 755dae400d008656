//! Project record and wire DTO.
//!
//! # Design
//! `ProjectRecord` is the typed configuration the host hands over, populated
//! once at the boundary. `Project` is what travels over the wire: `owner`
//! only ever appears in URL paths, never in a body. Empty strings and `false`
//! are left out of serialized requests; every field is optional on decode
//! and unknown server fields (`uuid`, `links`, ...) are ignored.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// Project body as sent to and returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_private: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A managed project: the wire fields plus its owner and identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRecord {
    /// `owner/key` once created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub owner: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default = "default_is_private", deserialize_with = "null_as_private")]
    pub is_private: bool,
}

impl ProjectRecord {
    /// A private project with no description.
    pub fn new(owner: impl Into<String>, name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            id: None,
            owner: owner.into(),
            name: name.into(),
            key: key.into(),
            description: String::new(),
            is_private: true,
        }
    }

    /// Recover owner and key from an `owner/key` identifier.
    pub fn from_identifier(id: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidIdentifier(id.to_string());
        let (owner, key) = id.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || key.is_empty() || key.contains('/') {
            return Err(invalid());
        }
        Ok(Self {
            id: Some(id.to_string()),
            owner: owner.to_string(),
            name: String::new(),
            key: key.to_string(),
            description: String::new(),
            is_private: true,
        })
    }

    pub fn identifier(&self) -> String {
        format!("{}/{}", self.owner, self.key)
    }

    /// Required fields must be non-empty before anything goes on the wire.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_identity()?;
        if self.name.is_empty() {
            return Err(ConfigError::MissingField("name"));
        }
        Ok(())
    }

    /// Owner and key are all a read or delete needs. Both are single path
    /// segments, so neither may contain `/`.
    pub fn validate_identity(&self) -> Result<(), ConfigError> {
        if self.owner.is_empty() {
            return Err(ConfigError::MissingField("owner"));
        }
        if self.key.is_empty() {
            return Err(ConfigError::MissingField("key"));
        }
        if self.owner.contains('/') || self.key.contains('/') {
            return Err(ConfigError::InvalidIdentifier(self.identifier()));
        }
        Ok(())
    }

    pub fn to_wire(&self) -> Project {
        Project {
            name: self.name.clone(),
            key: self.key.clone(),
            is_private: self.is_private,
            description: self.description.clone(),
        }
    }

    /// Overwrite local fields with the server's view. Owner is not part of
    /// the server representation and is left alone.
    pub fn apply(&mut self, project: Project) {
        self.name = project.name;
        self.is_private = project.is_private;
        self.description = project.description;
        self.key = project.key;
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn default_is_private() -> bool {
    true
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_private<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_is_private))
}
