//! Declarative attribute schema exposed to the host.

use serde::Serialize;
use serde_json::Value;

/// Value type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: AttributeType,
    pub required: bool,
    /// Set by the resource rather than the user.
    pub computed: bool,
    /// A change requires destroying and recreating the resource.
    pub force_new: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl Attribute {
    fn required(name: &'static str, kind: AttributeType) -> Self {
        Self {
            name,
            kind,
            required: true,
            computed: false,
            force_new: false,
            default: None,
        }
    }

    fn optional(name: &'static str, kind: AttributeType) -> Self {
        Self {
            required: false,
            ..Self::required(name, kind)
        }
    }

    fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceSchema {
    pub type_name: &'static str,
    pub attributes: Vec<Attribute>,
}

impl ResourceSchema {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// Schema of `bitbucket_project`.
pub fn project_schema() -> ResourceSchema {
    ResourceSchema {
        type_name: crate::provider::PROJECT_RESOURCE_TYPE,
        attributes: vec![
            Attribute {
                computed: true,
                ..Attribute::optional("id", AttributeType::String)
            },
            Attribute::required("owner", AttributeType::String).force_new(),
            Attribute::required("name", AttributeType::String),
            Attribute::required("key", AttributeType::String).force_new(),
            Attribute::optional("description", AttributeType::String),
            Attribute::optional("is_private", AttributeType::Bool).with_default(Value::Bool(true)),
        ],
    }
}
