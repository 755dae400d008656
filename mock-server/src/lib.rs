//! In-memory stand-in for the Bitbucket Cloud projects endpoints.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    #[serde(rename = "type")]
    pub kind: String,
    pub uuid: String,
    pub name: String,
    pub key: String,
    pub description: String,
    pub is_private: bool,
}

#[derive(Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub key: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_private: bool,
}

#[derive(Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub key: Option<String>,
    pub description: Option<String>,
    pub is_private: Option<bool>,
}

/// Projects keyed by `(owner, key)`.
pub type Db = Arc<RwLock<HashMap<(String, String), Project>>>;

pub fn app() -> Router {
    app_with_auth(None)
}

/// Router that answers 401 unless every request carries exactly the given
/// `Authorization` header value. `None` accepts everything.
pub fn app_with_auth(authorization: Option<String>) -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/2.0/teams/{owner}/projects/", post(create_project))
        .route(
            "/2.0/teams/{owner}/projects/{key}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .with_state(db)
        .layer(middleware::from_fn_with_state(authorization, require_auth))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_auth(
    listener: TcpListener,
    authorization: Option<String>,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_auth(authorization)).await
}

async fn require_auth(
    State(expected): State<Option<String>>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if let Some(expected) = expected {
        let given = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        if given != Some(expected.as_str()) {
            return Err(StatusCode::UNAUTHORIZED);
        }
    }
    Ok(next.run(request).await)
}

async fn create_project(
    State(db): State<Db>,
    Path(owner): Path<String>,
    Json(input): Json<CreateProject>,
) -> Result<(StatusCode, Json<Project>), StatusCode> {
    let mut projects = db.write().await;
    let id = (owner, input.key.clone());
    if input.key.is_empty() || projects.contains_key(&id) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let project = Project {
        kind: "project".to_string(),
        uuid: format!("{{{}}}", Uuid::new_v4()),
        name: input.name,
        key: input.key,
        description: input.description,
        is_private: input.is_private,
    };
    info!(owner = %id.0, key = %id.1, "project created");
    projects.insert(id, project.clone());
    Ok((StatusCode::CREATED, Json(project)))
}

async fn get_project(
    State(db): State<Db>,
    Path((owner, key)): Path<(String, String)>,
) -> Result<Json<Project>, StatusCode> {
    let projects = db.read().await;
    projects
        .get(&(owner, key))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_project(
    State(db): State<Db>,
    Path((owner, key)): Path<(String, String)>,
    Json(input): Json<UpdateProject>,
) -> Result<Json<Project>, StatusCode> {
    let mut projects = db.write().await;
    let project = projects
        .get_mut(&(owner, key))
        .ok_or(StatusCode::NOT_FOUND)?;
    if input.key.is_some_and(|k| k != project.key) {
        return Err(StatusCode::BAD_REQUEST);
    }
    if let Some(name) = input.name {
        project.name = name;
    }
    project.description = input.description.unwrap_or_default();
    project.is_private = input.is_private.unwrap_or_default();
    Ok(Json(project.clone()))
}

async fn delete_project(
    State(db): State<Db>,
    Path((owner, key)): Path<(String, String)>,
) -> StatusCode {
    let mut projects = db.write().await;
    match projects.remove(&(owner, key)) {
        Some(project) => {
            info!(key = %project.key, "project deleted");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}
