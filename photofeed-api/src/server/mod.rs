use axum::{
    Json, Router,
    extract::{
        FromRef, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use photofeed_store::store::{FeedStore, StoreError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::error;

mod body;
mod routes;

pub type ServerRouter = Router<ServerState>;

/// The feed is only ever written under the write lock, so actions are applied
/// one at a time in arrival order.
pub type SharedFeed = Arc<RwLock<FeedStore>>;

#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Viewer {
    pub username: Arc<str>,
}

#[derive(Clone, Debug, FromRef)]
pub struct ServerState {
    pub feed: SharedFeed,
    pub viewer: Viewer,
}

impl ServerState {
    #[must_use]
    pub fn new(feed: FeedStore, viewer_username: &str) -> Self {
        Self {
            feed: Arc::new(RwLock::new(feed)),
            viewer: Viewer {
                username: viewer_username.into(),
            },
        }
    }
}

pub fn routes() -> ServerRouter {
    routes::routes().fallback(fallback)
}

pub async fn fallback(request: Request) -> ServerError {
    ServerError::UnknownRoute(request.into_parts().0.uri)
}

pub type Result<T, E = ServerError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unknown route requested: {0}")]
    UnknownRoute(Uri),
    #[error("Path rejected: {0}")]
    PathRejection(#[from] PathRejection),
    #[error("Invalid {body}: {rejection}")]
    InvalidBody {
        body: &'static str,
        #[source]
        rejection: JsonRejection,
    },
    #[error("Comment text was empty")]
    EmptyComment,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UnknownRoute(_)
            | ServerError::PathRejection(_)
            | ServerError::Store(StoreError::PostNotFound(_)) => StatusCode::NOT_FOUND,
            ServerError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            ServerError::EmptyComment | ServerError::Store(StoreError::Validation(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ServerError::Store(StoreError::DuplicateId(_) | StoreError::IdSpaceExhausted(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
struct ErrorResponse {
    status: u16,
    message: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        error!(error = %self, %status, "Replying with error");

        let error_response = ErrorResponse {
            status: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(error_response)).into_response()
    }
}
