use crate::server::{Result, ServerError, ServerRouter, body::JsonBody};
use axum::Json;
use axum_extra::routing::{RouterExt, TypedPath};
use photofeed_common::model::follow::FollowState;
use serde::{Deserialize, Serialize};

pub fn routes() -> ServerRouter {
    ServerRouter::new().typed_post(toggle_follow)
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct FollowButton {
    pub state: FollowState,
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/follow/toggle", rejection(ServerError))]
struct ToggleFollowPath();

async fn toggle_follow(
    ToggleFollowPath(): ToggleFollowPath,
    JsonBody(button): JsonBody<FollowButton>,
) -> Result<Json<FollowButton>> {
    Ok(Json(FollowButton {
        state: button.state.toggled(),
    }))
}
