use crate::server::{Result, ServerError, ServerRouter, SharedFeed, Viewer, body::JsonBody};
use axum::{Json, extract::State, http::StatusCode};
use axum_extra::routing::{RouterExt, TypedPath};
use photofeed_common::model::{
    post::{CreatePost, Post, PostId},
    share::ShareSummary,
};
use photofeed_store::store::StoreError;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(get_post)
        .typed_post(create_post)
        .typed_post(like_post)
        .typed_post(bookmark_post)
        .typed_post(comment_post)
        .typed_get(share_post)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/{id}", rejection(ServerError))]
struct GetPostPath {
    id: PostId,
}

async fn get_post(GetPostPath { id }: GetPostPath, State(feed): State<SharedFeed>) -> Result<Json<Post>> {
    let post = feed
        .read()
        .await
        .find_by_id(id)
        .cloned()
        .ok_or(StoreError::PostNotFound(id))?;

    Ok(Json(post))
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostBody {
    #[serde(default)]
    pub image_ref: String,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/create", rejection(ServerError))]
struct CreatePostPath();

async fn create_post(
    CreatePostPath(): CreatePostPath,
    State(feed): State<SharedFeed>,
    State(viewer): State<Viewer>,
    JsonBody(body): JsonBody<CreatePostBody>,
) -> Result<(StatusCode, Json<Post>)> {
    let create = CreatePost {
        image_ref: body.image_ref,
        caption: body.caption,
        author: viewer.username.to_string(),
    };
    let post = feed.write().await.create_post(create)?.clone();

    Ok((StatusCode::CREATED, Json(post)))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/{id}/like", rejection(ServerError))]
struct LikePostPath {
    id: PostId,
}

async fn like_post(LikePostPath { id }: LikePostPath, State(feed): State<SharedFeed>) -> Result<Json<Post>> {
    let post = feed.write().await.toggle_like(id)?.clone();

    Ok(Json(post))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/{id}/bookmark", rejection(ServerError))]
struct BookmarkPostPath {
    id: PostId,
}

async fn bookmark_post(
    BookmarkPostPath { id }: BookmarkPostPath,
    State(feed): State<SharedFeed>,
) -> Result<Json<Post>> {
    let post = feed.write().await.toggle_bookmark(id)?.clone();

    Ok(Json(post))
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct CommentBody {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/{id}/comment", rejection(ServerError))]
struct CommentPostPath {
    id: PostId,
}

/// The post must exist before the comment text is looked at. A missing or blank
/// comment then counts as a cancelled prompt and leaves the post untouched.
async fn comment_post(
    CommentPostPath { id }: CommentPostPath,
    State(feed): State<SharedFeed>,
    JsonBody(body): JsonBody<CommentBody>,
) -> Result<Json<Post>> {
    let mut feed = feed.write().await;
    if feed.find_by_id(id).is_none() {
        return Err(StoreError::PostNotFound(id).into());
    }

    let text = body.text.as_deref().map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(ServerError::EmptyComment);
    }

    debug!(%id, comment = text, "Received comment");
    let post = feed.add_comment(id)?.clone();

    Ok(Json(post))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/{id}/share", rejection(ServerError))]
struct SharePostPath {
    id: PostId,
}

async fn share_post(
    SharePostPath { id }: SharePostPath,
    State(feed): State<SharedFeed>,
) -> Result<Json<ShareSummary>> {
    let summary = feed
        .read()
        .await
        .find_by_id(id)
        .map(ShareSummary::from)
        .ok_or(StoreError::PostNotFound(id))?;

    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use crate::server::{
        ErrorResponse,
        tests::{app, read_json, send},
    };
    use axum::http::{Method, StatusCode};
    use photofeed_common::model::{Id, post::Post, share::ShareSummary};

    #[tokio::test]
    async fn get_post_by_id() {
        let (app, _) = app();

        let response = send(&app, Method::GET, "/posts/2", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let post: Post = read_json(response).await;
        assert_eq!(post.username, "traveler");
        assert_eq!(post.like_count, 892);
    }

    #[tokio::test]
    async fn missing_post_is_not_found() {
        let (app, _) = app();

        for (method, uri) in [
            (Method::GET, "/posts/42"),
            (Method::POST, "/posts/42/like"),
            (Method::POST, "/posts/42/bookmark"),
            (Method::GET, "/posts/42/share"),
        ] {
            let response = send(&app, method, uri, None).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn like_twice_restores_post() {
        let (app, _) = app();

        let post: Post = read_json(send(&app, Method::POST, "/posts/1/like", None).await).await;
        assert!(post.liked);
        assert_eq!(post.like_count, 1246);

        let post: Post = read_json(send(&app, Method::POST, "/posts/1/like", None).await).await;
        assert!(!post.liked);
        assert_eq!(post.like_count, 1245);
    }

    #[tokio::test]
    async fn bookmark_keeps_counts() {
        let (app, _) = app();

        let post: Post = read_json(send(&app, Method::POST, "/posts/3/bookmark", None).await).await;

        assert!(post.bookmarked);
        assert_eq!(post.like_count, 567);
        assert_eq!(post.comment_count, 23);
    }

    #[tokio::test]
    async fn create_post_goes_first() {
        let (app, state) = app();

        let response = send(
            &app,
            Method::POST,
            "/posts/create",
            Some(r#"{"imageRef":"img.png","caption":"hi"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let post: Post = read_json(response).await;
        assert_eq!(post.id, Id::new(4));
        assert_eq!(post.username, "your_username");
        assert_eq!(post.caption, "hi");
        assert_eq!(state.feed.read().await.posts()[0].id, Id::new(4));
    }

    #[tokio::test]
    async fn create_post_without_image_is_rejected() {
        let (app, state) = app();

        let response = send(&app, Method::POST, "/posts/create", Some(r#"{"caption":"hi"}"#)).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error: ErrorResponse = read_json(response).await;
        assert_eq!(error.message, "Please select an image first!");
        assert_eq!(state.feed.read().await.len(), 3);
    }

    #[tokio::test]
    async fn comment_counts_once() {
        let (app, _) = app();

        let response =
            send(&app, Method::POST, "/posts/2/comment", Some(r#"{"text":"Nice!"}"#)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let post: Post = read_json(response).await;
        assert_eq!(post.comment_count, 46);
    }

    #[tokio::test]
    async fn blank_comment_is_ignored() {
        let (app, state) = app();

        for body in [r#"{"text":"   "}"#, "{}"] {
            let response = send(&app, Method::POST, "/posts/2/comment", Some(body)).await;
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }

        let feed = state.feed.read().await;
        assert_eq!(feed.find_by_id(Id::new(2)).unwrap().comment_count, 45);
    }

    #[tokio::test]
    async fn blank_comment_on_missing_post_is_not_found() {
        let (app, _) = app();

        let response = send(&app, Method::POST, "/posts/42/comment", Some(r#"{"text":""}"#)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn share_returns_clipboard_text() {
        let (app, _) = app();

        let summary: ShareSummary =
            read_json(send(&app, Method::GET, "/posts/3/share", None).await).await;

        assert_eq!(summary.title, "Post by foodie");
        assert_eq!(
            summary.clipboard_text,
            "Check out this post by foodie: Delicious brunch! 🍳 #food #brunch"
        );
    }
}
