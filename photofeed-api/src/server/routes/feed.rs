use crate::server::{ServerError, ServerRouter, SharedFeed};
use axum::{Json, extract::State, response::Html};
use axum_extra::routing::{RouterExt, TypedPath};
use photofeed_common::view::{PostView, render_feed, render_feed_html};
use serde::Deserialize;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(get_feed_page)
        .typed_get(get_feed)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/", rejection(ServerError))]
struct FeedPagePath();

async fn get_feed_page(FeedPagePath(): FeedPagePath, State(feed): State<SharedFeed>) -> Html<String> {
    Html(render_feed_html(feed.read().await.posts()))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts", rejection(ServerError))]
struct FeedPath();

async fn get_feed(FeedPath(): FeedPath, State(feed): State<SharedFeed>) -> Json<Vec<PostView>> {
    Json(render_feed(feed.read().await.posts()))
}
