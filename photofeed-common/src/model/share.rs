use crate::model::post::Post;
use serde::{Deserialize, Serialize};

/// What a client needs to share a post: the native share payload and the
/// clipboard fallback text.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareSummary {
    pub title: String,
    pub text: String,
    pub clipboard_text: String,
}

impl From<&Post> for ShareSummary {
    fn from(post: &Post) -> Self {
        Self {
            title: format!("Post by {}", post.username),
            text: post.caption.clone(),
            clipboard_text: format!(
                "Check out this post by {}: {}",
                post.username, post.caption
            ),
        }
    }
}
