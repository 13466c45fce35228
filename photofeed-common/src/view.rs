//! Pure projections of posts into what the feed displays.

use crate::{
    format::{comments_label, likes_label},
    model::post::{Post, PostId},
};
use serde::{Deserialize, Serialize};

pub const IMAGE_FALLBACK_URL: &str = "https://via.placeholder.com/600x400?text=Image+Not+Found";

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: PostId,
    pub username: String,
    pub avatar_icon: String,
    pub image_ref: String,
    pub caption: String,
    pub likes_label: String,
    pub comments_label: String,
    pub posted_label: String,
    pub like_icon: String,
    pub bookmark_icon: String,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            username: post.username.clone(),
            avatar_icon: post.avatar_icon.clone(),
            image_ref: post.image_ref.clone(),
            caption: post.caption.clone(),
            likes_label: likes_label(post.like_count),
            comments_label: comments_label(post.comment_count),
            posted_label: post.posted_label.clone(),
            like_icon: like_icon(post.liked).to_owned(),
            bookmark_icon: bookmark_icon(post.bookmarked).to_owned(),
        }
    }
}

#[must_use]
pub fn like_icon(liked: bool) -> &'static str {
    if liked { "fas fa-heart liked" } else { "far fa-heart" }
}

#[must_use]
pub fn bookmark_icon(bookmarked: bool) -> &'static str {
    if bookmarked {
        "fas fa-bookmark bookmarked"
    } else {
        "far fa-bookmark"
    }
}

#[must_use]
pub fn render_feed(posts: &[Post]) -> Vec<PostView> {
    posts.iter().map(PostView::from).collect()
}

/// Renders the whole feed as HTML, in display order.
#[must_use]
pub fn render_feed_html(posts: &[Post]) -> String {
    let mut html = String::from(r#"<div id="postsContainer">"#);
    for post in posts {
        render_post_html(&mut html, &PostView::from(post));
    }
    html.push_str("</div>");
    html
}

fn render_post_html(html: &mut String, view: &PostView) {
    let id = view.id;
    let username = html_escape(&view.username);

    html.push_str(&format!(
        r#"<div class="post" data-post-id="{id}">
    <div class="post-header">
        <div class="post-avatar"><i class="{avatar}"></i></div>
        <span class="post-username">{username}</span>
    </div>
    <img src="{image}" alt="Post" class="post-image" onerror="this.src='{IMAGE_FALLBACK_URL}'">
    <div class="post-actions">
        <i class="{like_icon}" data-action="like" data-post-id="{id}"></i>
        <i class="far fa-comment" data-action="comment" data-post-id="{id}"></i>
        <i class="far fa-paper-plane" data-action="share" data-post-id="{id}"></i>
        <i class="{bookmark_icon}" data-action="bookmark" data-post-id="{id}" style="margin-left: auto;"></i>
    </div>
    <div class="post-likes">{likes}</div>
    <div class="post-caption"><span class="username">{username}</span> {caption}</div>
    <div class="post-comments">{comments}</div>
    <div class="post-time">{posted}</div>
</div>"#,
        avatar = html_escape(&view.avatar_icon),
        image = html_escape(&view.image_ref),
        like_icon = view.like_icon,
        bookmark_icon = view.bookmark_icon,
        likes = view.likes_label,
        caption = html_escape(&view.caption),
        comments = view.comments_label,
        posted = html_escape(&view.posted_label),
    ));
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{Id, post::Post},
        view::{PostView, render_feed, render_feed_html},
    };

    fn post(id: u64, liked: bool) -> Post {
        Post {
            id: Id::new(id),
            username: "foodie".to_owned(),
            caption: "Delicious brunch!".to_owned(),
            like_count: 1245,
            comment_count: 23,
            posted_label: "1 day ago".to_owned(),
            liked,
            ..Post::default()
        }
    }

    #[test]
    fn view_carries_labels_and_icons() {
        let view = PostView::from(&post(3, true));

        assert_eq!(view.likes_label, "1.2K likes");
        assert_eq!(view.comments_label, "View all 23 comments");
        assert_eq!(view.like_icon, "fas fa-heart liked");
        assert_eq!(view.bookmark_icon, "far fa-bookmark");
    }

    #[test]
    fn feed_keeps_display_order() {
        let views = render_feed(&[post(2, false), post(1, false)]);

        let ids: Vec<u64> = views.iter().map(|view| view.id.get()).collect();
        assert_eq!(ids, [2, 1]);
    }

    #[test]
    fn html_has_action_targets() {
        let html = render_feed_html(&[post(7, false)]);

        for action in ["like", "comment", "share", "bookmark"] {
            assert!(html.contains(&format!(r#"data-action="{action}" data-post-id="7""#)));
        }
        assert!(html.contains("1.2K likes"));
    }

    #[test]
    fn html_escapes_user_text() {
        let html = render_feed_html(&[Post {
            caption: "<script>alert(1)</script>".to_owned(),
            ..post(1, false)
        }]);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
