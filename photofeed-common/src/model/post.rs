use crate::model::{Id, ModelValidationError};
use serde::{Deserialize, Serialize};

pub const JUST_NOW_LABEL: &str = "just now";
pub const DEFAULT_AVATAR_ICON: &str = "fas fa-user";
pub const NEW_POST_AVATAR_ICON: &str = "fas fa-user-circle";

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

pub type PostId = Id<PostMarker>;

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub username: String,
    pub avatar_icon: String,
    pub image_ref: String,
    pub caption: String,
    pub like_count: u64,
    pub comment_count: u64,
    pub posted_label: String,
    pub liked: bool,
    pub bookmarked: bool,
}

impl Post {
    /// Builds a fresh post from validated input. Counters start at zero and
    /// the viewer has neither liked nor bookmarked it.
    #[must_use]
    pub fn new(id: PostId, post: ValidCreatePost) -> Self {
        Self {
            id,
            username: post.author,
            avatar_icon: NEW_POST_AVATAR_ICON.to_owned(),
            image_ref: post.image_ref,
            caption: post.caption,
            like_count: 0,
            comment_count: 0,
            posted_label: JUST_NOW_LABEL.to_owned(),
            liked: false,
            bookmarked: false,
        }
    }

    /// Flips `liked`, moving `like_count` by one in the same direction.
    /// The count never drops below zero.
    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
        if self.liked {
            self.like_count = self.like_count.saturating_add(1);
        } else {
            self.like_count = self.like_count.saturating_sub(1);
        }
    }

    pub fn toggle_bookmark(&mut self) {
        self.bookmarked = !self.bookmarked;
    }

    pub fn add_comment(&mut self) {
        self.comment_count = self.comment_count.saturating_add(1);
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub image_ref: String,
    #[serde(default)]
    pub caption: Option<String>,
    pub author: String,
}

/// A [`CreatePost`] whose image reference is known to be present.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct ValidCreatePost {
    image_ref: String,
    caption: String,
    author: String,
}

impl TryFrom<CreatePost> for ValidCreatePost {
    type Error = ModelValidationError;

    fn try_from(value: CreatePost) -> Result<Self, Self::Error> {
        if value.image_ref.trim().is_empty() {
            return Err(ModelValidationError::EmptyImageRef);
        }

        let caption = value
            .caption
            .map(|caption| caption.trim().to_owned())
            .unwrap_or_default();

        Ok(Self {
            image_ref: value.image_ref,
            caption,
            author: value.author,
        })
    }
}
