use crate::seed::seed_posts;
use photofeed_common::model::{
    Id, ModelValidationError,
    post::{CreatePost, Post, PostId, ValidCreatePost},
};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ModelValidationError),
    #[error("Post with id {0} was not found.")]
    PostNotFound(PostId),
    #[error("Post id {0} appears more than once.")]
    DuplicateId(PostId),
    #[error("No post id is left after {0}.")]
    IdSpaceExhausted(PostId),
}

/// The feed: posts in display order, newest first.
///
/// Every operation touches at most one post and either succeeds completely or
/// leaves the store unchanged.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct FeedStore {
    posts: Vec<Post>,
}

impl FeedStore {
    /// Creates a store holding `seed` in the given order.
    pub fn new(seed: Vec<Post>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(seed.len());
        if let Some(duplicate) = seed.iter().find(|post| !seen.insert(post.id)) {
            return Err(StoreError::DuplicateId(duplicate.id));
        }

        debug!(posts = seed.len(), "Initialized feed store");
        Ok(Self { posts: seed })
    }

    #[must_use]
    pub fn with_seed_posts() -> Self {
        Self {
            posts: seed_posts(),
        }
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    #[must_use]
    pub fn find_by_id(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    fn find_by_id_mut(&mut self, id: PostId) -> Result<&mut Post> {
        self.posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(StoreError::PostNotFound(id))
    }

    fn next_id(&self) -> Result<PostId> {
        match self.posts.iter().map(|post| post.id).max() {
            Some(max) => max
                .checked_next()
                .ok_or(StoreError::IdSpaceExhausted(max)),
            None => Ok(Id::new(1)),
        }
    }

    /// Validates `post` and puts it at the front of the feed.
    pub fn create_post(&mut self, post: CreatePost) -> Result<&Post> {
        let valid = ValidCreatePost::try_from(post)?;
        let id = self.next_id()?;

        self.posts.insert(0, Post::new(id, valid));
        debug!(%id, "Created post");

        Ok(&self.posts[0])
    }

    pub fn toggle_like(&mut self, id: PostId) -> Result<&Post> {
        let post = self.find_by_id_mut(id)?;
        post.toggle_like();
        debug!(%id, liked = post.liked, likes = post.like_count, "Toggled like");

        Ok(&*post)
    }

    pub fn toggle_bookmark(&mut self, id: PostId) -> Result<&Post> {
        let post = self.find_by_id_mut(id)?;
        post.toggle_bookmark();
        debug!(%id, bookmarked = post.bookmarked, "Toggled bookmark");

        Ok(&*post)
    }

    /// Counts one more comment on the post. Whether the comment had any text
    /// is for the caller to decide before calling this.
    pub fn add_comment(&mut self, id: PostId) -> Result<&Post> {
        let post = self.find_by_id_mut(id)?;
        post.add_comment();
        debug!(%id, comments = post.comment_count, "Added comment");

        Ok(&*post)
    }
}
