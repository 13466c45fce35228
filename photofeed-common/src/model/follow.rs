use serde::{Deserialize, Serialize};

/// Label state of a follow button. Nothing is persisted; every toggle just
/// cycles the label.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Deserialize, Serialize,
)]
pub enum FollowState {
    #[default]
    Follow,
    Following,
}

impl FollowState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            FollowState::Follow => FollowState::Following,
            FollowState::Following => FollowState::Follow,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FollowState::Follow => "Follow",
            FollowState::Following => "Following",
        }
    }
}
