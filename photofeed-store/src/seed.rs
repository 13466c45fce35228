use photofeed_common::model::{
    Id,
    post::{DEFAULT_AVATAR_ICON, Post},
};

struct SeedRecord {
    id: u64,
    username: &'static str,
    image_ref: &'static str,
    caption: &'static str,
    like_count: u64,
    comment_count: u64,
    posted_label: &'static str,
}

const SEED_RECORDS: [SeedRecord; 3] = [
    SeedRecord {
        id: 1,
        username: "photographer",
        image_ref: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=600",
        caption: "Beautiful sunset at the beach 🌅 #sunset #beach",
        like_count: 1245,
        comment_count: 89,
        posted_label: "2 hours ago",
    },
    SeedRecord {
        id: 2,
        username: "traveler",
        image_ref: "https://images.unsplash.com/photo-1469854523086-cc02fe5d8800?w=600",
        caption: "Exploring new places ✈️ #travel #adventure",
        like_count: 892,
        comment_count: 45,
        posted_label: "5 hours ago",
    },
    SeedRecord {
        id: 3,
        username: "foodie",
        image_ref: "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=600",
        caption: "Delicious brunch! 🍳 #food #brunch",
        like_count: 567,
        comment_count: 23,
        posted_label: "1 day ago",
    },
];

impl From<&SeedRecord> for Post {
    fn from(value: &SeedRecord) -> Self {
        Self {
            id: Id::new(value.id),
            username: value.username.to_owned(),
            avatar_icon: DEFAULT_AVATAR_ICON.to_owned(),
            image_ref: value.image_ref.to_owned(),
            caption: value.caption.to_owned(),
            like_count: value.like_count,
            comment_count: value.comment_count,
            posted_label: value.posted_label.to_owned(),
            liked: false,
            bookmarked: false,
        }
    }
}

/// The example posts the feed starts with.
#[must_use]
pub fn seed_posts() -> Vec<Post> {
    SEED_RECORDS.iter().map(Post::from).collect()
}
