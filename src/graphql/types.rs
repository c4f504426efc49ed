use crate::model;
use async_graphql::{InputObject, SimpleObject};

#[derive(SimpleObject, Clone)]
pub struct Mention {
    pub user_id: String,
    pub username: String,
}

impl From<model::Mention> for Mention {
    fn from(m: model::Mention) -> Self {
        Self {
            user_id: m.user_id,
            username: m.username,
        }
    }
}

#[derive(InputObject)]
pub struct MentionInput {
    pub user_id: String,
    pub username: String,
}

impl From<MentionInput> for model::Mention {
    fn from(m: MentionInput) -> Self {
        Self {
            user_id: m.user_id,
            username: m.username,
        }
    }
}

#[derive(SimpleObject)]
pub struct Post {
    pub description: String,
    pub image_url: String,
    pub user_id: String,
    pub posted_time: String,
    pub mentions: Vec<Mention>,
}

impl From<model::Post> for Post {
    fn from(p: model::Post) -> Self {
        Self {
            description: p.description,
            image_url: p.image_url,
            user_id: p.user_id,
            posted_time: p.posted_time.to_rfc3339(),
            mentions: p.mentions.into_iter().map(|m| m.into()).collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Follower {
    pub user_id: String,
    pub username: String,
}

impl From<model::Follower> for Follower {
    fn from(f: model::Follower) -> Self {
        Self {
            user_id: f.user_id,
            username: f.username,
        }
    }
}

#[derive(SimpleObject)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub profile_pic: String,
    pub followers: Vec<Follower>,
}

impl From<model::User> for User {
    fn from(u: model::User) -> Self {
        Self {
            user_id: u.user_id,
            username: u.username,
            profile_pic: u.profile_pic,
            followers: u.followers.into_iter().map(|f| f.into()).collect(),
        }
    }
}
