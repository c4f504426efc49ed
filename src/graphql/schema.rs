use std::path::PathBuf;
use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::config::SnapfeedConfig;
use crate::error::SnapfeedError;
use crate::model::{self, Post as ModelPost, User as ModelUser};
use crate::store::{PostRepository, UserRepository};

use super::types::*;

pub type SnapfeedSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct AppState {
    pub config: SnapfeedConfig,
    pub data_root: PathBuf,
}

pub fn build_schema(config: SnapfeedConfig, data_root: PathBuf) -> SnapfeedSchema {
    let state = Arc::new(AppState { config, data_root });

    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

fn post_repo(ctx: &Context<'_>) -> PostRepository {
    let state = ctx.data::<Arc<AppState>>().unwrap();
    PostRepository::new(&state.config, &state.data_root)
}

fn user_repo(ctx: &Context<'_>) -> UserRepository {
    let state = ctx.data::<Arc<AppState>>().unwrap();
    UserRepository::new(&state.config, &state.data_root)
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All posts authored by one user, in store order
    async fn get_user_posts(
        &self,
        ctx: &Context<'_>,
        user_id: String,
    ) -> async_graphql::Result<Vec<Post>> {
        let repo = post_repo(ctx);
        let posts = repo.find_by_user(&user_id)?;
        Ok(posts.into_iter().map(|p| p.into()).collect())
    }

    /// Posts from every account in the user's followers list, one store
    /// query per follower. Follower-list order outer, store order inner.
    async fn get_followers_posts(
        &self,
        ctx: &Context<'_>,
        user_id: String,
    ) -> async_graphql::Result<Vec<Post>> {
        let users = user_repo(ctx);
        let user = match users.find_by_user_id(&user_id) {
            Ok((_, user)) => user,
            Err(SnapfeedError::NotFound(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let posts_repo = post_repo(ctx);
        let mut posts = Vec::new();
        for follower in &user.followers {
            // A failure partway aborts the whole request; no partial results
            let batch = posts_repo.find_by_user(&follower.user_id)?;
            posts.extend(batch.into_iter().map(Post::from));
        }

        Ok(posts)
    }

    /// The user with the given id, or null when absent
    async fn get_current_user(
        &self,
        ctx: &Context<'_>,
        user_id: String,
    ) -> async_graphql::Result<Option<User>> {
        match user_repo(ctx).find_by_user_id(&user_id) {
            Ok((_, user)) => Ok(Some(user.into())),
            Err(SnapfeedError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// The user's own followers list, verbatim
    async fn get_followers(
        &self,
        ctx: &Context<'_>,
        user_id: String,
    ) -> async_graphql::Result<Vec<Follower>> {
        match user_repo(ctx).find_by_user_id(&user_id) {
            Ok((_, user)) => Ok(user.followers.into_iter().map(|f| f.into()).collect()),
            Err(SnapfeedError::NotFound(_)) => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Every user except the requester and the requester's current followers
    async fn get_suggest_users(
        &self,
        ctx: &Context<'_>,
        user_id: String,
    ) -> async_graphql::Result<Vec<User>> {
        let users = user_repo(ctx);
        let current = match users.find_by_user_id(&user_id) {
            Ok((_, user)) => user,
            Err(SnapfeedError::NotFound(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let suggested = users
            .list_all()?
            .into_iter()
            .filter(|u| u.user_id != user_id && !current.has_follower(&u.user_id))
            .map(|u| u.into())
            .collect();

        Ok(suggested)
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a post with a server-assigned posted time
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        description: String,
        image_url: String,
        user_id: String,
        mentions: Option<Vec<MentionInput>>,
    ) -> async_graphql::Result<Post> {
        let mentions = mentions
            .unwrap_or_default()
            .into_iter()
            .map(|m| m.into())
            .collect();
        let post = ModelPost::new(description, image_url, user_id, mentions);

        post_repo(ctx).add(&post)?;
        Ok(post.into())
    }

    /// Create a user with an empty followers list
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        username: String,
        profile_pic: String,
    ) -> async_graphql::Result<User> {
        let user = ModelUser::new(user_id, username, profile_pic);
        user_repo(ctx).add(&user)?;
        Ok(user.into())
    }

    /// Update only the profile picture; null when the user does not exist
    async fn update_user_profile_pic(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        profile_pic: String,
    ) -> async_graphql::Result<Option<User>> {
        let users = user_repo(ctx);
        let (doc_id, mut user) = match users.find_by_user_id(&user_id) {
            Ok(found) => found,
            Err(SnapfeedError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        user.profile_pic = profile_pic;
        users.update(&doc_id, &user)?;

        Ok(Some(user.into()))
    }

    /// Add a follower to a user's list; a no-op when already present
    async fn add_follower(
        &self,
        ctx: &Context<'_>,
        current_user_id: String,
        follower_id: String,
        follower_username: String,
    ) -> async_graphql::Result<Option<User>> {
        let users = user_repo(ctx);
        let (doc_id, mut user) = match users.find_by_user_id(&current_user_id) {
            Ok(found) => found,
            Err(SnapfeedError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if !user.has_follower(&follower_id) {
            user.followers.push(model::Follower {
                user_id: follower_id,
                username: follower_username,
            });
            users.update(&doc_id, &user)?;
        } else {
            tracing::debug!(%current_user_id, %follower_id, "Already a follower");
        }

        Ok(Some(user.into()))
    }

    /// Remove a follower from a user's list; a no-op for non-members
    async fn remove_follower(
        &self,
        ctx: &Context<'_>,
        current_user_id: String,
        follower_id: String,
    ) -> async_graphql::Result<Option<User>> {
        let users = user_repo(ctx);
        let (doc_id, mut user) = match users.find_by_user_id(&current_user_id) {
            Ok(found) => found,
            Err(SnapfeedError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        user.followers.retain(|f| f.user_id != follower_id);
        users.update(&doc_id, &user)?;

        Ok(Some(user.into()))
    }
}
