use super::Collection;
use crate::{
    config::SnapfeedConfig,
    error::{Result, SnapfeedError},
    model::User,
};
use std::path::Path;

pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(config: &SnapfeedConfig, data_root: &Path) -> Self {
        Self {
            collection: Collection::new(config.users_path(data_root)),
        }
    }

    pub fn add(&self, user: &User) -> Result<String> {
        tracing::info!(user_id = %user.user_id, username = %user.username, "Storing user");
        self.collection.add(user)
    }

    /// First document whose `user_id` matches, with its document id so the
    /// caller can write the document back.
    ///
    /// `user_id` uniqueness is not enforced at insert; duplicates resolve to
    /// whichever document scans first.
    pub fn find_by_user_id(&self, user_id: &str) -> Result<(String, User)> {
        self.collection
            .scan()?
            .into_iter()
            .find(|(_, user)| user.user_id == user_id)
            .ok_or_else(|| SnapfeedError::NotFound(user_id.to_string()))
    }

    pub fn list_all(&self) -> Result<Vec<User>> {
        Ok(self
            .collection
            .scan()?
            .into_iter()
            .map(|(_, user)| user)
            .collect())
    }

    pub fn update(&self, doc_id: &str, user: &User) -> Result<()> {
        tracing::info!(user_id = %user.user_id, "Updating user");
        self.collection.replace(doc_id, user)
    }
}
