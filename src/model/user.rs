use serde::{Deserialize, Serialize};

/// Denormalized snapshot of another user's identity, embedded in the
/// followed user's own record. Goes stale if the source user renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Follower {
    pub user_id: String,
    pub username: String,
}

/// A feed user. `user_id` is the logical primary key; uniqueness is the
/// caller's responsibility, not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub profile_pic: String,

    #[serde(default)]
    pub followers: Vec<Follower>,
}

impl User {
    pub fn new(user_id: String, username: String, profile_pic: String) -> Self {
        Self {
            user_id,
            username,
            profile_pic,
            followers: Vec::new(),
        }
    }

    /// Linear membership scan on `user_id`.
    pub fn has_follower(&self, follower_id: &str) -> bool {
        self.followers.iter().any(|f| f.user_id == follower_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let mut user = User::new(
            "u1".to_string(),
            "alice".to_string(),
            "https://img.example/alice.png".to_string(),
        );
        user.followers.push(Follower {
            user_id: "u2".to_string(),
            username: "bob".to_string(),
        });
        user
    }

    #[test]
    fn test_new_user_has_no_followers() {
        let user = User::new("u1".into(), "alice".into(), "pic".into());
        assert!(user.followers.is_empty());
    }

    #[test]
    fn test_has_follower() {
        let user = sample_user();
        assert!(user.has_follower("u2"));
        assert!(!user.has_follower("u3"));
        assert!(!user.has_follower("u1"));
    }

    #[test]
    fn test_followers_default_on_deserialize() {
        let json = r#"{"user_id":"u1","username":"alice","profile_pic":"x"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.followers.is_empty());
    }
}
