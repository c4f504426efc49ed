use super::Collection;
use crate::{config::SnapfeedConfig, error::Result, model::Post};
use std::path::Path;

pub struct PostRepository {
    collection: Collection<Post>,
}

impl PostRepository {
    pub fn new(config: &SnapfeedConfig, data_root: &Path) -> Self {
        Self {
            collection: Collection::new(config.posts_path(data_root)),
        }
    }

    pub fn add(&self, post: &Post) -> Result<String> {
        tracing::info!(user_id = %post.user_id, "Storing post");
        self.collection.add(post)
    }

    /// All posts by one author, in store order.
    pub fn find_by_user(&self, user_id: &str) -> Result<Vec<Post>> {
        let posts = self
            .collection
            .scan()?
            .into_iter()
            .map(|(_, post)| post)
            .filter(|post| post.user_id == user_id)
            .collect();
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_repo() -> (TempDir, PostRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = PostRepository::new(&SnapfeedConfig::default(), temp_dir.path());
        (temp_dir, repo)
    }

    fn post_by(user_id: &str, description: &str) -> Post {
        Post::new(
            description.to_string(),
            "https://img.example/p.png".to_string(),
            user_id.to_string(),
            Vec::new(),
        )
    }

    #[test]
    fn test_find_by_user_filters_authors() {
        let (_tmp, repo) = test_repo();
        repo.add(&post_by("u1", "first")).unwrap();
        repo.add(&post_by("u2", "other")).unwrap();
        repo.add(&post_by("u1", "second")).unwrap();

        let posts = repo.find_by_user("u1").unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.user_id == "u1"));

        assert!(repo.find_by_user("u3").unwrap().is_empty());
    }

    #[test]
    fn test_empty_store_reads_empty() {
        let (_tmp, repo) = test_repo();
        assert!(repo.find_by_user("u1").unwrap().is_empty());
    }
}
