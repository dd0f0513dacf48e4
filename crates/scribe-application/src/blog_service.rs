//! Content store: the blog post collection and its operations.
//!
//! Every mutation is a whole-collection read-modify-write against the post
//! repository; there is no per-record storage. The store performs no access
//! control: callers apply [`BlogService::can_modify`] before offering edit
//! or delete.

use chrono::Utc;
use scribe_core::error::{Result, ScribeError};
use scribe_core::ids::{format_timestamp, parse_timestamp_millis, timestamp_id};
use scribe_core::post::{BlogPost, PostDraft, PostRepository, seed};
use scribe_core::user::UserView;
use std::cmp::Reverse;
use std::sync::Arc;
use tracing::{debug, info};

/// The content store.
pub struct BlogService {
    posts: Arc<dyn PostRepository>,
}

impl BlogService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Seeds the demo catalogue on first-ever access.
    ///
    /// Only runs when the post collection key has never been written; an
    /// empty (but present) collection is left alone, so deleting every post
    /// does not resurrect the demo content.
    pub fn seed_if_empty(&self) -> Result<()> {
        if self.posts.load()?.is_some() {
            return Ok(());
        }
        let demo = seed::demo_posts(Utc::now());
        self.posts.save(&demo)?;
        info!(count = demo.len(), "seeded demo posts");
        Ok(())
    }

    /// Returns all posts sorted newest-first by creation timestamp.
    ///
    /// The sort is stable: posts with equal timestamps keep their relative
    /// order from storage.
    pub fn list(&self) -> Result<Vec<BlogPost>> {
        let mut posts = self.posts.load()?.unwrap_or_default();
        posts.sort_by_key(|post| Reverse(parse_timestamp_millis(&post.created_at)));
        Ok(posts)
    }

    /// Finds a post by id.
    pub fn get(&self, id: &str) -> Result<Option<BlogPost>> {
        let posts = self.posts.load()?.unwrap_or_default();
        Ok(posts.into_iter().find(|post| post.id == id))
    }

    /// Creates a post from a draft on behalf of `author_id`.
    ///
    /// The id and creation timestamp are derived from the current instant.
    ///
    /// # Errors
    ///
    /// [`ScribeError::Validation`] when the title or description is empty.
    pub fn create(&self, draft: PostDraft, author_id: &str) -> Result<BlogPost> {
        validate_draft(&draft)?;

        let mut posts = self.posts.load()?.unwrap_or_default();
        let now = Utc::now();
        let post = BlogPost {
            id: timestamp_id(now),
            title: draft.title,
            description: draft.description,
            image: draft.image,
            author_id: author_id.to_string(),
            created_at: format_timestamp(now),
        };
        posts.push(post.clone());
        self.posts.save(&posts)?;

        info!(post_id = %post.id, "created post");
        Ok(post)
    }

    /// Replaces the mutable fields (title, description, image) of the post
    /// with the given id. `id`, `author_id`, and `created_at` are never
    /// touched. A missing id is a no-op.
    ///
    /// # Errors
    ///
    /// [`ScribeError::Validation`] when the title or description is empty.
    pub fn update(&self, id: &str, draft: PostDraft) -> Result<()> {
        validate_draft(&draft)?;

        let Some(mut posts) = self.posts.load()? else {
            return Ok(());
        };

        for post in posts.iter_mut().filter(|post| post.id == id) {
            post.title = draft.title.clone();
            post.description = draft.description.clone();
            post.image = draft.image.clone();
        }
        self.posts.save(&posts)?;

        debug!(post_id = %id, "updated post");
        Ok(())
    }

    /// Removes the post with the given id, if any. Idempotent.
    pub fn delete(&self, id: &str) -> Result<()> {
        let Some(mut posts) = self.posts.load()? else {
            return Ok(());
        };

        posts.retain(|post| post.id != id);
        self.posts.save(&posts)?;

        debug!(post_id = %id, "deleted post");
        Ok(())
    }

    /// The authorization rule callers apply before offering edit/delete:
    /// the session user authored the post, or the post is demo content.
    pub fn can_modify(&self, user: &UserView, post: &BlogPost) -> bool {
        post.editable_by(&user.id)
    }
}

fn validate_draft(draft: &PostDraft) -> Result<()> {
    if draft.title.is_empty() || draft.description.is_empty() {
        return Err(ScribeError::validation("Title and description are required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use scribe_core::post::SYSTEM_AUTHOR;
    use scribe_infrastructure::JsonPostRepository;
    use scribe_infrastructure::storage::MemoryStorage;

    fn service() -> (Arc<JsonPostRepository>, BlogService) {
        let storage = Arc::new(MemoryStorage::new());
        let repository = Arc::new(JsonPostRepository::new(storage));
        let service = BlogService::new(repository.clone());
        (repository, service)
    }

    fn draft(title: &str, description: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            description: description.to_string(),
            image: String::new(),
        }
    }

    /// A post with an explicit creation instant, for ordering tests.
    fn dated_post(id: &str, author_id: &str, hour: u32) -> BlogPost {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap();
        BlogPost {
            id: id.to_string(),
            title: format!("Post {id}"),
            description: "Body".to_string(),
            image: String::new(),
            author_id: author_id.to_string(),
            created_at: format_timestamp(at),
        }
    }

    #[test]
    fn test_seed_populates_five_system_posts_newest_first() {
        let (_repository, service) = service();
        service.seed_if_empty().unwrap();

        let posts = service.list().unwrap();
        assert_eq!(posts.len(), 5);
        assert!(posts.iter().all(|p| p.author_id == SYSTEM_AUTHOR));
        assert_eq!(
            posts.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            ["1", "2", "3", "4", "5"]
        );
    }

    #[test]
    fn test_seed_runs_only_once() {
        let (_repository, service) = service();
        service.seed_if_empty().unwrap();
        service.delete("1").unwrap();

        service.seed_if_empty().unwrap();
        assert_eq!(service.list().unwrap().len(), 4);
    }

    #[test]
    fn test_emptied_collection_does_not_reseed() {
        let (repository, service) = service();
        repository.save(&[]).unwrap();

        service.seed_if_empty().unwrap();
        assert_eq!(service.list().unwrap(), Vec::new());
    }

    #[test]
    fn test_list_sorts_newest_first() {
        let (repository, service) = service();
        repository
            .save(&[
                dated_post("a", "u-1", 8),
                dated_post("b", "u-1", 12),
                dated_post("c", "u-1", 10),
            ])
            .unwrap();

        let ids: Vec<_> = service.list().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn test_list_keeps_storage_order_for_equal_timestamps() {
        let (repository, service) = service();
        repository
            .save(&[
                dated_post("first", "u-1", 9),
                dated_post("second", "u-1", 9),
            ])
            .unwrap();

        let ids: Vec<_> = service.list().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn test_create_appends_and_returns_the_record() {
        let (repository, service) = service();
        repository.save(&[dated_post("old", "u-1", 9)]).unwrap();

        let post = service.create(draft("Hello", "World"), "u-1").unwrap();
        assert_eq!(post.author_id, "u-1");
        assert!(!post.id.is_empty());

        let posts = service.list().unwrap();
        assert_eq!(posts.len(), 2);
        // The explicit timestamp above is far in the past, so the new post
        // sorts first.
        assert_eq!(posts[0].id, post.id);
    }

    #[test]
    fn test_create_rejects_empty_required_fields() {
        let (_repository, service) = service();
        assert!(service.create(draft("", "Body"), "u-1").unwrap_err().is_validation());
        assert!(service.create(draft("Title", ""), "u-1").unwrap_err().is_validation());
        assert_eq!(service.list().unwrap(), Vec::new());
    }

    #[test]
    fn test_update_changes_only_the_mutable_fields() {
        let (repository, service) = service();
        let original = dated_post("a", "u-1", 9);
        repository.save(std::slice::from_ref(&original)).unwrap();

        service
            .update(
                "a",
                PostDraft {
                    title: "X".to_string(),
                    description: original.description.clone(),
                    image: original.image.clone(),
                },
            )
            .unwrap();

        let updated = service.get("a").unwrap().unwrap();
        assert_eq!(updated.title, "X");
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.author_id, original.author_id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.description, original.description);
        assert_eq!(updated.image, original.image);
    }

    #[test]
    fn test_update_missing_id_is_a_no_op() {
        let (repository, service) = service();
        let posts = vec![dated_post("a", "u-1", 9)];
        repository.save(&posts).unwrap();

        service.update("nope", draft("T", "D")).unwrap();
        assert_eq!(repository.load().unwrap(), Some(posts));
    }

    #[test]
    fn test_delete_then_get_is_absent_and_idempotent() {
        let (repository, service) = service();
        repository
            .save(&[dated_post("a", "u-1", 9), dated_post("b", "u-1", 10)])
            .unwrap();

        service.delete("a").unwrap();
        assert_eq!(service.get("a").unwrap(), None);
        assert_eq!(service.list().unwrap().len(), 1);

        service.delete("a").unwrap();
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_can_modify_owner_and_system_only() {
        let (_repository, service) = service();
        let user = UserView {
            id: "u-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        assert!(service.can_modify(&user, &dated_post("a", "u-1", 9)));
        assert!(service.can_modify(&user, &dated_post("b", SYSTEM_AUTHOR, 9)));
        assert!(!service.can_modify(&user, &dated_post("c", "u-2", 9)));
    }
}
