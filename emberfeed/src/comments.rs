use chrono::Utc;

use feed_data::{
    comments::{Comment, StoredComment},
    PostId,
};

use tracing::debug;

use crate::{
    errors::Error,
    storage::{comments_key, StorageBridge},
};

/// Ordered comment thread of one post.
///
/// Append order, oldest first. Every mutation persists the whole list under
/// the post's comment key.
pub struct CommentStore {
    bridge: StorageBridge,
    key: String,
    comments: Vec<Comment>,
}

impl CommentStore {
    /// Load the thread for `post_id`, upgrading legacy payloads on the way in.
    ///
    /// Absent or undecodable payloads start an empty thread. Upgraded legacy
    /// entries stay in memory only until the next save.
    pub fn new(bridge: StorageBridge, post_id: PostId) -> Self {
        let key = comments_key(post_id);

        let comments: Vec<Comment> = match bridge.load::<Vec<StoredComment>>(&key) {
            Some(stored) => {
                let now = Utc::now();

                stored
                    .into_iter()
                    .map(|comment| comment.into_comment(now))
                    .collect()
            }
            None => Vec::new(),
        };

        debug!(key, count = comments.len(), "comment thread loaded");

        Self {
            bridge,
            key,
            comments,
        }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Append a new comment stamped with the current instant and no likes.
    pub fn add(&mut self, text: &str) -> Result<(), Error> {
        if text.trim().is_empty() {
            return Err(Error::EmptyComment);
        }

        self.comments.push(Comment {
            content: text.to_owned(),
            created_at: Utc::now(),
            like_count: 0,
        });

        self.persist();

        Ok(())
    }

    /// Remove every comment whose content equals `text` exactly.
    ///
    /// Content is the only key the stored record carries, so duplicate texts
    /// go together. Returns how many were removed.
    pub fn delete_by_content(&mut self, text: &str) -> usize {
        let before = self.comments.len();

        self.comments.retain(|comment| comment.content != text);

        let removed = before - self.comments.len();

        if removed > 0 {
            self.persist();
        }

        removed
    }

    /// Increment the like count of the comment at `index`.
    ///
    /// Every call counts; rapid repeats each land. Returns the new count.
    pub fn like(&mut self, index: usize) -> Result<u32, Error> {
        let comment = self
            .comments
            .get_mut(index)
            .ok_or(Error::CommentNotFound)?;

        comment.like_count += 1;

        let count = comment.like_count;

        self.persist();

        Ok(count)
    }

    fn persist(&self) {
        self.bridge.save(&self.key, &self.comments);
    }
}
