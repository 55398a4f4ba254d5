pub mod comments;
pub mod datetime;
pub mod errors;
pub mod feed;
pub mod storage;

use std::collections::BTreeMap;

use feed_data::{comments::Comment, identity::Author, post::Post, PostId};

use crate::{comments::CommentStore, errors::Error, feed::FeedStore, storage::StorageBridge};

/// One user session over the feed.
///
/// Owns the feed and one comment thread per post, all sharing the same
/// storage handle. Constructed once per session and passed by reference to
/// whatever paints it; it never reaches back into the rendering layer.
pub struct FeedSession {
    bridge: StorageBridge,
    feed: FeedStore,
    threads: BTreeMap<PostId, CommentStore>,
}

impl FeedSession {
    pub fn new(bridge: StorageBridge) -> Self {
        let feed = FeedStore::new(bridge.clone());

        let threads = feed
            .posts()
            .iter()
            .map(|post| (post.id, CommentStore::new(bridge.clone(), post.id)))
            .collect();

        Self {
            bridge,
            feed,
            threads,
        }
    }

    /// Read-only snapshot of the feed, newest post first.
    pub fn posts(&self) -> &[Post] {
        self.feed.posts()
    }

    pub fn post(&self, post_id: PostId) -> Option<&Post> {
        self.feed.get(post_id)
    }

    /// Read-only snapshot of one post's comment thread, oldest first.
    pub fn comments(&self, post_id: PostId) -> Result<&[Comment], Error> {
        self.threads
            .get(&post_id)
            .map(CommentStore::comments)
            .ok_or(Error::PostNotFound)
    }

    /// Publish a new post and open its empty comment thread.
    pub fn create_post(&mut self, raw_text: &str, author: Author) -> Result<PostId, Error> {
        let id = self.feed.create_post(raw_text, author)?;

        self.threads
            .insert(id, CommentStore::new(self.bridge.clone(), id));

        Ok(id)
    }

    pub fn add_comment(&mut self, post_id: PostId, text: &str) -> Result<(), Error> {
        self.thread(post_id)?.add(text)
    }

    /// Remove every comment on `post_id` whose content equals `text`.
    pub fn delete_comment(&mut self, post_id: PostId, text: &str) -> Result<usize, Error> {
        Ok(self.thread(post_id)?.delete_by_content(text))
    }

    /// Like the comment at `index` on `post_id`, returning the new count.
    pub fn like_comment(&mut self, post_id: PostId, index: usize) -> Result<u32, Error> {
        self.thread(post_id)?.like(index)
    }

    fn thread(&mut self, post_id: PostId) -> Result<&mut CommentStore, Error> {
        self.threads.get_mut(&post_id).ok_or(Error::PostNotFound)
    }
}
