use chrono::Utc;

use feed_data::{
    identity::Author,
    post::{ContentLine, LineKind, Post},
    PostId,
};

use tracing::debug;

use crate::{
    errors::Error,
    storage::{StorageBridge, FEED_KEY},
};

/// The feed itself: every post, newest first.
///
/// Constructed once per session and passed by reference to consumers. Posts
/// are never edited or deleted, only prepended.
pub struct FeedStore {
    bridge: StorageBridge,
    posts: Vec<Post>,
    next_id: PostId,
}

impl FeedStore {
    /// Load the feed, seeding the first post when storage has none.
    pub fn new(bridge: StorageBridge) -> Self {
        let posts = match bridge.load::<Vec<Post>>(FEED_KEY) {
            Some(posts) => posts,
            None => {
                let posts = vec![seed_post()];

                bridge.save(FEED_KEY, &posts);

                posts
            }
        };

        let next_id = posts.iter().map(|post| post.id).max().unwrap_or(0) + 1;

        debug!(count = posts.len(), next_id, "feed loaded");

        Self {
            bridge,
            posts,
            next_id,
        }
    }

    /// Posts in display order, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Publish a new post from raw authored text.
    ///
    /// Each trimmed non-empty line becomes one content line, links detected
    /// by prefix. The post takes the next feed-unique id and the head of the
    /// list; insertion order is never re-sorted by timestamp.
    pub fn create_post(&mut self, raw_text: &str, author: Author) -> Result<PostId, Error> {
        if raw_text.trim().is_empty() {
            return Err(Error::EmptyPost);
        }

        let content: Vec<ContentLine> = raw_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ContentLine::new)
            .collect();

        let id = self.next_id;
        self.next_id += 1;

        let post = Post {
            id,
            author,
            content,
            published_at: Utc::now(),
        };

        self.posts.insert(0, post);

        self.bridge.save(FEED_KEY, &self.posts);

        Ok(id)
    }
}

/// First post of a brand new feed.
pub fn seed_post() -> Post {
    Post {
        id: 1,
        author: Author {
            avatar_url: "https://github.com/diego3g.png".to_owned(),
            name: "Diego Fernandes".to_owned(),
            role: "Web Developer".to_owned(),
        },
        content: vec![
            ContentLine {
                kind: LineKind::Paragraph,
                text: "Fala galeraa 👋".to_owned(),
            },
            ContentLine {
                kind: LineKind::Paragraph,
                text: "Acabei de subir mais um projeto no meu portifa. É um projeto que fiz \
                       no NLW Return, evento da Rocketseat. O nome do projeto é DoctorCare 🚀"
                    .to_owned(),
            },
            ContentLine {
                kind: LineKind::Link,
                text: "👉 jane.design/doctorcare".to_owned(),
            },
        ],
        published_at: "2024-10-14T14:30:00Z".parse().expect("Valid seed timestamp"),
    }
}
