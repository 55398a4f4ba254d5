use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Emberfeed: Cannot publish post, text was empty")]
    EmptyPost,

    #[error("Emberfeed: Cannot add comment, text was empty")]
    EmptyComment,

    #[error("Emberfeed: Post not found")]
    PostNotFound,

    #[error("Emberfeed: Comment not found")]
    CommentNotFound,
}
