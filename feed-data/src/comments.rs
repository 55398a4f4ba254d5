use chrono::{DateTime, Utc};

use serde::{Deserialize, Serialize};

/// Comment metadata and text.
///
/// Belongs to exactly one post. The content string is the only identity the
/// record carries.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Text as content of the comment.
    pub content: String,

    /// Instant of creation, ISO-8601 on the wire.
    pub created_at: DateTime<Utc>,

    /// Likes received. Only ever goes up.
    #[serde(default)]
    pub like_count: u32,
}

/// Stored comment payloads come in two shapes, older builds saved bare
/// strings.
#[derive(Deserialize, PartialEq, Clone, Debug)]
#[serde(untagged)]
pub enum StoredComment {
    Record(Comment),
    Legacy(String),
}

impl StoredComment {
    /// Upgrade to the current record shape.
    ///
    /// Legacy entries have no timestamp of their own and take `now`.
    pub fn into_comment(self, now: DateTime<Utc>) -> Comment {
        match self {
            StoredComment::Record(comment) => comment,
            StoredComment::Legacy(content) => Comment {
                content,
                created_at: now,
                like_count: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_record_decode() {
        let json = r#"[{"content":"boa!","createdAt":"2024-10-14T15:15:30Z","likeCount":3}]"#;

        let stored: Vec<StoredComment> = serde_json::from_str(json).unwrap();
        let now = Utc::now();

        let comments: Vec<Comment> = stored.into_iter().map(|c| c.into_comment(now)).collect();

        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].content, "boa!");
        assert_eq!(comments[0].like_count, 3);
        assert_eq!(
            comments[0].created_at,
            "2024-10-14T15:15:30Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn missing_like_count_defaults_to_zero() {
        let json = r#"{"content":"boa!","createdAt":"2024-10-14T15:15:30Z"}"#;

        let comment: Comment = serde_json::from_str(json).unwrap();

        assert_eq!(comment.like_count, 0);
    }

    #[test]
    fn legacy_string_decode() {
        let json = r#"["hello"]"#;

        let stored: Vec<StoredComment> = serde_json::from_str(json).unwrap();
        let now = Utc::now();

        let comments: Vec<Comment> = stored.into_iter().map(|c| c.into_comment(now)).collect();

        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].content, "hello");
        assert_eq!(comments[0].like_count, 0);
        assert_eq!(comments[0].created_at, now);
    }

    #[test]
    fn mixed_shapes_decode() {
        let json = r#"["velho",{"content":"novo","createdAt":"2024-10-14T15:15:30Z","likeCount":1}]"#;

        let stored: Vec<StoredComment> = serde_json::from_str(json).unwrap();

        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0], StoredComment::Legacy("velho".into()));
        assert!(matches!(&stored[1], StoredComment::Record(c) if c.like_count == 1));
    }

    #[test]
    fn record_roundtrip() {
        let comment = Comment {
            content: "muito bom!".into(),
            created_at: "2024-10-14T15:15:30Z".parse().unwrap(),
            like_count: 7,
        };

        let json = serde_json::to_string(&comment).unwrap();

        assert!(json.contains(r#""createdAt":"2024-10-14T15:15:30Z""#));
        assert!(json.contains(r#""likeCount":7"#));

        let decoded: Comment = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, comment);
    }
}
