use crate::{identity::Author, PostId};

use chrono::{DateTime, Utc};

use serde::{Deserialize, Serialize};

use strum::{Display, EnumString};

/// Classification of a single authored line.
#[derive(
    Serialize, Deserialize, Display, EnumString, PartialEq, Eq, Clone, Copy, Debug, Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LineKind {
    Paragraph,
    Link,
}

impl LineKind {
    /// Classify one trimmed line of authored text.
    ///
    /// A line is a link when it starts with `http://`, `https://` or `www.`,
    /// case-insensitively. Everything else is a paragraph.
    pub fn classify(line: &str) -> Self {
        const PREFIXES: [&str; 3] = ["http://", "https://", "www."];

        let bytes = line.as_bytes();

        for prefix in PREFIXES {
            let prefix = prefix.as_bytes();

            if bytes.len() >= prefix.len() && bytes[..prefix.len()].eq_ignore_ascii_case(prefix) {
                return LineKind::Link;
            }
        }

        LineKind::Paragraph
    }
}

/// One line of post content.
///
/// List order is display order.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct ContentLine {
    pub kind: LineKind,
    pub text: String,
}

impl ContentLine {
    /// Build a line from authored text, classifying it on the way in.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = LineKind::classify(&text);

        Self { kind, text }
    }
}

/// A top-level feed entry.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,

    pub author: Author,

    /// Ordered content lines, exactly as authored.
    pub content: Vec<ContentLine>,

    /// Instant of publication, ISO-8601 on the wire.
    pub published_at: DateTime<Utc>,
}
