use serde::{Deserialize, Serialize};

/// Minimum viable author identity.
///
/// Display data only, there is no account behind it. Immutable once attached
/// to a post.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Image URL.
    pub avatar_url: String,

    /// Public chosen name.
    pub name: String,

    /// Short role line shown under the name.
    pub role: String,
}
