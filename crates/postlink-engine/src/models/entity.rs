/// The entity kinds the resolver knows how to link.
///
/// Wire payloads key entity groups by plural tag (`"hashtags"`,
/// `"user_mentions"`, ...). Tags outside this set resolve to `None` and the
/// whole group is skipped without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Hashtag,
    Media,
    Url,
    UserMention,
}

impl EntityKind {
    /// Map a wire tag onto a known kind. Unknown tags return `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "hashtags" => Some(Self::Hashtag),
            "media" => Some(Self::Media),
            "urls" => Some(Self::Url),
            "user_mentions" => Some(Self::UserMention),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Hashtag => "hashtags",
            Self::Media => "media",
            Self::Url => "urls",
            Self::UserMention => "user_mentions",
        }
    }
}

/// One planned substitution: find `search` in the post text and swap it for
/// an anchor showing `display` and pointing at `href`.
///
/// Ephemeral: produced by the resolver, consumed immediately by the linker,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub search: String,
    pub display: String,
    pub href: String,
}
