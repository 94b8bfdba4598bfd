use serde::Deserialize;
use std::fmt;

/// A single post as delivered by the upstream API collaborator.
///
/// The linker never mutates a `Post`; every operation returns a new string.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub text: String,
    #[serde(default)]
    pub entities: Option<Entities>,
    #[serde(default)]
    pub retweeted_status: Option<Box<Post>>,
    #[serde(default)]
    pub id_str: Option<String>,
    #[serde(default)]
    pub user: Option<Author>,
}

impl Post {
    /// A bare post with no entities attached, mostly useful in tests.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entities: None,
            retweeted_status: None,
            id_str: None,
            user: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub screen_name: Option<String>,
}

/// Entity groups keyed by wire tag, in the order the payload listed them.
///
/// Group order is observable: the legacy sequential strategy replaces
/// type-by-type in this order, so it must survive deserialization. A plain
/// map type would lose it, hence the pair-list representation and the
/// hand-rolled map visitor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entities(Vec<(String, Vec<EntityRecord>)>);

impl Entities {
    pub fn new(groups: Vec<(String, Vec<EntityRecord>)>) -> Self {
        Self(groups)
    }

    /// Iterate groups in wire order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[EntityRecord])> {
        self.0.iter().map(|(tag, records)| (tag.as_str(), records.as_slice()))
    }

    /// Records for one tag, if the group is present.
    pub fn get(&self, tag: &str) -> Option<&[EntityRecord]> {
        self.0
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, records)| records.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Entities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct GroupsVisitor;

        impl<'de> serde::de::Visitor<'de> for GroupsVisitor {
            type Value = Entities;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of entity groups")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Entities, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Vec<EntityRecord>>()? {
                    groups.push(entry);
                }
                Ok(Entities(groups))
            }
        }

        deserializer.deserialize_map(GroupsVisitor)
    }
}

/// One raw entity record off the wire.
///
/// Records are lenient by design: which fields are present depends on the
/// group tag, and upstream payloads have been observed with fields missing.
/// The resolver decides what a given kind requires.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EntityRecord {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub display_url: Option<String>,
    #[serde(default)]
    pub expanded_url: Option<String>,
    #[serde(default)]
    pub screen_name: Option<String>,
}

impl EntityRecord {
    pub fn hashtag(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn link(
        url: impl Into<String>,
        display_url: impl Into<String>,
        expanded_url: impl Into<String>,
    ) -> Self {
        Self {
            url: Some(url.into()),
            display_url: Some(display_url.into()),
            expanded_url: Some(expanded_url.into()),
            ..Self::default()
        }
    }

    pub fn mention(screen_name: impl Into<String>) -> Self {
        Self {
            screen_name: Some(screen_name.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserialize_preserves_group_order() {
        let json = r#"{
            "text": "hi",
            "entities": {
                "urls": [],
                "hashtags": [{"text": "one"}],
                "user_mentions": [{"screen_name": "someone"}]
            }
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        let entities = post.entities.unwrap();
        let tags: Vec<&str> = entities.groups().map(|(tag, _)| tag).collect();
        assert_eq!(tags, vec!["urls", "hashtags", "user_mentions"]);
    }

    #[test]
    fn deserialize_keeps_unknown_groups() {
        let json = r#"{
            "text": "hi",
            "entities": {
                "symbols": [{"text": "TWTR"}]
            }
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        let entities = post.entities.unwrap();
        assert_eq!(entities.get("symbols").unwrap().len(), 1);
    }

    #[test]
    fn deserialize_post_without_entities() {
        let post: Post = serde_json::from_str(r#"{"text": "just text"}"#).unwrap();
        assert!(post.entities.is_none());
        assert!(post.retweeted_status.is_none());
    }

    #[test]
    fn deserialize_record_ignores_extra_fields() {
        let json = r#"{"text": "tag", "indices": [0, 4]}"#;
        let record: EntityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.text.as_deref(), Some("tag"));
        assert!(record.url.is_none());
    }

    #[test]
    fn deserialize_nested_retweet() {
        let json = r#"{
            "text": "RT @someone: original",
            "retweeted_status": {
                "text": "original",
                "entities": {"hashtags": []}
            }
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        let rt = post.retweeted_status.unwrap();
        assert_eq!(rt.text, "original");
        assert!(rt.entities.unwrap().get("hashtags").unwrap().is_empty());
    }
}
