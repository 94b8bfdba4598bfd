mod offsets;
pub mod resolver;
mod retweet;

pub use retweet::resolve_retweet_prefix;

use crate::models::{Entities, EntityKind, EntityRecord, Post, Replacement};
use crate::render::{RenderContext, markup};

#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("no retweet prefix found in text: {0:?}")]
    RetweetPrefixNotFound(String),
    #[error("malformed {} record: missing {field}", .kind.as_tag())]
    MalformedRecord {
        kind: EntityKind,
        field: &'static str,
    },
}

/// How search strings are substituted into the post text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplacementStrategy {
    /// Locate every search string in the original text first, then splice
    /// the anchors in right-to-left. Group order cannot affect the output
    /// and inserted markup is never rematched. The default.
    #[default]
    ByOffset,
    /// One buffer pass per entity group, each searching the previous pass's
    /// output, exactly as the legacy implementation did. Kept for parity;
    /// carries the documented hazard that a later group can match text
    /// inside an earlier group's anchor.
    SequentialPasses,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkOptions {
    /// Append ` target="_blank"` to every entity anchor.
    pub open_in_new_tab: bool,
    pub strategy: ReplacementStrategy,
    /// Treat a record missing a required field as an error instead of a
    /// silent skip.
    pub strict_records: bool,
}

/// Links one post's entities into its text.
///
/// Holds the post, the link options, and the accumulating markup buffer for
/// one linking operation. Instances share nothing; independent posts can be
/// linked concurrently without locking. The input post is never mutated.
pub struct TextLinker<'a> {
    post: &'a Post,
    ctx: &'a RenderContext,
    opts: LinkOptions,
    markup: String,
}

impl<'a> TextLinker<'a> {
    pub fn new(post: &'a Post, ctx: &'a RenderContext, opts: LinkOptions) -> Self {
        Self {
            post,
            ctx,
            opts,
            markup: String::new(),
        }
    }

    /// Replace every resolvable entity in the post text with anchor markup.
    ///
    /// A post without an entities field comes back unchanged, as does one
    /// whose groups are all empty. Only returns `Err` in strict-records
    /// mode; linking well-formed posts is total.
    pub fn link_all_entities(&mut self) -> Result<String, LinkError> {
        let Some(entities) = self.post.entities.as_ref() else {
            return Ok(self.post.text.clone());
        };

        match self.opts.strategy {
            ReplacementStrategy::ByOffset => {
                let replacements = self.resolve_all(entities)?;
                self.markup =
                    offsets::apply_by_offset(&self.post.text, &replacements, self.opts.open_in_new_tab);
            }
            ReplacementStrategy::SequentialPasses => {
                for (tag, records) in entities.groups() {
                    if records.is_empty() {
                        continue;
                    }
                    self.markup = self.link_all_of_entity_type(tag)?;
                }
            }
        }

        if self.markup.is_empty() {
            Ok(self.post.text.clone())
        } else {
            Ok(self.markup.clone())
        }
    }

    /// One legacy sequential pass: link every record of a single group,
    /// searching within the current buffer (or the original text when no
    /// pass has run yet).
    pub fn link_all_of_entity_type(&mut self, tag: &str) -> Result<String, LinkError> {
        let mut text = if self.markup.is_empty() {
            self.post.text.clone()
        } else {
            self.markup.clone()
        };

        let records = self
            .post
            .entities
            .as_ref()
            .and_then(|entities| entities.get(tag))
            .unwrap_or(&[]);

        // Unknown tags resolve to nothing; the group is a no-op, not an error.
        let Some(kind) = EntityKind::from_tag(tag) else {
            return Ok(text);
        };

        for record in records {
            if let Some(rep) = self.resolve_record(kind, record)? {
                text = replace_first(
                    &text,
                    &rep.search,
                    &markup::anchor(&rep.href, &rep.display, self.opts.open_in_new_tab),
                );
            }
        }

        Ok(text)
    }

    /// Consumer-facing render: retweet composition, entity linking, then
    /// newline normalization.
    ///
    /// A post carrying a retweeted payload gets its leading `RT @handle:`
    /// rewritten into a linked username; the linked prefix plus the
    /// retweeted post's own text is what entity linking then runs over,
    /// using the retweeted post's entity groups.
    pub fn render(&mut self) -> Result<String, LinkError> {
        let linked = match self.post.retweeted_status.as_deref() {
            Some(retweeted) => {
                let prefix = resolve_retweet_prefix(self.ctx, &self.post.text)?;
                let combined = Post {
                    text: format!("{prefix}{}", retweeted.text),
                    entities: retweeted.entities.clone(),
                    retweeted_status: None,
                    id_str: self.post.id_str.clone(),
                    user: self.post.user.clone(),
                };
                TextLinker::new(&combined, self.ctx, self.opts).link_all_entities()?
            }
            None => self.link_all_entities()?,
        };

        Ok(markup::break_lines(&linked))
    }

    fn resolve_all(&self, entities: &Entities) -> Result<Vec<Replacement>, LinkError> {
        let mut replacements = Vec::new();
        for (tag, records) in entities.groups() {
            let Some(kind) = EntityKind::from_tag(tag) else {
                continue;
            };
            for record in records {
                if let Some(rep) = self.resolve_record(kind, record)? {
                    replacements.push(rep);
                }
            }
        }
        Ok(replacements)
    }

    fn resolve_record(
        &self,
        kind: EntityKind,
        record: &EntityRecord,
    ) -> Result<Option<Replacement>, LinkError> {
        if self.opts.strict_records {
            resolver::resolve_strict(self.ctx, kind, record).map(Some)
        } else {
            Ok(resolver::resolve(self.ctx, kind, record))
        }
    }
}

/// Link one post end to end with a fresh linker.
pub fn render_post(
    post: &Post,
    ctx: &RenderContext,
    opts: LinkOptions,
) -> Result<String, LinkError> {
    TextLinker::new(post, ctx, opts).render()
}

// Single, first-occurrence, literal substring replacement. An empty or
// absent search string leaves the text untouched.
fn replace_first(text: &str, search: &str, replacement: &str) -> String {
    if search.is_empty() {
        return text.to_string();
    }
    text.replacen(search, replacement, 1)
}
