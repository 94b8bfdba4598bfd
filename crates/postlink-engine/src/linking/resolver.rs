use crate::linking::LinkError;
use crate::models::{EntityKind, EntityRecord, Replacement};
use crate::render::RenderContext;

/// Derive the `{search, display, href}` triple for one entity record.
///
/// Pure string composition against the injected context. Returns `None` when
/// the record lacks a field its kind requires; the linker treats that as a
/// silent no-op so one bad record never aborts a whole post.
pub fn resolve(
    ctx: &RenderContext,
    kind: EntityKind,
    record: &EntityRecord,
) -> Option<Replacement> {
    match kind {
        EntityKind::Hashtag => {
            let text = record.text.as_deref()?;
            let tagged = format!("#{text}");
            Some(Replacement {
                search: tagged.clone(),
                display: tagged,
                href: ctx.hashtag_search_url(text),
            })
        }
        // Media and plain urls carry the same triple: the t.co-style short
        // form is what appears in the text, the display form is what the
        // reader sees, the expanded form is where the anchor goes.
        EntityKind::Media | EntityKind::Url => Some(Replacement {
            search: record.url.clone()?,
            display: record.display_url.clone()?,
            href: record.expanded_url.clone()?,
        }),
        EntityKind::UserMention => {
            let handle = record.screen_name.as_deref()?;
            let tagged = format!("@{handle}");
            Some(Replacement {
                search: tagged.clone(),
                display: tagged,
                href: ctx.profile_url(handle),
            })
        }
    }
}

/// Hardened variant: a record missing a required field is an error naming
/// the field, instead of a silent skip. Opt-in via
/// [`LinkOptions::strict_records`](crate::LinkOptions).
pub fn resolve_strict(
    ctx: &RenderContext,
    kind: EntityKind,
    record: &EntityRecord,
) -> Result<Replacement, LinkError> {
    resolve(ctx, kind, record).ok_or_else(|| LinkError::MalformedRecord {
        kind,
        field: missing_field(kind, record),
    })
}

fn missing_field(kind: EntityKind, record: &EntityRecord) -> &'static str {
    match kind {
        EntityKind::Hashtag => "text",
        EntityKind::Media | EntityKind::Url => {
            if record.url.is_none() {
                "url"
            } else if record.display_url.is_none() {
                "display_url"
            } else {
                "expanded_url"
            }
        }
        EntityKind::UserMention => "screen_name",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn ctx() -> RenderContext {
        RenderContext::default()
    }

    #[test]
    fn hashtag_triple() {
        let record = EntityRecord::hashtag("Twitterbird");
        let rep = resolve(&ctx(), EntityKind::Hashtag, &record).unwrap();

        assert_eq!(rep.search, "#Twitterbird");
        assert_eq!(rep.display, "#Twitterbird");
        assert_eq!(rep.href, "http://twitter.com/#search/%23Twitterbird");
    }

    #[rstest]
    #[case(EntityKind::Media)]
    #[case(EntityKind::Url)]
    fn media_and_url_map_identically(#[case] kind: EntityKind) {
        let record = EntityRecord::link(
            "https://t.co/Ed4omjYs",
            "dev.twitter.com/terms/display-\u{2026}",
            "https://dev.twitter.com/terms/display-guidelines",
        );
        let rep = resolve(&ctx(), kind, &record).unwrap();

        assert_eq!(rep.search, "https://t.co/Ed4omjYs");
        assert_eq!(rep.display, "dev.twitter.com/terms/display-\u{2026}");
        assert_eq!(rep.href, "https://dev.twitter.com/terms/display-guidelines");
    }

    #[test]
    fn user_mention_triple() {
        let record = EntityRecord::mention("DavidMuir");
        let rep = resolve(&ctx(), EntityKind::UserMention, &record).unwrap();

        assert_eq!(rep.search, "@DavidMuir");
        assert_eq!(rep.display, "@DavidMuir");
        assert_eq!(rep.href, "http://twitter.com/DavidMuir");
    }

    #[rstest]
    #[case(EntityKind::Hashtag)]
    #[case(EntityKind::Media)]
    #[case(EntityKind::Url)]
    #[case(EntityKind::UserMention)]
    fn empty_record_resolves_to_none(#[case] kind: EntityKind) {
        assert_eq!(resolve(&ctx(), kind, &EntityRecord::default()), None);
    }

    #[test]
    fn strict_names_the_missing_field() {
        let mut record = EntityRecord::link("https://t.co/x", "t.co/x", "");
        record.expanded_url = None;

        let err = resolve_strict(&ctx(), EntityKind::Url, &record).unwrap_err();
        match err {
            LinkError::MalformedRecord { kind, field } => {
                assert_eq!(kind, EntityKind::Url);
                assert_eq!(field, "expanded_url");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn strict_passes_well_formed_records() {
        let record = EntityRecord::hashtag("ok");
        assert!(resolve_strict(&ctx(), EntityKind::Hashtag, &record).is_ok());
    }
}
