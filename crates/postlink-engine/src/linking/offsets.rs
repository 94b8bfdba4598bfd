use crate::models::Replacement;
use crate::render::markup::anchor;

/// Offset-planned replacement over immutable original text.
///
/// Every search string is located in the *original* text, so an anchor
/// inserted for one entity can never be matched and corrupted by a later
/// one, whatever order the groups arrived in. Matches are applied
/// right-to-left so earlier offsets stay valid while splicing.
///
/// Each record still links only the first occurrence of its search string.
/// A record whose search string is absent, empty, or overlaps an
/// already-claimed span is dropped.
pub(crate) fn apply_by_offset(
    text: &str,
    replacements: &[Replacement],
    open_in_new_tab: bool,
) -> String {
    let mut claims: Vec<(usize, usize, String)> = Vec::new();

    for rep in replacements {
        if rep.search.is_empty() {
            continue;
        }
        let Some(start) = text.find(&rep.search) else {
            continue;
        };
        let end = start + rep.search.len();
        if claims.iter().any(|(s, e, _)| start < *e && *s < end) {
            continue;
        }
        claims.push((start, end, anchor(&rep.href, &rep.display, open_in_new_tab)));
    }

    claims.sort_by(|a, b| b.0.cmp(&a.0));

    let mut out = text.to_string();
    for (start, end, markup) in claims {
        out.replace_range(start..end, &markup);
    }
    out
}
