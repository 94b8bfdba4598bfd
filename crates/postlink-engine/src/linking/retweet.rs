use crate::linking::LinkError;
use crate::render::{RenderContext, markup::anchor};
use regex::Regex;
use std::sync::OnceLock;

// Leading "RT @handle" terminated by a literal ':' or a literal '$',
// case-insensitive. The '$' is a character, not an end-of-line anchor.
fn prefix_regex() -> &'static Regex {
    static RT_PREFIX: OnceLock<Regex> = OnceLock::new();
    RT_PREFIX.get_or_init(|| {
        Regex::new(r"(?i)^(RT\s)@(\w*)[:$]").expect("invalid retweet prefix regex")
    })
}

/// Rewrite a leading `RT @handle:` attribution into a linked username.
///
/// Returns the rewritten prefix fragment, e.g.
/// `RT <a href="http://twitter.com/someone">@someone</a>: ` — the trailing
/// `: ` separator is emitted whichever terminator matched.
///
/// A post flagged as a retweet whose text lacks the prefix is a
/// [`LinkError::RetweetPrefixNotFound`]: silently proceeding would
/// misattribute authorship, so the caller has to handle the mismatch.
pub fn resolve_retweet_prefix(ctx: &RenderContext, text: &str) -> Result<String, LinkError> {
    let caps = prefix_regex()
        .captures(text)
        .ok_or_else(|| LinkError::RetweetPrefixNotFound(text.to_string()))?;

    let lead = &caps[1];
    let handle = &caps[2];
    let linked = anchor(&ctx.profile_url(handle), &format!("@{handle}"), false);
    Ok(format!("{lead}{linked}: "))
}
