use crate::models::Post;
use crate::render::RenderContext;

/// Build an anchor element. The only markup this crate emits besides `<br>`.
///
/// `target="_blank"` sits immediately before the closing `>` of the opening
/// tag when requested. No escaping is applied to either argument; the output
/// contract is pass-through.
pub fn anchor(href: &str, display: &str, open_in_new_tab: bool) -> String {
    if open_in_new_tab {
        format!("<a href=\"{href}\" target=\"_blank\">{display}</a>")
    } else {
        format!("<a href=\"{href}\">{display}</a>")
    }
}

/// Replace every literal newline with a line-break element. Runs once, after
/// all entity linking.
pub fn break_lines(text: &str) -> String {
    text.replace('\n', "<br>")
}

/// Permalink for a post, when enough of the payload is present to build one.
///
/// Falls back to the context's default handle for posts whose author is
/// missing. Without a status id there is nothing to link to.
pub fn permalink(ctx: &RenderContext, post: &Post) -> Option<String> {
    let id = post.id_str.as_deref()?;
    let handle = post
        .user
        .as_ref()
        .and_then(|user| user.screen_name.as_deref())
        .or_else(|| ctx.default_handle())?;
    Some(ctx.status_url(handle, id))
}
