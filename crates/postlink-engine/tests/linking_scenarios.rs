use postlink_engine::{
    LinkOptions, Post, RenderContext, ReplacementStrategy, render_post, render::permalink,
};
use pretty_assertions::assert_eq;

fn load_fixture(name: &str) -> Post {
    let json = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.json",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn fixture_post_links_every_entity() {
    let post = load_fixture("post");
    let ctx = RenderContext::default();

    let out = render_post(&post, &ctx, LinkOptions::default()).unwrap();
    insta::assert_snapshot!(
        out,
        @r#"Along with our new <a href="http://twitter.com/#search/%23Twitterbird">#Twitterbird</a>, we've also updated our Display Guidelines: <a href="https://dev.twitter.com/terms/display-guidelines">dev.twitter.com/terms/display-…</a>. Thanks <a href="http://twitter.com/DavidMuir">@DavidMuir</a>!"#
    );
}

#[test]
fn fixture_post_with_new_tab_anchors() {
    let post = load_fixture("post");
    let ctx = RenderContext::default();
    let opts = LinkOptions {
        open_in_new_tab: true,
        ..LinkOptions::default()
    };

    let out = render_post(&post, &ctx, opts).unwrap();
    insta::assert_snapshot!(
        out,
        @r#"Along with our new <a href="http://twitter.com/#search/%23Twitterbird" target="_blank">#Twitterbird</a>, we've also updated our Display Guidelines: <a href="https://dev.twitter.com/terms/display-guidelines" target="_blank">dev.twitter.com/terms/display-…</a>. Thanks <a href="http://twitter.com/DavidMuir" target="_blank">@DavidMuir</a>!"#
    );
}

#[test]
fn fixture_post_without_entities_passes_through() {
    let post = load_fixture("post-no-entities");
    let ctx = RenderContext::default();

    let out = render_post(&post, &ctx, LinkOptions::default()).unwrap();
    assert_eq!(out, post.text);
}

#[test]
fn fixture_retweet_links_prefix_and_retweeted_entities() {
    let post = load_fixture("post-retweeted");
    let ctx = RenderContext::default();

    // The outer post's own entity list mentions the retweeted author; the
    // linked text must come from the retweeted post's entities instead, or
    // the rewritten prefix anchor would get rematched.
    let out = render_post(&post, &ctx, LinkOptions::default()).unwrap();
    insta::assert_snapshot!(
        out,
        @r#"RT <a href="http://twitter.com/b_magnanti">@b_magnanti</a>: Correlation is not... oh wait, yes. Yes it is. <a href="http://twitter.com/b_magnanti/status/555461494704709633/photo/1">pic.twitter.com/lQs5uv3HHr</a>"#
    );
}

#[test]
fn both_strategies_agree_on_the_fixture_post() {
    let post = load_fixture("post");
    let ctx = RenderContext::default();

    let by_offset = render_post(&post, &ctx, LinkOptions::default()).unwrap();
    let sequential = render_post(
        &post,
        &ctx,
        LinkOptions {
            strategy: ReplacementStrategy::SequentialPasses,
            ..LinkOptions::default()
        },
    )
    .unwrap();

    assert_eq!(by_offset, sequential);
}

#[test]
fn linking_is_deterministic_across_fresh_passes() {
    let post = load_fixture("post");
    let ctx = RenderContext::default();

    let first = render_post(&post, &ctx, LinkOptions::default()).unwrap();
    let second = render_post(&post, &ctx, LinkOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn fixture_posts_expose_permalinks() {
    let ctx = RenderContext::default().with_default_handle("dcompute");

    let post = load_fixture("post");
    assert_eq!(
        permalink(&ctx, &post).unwrap(),
        "http://twitter.com/twitterapi/status/190430984313758720"
    );

    let retweet = load_fixture("post-retweeted");
    assert_eq!(
        permalink(&ctx, &retweet).unwrap(),
        "http://twitter.com/dcompute/status/555461908338615808"
    );
}
