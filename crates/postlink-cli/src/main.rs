use anyhow::{Context, Result};
use postlink_config::Config;
use postlink_engine::{LinkOptions, Post, RenderContext, render::permalink, render_post};
use std::io::Read;
use std::{env, process};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <posts.json | ->", args[0]);
        eprintln!("Reads a JSON array of posts and prints one HTML fragment per post.");
        eprintln!(
            "Options come from {} when present.",
            Config::config_path().display()
        );
        process::exit(1);
    }

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let input = read_input(&args[1])?;
    let posts: Vec<Post> =
        serde_json::from_str(&input).context("input is not a JSON array of posts")?;

    let ctx = config.render_context();
    let opts = config.link_options();

    for post in &posts {
        match render_fragment(post, &ctx, opts) {
            Ok(fragment) => println!("{fragment}"),
            // A post whose retweet prefix is missing (or, in strict mode,
            // whose records are malformed) is reported and skipped; the
            // rest of the batch still renders.
            Err(e) => eprintln!("Warning: skipping post: {e}"),
        }
    }

    Ok(())
}

fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("failed to read {source}"))
    }
}

fn render_fragment(
    post: &Post,
    ctx: &RenderContext,
    opts: LinkOptions,
) -> Result<String, postlink_engine::LinkError> {
    let markup = render_post(post, ctx, opts)?;
    Ok(match permalink(ctx, post) {
        Some(link) => format!("<li><a href=\"{link}\">permalink</a> {markup}</li>"),
        None => format!("<li>{markup}</li>"),
    })
}
