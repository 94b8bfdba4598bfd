pub mod linking;
pub mod models;
pub mod render;

// Re-export key types for easier usage
pub use linking::{
    LinkError, LinkOptions, ReplacementStrategy, TextLinker, render_post, resolve_retweet_prefix,
};
pub use models::{Author, Entities, EntityKind, EntityRecord, Post, Replacement};
pub use render::RenderContext;
