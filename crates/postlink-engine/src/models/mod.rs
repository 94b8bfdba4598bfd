pub mod entity;
pub mod post;

pub use entity::{EntityKind, Replacement};
pub use post::{Author, Entities, EntityRecord, Post};
