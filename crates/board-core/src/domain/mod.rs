//! Domain entities - the core business objects.

mod post;

pub use post::{NewPost, Post, RECENT_POSTS_LIMIT, TITLE_MAX_CHARS, USERNAME_MAX_CHARS};
