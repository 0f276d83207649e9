use chrono::{DateTime, Utc};

use crate::error::ValidationError;

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// Maximum author name length, in characters.
pub const USERNAME_MAX_CHARS: usize = 100;

/// How many posts the board shows at once.
pub const RECENT_POSTS_LIMIT: u64 = 30;

/// Post entity - a single immutable board entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// A post that has passed field validation but is not stored yet.
///
/// The only way to obtain one is [`NewPost::new`], so anything handed to a
/// repository already satisfies the field constraints. Identity and
/// timestamp are assigned by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: String,
    username: String,
}

impl NewPost {
    /// Validate and build a new post.
    ///
    /// Fields are checked in order (`title`, `content`, `username`) and the
    /// first violation is returned. Lengths count characters, not bytes.
    pub fn new(title: String, content: String, username: String) -> Result<Self, ValidationError> {
        check_field("title", &title, Some(TITLE_MAX_CHARS))?;
        check_field("content", &content, None)?;
        check_field("username", &username, Some(USERNAME_MAX_CHARS))?;

        Ok(Self {
            title,
            content,
            username,
        })
    }

    /// Split into owned `(title, content, username)`.
    pub fn into_parts(self) -> (String, String, String) {
        (self.title, self.content, self.username)
    }
}

fn check_field(field: &'static str, value: &str, max: Option<usize>) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if let Some(max) = max {
        let actual = value.chars().count();
        if actual > max {
            return Err(ValidationError::TooLong { field, max, actual });
        }
    }

    Ok(())
}
