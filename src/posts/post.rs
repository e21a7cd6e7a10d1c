use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque post identifier. The default value is the nil UUID, which never
/// names a stored post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(Uuid);

impl PostId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A stored post. Only the store constructs and mutates these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: PostId,
    title: String,
    content: String,
}

impl Post {
    /// Create a post with a fresh id. Title and content are trimmed.
    pub(crate) fn new(title: &str, content: &str) -> Self {
        Self {
            id: PostId::generate(),
            title: title.trim().to_string(),
            content: content.trim().to_string(),
        }
    }

    /// Overwrite title and content in place; the id never changes.
    pub(crate) fn revise(&mut self, title: &str, content: &str) {
        self.title = title.trim().to_string();
        self.content = content.trim().to_string();
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn view(&self) -> PostView {
        PostView {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

/// Lightweight projection of a post returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub id: PostId,
    pub title: String,
    pub content: String,
}
