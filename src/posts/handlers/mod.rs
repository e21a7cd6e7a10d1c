pub mod create_post;
pub mod list_posts;
pub mod update_post;

pub use create_post::{CreatePost, CreatePostRules};
pub use list_posts::ListPosts;
pub use update_post::{UpdatePost, UpdatePostRules};

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` the same as a missing field, so the rules
/// report it instead of the body failing to parse.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
