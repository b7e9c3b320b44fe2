use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single blog post. The root (and only) entity of this store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Store-assigned surrogate key. Zero means "not yet persisted";
    /// immutable once assigned by the store.
    pub id: u32,

    /// Post title.
    pub title: String,

    /// Post body.
    pub content: String,

    /// Flat label set. Order is preserved on round-trip but carries no
    /// semantic weight.
    pub tags: Vec<String>,

    /// Creation timestamp, set by the caller at construction time.
    /// The store never defaults this.
    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new, unsaved BlogPost. The id stays zero until the first
    /// save assigns one.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            content: content.into(),
            tags,
            created_at: Utc::now(),
        }
    }

    /// Whether this post has been persisted yet.
    pub fn is_transient(&self) -> bool {
        self.id == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_is_transient() {
        let post = BlogPost::new("post", "hello", vec!["a".into(), "b".into()]);
        assert!(post.is_transient());
        assert_eq!(post.id, 0);
        assert_eq!(post.tags, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_saved_post_is_not_transient() {
        let mut post = BlogPost::new("post", "hello", Vec::new());
        post.id = 1;
        assert!(!post.is_transient());
    }
}
