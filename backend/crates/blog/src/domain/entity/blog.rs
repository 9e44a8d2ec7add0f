//! Blog Entity
//!
//! ## Invariants
//! - `title` and `url` are non-empty after trimming
//! - `likes` is never negative
//! - `owner_id` is set once at creation and never changes

use chrono::{DateTime, Utc};
use kernel::id::{BlogId, UserId};

use crate::error::{BlogError, BlogResult};

/// Raw, unvalidated blog fields as received from a caller
///
/// Every field is optional. Creation and update apply different rules
/// to the same shape.
#[derive(Debug, Clone, Default)]
pub struct BlogInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

/// Validated fields for a blog about to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
}

impl NewBlog {
    /// Validate creation input
    ///
    /// `title` and `url` are required. `author` defaults to the empty
    /// string; an absent `likes` defaults to 0 while an explicit 0 stays 0.
    pub fn try_from_input(input: BlogInput) -> BlogResult<Self> {
        let title = required(input.title, "title")?;
        let url = required(input.url, "url")?;
        let author = input.author.map(|a| a.trim().to_string()).unwrap_or_default();
        let likes = match input.likes {
            Some(likes) => non_negative(likes)?,
            None => 0,
        };

        Ok(Self {
            title,
            author,
            url,
            likes,
        })
    }
}

/// Validated partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl BlogChanges {
    pub fn try_from_input(input: BlogInput) -> BlogResult<Self> {
        let title = input.title.map(|t| required(Some(t), "title")).transpose()?;
        let url = input.url.map(|u| required(Some(u), "url")).transpose()?;
        let author = input.author.map(|a| a.trim().to_string());
        let likes = input.likes.map(non_negative).transpose()?;

        Ok(Self {
            title,
            author,
            url,
            likes,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.url.is_none() && self.likes.is_none()
    }
}

fn required(value: Option<String>, field: &'static str) -> BlogResult<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(BlogError::MissingField(field)),
    }
}

fn non_negative(likes: i64) -> BlogResult<i64> {
    if likes < 0 {
        return Err(BlogError::InvalidLikes(likes));
    }
    Ok(likes)
}

/// A blog record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub blog_id: BlogId,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    /// Creator; immutable
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    pub fn new(fields: NewBlog, owner_id: UserId) -> Self {
        Self {
            blog_id: BlogId::new(),
            title: fields.title,
            author: fields.author,
            url: fields.url,
            likes: fields.likes,
            owner_id,
            created_at: Utc::now(),
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    /// Apply a partial update. The owner is not part of [`BlogChanges`].
    pub fn apply(&mut self, changes: &BlogChanges) {
        if let Some(title) = &changes.title {
            self.title.clone_from(title);
        }
        if let Some(author) = &changes.author {
            self.author.clone_from(author);
        }
        if let Some(url) = &changes.url {
            self.url.clone_from(url);
        }
        if let Some(likes) = changes.likes {
            self.likes = likes;
        }
    }
}
