//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{BlogId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::blog::{Blog, BlogChanges};
use crate::domain::repository::BlogRepository;
use crate::error::BlogResult;

/// PostgreSQL-backed blog repository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl BlogRepository for PgBlogRepository {
    async fn create(&self, blog: &Blog) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO blogs (
                blog_id,
                title,
                author,
                url,
                likes,
                owner_id,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(blog.blog_id.as_uuid())
        .bind(&blog.title)
        .bind(&blog.author)
        .bind(&blog.url)
        .bind(blog.likes)
        .bind(blog.owner_id.as_uuid())
        .bind(blog.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all(&self) -> BlogResult<Vec<Blog>> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT
                blog_id,
                title,
                author,
                url,
                likes,
                owner_id,
                created_at
            FROM blogs
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BlogRow::into_blog).collect())
    }

    async fn find_by_id(&self, blog_id: &BlogId) -> BlogResult<Option<Blog>> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT
                blog_id,
                title,
                author,
                url,
                likes,
                owner_id,
                created_at
            FROM blogs
            WHERE blog_id = $1
            "#,
        )
        .bind(blog_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BlogRow::into_blog))
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> BlogResult<Vec<Blog>> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT
                blog_id,
                title,
                author,
                url,
                likes,
                owner_id,
                created_at
            FROM blogs
            WHERE owner_id = $1
            ORDER BY seq
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BlogRow::into_blog).collect())
    }

    async fn update(&self, blog_id: &BlogId, changes: &BlogChanges) -> BlogResult<Option<Blog>> {
        // owner_id is never in the SET list
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            UPDATE blogs SET
                title = COALESCE($2, title),
                author = COALESCE($3, author),
                url = COALESCE($4, url),
                likes = COALESCE($5, likes)
            WHERE blog_id = $1
            RETURNING
                blog_id,
                title,
                author,
                url,
                likes,
                owner_id,
                created_at
            "#,
        )
        .bind(blog_id.as_uuid())
        .bind(changes.title.as_deref())
        .bind(changes.author.as_deref())
        .bind(changes.url.as_deref())
        .bind(changes.likes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BlogRow::into_blog))
    }

    async fn delete(&self, blog_id: &BlogId) -> BlogResult<bool> {
        let deleted = sqlx::query("DELETE FROM blogs WHERE blog_id = $1")
            .bind(blog_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct BlogRow {
    blog_id: Uuid,
    title: String,
    author: String,
    url: String,
    likes: i64,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
}

impl BlogRow {
    fn into_blog(self) -> Blog {
        Blog {
            blog_id: BlogId::from_uuid(self.blog_id),
            title: self.title,
            author: self.author,
            url: self.url,
            likes: self.likes,
            owner_id: UserId::from_uuid(self.owner_id),
            created_at: self.created_at,
        }
    }
}
