//! Post and comment persistence.
//!
//! Comments live in their own table and are appended with a single INSERT,
//! so concurrent comment submissions on one post never overwrite each other.
//! Title search matches against `title_folded`, a copy of the title
//! lowercased in Rust on every write, so non-ASCII letters fold as well.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use crate::shared::{AuthorSummary, CategorySummary, Comment, PopulatedPost, Post, PostPage, StoredPost};

const POST_SELECT: &str = r#"
    SELECT p.id, p.title, p.content, p.category_id, p.author_id, p.featured_image,
           p.created_at, p.updated_at,
           c.name AS category_name, u.name AS author_name
    FROM posts p
    LEFT JOIN categories c ON c.id = p.category_id
    LEFT JOIN users u ON u.id = p.author_id
"#;

const TITLE_FILTER: &str = "(?1 IS NULL OR instr(p.title_folded, ?1) > 0)";

fn fold(text: &str) -> String {
    text.to_lowercase()
}

#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    content: String,
    category_id: Uuid,
    author_id: Uuid,
    featured_image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_name: Option<String>,
    author_name: Option<String>,
}

impl PostRow {
    fn populated(self, comments: Vec<Comment>) -> PopulatedPost {
        let category_id = self.category_id;
        let author_id = self.author_id;
        Post {
            id: self.id,
            title: self.title,
            content: self.content,
            category: self.category_name.map(|name| CategorySummary { id: category_id, name }),
            author: self.author_name.map(|name| AuthorSummary { id: author_id, name }),
            featured_image: self.featured_image,
            comments,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn stored(self, comments: Vec<Comment>) -> StoredPost {
        Post {
            id: self.id,
            title: self.title,
            content: self.content,
            category: self.category_id,
            author: self.author_id,
            featured_image: self.featured_image,
            comments,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    post_id: Uuid,
    user_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
}

/// Fields of a post being created, already validated
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: Uuid,
    pub featured_image: Option<String>,
}

/// Fields to overwrite on update; `None` keeps the stored value.
///
/// `featured_image: Some(None)` clears the image.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<Uuid>,
    pub featured_image: Option<Option<String>>,
}

/// Comments for a set of posts, in insertion order
async fn load_comments(
    pool: &SqlitePool,
    post_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<Comment>>, sqlx::Error> {
    let mut grouped: HashMap<Uuid, Vec<Comment>> = HashMap::new();
    if post_ids.is_empty() {
        return Ok(grouped);
    }

    let mut builder = QueryBuilder::<Sqlite>::new(
        "SELECT id, post_id, user_id, content, created_at FROM comments WHERE post_id IN (",
    );
    let mut separated = builder.separated(", ");
    for id in post_ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(") ORDER BY created_at ASC, rowid ASC");

    let rows = builder.build_query_as::<CommentRow>().fetch_all(pool).await?;
    for row in rows {
        grouped.entry(row.post_id).or_default().push(Comment {
            id: row.id,
            user: row.user_id,
            content: row.content,
            created_at: row.created_at,
        });
    }

    Ok(grouped)
}

async fn fetch_row(pool: &SqlitePool, id: Uuid) -> Result<Option<PostRow>, sqlx::Error> {
    let sql = format!("{POST_SELECT} WHERE p.id = ?1");
    sqlx::query_as::<_, PostRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// One page of posts, newest first, optionally filtered by title substring
pub async fn list_posts(
    pool: &SqlitePool,
    search: Option<&str>,
    page: u32,
    limit: u32,
) -> Result<PostPage, sqlx::Error> {
    let search = search.map(fold);

    let count_sql = format!("SELECT COUNT(*) FROM posts p WHERE {TITLE_FILTER}");
    let (total,): (i64,) = sqlx::query_as(&count_sql)
        .bind(&search)
        .fetch_one(pool)
        .await?;

    // An offset past i64::MAX cannot address any row
    let offset = i64::from(page.saturating_sub(1)).checked_mul(i64::from(limit));
    let rows = match offset {
        Some(offset) if offset < total => {
            let list_sql = format!(
                "{POST_SELECT} WHERE {TITLE_FILTER} ORDER BY p.created_at DESC, p.rowid DESC LIMIT ?2 OFFSET ?3"
            );
            sqlx::query_as::<_, PostRow>(&list_sql)
                .bind(&search)
                .bind(i64::from(limit))
                .bind(offset)
                .fetch_all(pool)
                .await?
        }
        _ => Vec::new(),
    };

    let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
    let mut comments = load_comments(pool, &ids).await?;

    let total = u64::try_from(total).unwrap_or_default();
    let posts = rows
        .into_iter()
        .map(|row| {
            let post_comments = comments.remove(&row.id).unwrap_or_default();
            row.populated(post_comments)
        })
        .collect();

    Ok(PostPage {
        posts,
        total,
        page,
        pages: PostPage::page_count(total, limit),
    })
}

/// Post with category and author expanded
pub async fn get_post(pool: &SqlitePool, id: Uuid) -> Result<Option<PopulatedPost>, sqlx::Error> {
    let Some(row) = fetch_row(pool, id).await? else {
        return Ok(None);
    };
    let comments = load_comments(pool, &[id]).await?.remove(&id).unwrap_or_default();
    Ok(Some(row.populated(comments)))
}

/// Post with bare reference ids
pub async fn get_stored_post(pool: &SqlitePool, id: Uuid) -> Result<Option<StoredPost>, sqlx::Error> {
    let Some(row) = fetch_row(pool, id).await? else {
        return Ok(None);
    };
    let comments = load_comments(pool, &[id]).await?.remove(&id).unwrap_or_default();
    Ok(Some(row.stored(comments)))
}

pub async fn create_post(
    pool: &SqlitePool,
    author: Uuid,
    draft: PostDraft,
) -> Result<StoredPost, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO posts (id, title, title_folded, content, category_id, author_id, featured_image, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
        "#,
    )
    .bind(id)
    .bind(&draft.title)
    .bind(fold(&draft.title))
    .bind(&draft.content)
    .bind(draft.category)
    .bind(author)
    .bind(&draft.featured_image)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Post {
        id,
        title: draft.title,
        content: draft.content,
        category: draft.category,
        author,
        featured_image: draft.featured_image,
        comments: Vec::new(),
        created_at: now,
        updated_at: now,
    })
}

/// Apply a partial update. Returns `None` if the post does not exist.
pub async fn update_post(
    pool: &SqlitePool,
    id: Uuid,
    changes: PostChanges,
) -> Result<Option<StoredPost>, sqlx::Error> {
    let title_folded = changes.title.as_deref().map(fold);
    let result = sqlx::query(
        r#"
        UPDATE posts
        SET title = COALESCE(?1, title),
            title_folded = COALESCE(?2, title_folded),
            content = COALESCE(?3, content),
            category_id = COALESCE(?4, category_id),
            featured_image = CASE WHEN ?5 THEN ?6 ELSE featured_image END,
            updated_at = ?7
        WHERE id = ?8
        "#,
    )
    .bind(changes.title)
    .bind(title_folded)
    .bind(changes.content)
    .bind(changes.category)
    .bind(changes.featured_image.is_some())
    .bind(changes.featured_image.flatten())
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_stored_post(pool, id).await
}

/// Delete a post and its comments. Returns `false` if nothing was deleted.
pub async fn delete_post(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM comments WHERE post_id = ?1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM posts WHERE id = ?1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.rows_affected() > 0)
}

/// Append a comment and return the updated post, or `None` if the post does
/// not exist.
pub async fn add_comment(
    pool: &SqlitePool,
    post_id: Uuid,
    user_id: Uuid,
    content: &str,
) -> Result<Option<PopulatedPost>, sqlx::Error> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let touched = sqlx::query("UPDATE posts SET updated_at = ?1 WHERE id = ?2")
        .bind(now)
        .bind(post_id)
        .execute(&mut *tx)
        .await?;

    // Dropping the transaction rolls it back
    if touched.rows_affected() == 0 {
        return Ok(None);
    }

    sqlx::query(
        r#"
        INSERT INTO comments (id, post_id, user_id, content, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(post_id)
    .bind(user_id)
    .bind(content)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    get_post(pool, post_id).await
}
