//! Client-side posts store
//!
//! Holds the posts currently shown and applies optimistic changes ahead of
//! the server. An optimistic add gets a temporary id and stays `Pending`
//! until `confirm_add` swaps in the server's record. An optimistic removal
//! hands back a [`Removal`] that restores the exact prior list if the
//! server rejects the delete.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::{NewPost, PopulatedPost, PostPage, StoredPost};

/// Client-generated id for a post the server has not acknowledged yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TempId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKey {
    Server(Uuid),
    Temporary(TempId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Confirmed,
    Pending,
}

/// A post as shown in the list
#[derive(Debug, Clone, PartialEq)]
pub struct PostEntry {
    pub key: EntryKey,
    pub state: EntryState,
    pub title: String,
    pub content: String,
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
    pub author_name: Option<String>,
    pub featured_image: Option<String>,
    pub comment_count: usize,
    pub created_at: Option<DateTime<Utc>>,
}

impl PostEntry {
    pub fn server_id(&self) -> Option<Uuid> {
        match self.key {
            EntryKey::Server(id) => Some(id),
            EntryKey::Temporary(_) => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == EntryState::Pending
    }
}

impl From<&PopulatedPost> for PostEntry {
    fn from(post: &PopulatedPost) -> Self {
        Self {
            key: EntryKey::Server(post.id),
            state: EntryState::Confirmed,
            title: post.title.clone(),
            content: post.content.clone(),
            category_id: post.category.as_ref().map(|c| c.id),
            category_name: post.category.as_ref().map(|c| c.name.clone()),
            author_name: post.author.as_ref().map(|a| a.name.clone()),
            featured_image: post.featured_image.clone(),
            comment_count: post.comments.len(),
            created_at: Some(post.created_at),
        }
    }
}

/// An entry taken out of the store by an optimistic delete
#[derive(Debug, Clone, PartialEq)]
pub struct Removal {
    entry: PostEntry,
    index: usize,
}

impl Removal {
    pub fn entry(&self) -> &PostEntry {
        &self.entry
    }

    /// Put the entry back where it was. Does nothing if a refetch has
    /// already brought the same post back.
    pub fn restore(self, store: &mut PostsStore) {
        if store.position(self.entry.key).is_some() {
            return;
        }
        let index = self.index.min(store.entries.len());
        store.entries.insert(index, self.entry);
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostsStore {
    entries: Vec<PostEntry>,
    next_temp: u64,
}

impl PostsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PostEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_pending()).count()
    }

    pub fn get(&self, key: EntryKey) -> Option<&PostEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    fn position(&self, key: EntryKey) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    /// Replace the whole list with a freshly fetched page. Pending entries
    /// are discarded along with everything else.
    pub fn replace_page(&mut self, page: &PostPage) {
        self.entries = page.posts.iter().map(PostEntry::from).collect();
    }

    /// Show a draft at the head of the list before the server has seen it.
    pub fn add_optimistic(&mut self, draft: &NewPost) -> TempId {
        self.next_temp += 1;
        let temp = TempId(self.next_temp);

        self.entries.insert(
            0,
            PostEntry {
                key: EntryKey::Temporary(temp),
                state: EntryState::Pending,
                title: draft.title.trim().to_string(),
                content: draft.content.clone(),
                category_id: Uuid::parse_str(draft.category.trim()).ok(),
                category_name: None,
                author_name: None,
                featured_image: draft.featured_image.clone(),
                comment_count: 0,
                created_at: None,
            },
        );
        temp
    }

    /// Swap a pending entry for the server's record, keeping its position.
    /// Returns false when the pending entry is gone (e.g. after a refetch).
    pub fn confirm_add(&mut self, temp: TempId, post: &StoredPost) -> bool {
        let Some(index) = self.position(EntryKey::Temporary(temp)) else {
            return false;
        };
        let entry = &mut self.entries[index];

        // A stored post carries ids only; keep names already shown for
        // the same category.
        if entry.category_id != Some(post.category) {
            entry.category_name = None;
        }
        entry.key = EntryKey::Server(post.id);
        entry.state = EntryState::Confirmed;
        entry.title = post.title.clone();
        entry.content = post.content.clone();
        entry.category_id = Some(post.category);
        entry.featured_image = post.featured_image.clone();
        entry.comment_count = post.comments.len();
        entry.created_at = Some(post.created_at);
        true
    }

    /// Take a post out of the list ahead of the server delete.
    pub fn remove_optimistic(&mut self, id: Uuid) -> Option<Removal> {
        let index = self.position(EntryKey::Server(id))?;
        let entry = self.entries.remove(index);
        Some(Removal { entry, index })
    }
}
