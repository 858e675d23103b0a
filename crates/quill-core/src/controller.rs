//! In-memory post list state and its synchronization rules.

use crate::client::RemoteContentClient;
use crate::error::ApiResult;
use crate::posts::{Post, PostDraft};

/// What the currently held post collection represents.
///
/// "No posts matched a search" and "nothing has been requested yet" are
/// distinguishable states; the collection alone cannot tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Nothing has been requested (or the full list was collapsed)
    Empty,
    /// The collection is the result of a search for this id
    SearchResult(u64),
    /// The collection is the full server-side list
    FullList,
}

/// Owns the displayed post collection and orchestrates CRUD against the
/// remote, keeping local state consistent with remote outcomes.
///
/// Updates are never optimistic: the collection is only mutated after the
/// remote acknowledges an operation. On failure the collection is left
/// exactly as it was, and the error propagates to the caller for display.
pub struct PostListController {
    client: RemoteContentClient,
    posts: Vec<Post>,
    mode: DisplayMode,
}

impl PostListController {
    pub fn new(client: RemoteContentClient) -> Self {
        Self {
            client,
            posts: Vec::new(),
            mode: DisplayMode::Empty,
        }
    }

    /// The currently displayed posts, in display order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Searches for a single post by id.
    ///
    /// A found post becomes the whole collection; a not-found id or any
    /// failure yields an empty collection. Either way the mode becomes
    /// `SearchResult(id)` — a failed or empty search is a valid terminal
    /// state, not an error surfaced to the list.
    pub async fn search(&mut self, id: u64) {
        match self.client.get_by_id(id).await {
            Ok(Some(post)) => self.posts = vec![post],
            Ok(None) => self.posts = Vec::new(),
            Err(e) => {
                tracing::warn!(id, error = %e, "search failed");
                self.posts = Vec::new();
            }
        }
        self.mode = DisplayMode::SearchResult(id);
    }

    /// Toggles between the full list and the collapsed empty view.
    ///
    /// From `FullList` this is a pure local collapse with no network call.
    /// From any other mode it fetches the full list; a failure leaves both
    /// the collection and the mode unchanged (no partial update).
    pub async fn toggle_view_all(&mut self) -> ApiResult<()> {
        if self.mode == DisplayMode::FullList {
            self.posts.clear();
            self.mode = DisplayMode::Empty;
            return Ok(());
        }

        let fetched = self.client.list_all().await?;
        self.posts = fetched;
        self.mode = DisplayMode::FullList;
        Ok(())
    }

    /// Creates a post on the remote.
    ///
    /// The server-assigned record is appended locally only while the full
    /// list is displayed; a search result or empty view represents a
    /// specific query and is not retroactively populated.
    pub async fn create(&mut self, draft: &PostDraft) -> ApiResult<Post> {
        let post = self.client.create(draft).await?;
        if self.mode == DisplayMode::FullList {
            self.posts.push(post.clone());
        }
        Ok(post)
    }

    /// Submits the full updated record for `id`.
    ///
    /// After remote acknowledgment the matching entry is replaced in place
    /// (same position). A stale id with no local entry is a collection
    /// no-op but still a success.
    pub async fn edit(&mut self, id: u64, draft: PostDraft) -> ApiResult<()> {
        let updated = draft.into_post(id);
        self.client.update(id, &updated).await?;
        if let Some(entry) = self.posts.iter_mut().find(|p| p.id == id) {
            *entry = updated;
        }
        Ok(())
    }

    /// Deletes the post with `id` on the remote, then removes it locally.
    ///
    /// On failure the entry remains displayed; deletion is never assumed.
    pub async fn delete(&mut self, id: u64) -> ApiResult<()> {
        self.client.delete(id).await?;
        self.posts.retain(|p| p.id != id);
        Ok(())
    }
}
