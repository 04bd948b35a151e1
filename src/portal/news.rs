//! In-memory news store with the composer draft.
//!
//! Items are kept newest first. Nothing here touches disk; the list is
//! rebuilt from seed data on every start.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::dates::utc_date;
use super::draft::{Draft, DraftError};
use super::model::{NewsId, NewsItem};

/// Issues ids from the wall clock in milliseconds, bumped past the last
/// issued id so two posts in the same millisecond still differ.
#[derive(Debug, Default)]
struct IdSequence {
    last: NewsId,
}

impl IdSequence {
    fn starting_after(items: &[NewsItem]) -> Self {
        Self {
            last: items.iter().map(|i| i.id).max().unwrap_or(0),
        }
    }

    fn next(&mut self, now: DateTime<Utc>) -> NewsId {
        let millis = NewsId::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = millis.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

#[derive(Debug)]
pub struct NewsStore {
    items: Vec<NewsItem>,
    pub draft: Draft,
    composer_open: bool,
    ids: IdSequence,
}

impl NewsStore {
    pub fn new(seed: Vec<NewsItem>) -> Self {
        let ids = IdSequence::starting_after(&seed);
        Self {
            items: seed,
            draft: Draft::default(),
            composer_open: false,
            ids,
        }
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The `n` newest items (fewer if the list is shorter).
    pub fn recent(&self, n: usize) -> &[NewsItem] {
        &self.items[..n.min(self.items.len())]
    }

    pub fn is_composer_open(&self) -> bool {
        self.composer_open
    }

    pub fn open_composer(&mut self) {
        self.composer_open = true;
    }

    /// Hides the dialog; the draft text is kept for the next opening.
    pub fn close_composer(&mut self) {
        self.composer_open = false;
    }

    pub fn add_news(&mut self) -> Result<NewsId, DraftError> {
        self.add_news_at(Utc::now())
    }

    /// Publishes the draft as of `now`.
    ///
    /// On a validation error nothing changes: the list, the draft and the
    /// composer state are left exactly as they were.
    pub fn add_news_at(&mut self, now: DateTime<Utc>) -> Result<NewsId, DraftError> {
        if let Err(e) = self.draft.validate() {
            debug!(reason = %e, "draft rejected");
            return Err(e);
        }

        let item = NewsItem {
            id: self.ids.next(now),
            title: self.draft.title.text.clone(),
            content: self.draft.content.text.clone(),
            date: utc_date(now),
            author: self.draft.author.text.clone(),
        };
        let id = item.id;
        info!(id, title = %item.title, author = %item.author, "news published");

        self.items.insert(0, item);
        self.draft.clear();
        self.composer_open = false;
        Ok(id)
    }

    /// Removes the item with `id`. Returns whether anything was removed.
    pub fn delete_news(&mut self, id: NewsId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            info!(id, "news deleted");
        }
        removed
    }
}
