use crate::config::AppConfig;
use crate::portal::calendar::Calendar;
use crate::portal::draft::{DraftError, DraftField, TextField};
use crate::portal::model::{Contact, GalleryItem, NewsId};
use crate::portal::news::NewsStore;
use crate::portal::router::{Section, ViewRouter};
use crate::portal::tree::FamilyTree;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    /// `None` when the timeout is too large to represent; the message stays.
    pub expires_at: Option<Instant>,
}

pub struct AppState {
    pub config: AppConfig,
    pub router: ViewRouter,
    pub news: NewsStore,
    pub calendar: Calendar,
    pub tree: FamilyTree,
    pub contacts: Vec<Contact>,
    pub gallery: Vec<GalleryItem>,
    /// Highlighted row in the news list, the target of the delete control.
    pub news_cursor: usize,
    pub composer_field: DraftField,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let seed = config.seed.clone();
        Self {
            router: ViewRouter::default(),
            news: NewsStore::new(seed.news),
            calendar: Calendar::new(seed.events),
            tree: FamilyTree::new(seed.family),
            contacts: seed.contacts,
            gallery: seed.gallery,
            news_cursor: 0,
            composer_field: DraftField::Title,
            status: None,
            should_quit: false,
            dirty: true,
            config,
        }
    }

    pub fn current_section(&self) -> Section {
        self.router.current()
    }

    pub fn select_section(&mut self, section: Section) {
        if self.router.current() != section {
            debug!(section = section.label(), "section selected");
        }
        self.router.select(section);
        self.dirty = true;
    }

    pub fn select_next_section(&mut self) {
        self.select_section(self.router.current().next());
    }

    pub fn select_prev_section(&mut self) {
        self.select_section(self.router.current().prev());
    }

    pub fn open_composer(&mut self) {
        self.news.open_composer();
        self.composer_field = DraftField::Title;
        self.dirty = true;
    }

    pub fn close_composer(&mut self) {
        self.news.close_composer();
        self.dirty = true;
    }

    pub fn active_field_mut(&mut self) -> &mut TextField {
        self.news.draft.field_mut(self.composer_field)
    }

    pub fn focus_next_field(&mut self) {
        self.composer_field = self.composer_field.next();
        self.dirty = true;
    }

    pub fn focus_prev_field(&mut self) {
        self.composer_field = self.composer_field.prev();
        self.dirty = true;
    }

    /// Publish the draft. A successful post becomes the highlighted row.
    pub fn submit_draft(&mut self) -> Result<NewsId, DraftError> {
        self.dirty = true;
        match self.news.add_news() {
            Ok(id) => {
                self.news_cursor = 0;
                self.composer_field = DraftField::Title;
                self.set_status("Новость опубликована".to_string(), false);
                Ok(id)
            }
            Err(e) => {
                self.set_status(e.to_string(), true);
                Err(e)
            }
        }
    }

    pub fn selected_news_id(&self) -> Option<NewsId> {
        self.news.items().get(self.news_cursor).map(|item| item.id)
    }

    pub fn delete_news(&mut self, id: NewsId) -> bool {
        let removed = self.news.delete_news(id);
        if removed {
            self.clamp_news_cursor();
            self.set_status("Новость удалена".to_string(), false);
        }
        removed
    }

    pub fn delete_selected_news(&mut self) -> Option<NewsId> {
        let id = self.selected_news_id()?;
        self.delete_news(id).then_some(id)
    }

    pub fn select_prev_news(&mut self) {
        self.news_cursor = self.news_cursor.saturating_sub(1);
        self.dirty = true;
    }

    pub fn select_next_news(&mut self) {
        if self.news_cursor + 1 < self.news.len() {
            self.news_cursor += 1;
        }
        self.dirty = true;
    }

    fn clamp_news_cursor(&mut self) {
        self.news_cursor = self.news_cursor.min(self.news.len().saturating_sub(1));
        self.dirty = true;
    }

    pub fn set_status(&mut self, text: String, is_error: bool) {
        info!(status = %text, is_error, "status");
        let timeout = Duration::from_secs(self.config.ui.status_timeout_secs);
        self.status = Some(StatusMessage {
            text,
            is_error,
            expires_at: Instant::now().checked_add(timeout),
        });
        self.dirty = true;
    }

    /// Drop the status message once it has been shown long enough.
    pub fn expire_status(&mut self, now: Instant) {
        let expired = self
            .status
            .as_ref()
            .and_then(|s| s.expires_at)
            .is_some_and(|at| now >= at);
        if expired {
            self.status = None;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref status) = self.status {
            return status.text.clone();
        }
        format!(
            "Новостей: {} | Событий: {} | Родственников: {} | Поколений: {}",
            self.news.len(),
            self.calendar.events().len(),
            self.tree.members().len(),
            self.tree.generations().len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn type_into(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.active_field_mut().insert_char(c);
        }
    }

    #[test]
    fn test_new_state_is_seeded() {
        let s = state();
        assert_eq!(s.current_section(), Section::Home);
        assert_eq!(s.news.len(), 2);
        assert_eq!(s.calendar.events().len(), 4);
        assert_eq!(s.tree.members().len(), 5);
        assert_eq!(s.contacts.len(), 4);
        assert_eq!(s.gallery.len(), 6);
        assert!(!s.news.is_composer_open());
    }

    #[test]
    fn test_submit_draft_success() {
        let mut s = state();
        s.news_cursor = 1;
        s.open_composer();
        type_into(&mut s, "Отпуск");
        s.focus_next_field();
        type_into(&mut s, "Ездили на море");
        s.focus_next_field();
        type_into(&mut s, "Иван");

        let id = s.submit_draft().unwrap();
        assert_eq!(s.selected_news_id(), Some(id));
        assert!(!s.news.is_composer_open());
        assert_eq!(s.status_line(), "Новость опубликована");
    }

    #[test]
    fn test_submit_incomplete_draft_keeps_composer_open() {
        let mut s = state();
        s.open_composer();
        type_into(&mut s, "Отпуск");

        assert_eq!(s.submit_draft(), Err(DraftError::MissingContent));
        assert!(s.news.is_composer_open());
        assert_eq!(s.news.len(), 2);
        assert_eq!(s.news.draft.title.text, "Отпуск");
        assert!(s.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_delete_selected_clamps_cursor() {
        let mut s = state();
        s.select_next_news();
        assert_eq!(s.selected_news_id(), Some(2));
        assert_eq!(s.delete_selected_news(), Some(2));
        assert_eq!(s.news_cursor, 0);
        assert_eq!(s.delete_selected_news(), Some(1));
        assert!(s.news.is_empty());
        assert_eq!(s.delete_selected_news(), None);
    }

    #[test]
    fn test_news_cursor_bounds() {
        let mut s = state();
        s.select_prev_news();
        assert_eq!(s.news_cursor, 0);
        s.select_next_news();
        s.select_next_news();
        assert_eq!(s.news_cursor, 1);
    }

    #[test]
    fn test_status_expires() {
        let mut s = state();
        s.set_status("x".into(), false);
        s.expire_status(Instant::now());
        assert!(s.status.is_some());
        s.expire_status(Instant::now() + Duration::from_secs(60));
        assert!(s.status.is_none());
        assert!(s.status_line().starts_with("Новостей: 2"));
    }

    #[test]
    fn test_huge_status_timeout_never_expires() {
        let mut config = AppConfig::default();
        config.ui.status_timeout_secs = i64::MAX as u64;
        let mut s = AppState::new(config);
        s.set_status("Новость удалена".into(), false);
        assert!(s.status.as_ref().unwrap().expires_at.is_none());

        s.expire_status(Instant::now() + Duration::from_secs(3600));
        assert_eq!(s.status_line(), "Новость удалена");
    }

    #[test]
    fn test_huge_status_timeout_on_rejected_draft() {
        let mut config = AppConfig::default();
        config.ui.status_timeout_secs = u64::MAX;
        let mut s = AppState::new(config);
        s.open_composer();
        assert_eq!(s.submit_draft(), Err(DraftError::MissingTitle));
        assert!(s.status.as_ref().unwrap().is_error);
    }
}
