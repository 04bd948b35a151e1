//! Composer draft: the three uncommitted text fields of a new news post.

use thiserror::Error;

/// Why a draft cannot be published yet.
///
/// Only strict emptiness counts; whitespace-only text is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Не заполнен заголовок")]
    MissingTitle,
    #[error("Не заполнено содержание")]
    MissingContent,
    #[error("Не указан автор")]
    MissingAuthor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Content,
    Author,
}

impl DraftField {
    pub fn next(self) -> Self {
        match self {
            DraftField::Title => DraftField::Content,
            DraftField::Content => DraftField::Author,
            DraftField::Author => DraftField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            DraftField::Title => DraftField::Author,
            DraftField::Content => DraftField::Title,
            DraftField::Author => DraftField::Content,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Title => "Заголовок",
            DraftField::Content => "Содержание",
            DraftField::Author => "Автор",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            DraftField::Title => "Название события",
            DraftField::Content => "Расскажите подробнее...",
            DraftField::Author => "Ваше имя",
        }
    }
}

/// Editable text with a byte-offset cursor that always sits on a char
/// boundary.
#[derive(Debug, Default, Clone)]
pub struct TextField {
    pub text: String,
    pub cursor: usize,
}

impl TextField {
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    /// Start of the current line.
    pub fn move_home(&mut self) {
        self.cursor = self.text[..self.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    /// End of the current line.
    pub fn move_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.text.len());
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let head = &self.text[..self.cursor];
        let trimmed = head.trim_end_matches(' ');
        let start = trimmed
            .rfind(|c: char| c == ' ' || c == '\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text before the cursor on the cursor's line, and that line's index.
    pub fn cursor_line(&self) -> (usize, &str) {
        let head = &self.text[..self.cursor];
        let row = head.matches('\n').count();
        let col_text = head.rsplit('\n').next().unwrap_or("");
        (row, col_text)
    }
}

#[derive(Debug, Default, Clone)]
pub struct Draft {
    pub title: TextField,
    pub content: TextField,
    pub author: TextField,
}

impl Draft {
    pub fn field(&self, field: DraftField) -> &TextField {
        match field {
            DraftField::Title => &self.title,
            DraftField::Content => &self.content,
            DraftField::Author => &self.author,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut TextField {
        match field {
            DraftField::Title => &mut self.title,
            DraftField::Content => &mut self.content,
            DraftField::Author => &mut self.author,
        }
    }

    /// First missing field in form order, if any.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.content.is_empty() {
            return Err(DraftError::MissingContent);
        }
        if self.author.is_empty() {
            return Err(DraftError::MissingAuthor);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
        self.author.clear();
    }
}
